//! Create/edit modal and delete prompt state.

use catalog_client::ProductRepository;
use catalog_core::dates::paired_revision_date;
use catalog_core::validation::live::{description_feedback, id_feedback};
use catalog_core::validation::{self, FieldErrors};
use catalog_core::{FormMode, Product, ProductDraft};
use chrono::Local;

use super::CatalogViewModel;

impl<R: ProductRepository> CatalogViewModel<R> {
    /// Open an empty form in create mode.
    pub fn open_create_modal(&mut self) {
        self.reset_form();
        self.modal_open = true;
    }

    /// Open the form prefilled with `record`, in edit mode.
    pub fn edit_record(&mut self, record: &Product) {
        self.menu.close();
        self.mode = FormMode::Edit;
        self.editing_id = Some(record.id.clone());
        self.draft = ProductDraft::from_product(record);
        self.errors.reset();
        self.modal_open = true;
    }

    /// Close the form and discard the draft.
    pub fn close_modal(&mut self) {
        self.modal_open = false;
        self.reset_form();
    }

    /// Close the form only if the click landed on the overlay itself.
    pub fn close_modal_on_overlay(&mut self, target_is_overlay: bool) {
        if target_is_overlay {
            self.close_modal();
        }
    }

    /// Empty draft, no errors, create mode.
    pub fn reset_form(&mut self) {
        self.draft = ProductDraft::default();
        self.errors.reset();
        self.mode = FormMode::Create;
        self.editing_id = None;
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn form_mode(&self) -> FormMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        self.mode.is_editing()
    }

    pub fn draft(&self) -> &ProductDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut ProductDraft {
        &mut self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Run every rule against the draft, replacing all field errors.
    ///
    /// Returns whether the draft is valid.
    pub fn validate_draft(&mut self) -> bool {
        let today = Local::now().date_naive();
        self.errors = validation::validate_draft(&self.draft, self.mode, today);
        self.errors.is_valid()
    }

    /// Enables the submit control. Presence only.
    pub fn is_draft_form_valid(&self) -> bool {
        self.draft.has_required_fields()
    }

    pub fn on_description_change(&mut self, value: &str) {
        self.draft.description = Some(value.to_string());
        self.errors.description = description_feedback(value);
    }

    /// Ignored while editing: the id of an existing record never changes.
    pub fn on_product_id_change(&mut self, value: &str) {
        if self.mode.is_editing() {
            return;
        }
        self.draft.id = Some(value.to_string());
        if let Some(feedback) = id_feedback(value, &self.records, self.mode) {
            self.errors.id = feedback;
        }
    }

    /// Store the release date and derive the revision date one year later.
    pub fn on_release_date_change(&mut self, value: &str) {
        self.draft.release_date = Some(value.to_string());
        self.draft.revision_date = Some(paired_revision_date(value));
    }

    // ---- delete prompt ----

    /// Stage `record` for deletion and ask for confirmation.
    pub fn delete_product(&mut self, record: &Product) {
        self.menu.close();
        self.staged_delete = Some(record.clone());
        self.delete_prompt_open = true;
    }

    pub fn close_delete_modal(&mut self) {
        self.delete_prompt_open = false;
        self.staged_delete = None;
    }

    pub fn close_delete_modal_on_overlay(&mut self, target_is_overlay: bool) {
        if target_is_overlay {
            self.close_delete_modal();
        }
    }

    pub fn is_delete_prompt_open(&self) -> bool {
        self.delete_prompt_open
    }

    pub fn staged_delete(&self) -> Option<&Product> {
        self.staged_delete.as_ref()
    }
}
