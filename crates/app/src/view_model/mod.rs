//! The catalog view-model.
//!
//! [`CatalogViewModel`] owns the loaded records, the search term, paging,
//! the create/edit form and the delete prompt, and runs the save and delete
//! workflows against a [`ProductRepository`]. A rendering surface reads its
//! accessors and calls its mutators; nothing here draws anything.
//!
//! The filtered list is recomputed from `records` and the search term on
//! every search; the visible page is always sliced from it on demand.

mod form;
mod workflow;

use catalog_client::ProductRepository;
use catalog_core::dates;
use catalog_core::pagination::{PageInfo, Pager};
use catalog_core::search::{filter_products, normalize_term};
use catalog_core::types::{ProductId, Timestamp};
use catalog_core::validation::FieldErrors;
use catalog_core::{FormMode, Product, ProductDraft};
use catalog_events::{ScopedSubscription, UiEventBus};

use crate::menu::{AnchorRect, ContextMenu, MenuPosition, ScrollOffset};
use crate::toast::{Toast, Toaster};

pub use workflow::{
    DeleteOutcome, SaveOutcome, SaveStage, PRODUCT_CREATED, PRODUCT_DELETED, PRODUCT_UPDATED,
};

pub struct CatalogViewModel<R> {
    repository: R,

    records: Vec<Product>,
    filtered: Vec<Product>,
    search_term: String,
    pager: Pager,
    is_loading: bool,
    is_saving: bool,
    save_stage: SaveStage,

    modal_open: bool,
    mode: FormMode,
    /// Id of the record being edited; the draft's id is ignored on update.
    editing_id: Option<ProductId>,
    draft: ProductDraft,
    errors: FieldErrors,

    delete_prompt_open: bool,
    staged_delete: Option<Product>,

    toaster: Toaster,
    menu: ContextMenu,
}

impl<R: ProductRepository> CatalogViewModel<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            records: Vec::new(),
            filtered: Vec::new(),
            search_term: String::new(),
            pager: Pager::default(),
            is_loading: false,
            is_saving: false,
            save_stage: SaveStage::Idle,
            modal_open: false,
            mode: FormMode::Create,
            editing_id: None,
            draft: ProductDraft::default(),
            errors: FieldErrors::default(),
            delete_prompt_open: false,
            staged_delete: None,
            toaster: Toaster::default(),
            menu: ContextMenu::default(),
        }
    }

    /// Start with a page size other than the default.
    pub fn with_items_per_page(mut self, items_per_page: usize) -> Self {
        self.on_items_per_page_change(items_per_page);
        self
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    // ---- loading ----

    /// Initial load when the view is mounted.
    pub async fn init(&mut self) {
        self.load().await;
    }

    /// Fetch the full record set and re-run the search.
    ///
    /// On failure the current records are kept and the error is only
    /// logged. The search runs either way, so paging is back on page 1.
    pub async fn load(&mut self) {
        self.is_loading = true;
        match self.repository.list_products().await {
            Ok(products) => {
                tracing::info!(count = products.len(), "Catalog loaded");
                self.records = products;
            }
            Err(e) => {
                tracing::error!(error = %e, status = ?e.status(), "Failed to load catalog");
            }
        }
        self.perform_search();
        self.is_loading = false;
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Placeholder rows to draw while loading.
    pub fn skeleton_rows(&self) -> usize {
        self.pager.items_per_page()
    }

    pub fn records(&self) -> &[Product] {
        &self.records
    }

    // ---- search ----

    /// Store the lower-cased term. Takes effect on [`Self::perform_search`].
    pub fn set_search_term(&mut self, raw: &str) {
        self.search_term = normalize_term(raw);
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Recompute the filtered list and go back to page 1.
    pub fn perform_search(&mut self) {
        self.filtered = filter_products(&self.records, &self.search_term);
        self.pager.reset();
        tracing::debug!(
            term = %self.search_term,
            matches = self.filtered.len(),
            "Search performed"
        );
    }

    pub fn filtered_records(&self) -> &[Product] {
        &self.filtered
    }

    pub fn has_results(&self) -> bool {
        !self.filtered.is_empty()
    }

    // ---- pagination ----

    pub fn paged_records(&self) -> &[Product] {
        self.pager.slice(&self.filtered)
    }

    pub fn current_page(&self) -> usize {
        self.pager.current_page()
    }

    pub fn items_per_page(&self) -> usize {
        self.pager.items_per_page()
    }

    pub fn total_pages(&self) -> usize {
        self.pager.total_pages(self.filtered.len())
    }

    pub fn is_first_page(&self) -> bool {
        self.pager.is_first()
    }

    pub fn is_last_page(&self) -> bool {
        self.pager.is_last(self.filtered.len())
    }

    pub fn pagination_info(&self) -> PageInfo {
        self.pager.info(self.filtered.len())
    }

    pub fn visible_page_window(&self) -> Vec<usize> {
        self.pager.visible_window(self.filtered.len())
    }

    /// Returns whether the page changed; out-of-range pages are ignored.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        self.pager.go_to(page, self.filtered.len())
    }

    pub fn previous_page(&mut self) -> bool {
        self.pager.previous(self.filtered.len())
    }

    pub fn next_page(&mut self) -> bool {
        self.pager.next(self.filtered.len())
    }

    /// Change the page size and go back to page 1. Zero is ignored.
    pub fn on_items_per_page_change(&mut self, items_per_page: usize) {
        if let Err(e) = self.pager.set_items_per_page(items_per_page) {
            tracing::warn!(items_per_page, error = %e, "Ignoring page size change");
        }
    }

    // ---- toast ----

    pub fn toast(&self) -> Option<Toast> {
        self.toaster.current()
    }

    pub fn toaster(&self) -> &Toaster {
        &self.toaster
    }

    // ---- action menu ----

    pub fn toggle_menu(&self, id: &str, anchor: AnchorRect, scroll: ScrollOffset) -> bool {
        self.menu.toggle(id, anchor, scroll)
    }

    pub fn close_menu(&self) {
        self.menu.close();
    }

    pub fn open_menu_id(&self) -> Option<String> {
        self.menu.open_id()
    }

    pub fn menu_position(&self) -> Option<MenuPosition> {
        self.menu.position()
    }

    pub fn menu(&self) -> &ContextMenu {
        &self.menu
    }

    /// The record whose menu is open, falling back to the first record.
    pub fn current_menu_record(&self) -> Option<&Product> {
        let open = self.menu.open_id();
        self.records
            .iter()
            .find(|p| open.as_deref() == Some(p.id.as_str()))
            .or_else(|| self.records.first())
    }

    /// Close the menu on outside clicks for as long as the guard is held.
    pub fn attach_outside_click(&self, bus: &UiEventBus) -> ScopedSubscription {
        self.menu.dismiss_on_outside_click(bus)
    }

    /// `dd/mm/yyyy`, or an empty string when there is no date.
    pub fn format_date_for_table(date: Option<&Timestamp>) -> String {
        dates::format_for_table(date)
    }
}
