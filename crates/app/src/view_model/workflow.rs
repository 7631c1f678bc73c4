//! Save and delete workflows.
//!
//! Both run as straight-line async sequences. A save moves through
//! [`SaveStage::Checking`] (create only) and [`SaveStage::Mutating`] before
//! ending in [`SaveStage::Settled`]; the id check always finishes before the
//! create call is issued.

use catalog_client::{Operation, ProductRepository, RepositoryError};
use catalog_core::validation::rules::ID_ALREADY_EXISTS;
use catalog_core::validation::FieldError;
use catalog_core::Product;
use chrono::Utc;

use super::CatalogViewModel;
use crate::toast::{ToastKind, DELETE_ERROR_TOAST_DURATION};

pub const PRODUCT_CREATED: &str = "Producto agregado correctamente";
pub const PRODUCT_UPDATED: &str = "Producto actualizado correctamente";
pub const PRODUCT_DELETED: &str = "Producto eliminado correctamente";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SaveStage {
    #[default]
    Idle,
    /// Asking the backend whether the new id is taken.
    Checking,
    /// Create or update call in flight.
    Mutating,
    Settled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Local validation failed; nothing was sent.
    Invalid,
    /// The backend already has a product with this id.
    IdTaken,
    Created(Product),
    Updated(Product),
    /// The mutation failed; carries the message shown to the user.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    NothingStaged,
    Deleted(Product),
    Failed(String),
}

impl<R: ProductRepository> CatalogViewModel<R> {
    pub fn is_saving(&self) -> bool {
        self.is_saving
    }

    pub fn save_stage(&self) -> SaveStage {
        self.save_stage
    }

    /// Validate and submit the draft.
    ///
    /// Validation failures and a taken id stay on the form as field errors.
    /// Any other failure becomes an error toast and leaves the form open.
    pub async fn save_draft(&mut self) -> SaveOutcome {
        self.save_stage = SaveStage::Idle;
        if !self.validate_draft() {
            tracing::debug!(fields = ?self.errors.invalid_fields(), "Draft rejected");
            return SaveOutcome::Invalid;
        }

        self.is_saving = true;
        let outcome = self.submit_draft().await;
        self.is_saving = false;
        self.save_stage = SaveStage::Settled;
        outcome
    }

    async fn submit_draft(&mut self) -> SaveOutcome {
        let editing = self.mode.is_editing();

        if !editing {
            self.save_stage = SaveStage::Checking;
            let id = self.draft.id.clone().unwrap_or_default();
            match self.repository.product_id_exists(&id).await {
                Ok(true) => {
                    self.errors.id = FieldError::invalid(ID_ALREADY_EXISTS);
                    return SaveOutcome::IdTaken;
                }
                Ok(false) => {}
                Err(e) => {
                    // The create call reports a real conflict on its own.
                    tracing::warn!(id = %id, error = %e, "Id check failed, creating anyway");
                }
            }
        }

        let operation = if editing { Operation::Update } else { Operation::Create };
        let product = match self.draft.to_product(Utc::now()) {
            Ok(mut product) => {
                if let Some(id) = self.editing_id.as_ref().filter(|_| editing) {
                    product.id = id.clone();
                }
                product
            }
            Err(e) => {
                tracing::error!(error = %e, "Draft could not be converted");
                return self.save_failed(operation.fallback_message().to_string());
            }
        };

        self.save_stage = SaveStage::Mutating;
        let result = if editing {
            self.repository.update_product(&product).await
        } else {
            self.repository.create_product(&product).await
        };

        match result {
            Ok(saved) => {
                self.load().await;
                self.close_modal();
                if editing {
                    self.toaster.show(PRODUCT_UPDATED, ToastKind::Success);
                    SaveOutcome::Updated(saved)
                } else {
                    self.toaster.show(PRODUCT_CREATED, ToastKind::Success);
                    SaveOutcome::Created(saved)
                }
            }
            Err(e) => self.save_failed(user_message(&e)),
        }
    }

    fn save_failed(&mut self, message: String) -> SaveOutcome {
        self.toaster.show(message.clone(), ToastKind::Error);
        SaveOutcome::Failed(message)
    }

    /// Delete the staged record.
    ///
    /// On failure the prompt stays open so the user can retry or cancel,
    /// and the error toast clears sooner than usual.
    pub async fn confirm_delete(&mut self) -> DeleteOutcome {
        let Some(record) = self.staged_delete.clone() else {
            return DeleteOutcome::NothingStaged;
        };

        self.is_saving = true;
        let result = self.repository.delete_product(&record.id).await;
        self.is_saving = false;

        match result {
            Ok(()) => {
                self.records.retain(|p| p.id != record.id);
                self.perform_search();
                self.toaster.show(PRODUCT_DELETED, ToastKind::Success);
                self.close_delete_modal();
                DeleteOutcome::Deleted(record)
            }
            Err(e) => {
                let message = user_message(&e);
                self.toaster
                    .show_for(message.clone(), ToastKind::Error, DELETE_ERROR_TOAST_DURATION);
                DeleteOutcome::Failed(message)
            }
        }
    }
}

fn user_message(error: &RepositoryError) -> String {
    let message = error.to_string();
    if message.trim().is_empty() {
        error.operation().fallback_message().to_string()
    } else {
        message
    }
}
