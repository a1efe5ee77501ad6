//! Mutation coordinator
//!
//! Writes go through validation, then the backend, then an unconditional
//! reload of every collection and every selection projection. The coordinator
//! never works out which entities a write touched.

use crate::api::CatalogApi;
use crate::catalog::Catalog;
use crate::config::RefreshPolicy;
use crate::error::ValidationErrors;
use crate::notify::Notice;
use crate::types::{EntityKind, FormValues};

/// How a create, update or delete ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Acknowledged by the backend
    Saved,

    /// Rejected before any request was sent
    Invalid(ValidationErrors),

    /// The backend refused or could not be reached
    Failed(String),
}

impl Outcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, Outcome::Saved)
    }
}

impl<A: CatalogApi> Catalog<A> {
    /// Create (`existing_id == None`) or update a record from form values
    pub async fn submit(&mut self, existing_id: Option<i64>, values: FormValues) -> Outcome {
        let kind = values.kind();

        if let Err(errors) = self.rules.check(&values) {
            tracing::debug!("{} form rejected: {}", kind.label(), errors);
            self.modals.get_mut(kind).reject(values, errors.clone());
            return Outcome::Invalid(errors);
        }

        let payload = values.payload();
        self.modals.get_mut(kind).begin_submit(values);

        let result = match existing_id {
            Some(id) => self.api.update(kind, id, &payload).await,
            None => self.api.create(kind, &payload).await,
        };

        match result {
            Ok(()) => {
                let verb = if existing_id.is_some() { "updated" } else { "added" };
                self.modals.get_mut(kind).finish_success();
                self.notify(Notice::success(format!(
                    "{} {} successfully!",
                    kind.label(),
                    verb
                )));
                self.after_mutation().await;
                Outcome::Saved
            }
            Err(e) => {
                let msg = e.user_message();
                self.notify(Notice::error(format!(
                    "Failed to save {}: {}",
                    kind.label().to_lowercase(),
                    msg
                )));
                self.modals.get_mut(kind).finish_failure(msg.clone());
                Outcome::Failed(msg)
            }
        }
    }

    /// Submit whatever the open dialog for `kind` currently holds
    pub async fn submit_open(&mut self, kind: EntityKind) -> Outcome {
        let modal = self.modals.get(kind);
        let existing_id = modal.editing_id();
        match modal.values().cloned() {
            Some(values) => self.submit(existing_id, values).await,
            None => Outcome::Failed(format!(
                "The {} form is not ready yet",
                kind.label().to_lowercase()
            )),
        }
    }

    /// Delete a record. Nothing was changed optimistically, so a failure
    /// only raises a notice.
    pub async fn remove(&mut self, kind: EntityKind, id: i64) -> Outcome {
        match self.api.delete(kind, id).await {
            Ok(()) => {
                self.notify(Notice::success(format!(
                    "{} deleted successfully!",
                    kind.label()
                )));
                self.after_mutation().await;
                Outcome::Saved
            }
            Err(e) => {
                let msg = e.user_message();
                self.notify(Notice::error(format!(
                    "Failed to delete {}: {}",
                    kind.label(),
                    msg
                )));
                Outcome::Failed(msg)
            }
        }
    }

    async fn after_mutation(&mut self) {
        if self.config.refresh_policy == RefreshPolicy::Full {
            self.load().await;
        }
    }
}
