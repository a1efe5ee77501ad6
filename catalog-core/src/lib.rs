//! Catalog Core Library
//!
//! Client-side state for administering a library catalog (books, authors,
//! categories) served by a REST backend. The crate keeps a cache of the
//! three collections plus the selection projections that feed form inputs,
//! fills edit forms by resolving related names into ids, and reloads
//! everything after each write.

pub mod api;
pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod mutation;
pub mod notify;
pub mod sync;
pub mod types;
pub mod validate;
pub mod view;

pub use api::{CatalogApi, HttpCatalogApi};
pub use cache::{Collection, RemoteCache, SelectionState};
pub use catalog::Catalog;
pub use config::{ClientConfig, RefreshPolicy};
pub use error::{ApiError, CatalogError, Result, ValidationErrors};
pub use mutation::Outcome;
pub use notify::{Notice, NoticeLevel, Notifier};
pub use sync::{FormModal, ModalPhase};
pub use types::{
    AuthorForm, AuthorOption, AuthorRecord, BookForm, BookOption, BookRecord, CategoryForm,
    CategoryOption, CategoryRecord, EntityKind, FormValues, Payload, Record, Selections,
};
pub use validate::ValidationRules;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forms_map_to_matching_payloads() {
        let form = FormValues::Category(CategoryForm {
            name: "Sci-Fi".to_string(),
            book_ids: vec![1, 2],
        });
        let payload = form.payload();
        assert_eq!(payload.kind(), EntityKind::Category);
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            serde_json::json!({"name": "Sci-Fi", "bookIds": [1, 2]})
        );
    }
}
