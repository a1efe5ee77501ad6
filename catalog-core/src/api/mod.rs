//! Transport abstraction for the catalog REST backend

mod http;

pub use http::HttpCatalogApi;

use crate::error::Result;
use crate::types::{AuthorRecord, BookRecord, CategoryRecord, EntityKind, Payload};
use async_trait::async_trait;

/// Operations the backend exposes to the client.
///
/// Implementations only move data; caching, validation and refresh
/// decisions live above this trait.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// `GET /books`
    async fn list_books(&self) -> Result<Vec<BookRecord>>;

    /// `GET /authors`
    async fn list_authors(&self) -> Result<Vec<AuthorRecord>>;

    /// `GET /categories`
    async fn list_categories(&self) -> Result<Vec<CategoryRecord>>;

    /// `POST /{entity}`
    async fn create(&self, kind: EntityKind, payload: &Payload) -> Result<()>;

    /// `PUT /{entity}/{id}`
    async fn update(&self, kind: EntityKind, id: i64, payload: &Payload) -> Result<()>;

    /// `DELETE /{entity}/{id}`
    async fn delete(&self, kind: EntityKind, id: i64) -> Result<()>;
}

#[async_trait]
impl<T: CatalogApi + ?Sized> CatalogApi for std::sync::Arc<T> {
    async fn list_books(&self) -> Result<Vec<BookRecord>> {
        (**self).list_books().await
    }

    async fn list_authors(&self) -> Result<Vec<AuthorRecord>> {
        (**self).list_authors().await
    }

    async fn list_categories(&self) -> Result<Vec<CategoryRecord>> {
        (**self).list_categories().await
    }

    async fn create(&self, kind: EntityKind, payload: &Payload) -> Result<()> {
        (**self).create(kind, payload).await
    }

    async fn update(&self, kind: EntityKind, id: i64, payload: &Payload) -> Result<()> {
        (**self).update(kind, id, payload).await
    }

    async fn delete(&self, kind: EntityKind, id: i64) -> Result<()> {
        (**self).delete(kind, id).await
    }
}
