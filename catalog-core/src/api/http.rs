//! reqwest-backed implementation of `CatalogApi`

use super::CatalogApi;
use crate::config::ClientConfig;
use crate::error::{ApiError, Result};
use crate::types::{AuthorRecord, BookRecord, CategoryRecord, EntityKind, Payload};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// HTTP client for the catalog backend
#[derive(Debug, Clone)]
pub struct HttpCatalogApi {
    client: Client,
    config: ClientConfig,
}

impl HttpCatalogApi {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn get_list<T: DeserializeOwned>(&self, kind: EntityKind) -> Result<Vec<T>> {
        let url = self.config.url(kind.path());
        tracing::debug!("GET {}", url);
        let response = check(self.client.get(&url).send().await?).await?;

        // An empty or null body is an empty collection
        let bytes = response.bytes().await?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }
        let items: Option<Vec<T>> = serde_json::from_slice(&bytes)
            .map_err(|e| crate::CatalogError::Decode(format!("{} response: {}", kind, e)))?;
        Ok(items.unwrap_or_default())
    }
}

/// Turn a non-success response into an `ApiError`, keeping its body
async fn check(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    let body = if text.trim().is_empty() {
        Value::Null
    } else {
        serde_json::from_str(&text).unwrap_or(Value::String(text))
    };

    Err(ApiError::new(
        status.as_u16(),
        status.canonical_reason().map(str::to_string),
        body,
    )
    .into())
}

#[async_trait]
impl CatalogApi for HttpCatalogApi {
    async fn list_books(&self) -> Result<Vec<BookRecord>> {
        self.get_list(EntityKind::Book).await
    }

    async fn list_authors(&self) -> Result<Vec<AuthorRecord>> {
        self.get_list(EntityKind::Author).await
    }

    async fn list_categories(&self) -> Result<Vec<CategoryRecord>> {
        self.get_list(EntityKind::Category).await
    }

    async fn create(&self, kind: EntityKind, payload: &Payload) -> Result<()> {
        let url = self.config.url(kind.path());
        tracing::debug!("POST {}", url);
        check(self.client.post(&url).json(payload).send().await?).await?;
        Ok(())
    }

    async fn update(&self, kind: EntityKind, id: i64, payload: &Payload) -> Result<()> {
        let url = self.config.url(&format!("{}/{}", kind.path(), id));
        tracing::debug!("PUT {}", url);
        check(self.client.put(&url).json(payload).send().await?).await?;
        Ok(())
    }

    async fn delete(&self, kind: EntityKind, id: i64) -> Result<()> {
        let url = self.config.url(&format!("{}/{}", kind.path(), id));
        tracing::debug!("DELETE {}", url);
        check(self.client.delete(&url).send().await?).await?;
        Ok(())
    }
}
