//! In-memory `CatalogApi` double with call counters and failure switches

#![allow(dead_code)]

use async_trait::async_trait;
use catalog_core::error::{ApiError, Result};
use catalog_core::{
    AuthorRecord, BookRecord, CatalogApi, CategoryRecord, EntityKind, Payload,
};
use serde_json::{json, Value};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

/// A write the double received
#[derive(Debug, Clone, PartialEq)]
pub struct Write {
    pub method: &'static str,
    pub kind: EntityKind,
    pub id: Option<i64>,
    pub body: Value,
}

#[derive(Debug, Default)]
struct State {
    books: Vec<BookRecord>,
    authors: Vec<AuthorRecord>,
    categories: Vec<CategoryRecord>,
    next_id: i64,
    calls: HashMap<String, usize>,
    failing: HashSet<String>,
    write_error: Option<ApiError>,
    writes: Vec<Write>,
}

#[derive(Debug, Clone, Default)]
pub struct MockApi {
    state: Arc<Mutex<State>>,
}

impl MockApi {
    /// Two authors, two categories, one book
    pub fn seeded() -> Self {
        let api = Self::default();
        {
            let mut state = api.state.lock().unwrap();
            state.authors = vec![
                AuthorRecord {
                    id: 1,
                    author_name: "Herbert".to_string(),
                    books: vec!["Dune".to_string()],
                },
                AuthorRecord::new(2, "Le Guin"),
            ];
            state.categories = vec![
                CategoryRecord::new(10, "Sci-Fi").with_book("Dune"),
                CategoryRecord::new(11, "Fantasy"),
            ];
            state.books = vec![BookRecord::new(100, "Dune")
                .with_author("Herbert")
                .with_category("Sci-Fi")];
            state.next_id = 1000;
        }
        api
    }

    /// Make `"GET books"`, `"PUT authors"` etc. answer 500
    pub fn fail(&self, endpoint: &str) {
        self.state.lock().unwrap().failing.insert(endpoint.to_string());
    }

    pub fn recover(&self, endpoint: &str) {
        self.state.lock().unwrap().failing.remove(endpoint);
    }

    /// Answer every write with this error
    pub fn reject_writes(&self, error: ApiError) {
        self.state.lock().unwrap().write_error = Some(error);
    }

    pub fn calls(&self, endpoint: &str) -> usize {
        self.state
            .lock()
            .unwrap()
            .calls
            .get(endpoint)
            .copied()
            .unwrap_or(0)
    }

    pub fn writes(&self) -> Vec<Write> {
        self.state.lock().unwrap().writes.clone()
    }

    pub fn add_author(&self, record: AuthorRecord) {
        self.state.lock().unwrap().authors.push(record);
    }

    fn enter(&self, endpoint: String) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        *state.calls.entry(endpoint.clone()).or_default() += 1;
        if state.failing.contains(&endpoint) {
            return Err(ApiError::new(500, Some("Internal Server Error".into()), json!("boom")).into());
        }
        Ok(())
    }

    fn record_write(
        &self,
        method: &'static str,
        kind: EntityKind,
        id: Option<i64>,
        payload: Option<&Payload>,
    ) -> Result<()> {
        self.enter(format!("{} {}", method, kind.path()))?;
        let mut state = self.state.lock().unwrap();
        state.writes.push(Write {
            method,
            kind,
            id,
            body: payload
                .map(|p| serde_json::to_value(p).unwrap())
                .unwrap_or(Value::Null),
        });
        if let Some(err) = state.write_error.clone() {
            return Err(err.into());
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogApi for MockApi {
    async fn list_books(&self) -> Result<Vec<BookRecord>> {
        self.enter("GET books".to_string())?;
        Ok(self.state.lock().unwrap().books.clone())
    }

    async fn list_authors(&self) -> Result<Vec<AuthorRecord>> {
        self.enter("GET authors".to_string())?;
        Ok(self.state.lock().unwrap().authors.clone())
    }

    async fn list_categories(&self) -> Result<Vec<CategoryRecord>> {
        self.enter("GET categories".to_string())?;
        Ok(self.state.lock().unwrap().categories.clone())
    }

    async fn create(&self, kind: EntityKind, payload: &Payload) -> Result<()> {
        self.record_write("POST", kind, None, Some(payload))?;
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let id = state.next_id;
        match payload {
            Payload::Book(p) => {
                let author_name = p
                    .author_id
                    .and_then(|a| state.authors.iter().find(|x| x.id == a))
                    .map(|a| a.author_name.clone());
                state.books.push(BookRecord {
                    id,
                    book_name: p.name.clone(),
                    author_name,
                    categories: Vec::new(),
                });
            }
            Payload::Author(p) => state.authors.push(AuthorRecord::new(id, p.name.clone())),
            Payload::Category(p) => state
                .categories
                .push(CategoryRecord::new(id, p.name.clone())),
        }
        Ok(())
    }

    async fn update(&self, kind: EntityKind, id: i64, payload: &Payload) -> Result<()> {
        self.record_write("PUT", kind, Some(id), Some(payload))?;
        let mut state = self.state.lock().unwrap();
        match payload {
            Payload::Author(p) => {
                if let Some(a) = state.authors.iter_mut().find(|a| a.id == id) {
                    a.author_name = p.author_name.clone();
                }
            }
            Payload::Book(p) => {
                if let Some(b) = state.books.iter_mut().find(|b| b.id == id) {
                    b.book_name = p.book_name.clone();
                }
            }
            Payload::Category(p) => {
                if let Some(c) = state.categories.iter_mut().find(|c| c.id == id) {
                    c.name = p.name.clone();
                }
            }
        }
        Ok(())
    }

    async fn delete(&self, kind: EntityKind, id: i64) -> Result<()> {
        self.record_write("DELETE", kind, Some(id), None)?;
        let mut state = self.state.lock().unwrap();
        match kind {
            EntityKind::Book => state.books.retain(|b| b.id != id),
            EntityKind::Author => state.authors.retain(|a| a.id != id),
            EntityKind::Category => state.categories.retain(|c| c.id != id),
        }
        Ok(())
    }
}
