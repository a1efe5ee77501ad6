//! Category record, form and payload

use super::nullable_list;
use serde::{Deserialize, Serialize};

/// A category as returned by `GET /categories`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRecord {
    pub id: i64,
    pub name: String,

    /// Titles of the books in this category (server derived)
    #[serde(default, deserialize_with = "nullable_list")]
    pub books: Vec<String>,
}

impl CategoryRecord {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            books: Vec::new(),
        }
    }

    pub fn with_book(mut self, book: impl Into<String>) -> Self {
        self.books.push(book.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryForm {
    pub name: String,
    pub book_ids: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPayload {
    pub name: String,
    pub book_ids: Vec<i64>,
}

impl From<&CategoryForm> for CategoryPayload {
    fn from(form: &CategoryForm) -> Self {
        Self {
            name: form.name.clone(),
            book_ids: form.book_ids.clone(),
        }
    }
}
