//! Book record, form and payload

use super::nullable_list;
use serde::{Deserialize, Serialize};

/// A book as returned by `GET /books`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRecord {
    /// Server-assigned identifier
    pub id: i64,

    /// Book title
    pub book_name: String,

    /// Name of the author, absent when the book has none
    #[serde(default)]
    pub author_name: Option<String>,

    /// Names of the categories the book belongs to
    #[serde(default, deserialize_with = "nullable_list")]
    pub categories: Vec<String>,
}

impl BookRecord {
    pub fn new(id: i64, book_name: impl Into<String>) -> Self {
        Self {
            id,
            book_name: book_name.into(),
            author_name: None,
            categories: Vec::new(),
        }
    }

    pub fn with_author(mut self, author_name: impl Into<String>) -> Self {
        self.author_name = Some(author_name.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.categories.push(category.into());
        self
    }
}

/// Editable values of the book form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookForm {
    pub name: String,
    pub author_id: Option<i64>,
    pub category_ids: Vec<i64>,
}

/// Write body for `POST /books` and `PUT /books/{id}`.
///
/// Create reads `name`/`categoryIds`, update reads `bookName`/`categoriesIds`,
/// so both pairs are always sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_id: Option<i64>,
    pub name: String,
    pub category_ids: Vec<i64>,
    pub book_name: String,
    pub categories_ids: Vec<i64>,
}

impl From<&BookForm> for BookPayload {
    fn from(form: &BookForm) -> Self {
        Self {
            author_id: form.author_id,
            name: form.name.clone(),
            category_ids: form.category_ids.clone(),
            book_name: form.name.clone(),
            categories_ids: form.category_ids.clone(),
        }
    }
}
