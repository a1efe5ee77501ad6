//! Author record, form and payload

use super::nullable_list;
use serde::{Deserialize, Serialize};

/// An author as returned by `GET /authors`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorRecord {
    pub id: i64,
    pub author_name: String,

    /// Titles of the author's books (server derived)
    #[serde(default, deserialize_with = "nullable_list")]
    pub books: Vec<String>,
}

impl AuthorRecord {
    pub fn new(id: i64, author_name: impl Into<String>) -> Self {
        Self {
            id,
            author_name: author_name.into(),
            books: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorForm {
    pub name: String,
}

/// Write body for authors; update reads `authorName`, create reads `name`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorPayload {
    pub name: String,
    pub author_name: String,
}

impl From<&AuthorForm> for AuthorPayload {
    fn from(form: &AuthorForm) -> Self {
        Self {
            name: form.name.clone(),
            author_name: form.name.clone(),
        }
    }
}
