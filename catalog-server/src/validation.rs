//! Request bodies and their constraints.
//!
//! Create and update bodies use different field names on purpose; clients
//! send both spellings.

use crate::error::{ApiError, ApiResult};
use serde::Deserialize;
use std::collections::BTreeMap;

pub const BOOK_NAME_MAX: usize = 20;
pub const AUTHOR_CREATE_NAME_MAX: usize = 20;
pub const AUTHOR_UPDATE_NAME_MAX: usize = 40;
pub const CATEGORY_NAME_MAX: usize = 40;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookCreate {
    pub name: Option<String>,
    pub author_id: Option<i64>,
    pub category_ids: Option<Vec<i64>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookUpdate {
    pub book_name: Option<String>,
    pub author_id: Option<i64>,
    pub categories_ids: Option<Vec<i64>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AuthorCreate {
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorUpdate {
    pub author_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryWrite {
    pub name: Option<String>,
    pub book_ids: Option<Vec<i64>>,
}

/// A validated book write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookInput {
    pub name: String,
    pub author_id: Option<i64>,
    pub category_ids: Option<Vec<i64>>,
}

/// A validated category write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryInput {
    pub name: String,
    pub book_ids: Option<Vec<i64>>,
}

#[derive(Default)]
struct Errors(BTreeMap<String, String>);

impl Errors {
    fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_insert_with(|| message.into());
    }

    fn name(&mut self, field: &str, value: Option<&str>, max: Option<usize>) -> String {
        let value = value.unwrap_or_default();
        if value.trim().is_empty() {
            self.add(field, "must not be blank");
        } else if let Some(max) = max {
            if value.chars().count() > max {
                self.add(field, format!("size must be between 1 and {}", max));
            }
        }
        value.to_string()
    }

    fn positive_ids(&mut self, field: &str, ids: &Option<Vec<i64>>) {
        if ids.as_ref().is_some_and(|ids| ids.iter().any(|id| *id <= 0)) {
            self.add(field, "ids must be positive");
        }
    }

    fn finish<T>(self, value: T) -> ApiResult<T> {
        if self.0.is_empty() {
            Ok(value)
        } else {
            Err(ApiError::Validation(self.0))
        }
    }
}

impl BookCreate {
    pub fn validate(self) -> ApiResult<BookInput> {
        let mut errors = Errors::default();
        let name = errors.name("name", self.name.as_deref(), None);
        match self.author_id {
            None => errors.add("authorId", "must not be null"),
            Some(id) if id <= 0 => errors.add("authorId", "must be greater than 0"),
            Some(_) => {}
        }
        if self.category_ids.is_none() {
            errors.add("categoryIds", "must not be null");
        }
        errors.positive_ids("categoryIds", &self.category_ids);
        errors.finish(BookInput {
            name,
            author_id: self.author_id,
            category_ids: self.category_ids,
        })
    }
}

impl BookUpdate {
    pub fn validate(self) -> ApiResult<BookInput> {
        let mut errors = Errors::default();
        let name = errors.name("bookName", self.book_name.as_deref(), Some(BOOK_NAME_MAX));
        if self.author_id.is_some_and(|id| id <= 0) {
            errors.add("authorId", "must be greater than 0");
        }
        errors.positive_ids("categoriesIds", &self.categories_ids);
        errors.finish(BookInput {
            name,
            author_id: self.author_id,
            category_ids: self.categories_ids,
        })
    }
}

impl AuthorCreate {
    pub fn validate(self) -> ApiResult<String> {
        let mut errors = Errors::default();
        let name = errors.name("name", self.name.as_deref(), Some(AUTHOR_CREATE_NAME_MAX));
        errors.finish(name)
    }
}

impl AuthorUpdate {
    pub fn validate(self) -> ApiResult<String> {
        let mut errors = Errors::default();
        let name = errors.name(
            "authorName",
            self.author_name.as_deref(),
            Some(AUTHOR_UPDATE_NAME_MAX),
        );
        errors.finish(name)
    }
}

impl CategoryWrite {
    pub fn validate(self) -> ApiResult<CategoryInput> {
        let mut errors = Errors::default();
        let name = errors.name("name", self.name.as_deref(), Some(CATEGORY_NAME_MAX));
        errors.positive_ids("bookIds", &self.book_ids);
        errors.finish(CategoryInput {
            name,
            book_ids: self.book_ids,
        })
    }
}
