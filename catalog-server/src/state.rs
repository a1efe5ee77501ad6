//! Application state

use crate::error::{ApiError, ApiResult};
use crate::validation::{BookInput, CategoryInput};
use catalog_core::{AuthorRecord, BookRecord, CategoryRecord};
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared application state
#[derive(Clone, Default)]
pub struct AppState {
    /// In-memory catalog (would be a database in production)
    pub store: Arc<RwLock<Store>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone)]
struct BookRow {
    name: String,
    author_id: Option<i64>,
    category_ids: Vec<i64>,
}

/// Books, authors and categories with their links.
///
/// Authors own their books; categories and books link many-to-many. Read
/// views embed related names, as the list endpoints do.
#[derive(Debug, Default)]
pub struct Store {
    books: BTreeMap<i64, BookRow>,
    authors: BTreeMap<i64, String>,
    categories: BTreeMap<i64, String>,
    last_id: i64,
}

impl Store {
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }

    fn book_view(&self, id: i64, row: &BookRow) -> BookRecord {
        BookRecord {
            id,
            book_name: row.name.clone(),
            author_name: row.author_id.and_then(|a| self.authors.get(&a).cloned()),
            categories: row
                .category_ids
                .iter()
                .filter_map(|c| self.categories.get(c).cloned())
                .collect(),
        }
    }

    fn author_view(&self, id: i64, name: &str) -> AuthorRecord {
        AuthorRecord {
            id,
            author_name: name.to_string(),
            books: self
                .books
                .values()
                .filter(|b| b.author_id == Some(id))
                .map(|b| b.name.clone())
                .collect(),
        }
    }

    fn category_view(&self, id: i64, name: &str) -> CategoryRecord {
        CategoryRecord {
            id,
            name: name.to_string(),
            books: self
                .books
                .values()
                .filter(|b| b.category_ids.contains(&id))
                .map(|b| b.name.clone())
                .collect(),
        }
    }

    pub fn books(&self) -> Vec<BookRecord> {
        self.books
            .iter()
            .map(|(id, row)| self.book_view(*id, row))
            .collect()
    }

    pub fn authors(&self) -> Vec<AuthorRecord> {
        self.authors
            .iter()
            .map(|(id, name)| self.author_view(*id, name))
            .collect()
    }

    pub fn categories(&self) -> Vec<CategoryRecord> {
        self.categories
            .iter()
            .map(|(id, name)| self.category_view(*id, name))
            .collect()
    }

    pub fn book(&self, id: i64) -> ApiResult<BookRecord> {
        self.books
            .get(&id)
            .map(|row| self.book_view(id, row))
            .ok_or_else(|| not_found("Book", id))
    }

    pub fn author(&self, id: i64) -> ApiResult<AuthorRecord> {
        self.authors
            .get(&id)
            .map(|name| self.author_view(id, name))
            .ok_or_else(|| not_found("Author", id))
    }

    pub fn category(&self, id: i64) -> ApiResult<CategoryRecord> {
        self.categories
            .get(&id)
            .map(|name| self.category_view(id, name))
            .ok_or_else(|| not_found("Category", id))
    }

    fn check_author(&self, author_id: Option<i64>) -> ApiResult<()> {
        match author_id {
            Some(id) if !self.authors.contains_key(&id) => Err(ApiError::BadRequest(format!(
                "Author not found with id {}",
                id
            ))),
            _ => Ok(()),
        }
    }

    fn check_categories(&self, ids: &[i64]) -> ApiResult<()> {
        let missing: Vec<i64> = ids
            .iter()
            .copied()
            .filter(|id| !self.categories.contains_key(id))
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ApiError::BadRequest(format!(
                "Categories not found with IDs: {:?}",
                missing
            )))
        }
    }

    fn check_books(&self, ids: &[i64]) -> ApiResult<()> {
        let missing: Vec<i64> = ids
            .iter()
            .copied()
            .filter(|id| !self.books.contains_key(id))
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ApiError::BadRequest(format!(
                "Books not found with IDs: {:?}",
                missing
            )))
        }
    }

    pub fn create_book(&mut self, input: BookInput) -> ApiResult<BookRecord> {
        self.check_author(input.author_id)?;
        let category_ids = unique(input.category_ids.unwrap_or_default());
        self.check_categories(&category_ids)?;

        let id = self.next_id();
        self.books.insert(
            id,
            BookRow {
                name: input.name,
                author_id: input.author_id,
                category_ids,
            },
        );
        self.book(id)
    }

    /// Absent author or categories keep their current values
    pub fn update_book(&mut self, id: i64, input: BookInput) -> ApiResult<BookRecord> {
        if !self.books.contains_key(&id) {
            return Err(not_found("Book", id));
        }
        self.check_author(input.author_id)?;
        if let Some(ids) = &input.category_ids {
            self.check_categories(ids)?;
        }

        if let Some(row) = self.books.get_mut(&id) {
            row.name = input.name;
            if input.author_id.is_some() {
                row.author_id = input.author_id;
            }
            if let Some(ids) = input.category_ids {
                row.category_ids = unique(ids);
            }
        }
        self.book(id)
    }

    pub fn delete_book(&mut self, id: i64) -> ApiResult<()> {
        self.books
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| not_found("Book", id))
    }

    pub fn create_author(&mut self, name: String) -> AuthorRecord {
        let id = self.next_id();
        self.authors.insert(id, name.clone());
        self.author_view(id, &name)
    }

    pub fn update_author(&mut self, id: i64, name: String) -> ApiResult<AuthorRecord> {
        let current = self
            .authors
            .get_mut(&id)
            .ok_or_else(|| not_found("Author", id))?;
        *current = name;
        self.author(id)
    }

    /// Removing an author removes their books too
    pub fn delete_author(&mut self, id: i64) -> ApiResult<()> {
        self.authors
            .remove(&id)
            .ok_or_else(|| not_found("Author", id))?;
        self.books.retain(|_, b| b.author_id != Some(id));
        Ok(())
    }

    pub fn create_category(&mut self, input: CategoryInput) -> ApiResult<CategoryRecord> {
        let book_ids = input.book_ids.unwrap_or_default();
        self.check_books(&book_ids)?;

        let id = self.next_id();
        self.categories.insert(id, input.name);
        self.link_books(id, &book_ids);
        self.category(id)
    }

    /// `bookIds`, when present, replaces the category's book set
    pub fn update_category(&mut self, id: i64, input: CategoryInput) -> ApiResult<CategoryRecord> {
        if !self.categories.contains_key(&id) {
            return Err(not_found("Category", id));
        }
        if let Some(ids) = &input.book_ids {
            self.check_books(ids)?;
        }

        self.categories.insert(id, input.name);
        if let Some(ids) = input.book_ids {
            self.unlink_category(id);
            self.link_books(id, &ids);
        }
        self.category(id)
    }

    pub fn delete_category(&mut self, id: i64) -> ApiResult<()> {
        self.categories
            .remove(&id)
            .ok_or_else(|| not_found("Category", id))?;
        self.unlink_category(id);
        Ok(())
    }

    fn link_books(&mut self, category_id: i64, book_ids: &[i64]) {
        for book_id in book_ids {
            if let Some(row) = self.books.get_mut(book_id) {
                if !row.category_ids.contains(&category_id) {
                    row.category_ids.push(category_id);
                }
            }
        }
    }

    fn unlink_category(&mut self, category_id: i64) {
        for row in self.books.values_mut() {
            row.category_ids.retain(|c| *c != category_id);
        }
    }
}

/// A book's categories form a set; first occurrence wins
fn unique(mut ids: Vec<i64>) -> Vec<i64> {
    let mut seen = HashSet::new();
    ids.retain(|id| seen.insert(*id));
    ids
}

fn not_found(entity: &str, id: i64) -> ApiError {
    ApiError::NotFound(format!("{} not found with id {}", entity, id))
}
