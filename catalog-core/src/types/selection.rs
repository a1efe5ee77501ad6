//! Selection projections used to populate choice inputs

use super::{AuthorRecord, BookRecord, CategoryRecord};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorOption {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryOption {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookOption {
    pub id: i64,
    pub name: String,
    pub author_name: Option<String>,
    pub categories: Vec<String>,
}

impl From<AuthorRecord> for AuthorOption {
    fn from(record: AuthorRecord) -> Self {
        Self {
            id: record.id,
            name: record.author_name,
        }
    }
}

impl From<CategoryRecord> for CategoryOption {
    fn from(record: CategoryRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
        }
    }
}

impl From<BookRecord> for BookOption {
    fn from(record: BookRecord) -> Self {
        Self {
            id: record.id,
            name: record.book_name,
            author_name: record.author_name,
            categories: record.categories,
        }
    }
}

/// The three projections, always replaced together
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selections {
    pub authors: Vec<AuthorOption>,
    pub categories: Vec<CategoryOption>,
    pub books: Vec<BookOption>,
}

impl Selections {
    /// Build all three projections from full list responses
    pub fn project(
        authors: Vec<AuthorRecord>,
        categories: Vec<CategoryRecord>,
        books: Vec<BookRecord>,
    ) -> Self {
        Self {
            authors: authors.into_iter().map(AuthorOption::from).collect(),
            categories: categories.into_iter().map(CategoryOption::from).collect(),
            books: books.into_iter().map(BookOption::from).collect(),
        }
    }

    pub fn author_id(&self, name: &str) -> Option<i64> {
        self.authors.iter().find(|a| a.name == name).map(|a| a.id)
    }

    pub fn category_id(&self, name: &str) -> Option<i64> {
        self.categories.iter().find(|c| c.name == name).map(|c| c.id)
    }

    pub fn book_id(&self, name: &str) -> Option<i64> {
        self.books.iter().find(|b| b.name == name).map(|b| b.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_keeps_ids_and_names() {
        let selections = Selections::project(
            vec![AuthorRecord::new(1, "Herbert")],
            vec![CategoryRecord::new(7, "Sci-Fi")],
            vec![BookRecord::new(3, "Dune").with_author("Herbert").with_category("Sci-Fi")],
        );

        assert_eq!(selections.author_id("Herbert"), Some(1));
        assert_eq!(selections.category_id("Sci-Fi"), Some(7));
        assert_eq!(selections.book_id("Dune"), Some(3));
        assert_eq!(selections.books[0].author_name.as_deref(), Some("Herbert"));
        assert_eq!(selections.author_id("Asimov"), None);
    }

    #[test]
    fn test_duplicate_names_resolve_to_first() {
        let selections = Selections::project(
            vec![AuthorRecord::new(4, "Smith"), AuthorRecord::new(9, "Smith")],
            Vec::new(),
            Vec::new(),
        );
        assert_eq!(selections.author_id("Smith"), Some(4));
    }
}
