//! Entity kinds and their REST naming

use serde::{Deserialize, Serialize};
use std::fmt;

/// The three entity kinds managed by the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Book,
    Author,
    Category,
}

impl EntityKind {
    pub const ALL: [EntityKind; 3] = [EntityKind::Book, EntityKind::Author, EntityKind::Category];

    /// Collection path segment, e.g. `books`
    pub fn path(self) -> &'static str {
        match self {
            EntityKind::Book => "books",
            EntityKind::Author => "authors",
            EntityKind::Category => "categories",
        }
    }

    /// Capitalized singular label used in notices
    pub fn label(self) -> &'static str {
        match self {
            EntityKind::Book => "Book",
            EntityKind::Author => "Author",
            EntityKind::Category => "Category",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_and_labels() {
        assert_eq!(EntityKind::Category.path(), "categories");
        assert_eq!(EntityKind::Author.label(), "Author");
        assert_eq!(EntityKind::Book.to_string(), "books");
    }
}
