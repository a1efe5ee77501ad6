//! Client-side form validation, run before any request is sent

use crate::config::ClientConfig;
use crate::error::ValidationErrors;
use crate::types::{AuthorForm, BookForm, CategoryForm, FormValues};

/// Bounds enforced on forms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationRules {
    pub max_name_length: usize,
    pub max_categories_per_book: usize,
}

impl From<&ClientConfig> for ValidationRules {
    fn from(config: &ClientConfig) -> Self {
        Self {
            max_name_length: config.max_name_length,
            max_categories_per_book: config.max_categories_per_book,
        }
    }
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self::from(&ClientConfig::default())
    }
}

impl ValidationRules {
    pub fn check(&self, form: &FormValues) -> Result<(), ValidationErrors> {
        let errors = match form {
            FormValues::Book(f) => self.book_errors(f),
            FormValues::Author(f) => self.author_errors(f),
            FormValues::Category(f) => self.category_errors(f),
        };
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn book_errors(&self, form: &BookForm) -> ValidationErrors {
        let mut errors = ValidationErrors::default();
        self.check_name(&mut errors, "Book name", &form.name);
        match form.author_id {
            None => errors.push("authorId", "Please select an author"),
            Some(id) if id <= 0 => errors.push("authorId", "Author id must be positive"),
            Some(_) => {}
        }
        if form.category_ids.len() > self.max_categories_per_book {
            errors.push(
                "categoryIds",
                format!(
                    "You can select up to {} categories",
                    self.max_categories_per_book
                ),
            );
        }
        if form.category_ids.iter().any(|id| *id <= 0) {
            errors.push("categoryIds", "Category ids must be positive");
        }
        errors
    }

    fn author_errors(&self, form: &AuthorForm) -> ValidationErrors {
        let mut errors = ValidationErrors::default();
        self.check_name(&mut errors, "Author name", &form.name);
        errors
    }

    fn category_errors(&self, form: &CategoryForm) -> ValidationErrors {
        let mut errors = ValidationErrors::default();
        self.check_name(&mut errors, "Category name", &form.name);
        if form.book_ids.iter().any(|id| *id <= 0) {
            errors.push("bookIds", "Book ids must be positive");
        }
        errors
    }

    fn check_name(&self, errors: &mut ValidationErrors, label: &str, name: &str) {
        if name.trim().is_empty() {
            errors.push("name", format!("{label} is required"));
        } else if name.chars().count() > self.max_name_length {
            errors.push(
                "name",
                format!("{label} cannot exceed {} characters", self.max_name_length),
            );
        }
    }
}
