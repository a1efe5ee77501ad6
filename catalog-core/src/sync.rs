//! Form synchronizer
//!
//! List responses name related records instead of carrying their ids, so an
//! edit form is filled by looking names up in the selection projections.
//! Names that do not resolve are dropped; an unresolved author stays unset.
//! Duplicate names resolve to the first match.

use crate::error::ValidationErrors;
use crate::types::{
    AuthorForm, AuthorRecord, BookForm, BookRecord, CategoryForm, CategoryRecord, EntityKind,
    FormValues, Record, Selections,
};

/// Edit form for a book, or `None` while a needed projection is still empty
pub fn book_form(record: &BookRecord, selections: &Selections) -> Option<BookForm> {
    if record.author_name.is_some() && selections.authors.is_empty() {
        return None;
    }
    if !record.categories.is_empty() && selections.categories.is_empty() {
        return None;
    }

    Some(BookForm {
        name: record.book_name.clone(),
        author_id: record
            .author_name
            .as_deref()
            .and_then(|name| selections.author_id(name)),
        category_ids: record
            .categories
            .iter()
            .filter_map(|name| selections.category_id(name))
            .collect(),
    })
}

pub fn author_form(record: &AuthorRecord) -> AuthorForm {
    AuthorForm {
        name: record.author_name.clone(),
    }
}

/// Edit form for a category, or `None` while the book projection is empty
pub fn category_form(record: &CategoryRecord, selections: &Selections) -> Option<CategoryForm> {
    if !record.books.is_empty() && selections.books.is_empty() {
        return None;
    }

    Some(CategoryForm {
        name: record.name.clone(),
        book_ids: record
            .books
            .iter()
            .filter_map(|name| selections.book_id(name))
            .collect(),
    })
}

/// Resolve any record into its edit form
pub fn resolve_form(record: &Record, selections: &Selections) -> Option<FormValues> {
    match record {
        Record::Book(book) => book_form(book, selections).map(FormValues::Book),
        Record::Author(author) => Some(FormValues::Author(author_form(author))),
        Record::Category(category) => category_form(category, selections).map(FormValues::Category),
    }
}

/// Where a form modal is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalPhase {
    Closed,
    Open,
    Submitting,
}

/// One entity's add/edit dialog
#[derive(Debug, Clone)]
pub struct FormModal {
    kind: EntityKind,
    phase: ModalPhase,
    editing: Option<Record>,
    values: Option<FormValues>,
    error: Option<String>,
    field_errors: ValidationErrors,
}

impl FormModal {
    pub fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            phase: ModalPhase::Closed,
            editing: None,
            values: None,
            error: None,
            field_errors: ValidationErrors::default(),
        }
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase != ModalPhase::Closed
    }

    /// Record being edited, `None` when creating or closed
    pub fn editing(&self) -> Option<&Record> {
        self.editing.as_ref()
    }

    pub fn editing_id(&self) -> Option<i64> {
        self.editing.as_ref().map(Record::id)
    }

    /// Current form values; `None` while an edit waits for projections
    pub fn values(&self) -> Option<&FormValues> {
        self.values.as_ref()
    }

    /// True when an edit form could not be filled yet
    pub fn is_deferred(&self) -> bool {
        self.phase == ModalPhase::Open && self.editing.is_some() && self.values.is_none()
    }

    /// Message from the last failed submit
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn field_errors(&self) -> &ValidationErrors {
        &self.field_errors
    }

    /// Replace the form values, as a user typing would.
    /// Values for another entity kind are ignored; returns whether they were taken.
    pub fn set_values(&mut self, values: FormValues) -> bool {
        if values.kind() != self.kind {
            tracing::warn!(
                "Ignoring {} form values for the {} dialog",
                values.kind(),
                self.kind
            );
            return false;
        }
        self.values = Some(values);
        self.field_errors = ValidationErrors::default();
        true
    }

    /// Open for creation with a cleared form
    pub fn open_create(&mut self) {
        self.phase = ModalPhase::Open;
        self.editing = None;
        self.values = Some(FormValues::empty(self.kind));
        self.error = None;
        self.field_errors = ValidationErrors::default();
    }

    /// Open for editing. Returns whether the form could be filled now;
    /// a record of another kind leaves the dialog untouched.
    pub fn open_edit(&mut self, record: Record, selections: &Selections) -> bool {
        if record.kind() != self.kind {
            tracing::warn!("Ignoring {} record for the {} dialog", record.kind(), self.kind);
            return false;
        }
        self.phase = ModalPhase::Open;
        self.values = None;
        self.editing = Some(record);
        self.error = None;
        self.field_errors = ValidationErrors::default();
        self.sync(selections)
    }

    /// Fill a deferred edit form once the projections allow it.
    /// Values already present are never overwritten.
    pub fn sync(&mut self, selections: &Selections) -> bool {
        if !self.is_deferred() {
            return self.values.is_some();
        }
        let Some(record) = &self.editing else {
            return false;
        };
        self.values = resolve_form(record, selections);
        if self.values.is_none() {
            tracing::debug!("Deferring {} form until selections load", self.kind);
        }
        self.values.is_some()
    }

    /// Close without saving
    pub fn cancel(&mut self) {
        self.phase = ModalPhase::Closed;
        self.editing = None;
        self.values = None;
        self.error = None;
        self.field_errors = ValidationErrors::default();
    }

    /// Validation failed; stay open and show the errors inline
    pub fn reject(&mut self, values: FormValues, errors: ValidationErrors) {
        self.phase = ModalPhase::Open;
        self.values = Some(values);
        self.field_errors = errors;
    }

    /// A request is in flight
    pub fn begin_submit(&mut self, values: FormValues) {
        self.phase = ModalPhase::Submitting;
        self.values = Some(values);
        self.error = None;
        self.field_errors = ValidationErrors::default();
    }

    /// The write was acknowledged
    pub fn finish_success(&mut self) {
        self.cancel();
    }

    /// The write failed; back to Open with the values kept for a retry
    pub fn finish_failure(&mut self, message: String) {
        self.phase = ModalPhase::Open;
        self.error = Some(message);
    }
}

/// The three dialogs of the admin screen
#[derive(Debug, Clone)]
pub struct Modals {
    book: FormModal,
    author: FormModal,
    category: FormModal,
}

impl Default for Modals {
    fn default() -> Self {
        Self {
            book: FormModal::new(EntityKind::Book),
            author: FormModal::new(EntityKind::Author),
            category: FormModal::new(EntityKind::Category),
        }
    }
}

impl Modals {
    pub fn get(&self, kind: EntityKind) -> &FormModal {
        match kind {
            EntityKind::Book => &self.book,
            EntityKind::Author => &self.author,
            EntityKind::Category => &self.category,
        }
    }

    pub fn get_mut(&mut self, kind: EntityKind) -> &mut FormModal {
        match kind {
            EntityKind::Book => &mut self.book,
            EntityKind::Author => &mut self.author,
            EntityKind::Category => &mut self.category,
        }
    }

    /// Re-run deferred resolution after the projections changed
    pub fn sync_all(&mut self, selections: &Selections) {
        self.book.sync(selections);
        self.author.sync(selections);
        self.category.sync(selections);
    }
}
