//! Records, forms and write payloads for the three catalog entities

mod author;
mod book;
mod category;
mod kind;
mod selection;

pub use author::{AuthorForm, AuthorPayload, AuthorRecord};
pub use book::{BookForm, BookPayload, BookRecord};
pub use category::{CategoryForm, CategoryPayload, CategoryRecord};
pub use kind::EntityKind;
pub use selection::{AuthorOption, BookOption, CategoryOption, Selections};

use serde::{Deserialize, Deserializer, Serialize};

/// Any record returned by a list endpoint
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Book(BookRecord),
    Author(AuthorRecord),
    Category(CategoryRecord),
}

impl Record {
    pub fn kind(&self) -> EntityKind {
        match self {
            Record::Book(_) => EntityKind::Book,
            Record::Author(_) => EntityKind::Author,
            Record::Category(_) => EntityKind::Category,
        }
    }

    /// Server-assigned id
    pub fn id(&self) -> i64 {
        match self {
            Record::Book(b) => b.id,
            Record::Author(a) => a.id,
            Record::Category(c) => c.id,
        }
    }
}

impl From<BookRecord> for Record {
    fn from(record: BookRecord) -> Self {
        Record::Book(record)
    }
}

impl From<AuthorRecord> for Record {
    fn from(record: AuthorRecord) -> Self {
        Record::Author(record)
    }
}

impl From<CategoryRecord> for Record {
    fn from(record: CategoryRecord) -> Self {
        Record::Category(record)
    }
}

/// Values held by an open form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormValues {
    Book(BookForm),
    Author(AuthorForm),
    Category(CategoryForm),
}

impl FormValues {
    /// A cleared form for the given kind
    pub fn empty(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Book => FormValues::Book(BookForm::default()),
            EntityKind::Author => FormValues::Author(AuthorForm::default()),
            EntityKind::Category => FormValues::Category(CategoryForm::default()),
        }
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            FormValues::Book(_) => EntityKind::Book,
            FormValues::Author(_) => EntityKind::Author,
            FormValues::Category(_) => EntityKind::Category,
        }
    }

    /// Build the write payload sent for this form
    pub fn payload(&self) -> Payload {
        match self {
            FormValues::Book(form) => Payload::Book(BookPayload::from(form)),
            FormValues::Author(form) => Payload::Author(AuthorPayload::from(form)),
            FormValues::Category(form) => Payload::Category(CategoryPayload::from(form)),
        }
    }
}

impl From<BookForm> for FormValues {
    fn from(form: BookForm) -> Self {
        FormValues::Book(form)
    }
}

impl From<AuthorForm> for FormValues {
    fn from(form: AuthorForm) -> Self {
        FormValues::Author(form)
    }
}

impl From<CategoryForm> for FormValues {
    fn from(form: CategoryForm) -> Self {
        FormValues::Category(form)
    }
}

/// Body of a create or update request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    Book(BookPayload),
    Author(AuthorPayload),
    Category(CategoryPayload),
}

impl Payload {
    pub fn kind(&self) -> EntityKind {
        match self {
            Payload::Book(_) => EntityKind::Book,
            Payload::Author(_) => EntityKind::Author,
            Payload::Category(_) => EntityKind::Category,
        }
    }
}

/// Relation lists may arrive as `null`; treat that as empty
pub(crate) fn nullable_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
