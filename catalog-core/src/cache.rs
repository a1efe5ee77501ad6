//! Remote data cache
//!
//! Holds the three primary collections shown in tables and the three
//! selection projections used by form inputs. Every change goes through a
//! small set of transitions (`begin`, `settle`, `apply_*`) so a collection's
//! data, loading flag and error never disagree.

use crate::api::CatalogApi;
use crate::error::Result;
use crate::notify::{Notice, Notifier};
use crate::types::{AuthorRecord, BookRecord, CategoryRecord, EntityKind, Selections};
use chrono::{DateTime, Utc};

/// State of one fetched collection
#[derive(Debug, Clone)]
pub struct Collection<T> {
    data: Vec<T>,
    loading: bool,
    error: Option<String>,
    fetched_at: Option<DateTime<Utc>>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            loading: false,
            error: None,
            fetched_at: None,
        }
    }
}

impl<T> Collection<T> {
    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// When the last successful fetch settled
    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.fetched_at
    }

    /// A fetch has started
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// A fetch has finished. Failure empties the collection rather than
    /// leaving stale rows and yields the notice to raise.
    pub fn settle(&mut self, kind: EntityKind, outcome: Result<Vec<T>>) -> Option<Notice> {
        self.loading = false;
        match outcome {
            Ok(data) => {
                tracing::debug!("Loaded {} {}", data.len(), kind);
                self.data = data;
                self.error = None;
                self.fetched_at = Some(Utc::now());
                None
            }
            Err(e) => {
                let msg = e.user_message();
                self.data.clear();
                self.error = Some(format!("Failed to fetch {}: {}", kind, msg));
                Some(Notice::error(format!("Failed to load {}: {}", kind, msg)))
            }
        }
    }
}

/// State of the joined selection fetch
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    current: Selections,
    loading: bool,
    error: Option<String>,
    fetched_at: Option<DateTime<Utc>>,
}

impl SelectionState {
    pub fn current(&self) -> &Selections {
        &self.current
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.fetched_at
    }

    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// All three projections are replaced on success; on failure none is touched
    pub fn settle(&mut self, outcome: Result<Selections>) -> Option<Notice> {
        self.loading = false;
        match outcome {
            Ok(selections) => {
                self.current = selections;
                self.error = None;
                self.fetched_at = Some(Utc::now());
                None
            }
            Err(e) => {
                let msg = format!("Failed to load data for forms: {}", e.user_message());
                self.error = Some(msg.clone());
                Some(Notice::error(msg))
            }
        }
    }
}

/// Results of the three independent primary fetches
#[derive(Debug)]
pub struct TableFetch {
    pub books: Result<Vec<BookRecord>>,
    pub authors: Result<Vec<AuthorRecord>>,
    pub categories: Result<Vec<CategoryRecord>>,
}

/// Fetch the three primary collections concurrently; each result stands alone
pub async fn fetch_tables<A: CatalogApi + ?Sized>(api: &A) -> TableFetch {
    let (books, authors, categories) =
        tokio::join!(api.list_books(), api.list_authors(), api.list_categories());
    TableFetch {
        books,
        authors,
        categories,
    }
}

/// Fetch the three lists behind the selection projections, all or nothing
pub async fn fetch_selections<A: CatalogApi + ?Sized>(api: &A) -> Result<Selections> {
    let (authors, categories, books) =
        tokio::try_join!(api.list_authors(), api.list_categories(), api.list_books())?;
    Ok(Selections::project(authors, categories, books))
}

/// The client-side copy of everything the backend serves
#[derive(Debug, Clone, Default)]
pub struct RemoteCache {
    pub books: Collection<BookRecord>,
    pub authors: Collection<AuthorRecord>,
    pub categories: Collection<CategoryRecord>,
    pub selections: SelectionState,
    notifier: Notifier,
    table_refreshes: u64,
    selection_refreshes: u64,
}

impl RemoteCache {
    pub fn new(notifier: Notifier) -> Self {
        Self {
            notifier,
            ..Default::default()
        }
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Number of `refresh_all` and `refresh_selections` runs started so far
    pub fn refresh_counts(&self) -> (u64, u64) {
        (self.table_refreshes, self.selection_refreshes)
    }

    pub fn begin_tables(&mut self) {
        self.table_refreshes += 1;
        self.books.begin();
        self.authors.begin();
        self.categories.begin();
    }

    pub fn apply_tables(&mut self, fetch: TableFetch) {
        let notices = [
            self.books.settle(EntityKind::Book, fetch.books),
            self.authors.settle(EntityKind::Author, fetch.authors),
            self.categories.settle(EntityKind::Category, fetch.categories),
        ];
        for notice in notices.into_iter().flatten() {
            self.notifier.raise(notice);
        }
    }

    pub fn begin_selections(&mut self) {
        self.selection_refreshes += 1;
        self.selections.begin();
    }

    /// Returns whether the projections were replaced
    pub fn apply_selections(&mut self, outcome: Result<Selections>) -> bool {
        let applied = outcome.is_ok();
        if let Some(notice) = self.selections.settle(outcome) {
            self.notifier.raise(notice);
        }
        applied
    }

    /// Reload the three primary collections
    pub async fn refresh_all<A: CatalogApi + ?Sized>(&mut self, api: &A) {
        self.begin_tables();
        let fetch = fetch_tables(api).await;
        self.apply_tables(fetch);
    }

    /// Reload the selection projections as one unit
    pub async fn refresh_selections<A: CatalogApi + ?Sized>(&mut self, api: &A) -> bool {
        self.begin_selections();
        let outcome = fetch_selections(api).await;
        self.apply_selections(outcome)
    }

    /// Run both refreshes concurrently, as on first load and after a mutation
    pub async fn load<A: CatalogApi + ?Sized>(&mut self, api: &A) -> bool {
        self.begin_tables();
        self.begin_selections();
        let (tables, selections) = tokio::join!(fetch_tables(api), fetch_selections(api));
        self.apply_tables(tables);
        self.apply_selections(selections)
    }
}
