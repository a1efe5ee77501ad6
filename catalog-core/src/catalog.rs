//! The admin screen's state: API handle, cache, dialogs and notices

use crate::api::CatalogApi;
use crate::cache::RemoteCache;
use crate::config::ClientConfig;
use crate::notify::{Notice, Notifier};
use crate::sync::{FormModal, Modals};
use crate::types::{EntityKind, Record};
use crate::validate::ValidationRules;
use tokio::sync::broadcast;

/// One client session against a catalog backend
pub struct Catalog<A> {
    pub(crate) api: A,
    pub(crate) config: ClientConfig,
    pub(crate) rules: ValidationRules,
    pub(crate) cache: RemoteCache,
    pub(crate) modals: Modals,
}

impl<A: CatalogApi> Catalog<A> {
    pub fn new(api: A, config: ClientConfig) -> Self {
        Self {
            api,
            rules: ValidationRules::from(&config),
            config,
            cache: RemoteCache::new(Notifier::default()),
            modals: Modals::default(),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn cache(&self) -> &RemoteCache {
        &self.cache
    }

    /// Receive notices raised from now on
    pub fn subscribe(&self) -> broadcast::Receiver<Notice> {
        self.cache.notifier().subscribe()
    }

    pub(crate) fn notify(&self, notice: Notice) {
        self.cache.notifier().raise(notice);
    }

    /// Initial load: tables and selections together
    pub async fn load(&mut self) {
        self.cache.load(&self.api).await;
        self.modals.sync_all(self.cache.selections.current());
    }

    pub async fn refresh_all(&mut self) {
        self.cache.refresh_all(&self.api).await;
    }

    pub async fn refresh_selections(&mut self) -> bool {
        let applied = self.cache.refresh_selections(&self.api).await;
        self.modals.sync_all(self.cache.selections.current());
        applied
    }

    pub fn modal(&self, kind: EntityKind) -> &FormModal {
        self.modals.get(kind)
    }

    pub fn modal_mut(&mut self, kind: EntityKind) -> &mut FormModal {
        self.modals.get_mut(kind)
    }

    pub fn open_create(&mut self, kind: EntityKind) {
        self.modals.get_mut(kind).open_create();
    }

    /// Open the edit dialog for a record; returns whether the form is filled
    pub fn open_edit(&mut self, record: impl Into<Record>) -> bool {
        let record = record.into();
        let selections = self.cache.selections.current();
        self.modals.get_mut(record.kind()).open_edit(record, selections)
    }

    pub fn cancel(&mut self, kind: EntityKind) {
        self.modals.get_mut(kind).cancel();
    }

    /// Look a record up in the cached primary collections
    pub fn find(&self, kind: EntityKind, id: i64) -> Option<Record> {
        match kind {
            EntityKind::Book => self
                .cache
                .books
                .data()
                .iter()
                .find(|b| b.id == id)
                .cloned()
                .map(Record::Book),
            EntityKind::Author => self
                .cache
                .authors
                .data()
                .iter()
                .find(|a| a.id == id)
                .cloned()
                .map(Record::Author),
            EntityKind::Category => self
                .cache
                .categories
                .data()
                .iter()
                .find(|c| c.id == id)
                .cloned()
                .map(Record::Category),
        }
    }
}
