//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{PageService, RecordService, SnippetService};
use crate::domain::registry::SnippetRegistry;
use crate::domain::repositories::{PageRepository, RecordRepository, SnippetRepository};
use crate::infrastructure::memory::MemoryStore;

/// Default site name shown by the public pages.
pub const DEFAULT_SITE_NAME: &str = "Visualist";

/// Services and settings shared across requests. Cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub page_service: Arc<PageService>,
    pub record_service: Arc<RecordService>,
    pub snippet_service: Arc<SnippetService>,
    pub site_name: Arc<str>,
}

impl AppState {
    /// Wires the services over one set of repositories.
    pub fn new(
        pages: Arc<dyn PageRepository>,
        records: Arc<dyn RecordRepository>,
        snippets: Arc<dyn SnippetRepository>,
        registry: SnippetRegistry,
        site_name: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            page_service: Arc::new(PageService::new(pages.clone(), records.clone())),
            record_service: Arc::new(RecordService::new(pages, records, snippets.clone())),
            snippet_service: Arc::new(SnippetService::new(snippets, Arc::new(registry))),
            site_name: site_name.into(),
        }
    }

    /// State backed by a fresh [`MemoryStore`] and the standard registry.
    pub fn in_memory() -> Self {
        let store = Arc::new(MemoryStore::new());
        Self::new(
            store.clone(),
            store.clone(),
            store,
            SnippetRegistry::standard(),
            DEFAULT_SITE_NAME,
        )
    }
}
