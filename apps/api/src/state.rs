use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::Config;
use crate::matching::vocabulary::SkillCatalog;
use crate::store::RecordStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// A matching run holds the write lock for its whole pass.
    pub store: Arc<RwLock<RecordStore>>,
    /// Vocabularies for both strategies, fixed for the process lifetime.
    pub catalog: Arc<SkillCatalog>,
    pub config: Config,
}

impl AppState {
    pub fn new(store: RecordStore, catalog: SkillCatalog, config: Config) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            catalog: Arc::new(catalog),
            config,
        }
    }
}
