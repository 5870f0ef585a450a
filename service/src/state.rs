use crate::config::Config;
use caresheet::{SheetOptions, TextMeasurer};
use std::sync::Arc;
use tokio::sync::Semaphore;

/// Shared application state accessible to all handlers
#[derive(Clone)]
pub struct AppState {
    /// Text measurement adapter; layout calls share it read-only.
    pub measurer: Arc<dyn TextMeasurer>,

    /// Sheet layout options derived from configuration.
    pub options: Arc<SheetOptions>,

    /// Limits concurrent synchronous sheet generation
    /// Prevents OOM from too many simultaneous render tasks
    pub sync_semaphore: Arc<Semaphore>,

    /// Configuration
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(measurer: Arc<dyn TextMeasurer>, config: Config) -> Self {
        let options = SheetOptions {
            page_bottom_cutoff: config.layout.page_bottom_cutoff,
            ..SheetOptions::default()
        };
        let sync_semaphore = Arc::new(Semaphore::new(config.concurrency.max_sync_requests));

        Self {
            measurer,
            options: Arc::new(options),
            sync_semaphore,
            config: Arc::new(config),
        }
    }
}
