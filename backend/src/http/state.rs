//! Application state for the HTTP server.

use std::sync::Arc;

use crate::config::DatasetSettings;
use crate::io::Dataset;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// The loaded dataset, never mutated after startup
    pub dataset: Arc<Dataset>,
    /// Page title and download file name
    pub settings: Arc<DatasetSettings>,
}

impl AppState {
    /// Create a new application state around a loaded dataset.
    pub fn new(dataset: Arc<Dataset>, settings: DatasetSettings) -> Self {
        Self {
            dataset,
            settings: Arc::new(settings),
        }
    }
}
