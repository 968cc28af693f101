//! Process-wide dataset, loaded once at startup and read-only afterwards.

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::{Arc, OnceLock};

use crate::io::{Dataset, DatasetLoader};

/// Global dataset instance initialized once per process.
static DATASET: OnceLock<Arc<Dataset>> = OnceLock::new();

/// Load the dataset from `path` and install it as the global instance.
///
/// A second call is a no-op and keeps the first dataset.
pub fn init_dataset(path: &Path) -> Result<()> {
    if DATASET.get().is_some() {
        return Ok(());
    }

    let dataset = DatasetLoader::load_from_file(path)
        .with_context(|| format!("Failed to load dataset from {}", path.display()))?;
    let _ = DATASET.set(Arc::new(dataset));
    Ok(())
}

/// Get a reference to the global dataset.
pub fn get_dataset() -> Result<&'static Arc<Dataset>> {
    DATASET
        .get()
        .context("Dataset not initialized. Call init_dataset() first.")
}
