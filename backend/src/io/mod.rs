//! Dataset loading and export.
//!
//! [`DatasetLoader`] reads the source CSV once, keeps the untouched frame for
//! re-export and builds the typed records the services work on.
//!
//! # Example
//!
//! ```no_run
//! use crash_stats::io::DatasetLoader;
//! use std::path::Path;
//!
//! let dataset = DatasetLoader::load_from_file(Path::new("Crash_Statistics_Victoria.csv"))
//!     .expect("Failed to load");
//! println!("Loaded {} accidents", dataset.len());
//! ```

pub mod checksum;
pub mod dataset;
pub mod loaders;


pub use checksum::calculate_checksum;
pub use dataset::Dataset;
pub use loaders::DatasetLoader;
