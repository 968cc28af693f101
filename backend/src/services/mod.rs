//! Service layer: the filtering and aggregation pipeline behind each render pass.
//!
//! Services read the immutable [`Dataset`](crate::io::Dataset) and return the
//! DTOs defined in [`crate::routes`]. None of them hold state between calls.

pub mod advisories;
pub mod aggregation;
pub mod dashboard;
pub mod selection;
pub mod visibility;


pub use advisories::date_advisories;
pub use aggregation::{by_accident_type, by_alcohol, by_hour, by_light_condition};
pub use dashboard::{filter_options, render};
pub use selection::{select, SelectionPolicy};
pub use visibility::chart_visibility;
