//! Domain model: accident records, categorical domains and selection criteria.

pub mod category;
pub mod criteria;
pub mod record;

pub use category::{Category, CategoryDomain};
pub use criteria::{DateSpan, SelectionCriteria};
pub use record::AccidentRecord;
