//! Career catalog: records, derived vocabulary and the shared reload handle

pub mod handle;
pub mod record;
pub mod store;

pub use handle::CatalogHandle;
pub use record::CareerRecord;
pub use store::{CatalogStore, Vocabulary};
