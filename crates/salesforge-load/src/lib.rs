//! Permissive dataset loading for Salesforge.
//!
//! Reads the files the generator emits back into entity maps. Data-quality
//! problems (malformed rows, dangling references) are skipped with warnings
//! collected in a [`LoadReport`]; only infrastructure failures are fatal.

pub mod dataset;
pub mod errors;
pub mod loader;
pub mod report;

pub use dataset::{Dataset, load_dataset};
pub use errors::LoadError;
pub use loader::{load_products, load_sales, load_salesmen};
pub use report::{LoadIssue, LoadReport};
