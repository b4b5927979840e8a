//! Core contracts shared by the Salesforge generator and loader.
//!
//! This crate defines the entity types, the semicolon-delimited record
//! codec, and the on-disk layout contract that both components agree on.

pub mod error;
pub mod identity;
pub mod layout;
pub mod product;
pub mod sale;
pub mod salesman;

pub use error::{Error, Result};
pub use identity::{DocType, SalesmanId};
pub use layout::{DataLayout, PRODUCTS_FILE, SALESMEN_FILE, SALES_DIR, SALES_FILE_EXT, SEPARATOR};
pub use product::Product;
pub use sale::Sale;
pub use salesman::Salesman;
