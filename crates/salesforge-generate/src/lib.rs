//! Pseudo-random dataset generation for Salesforge.
//!
//! This crate emits the products catalog, the salesmen roster, and one
//! sales file per salesman, with coherent ids across the three outputs
//! of a generation pass.

pub mod engine;
pub mod errors;
pub mod model;
pub mod pools;

pub use engine::DatasetGenerator;
pub use errors::GenerateError;
pub use model::{GenerateOptions, GenerationReport, RosterReport};
