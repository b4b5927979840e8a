use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Options for a generation pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Root of the dataset directory tree.
    pub data_dir: PathBuf,
    /// Seed for the pass; a random seed is drawn when unset.
    pub seed: Option<u64>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            seed: None,
        }
    }
}

/// Summary of the roster half of a pass.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RosterReport {
    pub salesmen_written: u64,
    pub sales_files_written: u64,
    pub sale_lines_written: u64,
}

/// Summary of a full generation pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub seed: u64,
    pub data_dir: PathBuf,
    pub products_written: u64,
    pub salesmen_written: u64,
    pub sales_files_written: u64,
    pub sale_lines_written: u64,
}
