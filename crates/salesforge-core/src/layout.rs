use std::path::{Path, PathBuf};

use crate::identity::SalesmanId;

/// Field separator used by every record kind.
pub const SEPARATOR: char = ';';

/// Catalog file name under the data directory.
pub const PRODUCTS_FILE: &str = "products.txt";

/// Roster file name under the data directory.
pub const SALESMEN_FILE: &str = "salesmen.txt";

/// Subdirectory holding one sales file per salesman.
pub const SALES_DIR: &str = "sales";

/// Extension of sales files.
pub const SALES_FILE_EXT: &str = "txt";

/// On-disk layout contract shared by the generator and the loader.
///
/// ```text
/// <root>/
///   products.txt
///   salesmen.txt
///   sales/
///     <docType>_<docNumber>.txt
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataLayout {
    root: PathBuf,
}

impl DataLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn products_path(&self) -> PathBuf {
        self.root.join(PRODUCTS_FILE)
    }

    pub fn salesmen_path(&self) -> PathBuf {
        self.root.join(SALESMEN_FILE)
    }

    pub fn sales_dir(&self) -> PathBuf {
        self.root.join(SALES_DIR)
    }

    pub fn sales_path(&self, id: SalesmanId) -> PathBuf {
        self.sales_dir().join(format!("{id}.{SALES_FILE_EXT}"))
    }
}

impl Default for DataLayout {
    /// The conventional `data/` directory relative to the working directory.
    fn default() -> Self {
        Self::new("data")
    }
}
