use std::collections::HashMap;

use tracing::info;

use salesforge_core::{DataLayout, Product, Sale, Salesman, SalesmanId};

use crate::errors::LoadError;
use crate::loader::{load_products, load_sales, load_salesmen};
use crate::report::LoadReport;

/// A fully loaded dataset plus the warnings gathered along the way.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub products: HashMap<u32, Product>,
    pub salesmen: HashMap<SalesmanId, Salesman>,
    pub sales: HashMap<SalesmanId, Vec<Sale>>,
    pub report: LoadReport,
}

/// Loads the whole dataset from the conventional layout.
pub fn load_dataset(layout: &DataLayout) -> Result<Dataset, LoadError> {
    let mut report = LoadReport::default();
    let products = load_products(&layout.products_path(), &mut report)?;
    let salesmen = load_salesmen(&layout.salesmen_path(), &mut report)?;
    let sales = load_sales(&layout.sales_dir(), &salesmen, &products, &mut report)?;

    info!(
        root = %layout.root().display(),
        products = report.products_loaded,
        salesmen = report.salesmen_loaded,
        sales = report.sales_loaded,
        warnings = report.warnings.len(),
        "dataset loaded"
    );

    Ok(Dataset {
        products,
        salesmen,
        sales,
        report,
    })
}
