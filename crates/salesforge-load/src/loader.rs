use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use salesforge_core::{Product, SALES_FILE_EXT, Sale, Salesman, SalesmanId};

use crate::errors::LoadError;
use crate::report::LoadReport;

/// Loads the products catalog into a map keyed by product id.
///
/// Malformed rows are skipped with a warning. Duplicate ids warn and keep
/// the later row.
pub fn load_products(
    path: &Path,
    report: &mut LoadReport,
) -> Result<HashMap<u32, Product>, LoadError> {
    let reader = BufReader::new(File::open(path)?);
    let mut products = HashMap::new();

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match Product::parse_record(&line) {
            Ok(product) => {
                let id = product.id();
                if products.insert(id, product).is_some() {
                    report.warn_line(path, &line, format!("duplicate product id {id}"));
                }
            }
            Err(reason) => report.warn_line(path, &line, reason),
        }
    }

    report.products_loaded = products.len() as u64;
    Ok(products)
}

/// Loads the salesmen roster into a map keyed by `(docType, docNumber)`.
///
/// The key's display form is exactly the sales-file stem, which is what
/// makes sales-file correlation an O(1) lookup.
pub fn load_salesmen(
    path: &Path,
    report: &mut LoadReport,
) -> Result<HashMap<SalesmanId, Salesman>, LoadError> {
    let reader = BufReader::new(File::open(path)?);
    let mut salesmen = HashMap::new();

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match Salesman::parse_record(&line) {
            Ok(salesman) => {
                salesmen.insert(salesman.id(), salesman);
            }
            Err(reason) => report.warn_line(path, &line, reason),
        }
    }

    report.salesmen_loaded = salesmen.len() as u64;
    Ok(salesmen)
}

/// Loads every per-salesman sales file under `sales_dir`.
///
/// A file whose stem does not name a roster entry is skipped whole; a line
/// referencing an unknown product, carrying a non-positive quantity, or
/// failing to parse is skipped individually. Accepted sales keep file
/// order. A missing or non-directory `sales_dir` is the only fatal case.
pub fn load_sales(
    sales_dir: &Path,
    salesmen: &HashMap<SalesmanId, Salesman>,
    products: &HashMap<u32, Product>,
    report: &mut LoadReport,
) -> Result<HashMap<SalesmanId, Vec<Sale>>, LoadError> {
    if !sales_dir.is_dir() {
        return Err(LoadError::SalesDirNotFound(sales_dir.to_path_buf()));
    }

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(sales_dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == SALES_FILE_EXT) {
            paths.push(path);
        }
    }
    // Enumeration order is unspecified by the contract; sort so warning
    // output stays deterministic.
    paths.sort();

    let mut sales: HashMap<SalesmanId, Vec<Sale>> = HashMap::new();
    for path in paths {
        let id = match salesman_id_for(&path) {
            Ok(id) => id,
            Err(reason) => {
                report.warn_file(&path, reason);
                continue;
            }
        };
        if !salesmen.contains_key(&id) {
            report.warn_file(&path, format!("no roster entry for salesman {id}"));
            continue;
        }

        let file = match File::open(&path) {
            Ok(file) => file,
            Err(err) => {
                report.warn_file(&path, err);
                continue;
            }
        };

        // Register the salesman even if every line ends up rejected.
        let entries = sales.entry(id).or_default();
        for line in BufReader::new(file).lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    report.warn_file(&path, err);
                    break;
                }
            };
            if line.trim().is_empty() {
                continue;
            }
            match Sale::parse_record(&line) {
                Ok(sale) => {
                    if !products.contains_key(&sale.product_id()) {
                        report.warn_line(
                            &path,
                            &line,
                            format!("unknown product id {}", sale.product_id()),
                        );
                        continue;
                    }
                    entries.push(sale);
                    report.sales_loaded += 1;
                }
                Err(reason) => report.warn_line(&path, &line, reason),
            }
        }
    }

    Ok(sales)
}

fn salesman_id_for(path: &Path) -> salesforge_core::Result<SalesmanId> {
    let stem = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or_default();
    stem.parse()
}
