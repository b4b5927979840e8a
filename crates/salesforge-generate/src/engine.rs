use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::ops::RangeInclusive;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

use salesforge_core::{DataLayout, DocType, Product, Sale, Salesman, SalesmanId};

use crate::errors::GenerateError;
use crate::model::{GenerateOptions, GenerationReport, RosterReport};
use crate::pools;

/// Unit prices drawn for generated products.
const PRICE_RANGE: RangeInclusive<u32> = 1000..=10000;

/// Quantities drawn for generated sale lines.
const QUANTITY_RANGE: RangeInclusive<u32> = 1..=20;

/// Number of sale lines per salesman's sales file.
const SALES_PER_SALESMAN: RangeInclusive<u64> = 5..=15;

/// Eight-digit document numbers.
const DOC_NUMBER_RANGE: RangeInclusive<u64> = 10_000_000..=99_999_999;

/// Catalog size assumed when no catalog was generated in this pass.
const DEFAULT_CATALOG_SIZE: u32 = 10;

/// Generates one coherent products/salesmen/sales dataset.
///
/// All per-pass state (RNG, catalog size, the set of issued document
/// numbers) lives in the instance, so passes never interfere: one
/// generator, one pass.
#[derive(Debug)]
pub struct DatasetGenerator {
    layout: DataLayout,
    rng: ChaCha8Rng,
    seed: u64,
    catalog_size: Option<u32>,
    issued_doc_numbers: HashSet<u64>,
}

impl DatasetGenerator {
    pub fn new(options: GenerateOptions) -> Self {
        let seed = options.seed.unwrap_or_else(rand::random);
        Self {
            layout: DataLayout::new(options.data_dir),
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
            catalog_size: None,
            issued_doc_numbers: HashSet::new(),
        }
    }

    /// Seed in effect for this pass.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Runs a full pass: catalog first so sales reference valid ids.
    pub fn run(&mut self, products: u32, salesmen: u32) -> Result<GenerationReport, GenerateError> {
        let products_written = self.create_products(products)?;
        let roster = self.create_salesmen(salesmen)?;
        Ok(GenerationReport {
            seed: self.seed,
            data_dir: self.layout.root().to_path_buf(),
            products_written,
            salesmen_written: roster.salesmen_written,
            sales_files_written: roster.sales_files_written,
            sale_lines_written: roster.sale_lines_written,
        })
    }

    /// Writes the products catalog with ids 1..=count.
    ///
    /// Records the catalog size for the rest of the pass; a zero count
    /// leaves it unset so sales generation falls back to
    /// [`DEFAULT_CATALOG_SIZE`].
    pub fn create_products(&mut self, count: u32) -> Result<u64, GenerateError> {
        self.ensure_dirs()?;
        self.catalog_size = (count > 0).then_some(count);

        let path = self.layout.products_path();
        let mut writer = BufWriter::new(File::create(&path)?);
        for id in 1..=count {
            let name = pools::pick(&mut self.rng, pools::PRODUCT_NAMES);
            let price = self.rng.random_range(PRICE_RANGE);
            let product = Product::new(id, name, price)?;
            writeln!(writer, "{}", product.to_record())?;
        }
        writer.flush()?;

        info!(path = %path.display(), products = count, "catalog written");
        Ok(u64::from(count))
    }

    /// Writes the salesmen roster and one sales file per salesman.
    pub fn create_salesmen(&mut self, count: u32) -> Result<RosterReport, GenerateError> {
        self.ensure_dirs()?;

        let path = self.layout.salesmen_path();
        let mut writer = BufWriter::new(File::create(&path)?);
        let mut report = RosterReport::default();
        for _ in 0..count {
            let doc_type = DocType::ALL[self.rng.random_range(0..DocType::ALL.len())];
            let doc_number = self.next_doc_number();
            let first_name = pools::pick(&mut self.rng, pools::FIRST_NAMES);
            let last_name = pools::pick(&mut self.rng, pools::LAST_NAMES);
            let salesman = Salesman::new(doc_type, doc_number, first_name, last_name)?;
            writeln!(writer, "{}", salesman.to_record())?;
            report.salesmen_written += 1;

            let lines = self.rng.random_range(SALES_PER_SALESMAN);
            self.write_sales_file(salesman.id(), lines)?;
            report.sales_files_written += 1;
            report.sale_lines_written += lines;
        }
        writer.flush()?;

        info!(
            path = %path.display(),
            salesmen = report.salesmen_written,
            sale_lines = report.sale_lines_written,
            "roster written"
        );
        Ok(report)
    }

    /// Writes the sales file for one salesman.
    fn write_sales_file(&mut self, id: SalesmanId, lines: u64) -> Result<(), GenerateError> {
        let catalog_size = self.catalog_size.unwrap_or(DEFAULT_CATALOG_SIZE);
        let path = self.layout.sales_path(id);
        let mut writer = BufWriter::new(File::create(&path)?);
        for _ in 0..lines {
            let product_id = self.rng.random_range(1..=catalog_size);
            let quantity = self.rng.random_range(QUANTITY_RANGE);
            let sale = Sale::new(product_id, quantity)?;
            writeln!(writer, "{}", sale.to_record())?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Rejection-samples a document number unused in this pass.
    fn next_doc_number(&mut self) -> u64 {
        loop {
            let candidate = self.rng.random_range(DOC_NUMBER_RANGE);
            if self.issued_doc_numbers.insert(candidate) {
                return candidate;
            }
        }
    }

    fn ensure_dirs(&self) -> Result<(), GenerateError> {
        fs::create_dir_all(self.layout.sales_dir())?;
        Ok(())
    }
}
