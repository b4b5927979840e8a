use salesforge_core::DataLayout;
use salesforge_generate::{DatasetGenerator, GenerateOptions};
use salesforge_load::load_dataset;

#[test]
fn generated_datasets_load_back_without_warnings() {
    let mut data_dir = std::env::temp_dir();
    data_dir.push(format!("salesforge_round_trip_{}", uuid::Uuid::new_v4()));

    let report = DatasetGenerator::new(GenerateOptions {
        data_dir: data_dir.clone(),
        seed: Some(99),
    })
    .run(8, 4)
    .expect("run generation pass");

    let dataset = load_dataset(&DataLayout::new(&data_dir)).expect("load dataset");

    assert_eq!(dataset.products.len() as u64, report.products_written);
    assert_eq!(dataset.salesmen.len() as u64, report.salesmen_written);
    assert_eq!(dataset.sales.len() as u64, report.sales_files_written);

    let total_sales: usize = dataset.sales.values().map(Vec::len).sum();
    assert_eq!(total_sales as u64, report.sale_lines_written);

    // Every loaded sale resolves against the loaded catalog.
    for sales in dataset.sales.values() {
        for sale in sales {
            assert!(dataset.products.contains_key(&sale.product_id()));
        }
    }

    assert!(
        !dataset.report.has_warnings(),
        "round trip must be warning-free: {:?}",
        dataset.report.warnings
    );
}
