use std::fs;
use std::path::{Path, PathBuf};

use salesforge_core::{DataLayout, DocType, SalesmanId};
use salesforge_load::{LoadError, LoadReport, load_dataset, load_products, load_sales};

fn temp_data_dir(label: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("salesforge_load_{label}_{}", uuid::Uuid::new_v4()));
    dir
}

fn write_dataset(root: &Path, products: &str, salesmen: &str, sales: &[(&str, &str)]) {
    fs::create_dir_all(root.join("sales")).expect("create layout");
    fs::write(root.join("products.txt"), products).expect("write products");
    fs::write(root.join("salesmen.txt"), salesmen).expect("write salesmen");
    for (name, contents) in sales {
        fs::write(root.join("sales").join(name), contents).expect("write sales file");
    }
}

fn ada() -> SalesmanId {
    SalesmanId::new(DocType::Cc, 10_000_001)
}

#[test]
fn minimal_dataset_loads_without_warnings() {
    let root = temp_data_dir("minimal");
    write_dataset(
        &root,
        "1;Cocacola;1500\n",
        "CC;10000001;Ada;Byron\n",
        &[("CC_10000001.txt", "1;3\n")],
    );

    let dataset = load_dataset(&DataLayout::new(&root)).expect("load dataset");

    assert_eq!(dataset.products.len(), 1);
    assert_eq!(dataset.products[&1].name(), "Cocacola");
    assert_eq!(dataset.salesmen[&ada()].full_name(), "Ada Byron");

    let sales = &dataset.sales[&ada()];
    assert_eq!(sales.len(), 1);
    assert_eq!(sales[0].product_id(), 1);
    assert_eq!(sales[0].quantity(), 3);
    assert!(!dataset.report.has_warnings());
}

#[test]
fn unknown_product_reference_is_skipped() {
    let root = temp_data_dir("unknown_product");
    write_dataset(
        &root,
        "1;Cocacola;1500\n",
        "CC;10000001;Ada;Byron\n",
        &[("CC_10000001.txt", "2;4\n")],
    );

    let dataset = load_dataset(&DataLayout::new(&root)).expect("load dataset");

    assert!(dataset.sales[&ada()].is_empty());
    assert_eq!(dataset.report.warnings.len(), 1);
    assert!(dataset.report.warnings[0].reason.contains("unknown product"));
}

#[test]
fn orphan_sales_file_is_skipped() {
    let root = temp_data_dir("orphan");
    write_dataset(&root, "", "", &[("CC_10000001.txt", "1;3\n")]);

    let dataset = load_dataset(&DataLayout::new(&root)).expect("load dataset");

    assert!(dataset.sales.is_empty());
    assert_eq!(dataset.report.warnings.len(), 1);
    assert_eq!(
        dataset.report.warnings[0].line, None,
        "orphan files warn at file level"
    );
}

#[test]
fn non_positive_quantities_are_skipped() {
    let root = temp_data_dir("quantity");
    write_dataset(
        &root,
        "1;Cocacola;1500\n",
        "CC;10000001;Ada;Byron\n",
        &[("CC_10000001.txt", "1;0\n1;-3\n1;2\n")],
    );

    let dataset = load_dataset(&DataLayout::new(&root)).expect("load dataset");

    let sales = &dataset.sales[&ada()];
    assert_eq!(sales.len(), 1);
    assert_eq!(sales[0].quantity(), 2);
    assert_eq!(dataset.report.warnings.len(), 2);
}

#[test]
fn malformed_product_line_leaves_catalog_empty() {
    let root = temp_data_dir("bad_product");
    fs::create_dir_all(&root).expect("create dir");
    fs::write(root.join("products.txt"), "abc;Cocacola;1500\n").expect("write products");

    let mut report = LoadReport::default();
    let products = load_products(&root.join("products.txt"), &mut report).expect("load products");

    assert!(products.is_empty());
    assert_eq!(report.warnings.len(), 1);
}

#[test]
fn missing_sales_directory_is_fatal() {
    let root = temp_data_dir("missing_dir");
    let result = load_sales(
        &root.join("sales"),
        &Default::default(),
        &Default::default(),
        &mut LoadReport::default(),
    );
    assert!(matches!(result, Err(LoadError::SalesDirNotFound(_))));
}

#[test]
fn trailing_separator_is_tolerated() {
    let root = temp_data_dir("trailing");
    write_dataset(
        &root,
        "3;Pepsi;2000\n",
        "CE;20000002;Grace;Hopper\n",
        &[("CE_20000002.txt", "3;5;\n")],
    );

    let dataset = load_dataset(&DataLayout::new(&root)).expect("load dataset");
    let id = SalesmanId::new(DocType::Ce, 20_000_002);

    assert_eq!(dataset.sales[&id].len(), 1);
    assert_eq!(dataset.sales[&id][0].product_id(), 3);
    assert_eq!(dataset.sales[&id][0].quantity(), 5);
    assert!(!dataset.report.has_warnings());
}

#[test]
fn malformed_sales_file_names_are_skipped() {
    let root = temp_data_dir("bad_names");
    write_dataset(
        &root,
        "1;Cocacola;1500\n",
        "CC;10000001;Ada;Byron\n",
        &[
            ("FOO.txt", "1;1\n"),
            ("A_B_C.txt", "1;1\n"),
            ("CC_10000001.txt", "1;1\n"),
        ],
    );

    let dataset = load_dataset(&DataLayout::new(&root)).expect("load dataset");

    assert_eq!(dataset.sales.len(), 1);
    assert_eq!(dataset.sales[&ada()].len(), 1);
    assert_eq!(dataset.report.warnings.len(), 2);
}

#[test]
fn single_field_sale_line_is_skipped() {
    let root = temp_data_dir("one_field");
    write_dataset(
        &root,
        "1;Cocacola;1500\n",
        "CC;10000001;Ada;Byron\n",
        &[("CC_10000001.txt", "7\n1;1\n")],
    );

    let dataset = load_dataset(&DataLayout::new(&root)).expect("load dataset");

    assert_eq!(dataset.sales[&ada()].len(), 1);
    assert_eq!(dataset.report.warnings.len(), 1);
}

#[test]
fn duplicate_product_ids_warn_and_keep_the_later_row() {
    let root = temp_data_dir("dup_products");
    fs::create_dir_all(&root).expect("create dir");
    fs::write(
        root.join("products.txt"),
        "1;Cocacola;1500\n1;Pepsi;2000\n",
    )
    .expect("write products");

    let mut report = LoadReport::default();
    let products = load_products(&root.join("products.txt"), &mut report).expect("load products");

    assert_eq!(products.len(), 1);
    assert_eq!(products[&1].name(), "Pepsi");
    assert_eq!(report.warnings.len(), 1);
}

#[test]
fn empty_lines_are_ignored() {
    let root = temp_data_dir("empty_lines");
    write_dataset(
        &root,
        "1;Cocacola;1500\n\n",
        "\nCC;10000001;Ada;Byron\n\n",
        &[("CC_10000001.txt", "\n1;2\n\n")],
    );

    let dataset = load_dataset(&DataLayout::new(&root)).expect("load dataset");

    assert_eq!(dataset.products.len(), 1);
    assert_eq!(dataset.salesmen.len(), 1);
    assert_eq!(dataset.sales[&ada()].len(), 1);
    assert!(!dataset.report.has_warnings());
}
