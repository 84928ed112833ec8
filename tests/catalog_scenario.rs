// End-to-end: three real files on disk → load → display → sort

use std::fs;
use std::path::PathBuf;
use store_catalog::{
    CatalogConfig, CatalogError, CatalogLoader, ItemKind, OutputFormat, SourcePolicy,
};

struct Fixture {
    dir: PathBuf,
}

impl Fixture {
    fn new(name: &str) -> Self {
        let dir = std::env::temp_dir().join(format!("store_catalog_it_{}_{}", std::process::id(), name));
        fs::create_dir_all(&dir).unwrap();
        Fixture { dir }
    }

    fn write(&self, file: &str, content: &str) -> PathBuf {
        let path = self.dir.join(file);
        fs::write(&path, content).unwrap();
        path
    }

    fn config(&self) -> CatalogConfig {
        let mut config = CatalogConfig::default();
        config.sources.food = self.dir.join("food.txt");
        config.sources.electronic = self.dir.join("electronic.txt");
        config.sources.service = self.dir.join("service.txt");
        config
    }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.dir);
    }
}

#[test]
fn test_end_to_end_load_display_sort() {
    let fx = Fixture::new("e2e");
    fx.write("food.txt", "1,Bread,3.50\n");
    fx.write("electronic.txt", "2,Phone,699.99\n");
    fx.write("service.txt", "3,Repair,45.00\n");

    let mut catalog = CatalogLoader::from_config(&fx.config()).load().unwrap();

    assert_eq!(
        catalog.display(),
        vec![
            "FoodItem: ID=1, Name=Bread, Price=3.5",
            "ElectronicItem: ID=2, Name=Phone, Price=699.99",
            "ServiceItem: ID=3, Name=Repair, Price=45.0",
        ]
    );

    catalog.sort_by_price();
    let names: Vec<&str> = catalog.iter().map(|i| i.name()).collect();
    assert_eq!(names, vec!["Bread", "Repair", "Phone"]);
}

#[test]
fn test_missing_file_contributes_nothing() {
    let fx = Fixture::new("missing");
    fx.write("food.txt", "1,Bread,3.50\n2,Butter,4.00\n");
    fx.write("service.txt", "3,Repair,45.00\n");

    let (catalog, report) = CatalogLoader::from_config(&fx.config())
        .load_with_report()
        .unwrap();

    assert_eq!(catalog.len(), 3);
    assert_eq!(report.unavailable.len(), 1);
    assert_eq!(report.unavailable[0].kind, ItemKind::Electronic);
}

#[test]
fn test_missing_file_aborts_when_configured() {
    let fx = Fixture::new("abort");
    fx.write("food.txt", "1,Bread,3.50\n");

    let mut config = fx.config();
    config.on_missing_source = SourcePolicy::Abort;

    let err = CatalogLoader::from_config(&config).load().unwrap_err();
    assert!(matches!(err, CatalogError::SourceUnavailable { kind: ItemKind::Electronic, .. }));
}

#[test]
fn test_badly_encoded_line_does_not_drop_the_file() {
    let fx = Fixture::new("latin1");
    fs::write(fx.dir.join("food.txt"), b"1,Bread,3.50\n2,Caf\xe9,2.00\n3,Milk,1.25\n").unwrap();
    fx.write("electronic.txt", "");
    fx.write("service.txt", "");

    let (catalog, report) = CatalogLoader::from_config(&fx.config())
        .load_with_report()
        .unwrap();

    assert!(report.unavailable.is_empty());
    let names: Vec<&str> = catalog.iter().map(|i| i.name()).collect();
    assert_eq!(names, vec!["Bread", "Caf\u{FFFD}", "Milk"]);
}

#[test]
fn test_malformed_line_reports_file_and_line() {
    let fx = Fixture::new("malformed");
    fx.write("food.txt", "1,Bread,3.50\nabc,Widget,9.99\n");
    fx.write("electronic.txt", "");
    fx.write("service.txt", "");

    let err = CatalogLoader::from_config(&fx.config()).load().unwrap_err();
    let message = err.to_string();
    assert!(message.contains("food.txt:2"), "{}", message);
    assert!(message.contains("abc"), "{}", message);
}

#[test]
fn test_config_file_drives_the_load() {
    let fx = Fixture::new("config");
    let food = fx.write("food.txt", "1,Bread,3.50\nbad line\n");
    let service = fx.write("service.txt", "3,Repair,45.00\n");
    let config_path = fx.write(
        "catalog.json",
        &format!(
            r#"{{ "sources": {{ "food": {:?}, "electronic": {:?}, "service": {:?} }}, "strict": false, "output": "json" }}"#,
            food,
            fx.dir.join("no_electronics.txt"),
            service
        ),
    );

    let config = CatalogConfig::load(&config_path).unwrap();
    assert_eq!(config.output, OutputFormat::Json);
    assert!(!config.strict);

    let (catalog, report) = CatalogLoader::from_config(&config).load_with_report().unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].line, 2);
    assert_eq!(report.unavailable.len(), 1);
}
