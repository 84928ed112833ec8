// 🖨️ Output - catalog listing and the sorting demo

use crate::catalog::{Catalog, SortKey};
use crate::config::OutputFormat;
use crate::error::CatalogResult;
use crate::item::format_price;
use std::io::Write;

// ============================================================================
// RENDER
// ============================================================================

/// Write the catalog in its current order.
pub fn render<W: Write>(catalog: &Catalog, format: OutputFormat, out: &mut W) -> CatalogResult<()> {
    match format {
        OutputFormat::Text => {
            for line in catalog.display() {
                writeln!(out, "{}", line)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, catalog.items())?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::WriterBuilder::new().from_writer(&mut *out);
            writer.write_record(["kind", "id", "name", "price"])?;
            for item in catalog {
                let id = item.id().to_string();
                let price = format_price(item.price());
                writer.write_record([item.kind().name(), id.as_str(), item.name(), price.as_str()])?;
            }
            writer.flush()?;
        }
    }
    Ok(())
}

// ============================================================================
// DEMO
// ============================================================================

/// Print the listing before sorting, then after each sort key in turn.
///
/// Leaves the catalog sorted by price.
pub fn run_demo<W: Write>(catalog: &mut Catalog, format: OutputFormat, out: &mut W) -> CatalogResult<()> {
    writeln!(out, "Items before sorting:")?;
    render(catalog, format, out)?;

    for (key, title) in [
        (SortKey::Id, "Sorted by ID:"),
        (SortKey::Name, "Sorted by Name:"),
        (SortKey::Price, "Sorted by Price:"),
    ] {
        catalog.sort_by(key);
        writeln!(out, "\n{}", title)?;
        render(catalog, format, out)?;
    }

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{Item, ItemKind};

    fn sample() -> Catalog {
        vec![
            Item::new(ItemKind::Food, 1, "Bread", 3.5),
            Item::new(ItemKind::Electronic, 2, "Phone", 699.99),
            Item::new(ItemKind::Service, 3, "Repair", 45.0),
        ]
        .into_iter()
        .collect()
    }

    fn to_string(bytes: Vec<u8>) -> String {
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_render_text() {
        let mut out = Vec::new();
        render(&sample(), OutputFormat::Text, &mut out).unwrap();

        assert_eq!(
            to_string(out),
            "FoodItem: ID=1, Name=Bread, Price=3.5\n\
             ElectronicItem: ID=2, Name=Phone, Price=699.99\n\
             ServiceItem: ID=3, Name=Repair, Price=45.0\n"
        );
    }

    #[test]
    fn test_render_json() {
        let mut out = Vec::new();
        render(&sample(), OutputFormat::Json, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let items = value.as_array().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0]["kind"], "food");
        assert_eq!(items[1]["name"], "Phone");
        assert_eq!(items[2]["price"], 45.0);
    }

    #[test]
    fn test_render_csv() {
        let mut out = Vec::new();
        render(&sample(), OutputFormat::Csv, &mut out).unwrap();

        assert_eq!(
            to_string(out),
            "kind,id,name,price\nfood,1,Bread,3.5\nelectronic,2,Phone,699.99\nservice,3,Repair,45.0\n"
        );
    }

    #[test]
    fn test_demo_sequence() {
        let mut catalog: Catalog = vec![
            Item::new(ItemKind::Food, 3, "Cake", 9.0),
            Item::new(ItemKind::Electronic, 1, "Mouse", 25.5),
            Item::new(ItemKind::Service, 2, "Audit", 100.0),
        ]
        .into_iter()
        .collect();

        let mut out = Vec::new();
        run_demo(&mut catalog, OutputFormat::Text, &mut out).unwrap();

        let expected = "\
Items before sorting:
FoodItem: ID=3, Name=Cake, Price=9.0
ElectronicItem: ID=1, Name=Mouse, Price=25.5
ServiceItem: ID=2, Name=Audit, Price=100.0

Sorted by ID:
ElectronicItem: ID=1, Name=Mouse, Price=25.5
ServiceItem: ID=2, Name=Audit, Price=100.0
FoodItem: ID=3, Name=Cake, Price=9.0

Sorted by Name:
ServiceItem: ID=2, Name=Audit, Price=100.0
FoodItem: ID=3, Name=Cake, Price=9.0
ElectronicItem: ID=1, Name=Mouse, Price=25.5

Sorted by Price:
FoodItem: ID=3, Name=Cake, Price=9.0
ElectronicItem: ID=1, Name=Mouse, Price=25.5
ServiceItem: ID=2, Name=Audit, Price=100.0
";
        assert_eq!(to_string(out), expected);
    }
}
