// 🏷️ Item Model - one record shape, three kinds
// A single Item struct tagged with ItemKind, built by one parameterized constructor

use serde::Serialize;
use std::fmt;
use thiserror::Error;

// ============================================================================
// ITEM KIND
// ============================================================================

/// ItemKind - which source an item came from
///
/// Fixed at construction; an item never changes kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Food,
    Electronic,
    Service,
}

impl ItemKind {
    /// Load order of the three sources
    pub const ALL: [ItemKind; 3] = [ItemKind::Food, ItemKind::Electronic, ItemKind::Service];

    /// Short name for logs and config
    pub fn name(&self) -> &'static str {
        match self {
            ItemKind::Food => "food",
            ItemKind::Electronic => "electronic",
            ItemKind::Service => "service",
        }
    }

    /// Label used as the prefix of a display line
    pub fn label(&self) -> &'static str {
        match self {
            ItemKind::Food => "FoodItem",
            ItemKind::Electronic => "ElectronicItem",
            ItemKind::Service => "ServiceItem",
        }
    }

    /// Factory: build an item of this kind from a raw line
    ///
    /// # Example:
    /// ```
    /// use store_catalog::ItemKind;
    /// let item = ItemKind::Food.create_item("1,Bread,3.50").unwrap();
    /// assert_eq!(item.to_string(), "FoodItem: ID=1, Name=Bread, Price=3.5");
    /// ```
    pub fn create_item(self, line: &str) -> Result<Item, RecordError> {
        Item::from_record(self, line)
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// RECORD ERRORS
// ============================================================================

/// Why a single raw line could not become an Item
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("expected 3 comma-separated fields, found {found}")]
    MissingFields { found: usize },

    #[error("id {value:?} is not an integer")]
    InvalidId { value: String },

    #[error("price {value:?} is not a non-negative decimal number")]
    InvalidPrice { value: String },
}

// ============================================================================
// ITEM
// ============================================================================

/// Item - id, name, price and kind; immutable once built
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    kind: ItemKind,
    id: i32,
    name: String,
    price: f64,
}

impl Item {
    pub fn new(kind: ItemKind, id: i32, name: impl Into<String>, price: f64) -> Self {
        Item {
            kind,
            id,
            name: name.into(),
            price,
        }
    }

    /// Parse `id,name,price` into an item of the given kind
    ///
    /// Splits on every comma with no quoting and no trimming.
    /// Fields past the third are ignored.
    pub fn from_record(kind: ItemKind, line: &str) -> Result<Self, RecordError> {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() < 3 {
            return Err(RecordError::MissingFields {
                found: fields.len(),
            });
        }

        let id = fields[0]
            .parse::<i32>()
            .map_err(|_| RecordError::InvalidId {
                value: fields[0].to_string(),
            })?;

        let price = parse_price(fields[2])?;

        Ok(Item::new(kind, id, fields[1], price))
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: ID={}, Name={}, Price={}",
            self.kind.label(),
            self.id,
            self.name,
            format_price(self.price)
        )
    }
}

fn parse_price(raw: &str) -> Result<f64, RecordError> {
    match raw.parse::<f64>() {
        Ok(price) if price.is_finite() && price >= 0.0 => Ok(price),
        _ => Err(RecordError::InvalidPrice {
            value: raw.to_string(),
        }),
    }
}

/// Format a price the way a double prints
///
/// Plain decimal in `[1e-3, 1e7)` with at least one fractional digit
/// (`45.0`, `3.5`, `699.99`); exponent form outside it (`1.2345678E7`,
/// `5.0E-4`). Digits are always the shortest that parse back exactly.
pub fn format_price(price: f64) -> String {
    let magnitude = price.abs();
    if price == 0.0 || (1e-3..1e7).contains(&magnitude) {
        let plain = format!("{}", price);
        if plain.contains('.') {
            plain
        } else {
            format!("{}.0", plain)
        }
    } else {
        let sci = format!("{:e}", price);
        match sci.split_once('e') {
            Some((mantissa, exponent)) if mantissa.contains('.') => {
                format!("{}E{}", mantissa, exponent)
            }
            Some((mantissa, exponent)) => format!("{}.0E{}", mantissa, exponent),
            None => sci,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
