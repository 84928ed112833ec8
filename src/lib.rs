// Store Catalog - Core Library
// Exposes all modules for use in the demo binary and tests

pub mod item;
pub mod catalog;
pub mod source;
pub mod loader;
pub mod config;
pub mod error;
pub mod output;

// Re-export commonly used types
pub use item::{Item, ItemKind, RecordError, format_price};
pub use catalog::{Catalog, SortKey};
pub use source::{LineSource, FileSource, InlineSource, read_lines};
pub use loader::{CatalogLoader, LoadReport, UnavailableSource};
pub use config::{CatalogConfig, SourcePaths, SourcePolicy, OutputFormat, CONFIG_FILE};
pub use error::{CatalogError, CatalogResult, ParseError};
pub use output::{render, run_demo};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
