// 📥 Catalog Loader - three sources → one ordered catalog
//
// Food first, then electronic, then service; line order is kept within
// each source. Missing sources and malformed lines follow the policy in
// CatalogConfig.

use crate::catalog::Catalog;
use crate::config::{CatalogConfig, SourcePolicy};
use crate::error::{CatalogError, CatalogResult, ParseError};
use crate::item::{Item, ItemKind};
use crate::source::{FileSource, LineSource};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::{debug, info, warn};

// ============================================================================
// LOAD REPORT
// ============================================================================

/// A source that could not be read and was skipped
#[derive(Debug, Clone)]
pub struct UnavailableSource {
    pub kind: ItemKind,
    pub path: PathBuf,
    pub reason: String,
}

/// What happened during a load
#[derive(Debug, Clone)]
pub struct LoadReport {
    pub loaded_at: DateTime<Utc>,
    pub loaded: HashMap<ItemKind, usize>,
    pub unavailable: Vec<UnavailableSource>,
    /// Lines skipped in non-strict mode
    pub skipped: Vec<ParseError>,
}

impl LoadReport {
    fn new() -> Self {
        LoadReport {
            loaded_at: Utc::now(),
            loaded: HashMap::new(),
            unavailable: Vec::new(),
            skipped: Vec::new(),
        }
    }

    pub fn total_loaded(&self) -> usize {
        self.loaded.values().sum()
    }

    pub fn loaded_for(&self, kind: ItemKind) -> usize {
        self.loaded.get(&kind).copied().unwrap_or(0)
    }

    pub fn is_clean(&self) -> bool {
        self.unavailable.is_empty() && self.skipped.is_empty()
    }

    pub fn summary(&self) -> String {
        format!(
            "Loaded {} items (food: {}, electronic: {}, service: {}), {} sources unavailable, {} lines skipped",
            self.total_loaded(),
            self.loaded_for(ItemKind::Food),
            self.loaded_for(ItemKind::Electronic),
            self.loaded_for(ItemKind::Service),
            self.unavailable.len(),
            self.skipped.len()
        )
    }
}

// ============================================================================
// LOADER
// ============================================================================

pub struct CatalogLoader {
    sources: Vec<(ItemKind, Box<dyn LineSource>)>,
    strict: bool,
    on_missing_source: SourcePolicy,
}

impl CatalogLoader {
    /// Loader with no sources; add them with `with_source`
    pub fn new() -> Self {
        CatalogLoader {
            sources: Vec::new(),
            strict: true,
            on_missing_source: SourcePolicy::Skip,
        }
    }

    /// Loader over the three configured files
    pub fn from_config(config: &CatalogConfig) -> Self {
        let mut loader = CatalogLoader::new()
            .strict(config.strict)
            .on_missing_source(config.on_missing_source);

        for kind in ItemKind::ALL {
            let path = config.sources.for_kind(kind);
            loader = loader.with_source(kind, FileSource::new(path));
        }

        loader
    }

    /// Builder pattern: register a source for a kind
    ///
    /// Sources are read in kind order (food, electronic, service); several
    /// sources of the same kind are read in the order they were added.
    pub fn with_source(mut self, kind: ItemKind, source: impl LineSource + 'static) -> Self {
        self.sources.push((kind, Box::new(source)));
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn on_missing_source(mut self, policy: SourcePolicy) -> Self {
        self.on_missing_source = policy;
        self
    }

    pub fn load(&self) -> CatalogResult<Catalog> {
        self.load_with_report().map(|(catalog, _)| catalog)
    }

    pub fn load_with_report(&self) -> CatalogResult<(Catalog, LoadReport)> {
        let mut catalog = Catalog::new();
        let mut report = LoadReport::new();

        for kind in ItemKind::ALL {
            for (_, source) in self.sources.iter().filter(|(k, _)| *k == kind) {
                self.load_source(kind, &**source, &mut catalog, &mut report)?;
            }
        }

        info!(
            total = report.total_loaded(),
            unavailable = report.unavailable.len(),
            skipped = report.skipped.len(),
            "catalog loaded"
        );

        Ok((catalog, report))
    }

    fn load_source(
        &self,
        kind: ItemKind,
        source: &dyn LineSource,
        catalog: &mut Catalog,
        report: &mut LoadReport,
    ) -> CatalogResult<()> {
        let name = source.name();

        let lines = match source.read_lines() {
            Ok(lines) => lines,
            Err(err) => match self.on_missing_source {
                SourcePolicy::Abort => {
                    return Err(CatalogError::SourceUnavailable {
                        kind,
                        path: source.path(),
                        source: err,
                    });
                }
                SourcePolicy::Skip => {
                    warn!(%kind, source = %name, error = %err, "source unavailable, continuing without it");
                    report.unavailable.push(UnavailableSource {
                        kind,
                        path: source.path(),
                        reason: err.to_string(),
                    });
                    return Ok(());
                }
            },
        };

        debug!(%kind, source = %name, lines = lines.len(), "reading source");

        for (index, line) in lines.iter().enumerate() {
            match Item::from_record(kind, line) {
                Ok(item) => {
                    catalog.push(item);
                    *report.loaded.entry(kind).or_insert(0) += 1;
                }
                Err(reason) => {
                    let error = ParseError {
                        source_name: name.clone(),
                        line: index + 1,
                        kind,
                        reason,
                    };

                    if self.strict {
                        return Err(error.into());
                    }

                    warn!(%error, "skipping malformed line");
                    report.skipped.push(error);
                }
            }
        }

        Ok(())
    }
}

impl Default for CatalogLoader {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
