use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::diagnostics::CatalogDiagnostics;
use crate::specimen::Specimen;
use crate::types::identifiers::CatalogVersion;

/// Record of one successful load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogManifest {
    pub version: CatalogVersion,
    pub source: String,
    pub loaded_at: DateTime<Utc>, // informational only
    pub specimen_count: usize,
    pub diagnostics: CatalogDiagnostics,
}

impl CatalogManifest {
    pub fn describe(body: &[u8], source: impl Into<String>, specimens: &[Specimen]) -> Self {
        Self {
            version: CatalogVersion::from_content(body),
            source: source.into(),
            loaded_at: Utc::now(),
            specimen_count: specimens.len(),
            diagnostics: CatalogDiagnostics::inspect(specimens),
        }
    }
}
