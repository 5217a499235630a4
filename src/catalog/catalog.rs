// Read-only after construction:
// no push
// no retain
// positions are stable for the life of the session

use serde::{Deserialize, Serialize};

use crate::catalog::manifest::CatalogManifest;
use crate::specimen::Specimen;
use crate::types::identifiers::CatalogId;

/// Every specimen from one successful load, in dataset order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    specimens: Vec<Specimen>,
}

impl Catalog {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_specimens(specimens: Vec<Specimen>) -> Self {
        Self { specimens }
    }

    pub fn len(&self) -> usize {
        self.specimens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specimens.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&Specimen> {
        self.specimens.get(position)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Specimen> {
        self.specimens.iter()
    }

    pub fn as_slice(&self) -> &[Specimen] {
        &self.specimens
    }

    /// First specimen carrying `id`. Later duplicates are shadowed here but
    /// still present in the catalog.
    pub fn find(&self, id: &CatalogId) -> Option<&Specimen> {
        self.specimens.iter().find(|s| &s.catalog_id == id)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Specimen;
    type IntoIter = std::slice::Iter<'a, Specimen>;

    fn into_iter(self) -> Self::IntoIter {
        self.specimens.iter()
    }
}

/// A catalog together with the record of how it was loaded.
#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    pub catalog: Catalog,
    pub manifest: CatalogManifest,
}

impl LoadedCatalog {
    /// Build from the raw body and its decoded records.
    pub fn assemble(body: &[u8], source: impl Into<String>, specimens: Vec<Specimen>) -> Self {
        let manifest = CatalogManifest::describe(body, source, &specimens);
        Self {
            catalog: Catalog::from_specimens(specimens),
            manifest,
        }
    }
}
