use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::specimen::Specimen;
use crate::types::identifiers::CatalogId;

/// A catalog id that appears more than once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateId {
    pub id: CatalogId,
    /// Every position the id occurs at, ascending.
    pub positions: Vec<usize>,
}

/// Key problems found in a dataset. Reported only; records are never
/// dropped or reordered because of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogDiagnostics {
    /// Sorted by id.
    pub duplicate_ids: Vec<DuplicateId>,
    pub blank_ids: Vec<usize>,
}

impl CatalogDiagnostics {
    pub fn inspect(specimens: &[Specimen]) -> Self {
        let mut seen: BTreeMap<&CatalogId, Vec<usize>> = BTreeMap::new();
        let mut blank_ids = Vec::new();

        for (position, specimen) in specimens.iter().enumerate() {
            if specimen.catalog_id.is_blank() {
                blank_ids.push(position);
            }
            seen.entry(&specimen.catalog_id).or_default().push(position);
        }

        // BTreeMap iteration keeps the report ordered by id
        let duplicate_ids = seen
            .into_iter()
            .filter(|(_, positions)| positions.len() > 1)
            .map(|(id, positions)| DuplicateId {
                id: id.clone(),
                positions,
            })
            .collect();

        Self {
            duplicate_ids,
            blank_ids,
        }
    }

    pub fn is_clean(&self) -> bool {
        self.duplicate_ids.is_empty() && self.blank_ids.is_empty()
    }

    pub fn has_duplicate(&self, id: &CatalogId) -> bool {
        self.duplicate_ids.iter().any(|d| &d.id == id)
    }
}
