use serde::{Deserialize, Serialize};

use crate::search::query::SearchQuery;
use crate::specimen::Specimen;

pub trait Matcher {
    fn matches(&self, specimen: &Specimen, query: &SearchQuery) -> bool;
}

/// Specimen fields the search box looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchField {
    ScientificName,
    Family,
    Collector,
}

impl SearchField {
    pub const ALL: [SearchField; 3] = [
        SearchField::ScientificName,
        SearchField::Family,
        SearchField::Collector,
    ];

    pub fn value(self, specimen: &Specimen) -> &str {
        match self {
            SearchField::ScientificName => &specimen.scientific_name,
            SearchField::Family => &specimen.family,
            SearchField::Collector => &specimen.collector,
        }
    }
}

/// Case-insensitive substring containment over a fixed set of fields.
///
/// Locality, collection date, catalog id and image url are not searchable.
#[derive(Debug, Clone)]
pub struct FieldSubstringMatcher {
    fields: Vec<SearchField>,
}

impl Default for FieldSubstringMatcher {
    fn default() -> Self {
        Self {
            fields: SearchField::ALL.to_vec(),
        }
    }
}

impl FieldSubstringMatcher {
    pub fn with_fields(fields: impl IntoIterator<Item = SearchField>) -> Self {
        Self {
            fields: fields.into_iter().collect(),
        }
    }

    pub fn fields(&self) -> &[SearchField] {
        &self.fields
    }
}

impl Matcher for FieldSubstringMatcher {
    fn matches(&self, specimen: &Specimen, query: &SearchQuery) -> bool {
        if query.normalized.is_empty() {
            return true;
        }

        self.fields
            .iter()
            .any(|field| field.value(specimen).to_lowercase().contains(&query.normalized))
    }
}
