/// The search box contents.
///
/// Normalization is lower-casing only: no trimming, no diacritic folding,
/// no splitting into terms. `"  quercus"` keeps its leading spaces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub raw: String,
    pub normalized: String,
}

impl SearchQuery {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let normalized = raw.to_lowercase();

        Self { raw, normalized }
    }

    /// The empty query matches every specimen.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}
