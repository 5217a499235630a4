pub mod matching;
pub mod query;
pub mod visible;

use crate::catalog::Catalog;
pub use matching::{FieldSubstringMatcher, Matcher, SearchField};
pub use query::SearchQuery;
pub use visible::VisibleSet;

/// Derives the visible subset of a catalog for a query.
///
/// Pure and total: the same (catalog, query) always yields the same set,
/// and no input makes it fail. Each call is a full scan; nothing is cached
/// between calls.
pub struct SpecimenFilter<M> {
    matcher: M,
}

impl Default for SpecimenFilter<FieldSubstringMatcher> {
    fn default() -> Self {
        Self {
            matcher: FieldSubstringMatcher::default(),
        }
    }
}

impl<M> SpecimenFilter<M>
where
    M: Matcher,
{
    pub fn new(matcher: M) -> Self {
        Self { matcher }
    }

    pub fn filter(&self, catalog: &Catalog, query: &SearchQuery) -> VisibleSet {
        let positions: Vec<usize> = catalog
            .iter()
            .enumerate()
            .filter(|(_, specimen)| self.matcher.matches(specimen, query))
            .map(|(position, _)| position)
            .collect();

        tracing::debug!(
            query = %query.raw,
            considered = catalog.len(),
            visible = positions.len(),
            "Recomputed visible set"
        );

        VisibleSet::from_positions(positions)
    }

    /// No catalog means nothing to show.
    pub fn filter_optional(&self, catalog: Option<&Catalog>, query: &SearchQuery) -> VisibleSet {
        match catalog {
            Some(catalog) => self.filter(catalog, query),
            None => VisibleSet::empty(),
        }
    }
}
