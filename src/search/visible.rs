use crate::catalog::Catalog;
use crate::specimen::Specimen;

/// Positions of the matching specimens, ascending, so visible order is
/// catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibleSet {
    positions: Vec<usize>,
}

impl VisibleSet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn from_positions(positions: Vec<usize>) -> Self {
        debug_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        Self { positions }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// Borrow the visible specimens out of the catalog they were computed from.
    pub fn resolve<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Specimen> {
        self.positions
            .iter()
            .filter_map(|&position| catalog.get(position))
            .collect()
    }
}
