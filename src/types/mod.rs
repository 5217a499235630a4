pub mod catalog_view;
pub mod identifiers;

pub use catalog_view::{CatalogSnapshot, CatalogView, Phase, RenderCondition, PLACEHOLDER_CARDS};
pub use identifiers::{CatalogId, CatalogVersion};
