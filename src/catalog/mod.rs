pub mod catalog;
pub mod diagnostics;
pub mod manifest;

pub use catalog::{Catalog, LoadedCatalog};
pub use diagnostics::{CatalogDiagnostics, DuplicateId};
pub use manifest::CatalogManifest;
