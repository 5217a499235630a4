pub mod parser;
pub mod specimen;

pub use crate::types::identifiers::CatalogId;
pub use parser::{parse_specimens, SpecimenParseError};
pub use specimen::Specimen;
