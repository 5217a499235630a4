use thiserror::Error;

use super::specimen::Specimen;

#[derive(Debug, Error)]
pub enum SpecimenParseError {
    #[error("Body is not a JSON array of specimen records: {0}")]
    InvalidShape(#[from] serde_json::Error),
}

/// Decode a dataset body into specimens, preserving document order.
///
/// All or nothing: one malformed record fails the whole body.
pub fn parse_specimens(body: &[u8]) -> Result<Vec<Specimen>, SpecimenParseError> {
    let specimens: Vec<Specimen> = serde_json::from_slice(body)?;
    Ok(specimens)
}
