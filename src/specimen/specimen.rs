use serde::{Deserialize, Serialize};

use crate::types::identifiers::CatalogId;

/// One digitized herbarium sheet.
///
/// Field names on the wire follow the published dataset (`id_catalogo`,
/// `nombre_cientifico`, ...). Every field is a required string; the core
/// does not parse dates or validate image references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specimen {
    #[serde(rename = "id_catalogo")]
    pub catalog_id: CatalogId,
    #[serde(rename = "nombre_cientifico")]
    pub scientific_name: String,
    #[serde(rename = "familia")]
    pub family: String,
    #[serde(rename = "colector")]
    pub collector: String,
    #[serde(rename = "fecha_colecta")]
    pub collection_date: String,
    #[serde(rename = "localidad")]
    pub locality: String,
    #[serde(rename = "url_imagen")]
    pub image_url: String,
}

impl Specimen {
    /// Alt text a renderer puts on the specimen image.
    pub fn image_alt_text(&self) -> String {
        format!("Imagen de {}", self.scientific_name)
    }
}
