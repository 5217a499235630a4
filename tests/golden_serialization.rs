use specimen_catalog::specimen::{parse_specimens, CatalogId, Specimen, SpecimenParseError};
use specimen_catalog::types::{CatalogSnapshot, Phase, RenderCondition};
use serde_json::{json, Value};

fn piper() -> Specimen {
    Specimen {
        catalog_id: CatalogId::new("USM-1"),
        scientific_name: "Piper peruvianum".into(),
        family: "Piperaceae".into(),
        collector: "Raimondi".into(),
        collection_date: "1870-01-01".into(),
        locality: "Lima".into(),
        image_url: "/x.jpg".into(),
    }
}

#[test]
fn golden_specimen_wire_names_and_order() {
    let json_str = serde_json::to_string(&piper()).unwrap();

    // id_catalogo -> nombre_cientifico -> familia -> colector -> fecha_colecta -> localidad -> url_imagen
    let keys = [
        "\"id_catalogo\":",
        "\"nombre_cientifico\":",
        "\"familia\":",
        "\"colector\":",
        "\"fecha_colecta\":",
        "\"localidad\":",
        "\"url_imagen\":",
    ];
    let positions: Vec<usize> = keys.iter().map(|k| json_str.find(k).unwrap()).collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{json_str}");

    let value: Value = serde_json::from_str(&json_str).unwrap();
    assert_eq!(
        value,
        json!({
            "id_catalogo": "USM-1",
            "nombre_cientifico": "Piper peruvianum",
            "familia": "Piperaceae",
            "colector": "Raimondi",
            "fecha_colecta": "1870-01-01",
            "localidad": "Lima",
            "url_imagen": "/x.jpg"
        })
    );
}

#[test]
fn parses_published_record() {
    let body = br#"[{"id_catalogo":"USM-1","nombre_cientifico":"Piper peruvianum","familia":"Piperaceae","colector":"Raimondi","fecha_colecta":"1870-01-01","localidad":"Lima","url_imagen":"/x.jpg"}]"#;
    let specimens = parse_specimens(body).unwrap();

    assert_eq!(specimens, vec![piper()]);
    assert_eq!(specimens[0].image_alt_text(), "Imagen de Piper peruvianum");
}

#[test]
fn unknown_fields_are_ignored() {
    let body = br#"[{"id_catalogo":"USM-1","nombre_cientifico":"Piper peruvianum","familia":"Piperaceae","colector":"Raimondi","fecha_colecta":"1870-01-01","localidad":"Lima","url_imagen":"/x.jpg","tipo":"holotipo"}]"#;

    assert_eq!(parse_specimens(body).unwrap(), vec![piper()]);
}

#[test]
fn rejects_bodies_of_the_wrong_shape() {
    let cases: [&[u8]; 5] = [
        b"",
        b"not json",
        br#"{"id_catalogo":"USM-1"}"#,
        br#"[{"id_catalogo":"USM-1"}]"#,
        br#"[{"id_catalogo":1,"nombre_cientifico":"a","familia":"b","colector":"c","fecha_colecta":"d","localidad":"e","url_imagen":"f"}]"#,
    ];

    for body in cases {
        assert!(
            matches!(parse_specimens(body), Err(SpecimenParseError::InvalidShape(_))),
            "{}",
            String::from_utf8_lossy(body)
        );
    }
}

#[test]
fn golden_snapshot_serialization() {
    let snapshot = CatalogSnapshot {
        phase: Phase::Loaded,
        visible: vec![piper()],
        error_message: None,
        query: "raim".into(),
    };

    let value = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(value["phase"], "loaded");
    assert_eq!(value["query"], "raim");
    assert_eq!(value["error_message"], Value::Null);
    assert_eq!(value["visible"][0]["id_catalogo"], "USM-1");

    let back: CatalogSnapshot = serde_json::from_value(value).unwrap();
    assert_eq!(back, snapshot);
}

#[test]
fn golden_render_condition_tags() {
    let cases = [
        (
            RenderCondition::Placeholders { count: 8 },
            json!({"kind": "placeholders", "count": 8}),
        ),
        (
            RenderCondition::ErrorPanel {
                message: "Failed to load specimen data: HTTP error! status: 500".into(),
            },
            json!({"kind": "error_panel", "message": "Failed to load specimen data: HTTP error! status: 500"}),
        ),
        (
            RenderCondition::Results { count: 3 },
            json!({"kind": "results", "count": 3}),
        ),
        (
            RenderCondition::NoMatches { query: "zzz".into() },
            json!({"kind": "no_matches", "query": "zzz"}),
        ),
    ];

    for (condition, expected) in cases {
        assert_eq!(serde_json::to_value(&condition).unwrap(), expected);
    }
}
