mod common;

use std::time::Duration;

use common::StaticSource;
use specimen_catalog::loader::{CancelToken, CatalogLoader, LoadError};
use specimen_catalog::state::{CatalogEvent, CatalogState, IgnoredReason, Transition};
use specimen_catalog::types::Phase;

const BODY: &str = r#"[{"id_catalogo":"USM-1","nombre_cientifico":"Piper peruvianum","familia":"Piperaceae","colector":"Raimondi","fecha_colecta":"1870-01-01","localidad":"Lima","url_imagen":"/x.jpg"}]"#;

fn slow_source() -> StaticSource {
    StaticSource::body(BODY).with_delay(Duration::from_secs(30))
}

#[tokio::test]
async fn teardown_abandons_in_flight_fetch() {
    let loader = CatalogLoader::new(slow_source());
    let mut state = CatalogState::new();

    let Transition::Started(ticket) = state.apply(CatalogEvent::Mount) else {
        panic!("mount must start the load");
    };

    let (resolution, teardown) = tokio::join!(loader.fetch(ticket), async {
        tokio::time::sleep(Duration::from_millis(20)).await;
        state.apply(CatalogEvent::TearDown)
    });

    assert!(matches!(teardown, Transition::TornDown));
    assert!(matches!(resolution.result, Err(LoadError::Cancelled)));

    let late = state.apply(CatalogEvent::Resolved(resolution));
    assert!(matches!(late, Transition::Ignored(IgnoredReason::TornDown)));
    assert_eq!(state.phase(), Phase::Loading);
    assert!(state.catalog().is_empty());
    assert!(state.error().is_none());
}

#[tokio::test]
async fn late_success_after_teardown_is_a_no_op() {
    let loader = CatalogLoader::new(StaticSource::body(BODY));
    let mut state = CatalogState::new();

    let Transition::Started(ticket) = state.apply(CatalogEvent::Mount) else {
        panic!("mount must start the load");
    };
    let resolution = loader.fetch(ticket).await;
    assert!(resolution.result.is_ok());

    state.apply(CatalogEvent::TearDown);
    let late = state.apply(CatalogEvent::Resolved(resolution));

    assert!(late.is_ignored());
    assert_eq!(state.phase(), Phase::Loading);
    assert!(state.catalog().is_empty());
    assert!(state.view().visible.is_empty());
}

#[tokio::test]
async fn cancelled_token_skips_the_read() {
    let loader = CatalogLoader::new(StaticSource::body(BODY));
    let mut state = CatalogState::new();

    let Transition::Started(ticket) = state.apply(CatalogEvent::Mount) else {
        panic!("mount must start the load");
    };
    state.cancel_token().cancel();

    let resolution = loader.fetch(ticket).await;
    assert!(matches!(resolution.result, Err(LoadError::Cancelled)));
    assert_eq!(loader.source().reads(), 0);

    let transition = state.apply(CatalogEvent::Resolved(resolution));
    assert!(matches!(
        transition,
        Transition::Ignored(IgnoredReason::Cancelled)
    ));
}

#[tokio::test]
async fn events_after_teardown_are_ignored() {
    let mut state = CatalogState::new();
    state.apply(CatalogEvent::TearDown);

    assert!(state.is_torn_down());
    assert!(state.apply(CatalogEvent::Mount).is_ignored());
    assert!(state.apply(CatalogEvent::QueryChanged("piper".into())).is_ignored());
    assert!(state.apply(CatalogEvent::TearDown).is_ignored());
    assert_eq!(state.phase(), Phase::Idle);
    assert_eq!(state.query().raw, "");
}

#[tokio::test]
async fn cancel_token_clones_share_the_signal() {
    let token = CancelToken::new();
    let observer = token.clone();
    assert!(!observer.is_cancelled());

    let ((), ()) = tokio::join!(
        async {
            tokio::time::timeout(Duration::from_secs(5), observer.cancelled())
                .await
                .expect("observer must wake on cancel")
        },
        async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            token.cancel();
        }
    );
    assert!(token.is_cancelled());

    // already cancelled: resolves immediately
    token.cancelled().await;
}
