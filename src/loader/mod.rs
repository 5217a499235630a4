pub mod cancel;
pub mod config;
pub mod error;
pub mod source;
pub mod ticket;

use crate::catalog::LoadedCatalog;
use crate::search::Matcher;
use crate::specimen::parse_specimens;
use crate::state::{CatalogEvent, CatalogState, Transition};

pub use cancel::CancelToken;
pub use config::LoaderConfig;
pub use error::{ConfigError, LoadError, LOAD_FAILURE_PREFIX};
pub use source::{FileSource, HttpSource, SpecimenSource};
pub use ticket::{LoadResolution, LoadTicket};

/// Performs the one dataset read of a session.
pub struct CatalogLoader<S> {
    source: S,
}

impl CatalogLoader<HttpSource> {
    pub fn from_config(config: &LoaderConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(HttpSource::from_config(config)?))
    }
}

impl<S> CatalogLoader<S>
where
    S: SpecimenSource,
{
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Read and decode the dataset for `ticket`.
    ///
    /// Never touches session state. If the ticket is cancelled first, the
    /// read is abandoned and the resolution carries `LoadError::Cancelled`.
    pub async fn fetch(&self, ticket: LoadTicket) -> LoadResolution {
        if ticket.is_cancelled() {
            return LoadResolution::new(ticket, Err(LoadError::Cancelled));
        }

        let source = self.source.describe();
        tracing::info!(session = ticket.session(), %source, "Loading specimen catalog");

        let read = tokio::select! {
            biased;
            _ = ticket.cancel_token().cancelled() => Err(LoadError::Cancelled),
            body = self.source.read() => body,
        };

        let result = read.and_then(|body| {
            let specimens = parse_specimens(&body)?;
            Ok(LoadedCatalog::assemble(&body, source.clone(), specimens))
        });

        match &result {
            Ok(loaded) => tracing::info!(
                session = ticket.session(),
                specimens = loaded.catalog.len(),
                version = %loaded.manifest.version.as_str(),
                "Specimen catalog fetched"
            ),
            Err(LoadError::Cancelled) if ticket.is_cancelled() => {
                tracing::debug!(session = ticket.session(), "Catalog fetch abandoned")
            }
            Err(e) => tracing::warn!(session = ticket.session(), %source, "Catalog fetch failed: {}", e),
        }

        LoadResolution::new(ticket, result)
    }

    /// Mount `state`, fetch, and apply the resolution.
    ///
    /// On an already-mounted state this is a no-op and no read is issued.
    pub async fn load_into<M: Matcher>(&self, state: &mut CatalogState<M>) -> Transition {
        match state.apply(CatalogEvent::Mount) {
            Transition::Started(ticket) => {
                let resolution = self.fetch(ticket).await;
                state.apply(CatalogEvent::Resolved(resolution))
            }
            other => other,
        }
    }
}
