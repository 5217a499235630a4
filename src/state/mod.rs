//! Session state for one page of the catalog browser.
//!
//! [`CatalogState`] owns the catalog, the query, the load phase and the
//! visible set. [`CatalogState::apply`] is the only way to change any of
//! them, so every transition can be driven and observed without a UI.

use crate::catalog::{Catalog, CatalogManifest};
use crate::loader::cancel::CancelToken;
use crate::loader::error::LoadError;
use crate::loader::ticket::{next_session_id, LoadResolution, LoadTicket};
use crate::search::{FieldSubstringMatcher, Matcher, SearchQuery, SpecimenFilter, VisibleSet};
use crate::types::catalog_view::{CatalogSnapshot, CatalogView, Phase};

#[derive(Debug)]
pub enum CatalogEvent {
    /// The consumer attached. Starts the one load of the session.
    Mount,
    /// The fetch for this session finished.
    Resolved(LoadResolution),
    /// The search box changed.
    QueryChanged(String),
    /// The consumer went away.
    TearDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoredReason {
    AlreadyMounted(Phase),
    NotLoading(Phase),
    Cancelled,
    ForeignTicket,
    TornDown,
}

#[derive(Debug)]
pub enum Transition {
    Started(LoadTicket),
    Loaded { specimens: usize, visible: usize },
    Failed { message: String },
    QueryUpdated { visible: usize },
    TornDown,
    Ignored(IgnoredReason),
}

impl Transition {
    pub fn is_ignored(&self) -> bool {
        matches!(self, Transition::Ignored(_))
    }
}

pub struct CatalogState<M = FieldSubstringMatcher> {
    session: u64,
    cancel: CancelToken,
    phase: Phase,
    catalog: Catalog,
    manifest: Option<CatalogManifest>,
    query: SearchQuery,
    visible: VisibleSet,
    error: Option<LoadError>,
    error_message: Option<String>,
    filter: SpecimenFilter<M>,
    torn_down: bool,
}

impl CatalogState<FieldSubstringMatcher> {
    pub fn new() -> Self {
        Self::with_filter(SpecimenFilter::default())
    }
}

impl Default for CatalogState<FieldSubstringMatcher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> CatalogState<M>
where
    M: Matcher,
{
    pub fn with_filter(filter: SpecimenFilter<M>) -> Self {
        Self {
            session: next_session_id(),
            cancel: CancelToken::new(),
            phase: Phase::Idle,
            catalog: Catalog::empty(),
            manifest: None,
            query: SearchQuery::default(),
            visible: VisibleSet::empty(),
            error: None,
            error_message: None,
            filter,
            torn_down: false,
        }
    }

    pub fn apply(&mut self, event: CatalogEvent) -> Transition {
        if self.torn_down {
            tracing::debug!(session = self.session, ?event, "Event after teardown ignored");
            return Transition::Ignored(IgnoredReason::TornDown);
        }

        match event {
            CatalogEvent::Mount => self.mount(),
            CatalogEvent::Resolved(resolution) => self.resolve(resolution),
            CatalogEvent::QueryChanged(raw) => {
                self.query = SearchQuery::new(raw);
                self.recompute();
                Transition::QueryUpdated {
                    visible: self.visible.len(),
                }
            }
            CatalogEvent::TearDown => {
                self.torn_down = true;
                self.cancel.cancel();
                tracing::debug!(session = self.session, phase = ?self.phase, "Session torn down");
                Transition::TornDown
            }
        }
    }

    /// Keystroke handler for the renderer. The visible set is up to date
    /// when this returns.
    pub fn on_query_change(&mut self, value: impl Into<String>) {
        self.apply(CatalogEvent::QueryChanged(value.into()));
    }

    fn mount(&mut self) -> Transition {
        if self.phase != Phase::Idle {
            return Transition::Ignored(IgnoredReason::AlreadyMounted(self.phase));
        }

        self.phase = Phase::Loading;
        Transition::Started(LoadTicket::issue(self.session, self.cancel.clone()))
    }

    fn resolve(&mut self, resolution: LoadResolution) -> Transition {
        if resolution.ticket().session() != self.session {
            return Transition::Ignored(IgnoredReason::ForeignTicket);
        }
        if resolution.ticket().is_cancelled() {
            return Transition::Ignored(IgnoredReason::Cancelled);
        }
        if self.phase != Phase::Loading {
            return Transition::Ignored(IgnoredReason::NotLoading(self.phase));
        }

        match resolution.result {
            Ok(loaded) => {
                for duplicate in &loaded.manifest.diagnostics.duplicate_ids {
                    tracing::warn!(
                        catalog_id = %duplicate.id,
                        positions = ?duplicate.positions,
                        "Duplicate catalog id in dataset"
                    );
                }
                if !loaded.manifest.diagnostics.blank_ids.is_empty() {
                    tracing::warn!(
                        positions = ?loaded.manifest.diagnostics.blank_ids,
                        "Specimens with blank catalog id"
                    );
                }

                self.catalog = loaded.catalog;
                self.manifest = Some(loaded.manifest);
                self.phase = Phase::Loaded;
                self.recompute();

                tracing::info!(
                    session = self.session,
                    specimens = self.catalog.len(),
                    visible = self.visible.len(),
                    "Catalog loaded"
                );
                Transition::Loaded {
                    specimens: self.catalog.len(),
                    visible: self.visible.len(),
                }
            }
            Err(error) => {
                let message = error.user_message();
                tracing::warn!(session = self.session, "{}", message);

                self.phase = Phase::Failed;
                self.error = Some(error);
                self.error_message = Some(message.clone());
                self.recompute();
                Transition::Failed { message }
            }
        }
    }

    fn recompute(&mut self) {
        self.visible = self.filter.filter(&self.catalog, &self.query);
    }

    pub fn session(&self) -> u64 {
        self.session
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn manifest(&self) -> Option<&CatalogManifest> {
        self.manifest.as_ref()
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    pub fn visible(&self) -> &VisibleSet {
        &self.visible
    }

    pub fn error(&self) -> Option<&LoadError> {
        self.error.as_ref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn cancel_token(&self) -> &CancelToken {
        &self.cancel
    }

    pub fn view(&self) -> CatalogView<'_> {
        CatalogView {
            phase: self.phase,
            visible: self.visible.resolve(&self.catalog),
            error_message: self.error_message.as_deref(),
            query: &self.query.raw,
        }
    }

    pub fn snapshot(&self) -> CatalogSnapshot {
        self.view().to_snapshot()
    }
}
