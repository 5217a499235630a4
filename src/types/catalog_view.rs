use serde::{Deserialize, Serialize};

use crate::specimen::Specimen;

/// Number of skeleton cards a renderer shows while the catalog is loading.
pub const PLACEHOLDER_CARDS: usize = 8;

/// Lifecycle of the single catalog load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Idle,
    Loading,
    Loaded,
    Failed,
}

impl Phase {
    /// Loaded and Failed are never left.
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Loaded | Phase::Failed)
    }
}

/// Borrowed view of the session handed to a renderer.
/// Valid until the next event is applied.
#[derive(Debug, Clone)]
pub struct CatalogView<'a> {
    pub phase: Phase,
    pub visible: Vec<&'a Specimen>,
    pub error_message: Option<&'a str>,
    pub query: &'a str,
}

impl CatalogView<'_> {
    pub fn render_condition(&self) -> RenderCondition {
        match self.phase {
            Phase::Idle | Phase::Loading => RenderCondition::Placeholders {
                count: PLACEHOLDER_CARDS,
            },
            Phase::Failed => RenderCondition::ErrorPanel {
                message: self.error_message.unwrap_or_default().to_string(),
            },
            Phase::Loaded if self.visible.is_empty() => RenderCondition::NoMatches {
                query: self.query.to_string(),
            },
            Phase::Loaded => RenderCondition::Results {
                count: self.visible.len(),
            },
        }
    }

    /// Owned copy, detached from the session.
    pub fn to_snapshot(&self) -> CatalogSnapshot {
        CatalogSnapshot {
            phase: self.phase,
            visible: self.visible.iter().map(|s| (*s).clone()).collect(),
            error_message: self.error_message.map(str::to_string),
            query: self.query.to_string(),
        }
    }
}

/// Owned, serializable form of [`CatalogView`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    pub phase: Phase,
    pub visible: Vec<Specimen>,
    pub error_message: Option<String>,
    pub query: String,
}

/// What the renderer should draw. Exactly one applies at any instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderCondition {
    Placeholders { count: usize },
    ErrorPanel { message: String },
    Results { count: usize },
    NoMatches { query: String },
}
