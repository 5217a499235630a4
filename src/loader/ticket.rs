use std::sync::atomic::{AtomicU64, Ordering};

use crate::catalog::LoadedCatalog;
use crate::loader::cancel::CancelToken;
use crate::loader::error::LoadError;

static NEXT_SESSION: AtomicU64 = AtomicU64::new(1);

pub(crate) fn next_session_id() -> u64 {
    NEXT_SESSION.fetch_add(1, Ordering::Relaxed)
}

/// Permission to perform the session's single fetch.
///
/// Issued only by the `Idle -> Loading` transition; not `Clone`, so at most
/// one resolution can ever be produced from it.
#[derive(Debug)]
pub struct LoadTicket {
    session: u64,
    cancel: CancelToken,
}

impl LoadTicket {
    pub(crate) fn issue(session: u64, cancel: CancelToken) -> Self {
        Self { session, cancel }
    }

    pub fn session(&self) -> u64 {
        self.session
    }

    pub fn cancel_token(&self) -> &CancelToken {
        &self.cancel
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

/// Outcome of a fetch, tied to the ticket that authorized it.
#[derive(Debug)]
pub struct LoadResolution {
    ticket: LoadTicket,
    pub result: Result<LoadedCatalog, LoadError>,
}

impl LoadResolution {
    pub fn new(ticket: LoadTicket, result: Result<LoadedCatalog, LoadError>) -> Self {
        Self { ticket, result }
    }

    pub fn ticket(&self) -> &LoadTicket {
        &self.ticket
    }
}
