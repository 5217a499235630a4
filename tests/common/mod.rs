#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use specimen_catalog::loader::{LoadError, SpecimenSource};

/// Canned body or failure held in memory. Counts how often it is read.
#[derive(Debug)]
pub struct StaticSource {
    outcome: Result<Vec<u8>, LoadError>,
    delay: Option<Duration>,
    reads: AtomicUsize,
}

impl StaticSource {
    pub fn body(body: impl Into<Vec<u8>>) -> Self {
        Self {
            outcome: Ok(body.into()),
            delay: None,
            reads: AtomicUsize::new(0),
        }
    }

    pub fn failing(error: LoadError) -> Self {
        Self {
            outcome: Err(error),
            delay: None,
            reads: AtomicUsize::new(0),
        }
    }

    /// Hold every read for `delay` before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SpecimenSource for StaticSource {
    fn describe(&self) -> String {
        "static".to_string()
    }

    async fn read(&self) -> Result<Vec<u8>, LoadError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.outcome.clone()
    }
}
