//! Mock probes for engine tests

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::time::{sleep, Duration};

use crate::domain::entities::check_result::CheckKind;
use crate::errors::CheckError;
use crate::services::security::CheckProbe;

/// Probe with a scripted outcome
pub struct StubProbe {
    kind: CheckKind,
    // None simulates an unexpected probe failure
    outcome: Option<bool>,
    latency_ms: u64,
}

impl StubProbe {
    pub fn clean(kind: CheckKind) -> Self {
        Self {
            kind,
            outcome: Some(true),
            latency_ms: 0,
        }
    }

    pub fn flagged(kind: CheckKind) -> Self {
        Self {
            kind,
            outcome: Some(false),
            latency_ms: 0,
        }
    }

    pub fn failing(kind: CheckKind) -> Self {
        Self {
            kind,
            outcome: None,
            latency_ms: 0,
        }
    }

    pub fn with_latency(mut self, latency_ms: u64) -> Self {
        self.latency_ms = latency_ms;
        self
    }
}

#[async_trait]
impl CheckProbe for StubProbe {
    fn kind(&self) -> CheckKind {
        self.kind
    }

    async fn probe(&self) -> Result<bool, CheckError> {
        if self.latency_ms > 0 {
            sleep(Duration::from_millis(self.latency_ms)).await;
        }
        match self.outcome {
            Some(passed) => Ok(passed),
            None => Err(CheckError::ProbeFailed {
                kind: self.kind,
                message: "simulated probe crash".to_string(),
            }),
        }
    }
}

/// Probe that flags the device on its first run and passes afterwards
pub struct FlakyProbe {
    kind: CheckKind,
    calls: AtomicUsize,
}

impl FlakyProbe {
    pub fn new(kind: CheckKind) -> Self {
        Self {
            kind,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl CheckProbe for FlakyProbe {
    fn kind(&self) -> CheckKind {
        self.kind
    }

    async fn probe(&self) -> Result<bool, CheckError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(call > 0)
    }
}
