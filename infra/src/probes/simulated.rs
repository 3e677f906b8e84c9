//! Simulated device-check probes.
//!
//! Stand-ins for real jailbreak/malware/integrity detectors: each probe
//! waits a fixed latency, then reports the device clean with a configured
//! probability. Swapping in real detector SDKs means replacing these
//! behind the same [`CheckProbe`] seam.

use std::sync::Arc;

use async_trait::async_trait;
use rand::Rng;
use tokio::time::{sleep, Duration};
use tracing::debug;

use bs_core::domain::entities::check_result::CheckKind;
use bs_core::errors::CheckError;
use bs_core::services::security::CheckProbe;
use bs_shared::config::{ProbeTiming, SecurityScanConfig};

/// A probe that simulates a detector with fixed latency and pass rate
#[derive(Debug, Clone)]
pub struct SimulatedProbe {
    kind: CheckKind,
    latency: Duration,
    pass_rate: f64,
}

impl SimulatedProbe {
    /// Create a probe for the given check with the given profile
    pub fn new(kind: CheckKind, timing: ProbeTiming) -> Self {
        Self {
            kind,
            latency: Duration::from_millis(timing.latency_ms),
            pass_rate: timing.pass_rate.clamp(0.0, 1.0),
        }
    }

    /// The standard three-probe battery from the scan configuration
    pub fn battery(config: &SecurityScanConfig) -> Vec<Arc<dyn CheckProbe>> {
        vec![
            Arc::new(Self::new(CheckKind::Jailbreak, config.jailbreak)),
            Arc::new(Self::new(CheckKind::Malware, config.malware)),
            Arc::new(Self::new(CheckKind::Integrity, config.integrity)),
        ]
    }
}

#[async_trait]
impl CheckProbe for SimulatedProbe {
    fn kind(&self) -> CheckKind {
        self.kind
    }

    async fn probe(&self) -> Result<bool, CheckError> {
        sleep(self.latency).await;
        let passed = rand::thread_rng().gen_bool(self.pass_rate);
        debug!(
            check = %self.kind,
            passed,
            event = "simulated_probe",
            "Simulated detector finished"
        );
        Ok(passed)
    }
}
