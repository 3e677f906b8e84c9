//! Device security scan engine.

use std::sync::Arc;

use futures::future::join_all;
use tokio::sync::watch;
use tokio::time::{sleep, Duration};

use bs_shared::config::SecurityScanConfig;

use crate::domain::entities::check_result::{CheckResult, SecurityVerdict};
use crate::errors::{CheckError, DomainResult};

use super::probe::CheckProbe;
use super::progress::{ScanPhase, ScanProgress, ScanSnapshot};

/// Runs the device-trust check battery and aggregates a single verdict.
///
/// The engine owns sequencing and aggregation only; what each check does
/// is behind the [`CheckProbe`] seam. It never retries: the caller decides
/// whether to re-run the whole battery or abandon to login.
pub struct SecurityCheckEngine {
    /// Probes in battery order
    probes: Vec<Arc<dyn CheckProbe>>,
    /// Progress reporter shared with the scan screen
    progress: ScanProgress,
    /// Scan configuration
    config: SecurityScanConfig,
}

impl SecurityCheckEngine {
    /// Create an engine over the given probe battery
    pub fn new(probes: Vec<Arc<dyn CheckProbe>>, config: SecurityScanConfig) -> Self {
        Self {
            probes,
            progress: ScanProgress::new(),
            config,
        }
    }

    /// Observe progress updates for current and future scans
    pub fn progress(&self) -> watch::Receiver<ScanSnapshot> {
        self.progress.subscribe()
    }

    /// The latest progress snapshot
    pub fn progress_snapshot(&self) -> ScanSnapshot {
        self.progress.snapshot()
    }

    /// Run every check concurrently and aggregate the verdict.
    ///
    /// All probes complete before the verdict is computed; a flagged check
    /// degrades the verdict instead of aborting the batch. Only an
    /// unexpected probe failure aborts, surfaced as [`CheckError`].
    ///
    /// Progress moves through fixed checkpoints as each check starts and
    /// reaches 100 only after a clean verdict and the short
    /// "authenticating" phase that follows it.
    ///
    /// # Returns
    ///
    /// * `Ok(SecurityVerdict)` - Aggregated outcome, clean or flagged
    /// * `Err(DomainError)` - If a probe raised an unexpected error
    pub async fn run(&self) -> DomainResult<SecurityVerdict> {
        self.progress.reset();

        let checkpoint_step = 100 / (self.probes.len() as u8 + 1);
        let progress = &self.progress;

        let checks = self.probes.iter().enumerate().map(|(index, probe)| {
            let probe = Arc::clone(probe);
            let checkpoint = checkpoint_step * (index as u8 + 1);
            async move {
                let kind = probe.kind();
                progress.advance(checkpoint, ScanPhase::Checking(kind));
                tracing::debug!(check = %kind, event = "check_started", "Device check started");

                let passed = probe.probe().await?;
                tracing::debug!(check = %kind, passed, event = "check_finished", "Device check finished");
                Ok::<CheckResult, CheckError>(CheckResult { kind, passed })
            }
        });

        let results = join_all(checks)
            .await
            .into_iter()
            .collect::<Result<Vec<CheckResult>, CheckError>>()?;

        let verdict = SecurityVerdict::from_results(results);

        if verdict.overall_passed {
            self.progress.set_phase(ScanPhase::Authenticating);
            sleep(Duration::from_millis(self.config.authenticating_delay_ms)).await;
            self.progress.advance(100, ScanPhase::Passed);
            tracing::info!(
                checks = verdict.results.len(),
                event = "scan_passed",
                "Device security scan passed"
            );
        } else {
            self.progress.set_phase(ScanPhase::Failed);
            let failed: Vec<String> = verdict
                .failed_checks()
                .iter()
                .map(|kind| kind.to_string())
                .collect();
            tracing::warn!(
                failed = ?failed,
                event = "scan_failed",
                "Device security scan failed"
            );
        }

        Ok(verdict)
    }
}
