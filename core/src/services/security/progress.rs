//! Scan progress reporting.

use tokio::sync::watch;

use crate::domain::entities::check_result::CheckKind;

/// Phase of the security scan, for the progress display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanPhase {
    /// No scan running
    Idle,
    /// A device check is in flight
    Checking(CheckKind),
    /// All checks clean; finalizing admission
    Authenticating,
    /// Scan finished with a clean verdict
    Passed,
    /// Scan finished with at least one flagged check
    Failed,
}

impl ScanPhase {
    /// Status line shown for this phase
    pub fn message(&self) -> &'static str {
        match self {
            ScanPhase::Idle => "Performing security checks...",
            ScanPhase::Checking(kind) => kind.label(),
            ScanPhase::Authenticating => "Authenticating...",
            ScanPhase::Passed => "Device verified",
            ScanPhase::Failed => "Security check failed",
        }
    }
}

/// A point-in-time view of scan progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanSnapshot {
    /// Progress percentage, 0-100
    pub percent: u8,
    /// Current phase
    pub phase: ScanPhase,
}

impl ScanSnapshot {
    fn idle() -> Self {
        Self {
            percent: 0,
            phase: ScanPhase::Idle,
        }
    }
}

/// Monotonic progress reporter over a watch channel.
///
/// The engine is the only writer; any number of subscribers observe the
/// latest snapshot. Within one scan the percentage never decreases;
/// `reset` runs between scans.
#[derive(Debug)]
pub struct ScanProgress {
    tx: watch::Sender<ScanSnapshot>,
}

impl ScanProgress {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(ScanSnapshot::idle());
        Self { tx }
    }

    /// Observe progress updates for current and future scans
    pub fn subscribe(&self) -> watch::Receiver<ScanSnapshot> {
        self.tx.subscribe()
    }

    /// The latest snapshot
    pub fn snapshot(&self) -> ScanSnapshot {
        *self.tx.borrow()
    }

    /// Advance to `percent` in the given phase. A regressing percentage
    /// keeps the current value; the phase still updates.
    pub(crate) fn advance(&self, percent: u8, phase: ScanPhase) {
        self.tx.send_modify(|snapshot| {
            snapshot.percent = snapshot.percent.max(percent.min(100));
            snapshot.phase = phase;
        });
    }

    /// Update the phase without touching the percentage
    pub(crate) fn set_phase(&self, phase: ScanPhase) {
        self.tx.send_modify(|snapshot| snapshot.phase = phase);
    }

    /// Return to the idle snapshot before a new scan
    pub(crate) fn reset(&self) {
        self.tx.send_replace(ScanSnapshot::idle());
    }
}

impl Default for ScanProgress {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_is_monotonic() {
        let progress = ScanProgress::new();

        progress.advance(50, ScanPhase::Checking(CheckKind::Malware));
        assert_eq!(progress.snapshot().percent, 50);

        // a late-starting check must not pull the percentage back
        progress.advance(25, ScanPhase::Checking(CheckKind::Jailbreak));
        assert_eq!(progress.snapshot().percent, 50);
        assert_eq!(
            progress.snapshot().phase,
            ScanPhase::Checking(CheckKind::Jailbreak)
        );

        progress.advance(75, ScanPhase::Checking(CheckKind::Integrity));
        assert_eq!(progress.snapshot().percent, 75);
    }

    #[test]
    fn test_percent_is_capped_at_100() {
        let progress = ScanProgress::new();
        progress.advance(250, ScanPhase::Passed);
        assert_eq!(progress.snapshot().percent, 100);
    }

    #[test]
    fn test_reset_returns_to_idle() {
        let progress = ScanProgress::new();
        progress.advance(75, ScanPhase::Checking(CheckKind::Integrity));
        progress.reset();

        let snapshot = progress.snapshot();
        assert_eq!(snapshot.percent, 0);
        assert_eq!(snapshot.phase, ScanPhase::Idle);
    }

    #[test]
    fn test_subscribers_observe_updates() {
        let progress = ScanProgress::new();
        let rx = progress.subscribe();

        progress.advance(25, ScanPhase::Checking(CheckKind::Jailbreak));
        assert_eq!(rx.borrow().percent, 25);
    }

    #[test]
    fn test_phase_messages() {
        assert_eq!(ScanPhase::Authenticating.message(), "Authenticating...");
        assert_eq!(
            ScanPhase::Checking(CheckKind::Malware).message(),
            "Scanning for malware and viruses..."
        );
    }
}
