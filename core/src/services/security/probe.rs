//! Device-check probe capability.

use async_trait::async_trait;

use crate::domain::entities::check_result::CheckKind;
use crate::errors::CheckError;

/// A single device-trust probe.
///
/// The engine dispatches over the probe's `kind`; implementations range
/// from the simulated detectors shipped in `bs_infra` to real
/// jailbreak/malware/integrity SDKs, none of which require engine changes.
#[async_trait]
pub trait CheckProbe: Send + Sync {
    /// Which check this probe performs
    fn kind(&self) -> CheckKind;

    /// Run the probe.
    ///
    /// `Ok(true)` means the device came back clean, `Ok(false)` means the
    /// check flagged it. `Err` is reserved for unexpected probe failures
    /// and aborts the whole verdict attempt.
    async fn probe(&self) -> Result<bool, CheckError>;
}
