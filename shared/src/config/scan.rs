//! Device security scan configuration

use serde::{Deserialize, Serialize};

/// Timing and outcome profile for one simulated device check.
///
/// Production detectors ignore these values; they exist so the simulated
/// probes can be tuned (or pinned for tests) without code changes.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct ProbeTiming {
    /// Simulated detector latency in milliseconds
    pub latency_ms: u64,

    /// Probability that the check reports the device as clean (0.0 - 1.0)
    pub pass_rate: f64,
}

impl ProbeTiming {
    /// Instantaneous probe that always passes, for tests and demos
    pub fn instant() -> Self {
        Self {
            latency_ms: 0,
            pass_rate: 1.0,
        }
    }
}

/// Configuration for the device security scan
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SecurityScanConfig {
    /// Jailbreak/root detection profile
    pub jailbreak: ProbeTiming,

    /// Malware scan profile
    pub malware: ProbeTiming,

    /// Device integrity verification profile
    pub integrity: ProbeTiming,

    /// Pause between a clean verdict and reporting 100% progress,
    /// in milliseconds
    #[serde(default = "default_authenticating_delay_ms")]
    pub authenticating_delay_ms: u64,
}

impl Default for SecurityScanConfig {
    fn default() -> Self {
        Self {
            jailbreak: ProbeTiming {
                latency_ms: 2000,
                pass_rate: 0.90,
            },
            malware: ProbeTiming {
                latency_ms: 2500,
                pass_rate: 0.95,
            },
            integrity: ProbeTiming {
                latency_ms: 1500,
                pass_rate: 0.92,
            },
            authenticating_delay_ms: default_authenticating_delay_ms(),
        }
    }
}

impl SecurityScanConfig {
    /// Scan profile with zero latency and guaranteed clean checks,
    /// for tests and demos
    pub fn instant() -> Self {
        Self {
            jailbreak: ProbeTiming::instant(),
            malware: ProbeTiming::instant(),
            integrity: ProbeTiming::instant(),
            authenticating_delay_ms: 0,
        }
    }
}

fn default_authenticating_delay_ms() -> u64 {
    1000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scan_profile() {
        let config = SecurityScanConfig::default();
        assert_eq!(config.jailbreak.latency_ms, 2000);
        assert_eq!(config.jailbreak.pass_rate, 0.90);
        assert_eq!(config.malware.latency_ms, 2500);
        assert_eq!(config.malware.pass_rate, 0.95);
        assert_eq!(config.integrity.latency_ms, 1500);
        assert_eq!(config.integrity.pass_rate, 0.92);
        assert_eq!(config.authenticating_delay_ms, 1000);
    }

    #[test]
    fn test_instant_profile() {
        let config = SecurityScanConfig::instant();
        assert_eq!(config.jailbreak.latency_ms, 0);
        assert_eq!(config.malware.pass_rate, 1.0);
        assert_eq!(config.authenticating_delay_ms, 0);
    }
}
