//! Navigation routes understood by the app shell.

use serde::{Deserialize, Serialize};

/// Screens the flow navigates between
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    /// Phone number entry
    Login,
    /// Device security scan
    SecurityCheck,
    /// SMS verification and countdown
    Verification,
    /// Tab-based home area
    Home,
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Route::Login => write!(f, "login"),
            Route::SecurityCheck => write!(f, "security-check"),
            Route::Verification => write!(f, "verification"),
            Route::Home => write!(f, "home"),
        }
    }
}
