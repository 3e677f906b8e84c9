//! Domain entities representing core verification objects.

pub mod check_result;
pub mod verification_session;

// Re-export commonly used types
pub use check_result::{CheckKind, CheckResult, SecurityVerdict};
pub use verification_session::{
    Credential, SessionStatus, TickOutcome, VerificationSession, CODE_LENGTH,
};
