use thiserror::Error;

use crate::desk::status::RequestStatus;

/// User-blocking failures. Operations that return one of these leave the
/// in-memory model and the durable store untouched.
#[derive(Debug, Error)]
pub enum DeskError {
    #[error("a user with email `{0}` already exists")]
    DuplicateIdentity(String),
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("status cannot move backwards from {from} to {to}")]
    InvalidTransition {
        from: RequestStatus,
        to: RequestStatus,
    },
    #[error("user `{email}` has no request with id {id}")]
    UnknownRequest { email: String, id: u64 },
}

/// Stable codes for the warn channel. Recovered faults only; none of these
/// abort the running command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarnCode {
    W001NotFound,
    W002StateCorrupt,
    W003GuardRefused,
}

impl WarnCode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::W001NotFound => "W001_NOT_FOUND",
            Self::W002StateCorrupt => "W002_STATE_CORRUPT",
            Self::W003GuardRefused => "W003_GUARD_REFUSED",
        }
    }
}
