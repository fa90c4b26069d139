use thiserror::Error;

use super::types::RiskState;

/// Errors raised while validating client input for risk operations.
///
/// The display strings are returned to clients verbatim.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RiskError {
    #[error("missing body")]
    MissingBody,
    #[error("invalid request")]
    InvalidRequest,
    #[error("state required")]
    StateRequired,
    #[error("state must be one of [{allowed}]", allowed = RiskState::allowed_values())]
    InvalidState,
    #[error("invalid risk id")]
    InvalidId,
}
