use uuid::Uuid;

use super::error::RiskError;
use super::types::RiskState;

/// Validates a client supplied state.
///
/// A missing or empty state is reported before membership is checked.
pub fn parse_state(state: Option<&str>) -> Result<RiskState, RiskError> {
    match state {
        None | Some("") => Err(RiskError::StateRequired),
        Some(state) => state.parse(),
    }
}

/// Parses a risk ID taken from a request path.
pub fn parse_risk_id(id: &str) -> Result<Uuid, RiskError> {
    Uuid::parse_str(id).map_err(|_| RiskError::InvalidId)
}
