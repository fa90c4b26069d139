//! Pure function mapping input validation errors to HTTP status codes.

use super::RiskError;

/// Maps a [`RiskError`] to an HTTP status code.
///
/// Every validation failure is the caller's to correct, so all variants are
/// reported as 400 (Bad Request).
///
/// # Examples
///
/// ```
/// use risktrack_core::risk::{risk_error_to_status_code, RiskError};
///
/// assert_eq!(risk_error_to_status_code(&RiskError::StateRequired), 400);
/// ```
pub fn risk_error_to_status_code(error: &RiskError) -> u16 {
    match error {
        RiskError::MissingBody
        | RiskError::InvalidRequest
        | RiskError::StateRequired
        | RiskError::InvalidState
        | RiskError::InvalidId => 400,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_map_to_400() {
        for error in [
            RiskError::MissingBody,
            RiskError::InvalidRequest,
            RiskError::StateRequired,
            RiskError::InvalidState,
            RiskError::InvalidId,
        ] {
            assert_eq!(risk_error_to_status_code(&error), 400, "{error}");
        }
    }
}
