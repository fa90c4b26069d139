//! API request types for risk operations.
//!
//! Pure data types with no I/O. Validation of the decoded values lives in
//! [`super::operations`].

use serde::Deserialize;

use super::error::RiskError;

/// Request payload for creating a new risk.
///
/// Every field is optional on the wire so that a missing `state` can be
/// reported as a validation error rather than a decoding failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CreateRiskRequest {
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl CreateRiskRequest {
    /// Decode a request from a raw body.
    ///
    /// Only the first JSON value is read; anything after it is ignored. A
    /// top-level `null` decodes to an empty request. A body with no content
    /// (or only whitespace) is reported as [`RiskError::MissingBody`];
    /// anything else that fails to decode is [`RiskError::InvalidRequest`].
    pub fn from_slice(body: &[u8]) -> Result<Self, RiskError> {
        let first = serde_json::Deserializer::from_slice(body)
            .into_iter::<Option<Self>>()
            .next();

        match first {
            None => Err(RiskError::MissingBody),
            Some(Ok(request)) => Ok(request.unwrap_or_default()),
            Some(Err(_)) => Err(RiskError::InvalidRequest),
        }
    }
}
