use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::RiskError;

/// The lifecycle state of a risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskState {
    Open,
    Closed,
    Accepted,
    Investigating,
}

impl RiskState {
    /// Every state, in the order they are presented to clients.
    pub const ALL: [RiskState; 4] = [
        RiskState::Open,
        RiskState::Closed,
        RiskState::Accepted,
        RiskState::Investigating,
    ];

    /// Returns the wire representation of this state.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskState::Open => "open",
            RiskState::Closed => "closed",
            RiskState::Accepted => "accepted",
            RiskState::Investigating => "investigating",
        }
    }

    /// Returns the accepted values joined as `open, closed, ...`.
    pub fn allowed_values() -> String {
        Self::ALL
            .iter()
            .map(RiskState::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for RiskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskState {
    type Err = RiskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|state| state.as_str() == s)
            .ok_or(RiskError::InvalidState)
    }
}

/// A tracked risk.
///
/// Empty `title` and `description` are left out of the serialized form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Risk {
    pub id: Uuid,
    pub state: RiskState,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl Risk {
    /// Creates a risk with the given ID and no title or description.
    ///
    /// IDs are assigned by the repository that stores the risk.
    pub fn new(id: Uuid, state: RiskState) -> Self {
        Self {
            id,
            state,
            title: String::new(),
            description: String::new(),
        }
    }

    /// Sets the title for this risk.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the description for this risk.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
