use async_trait::async_trait;

use crate::risk::{Risk, RiskState};

use super::Result;

/// Repository for risk operations.
///
/// Implementations own the record collection and are responsible for
/// generating identifiers. Values passed in are assumed to be validated.
#[async_trait]
pub trait RiskRepository: Send + Sync {
    /// Stores a new risk under a freshly generated ID and returns it.
    async fn create_risk(&self, state: RiskState, title: &str, description: &str) -> Result<Risk>;

    /// Gets a risk by the canonical string form of its ID.
    async fn get_risk(&self, id: &str) -> Result<Risk>;

    /// Lists every stored risk. Order is unspecified.
    async fn list_risks(&self) -> Result<Vec<Risk>>;
}
