//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use risktrack_core::risk::{Risk, RiskState};
use risktrack_core::storage::{RepositoryError, Result, RiskRepository};

/// Produces the ID for each newly created risk.
pub type IdGenerator = fn() -> Uuid;

/// In-memory storage backend.
///
/// Risks are keyed by the canonical string form of their ID. Reads share the
/// lock; a create holds the write lock across the collision check and the
/// insert. Clones share the same collection.
#[derive(Debug, Clone)]
pub struct InMemoryRiskRepository {
    risks: Arc<RwLock<HashMap<String, Risk>>>,
    id_generator: IdGenerator,
}

impl Default for InMemoryRiskRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRiskRepository {
    /// Creates a new empty in-memory repository with random v4 IDs.
    pub fn new() -> Self {
        Self::with_id_generator(Uuid::new_v4)
    }

    /// Creates a new empty in-memory repository using `id_generator` for IDs.
    pub fn with_id_generator(id_generator: IdGenerator) -> Self {
        Self {
            risks: Arc::new(RwLock::new(HashMap::new())),
            id_generator,
        }
    }
}

#[async_trait]
impl RiskRepository for InMemoryRiskRepository {
    async fn create_risk(&self, state: RiskState, title: &str, description: &str) -> Result<Risk> {
        let risk = Risk::new((self.id_generator)(), state)
            .with_title(title)
            .with_description(description);
        let key = risk.id.to_string();

        let mut risks = self.risks.write().await;
        if risks.contains_key(&key) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "Risk",
                id: key,
            });
        }
        risks.insert(key, risk.clone());
        Ok(risk)
    }

    async fn get_risk(&self, id: &str) -> Result<Risk> {
        let risks = self.risks.read().await;
        risks
            .get(id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound {
                entity_type: "Risk",
                id: id.to_string(),
            })
    }

    async fn list_risks(&self) -> Result<Vec<Risk>> {
        let risks = self.risks.read().await;
        Ok(risks.values().cloned().collect())
    }
}
