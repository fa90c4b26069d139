//! Application state shared by request handlers.
//!
//! The repository is held as a trait object so handlers never depend on a
//! concrete storage backend.

use std::sync::Arc;

use risktrack_core::storage::RiskRepository;

/// Shared application state.
///
/// Cloned for each request; clones share the same repository.
#[derive(Clone)]
pub struct AppState {
    /// Risk repository.
    pub risk_repo: Arc<dyn RiskRepository>,
}

impl AppState {
    /// Creates a new AppState backed by the given repository.
    pub fn new(risk_repo: Arc<dyn RiskRepository>) -> Self {
        Self { risk_repo }
    }
}
