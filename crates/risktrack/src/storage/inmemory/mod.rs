//! In-memory storage backend.
//!
//! This module provides an in-memory implementation of the repository traits
//! that stores all data in a HashMap wrapped in `Arc<RwLock<_>>`. Nothing is
//! persisted; the collection is lost when the last clone is dropped.
//!
//! # Example
//!
//! ```rust,ignore
//! use risktrack::storage::inmemory::InMemoryRiskRepository;
//!
//! let repo = InMemoryRiskRepository::new();
//! let risk = repo.create_risk(RiskState::Open, "Title", "").await?;
//! ```

mod repository;

pub use repository::InMemoryRiskRepository;
