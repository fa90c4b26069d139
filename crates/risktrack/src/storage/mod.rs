//! Storage backend implementations.
//!
//! This module provides concrete implementations of the repository traits
//! defined in `risktrack_core::storage`. The implementation is selected at
//! compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `inmemory` (default): HashMap-backed storage; data does not survive a restart

#[cfg(not(feature = "inmemory"))]
compile_error!(
    "No storage backend selected. Enable the 'inmemory' feature. \
    Example: cargo build -p risktrack --features inmemory"
);

#[cfg(feature = "inmemory")]
pub mod inmemory;

#[cfg(feature = "inmemory")]
pub use inmemory::InMemoryRiskRepository;
