//! Functional core for risktrack.
//!
//! Pure data types, validation and the storage contract. Nothing in this crate
//! performs I/O; backends and the HTTP shell live in the `risktrack` crate.

pub mod risk;
pub mod storage;
