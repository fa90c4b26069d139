pub mod error;
pub mod health;
pub mod risks;

pub use error::ApiError;
