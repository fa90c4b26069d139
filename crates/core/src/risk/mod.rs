mod error;
mod http_mapping;
mod operations;
mod requests;
mod types;

pub use error::RiskError;
pub use http_mapping::risk_error_to_status_code;
pub use operations::{parse_risk_id, parse_state};
pub use requests::CreateRiskRequest;
pub use types::{Risk, RiskState};
