use rand::Rng;

use crate::application::error::ServiceError;

/// Random non-negative 63-bit identifier for new records.
pub fn generate_id() -> i64 {
    rand::thread_rng().gen_range(0..=i64::MAX)
}

pub fn parse_id(raw: &str) -> Result<i64, ServiceError> {
    raw.parse::<i64>().map_err(ServiceError::InvalidId)
}
