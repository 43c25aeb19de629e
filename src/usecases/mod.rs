pub mod messages;
pub mod users;

use crate::common::error::{AppError, ServiceResult};

/// Query parameters are optional at the extractor level so absence can be
/// reported as a domain error instead of an axum rejection.
pub(crate) fn require(value: Option<String>, missing: AppError) -> ServiceResult<String> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(missing),
    }
}
