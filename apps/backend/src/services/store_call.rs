use std::future::Future;
use std::time::Duration;

use tracing::warn;

use crate::errors::domain::{DomainError, InfraErrorKind};

/// Run one store call under `limit`. Expiry becomes `InfraErrorKind::Timeout`.
pub(crate) async fn bounded<T, F>(limit: Duration, op: &'static str, call: F) -> Result<T, DomainError>
where
    F: Future<Output = Result<T, DomainError>>,
{
    match tokio::time::timeout(limit, call).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(err)) => {
            if matches!(err, DomainError::Infra(..)) {
                warn!(op, error = %err, "Store call failed");
            }
            Err(err)
        }
        Err(_) => {
            let timeout_ms = u64::try_from(limit.as_millis()).unwrap_or(u64::MAX);
            warn!(op, timeout_ms, "Store call timed out");
            Err(DomainError::infra(
                InfraErrorKind::Timeout,
                format!("{op} did not complete within {timeout_ms}ms"),
            ))
        }
    }
}
