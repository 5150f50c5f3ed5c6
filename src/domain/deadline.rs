use std::future::Future;
use std::time::Duration;

/// Run a provider call under an optional deadline.
///
/// Expiry drops the in-flight future and reports a timeout cause in the same
/// `String` shape the provider repositories use for their own failures.
pub async fn with_deadline<F, T>(deadline: Option<Duration>, call: F) -> Result<T, String>
where
    F: Future<Output = Result<T, String>>,
{
    match deadline {
        Some(limit) => tokio::time::timeout(limit, call)
            .await
            .map_err(|_| format!("provider call timed out after {}ms", limit.as_millis()))?,
        None => call.await,
    }
}
