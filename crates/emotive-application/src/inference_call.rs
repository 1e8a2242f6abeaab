//! Timeout wrapper shared by the analyzer and the summarizer.

use emotive_core::inference::InferenceError;
use std::future::Future;
use std::time::Duration;

/// Awaits `call`, failing with `InferenceError::Timeout` once `limit` elapses.
/// Without a limit the call may wait forever.
pub(crate) async fn with_timeout<T, F>(limit: Option<Duration>, call: F) -> Result<T, InferenceError>
where
    F: Future<Output = Result<T, InferenceError>>,
{
    match limit {
        Some(limit) => tokio::time::timeout(limit, call)
            .await
            .unwrap_or(Err(InferenceError::Timeout(limit))),
        None => call.await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_elapsed_limit_yields_timeout() {
        let result: Result<(), InferenceError> = with_timeout(
            Some(Duration::from_secs(5)),
            std::future::pending(),
        )
        .await;

        assert_eq!(result, Err(InferenceError::Timeout(Duration::from_secs(5))));
    }

    #[tokio::test]
    async fn test_fast_call_passes_through() {
        let result = with_timeout(Some(Duration::from_secs(5)), async { Ok(7) }).await;
        assert_eq!(result, Ok(7));

        let result: Result<i32, _> =
            with_timeout(None, async { Err(InferenceError::Other(None)) }).await;
        assert_eq!(result, Err(InferenceError::Other(None)));
    }
}
