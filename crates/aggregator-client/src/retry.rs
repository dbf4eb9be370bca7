//! Reusable retry policy for upstream calls
//!
//! One policy object shared by every protocol client instead of a
//! hand-rolled loop per call site. Backoff is linear in the attempt index
//! (base 1s: 1s after the first failure, 2s after the second).

use std::future::Future;
use std::time::Duration;

/// Retry policy: max attempts, backoff base, and a caller-supplied
/// transience predicate.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    max_attempts: u32,
    base_delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, base_delay: Duration) -> Self {
        assert!(max_attempts >= 1, "at least one attempt is required");
        Self {
            max_attempts,
            base_delay,
        }
    }

    /// 3 attempts, 1 second base delay. Matches the upstream read policy.
    pub fn standard() -> Self {
        Self::new(3, Duration::from_secs(1))
    }

    /// Single attempt: for calls with side-effect risk (swap construction,
    /// order submission) where a retry could double-place.
    pub fn none() -> Self {
        Self::new(1, Duration::ZERO)
    }

    /// Run `operation` until it succeeds, fails non-transiently, or the
    /// attempt budget is exhausted. `is_transient` decides which errors are
    /// worth another attempt.
    pub async fn run<T, E, F, Fut, P>(&self, is_transient: P, mut operation: F) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        P: Fn(&E) -> bool,
        E: std::fmt::Display,
    {
        let mut attempt = 0u32;
        loop {
            attempt += 1;
            match operation().await {
                Ok(value) => return Ok(value),
                Err(err) if attempt < self.max_attempts && is_transient(&err) => {
                    let delay = self.base_delay * attempt;
                    tracing::warn!(
                        attempt,
                        max_attempts = self.max_attempts,
                        "Transient upstream failure, retrying in {:?}: {}",
                        delay,
                        err
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[derive(Debug)]
    enum TestError {
        Transient,
        Fatal,
    }

    impl std::fmt::Display for TestError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{:?}", self)
        }
    }

    fn transient(err: &TestError) -> bool {
        matches!(err, TestError::Transient)
    }

    fn fast() -> RetryPolicy {
        RetryPolicy::new(3, Duration::from_millis(1))
    }

    #[tokio::test]
    async fn succeeds_on_third_attempt_after_two_transient_failures() {
        let calls = AtomicU32::new(0);
        let result: Result<u32, TestError> = fast()
            .run(transient, || {
                let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
                async move {
                    if n < 3 {
                        Err(TestError::Transient)
                    } else {
                        Ok(n)
                    }
                }
            })
            .await;

        assert_eq!(result.unwrap(), 3);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn gives_up_after_max_attempts() {
        let calls = AtomicU32::new(0);
        let result: Result<u32, TestError> = fast()
            .run(transient, || {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err(TestError::Transient) }
            })
            .await;

        assert!(result.is_err());
        // Exactly 3 underlying calls, no 4th attempt
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn does_not_retry_fatal_errors() {
        let calls = AtomicU32::new(0);
        let result: Result<u32, TestError> = fast()
            .run(transient, || {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err(TestError::Fatal) }
            })
            .await;

        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn single_attempt_policy_never_retries() {
        let calls = AtomicU32::new(0);
        let result: Result<u32, TestError> = RetryPolicy::none()
            .run(transient, || {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err(TestError::Transient) }
            })
            .await;

        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn immediate_success_makes_one_call() {
        let calls = AtomicU32::new(0);
        let result: Result<u32, TestError> = fast()
            .run(transient, || {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Ok(7) }
            })
            .await;

        assert_eq!(result.unwrap(), 7);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
