//! Synchronized retry coordinator.
//!
//! First attempts run concurrently and never touch the lock. A caller whose first
//! attempt fails transiently queues on the shared lock and runs its whole retry phase
//! while holding it, so at most one caller per coordinator is retrying at any time.

use std::time::Duration;

use thiserror::Error;
use tokio::sync::Mutex;

/// Errors that may succeed when the same operation is attempted again.
pub trait Transient {
    fn is_transient(&self) -> bool;
}

/// Ordered delays slept before each retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    delays: Vec<Duration>,
}

impl RetryPolicy {
    pub fn new(delays: Vec<Duration>) -> Self {
        Self { delays }
    }

    pub fn from_secs(secs: &[u64]) -> Self {
        Self::new(secs.iter().copied().map(Duration::from_secs).collect())
    }

    /// First attempt only.
    pub fn none() -> Self {
        Self::new(Vec::new())
    }

    pub fn delays(&self) -> &[Duration] {
        &self.delays
    }

    /// 1 + number of delays
    pub fn max_attempts(&self) -> usize {
        self.delays.len() + 1
    }
}

impl Default for RetryPolicy {
    /// 1s, 5s, 15s, 30s, 50s
    fn default() -> Self {
        Self::from_secs(&[1, 5, 15, 30, 50])
    }
}

#[derive(Debug, Error)]
pub enum SyncRetryError<E> {
    /// The policy ran out while the operation kept failing transiently.
    #[error("retry attempts exhausted after {attempts} attempts")]
    AttemptsExhausted { attempts: usize },

    /// The operation failed with a non-transient error.
    #[error(transparent)]
    Operation(E),
}

/// Retry coordinator shared by every request of one client.
#[derive(Debug)]
pub struct SyncRetry {
    lock: Mutex<()>,
    policy: RetryPolicy,
}

impl SyncRetry {
    pub fn new(policy: RetryPolicy) -> Self {
        Self {
            lock: Mutex::new(()),
            policy,
        }
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Runs `op`, retrying transient failures according to the policy.
    ///
    /// Non-transient errors are returned as [`SyncRetryError::Operation`] as soon as they
    /// occur. The retry lock is held from the first transient failure until this call
    /// returns; waiters are served in arrival order.
    pub async fn run<T, E, F, Fut>(&self, mut op: F) -> Result<T, SyncRetryError<E>>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Transient,
    {
        match op().await {
            Ok(value) => return Ok(value),
            Err(e) if !e.is_transient() => return Err(SyncRetryError::Operation(e)),
            Err(_) => {}
        }

        let _guard = self.lock.lock().await;
        let total = self.policy.delays.len();

        for (attempt, delay) in self.policy.delays.iter().enumerate() {
            log::warn!(
                "Transient failure, retry {}/{total} in {delay:?}",
                attempt + 1
            );
            tokio::time::sleep(*delay).await;

            match op().await {
                Ok(value) => return Ok(value),
                Err(e) if e.is_transient() => {}
                Err(e) => return Err(SyncRetryError::Operation(e)),
            }
        }

        Err(SyncRetryError::AttemptsExhausted {
            attempts: self.policy.max_attempts(),
        })
    }
}

impl Default for SyncRetry {
    fn default() -> Self {
        Self::new(RetryPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::time::Instant;

    #[derive(Debug, PartialEq, Eq)]
    enum TestError {
        Busy,
        Fatal,
    }

    impl Transient for TestError {
        fn is_transient(&self) -> bool {
            matches!(self, Self::Busy)
        }
    }

    /// Fails transiently `failures` times, then succeeds with the attempt number.
    async fn run_flaky(
        retry: &SyncRetry,
        calls: &AtomicUsize,
        failures: usize,
    ) -> Result<usize, SyncRetryError<TestError>> {
        retry
            .run(|| {
                let n = calls.fetch_add(1, Ordering::SeqCst);
                async move {
                    if n < failures {
                        Err(TestError::Busy)
                    } else {
                        Ok(n + 1)
                    }
                }
            })
            .await
    }

    #[test]
    fn default_policy_delays() {
        let policy = RetryPolicy::default();
        assert_eq!(policy, RetryPolicy::from_secs(&[1, 5, 15, 30, 50]));
        assert_eq!(policy.max_attempts(), 6);
    }

    #[tokio::test(start_paused = true)]
    async fn success_on_first_attempt_sleeps_nothing() {
        let retry = SyncRetry::new(RetryPolicy::from_secs(&[1, 5]));
        let calls = AtomicUsize::new(0);
        let start = Instant::now();

        let result = run_flaky(&retry, &calls, 0).await;

        assert_eq!(result.unwrap(), 1);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn k_transient_failures_consume_k_delays() {
        let retry = SyncRetry::new(RetryPolicy::from_secs(&[1, 5, 15, 30]));
        let calls = AtomicUsize::new(0);
        let start = Instant::now();

        let result = run_flaky(&retry, &calls, 2).await;

        assert_eq!(result.unwrap(), 3);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(start.elapsed(), Duration::from_secs(6));
    }

    #[tokio::test(start_paused = true)]
    async fn exhaustion_after_n_plus_one_attempts() {
        let retry = SyncRetry::new(RetryPolicy::from_secs(&[1, 2, 3]));
        let calls = AtomicUsize::new(0);
        let start = Instant::now();

        let result = run_flaky(&retry, &calls, usize::MAX).await;

        assert!(matches!(
            result,
            Err(SyncRetryError::AttemptsExhausted { attempts: 4 })
        ));
        assert_eq!(calls.load(Ordering::SeqCst), 4);
        assert_eq!(start.elapsed(), Duration::from_secs(6));
    }

    #[tokio::test(start_paused = true)]
    async fn empty_policy_exhausts_after_first_attempt() {
        let retry = SyncRetry::new(RetryPolicy::none());
        let calls = AtomicUsize::new(0);

        let result = run_flaky(&retry, &calls, 1).await;

        assert!(matches!(
            result,
            Err(SyncRetryError::AttemptsExhausted { attempts: 1 })
        ));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    // ---- non-transient passthrough ----

    #[tokio::test(start_paused = true)]
    async fn non_transient_error_skips_lock_and_delays() {
        let retry = SyncRetry::new(RetryPolicy::from_secs(&[1, 5]));
        let calls = AtomicUsize::new(0);
        // Another caller holds the retry lock for the whole test.
        let _held = retry.lock.lock().await;
        let start = Instant::now();

        let result = retry
            .run(|| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err::<(), _>(TestError::Fatal) }
            })
            .await;

        assert!(matches!(
            result,
            Err(SyncRetryError::Operation(TestError::Fatal))
        ));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn non_transient_error_during_retry_stops_loop() {
        let retry = SyncRetry::new(RetryPolicy::from_secs(&[1, 5, 15]));
        let calls = AtomicUsize::new(0);

        let result = retry
            .run(|| {
                let n = calls.fetch_add(1, Ordering::SeqCst);
                async move {
                    if n == 0 {
                        Err::<(), _>(TestError::Busy)
                    } else {
                        Err(TestError::Fatal)
                    }
                }
            })
            .await;

        assert!(matches!(
            result,
            Err(SyncRetryError::Operation(TestError::Fatal))
        ));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    // ---- concurrency ----

    #[tokio::test(start_paused = true)]
    async fn concurrent_retry_phases_do_not_overlap() {
        let retry = SyncRetry::new(RetryPolicy::from_secs(&[1]));
        let origin = Instant::now();

        let caller = || {
            let calls = AtomicUsize::new(0);
            let retry = &retry;
            async move {
                retry
                    .run(|| {
                        let n = calls.fetch_add(1, Ordering::SeqCst);
                        async move {
                            if n == 0 {
                                Err(TestError::Busy)
                            } else {
                                Ok(origin.elapsed())
                            }
                        }
                    })
                    .await
            }
        };

        let (a, b) = futures::join!(caller(), caller());
        let mut finished = [a.unwrap(), b.unwrap()];
        finished.sort();

        // Both first attempts ran at t=0, the retries were serialized by the lock.
        assert_eq!(finished, [Duration::from_secs(1), Duration::from_secs(2)]);
    }

    #[tokio::test(start_paused = true)]
    async fn first_attempts_run_while_another_caller_retries() {
        let retry = SyncRetry::new(RetryPolicy::from_secs(&[10]));
        let origin = Instant::now();
        let slow_calls = AtomicUsize::new(0);
        let fast_calls = AtomicUsize::new(0);

        let slow = run_flaky(&retry, &slow_calls, 1);
        let fast = async {
            tokio::time::sleep(Duration::from_secs(1)).await;
            let result = run_flaky(&retry, &fast_calls, 0).await;
            (result, origin.elapsed())
        };

        let (slow_result, (fast_result, fast_done)) = futures::join!(slow, fast);

        assert_eq!(slow_result.unwrap(), 2);
        assert_eq!(fast_result.unwrap(), 1);
        assert_eq!(fast_done, Duration::from_secs(1));
    }
}
