use std::time::Duration;

use rand::Rng;

/// Exponential backoff with jitter for the completion endpoints.
///
/// Only transient failures (transport errors, HTTP 429 and 5xx) are
/// retried; the policy decides how often and how long to wait.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    max_attempts: u32,
    base_delay: Duration,
    max_delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, base_delay: Duration, max_delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            base_delay,
            max_delay,
        }
    }

    /// A single attempt, no retries.
    pub fn none() -> Self {
        Self::new(1, Duration::ZERO, Duration::ZERO)
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Delay before retrying after `attempt` (0-based) failed: the base
    /// delay doubled per attempt, capped at `max_delay`, with uniform
    /// jitter over the upper half of the interval.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let exp = self
            .base_delay
            .saturating_mul(2u32.saturating_pow(attempt))
            .min(self.max_delay);
        let millis = exp.as_millis() as u64;
        if millis == 0 {
            return Duration::ZERO;
        }
        let jittered = rand::thread_rng().gen_range(millis / 2..=millis);
        Duration::from_millis(jittered)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(3, Duration::from_millis(250), Duration::from_secs(5))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_least_one_attempt() {
        let policy = RetryPolicy::new(0, Duration::ZERO, Duration::ZERO);
        assert_eq!(policy.max_attempts(), 1);
    }

    #[test]
    fn test_delay_grows_and_caps() {
        let policy = RetryPolicy::new(5, Duration::from_millis(100), Duration::from_millis(400));

        for attempt in 0..5 {
            let delay = policy.delay_for(attempt);
            assert!(delay <= Duration::from_millis(400));
        }
        // Attempt 3 would be 800ms uncapped; the cap holds it at 400ms,
        // jitter keeps it at or above half of that.
        let delay = policy.delay_for(3);
        assert!(delay >= Duration::from_millis(200));
    }

    #[test]
    fn test_none_policy_has_zero_delay() {
        let policy = RetryPolicy::none();
        assert_eq!(policy.max_attempts(), 1);
        assert_eq!(policy.delay_for(0), Duration::ZERO);
    }
}
