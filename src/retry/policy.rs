//! Exponential backoff decision function.

use crate::config::RetryConfig;
use std::time::Duration;

/// Decision returned by the retry policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Retry after suspending for the given delay.
    RetryAfter(Duration),
    /// Retry budget exhausted; the caller surfaces a timeout error.
    GiveUp,
}

/// Decides whether to retry after a timeout-classified failure.
///
/// `attempt` is the zero-based count of attempts that have already failed:
/// the first failure consults with 0 and, if retried, waits exactly
/// `backoff_factor_ms`. Delays double per attempt and clamp at
/// `backoff_max_ms`. Once `attempt` reaches `max_retries` the policy gives
/// up, so a persistently failing endpoint sees `max_retries + 1` attempts
/// in total.
///
/// Only timeout-class failures ever reach this function; other failure
/// classes are terminal at the call site.
pub fn decide(attempt: u32, config: &RetryConfig) -> RetryDecision {
    if attempt >= config.max_retries {
        return RetryDecision::GiveUp;
    }

    // factor * 2^attempt, with the shift clamped well below overflow.
    let factor = config.backoff_factor_ms;
    let raw = factor.saturating_mul(1u64 << attempt.min(32));
    let delay = raw.min(config.backoff_max_ms);
    RetryDecision::RetryAfter(Duration::from_millis(delay))
}
