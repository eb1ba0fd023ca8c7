//! Bounded exponential backoff retry policy.
//!
//! Pure decision logic only: the acquirer owns the attempt counter and the
//! actual suspension, so the policy is testable without real sleeps.

mod policy;

pub use policy::{decide, RetryDecision};
