//! Retry policy for batch requests.
//!
//! Bulk operations run every batch request under a [`RetryPolicy`]. The
//! default policy retries a failed batch once after a fixed 20-second
//! backoff, and only when the failure was a network-level error: a request
//! that never reached the server is safe to resend, while an API rejection
//! is not.

use std::time::Duration;

use crate::clients::errors::RequestError;

/// Default backoff before resending a batch after a connectivity failure.
pub const RETRY_BACKOFF: Duration = Duration::from_secs(20);

/// Retry policy applied to each batch request of a bulk operation.
///
/// The policy is deliberately small: a total attempt count, a fixed backoff
/// between attempts, and a predicate deciding which failures are worth
/// retrying. It does not apply to single-record operations or to the
/// pagination loop: a paginated read that fails mid-way should surface the
/// failure rather than silently re-read a page.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use airtable_api::RetryPolicy;
///
/// // Retry up to twice, quickly, on any server error as well.
/// let policy = RetryPolicy {
///     max_attempts: 3,
///     backoff: Duration::from_secs(1),
///     retry_on: |error| matches!(
///         error,
///         airtable_api::RequestError::Network(_)
///             | airtable_api::RequestError::Api { status: 500..=599, .. }
///     ),
/// };
/// assert_eq!(policy.max_attempts, 3);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct RetryPolicy {
    /// Total number of attempts, including the first (minimum 1).
    pub max_attempts: u32,
    /// Fixed pause before each retry attempt.
    pub backoff: Duration,
    /// Predicate over the failure deciding whether a retry is attempted.
    pub retry_on: fn(&RequestError) -> bool,
}

impl RetryPolicy {
    /// A policy that never retries.
    #[must_use]
    pub fn none() -> Self {
        Self {
            max_attempts: 1,
            backoff: Duration::ZERO,
            retry_on: |_| false,
        }
    }

    /// Returns `true` if `error` should be retried after `attempt` attempts
    /// have already been made.
    #[must_use]
    pub fn should_retry(&self, error: &RequestError, attempt: u32) -> bool {
        attempt < self.max_attempts && (self.retry_on)(error)
    }
}

impl Default for RetryPolicy {
    /// One retry, 20-second backoff, network failures only.
    fn default() -> Self {
        Self {
            max_attempts: 2,
            backoff: RETRY_BACKOFF,
            retry_on: RequestError::is_network,
        }
    }
}
