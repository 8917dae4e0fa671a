//! Sliding-window rate limiting for form submissions.
//!
//! Each form controller owns one limiter; nothing is shared between pages,
//! so two open forms never contend for the same budget.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Limiter tuning: at most `max_requests` accepted calls per trailing
/// `window`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimit {
    pub max_requests: u32,
    pub window: Duration,
}

impl RateLimit {
    /// Create a rate limit of `max_requests` per `window`.
    pub const fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests,
            window,
        }
    }
}

impl Default for RateLimit {
    /// The site-wide default: 10 accepted submissions per minute.
    fn default() -> Self {
        Self::new(10, Duration::from_secs(60))
    }
}

/// A sliding-window counter.
///
/// Records the instant of every accepted call and evicts entries older than
/// the trailing window before deciding. This is not a token bucket: bursts
/// within one window are capped exactly at `max_requests`, and capacity
/// recovers continuously as old entries age out rather than in refill
/// steps.
#[derive(Debug)]
pub struct SlidingWindowLimiter {
    limit: RateLimit,
    accepted: VecDeque<Instant>,
}

impl SlidingWindowLimiter {
    /// Create a limiter with the given tuning.
    pub fn new(limit: RateLimit) -> Self {
        Self {
            limit,
            accepted: VecDeque::new(),
        }
    }

    /// The configured tuning.
    pub fn limit(&self) -> RateLimit {
        self.limit
    }

    /// Try to pass the gate now. Allowed calls are recorded; denied calls
    /// leave no trace.
    pub fn try_acquire(&mut self) -> bool {
        self.try_acquire_at(Instant::now())
    }

    /// Clock-injected form of [`try_acquire`](Self::try_acquire), used by
    /// tests and by callers that already read the clock.
    pub fn try_acquire_at(&mut self, now: Instant) -> bool {
        // Timestamps are recorded in increasing order, so eviction is
        // oldest-first from the front.
        while let Some(oldest) = self.accepted.front() {
            if now.duration_since(*oldest) >= self.limit.window {
                self.accepted.pop_front();
            } else {
                break;
            }
        }

        if self.accepted.len() >= self.limit.max_requests as usize {
            return false;
        }
        self.accepted.push_back(now);
        true
    }

    /// Accepted calls still inside the trailing window as of the last gate
    /// decision.
    pub fn in_flight(&self) -> usize {
        self.accepted.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn limiter(max: u32, window_ms: u64) -> SlidingWindowLimiter {
        SlidingWindowLimiter::new(RateLimit::new(max, Duration::from_millis(window_ms)))
    }

    #[test]
    fn allows_up_to_capacity_then_denies() {
        let mut limiter = limiter(5, 60_000);
        let now = Instant::now();
        for _ in 0..5 {
            assert!(limiter.try_acquire_at(now));
        }
        assert!(!limiter.try_acquire_at(now));
        assert_eq!(limiter.in_flight(), 5);
    }

    #[test]
    fn denied_calls_are_not_recorded() {
        let mut limiter = limiter(1, 60_000);
        let now = Instant::now();
        assert!(limiter.try_acquire_at(now));
        assert!(!limiter.try_acquire_at(now));
        assert!(!limiter.try_acquire_at(now));
        assert_eq!(limiter.in_flight(), 1);
    }

    #[test]
    fn capacity_recovers_after_window() {
        let mut limiter = limiter(2, 1_000);
        let start = Instant::now();
        assert!(limiter.try_acquire_at(start));
        assert!(limiter.try_acquire_at(start));
        assert!(!limiter.try_acquire_at(start));

        let later = start + Duration::from_millis(1_000);
        assert!(limiter.try_acquire_at(later));
    }

    #[test]
    fn recovery_is_continuous_not_stepped() {
        let mut limiter = limiter(2, 1_000);
        let start = Instant::now();
        assert!(limiter.try_acquire_at(start));
        assert!(limiter.try_acquire_at(start + Duration::from_millis(500)));

        // One slot frees exactly as its entry leaves the window, while the
        // newer entry still counts.
        let at_expiry = start + Duration::from_millis(1_000);
        assert!(limiter.try_acquire_at(at_expiry));
        assert!(!limiter.try_acquire_at(at_expiry));
    }

    #[test]
    fn wall_clock_gate_works() {
        let mut limiter = limiter(3, 60_000);
        assert!(limiter.try_acquire());
        assert!(limiter.try_acquire());
        assert!(limiter.try_acquire());
        assert!(!limiter.try_acquire());
    }

    proptest! {
        #[test]
        fn never_exceeds_capacity_within_window(
            max in 1u32..20,
            offsets in proptest::collection::vec(0u64..500, 1..60),
        ) {
            let mut limiter = limiter(max, 1_000);
            let start = Instant::now();
            let mut granted = 0u32;
            let mut offsets = offsets;
            offsets.sort_unstable();
            // All offsets stay inside a single window.
            for offset in offsets {
                if limiter.try_acquire_at(start + Duration::from_millis(offset)) {
                    granted += 1;
                }
            }
            prop_assert!(granted <= max);
        }
    }
}
