//! Outbound call rate limiting.

use std::time::{Duration, Instant};

/// Blocking rate limiter for outbound API calls.
///
/// Tracks the next-permitted instant on a monotonic clock; each
/// `wait()` sleeps until that instant and advances the deadline by one
/// interval. Owned by the caller and passed `&mut` to every call site;
/// not safe for concurrent callers without external synchronization.
#[derive(Debug)]
pub struct RateLimiter {
    min_interval: Duration,
    next_permitted: Option<Instant>,
}

impl RateLimiter {
    /// Create a limiter allowing `rate_per_sec` calls per second.
    /// A rate of zero or below disables limiting entirely.
    pub fn new(rate_per_sec: f64) -> Self {
        let min_interval = if rate_per_sec > 0.0 {
            Duration::from_secs_f64(1.0 / rate_per_sec)
        } else {
            Duration::ZERO
        };
        Self {
            min_interval,
            next_permitted: None,
        }
    }

    /// Block until at least `1/rate` seconds have passed since the
    /// previous `wait()` returned. Never blocks when the rate is
    /// disabled or on the first call.
    pub fn wait(&mut self) {
        if self.min_interval.is_zero() {
            return;
        }

        let now = Instant::now();
        let deadline = self.next_permitted.unwrap_or(now);
        if now < deadline {
            std::thread::sleep(deadline - now);
        }
        self.next_permitted = Some(deadline.max(now) + self.min_interval);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consecutive_waits_are_spaced() {
        let mut limiter = RateLimiter::new(10.0);

        limiter.wait();
        let start = Instant::now();
        limiter.wait();
        let elapsed = start.elapsed();

        assert!(
            elapsed >= Duration::from_millis(100),
            "waits only {elapsed:?} apart"
        );
    }

    #[test]
    fn first_wait_does_not_block() {
        let mut limiter = RateLimiter::new(1.0);
        let start = Instant::now();
        limiter.wait();
        assert!(start.elapsed() < Duration::from_millis(100));
    }

    #[test]
    fn zero_rate_never_blocks() {
        let mut limiter = RateLimiter::new(0.0);
        let start = Instant::now();
        for _ in 0..100 {
            limiter.wait();
        }
        assert!(start.elapsed() < Duration::from_millis(50));
    }
}
