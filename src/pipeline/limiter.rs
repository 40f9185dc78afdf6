//! Request pacing
//!
//! A single-owner rate limiter: permits are granted strictly in request
//! order, one every `1/rate` seconds, with no burst credit. A caller that
//! shows up late receives one permit immediately (more than a full period has
//! elapsed since the previous grant) and the schedule restarts from that
//! moment rather than replaying missed permits.

use std::time::Duration;
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

/// Paces an unbounded stream of permits at a fixed frequency
///
/// The first permit becomes available one full period after construction, so
/// a dispatch-then-acquire loop spaces its dispatches exactly `1/rate`
/// seconds apart with the first dispatch immediate.
pub struct RateLimiter {
    interval: Interval,
}

impl RateLimiter {
    /// Creates a limiter granting `rate` permits per second
    ///
    /// `rate` must be positive and finite; configuration validation rejects
    /// anything else before a limiter is ever built.
    pub fn new(rate: f64) -> Self {
        let period = Duration::from_secs_f64(1.0 / rate);
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self { interval }
    }

    /// Suspends until the next permit is granted
    pub async fn acquire(&mut self) {
        self.interval.tick().await;
    }
}
