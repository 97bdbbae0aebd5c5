use std::time::Duration;

use rand::Rng;

/// Exponential retry delay, doubling from `base` up to `max`.
#[derive(Debug, Clone)]
pub struct Backoff {
    current: Duration,
    base: Duration,
    max: Duration,
    attempts: u32,
}

impl Backoff {
    #[must_use]
    pub fn new(base: Duration, max: Duration) -> Self {
        Self {
            current: base,
            base,
            max: max.max(base),
            attempts: 0,
        }
    }

    /// Retry schedule for failed weather fetches: 10s doubling to 5 minutes.
    #[must_use]
    pub fn for_weather_fetch() -> Self {
        Self::new(Duration::from_secs(10), Duration::from_secs(300))
    }

    pub fn next_delay(&mut self) -> Duration {
        let delay = self.current;
        self.current = self.current.saturating_mul(2).min(self.max);
        self.attempts = self.attempts.saturating_add(1);
        delay
    }

    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn reset(&mut self) {
        self.current = self.base;
        self.attempts = 0;
    }
}

/// Spreads `delay` by up to ±10% so retries from many clients do not line up.
#[must_use]
pub fn with_jitter<R: Rng>(delay: Duration, rng: &mut R) -> Duration {
    let factor = 1.0 + rng.random_range(-0.1f64..0.1f64);
    delay.mul_f64(factor).max(Duration::from_secs(1))
}
