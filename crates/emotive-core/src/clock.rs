//! Time source for analysis timestamps.
//!
//! Timestamps are always assigned locally, never taken from the inference
//! backend. [`MonotonicClock`] guarantees that successive readings never go
//! backwards, even if the system clock is adjusted in between.

use chrono::{DateTime, Utc};
use std::sync::Mutex;

/// A source of "now".
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock without ordering guarantees.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that never returns an instant earlier than one it already returned.
#[derive(Debug, Default)]
pub struct MonotonicClock {
    last: Mutex<Option<DateTime<Utc>>>,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> DateTime<Utc> {
        let wall = Utc::now();
        // Even after poisoning the stored instant is a valid lower bound.
        let mut last = match self.last.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let next = match *last {
            Some(previous) if previous > wall => previous,
            _ => wall,
        };
        *last = Some(next);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monotonic_clock_never_goes_backwards() {
        let clock = MonotonicClock::new();
        let mut previous = clock.now();
        for _ in 0..1000 {
            let current = clock.now();
            assert!(current >= previous);
            previous = current;
        }
    }

    #[test]
    fn test_monotonic_clock_holds_future_reading() {
        let clock = MonotonicClock::new();
        let future = Utc::now() + chrono::Duration::hours(1);
        *clock.last.lock().unwrap() = Some(future);

        assert_eq!(clock.now(), future);
    }
}
