use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::application::ports::{RateLimitDecision, RateLimiter};

struct Window {
    started_at: Instant,
    count: u32,
}

/// Fixed-window request counters keyed by source IP. The table lives in
/// process memory only; a restart clears every counter.
pub struct FixedWindowLimiter {
    ceiling: u32,
    window: Duration,
    state: Mutex<HashMap<IpAddr, Window>>,
}

impl FixedWindowLimiter {
    pub fn new(ceiling: u32, window: Duration) -> Self {
        Self {
            ceiling,
            window,
            state: Mutex::new(HashMap::new()),
        }
    }

    /// Count one request at an explicit instant. An expired window
    /// restarts; a rejected request still increments the counter and does
    /// not reset the window.
    pub fn check_at(&self, source: IpAddr, now: Instant) -> RateLimitDecision {
        let mut state = self.state.lock().expect("lock poisoned");
        let window = state.entry(source).or_insert(Window {
            started_at: now,
            count: 0,
        });

        if now.duration_since(window.started_at) >= self.window {
            window.started_at = now;
            window.count = 0;
        }

        window.count += 1;
        let reset_after = self
            .window
            .saturating_sub(now.duration_since(window.started_at));

        if window.count > self.ceiling {
            RateLimitDecision::Limited {
                limit: self.ceiling,
                reset_after,
            }
        } else {
            RateLimitDecision::Allowed {
                limit: self.ceiling,
                remaining: self.ceiling - window.count,
                reset_after,
            }
        }
    }
}

impl RateLimiter for FixedWindowLimiter {
    fn check(&self, source: IpAddr) -> RateLimitDecision {
        self.check_at(source, Instant::now())
    }
}
