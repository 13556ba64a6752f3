//! Shared types for the API layer.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::catalog::DiseaseCatalog;
use crate::engine::RiskEngine;
use crate::theme::ThemeStore;
use crate::validator::Validator;

/// Cosmetic processing delay before a prediction is returned, simulating
/// a slower model backend. Validation failures return before it.
const DEFAULT_SIMULATED_LATENCY: Duration = Duration::from_millis(1000);

/// Requests allowed per client IP within one rate window.
const RATE_MAX_REQUESTS: u32 = 100;

/// Sliding rate window (15 minutes).
const RATE_WINDOW: Duration = Duration::from_secs(15 * 60);

// ───────────────────────────────────────────────────────────
// API context — shared state for routes and middleware
// ───────────────────────────────────────────────────────────

/// Shared context for all API routes and middleware. Cheap to clone; the
/// catalog and engine are behind `Arc`s and never mutated.
#[derive(Clone)]
pub struct ApiContext {
    pub catalog: Arc<DiseaseCatalog>,
    pub engine: Arc<RiskEngine>,
    pub validator: Validator,
    pub theme: ThemeStore,
    pub rate_limiter: Arc<Mutex<RateLimiter>>,
    pub simulated_latency: Duration,
}

impl ApiContext {
    pub fn new(catalog: Arc<DiseaseCatalog>) -> Self {
        Self {
            engine: Arc::new(RiskEngine::new(catalog.clone())),
            validator: Validator::new(catalog.clone()),
            theme: ThemeStore::at_default_location(),
            catalog,
            rate_limiter: Arc::new(Mutex::new(RateLimiter::new())),
            simulated_latency: DEFAULT_SIMULATED_LATENCY,
        }
    }

    /// Override the simulated delay (zero in tests).
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.simulated_latency = latency;
        self
    }

    /// Override the rate limiter (tight limits in tests).
    pub fn with_rate_limiter(mut self, limiter: RateLimiter) -> Self {
        self.rate_limiter = Arc::new(Mutex::new(limiter));
        self
    }

    /// Override the theme store location (temp dir in tests).
    pub fn with_theme_store(mut self, store: ThemeStore) -> Self {
        self.theme = store;
        self
    }
}

// ───────────────────────────────────────────────────────────
// Rate limiter — per-IP sliding window
// ───────────────────────────────────────────────────────────

/// Sliding-window request limiter, keyed by client IP.
pub struct RateLimiter {
    windows: HashMap<String, Vec<Instant>>,
    max_requests: u32,
    window: Duration,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self::with_limits(RATE_MAX_REQUESTS, RATE_WINDOW)
    }

    pub fn with_limits(max_requests: u32, window: Duration) -> Self {
        Self {
            windows: HashMap::new(),
            max_requests,
            window,
        }
    }

    /// Record a request for `key`. `Err(retry_after_secs)` once the window
    /// is full.
    pub fn check(&mut self, key: &str) -> Result<(), u64> {
        let now = Instant::now();
        let window = self.window;
        let timestamps = self.windows.entry(key.to_string()).or_default();
        timestamps.retain(|t| now.duration_since(*t) < window);

        if timestamps.len() >= self.max_requests as usize {
            // Oldest entry ages out first; that is when a slot frees up.
            let retry_after = timestamps
                .first()
                .map(|oldest| window.saturating_sub(now.duration_since(*oldest)).as_secs() + 1)
                .unwrap_or(1);
            return Err(retry_after);
        }

        timestamps.push(now);
        Ok(())
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allows_requests_below_the_limit() {
        let mut limiter = RateLimiter::with_limits(3, Duration::from_secs(60));
        assert!(limiter.check("10.0.0.1").is_ok());
        assert!(limiter.check("10.0.0.1").is_ok());
        assert!(limiter.check("10.0.0.1").is_ok());
    }

    #[test]
    fn rejects_once_window_is_full() {
        let mut limiter = RateLimiter::with_limits(2, Duration::from_secs(60));
        limiter.check("10.0.0.1").unwrap();
        limiter.check("10.0.0.1").unwrap();
        let retry_after = limiter.check("10.0.0.1").unwrap_err();
        assert!(retry_after >= 1);
    }

    #[test]
    fn keys_are_isolated() {
        let mut limiter = RateLimiter::with_limits(1, Duration::from_secs(60));
        limiter.check("10.0.0.1").unwrap();
        assert!(limiter.check("10.0.0.2").is_ok());
        assert!(limiter.check("10.0.0.1").is_err());
    }

    #[test]
    fn window_expiry_frees_slots() {
        let mut limiter = RateLimiter::with_limits(1, Duration::from_millis(10));
        limiter.check("10.0.0.1").unwrap();
        std::thread::sleep(Duration::from_millis(20));
        assert!(limiter.check("10.0.0.1").is_ok());
    }
}
