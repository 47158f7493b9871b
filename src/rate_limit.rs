use dashmap::DashMap;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Sliding-window rate limiter keyed by an opaque identifier string.
///
/// Each identifier keeps a log of admission timestamps inside the trailing
/// window. Stale timestamps are purged lazily when that identifier is next
/// checked; `cleanup_expired` does the full sweep and is the only thing that
/// reclaims memory for identifiers that stopped sending requests.
pub struct RateLimiter {
    requests: DashMap<String, Vec<Instant>>, // identifier -> admission log
    max_requests: usize,
    window: Duration,
    total_requests: AtomicU64,
    blocked_requests: AtomicU64,
}

// Snapshot returned by get_stats, shaped for the /api/stats response
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RateLimiterStats {
    pub total_requests: u64,
    pub blocked_requests: u64,
    pub active_identifiers: usize,
    pub max_requests_per_window: usize,
    pub window_seconds: u64,
}

impl RateLimiter {
    pub fn new(max_requests: usize, window: Duration) -> Self {
        Self {
            requests: DashMap::new(),
            max_requests,
            window,
            total_requests: AtomicU64::new(0),
            blocked_requests: AtomicU64::new(0),
        }
    }

    /// Check whether a request from `identifier` at time `now` is admitted,
    /// and record it if so. `now` is passed in rather than read here so
    /// window boundaries can be tested deterministically.
    ///
    /// Never admits more than `max_requests` timestamps inside any trailing
    /// interval of the window length. Unknown identifiers start with an
    /// empty log and are admitted like any fresh caller.
    pub fn check_and_record(&self, identifier: &str, now: Instant) -> bool {
        let mut entry = self.requests.entry(identifier.to_string()).or_default();
        let log = entry.value_mut();

        // lazy purge: drop everything that has left the window
        log.retain(|&t| now.duration_since(t) < self.window);

        // every call counts, admitted or not
        self.total_requests.fetch_add(1, Ordering::Relaxed);

        if log.len() >= self.max_requests {
            self.blocked_requests.fetch_add(1, Ordering::Relaxed);
            log::warn!("Rate limit exceeded for identifier: {}", identifier);
            return false;
        }

        log.push(now);
        log::debug!(
            "Request allowed for {}. Count: {}/{}",
            identifier,
            log.len(),
            self.max_requests
        );
        true
    }

    /// Aggregate usage statistics. Pure read: no log is compacted here, so
    /// `active_identifiers` may overcount identifiers whose entries are
    /// stale but not yet purged by their own next access.
    pub fn get_stats(&self) -> RateLimiterStats {
        let active = self
            .requests
            .iter()
            .filter(|entry| !entry.value().is_empty())
            .count();
        RateLimiterStats {
            total_requests: self.total_requests.load(Ordering::Relaxed),
            blocked_requests: self.blocked_requests.load(Ordering::Relaxed),
            active_identifiers: active,
            max_requests_per_window: self.max_requests,
            window_seconds: self.window.as_secs(),
        }
    }

    /// Drop an identifier's log entirely (administrative override).
    /// Returns whether an entry existed.
    pub fn reset(&self, identifier: &str) -> bool {
        let removed = self.requests.remove(identifier).is_some();
        if removed {
            log::info!("Rate limit reset for identifier: {}", identifier);
        }
        removed
    }

    /// Full sweep: purge stale timestamps from every log and drop
    /// identifiers left empty. Callers run this on a periodic schedule;
    /// without it, idle identifiers are retained indefinitely.
    pub fn cleanup_expired(&self, now: Instant) {
        // count removals inside the sweep; comparing map sizes before and
        // after is wrong under concurrent inserts
        let mut removed = 0usize;
        self.requests.retain(|_, log| {
            log.retain(|&t| now.duration_since(t) < self.window);
            if log.is_empty() {
                removed += 1;
                false
            } else {
                true
            }
        });
        log::debug!("Cleaned up {} old rate limit entries", removed);
    }
}
