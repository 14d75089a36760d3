//! Process-wide service state shared by every handler.

use chrono::{DateTime, SecondsFormat, Utc};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Counter plus the identity fields captured at startup.
///
/// Only `requests_count` changes after construction, and it only ever
/// grows.
#[derive(Debug)]
pub struct ServiceState {
    requests_count: AtomicU64,
    start_time: DateTime<Utc>,
    // Monotonic twin of `start_time`; uptime is measured from here.
    started_at: Instant,
    environment: String,
    container_name: String,
}

impl ServiceState {
    pub fn new(environment: impl Into<String>, container_name: impl Into<String>) -> Self {
        Self {
            requests_count: AtomicU64::new(0),
            start_time: Utc::now(),
            started_at: Instant::now(),
            environment: environment.into(),
            container_name: container_name.into(),
        }
    }

    /// Count one handled request and return the new total.
    pub fn record_request(&self) -> u64 {
        self.requests_count.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn requests_count(&self) -> u64 {
        self.requests_count.load(Ordering::Relaxed)
    }

    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    /// Seconds since startup. Never negative, never decreases.
    pub fn uptime_seconds(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn container_name(&self) -> &str {
        &self.container_name
    }
}

/// ISO-8601 / RFC 3339 rendering used in every response body.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, false)
}

pub fn now_timestamp() -> String {
    format_timestamp(Utc::now())
}
