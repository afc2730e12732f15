//! Logger metrics for observability
//!
//! Counts how hook deliveries went, so an application can notice a hook
//! that keeps failing even when nobody watches standard error.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// # Example
///
/// ```
/// use udp2es_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_delivered();
/// metrics.record_failed();
///
/// assert_eq!(metrics.delivered_count(), 1);
/// assert_eq!(metrics.failed_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct LoggerMetrics {
    /// Hook invocations that returned `Ok`
    delivered: AtomicU64,

    /// Hook invocations that returned an error or panicked
    failed: AtomicU64,

    /// Entries below the logger's minimum level
    filtered: AtomicU64,
}

impl LoggerMetrics {
    pub const fn new() -> Self {
        Self {
            delivered: AtomicU64::new(0),
            failed: AtomicU64::new(0),
            filtered: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn delivered_count(&self) -> u64 {
        self.delivered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn failed_count(&self) -> u64 {
        self.failed.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn filtered_count(&self) -> u64 {
        self.filtered.load(Ordering::Relaxed)
    }

    /// Record a successful hook invocation, returning the previous count
    #[inline]
    pub fn record_delivered(&self) -> u64 {
        self.delivered.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a failed hook invocation, returning the previous count
    #[inline]
    pub fn record_failed(&self) -> u64 {
        self.failed.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_filtered(&self) -> u64 {
        self.filtered.fetch_add(1, Ordering::Relaxed)
    }

    /// Failure rate as a percentage of all hook invocations
    pub fn failure_rate(&self) -> f64 {
        let failed = self.failed_count();
        let total = failed + self.delivered_count();
        if total == 0 {
            0.0
        } else {
            (failed as f64 / total as f64) * 100.0
        }
    }

    pub fn reset(&self) {
        self.delivered.store(0, Ordering::Relaxed);
        self.failed.store(0, Ordering::Relaxed);
        self.filtered.store(0, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.delivered_count(), 0);
        assert_eq!(metrics.failed_count(), 0);
        assert_eq!(metrics.filtered_count(), 0);
        assert_eq!(metrics.failure_rate(), 0.0);
    }

    #[test]
    fn test_failure_rate() {
        let metrics = LoggerMetrics::new();
        for _ in 0..3 {
            metrics.record_delivered();
        }
        metrics.record_failed();

        assert!((metrics.failure_rate() - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_reset() {
        let metrics = LoggerMetrics::new();
        metrics.record_delivered();
        metrics.record_filtered();
        metrics.reset();

        assert_eq!(metrics.delivered_count(), 0);
        assert_eq!(metrics.filtered_count(), 0);
    }
}
