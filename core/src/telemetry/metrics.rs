use std::sync::Mutex;

/// Point-in-time view of the run counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MetricsSnapshot {
    pub reports_published: usize,
    pub samples_emitted: usize,
    pub failures: usize,
}

/// Counters for report activity, shared between the driver and the bridge.
pub struct RunMetrics {
    inner: Mutex<MetricsSnapshot>,
}

impl RunMetrics {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(MetricsSnapshot::default()),
        }
    }

    pub fn record_report(&self, samples: usize) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.reports_published += 1;
            metrics.samples_emitted += samples;
        }
    }

    pub fn record_failure(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.failures += 1;
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        if let Ok(metrics) = self.inner.lock() {
            *metrics
        } else {
            MetricsSnapshot::default()
        }
    }
}

impl Default for RunMetrics {
    fn default() -> Self {
        Self::new()
    }
}
