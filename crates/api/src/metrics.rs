use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::{Duration, Instant};

pub struct Metrics {
    // Counters
    total_runs: AtomicUsize,
    successful_runs: AtomicUsize,
    failed_runs: AtomicUsize,
    rejected_inputs: AtomicUsize,

    // Timing (in microseconds), successful runs only
    total_analysis_time_us: AtomicU64,

    // Counts
    total_sentences: AtomicUsize,
    total_groups_classified: AtomicUsize,
}

impl Metrics {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            total_runs: AtomicUsize::new(0),
            successful_runs: AtomicUsize::new(0),
            failed_runs: AtomicUsize::new(0),
            rejected_inputs: AtomicUsize::new(0),
            total_analysis_time_us: AtomicU64::new(0),
            total_sentences: AtomicUsize::new(0),
            total_groups_classified: AtomicUsize::new(0),
        })
    }

    pub fn record_success(&self, duration: Duration, sentences: usize, groups: usize) {
        self.total_runs.fetch_add(1, Ordering::Relaxed);
        self.successful_runs.fetch_add(1, Ordering::Relaxed);
        self.total_analysis_time_us
            .fetch_add(duration.as_micros() as u64, Ordering::Relaxed);
        self.total_sentences.fetch_add(sentences, Ordering::Relaxed);
        self.total_groups_classified.fetch_add(groups, Ordering::Relaxed);
    }

    pub fn record_failure(&self) {
        self.total_runs.fetch_add(1, Ordering::Relaxed);
        self.failed_runs.fetch_add(1, Ordering::Relaxed);
    }

    /// Blank input never reaches the classifier and is not counted as a run
    pub fn record_rejected(&self) {
        self.rejected_inputs.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        let successful = self.successful_runs.load(Ordering::Relaxed);
        let total_us = self.total_analysis_time_us.load(Ordering::Relaxed) as f64;

        MetricsSnapshot {
            total_runs: self.total_runs.load(Ordering::Relaxed),
            successful_runs: successful,
            failed_runs: self.failed_runs.load(Ordering::Relaxed),
            rejected_inputs: self.rejected_inputs.load(Ordering::Relaxed),
            avg_analysis_time_ms: if successful > 0 {
                total_us / successful as f64 / 1000.0 // Convert to ms
            } else {
                0.0
            },
            total_sentences: self.total_sentences.load(Ordering::Relaxed),
            total_groups_classified: self.total_groups_classified.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MetricsSnapshot {
    pub total_runs: usize,
    pub successful_runs: usize,
    pub failed_runs: usize,
    pub rejected_inputs: usize,
    pub avg_analysis_time_ms: f64,
    pub total_sentences: usize,
    pub total_groups_classified: usize,
}

pub struct TimedOperation {
    start: Instant,
}

impl TimedOperation {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}
