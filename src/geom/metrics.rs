//! Opt-in timing hooks for the measurement pipeline.
//!
//! Timing is only collected when the `metrics` feature is enabled and the
//! target is not WASM (`std::time::Instant` is unavailable there). Otherwise
//! every call compiles down to running the wrapped closure.
//!
//! ```ignore
//! use mobius_engine::geom::{GeomMetrics, TimingBucket};
//!
//! let mut metrics = GeomMetrics::default();
//! metrics.begin();
//! let grid = metrics.time(TimingBucket::Sampling, || build_grid(&params));
//! if let Some(report) = metrics.end() {
//!     println!("sampling: {} ns", report.sampling_ns);
//! }
//! ```

/// Phases of a measurement run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimingBucket {
    /// Parameter grid construction and the Möbius map.
    Sampling,
    /// Finite differences and the Jacobian sum.
    AreaIntegration,
    /// Boundary re-sampling and polyline summation.
    EdgeIntegration,
}

/// Cumulative nanoseconds per [`TimingBucket`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GeomTimingReport {
    pub sampling_ns: u64,
    pub area_integration_ns: u64,
    pub edge_integration_ns: u64,
}

impl GeomTimingReport {
    /// Returns the total time across all buckets in nanoseconds.
    #[must_use]
    pub fn total_ns(&self) -> u64 {
        self.sampling_ns
            .saturating_add(self.area_integration_ns)
            .saturating_add(self.edge_integration_ns)
    }

    /// Returns the total time in milliseconds (for display purposes).
    #[must_use]
    pub fn total_ms(&self) -> f64 {
        self.total_ns() as f64 / 1_000_000.0
    }
}

/// Accumulator for timing measurement phases.
///
/// When the `metrics` feature is disabled (or on WASM), all methods are
/// no-ops and [`end`](Self::end) returns `None`.
#[derive(Debug, Default)]
pub struct GeomMetrics {
    #[cfg(all(feature = "metrics", not(target_arch = "wasm32")))]
    report: GeomTimingReport,
}

impl GeomMetrics {
    /// Resets all timing counters to zero.
    pub fn begin(&mut self) {
        #[cfg(all(feature = "metrics", not(target_arch = "wasm32")))]
        {
            self.report = GeomTimingReport::default();
        }
    }

    /// Returns the accumulated timing report, or `None` if metrics are disabled.
    #[must_use]
    pub fn end(&self) -> Option<GeomTimingReport> {
        #[cfg(all(feature = "metrics", not(target_arch = "wasm32")))]
        {
            Some(self.report.clone())
        }
        #[cfg(not(all(feature = "metrics", not(target_arch = "wasm32"))))]
        {
            None
        }
    }

    /// Times the execution of `f` and accumulates the elapsed time in `bucket`.
    pub fn time<R>(&mut self, bucket: TimingBucket, f: impl FnOnce() -> R) -> R {
        #[cfg(all(feature = "metrics", not(target_arch = "wasm32")))]
        {
            let start = std::time::Instant::now();
            let result = f();
            // Cap at u64::MAX to prevent overflow
            let nanos = start.elapsed().as_nanos().min(u128::from(u64::MAX)) as u64;
            self.add_to_bucket(bucket, nanos);
            result
        }

        #[cfg(not(all(feature = "metrics", not(target_arch = "wasm32"))))]
        {
            let _ = bucket;
            f()
        }
    }

    #[cfg(all(feature = "metrics", not(target_arch = "wasm32")))]
    fn add_to_bucket(&mut self, bucket: TimingBucket, nanos: u64) {
        let slot = match bucket {
            TimingBucket::Sampling => &mut self.report.sampling_ns,
            TimingBucket::AreaIntegration => &mut self.report.area_integration_ns,
            TimingBucket::EdgeIntegration => &mut self.report.edge_integration_ns,
        };
        *slot = slot.saturating_add(nanos);
    }
}
