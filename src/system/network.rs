//! System-wide bandwidth sampling: counter snapshots, MB conversion,
//! and the bounded rate history feeding the chart.

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// How many samples the chart keeps per series (30 seconds at the default tick)
pub const HISTORY_LEN: usize = 30;

/// System-wide cumulative byte counters at a point in time,
/// summed across all interfaces
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NetSnapshot {
    pub bytes_sent: u64,
    pub bytes_received: u64,
}

impl NetSnapshot {
    pub fn new(bytes_sent: u64, bytes_received: u64) -> Self {
        Self { bytes_sent, bytes_received }
    }

    /// Diff against the previous tick's snapshot.
    /// Returns (sent, received) deltas in MB rounded to 2 decimal places.
    /// Counter resets clamp to 0.0 rather than reporting a negative rate.
    pub fn rates_since(&self, prev: &NetSnapshot) -> (f64, f64) {
        (
            bytes_to_mb(self.bytes_sent.saturating_sub(prev.bytes_sent)),
            bytes_to_mb(self.bytes_received.saturating_sub(prev.bytes_received)),
        )
    }
}

/// Convert a byte delta to MB, rounded to 2 decimal places
pub fn bytes_to_mb(bytes: u64) -> f64 {
    round2(bytes as f64 / BYTES_PER_MB)
}

pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Bounded FIFO of rate samples; insertion order is the chart x-axis order
#[derive(Debug, Clone)]
pub struct RateHistory {
    samples: Vec<f64>,
    cap: usize,
}

impl RateHistory {
    pub fn new() -> Self {
        Self { samples: Vec::with_capacity(HISTORY_LEN), cap: HISTORY_LEN }
    }

    /// Append a sample, evicting the oldest once the window is full
    pub fn push(&mut self, rate: f64) {
        if self.samples.len() == self.cap {
            self.samples.remove(0);
        }
        self.samples.push(rate);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Oldest-first samples
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Largest sample in the window, for y-axis scaling
    pub fn max(&self) -> f64 {
        self.samples.iter().copied().fold(0.0, f64::max)
    }

    /// Samples as (x, y) points for a ratatui `Dataset`
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.samples
            .iter()
            .enumerate()
            .map(|(i, &v)| (i as f64, v))
            .collect()
    }
}

impl Default for RateHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MB: u64 = 1024 * 1024;

    #[test]
    fn rates_are_mb_deltas_rounded() {
        let a = NetSnapshot::new(100 * MB, 50 * MB);
        let b = NetSnapshot::new(103 * MB, 50 * MB);
        assert_eq!(b.rates_since(&a), (3.0, 0.0));
    }

    #[test]
    fn rounding_is_two_decimal_places() {
        // 1_500_000 bytes = 1.430511... MB
        assert_eq!(bytes_to_mb(1_500_000), 1.43);
        assert_eq!(bytes_to_mb(0), 0.0);
    }

    #[test]
    fn counter_reset_clamps_to_zero() {
        let a = NetSnapshot::new(100 * MB, 100 * MB);
        let b = NetSnapshot::new(5 * MB, 100 * MB);
        assert_eq!(b.rates_since(&a), (0.0, 0.0));
    }

    #[test]
    fn history_is_bounded_fifo() {
        let mut h = RateHistory::new();
        for i in 0..40 {
            h.push(i as f64);
        }
        assert_eq!(h.len(), HISTORY_LEN);
        // Oldest 10 evicted: window starts at sample 10
        assert_eq!(h.samples()[0], 10.0);
        assert_eq!(*h.samples().last().unwrap(), 39.0);
    }

    #[test]
    fn points_preserve_insertion_order() {
        let mut h = RateHistory::new();
        h.push(1.5);
        h.push(0.25);
        assert_eq!(h.points(), vec![(0.0, 1.5), (1.0, 0.25)]);
        assert_eq!(h.max(), 1.5);
    }
}
