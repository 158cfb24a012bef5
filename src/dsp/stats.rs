//! Per-channel statistics over captured buffers.

/// Refresh calls between recomputations; keeps the stats cadence a
/// fraction of the display rate.
pub const REFRESH_DIVIDER: u32 = 4;

/// Descriptive statistics of one buffer snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SignalStats {
    pub rms: f32,
    pub peak_to_peak: f32,
    pub min: f32,
    pub max: f32,
}

impl SignalStats {
    /// Single pass over a snapshot. Pure, so independent copies can be
    /// measured from any context.
    pub fn measure(values: &[f32]) -> Self {
        if values.is_empty() {
            return Self::default();
        }
        let mut sum_squares = 0.0f32;
        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;
        for &v in values {
            sum_squares += v * v;
            min = min.min(v);
            max = max.max(v);
        }
        Self {
            rms: (sum_squares / values.len() as f32).sqrt(),
            peak_to_peak: max - min,
            min,
            max,
        }
    }
}

/// Holds the most recent statistics for both channels, recomputing
/// every [`REFRESH_DIVIDER`]th call so the display can invoke it once
/// per frame without paying for two full passes each time.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatsTracker {
    frame: u32,
    x: SignalStats,
    y: SignalStats,
}

impl StatsTracker {
    pub fn refresh(&mut self, x: &[f32], y: &[f32]) {
        self.frame += 1;
        if self.frame >= REFRESH_DIVIDER {
            self.frame = 0;
            self.x = SignalStats::measure(x);
            self.y = SignalStats::measure(y);
        }
    }

    pub fn x(&self) -> SignalStats {
        self.x
    }

    pub fn y(&self) -> SignalStats {
        self.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_buffer_has_rms_equal_to_magnitude() {
        let buffer = [-3.0f32; 512];
        let stats = SignalStats::measure(&buffer);
        assert_eq!(stats.rms, 3.0);
        assert_eq!(stats.peak_to_peak, 0.0);
        assert_eq!(stats.min, -3.0);
        assert_eq!(stats.max, -3.0);
    }

    #[test]
    fn alternating_buffer_has_rms_equal_to_amplitude() {
        let amplitude = 2.5f32;
        let buffer: Vec<f32> = (0..512)
            .map(|i| if i % 2 == 0 { amplitude } else { -amplitude })
            .collect();
        let stats = SignalStats::measure(&buffer);
        assert!((stats.rms - amplitude).abs() < 1e-4);
        assert_eq!(stats.peak_to_peak, 2.0 * amplitude);
        assert_eq!(stats.min, -amplitude);
        assert_eq!(stats.max, amplitude);
    }

    #[test]
    fn empty_buffer_measures_zero() {
        assert_eq!(SignalStats::measure(&[]), SignalStats::default());
    }

    #[test]
    fn tracker_recomputes_every_fourth_refresh() {
        let mut tracker = StatsTracker::default();
        let buffer = [1.0f32; 512];

        for _ in 0..REFRESH_DIVIDER - 1 {
            tracker.refresh(&buffer, &buffer);
            assert_eq!(tracker.x(), SignalStats::default());
        }

        tracker.refresh(&buffer, &buffer);
        assert_eq!(tracker.x().rms, 1.0);
        assert_eq!(tracker.y().max, 1.0);
    }
}
