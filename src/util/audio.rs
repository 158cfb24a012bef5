// Default sample rate (Hz). The host reports the actual rate on every
// tick; this exists as a default during init and a fallback.
pub const DEFAULT_SAMPLE_RATE: f32 = 48_000.0;

// Map `x` from [min, max] to [0, 1] without clamping.
#[inline(always)]
pub fn rescale(x: f32, min: f32, max: f32) -> f32 {
    (x - min) / (max - min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rescale_maps_window_bounds_to_unit_range() {
        assert_eq!(rescale(-0.1, -0.1, 0.0), 0.0);
        assert_eq!(rescale(0.0, -0.1, 0.0), 1.0);
        assert!(rescale(-5.0, -0.1, 0.0) < 0.0);
        assert!(rescale(5.0, -0.1, 0.0) > 1.0);
    }
}
