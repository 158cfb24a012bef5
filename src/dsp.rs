pub mod scope;
pub mod stats;
pub mod trigger;

/// Engine timing for the current processing tick.
#[derive(Debug, Clone, Copy)]
pub struct FrameContext {
    pub sample_rate: f32,
    /// Seconds per sample, `1 / sample_rate`.
    pub sample_time: f32,
}

impl FrameContext {
    pub fn from_rate(sample_rate: f32) -> Self {
        let sample_rate = sample_rate.max(1.0);
        Self {
            sample_rate,
            sample_time: 1.0 / sample_rate,
        }
    }
}

/// Input voltages for one tick.
///
/// `trigger` is `None` while the trigger jack is unpatched; in external
/// mode that makes the capture free-run instead of waiting forever.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScopeInputs {
    pub x: f32,
    pub y: f32,
    pub trigger: Option<f32>,
}

/// Log2 time-base range; larger values compress a longer window into the buffer.
pub const TIME_PARAM_MIN: f32 = 6.0;
pub const TIME_PARAM_MAX: f32 = 16.0;
pub const TIME_PARAM_DEFAULT: f32 = 14.0;

/// Trigger level range in volts.
pub const TRIGGER_LEVEL_MIN: f32 = -10.0;
pub const TRIGGER_LEVEL_MAX: f32 = 10.0;

/// Control parameters sampled from the host once per tick.
///
/// Range clamping is the host parameter system's job; the engine takes
/// the values as given. The two button fields are raw knob/button
/// voltages, edge-detected inside the engine (anything above zero reads
/// as pressed).
#[derive(Debug, Clone, Copy)]
pub struct ScopeParams {
    pub time: f32,
    pub trigger_level: f32,
    pub lissajous_button: f32,
    pub external_button: f32,
}

impl Default for ScopeParams {
    fn default() -> Self {
        Self {
            time: TIME_PARAM_DEFAULT,
            trigger_level: 0.0,
            lissajous_button: 0.0,
            external_button: 0.0,
        }
    }
}
