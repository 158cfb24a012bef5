//! Edge detectors for the mode buttons and the capture trigger.

/// Fires on a false -> true transition of a boolean input.
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanTrigger {
    state: bool,
}

impl BooleanTrigger {
    #[inline]
    pub fn process(&mut self, high: bool) -> bool {
        let fired = high && !self.state;
        self.state = high;
        fired
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum SchmittState {
    #[default]
    Unknown,
    Low,
    High,
}

/// Hysteresis trigger over a normalized input: arms at <= 0, fires at >= 1.
///
/// After `reset()` the detector holds no arming state, so an input
/// already above the high threshold moves it to `High` without firing;
/// it must dip to the low threshold before it can fire again.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchmittTrigger {
    state: SchmittState,
}

impl SchmittTrigger {
    pub fn reset(&mut self) {
        self.state = SchmittState::Unknown;
    }

    #[inline]
    pub fn process(&mut self, value: f32) -> bool {
        match self.state {
            SchmittState::Low => {
                if value >= 1.0 {
                    self.state = SchmittState::High;
                    return true;
                }
            }
            SchmittState::High => {
                if value <= 0.0 {
                    self.state = SchmittState::Low;
                }
            }
            SchmittState::Unknown => {
                if value >= 1.0 {
                    self.state = SchmittState::High;
                } else if value <= 0.0 {
                    self.state = SchmittState::Low;
                }
            }
        }
        false
    }
}
