//! Triggered two-channel capture engine.

use super::trigger::{BooleanTrigger, SchmittTrigger};
use super::{FrameContext, ScopeInputs, ScopeParams};
use crate::settings::ScopeState;
use crate::util::audio::rescale;

/// Samples captured per channel per trigger cycle.
pub const BUFFER_SIZE: usize = 512;

/// Width of the rearm window below the trigger level, in volts. The
/// gate must leave `[level - 0.1, level]` downward before the trigger
/// can fire again.
const TRIGGER_WINDOW: f32 = 0.1;

/// Longest wait for a trigger before the capture restarts anyway, in
/// seconds of real time.
const HOLD_TIME: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    X,
    Y,
}

/// Per-sample capture state machine.
///
/// `advance` is meant to run once per tick inside a real-time audio
/// callback: it never allocates, never blocks, and costs O(1). A full
/// buffer is held until the trigger condition fires (or the hold
/// timeout elapses), then overwritten from index 0; readers see stable
/// contents outside the slots the current cycle has already committed.
#[derive(Debug, Clone)]
pub struct ScopeProcessor {
    buffer_x: [f32; BUFFER_SIZE],
    buffer_y: [f32; BUFFER_SIZE],
    buffer_index: usize,
    frame_index: u32,
    lissajous: bool,
    external: bool,
    lissajous_button: BooleanTrigger,
    external_button: BooleanTrigger,
    reset_trigger: SchmittTrigger,
}

impl Default for ScopeProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeProcessor {
    pub fn new() -> Self {
        Self {
            buffer_x: [0.0; BUFFER_SIZE],
            buffer_y: [0.0; BUFFER_SIZE],
            buffer_index: 0,
            frame_index: 0,
            lissajous: false,
            external: false,
            lissajous_button: BooleanTrigger::default(),
            external_button: BooleanTrigger::default(),
            reset_trigger: SchmittTrigger::default(),
        }
    }

    /// Flips between dual-trace and X-Y display on a rising edge of the
    /// raw button value. Holding the button or releasing it does nothing.
    pub fn toggle_display_mode(&mut self, raw: f32) {
        if self.lissajous_button.process(raw > 0.0) {
            self.lissajous = !self.lissajous;
        }
    }

    /// Flips between the internal (channel X) and external trigger
    /// source, with the same edge semantics as [`Self::toggle_display_mode`].
    pub fn toggle_trigger_source(&mut self, raw: f32) {
        if self.external_button.process(raw > 0.0) {
            self.external = !self.external;
        }
    }

    /// One tick of the capture state machine.
    pub fn advance(&mut self, inputs: ScopeInputs, params: &ScopeParams, ctx: FrameContext) {
        self.toggle_display_mode(params.lissajous_button);
        self.toggle_trigger_source(params.external_button);

        // Time-base scaling: each buffer slot represents `delta_time`
        // seconds, so slower settings skip more ticks between commits.
        let delta_time = (-params.time).exp2();
        let frame_count = (delta_time * ctx.sample_rate).ceil() as u32;

        if self.buffer_index < BUFFER_SIZE {
            self.frame_index += 1;
            if self.frame_index > frame_count {
                self.frame_index = 0;
                self.buffer_x[self.buffer_index] = inputs.x;
                self.buffer_y[self.buffer_index] = inputs.y;
                self.buffer_index += 1;
            }
        }

        if self.buffer_index >= BUFFER_SIZE {
            // Lissajous never waits, and external mode with nothing
            // patched into the trigger jack has nothing to wait for.
            if self.lissajous || (self.external && inputs.trigger.is_none()) {
                self.buffer_index = 0;
                self.frame_index = 0;
                return;
            }

            // Rearm on the first wait tick so a gate already sitting
            // above the level cannot fire immediately.
            if self.frame_index == 0 {
                self.reset_trigger.reset();
            }
            self.frame_index += 1;

            let gate = if self.external {
                inputs.trigger.unwrap_or(0.0)
            } else {
                inputs.x
            };
            let fired = self.reset_trigger.process(rescale(
                gate,
                params.trigger_level - TRIGGER_WINDOW,
                params.trigger_level,
            ));

            let hold_ticks = (HOLD_TIME * ctx.sample_rate).ceil() as u32;
            if fired || self.frame_index >= hold_ticks {
                self.buffer_index = 0;
                self.frame_index = 0;
            }
        }
    }

    pub fn buffer_x(&self) -> &[f32; BUFFER_SIZE] {
        &self.buffer_x
    }

    pub fn buffer_y(&self) -> &[f32; BUFFER_SIZE] {
        &self.buffer_y
    }

    /// Current write position, in `[0, BUFFER_SIZE]`.
    pub fn buffer_index(&self) -> usize {
        self.buffer_index
    }

    pub fn lissajous(&self) -> bool {
        self.lissajous
    }

    pub fn external(&self) -> bool {
        self.external
    }

    /// Copies one channel rotated so the oldest committed sample comes
    /// first. Free-running and lissajous displays use this to keep the
    /// trace steady while the write position walks the buffer.
    pub fn copy_rotated(&self, channel: Channel, out: &mut [f32; BUFFER_SIZE]) {
        let source = match channel {
            Channel::X => &self.buffer_x,
            Channel::Y => &self.buffer_y,
        };
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = source[(self.buffer_index + i) % BUFFER_SIZE];
        }
    }

    /// Returns both mode flags to defaults and clears the capture state.
    pub fn reset(&mut self) {
        self.buffer_x.fill(0.0);
        self.buffer_y.fill(0.0);
        self.buffer_index = 0;
        self.frame_index = 0;
        self.lissajous = false;
        self.external = false;
        self.reset_trigger.reset();
    }

    pub fn persisted_state(&self) -> ScopeState {
        ScopeState {
            lissajous: self.lissajous,
            external: self.external,
        }
    }

    pub fn apply_state(&mut self, state: ScopeState) {
        self.lissajous = state.lissajous;
        self.external = state.external;
    }
}
