//! Signal-capture core for a two-channel modular-synth oscilloscope.
//!
//! The crate samples two voltage inputs at audio rate, fills a pair of
//! fixed 512-sample buffers, and aligns repeated captures on a trigger
//! condition so a display layer can draw stable waveforms. Rendering,
//! widget layout, and parameter binding are the host's problem; this
//! crate exposes the captured buffers, the mode flags, and derived
//! per-channel statistics.

pub mod dsp;
pub mod settings;
pub mod util;
