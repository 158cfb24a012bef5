//! Offline demo harness: drives the capture engine over synthesised
//! signals and logs the captured statistics.

use anyhow::Result;
use modscope::dsp::scope::ScopeProcessor;
use modscope::dsp::stats::{REFRESH_DIVIDER, StatsTracker};
use modscope::dsp::{FrameContext, ScopeInputs, ScopeParams};
use modscope::settings::SettingsManager;
use modscope::util::audio::DEFAULT_SAMPLE_RATE;
use std::f32::consts::TAU;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut settings = SettingsManager::load_or_default();
    info!(
        lissajous = settings.state().lissajous,
        external = settings.state().external,
        "loaded persisted scope state"
    );

    let mut scope = ScopeProcessor::new();
    scope.apply_state(settings.state());

    let ctx = FrameContext::from_rate(DEFAULT_SAMPLE_RATE);
    let params = ScopeParams::default();

    // One second of a 440 Hz sine on X against a 1 Hz ramp on Y,
    // triggered internally off channel X.
    for n in 0..DEFAULT_SAMPLE_RATE as u32 {
        let t = n as f32 * ctx.sample_time;
        let inputs = ScopeInputs {
            x: 5.0 * (TAU * 440.0 * t).sin(),
            y: 10.0 * t - 5.0,
            trigger: None,
        };
        scope.advance(inputs, &params, ctx);
    }
    info!(
        buffer_index = scope.buffer_index(),
        lissajous = scope.lissajous(),
        external = scope.external(),
        "capture finished"
    );

    let mut stats = StatsTracker::default();
    for _ in 0..REFRESH_DIVIDER {
        stats.refresh(scope.buffer_x(), scope.buffer_y());
    }
    let x = stats.x();
    info!(
        "X: rms {:.2}  pp {:.2}  max {:.2}  min {:.2}",
        x.rms, x.peak_to_peak, x.max, x.min
    );
    let y = stats.y();
    info!(
        "Y: rms {:.2}  pp {:.2}  max {:.2}  min {:.2}",
        y.rms, y.peak_to_peak, y.max, y.min
    );

    settings.set_state(scope.persisted_state());
    settings.save()?;
    Ok(())
}
