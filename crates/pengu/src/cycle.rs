//! Time-driven clear color.

use std::f64::consts::TAU;

use pengu_engine::paint::Color;

/// Phase offset between neighbouring channels (2π/3).
pub const CHANNEL_PHASE: f64 = TAU / 3.0;

/// Per-frame derived state. Recomputed from scratch every tick.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameState {
    pub elapsed_seconds: f64,
    pub color: Color,
}

impl FrameState {
    pub fn at(elapsed_seconds: f64) -> Self {
        Self {
            elapsed_seconds,
            color: cycle_color(elapsed_seconds),
        }
    }
}

/// `0.5 + 0.5 * sin(t + phase)`, narrowed to `f32`. Range is `[0, 1]` by construction.
#[inline]
fn wave(t: f64, phase: f64) -> f32 {
    (0.5 + 0.5 * (t + phase).sin()) as f32
}

/// Opaque color whose channels are three sine waves 2π/3 apart.
pub fn cycle_color(t: f64) -> Color {
    Color::opaque(
        wave(t, 0.0),
        wave(t, CHANNEL_PHASE),
        wave(t, 2.0 * CHANNEL_PHASE),
    )
}
