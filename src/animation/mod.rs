//! Decorative animations
//!
//! Host-independent animation state. The egui bindings live in
//! `ui::components::waveform`.

mod waveform;

pub use waveform::{
    trace_wave, Canvas, FrameClock, FrameHandle, Rgb, Surface, WaveformAnimator, WaveformConfig,
    WAVE_FREQUENCY,
};
