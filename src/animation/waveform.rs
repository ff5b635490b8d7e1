//! Sine-wave animator
//!
//! Each frame traces `amplitude * sin(x * WAVE_FREQUENCY + phase)` across the
//! surface and advances `phase` by `speed * 10`. Frames are paced by the host
//! through a [`FrameClock`]; the animator holds at most one pending frame
//! request and releases it on deactivation or drop.

use std::fmt;
use tracing::debug;

/// Horizontal frequency of the traced wave, in radians per logical pixel
pub const WAVE_FREQUENCY: f32 = 0.02;

/// An sRGB stroke colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parse `#rrggbb` (the leading `#` is optional)
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveformConfig {
    /// Peak deflection in logical pixels
    pub amplitude: f32,
    /// Phase increment scale; each frame adds `speed * 10`
    pub speed: f32,
    pub color: Rgb,
    pub line_width: f32,
}

impl Default for WaveformConfig {
    fn default() -> Self {
        Self {
            amplitude: 24.0,
            speed: 0.02,
            color: Rgb(0x9d, 0x4d, 0xff),
            line_width: 2.0,
        }
    }
}

impl WaveformConfig {
    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }}

/// Measured drawing surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    /// Logical width
    pub width: f32,
    /// Logical height
    pub height: f32,
    /// Physical pixels per logical pixel
    pub pixel_ratio: f32,
}

impl Surface {
    pub fn new(width: f32, height: f32, pixel_ratio: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
            pixel_ratio: if pixel_ratio > 0.0 { pixel_ratio } else { 1.0 },
        }
    }

    /// Backing-store size in physical pixels
    pub fn physical_size(&self) -> (u32, u32) {
        (
            (self.width * self.pixel_ratio).round() as u32,
            (self.height * self.pixel_ratio).round() as u32,
        )
    }
}

/// Opaque id of a scheduled frame callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub u64);

/// The host's display-refresh callback mechanism
pub trait FrameClock {
    /// Ask for a callback on the next display refresh
    fn request_frame(&mut self) -> FrameHandle;

    /// Withdraw a previously requested callback
    fn cancel_frame(&mut self, handle: FrameHandle);

    /// The request that is due on this refresh, if any
    fn take_due(&mut self) -> Option<FrameHandle>;
}

/// Minimal 2D drawing target
pub trait Canvas {
    fn clear(&mut self);

    /// Stroke a connected line through `points` (logical coordinates)
    fn stroke_polyline(&mut self, points: &[(f32, f32)], width: f32, color: Rgb);
}

/// Sample the wave at one point per physical pixel column
pub fn trace_wave(surface: &Surface, phase: f32, amplitude: f32) -> Vec<(f32, f32)> {
    let (columns, _) = surface.physical_size();
    let mid = surface.height / 2.0;
    (0..columns)
        .map(|col| {
            let x = col as f32 / surface.pixel_ratio;
            (x, mid + (x * WAVE_FREQUENCY + phase).sin() * amplitude)
        })
        .collect()
}

pub struct WaveformAnimator<C: FrameClock> {
    config: WaveformConfig,
    clock: C,
    surface: Option<Surface>,
    phase: f32,
    pending: Option<FrameHandle>,
}

impl<C: FrameClock> WaveformAnimator<C> {
    pub fn new(config: WaveformConfig, clock: C) -> Self {
        Self {
            config,
            clock,
            surface: None,
            phase: 0.0,
            pending: None,
        }
    }

    /// Measure the surface and start the frame loop. A no-op when already active.
    pub fn activate(&mut self, surface: Surface) {
        self.surface = Some(surface);
        if self.pending.is_none() {
            debug!(
                "Waveform activated at {:?} in {}",
                surface.physical_size(),
                self.config.color
            );
            self.pending = Some(self.clock.request_frame());
        }
    }

    /// Re-measure without touching the frame loop
    pub fn resize(&mut self, surface: Surface) {
        if self.surface.is_some() {
            self.surface = Some(surface);
        }
    }

    /// Stop the loop and release the pending frame request
    pub fn deactivate(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.clock.cancel_frame(handle);
            debug!("Waveform deactivated, cancelled frame {:?}", handle);
        }
        self.surface = None;
    }

    /// Draw at the current phase; if our frame is due, advance and reschedule.
    ///
    /// Returns whether the phase advanced.
    pub fn frame(&mut self, canvas: &mut dyn Canvas) -> bool {
        let Some(surface) = self.surface else {
            return false;
        };

        self.draw(&surface, canvas);

        match self.clock.take_due() {
            Some(handle) if Some(handle) == self.pending => {
                self.phase += self.config.speed * 10.0;
                self.pending = Some(self.clock.request_frame());
                true
            }
            _ => false,
        }
    }

    fn draw(&self, surface: &Surface, canvas: &mut dyn Canvas) {
        canvas.clear();
        let points = trace_wave(surface, self.phase, self.config.amplitude);
        if points.len() >= 2 {
            canvas.stroke_polyline(&points, self.config.line_width, self.config.color);
        }
    }

    pub fn is_active(&self) -> bool {
        self.surface.is_some()
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}

impl<C: FrameClock> Drop for WaveformAnimator<C> {
    fn drop(&mut self) {
        self.deactivate();
    }
}
