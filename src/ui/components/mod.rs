//! UI components module
//!
//! Reusable widgets composed by the dashboard section.

pub mod clip_card;
pub mod clip_preview;
pub mod status_stepper;
pub mod upload_card;
pub mod waveform;

pub use clip_card::ClipCard;
pub use clip_preview::ClipPreviewDialog;
pub use status_stepper::StatusStepper;
pub use upload_card::UploadCard;
pub use waveform::{EguiFrameClock, WaveformView};
