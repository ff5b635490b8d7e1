//! UI components and application module
//!
//! This module provides the egui/eframe-based dashboard for Clipper.

mod app;
pub mod components;
mod dashboard;
pub mod sections;
mod state;
mod theme;

pub use app::ClipperApp;
pub use components::{ClipCard, ClipPreviewDialog, StatusStepper, UploadCard, WaveformView};
pub use dashboard::DashboardSection;
pub use state::{DashboardState, UploadState, UPLOAD_FAILED_MESSAGE};
pub use theme::Theme;
