//! Main application struct and eframe integration
//!
//! This module contains the ClipperApp that implements eframe::App.

use crate::config::ClipperConfig;
use crate::polling::JobWorker;
use crate::ui::components::{ClipPreviewDialog, WaveformView};
use crate::ui::dashboard::DashboardSection;
use crate::ui::sections::{FeaturesSection, FooterSection, HeroSection, TrustedBySection};
use crate::ui::state::DashboardState;
use crate::ui::theme::Theme;
use egui::{self, CentralPanel, ScrollArea, TopBottomPanel};
use std::path::PathBuf;
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;
use tracing::{error, info};

/// Main Clipper application
pub struct ClipperApp {
    /// Dashboard state
    state: DashboardState,
    /// Visual theme
    theme: Theme,
    /// Decorative pipeline waveform
    waveform: WaveformView,
    /// Background upload/poll worker
    worker: Option<JoinHandle<()>>,
}

impl ClipperApp {
    /// Create the app and start the background worker
    pub fn new(cc: &eframe::CreationContext<'_>, config: ClipperConfig) -> Self {
        let theme = Theme::dark();
        theme.apply(&cc.egui_ctx);
        // Clip thumbnails are remote URLs
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let mut state = DashboardState::new();
        state.poll_warning_after = config.poll_warning_after;

        let ctx = cc.egui_ctx.clone();
        let worker = JobWorker::new(&config).with_waker(Arc::new(move || ctx.request_repaint()));
        let command_tx = worker.command_sender();
        let event_rx = worker.event_receiver();

        let handle = match worker.start(&config) {
            Ok(handle) => {
                state.connect(command_tx, event_rx);
                info!("Connected to {}", config.api_base_url);
                Some(handle)
            }
            Err(e) => {
                error!("Failed to start job worker: {}", e);
                state.last_error = Some(e.user_message());
                None
            }
        };

        Self {
            state,
            theme,
            waveform: WaveformView::new(config.waveform),
            worker: handle,
        }
    }

    /// Track files hovering over / dropped onto the window
    fn handle_file_drops(&mut self, ctx: &egui::Context) {
        let (hovering, dropped) = ctx.input(|i| {
            let dropped: Vec<PathBuf> = i
                .raw
                .dropped_files
                .iter()
                .filter_map(|f| f.path.clone())
                .collect();
            (!i.raw.hovered_files.is_empty(), dropped)
        });

        self.state.is_dragging = hovering;
        if !dropped.is_empty() {
            self.state.handle_files(dropped);
        }
    }

    fn show_footer(&self, ctx: &egui::Context) {
        TopBottomPanel::bottom("footer")
            .frame(
                egui::Frame::none()
                    .fill(self.theme.bg_footer)
                    .inner_margin(egui::Margin::symmetric(48.0, 20.0)),
            )
            .show(ctx, |ui| {
                FooterSection::new(&self.theme).show(ui);
            });
    }

    fn show_page(&mut self, ctx: &egui::Context) {
        CentralPanel::default()
            .frame(egui::Frame::none().fill(self.theme.bg_page).inner_margin(48.0))
            .show(ctx, |ui| {
                ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                    ui.set_max_width(1152.0);

                    if HeroSection::new(&self.theme).show(ui) {
                        self.state.scroll_to_dashboard = true;
                    }
                    ui.add_space(self.theme.section_gap);
                    FeaturesSection::new(&self.theme).show(ui);
                    ui.add_space(self.theme.section_gap);
                    TrustedBySection::new(&self.theme).show(ui);
                    ui.add_space(self.theme.section_gap);

                    let response =
                        DashboardSection::new(&mut self.state, &self.theme, &mut self.waveform)
                            .show(ui);
                    if std::mem::take(&mut self.state.scroll_to_dashboard) {
                        response.scroll_to_me(Some(egui::Align::TOP));
                    }
                });
            });
    }
}

impl eframe::App for ClipperApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply worker events
        self.state.poll_events();

        self.handle_file_drops(ctx);

        self.show_footer(ctx);
        self.show_page(ctx);
        ClipPreviewDialog::new(&mut self.state, &self.theme).show(ctx);

        if self.state.needs_repaint() {
            ctx.request_repaint_after(Duration::from_millis(500));
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Clipper shutting down");
        self.waveform.deactivate();
        self.state.shutdown();
        if let Some(handle) = self.worker.take() {
            if handle.join().is_err() {
                error!("Job worker panicked");
            }
        }
    }
}
