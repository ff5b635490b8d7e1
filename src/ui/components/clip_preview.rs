//! Clip preview dialog
//!
//! Modal window shown while `DashboardState::selected_clip` is set.

use crate::ui::state::DashboardState;
use crate::ui::theme::Theme;
use egui::{self, RichText};

pub struct ClipPreviewDialog<'a> {
    state: &'a mut DashboardState,
    theme: &'a Theme,
}

impl<'a> ClipPreviewDialog<'a> {
    pub fn new(state: &'a mut DashboardState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    pub fn show(self, ctx: &egui::Context) {
        let Some(clip) = self.state.selected_clip.clone() else {
            return;
        };

        let mut open = true;
        let mut close_clicked = false;
        let title = if clip.title.is_empty() {
            "Preview".to_string()
        } else {
            clip.title.clone()
        };

        egui::Window::new(RichText::new(&title).strong().color(self.theme.text_primary))
            .id(egui::Id::new("clip_preview_dialog"))
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .default_width(640.0)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                egui::Frame::none()
                    .fill(egui::Color32::BLACK)
                    .rounding(self.theme.tile_rounding)
                    .inner_margin(self.theme.spacing_lg)
                    .show(ui, |ui| {
                        ui.set_min_height(220.0);
                        ui.vertical_centered(|ui| {
                            ui.add_space(80.0);
                            ui.hyperlink_to("▶ Play in browser", &clip.video_url);
                        });
                    });

                ui.add_space(self.theme.spacing);
                self.theme.glass_frame().inner_margin(16.0).show(ui, |ui| {
                    ui.label(
                        RichText::new(&clip.transcript_snippet)
                            .size(13.0)
                            .color(self.theme.text_secondary),
                    );
                    ui.add_space(self.theme.spacing_sm);
                    ui.horizontal(|ui| {
                        ui.hyperlink_to("⬇ Download", &clip.video_url);
                        ui.add_enabled(false, egui::Button::new("⟲ Regenerate"))
                            .on_disabled_hover_text("Regeneration is not available yet");
                    });
                });

                ui.add_space(self.theme.spacing_sm);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Close").clicked() {
                        close_clicked = true;
                    }
                });
            });

        if !open || close_clicked {
            self.state.close_preview();
        }
    }
}
