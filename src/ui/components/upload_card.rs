//! Upload card component
//!
//! Drop target and file picker for new episodes.

use crate::api::types::VIDEO_EXTENSIONS;
use crate::ui::state::DashboardState;
use crate::ui::theme::Theme;
use egui::{self, RichText, Stroke, Vec2};
use std::path::PathBuf;

pub struct UploadCard<'a> {
    state: &'a mut DashboardState,
    theme: &'a Theme,
}

impl<'a> UploadCard<'a> {
    pub fn new(state: &'a mut DashboardState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    pub fn show(mut self, ui: &mut egui::Ui) {
        let border = if self.state.is_dragging {
            self.theme.primary
        } else {
            self.theme.border
        };
        let fill = if self.state.is_dragging {
            self.theme.bg_tile
        } else {
            self.theme.bg_glass
        };

        egui::Frame::none()
            .fill(fill)
            .stroke(Stroke::new(2.0, border))
            .rounding(self.theme.card_rounding)
            .inner_margin(32.0)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("⬆").size(36.0).color(self.theme.secondary));
                    ui.add_space(self.theme.spacing);
                    ui.label(
                        RichText::new("Drag & drop your episode")
                            .size(20.0)
                            .strong()
                            .color(self.theme.text_primary),
                    );
                    ui.label(
                        RichText::new(
                            "MP4 or MOV, under 2GB. We'll transcribe and find your best clips.",
                        )
                        .size(13.0)
                        .color(self.theme.text_muted),
                    );
                    ui.add_space(self.theme.spacing_lg);

                    self.show_buttons(ui);

                    if let Some(error) = &self.state.upload_error {
                        ui.add_space(self.theme.spacing);
                        ui.label(RichText::new(error).size(12.0).color(self.theme.error));
                    }
                });
            });
    }

    fn show_buttons(&mut self, ui: &mut egui::Ui) {
        let is_uploading = self.state.is_uploading();

        let label = if is_uploading {
            "Uploading…"
        } else {
            "Select a file"
        };
        let button = egui::Button::new(RichText::new(label).color(self.theme.text_primary))
            .min_size(Vec2::new(140.0, 36.0))
            .rounding(self.theme.button_rounding);

        let response = ui.add_enabled(!is_uploading, button);
        response.widget_info(|| {
            egui::WidgetInfo::labeled(egui::WidgetType::Button, !is_uploading, label)
        });

        if response.clicked() {
            if let Some(path) = pick_episode() {
                self.state.handle_files(vec![path]);
            }
        }

        if is_uploading {
            ui.add_space(self.theme.spacing_sm);
            ui.spinner();
            if ui.small_button("Cancel").clicked() {
                self.state.cancel_upload();
            }
        }
    }
}

/// Native file picker filtered to video files
fn pick_episode() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Select an episode")
        .add_filter("Video", VIDEO_EXTENSIONS)
        .pick_file()
}
