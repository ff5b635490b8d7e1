//! Clip card component

use crate::api::Clip;
use crate::ui::theme::Theme;
use egui::{self, RichText, Stroke};

pub struct ClipCard<'a> {
    clip: &'a Clip,
    theme: &'a Theme,
}

impl<'a> ClipCard<'a> {
    pub fn new(clip: &'a Clip, theme: &'a Theme) -> Self {
        Self { clip, theme }
    }

    /// Returns true when the user asked for a preview
    pub fn show(self, ui: &mut egui::Ui) -> bool {
        let mut preview = false;

        self.theme.glass_frame().inner_margin(20.0).show(ui, |ui| {
            ui.vertical(|ui| {
                // Thumbnail with the score badge underneath
                egui::Frame::none()
                    .fill(self.theme.bg_tile)
                    .stroke(Stroke::new(1.0, self.theme.border))
                    .rounding(self.theme.tile_rounding)
                    .inner_margin(12.0)
                    .show(ui, |ui| {
                        let thumbnail = ui.add(
                            egui::Image::new(self.clip.thumbnail_url.as_str())
                                .fit_to_exact_size(egui::vec2(ui.available_width(), 120.0))
                                .maintain_aspect_ratio(false)
                                .rounding(self.theme.tile_rounding),
                        );
                        let alt = format!("Thumbnail {}", self.clip.title);
                        thumbnail.widget_info(|| {
                            egui::WidgetInfo::labeled(egui::WidgetType::Other, true, &alt)
                        });
                        ui.add_space(self.theme.spacing_sm);

                        ui.horizontal(|ui| {
                            ui.label(
                                RichText::new(format!("✨ Score {}%", self.clip.score_percent()))
                                    .size(12.0)
                                    .color(self.theme.text_primary),
                            );
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    let button = ui.button("▶ Preview");
                                    let title = format!("Preview {}", self.clip.title);
                                    button.widget_info(|| {
                                        egui::WidgetInfo::labeled(
                                            egui::WidgetType::Button,
                                            true,
                                            &title,
                                        )
                                    });
                                    if button.clicked() {
                                        preview = true;
                                    }
                                },
                            );
                        });
                    });

                ui.add_space(self.theme.spacing_sm);
                ui.label(
                    RichText::new(&self.clip.title)
                        .size(17.0)
                        .strong()
                        .color(self.theme.text_primary),
                );
                ui.label(
                    RichText::new(&self.clip.transcript_snippet)
                        .size(12.0)
                        .color(self.theme.text_muted),
                );
                ui.add_space(self.theme.spacing_sm);

                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(self.clip.duration_label())
                            .size(12.0)
                            .color(self.theme.text_muted),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.hyperlink_to("⬇ Download", &self.clip.video_url);
                    });
                });
            });
        });

        preview
    }
}
