//! Status stepper component

use crate::api::ProjectStatus;
use crate::progress::{step_states, StepState};
use crate::ui::theme::Theme;
use egui::{self, RichText, Stroke};

pub struct StatusStepper<'a> {
    current: ProjectStatus,
    theme: &'a Theme,
}

impl<'a> StatusStepper<'a> {
    pub fn new(current: ProjectStatus, theme: &'a Theme) -> Self {
        Self { current, theme }
    }

    pub fn show(self, ui: &mut egui::Ui) {
        self.theme.glass_frame().inner_margin(20.0).show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                for (step, state) in step_states(self.current) {
                    let (fill, stroke, opacity) = match state {
                        StepState::Active => (self.theme.bg_tile, self.theme.primary, 1.0),
                        StepState::Completed => (self.theme.bg_glass, self.theme.border, 0.7),
                        StepState::Pending => (self.theme.bg_glass, self.theme.border, 1.0),
                    };

                    egui::Frame::none()
                        .fill(fill)
                        .stroke(Stroke::new(1.0, stroke))
                        .rounding(self.theme.tile_rounding)
                        .inner_margin(egui::Margin::symmetric(16.0, 12.0))
                        .multiply_with_opacity(opacity)
                        .show(ui, |ui| {
                            ui.set_min_width(140.0);
                            ui.vertical(|ui| {
                                let response = ui.label(
                                    RichText::new(step.label.to_uppercase())
                                        .size(11.0)
                                        .color(self.theme.text_muted),
                                );
                                let accessible = format!("{} step {}", step.label, state_name(state));
                                response.widget_info(|| {
                                    egui::WidgetInfo::labeled(
                                        egui::WidgetType::Label,
                                        true,
                                        &accessible,
                                    )
                                });
                                ui.label(
                                    RichText::new(step.description)
                                        .size(13.0)
                                        .color(self.theme.text_primary),
                                );
                            });
                        });
                }
            });

            if self.current == ProjectStatus::Error {
                ui.add_space(self.theme.spacing_sm);
                ui.label(RichText::new("Processing failed").color(self.theme.error));
            }
        });
    }
}

fn state_name(state: StepState) -> &'static str {
    match state {
        StepState::Completed => "completed",
        StepState::Active => "active",
        StepState::Pending => "pending",
    }
}
