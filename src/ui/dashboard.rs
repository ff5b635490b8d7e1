//! Dashboard section
//!
//! Upload card and stepper on the left, pipeline status with the waveform on
//! the right, clip suggestions underneath.

use crate::ui::components::{ClipCard, StatusStepper, UploadCard, WaveformView};
use crate::ui::state::DashboardState;
use crate::ui::theme::Theme;
use egui::{self, RichText};

pub struct DashboardSection<'a> {
    state: &'a mut DashboardState,
    theme: &'a Theme,
    waveform: &'a mut WaveformView,
}

impl<'a> DashboardSection<'a> {
    pub fn new(state: &'a mut DashboardState, theme: &'a Theme, waveform: &'a mut WaveformView) -> Self {
        Self {
            state,
            theme,
            waveform,
        }
    }

    pub fn show(self, ui: &mut egui::Ui) -> egui::Response {
        let Self {
            state,
            theme,
            waveform,
        } = self;

        ui.vertical(|ui| {
            ui.heading(RichText::new("Dashboard").color(theme.text_primary));
            ui.label(
                RichText::new(
                    "Upload to see the calm pipeline in action. We'll keep you updated from ingest to final clips.",
                )
                .color(theme.text_secondary),
            );
            ui.add_space(theme.spacing_lg);

            theme.glass_frame().show(ui, |ui| {
                ui.columns(2, |columns| {
                    UploadCard::new(state, theme).show(&mut columns[0]);
                    columns[0].add_space(theme.spacing_lg);
                    StatusStepper::new(state.current_step(), theme).show(&mut columns[0]);

                    show_pipeline_panel(&mut columns[1], state, theme, waveform);
                });
            });

            ui.add_space(theme.spacing_lg);
            show_clip_grid(ui, state, theme);
        })
        .response
    }
}

fn show_pipeline_panel(
    ui: &mut egui::Ui,
    state: &DashboardState,
    theme: &Theme,
    waveform: &mut WaveformView,
) {
    theme.glass_frame().show(ui, |ui| {
        ui.label(
            RichText::new("PIPELINE")
                .size(12.0)
                .color(theme.accent),
        );
        ui.add_space(theme.spacing_sm);
        ui.label(
            RichText::new(state.status_text())
                .size(14.0)
                .color(theme.text_secondary),
        );
        if let Some(warning) = state.poll_warning() {
            ui.label(RichText::new(warning).size(12.0).color(theme.text_muted));
        }
        if let Some(error) = &state.last_error {
            ui.label(RichText::new(error).size(12.0).color(theme.error));
        }
        ui.add_space(theme.spacing_lg);
        waveform.show(ui, 96.0, theme);
    });
}

fn show_clip_grid(ui: &mut egui::Ui, state: &mut DashboardState, theme: &Theme) {
    ui.horizontal(|ui| {
        ui.label(
            RichText::new("Clip suggestions")
                .size(20.0)
                .strong()
                .color(theme.text_primary),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                RichText::new(state.grid_caption().to_uppercase())
                    .size(11.0)
                    .color(theme.text_muted),
            );
        });
    });
    ui.add_space(theme.spacing);

    let mut opened = None;
    for row in state.clips().chunks(3) {
        ui.columns(3, |columns| {
            for (column, clip) in columns.iter_mut().zip(row) {
                if ClipCard::new(clip, theme).show(column) {
                    opened = Some(clip.clone());
                }
            }
        });
        ui.add_space(theme.spacing);
    }

    if let Some(clip) = opened {
        state.open_clip(clip);
    }
}
