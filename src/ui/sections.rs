//! Static marketing sections

use crate::ui::theme::Theme;
use chrono::Datelike;
use egui::{self, RichText, Stroke};

const HERO_TILES: [&str; 4] = [
    "Magic highlights",
    "Text-based editing",
    "Instant downloads",
    "Waveform intelligence",
];

struct Feature {
    title: &'static str,
    description: &'static str,
    metric: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        title: "Magic Highlights",
        description: "Clipper pinpoints the spikes in energy, the laugh-out-loud moments, and the quotable lines, packaging them into perfect social snippets.",
        metric: "3-5 clips",
    },
    Feature {
        title: "Text-first Editing",
        description: "Skim the transcript, tap to trim, regenerate with a prompt. No timeline anxiety, just words guiding the edit.",
        metric: "90% faster",
    },
    Feature {
        title: "Instant Downloads",
        description: "Export vertical, square, or wide. Captions burned in. Ready for TikTok, Reels, YouTube, and your newsletter.",
        metric: "Multi-format",
    },
];

const LOGOS: [&str; 6] = [
    "The Verge",
    "NPR",
    "The New York Times",
    "Morning Brew",
    "HubSpot Podcasts",
    "Shopify Studios",
];

const FOOTER_LINKS: [&str; 4] = ["Projects", "Exports", "Settings", "Privacy"];

/// Hero banner. Returns true when the call to action was clicked.
pub struct HeroSection<'a> {
    theme: &'a Theme,
}

impl<'a> HeroSection<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    pub fn show(self, ui: &mut egui::Ui) -> bool {
        let theme = self.theme;
        let mut get_started = false;

        ui.label(
            RichText::new("INTRODUCING CLIPPER.AI")
                .size(13.0)
                .color(theme.accent),
        );
        ui.label(
            RichText::new("Turn your podcast into viral clips. Instantly.")
                .size(44.0)
                .strong()
                .color(theme.text_primary),
        );
        ui.label(
            RichText::new(
                "Upload a full episode, grab coffee, and return to ready-to-share clips. No clutter, no busywork, just the moments that matter.",
            )
            .size(17.0)
            .color(theme.text_secondary),
        );
        ui.add_space(theme.spacing_lg);

        ui.horizontal(|ui| {
            let button = egui::Button::new(
                RichText::new("Upload a video → Watch it get clipped")
                    .size(16.0)
                    .strong()
                    .color(theme.text_primary),
            )
            .fill(theme.primary)
            .rounding(theme.button_rounding)
            .min_size(egui::vec2(320.0, 52.0));
            if ui.add(button).clicked() {
                get_started = true;
            }

            theme.glass_frame().inner_margin(18.0).show(ui, |ui| {
                ui.vertical(|ui| {
                    ui.label(RichText::new("LIVE STATUS").size(12.0).color(theme.text_muted));
                    ui.label(
                        RichText::new("Analyzing audio… detecting highlights…")
                            .color(theme.text_secondary),
                    );
                });
            });
        });
        ui.add_space(theme.spacing_lg);

        theme.glass_frame().inner_margin(32.0).show(ui, |ui| {
            ui.columns(2, |columns| {
                let left = &mut columns[0];
                left.label(RichText::new("HOW IT WORKS").size(13.0).color(theme.accent));
                left.label(
                    RichText::new("AI editing that stays out of your way.")
                        .size(24.0)
                        .strong()
                        .color(theme.text_primary),
                );
                left.label(
                    RichText::new(
                        "Clipper listens for peaks, cuts out filler, and returns cinematic clips with transcripts, scores, and instant downloads, all while keeping the interface clean and calm.",
                    )
                    .color(theme.text_secondary),
                );

                egui::Grid::new("hero_tiles")
                    .num_columns(2)
                    .spacing([theme.spacing, theme.spacing])
                    .show(&mut columns[1], |ui| {
                        for (i, tile) in HERO_TILES.iter().enumerate() {
                            tile_frame(theme).show(ui, |ui| {
                                ui.set_min_width(160.0);
                                ui.label(RichText::new(*tile).strong().color(theme.text_primary));
                                ui.label(
                                    RichText::new("Powered by Clipper's calm AI engine.")
                                        .size(11.0)
                                        .color(theme.text_muted),
                                );
                            });
                            if i % 2 == 1 {
                                ui.end_row();
                            }
                        }
                    });
            });
        });

        get_started
    }
}

pub struct FeaturesSection<'a> {
    theme: &'a Theme,
}

impl<'a> FeaturesSection<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    pub fn show(self, ui: &mut egui::Ui) {
        let theme = self.theme;
        ui.heading(RichText::new("The calmest way to cut a show.").color(theme.text_primary));
        ui.label(
            RichText::new(
                "Built for podcasters, streamers, and creators who want premium clips without drowning in timelines or noisy dashboards.",
            )
            .color(theme.text_secondary),
        );
        ui.add_space(theme.spacing_lg);

        ui.columns(FEATURES.len(), |columns| {
            for (column, feature) in columns.iter_mut().zip(FEATURES.iter()) {
                theme.glass_frame().show(column, |ui| {
                    ui.label(
                        RichText::new(feature.metric.to_uppercase())
                            .size(12.0)
                            .color(theme.accent),
                    );
                    ui.label(
                        RichText::new(feature.title)
                            .size(20.0)
                            .strong()
                            .color(theme.text_primary),
                    );
                    ui.label(RichText::new(feature.description).color(theme.text_secondary));
                });
            }
        });
    }
}

pub struct TrustedBySection<'a> {
    theme: &'a Theme,
}

impl<'a> TrustedBySection<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    pub fn show(self, ui: &mut egui::Ui) {
        let theme = self.theme;
        theme.glass_frame().inner_margin(40.0).show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new("TRUSTED BY TEAMS WHO SOUND GOOD")
                        .size(12.0)
                        .color(theme.text_muted),
                );
            });
            ui.add_space(theme.spacing_lg);
            ui.horizontal_wrapped(|ui| {
                for logo in LOGOS {
                    tile_frame(theme)
                        .inner_margin(egui::Margin::symmetric(16.0, 12.0))
                        .show(ui, |ui| {
                            ui.label(RichText::new(logo).strong().color(theme.text_secondary));
                        });
                }
            });
        });
    }
}

pub struct FooterSection<'a> {
    theme: &'a Theme,
}

impl<'a> FooterSection<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    pub fn show(self, ui: &mut egui::Ui) {
        let theme = self.theme;
        let year = chrono::Local::now().year();
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(format!("© {} Clipper.ai. Crafted for calm creators.", year))
                    .size(12.0)
                    .color(theme.text_muted),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                for link in FOOTER_LINKS.iter().rev() {
                    ui.label(RichText::new(*link).size(12.0).color(theme.text_muted));
                }
            });
        });
    }
}

fn tile_frame(theme: &Theme) -> egui::Frame {
    egui::Frame::none()
        .fill(theme.bg_tile)
        .stroke(Stroke::new(1.0, theme.border))
        .rounding(theme.tile_rounding)
        .inner_margin(16.0)
}
