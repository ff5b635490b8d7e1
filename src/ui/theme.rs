//! Theme and styling for the Clipper UI

use crate::animation::Rgb;
use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Vec2, Visuals};

/// Application theme configuration
#[derive(Clone, Debug)]
pub struct Theme {
    /// Brand colours
    pub primary: Color32,
    pub secondary: Color32,
    pub accent: Color32,
    /// Error color (red)
    pub error: Color32,

    /// Background colors
    pub bg_page: Color32,
    pub bg_glass: Color32,
    pub bg_tile: Color32,
    pub bg_footer: Color32,
    pub border: Color32,

    /// Text colors
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_muted: Color32,

    pub button_rounding: Rounding,
    pub card_rounding: Rounding,
    pub tile_rounding: Rounding,

    pub spacing: f32,
    pub spacing_lg: f32,
    pub spacing_sm: f32,
    /// Gap between page sections
    pub section_gap: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// The only theme the product ships
    pub fn dark() -> Self {
        Self {
            primary: Color32::from_rgb(0x6d, 0x5d, 0xfc),
            secondary: Color32::from_rgb(0x9d, 0x4d, 0xff),
            accent: Color32::from_rgb(0x5c, 0xe1, 0xe6),
            error: Color32::from_rgb(248, 113, 113),

            bg_page: Color32::from_rgb(0x0b, 0x0c, 0x10),
            bg_glass: Color32::from_rgb(20, 21, 28),
            bg_tile: Color32::from_rgb(28, 29, 38),
            bg_footer: Color32::from_rgb(0x05, 0x05, 0x07),
            border: Color32::from_rgb(38, 39, 48),

            text_primary: Color32::from_rgb(241, 245, 249),
            text_secondary: Color32::from_rgb(203, 213, 225),
            text_muted: Color32::from_rgb(148, 163, 184),

            button_rounding: Rounding::same(18.0),
            card_rounding: Rounding::same(24.0),
            tile_rounding: Rounding::same(16.0),

            spacing: 16.0,
            spacing_lg: 24.0,
            spacing_sm: 8.0,
            section_gap: 64.0,
        }
    }

    pub fn rgb(color: Rgb) -> Color32 {
        Color32::from_rgb(color.0, color.1, color.2)
    }

    /// The translucent card frame used across the page
    pub fn glass_frame(&self) -> egui::Frame {
        egui::Frame::none()
            .fill(self.bg_glass)
            .stroke(Stroke::new(1.0, self.border))
            .rounding(self.card_rounding)
            .inner_margin(self.spacing_lg)
    }

    /// Apply this theme to egui
    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = Visuals::dark();

        visuals.panel_fill = self.bg_page;
        visuals.window_fill = Color32::from_rgb(0x11, 0x11, 0x11);
        visuals.extreme_bg_color = self.bg_tile;

        visuals.widgets.noninteractive.bg_fill = self.bg_glass;
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.text_muted);

        visuals.widgets.inactive.bg_fill = self.bg_tile;
        visuals.widgets.inactive.weak_bg_fill = self.bg_tile;
        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, self.border);
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, self.text_primary);
        visuals.widgets.inactive.rounding = self.button_rounding;

        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, self.primary);
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, self.text_primary);
        visuals.widgets.hovered.rounding = self.button_rounding;

        visuals.widgets.active.bg_fill = self.primary;
        visuals.widgets.active.fg_stroke = Stroke::new(1.0, self.text_primary);
        visuals.widgets.active.rounding = self.button_rounding;

        visuals.selection.bg_fill = self.primary.gamma_multiply(0.3);
        visuals.selection.stroke = Stroke::new(1.0, self.primary);

        visuals.hyperlink_color = self.accent;

        visuals.window_rounding = self.card_rounding;
        visuals.window_stroke = Stroke::new(1.0, self.border);

        ctx.set_visuals(visuals);

        let mut style = (*ctx.style()).clone();
        style.spacing.item_spacing = Vec2::splat(self.spacing_sm);
        style.spacing.window_margin = egui::Margin::same(self.spacing_lg);
        style.spacing.button_padding = Vec2::new(self.spacing, self.spacing_sm);

        style.text_styles.insert(
            egui::TextStyle::Heading,
            FontId::new(30.0, FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            FontId::new(14.0, FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            FontId::new(14.0, FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Small,
            FontId::new(12.0, FontFamily::Proportional),
        );

        ctx.set_style(style);
    }
}
