//! Waveform visualization component
//!
//! Binds the host-independent [`WaveformAnimator`] to egui: frame requests
//! become repaint requests, and the canvas is the widget's painter.

use crate::animation::{Canvas, FrameClock, FrameHandle, Rgb, Surface, WaveformAnimator, WaveformConfig};
use crate::ui::theme::Theme;
use egui::{self, Color32, Pos2, Rect, Rounding, Shape, Stroke, Vec2};

/// Frame clock backed by `egui::Context::request_repaint`.
///
/// A requested frame becomes due on the next pass through the UI.
pub struct EguiFrameClock {
    ctx: egui::Context,
    next_id: u64,
    pending: Option<FrameHandle>,
}

impl EguiFrameClock {
    pub fn new(ctx: egui::Context) -> Self {
        Self {
            ctx,
            next_id: 0,
            pending: None,
        }
    }

    /// Number of frame requests not yet served or cancelled
    pub fn outstanding(&self) -> usize {
        usize::from(self.pending.is_some())
    }
}

impl FrameClock for EguiFrameClock {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.pending = Some(handle);
        self.ctx.request_repaint();
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
        }
    }

    fn take_due(&mut self) -> Option<FrameHandle> {
        self.pending.take()
    }
}

struct PainterCanvas<'a> {
    painter: &'a egui::Painter,
    rect: Rect,
    background: Color32,
    rounding: Rounding,
}

impl Canvas for PainterCanvas<'_> {
    fn clear(&mut self) {
        self.painter.rect_filled(self.rect, self.rounding, self.background);
    }

    fn stroke_polyline(&mut self, points: &[(f32, f32)], width: f32, color: Rgb) {
        let origin = self.rect.min;
        let points: Vec<Pos2> = points
            .iter()
            .map(|&(x, y)| origin + Vec2::new(x, y))
            .collect();
        self.painter
            .add(Shape::line(points, Stroke::new(width, Theme::rgb(color))));
    }
}

/// Animated decorative sine wave.
///
/// Keep one instance alive for as long as the widget is on screen; the
/// animator starts on the first `show` and stops on `deactivate` or drop.
pub struct WaveformView {
    config: WaveformConfig,
    animator: Option<WaveformAnimator<EguiFrameClock>>,
}

impl WaveformView {
    pub fn new(config: WaveformConfig) -> Self {
        Self {
            config,
            animator: None,
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui, height: f32, theme: &Theme) -> egui::Response {
        let desired_size = Vec2::new(ui.available_width(), height);
        let (rect, response) = ui.allocate_exact_size(desired_size, egui::Sense::hover());
        response.widget_info(|| {
            egui::WidgetInfo::labeled(egui::WidgetType::Other, true, "Waveform animation")
        });

        let config = self.config;
        let animator = self
            .animator
            .get_or_insert_with(|| WaveformAnimator::new(config, EguiFrameClock::new(ui.ctx().clone())));

        let surface = Surface::new(rect.width(), rect.height(), ui.ctx().pixels_per_point());
        if animator.is_active() {
            animator.resize(surface);
        } else {
            animator.activate(surface);
        }

        let painter = ui.painter_at(rect);
        let mut canvas = PainterCanvas {
            painter: &painter,
            rect,
            background: Color32::from_black_alpha(100),
            rounding: theme.tile_rounding,
        };
        animator.frame(&mut canvas);

        response
    }

    /// Stop animating and release the pending repaint request
    pub fn deactivate(&mut self) {
        if let Some(animator) = self.animator.as_mut() {
            animator.deactivate();
        }
    }

    pub fn is_active(&self) -> bool {
        self.animator.as_ref().is_some_and(|a| a.is_active())
    }

    /// Outstanding frame requests held by this view
    pub fn outstanding_frames(&self) -> usize {
        self.animator
            .as_ref()
            .map_or(0, |a| a.clock().outstanding())
    }
}
