use std::time::Duration;

use roundel_engine::paint::Color;

use crate::clipboard::NOTICE_DURATION;
use crate::radii::BorderRadius;

/// Colors used by the editor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub container_fill: Color,
    pub container_border: Color,
    pub shape_fill: Color,
    pub handle_fill: Color,
    pub handle_border: Color,
    pub handle_active: Color,
    pub button_fill: Color,
    pub button_hover: Color,
    /// Copy button while the acknowledgment is visible.
    pub button_copied: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::from_straight(0.07, 0.07, 0.09, 1.0),
            container_fill: Color::from_straight(0.11, 0.12, 0.15, 1.0),
            container_border: Color::from_straight(0.25, 0.27, 0.33, 1.0),
            shape_fill: Color::from_straight(0.36, 0.42, 0.96, 1.0),
            handle_fill: Color::from_straight(1.0, 1.0, 1.0, 1.0),
            handle_border: Color::from_straight(0.4, 0.6, 0.9, 1.0),
            handle_active: Color::from_straight(1.0, 0.78, 0.25, 1.0),
            button_fill: Color::from_straight(0.2, 0.22, 0.28, 1.0),
            button_hover: Color::from_straight(0.28, 0.31, 0.39, 1.0),
            button_copied: Color::from_straight(0.22, 0.62, 0.4, 1.0),
        }
    }
}

/// Editor settings.
///
/// ```rust,ignore
/// EditorConfig::new()
///     .notice_duration(Duration::from_secs(3))
///     .container_fraction(0.6)
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EditorConfig {
    /// Shape the editor starts with.
    pub initial: BorderRadius,
    /// How long the copy acknowledgment stays visible.
    pub notice_duration: Duration,
    /// Container side as a fraction of the smaller window dimension.
    pub container_fraction: f32,
    /// Handle radius in logical pixels.
    pub handle_radius: f32,
    pub palette: Palette,
}

impl EditorConfig {
    pub fn new() -> Self {
        Self {
            initial: BorderRadius::default(),
            notice_duration: NOTICE_DURATION,
            container_fraction: 0.62,
            handle_radius: 9.0,
            palette: Palette::default(),
        }
    }

    pub fn initial(mut self, v: BorderRadius) -> Self { self.initial = v; self }
    pub fn notice_duration(mut self, v: Duration) -> Self { self.notice_duration = v; self }
    pub fn container_fraction(mut self, v: f32) -> Self {
        self.container_fraction = v.clamp(0.1, 0.9);
        self
    }
    pub fn handle_radius(mut self, v: f32) -> Self { self.handle_radius = v.max(1.0); self }
    pub fn palette(mut self, v: Palette) -> Self { self.palette = v; self }
}

impl Default for EditorConfig { fn default() -> Self { Self::new() } }
