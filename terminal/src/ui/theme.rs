//! # GUI Theme
//!
//! Dark slate palette with violet accents for the swap window.

use egui::{Color32, Context, Stroke, Visuals};

/// Application theme
#[derive(Debug, Clone)]
pub struct Theme {
    /// Normal text color
    pub normal: Color32,
    /// Dimmed/secondary text
    pub dim: Color32,
    /// Selected/highlighted items
    pub selected: Color32,
    /// Background of the selected row in the token list
    pub selected_fill: Color32,
    /// Border color
    pub border: Color32,
    /// Dropdown background
    pub popup_fill: Color32,
    /// Success (completed swap)
    pub success: Color32,
    /// Error (failed fetch, rejected swap)
    pub error: Color32,
    /// Fallback badge gradient, top-left to bottom-right
    pub badge_gradient: (Color32, Color32),
    /// Background color
    pub background: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            normal: Color32::from_rgb(255, 255, 255),
            dim: Color32::from_rgb(150, 150, 160),
            selected: Color32::from_rgb(167, 139, 250), // violet-400
            selected_fill: Color32::from_rgba_unmultiplied(139, 92, 246, 51), // violet-500 @ 20%
            border: Color32::from_rgb(51, 51, 64),
            popup_fill: Color32::from_rgb(15, 23, 42), // slate-900
            success: Color32::from_rgb(52, 211, 153),
            error: Color32::from_rgb(248, 113, 113),
            badge_gradient: (
                Color32::from_rgb(139, 92, 246), // violet-500
                Color32::from_rgb(217, 70, 239), // fuchsia-500
            ),
            background: Color32::from_rgb(2, 6, 23),
        }
    }
}

impl Theme {
    /// Linear blend between the two badge gradient stops.
    pub fn badge_color(&self, t: f32) -> Color32 {
        let (a, b) = self.badge_gradient;
        let t = t.clamp(0.0, 1.0);
        let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
        Color32::from_rgb(mix(a.r(), b.r()), mix(a.g(), b.g()), mix(a.b(), b.b()))
    }

    /// egui visuals for the swap window
    pub fn visuals(&self) -> Visuals {
        let mut visuals = Visuals::dark();

        visuals.override_text_color = Some(self.normal);
        visuals.panel_fill = self.background;
        visuals.window_fill = self.popup_fill;
        visuals.window_stroke = Stroke::new(1.0, self.border);
        visuals.extreme_bg_color = self.popup_fill;

        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, self.border);
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, self.selected);
        visuals.selection.bg_fill = self.selected_fill;
        visuals.selection.stroke = Stroke::new(1.0, self.selected);

        visuals
    }

    /// Apply the theme to an egui context
    pub fn apply(&self, ctx: &Context) {
        ctx.set_visuals(self.visuals());
    }
}
