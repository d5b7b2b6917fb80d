//! # Token Icon Widget
//!
//! Round token icon with a generated badge fallback.

use egui::{Align2, Color32, FontId, Sense, Vec2};
use shared::dto::market::Token;

use crate::app::selector::{fallback_badge, IconView, TokenSelector};
use crate::ui::theme::Theme;

/// Number of rings used to approximate the badge gradient
const BADGE_GRADIENT_STEPS: usize = 8;

/// Render `token`'s icon at `size` points.
///
/// The first failed load is recorded on `selector`; from then on this
/// selector draws the badge for that currency without touching the image
/// loader again.
pub fn render_token_icon(
    ui: &mut egui::Ui,
    selector: &mut TokenSelector,
    token: &Token,
    size: f32,
    theme: &Theme,
) -> egui::Response {
    if let IconView::Image(uri) = selector.icon_view(token) {
        let image = egui::Image::new(uri).fit_to_exact_size(Vec2::splat(size));
        match image.load_for_size(ui.ctx(), Vec2::splat(size)) {
            Ok(_) => return ui.add(image),
            Err(e) => {
                tracing::debug!(currency = %token.currency, error = %e, "Icon load error");
                selector.mark_icon_failed(&token.currency);
            }
        }
    }

    render_badge(ui, &fallback_badge(&token.currency), size, theme)
}

/// Circular badge: `text` over the theme's badge gradient.
pub fn render_badge(ui: &mut egui::Ui, text: &str, size: f32, theme: &Theme) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(Vec2::splat(size), Sense::hover());
    let painter = ui.painter();

    // Concentric rings from the outer stop inwards, offset toward the top-left
    let radius = size / 2.0;
    for step in 0..BADGE_GRADIENT_STEPS {
        let t = step as f32 / (BADGE_GRADIENT_STEPS - 1) as f32;
        let ring_radius = radius * (1.0 - 0.5 * t);
        let offset = Vec2::splat(-radius * 0.3 * t);
        painter.circle_filled(rect.center() + offset, ring_radius, theme.badge_color(1.0 - t));
    }

    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        text,
        FontId::proportional(size * 0.35),
        Color32::WHITE,
    );

    response
}
