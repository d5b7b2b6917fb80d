//! # GUI Rendering
//!
//! Frame entry point for the swap window. The state lock is held while the
//! screen renders; the collected [`UiAction`]s are dispatched once it is
//! released.

pub mod screens;
pub mod theme;
pub mod widgets;

pub use screens::swap::UiAction;

use crate::app::App;
use theme::Theme;

/// Width of the centered swap card
const CARD_WIDTH: f32 = 360.0;

/// Main render function - called every frame by eframe
pub fn render(ctx: &egui::Context, app: &mut App) {
    let theme = Theme::default();

    let actions = egui::CentralPanel::default()
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.set_max_width(CARD_WIDTH);
                ui.add_space(24.0);
                egui::Frame::group(ui.style())
                    .inner_margin(egui::Margin::same(16))
                    .show(ui, |ui| {
                        let mut state = app.state.write();
                        screens::swap::render(ui, &mut state, &theme)
                    })
                    .inner
            })
            .inner
        })
        .inner;

    for action in actions {
        dispatch(app, action);
    }
}

/// Execute one user action against the app
pub fn dispatch(app: &mut App, action: UiAction) {
    match action {
        UiAction::Refresh => app.fetch_rates(),
        UiAction::Select(token, target) => app.handle_token_select(token, target),
        UiAction::Flip => app.handle_flip_click(),
        UiAction::Execute => {
            if let Err(e) = app.handle_swap_execute_click() {
                tracing::info!(error = %e, "Swap rejected");
            }
        }
    }
}
