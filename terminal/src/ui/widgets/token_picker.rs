//! # Token Picker Widget
//!
//! Trigger button plus a searchable dropdown of catalog tokens, driven by a
//! [`TokenSelector`]. The only output is the `on_select` callback.

use egui::{Align2, Color32, Margin, RichText, Sense, Vec2};
use shared::dto::market::Token;
use shared::utils::format_price;

use crate::app::selector::{is_selected, Listing, Placement, TokenSelector, DROPDOWN_HEIGHT};
use crate::ui::theme::Theme;
use crate::ui::widgets::token_icon::render_token_icon;

/// Dropdown width in points
const DROPDOWN_WIDTH: f32 = 256.0;
/// Height of the scrollable token list (dropdown minus search box)
const LIST_HEIGHT: f32 = DROPDOWN_HEIGHT - 64.0;
/// Gap between trigger and dropdown
const DROPDOWN_GAP: f32 = 8.0;

/// Render the picker and report a picked token through `on_select`.
///
/// Returns the trigger button's response.
pub fn token_picker(
    ui: &mut egui::Ui,
    id_salt: impl std::hash::Hash,
    selector: &mut TokenSelector,
    tokens: &[Token],
    selected: Option<&Token>,
    mut on_select: impl FnMut(&Token),
) -> egui::Response {
    let theme = Theme::default();
    let id = ui.make_persistent_id(id_salt);

    let trigger = ui
        .horizontal(|ui| {
            if let Some(token) = selected {
                render_token_icon(ui, selector, token, 24.0, &theme);
            }
            let text = match selected {
                Some(token) => RichText::new(format!("{}  ▼", token.currency)).strong(),
                None => RichText::new("Select  ▼").color(theme.dim),
            };
            ui.add_enabled(
                !selector.is_disabled(),
                egui::Button::new(text).min_size(Vec2::new(140.0, 32.0)),
            )
        })
        .inner;

    if trigger.clicked() {
        #[allow(deprecated)]
        let screen = ui.ctx().screen_rect();
        selector.activate(screen.bottom() - trigger.rect.bottom());
    }

    if !selector.is_open() {
        return trigger;
    }

    let (pos, pivot) = match selector.placement() {
        Placement::Below => (trigger.rect.right_bottom() + Vec2::new(0.0, DROPDOWN_GAP), Align2::RIGHT_TOP),
        Placement::Above => (trigger.rect.right_top() - Vec2::new(0.0, DROPDOWN_GAP), Align2::RIGHT_BOTTOM),
    };

    let dropdown = egui::Area::new(id.with("dropdown"))
        .order(egui::Order::Foreground)
        .fixed_pos(pos)
        .pivot(pivot)
        .show(ui.ctx(), |ui| {
            egui::Frame::popup(ui.style())
                .fill(theme.popup_fill)
                .show(ui, |ui| {
                    ui.set_width(DROPDOWN_WIDTH);
                    render_dropdown(ui, selector, tokens, selected, &theme)
                })
                .inner
        });

    if let Some(token) = dropdown.inner {
        selector.pick(&token, |t| on_select(t));
        return trigger;
    }

    let pressed_at = ui
        .ctx()
        .input(|i| if i.pointer.any_pressed() { i.pointer.interact_pos() } else { None });
    if let Some(pos) = pressed_at {
        if !dropdown.response.rect.contains(pos) && !trigger.rect.contains(pos) {
            selector.click_outside();
        }
    }

    trigger
}

/// Search box and token list. Returns the token clicked this frame.
fn render_dropdown(
    ui: &mut egui::Ui,
    selector: &mut TokenSelector,
    tokens: &[Token],
    selected: Option<&Token>,
    theme: &Theme,
) -> Option<Token> {
    let mut search = selector.search().to_string();
    let edit = ui.add(
        egui::TextEdit::singleline(&mut search)
            .hint_text("Search tokens...")
            .desired_width(f32::INFINITY),
    );
    if edit.changed() {
        selector.set_search(search);
    }
    ui.separator();

    let mut picked = None;
    egui::ScrollArea::vertical()
        .max_height(LIST_HEIGHT)
        .show(ui, |ui| match selector.listing(tokens) {
            Listing::NoResults => {
                ui.add_space(16.0);
                ui.vertical_centered(|ui| {
                    ui.colored_label(theme.dim, "No tokens found");
                });
                ui.add_space(16.0);
            }
            Listing::Tokens(list) => {
                for token in list {
                    if render_row(ui, selector, token, is_selected(token, selected), theme) {
                        picked = Some(token.clone());
                    }
                }
            }
        });

    picked
}

/// One token row. Returns true when clicked.
fn render_row(
    ui: &mut egui::Ui,
    selector: &mut TokenSelector,
    token: &Token,
    selected: bool,
    theme: &Theme,
) -> bool {
    let fill = if selected { theme.selected_fill } else { Color32::TRANSPARENT };

    let frame = egui::Frame::new()
        .fill(fill)
        .inner_margin(Margin::symmetric(8, 6))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                render_token_icon(ui, selector, token, 36.0, theme);
                ui.vertical(|ui| {
                    ui.strong(&token.currency);
                    ui.colored_label(theme.dim, format!("${}", format_price(token.price)));
                });
                if selected {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.colored_label(theme.selected, "✔");
                    });
                }
            });
        });

    let row = ui.interact(
        frame.response.rect,
        ui.id().with(("token_row", &token.currency)),
        Sense::click(),
    );
    row.clicked()
}
