//! # Swap Screen
//!
//! "You pay" / "You receive" form with a token picker on each side.
//! Rendering never mutates the store directly; user intents come back as
//! [`UiAction`]s and are executed by the caller once the state lock is
//! released.

use egui::{RichText, Vec2};
use shared::dto::market::Token;
use shared::utils::format_price;

use crate::app::{quote_output, AppState, SwapStatus, TokenPickerTarget};
use crate::store::FetchStatus;
use crate::ui::theme::Theme;
use crate::ui::widgets::token_picker::token_picker;
use crate::utils::validation::parse_amount;

/// User intents collected during a frame
#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    /// Re-fetch exchange rates
    Refresh,
    /// A picker reported a token
    Select(Token, TokenPickerTarget),
    /// Exchange input and output tokens
    Flip,
    /// Run the swap
    Execute,
}

/// Render the swap form
pub fn render(ui: &mut egui::Ui, state: &mut AppState, theme: &Theme) -> Vec<UiAction> {
    let mut actions = Vec::new();
    let tokens = state.tokens();

    render_header(ui, state, theme, &mut actions);
    ui.add_space(12.0);

    let no_tokens = tokens.is_empty();
    state.swap.input_picker.set_disabled(no_tokens);
    state.swap.output_picker.set_disabled(no_tokens);

    // ===== You pay =====
    ui.label(RichText::new("You pay").color(theme.dim));
    ui.horizontal(|ui| {
        ui.add(
            egui::TextEdit::singleline(&mut state.swap.amount)
                .hint_text("0.0")
                .desired_width(160.0),
        );
        token_picker(
            ui,
            "input_picker",
            &mut state.swap.input_picker,
            &tokens,
            state.swap.input_token.as_ref(),
            |t| actions.push(UiAction::Select(t.clone(), TokenPickerTarget::Input)),
        );
    });
    if let Some(input) = &state.swap.input_token {
        let balance = state.store.balance(&input.currency);
        ui.horizontal(|ui| {
            ui.colored_label(theme.dim, format!("Balance: {}", format_price(balance)));
            if ui.small_button("Max").clicked() {
                state.swap.amount = balance.to_string();
            }
        });
    }

    ui.add_space(6.0);
    if ui.button("⇅").on_hover_text("Flip tokens").clicked() {
        actions.push(UiAction::Flip);
    }
    ui.add_space(6.0);

    // ===== You receive =====
    ui.label(RichText::new("You receive").color(theme.dim));
    let quoted = match (&state.swap.input_token, &state.swap.output_token) {
        (Some(input), Some(output)) => parse_amount(&state.swap.amount)
            .and_then(|amount| quote_output(&state.store, &input.currency, &output.currency, amount)),
        _ => None,
    };
    ui.horizontal(|ui| {
        let shown = quoted.map(format_price).unwrap_or_else(|| "0.0".to_string());
        ui.add_sized(Vec2::new(160.0, 24.0), egui::Label::new(RichText::new(shown).monospace()));
        token_picker(
            ui,
            "output_picker",
            &mut state.swap.output_picker,
            &tokens,
            state.swap.output_token.as_ref(),
            |t| actions.push(UiAction::Select(t.clone(), TokenPickerTarget::Output)),
        );
    });
    if let Some(output) = &state.swap.output_token {
        let balance = state.store.balance(&output.currency);
        ui.colored_label(theme.dim, format!("Balance: {}", format_price(balance)));
    }

    if let (Some(input), Some(output)) = (&state.swap.input_token, &state.swap.output_token) {
        if let Some(rate) = quote_output(&state.store, &input.currency, &output.currency, 1.0) {
            ui.add_space(6.0);
            ui.colored_label(
                theme.dim,
                format!("1 {} = {} {}", input.currency, format_price(rate), output.currency),
            );
        }
    }

    ui.add_space(12.0);
    let ready = state.swap.input_token.is_some() && state.swap.output_token.is_some();
    if ui
        .add_enabled(ready, egui::Button::new("Swap").min_size(Vec2::new(300.0, 36.0)))
        .clicked()
    {
        actions.push(UiAction::Execute);
    }

    match &state.swap.status {
        Some(SwapStatus::Completed(receipt)) => {
            ui.colored_label(
                theme.success,
                format!(
                    "Swapped {} {} for {} {}",
                    format_price(receipt.input_amount),
                    receipt.input_currency,
                    format_price(receipt.output_amount),
                    receipt.output_currency
                ),
            );
        }
        Some(SwapStatus::Rejected(reason)) => {
            ui.colored_label(theme.error, reason);
        }
        None => {}
    }

    actions
}

/// Title, fetch status and refresh button
fn render_header(ui: &mut egui::Ui, state: &AppState, theme: &Theme, actions: &mut Vec<UiAction>) {
    ui.horizontal(|ui| {
        ui.heading("Swap");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let loading = state.store.is_loading();
            if ui.add_enabled(!loading, egui::Button::new("⟳ Refresh")).clicked() {
                actions.push(UiAction::Refresh);
            }
            if loading {
                ui.spinner();
            }
        });
    });

    match state.store.status() {
        FetchStatus::Error => {
            if let Some(error) = state.store.error() {
                ui.colored_label(theme.error, error);
            }
        }
        FetchStatus::Idle | FetchStatus::Loading if state.store.rates().is_empty() => {
            ui.colored_label(theme.dim, "Loading prices...");
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::service::PriceFeed;
    use crate::store::rate_store::tests::rate;
    use crate::store::{default_icon_table, RateStore};
    use async_trait::async_trait;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use shared::dto::market::ExchangeRate;
    use std::sync::Arc;

    struct OfflineFeed;

    #[async_trait]
    impl PriceFeed for OfflineFeed {
        async fn fetch_exchange_rates(&self) -> std::result::Result<Vec<ExchangeRate>, String> {
            Err("offline".to_string())
        }
    }

    fn state() -> AppState {
        let store = RateStore::with_parts(default_icon_table(), StdRng::seed_from_u64(3));
        AppState::new(store, Arc::new(OfflineFeed))
    }

    fn run_frame(state: &mut AppState) -> Vec<UiAction> {
        let ctx = egui::Context::default();
        let mut actions = Vec::new();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                actions = render(ui, state, &Theme::default());
            });
        });
        actions
    }

    #[test]
    fn test_pickers_disabled_without_catalog() {
        let mut state = state();
        let actions = run_frame(&mut state);

        assert!(actions.is_empty());
        assert!(state.swap.input_picker.is_disabled());
        assert!(state.swap.output_picker.is_disabled());
    }

    #[test]
    fn test_pickers_enabled_once_rates_arrive() {
        let mut state = state();
        run_frame(&mut state);
        state
            .store
            .apply_fetch(Ok(vec![rate("ETH", 0, 1645.0), rate("USDC", 0, 1.0)]))
            .unwrap();

        let actions = run_frame(&mut state);

        assert!(actions.is_empty());
        assert!(!state.swap.input_picker.is_disabled());
        assert!(!state.swap.output_picker.is_disabled());
        assert!(!state.swap.input_picker.is_open());
    }
}
