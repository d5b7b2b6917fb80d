//! # Swap Handlers
//!
//! Handlers for the swap form: token selection, quoting and execution against
//! the simulated wallet.

use shared::dto::market::Token;

use crate::app::state::{AppState, SwapReceipt, SwapStatus, TokenPickerTarget};
use crate::core::error::{AppError, Result};
use crate::store::RateStore;
use crate::utils::validation::{parse_amount, validate_amount, validate_pair};

/// Handle token selection from a picker.
///
/// Choosing the token already held by the other side swaps the two sides.
pub(crate) fn handle_token_select(state: &mut AppState, token: Token, target: TokenPickerTarget) {
    let swap = &mut state.swap;
    let other = target.other();

    if swap.token(other).is_some_and(|t| t.currency == token.currency) {
        let previous = swap.token_mut(target).take();
        *swap.token_mut(other) = previous;
    }

    tracing::debug!(currency = %token.currency, target = ?target, "Token selected");
    *swap.token_mut(target) = Some(token);
    swap.status = None;
}

/// Exchange the input and output tokens.
pub(crate) fn flip_tokens(state: &mut AppState) {
    let swap = &mut state.swap;
    std::mem::swap(&mut swap.input_token, &mut swap.output_token);
    swap.status = None;
}

/// Output amount for selling `amount` of `input` for `output` at stored prices.
///
/// `None` when the output token has no price.
pub fn quote_output(store: &RateStore, input: &str, output: &str, amount: f64) -> Option<f64> {
    let output_price = store.price(output);
    if output_price <= 0.0 {
        return None;
    }
    Some(amount * store.price(input) / output_price)
}

/// Validate the form and move balances.
///
/// The input balance is deducted (clamped at zero) and the quoted output is
/// credited. Nothing changes when validation fails.
pub(crate) fn execute_swap(state: &mut AppState) -> Result<SwapReceipt> {
    let result = try_execute_swap(state);

    state.swap.status = Some(match &result {
        Ok(receipt) => {
            state.swap.amount.clear();
            SwapStatus::Completed(receipt.clone())
        }
        Err(e) => SwapStatus::Rejected(e.to_string()),
    });

    result
}

fn try_execute_swap(state: &mut AppState) -> Result<SwapReceipt> {
    let input = state.swap.input_token.as_ref().map(|t| t.currency.clone());
    let output = state.swap.output_token.as_ref().map(|t| t.currency.clone());

    let pair = validate_pair(input.as_deref(), output.as_deref());
    if let Some(error) = pair.error {
        return Err(AppError::Validation(error));
    }
    let (input, output) = match (input, output) {
        (Some(input), Some(output)) => (input, output),
        _ => return Err(AppError::Validation("Select both tokens".to_string())),
    };

    let balance = state.store.balance(&input);
    let checked = validate_amount(&state.swap.amount, balance);
    if let Some(error) = checked.error {
        return Err(AppError::Validation(error));
    }
    let amount = parse_amount(&state.swap.amount)
        .ok_or_else(|| AppError::Validation("Amount must be a number".to_string()))?;

    let received = quote_output(&state.store, &input, &output, amount)
        .ok_or_else(|| AppError::Validation(format!("No price available for {}", output)))?;

    state.store.deduct_balance(&input, amount);
    state.store.add_balance(&output, received);

    tracing::info!(
        input = %input,
        output = %output,
        amount = amount,
        received = received,
        "Swap executed"
    );

    Ok(SwapReceipt {
        input_currency: input,
        input_amount: amount,
        output_currency: output,
        output_amount: received,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::service::PriceFeed;
    use crate::store::default_icon_table;
    use crate::store::rate_store::tests::rate;
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
        let mut store = RateStore::with_parts(default_icon_table(), StdRng::seed_from_u64(3));
        store
            .apply_fetch(Ok(vec![rate("ETH", 0, 2000.0), rate("USDC", 0, 1.0)]))
            .unwrap();
        AppState::new(store, Arc::new(OfflineFeed))
    }

    fn token(state: &mut AppState, currency: &str) -> Token {
        state
            .tokens()
            .into_iter()
            .find(|t| t.currency == currency)
            .unwrap()
    }

    #[test]
    fn test_select_sets_side() {
        let mut state = state();
        let eth = token(&mut state, "ETH");
        handle_token_select(&mut state, eth, TokenPickerTarget::Input);

        assert_eq!(state.swap.input_token.as_ref().unwrap().currency, "ETH");
        assert!(state.swap.output_token.is_none());
    }

    #[test]
    fn test_select_other_side_token_swaps_sides() {
        let mut state = state();
        let eth = token(&mut state, "ETH");
        let usdc = token(&mut state, "USDC");
        handle_token_select(&mut state, eth.clone(), TokenPickerTarget::Input);
        handle_token_select(&mut state, usdc, TokenPickerTarget::Output);

        handle_token_select(&mut state, eth, TokenPickerTarget::Output);

        assert_eq!(state.swap.input_token.as_ref().unwrap().currency, "USDC");
        assert_eq!(state.swap.output_token.as_ref().unwrap().currency, "ETH");
    }

    #[test]
    fn test_flip_tokens() {
        let mut state = state();
        let eth = token(&mut state, "ETH");
        handle_token_select(&mut state, eth, TokenPickerTarget::Input);
        flip_tokens(&mut state);

        assert!(state.swap.input_token.is_none());
        assert_eq!(state.swap.output_token.as_ref().unwrap().currency, "ETH");
    }

    #[test]
    fn test_quote_output() {
        let state = state();
        assert_eq!(quote_output(&state.store, "ETH", "USDC", 0.25), Some(500.0));
        assert_eq!(quote_output(&state.store, "ETH", "DOGE", 0.25), None);
    }

    #[test]
    fn test_execute_swap_moves_balances() {
        let mut state = state();
        let eth = token(&mut state, "ETH");
        let usdc = token(&mut state, "USDC");
        handle_token_select(&mut state, eth, TokenPickerTarget::Input);
        handle_token_select(&mut state, usdc, TokenPickerTarget::Output);
        state.swap.amount = "0.25".to_string();

        let receipt = execute_swap(&mut state).unwrap();

        assert_eq!(receipt.output_amount, 500.0);
        assert_eq!(state.store.balance("ETH"), 0.25);
        assert_eq!(state.store.balance("USDC"), 5500.0);
        assert!(state.swap.amount.is_empty());
        assert_eq!(state.swap.status, Some(SwapStatus::Completed(receipt)));
    }

    #[test]
    fn test_execute_swap_rejects_overdraw() {
        let mut state = state();
        let eth = token(&mut state, "ETH");
        let usdc = token(&mut state, "USDC");
        handle_token_select(&mut state, eth, TokenPickerTarget::Input);
        handle_token_select(&mut state, usdc, TokenPickerTarget::Output);
        state.swap.amount = "3".to_string();

        let err = execute_swap(&mut state).unwrap_err();

        assert_eq!(err, AppError::Validation("Insufficient balance".to_string()));
        assert_eq!(state.store.balance("ETH"), 0.5);
        assert_eq!(state.store.balance("USDC"), 5000.0);
        assert_eq!(state.swap.amount, "3");
        assert!(matches!(state.swap.status, Some(SwapStatus::Rejected(_))));
    }

    #[test]
    fn test_execute_swap_requires_both_tokens() {
        let mut state = state();
        state.swap.amount = "1".to_string();
        let err = execute_swap(&mut state).unwrap_err();
        assert_eq!(err, AppError::Validation("Select a token to sell".to_string()));
    }
}
