//! # Token Selector State
//!
//! Headless state machine behind the token picker widget. Rendering lives in
//! [`crate::ui::widgets::token_picker`]; everything that decides what is shown
//! and when a selection is reported lives here.
//!
//! ```text
//! Closed ──activate──▶ Open(search = "") ──type──▶ Open(search = s)
//!    ▲                        │                          │
//!    └──── pick / click outside / activate ──────────────┘
//! ```
//!
//! Activation is ignored while the selector is disabled. Each instance owns
//! its own search text, placement and icon failure set.

use std::collections::HashSet;

use shared::dto::market::Token;

/// Full dropdown height in logical pixels (search box plus list).
pub const DROPDOWN_HEIGHT: f32 = 320.0;

/// Which side of the trigger the dropdown opens on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    #[default]
    Below,
    Above,
}

impl Placement {
    /// Open below unless there is less room than the full dropdown needs.
    pub fn for_space_below(space_below: f32) -> Self {
        if space_below < DROPDOWN_HEIGHT {
            Placement::Above
        } else {
            Placement::Below
        }
    }
}

/// What the dropdown list shows for the current search text.
#[derive(Debug, PartialEq)]
pub enum Listing<'a> {
    Tokens(Vec<&'a Token>),
    NoResults,
}

/// How a token's icon is drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconView<'a> {
    /// Load the image at this path
    Image(&'a str),
    /// Draw the gradient badge with this text
    Badge(String),
}

/// Badge text used when a token's icon cannot be loaded.
pub fn fallback_badge(currency: &str) -> String {
    currency.chars().take(2).collect()
}

/// Case-insensitive substring match on the currency identifier.
pub fn matches_search(token: &Token, search: &str) -> bool {
    search.is_empty() || token.currency.to_lowercase().contains(&search.to_lowercase())
}

/// Single-selection search-and-pick control state.
#[derive(Debug, Default)]
pub struct TokenSelector {
    open: bool,
    search: String,
    placement: Placement,
    disabled: bool,
    failed_icons: HashSet<String>,
}

impl TokenSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Disabling an open selector closes it.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.open = false;
        }
    }

    /// Toggle the dropdown from the trigger.
    ///
    /// Opening resets the search text and picks the placement from the room
    /// left below the trigger.
    pub fn activate(&mut self, space_below: f32) {
        if self.disabled {
            return;
        }
        if self.open {
            self.open = false;
            return;
        }
        self.open = true;
        self.search.clear();
        self.placement = Placement::for_space_below(space_below);
        tracing::trace!(placement = ?self.placement, "Token selector opened");
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        if self.open {
            self.search = text.into();
        }
    }

    /// Tokens matching the current search, in catalog order.
    pub fn listing<'a>(&self, tokens: &'a [Token]) -> Listing<'a> {
        let matched: Vec<&Token> = tokens
            .iter()
            .filter(|t| matches_search(t, &self.search))
            .collect();
        if matched.is_empty() {
            Listing::NoResults
        } else {
            Listing::Tokens(matched)
        }
    }

    /// Report `token` through `on_select`, then close and clear the search.
    pub fn pick<F>(&mut self, token: &Token, on_select: F)
    where
        F: FnOnce(&Token),
    {
        if !self.open {
            return;
        }
        on_select(token);
        self.open = false;
        self.search.clear();
    }

    /// Pointer pressed outside the trigger and dropdown.
    pub fn click_outside(&mut self) {
        self.open = false;
    }

    /// Remember that `currency`'s icon failed; it is never retried by this
    /// selector.
    pub fn mark_icon_failed(&mut self, currency: &str) {
        if self.failed_icons.insert(currency.to_string()) {
            tracing::debug!(currency = %currency, "Token icon failed to load, using badge");
        }
    }

    pub fn icon_failed(&self, currency: &str) -> bool {
        self.failed_icons.contains(currency)
    }

    pub fn icon_view<'a>(&self, token: &'a Token) -> IconView<'a> {
        if self.icon_failed(&token.currency) {
            IconView::Badge(fallback_badge(&token.currency))
        } else {
            IconView::Image(&token.icon)
        }
    }
}

/// True when `token` is the current selection.
pub fn is_selected(token: &Token, selected: Option<&Token>) -> bool {
    selected.is_some_and(|s| s.currency == token.currency)
}
