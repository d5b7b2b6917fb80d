//! # Token Swap Terminal - Library Root
//!
//! A **native desktop GUI** for swapping between tokens at live exchange
//! rates. This library crate contains all modules used by the binary crate
//! (`main.rs`).
//!
//! ## Features
//!
//! - **Live Prices**: Exchange rates fetched from the public prices feed
//! - **Token Catalog**: One entry per currency with icon, sorted by price
//! - **Token Picker**: Searchable dropdown with icon fallback badges
//! - **Simulated Wallet**: Per-currency balances debited/credited on swap
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              terminal (this crate)                     │
//! ├────────────────────────────────────────────────────────┤
//! │  egui          - Immediate-mode GUI framework          │
//! │  eframe        - Native window framework               │
//! │  egui_extras   - SVG/HTTP image loaders for icons      │
//! │  Tokio         - Async runtime                         │
//! │  Reqwest       - HTTP client                           │
//! └────────────────────────────────────────────────────────┘
//!          │
//!          │ HTTP GET prices.json
//!          ▼
//! ┌─────────────────┐
//! │  Prices feed    │
//! └─────────────────┘
//! ```
//!
//! ### Module Dependency Graph
//!
//! ```text
//! main.rs
//!   │
//!   ├── app (state, events, swap handlers, token selector)
//!   │   ├── store (rate store, catalog derivation, icon table)
//!   │   └── services::api (HTTP requests)
//!   │
//!   └── ui (rendering)
//!       ├── screens::swap
//!       ├── widgets::* (token picker, token icon)
//!       └── theme
//! ```
//!
//! ### State Management
//!
//! Application state is wrapped in `Arc<RwLock<AppState>>`:
//! - **Single writer**: fetch results are applied on the UI thread
//! - **Locked briefly**: one frame or one handler call at a time
//!
//! ## Testing
//!
//! ```bash
//! cargo test --workspace
//! ```

pub mod app;
pub mod core;
pub mod debug;
pub mod services;
pub mod store;
pub mod ui;
pub mod utils;

// Re-export commonly used types for convenience
pub use app::{App, AppEvent, AppState};
pub use core::{AppError, PriceFeed, Result};
