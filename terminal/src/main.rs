//! Swap terminal binary: opens the native window and starts the first fetch.

use std::sync::Arc;
use std::time::Duration;

use swap_terminal::app::App;
use swap_terminal::services::api::ApiClient;
use swap_terminal::ui::{self, theme::Theme};
use swap_terminal::debug;

/// Repaint interval while a fetch is in flight
const FETCH_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// eframe wrapper owning the App and the runtime its tasks run on
struct SwapWindow {
    app: App,
    _runtime: tokio::runtime::Runtime,
}

impl eframe::App for SwapWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.app.on_tick();
        ui::render(ctx, &mut self.app);

        // Keep polling the event channel until outstanding fetches land
        if self.app.state.read().fetches_in_flight > 0 {
            ctx.request_repaint_after(FETCH_POLL_INTERVAL);
        }
    }
}

fn main() -> eframe::Result {
    debug::init();
    tracing::info!("Starting swap terminal");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to build tokio runtime");
            eframe::Error::AppCreation(Box::new(e))
        })?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Token Swap")
            .with_inner_size([420.0, 620.0])
            .with_min_inner_size([380.0, 520.0]),
        ..Default::default()
    };

    eframe::run_native(
        "swap-terminal",
        options,
        Box::new(move |cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Theme::default().apply(&cc.egui_ctx);

            let app = App::new(Arc::new(ApiClient::new()), runtime.handle().clone());
            app.fetch_rates();

            Ok(Box::new(SwapWindow { app, _runtime: runtime }))
        }),
    )
}
