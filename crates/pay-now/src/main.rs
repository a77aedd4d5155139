//! Pay Now: a payment button with a modal form, as a native desktop app

use eframe::egui;
use eyre::WrapErr;

use pay_now_adapters::{transport_from_config, PayNowConfig};

mod app;
mod router;
mod ui;

fn main() -> eyre::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Pay Now");

    let config = PayNowConfig::from_env();
    let transport =
        transport_from_config(&config).wrap_err("failed to set up the payment transport")?;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Pay Now")
            .with_inner_size([640.0, 520.0])
            .with_min_inner_size([420.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Pay Now",
        native_options,
        Box::new(move |_cc| Ok(Box::new(app::App::new(transport, &config)))),
    )
    .map_err(|e| eyre::eyre!("gui exited with an error: {e}"))
}
