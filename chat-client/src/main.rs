//! Chat client
//!
//! egui-based chat window prototype

mod app;
mod net;
mod scene;
mod state;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use app::ChatApp;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("chat_client=debug".parse()?))
        .init();

    // Connectivity smoke test, opt-in and independent of the GUI
    if let Ok(value) = std::env::var("CHAT_DEMO_PORT") {
        let port: u16 = value.parse().unwrap_or(transport::DEFAULT_PORT);
        let runtime = tokio::runtime::Runtime::new()?;
        runtime.block_on(net::run_demo(port))?;
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([scene::WINDOW_WIDTH, scene::WINDOW_HEIGHT])
            .with_resizable(false)
            .with_title("Chat Client"),
        ..Default::default()
    };

    eframe::run_native(
        "Chat Client",
        options,
        Box::new(|cc| Ok(Box::new(ChatApp::new(cc)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to run chat client: {e}"))
}
