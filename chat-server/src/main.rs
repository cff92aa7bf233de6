//! Connectivity demo server
//!
//! Binds the port named by the `PORT` environment variable, accepts
//! exactly one connection, sends one fixed string, reads one response and
//! exits. No reconnection, no multi-client handling, no framing.

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;
use transport::{recv_text, send_text, TcpListener, TcpTransport};

/// The single message the server sends
const SERVER_GREETING: &str = "Hello from Server Socket!";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("chat_server=debug".parse()?)
                .add_directive("transport=debug".parse()?),
        )
        .init();

    let port: u16 = std::env::var("PORT")
        .context("PORT environment variable is not set")?
        .parse()
        .context("PORT must be a valid port number")?;

    let listener = TcpListener::bind(&format!("0.0.0.0:{port}")).await?;
    info!("Server listening on port {port} ...");

    let transport = listener.accept().await?;
    info!("New connection accepted");
    serve_once(transport).await?;

    Ok(())
}

/// One exchange in each direction, then done
async fn serve_once(transport: TcpTransport) -> transport::Result<()> {
    let (mut reader, mut writer) = transport.split();

    send_text(&mut writer, SERVER_GREETING).await?;
    info!("Message sent to client");

    let response = recv_text(&mut reader).await?;
    info!(%response, "Client response, closing connection");

    Ok(())
}
