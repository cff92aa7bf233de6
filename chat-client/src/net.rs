//! Connectivity demo client
//!
//! One-shot smoke test: connect to the loopback server, send one fixed
//! string, read one response, close. Not wired into the render loop.

use tracing::info;
use transport::{recv_text, send_text, Result, TcpTransport, TransportConfig};

/// Loopback server address
pub const SERVER_HOST: &str = "127.0.0.1";

/// The single message the client sends
pub const CLIENT_GREETING: &str = "Hello from Client Socket!";

/// Connect, exchange one message in each direction, and return the
/// server's response. The connection closes when the halves drop.
pub async fn run_demo(port: u16) -> Result<String> {
    let config = TransportConfig::default();
    let transport = TcpTransport::connect(&format!("{SERVER_HOST}:{port}"), &config).await?;
    let (mut reader, mut writer) = transport.split();

    send_text(&mut writer, CLIENT_GREETING).await?;
    info!("Message sent to server");

    let response = recv_text(&mut reader).await?;
    info!(%response, "Server response");

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use transport::TcpListener;

    #[tokio::test]
    async fn test_demo_exchange_against_one_shot_server() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        // One-shot server: send a fixed string, read one response, exit
        let server = tokio::spawn(async move {
            let transport = listener.accept().await.unwrap();
            let (mut reader, mut writer) = transport.split();
            send_text(&mut writer, "Hello from Server Socket!").await.unwrap();
            recv_text(&mut reader).await.unwrap()
        });

        let response = run_demo(port).await.unwrap();
        assert_eq!(response, "Hello from Server Socket!");

        let received_by_server = server.await.unwrap();
        assert_eq!(received_by_server, CLIENT_GREETING);
    }

    #[tokio::test]
    async fn test_demo_fails_when_no_server_listens() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        assert!(run_demo(port).await.is_err());
    }
}
