//! TCP plumbing for the connectivity demo
//!
//! Concrete connect/bind/accept types; the demo has exactly one client and
//! one server, so there is no transport abstraction layer. The text
//! helpers are generic over the split halves' read/write traits, which is
//! all the tests need to drive either side in memory.

use std::net::SocketAddr;
use std::time::Duration;

use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::debug;

use crate::error::{Result, TransportError};
use crate::CONNECT_TIMEOUT;

/// Transport configuration
#[derive(Clone, Debug)]
pub struct TransportConfig {
    /// Connection timeout
    pub connect_timeout: Duration,
    /// Disable Nagle's algorithm (TCP nodelay)
    pub nodelay: bool,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            connect_timeout: CONNECT_TIMEOUT,
            nodelay: true,
        }
    }
}

/// One established TCP connection
#[derive(Debug)]
pub struct TcpTransport {
    stream: TcpStream,
}

impl TcpTransport {
    /// Connect to `addr` ("host:port") within the configured timeout
    pub async fn connect(addr: &str, config: &TransportConfig) -> Result<Self> {
        let stream = timeout(config.connect_timeout, TcpStream::connect(addr))
            .await
            .map_err(|_| TransportError::ConnectionTimeout)?
            .map_err(TransportError::Io)?;

        stream.set_nodelay(config.nodelay)?;
        debug!(%addr, "connected");

        Ok(Self { stream })
    }

    /// Wrap an already-accepted stream (server side)
    pub fn from_stream(stream: TcpStream) -> Result<Self> {
        stream.set_nodelay(true)?;
        Ok(Self { stream })
    }

    /// Split into independent read and write halves
    pub fn split(self) -> (OwnedReadHalf, OwnedWriteHalf) {
        self.stream.into_split()
    }
}

/// Bound TCP listener
pub struct TcpListener {
    listener: tokio::net::TcpListener,
}

impl TcpListener {
    /// Bind `addr` ("host:port") and start listening
    pub async fn bind(addr: &str) -> Result<Self> {
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(TransportError::Io)?;
        Ok(Self { listener })
    }

    /// Accept one incoming connection
    pub async fn accept(&self) -> Result<TcpTransport> {
        let (stream, addr) = self.listener.accept().await.map_err(TransportError::Io)?;
        debug!(%addr, "accepted connection");
        TcpTransport::from_stream(stream)
    }

    /// Local bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{recv_text, send_text};

    #[tokio::test]
    async fn test_loopback_exchange_through_split_halves() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap().to_string();

        let client = tokio::spawn(async move {
            let transport = TcpTransport::connect(&addr, &TransportConfig::default())
                .await
                .unwrap();
            let (mut reader, mut writer) = transport.split();
            send_text(&mut writer, "ping").await.unwrap();
            recv_text(&mut reader).await.unwrap()
        });

        let (mut reader, mut writer) = listener.accept().await.unwrap().split();
        assert_eq!(recv_text(&mut reader).await.unwrap(), "ping");
        send_text(&mut writer, "pong").await.unwrap();

        assert_eq!(client.await.unwrap(), "pong");
    }

    #[tokio::test]
    async fn test_connect_to_dropped_listener_fails() {
        // Bind then drop to get a port with nothing listening
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap().to_string();
        drop(listener);

        let result = TcpTransport::connect(&addr, &TransportConfig::default()).await;
        assert!(result.is_err());
    }
}
