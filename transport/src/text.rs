//! Unframed plain-text exchange
//!
//! One send is one `write_all` of the raw UTF-8 bytes; one receive is a
//! single read of up to [`RECV_BUFFER_SIZE`] bytes. There is no framing
//! and no delimiter; only the one-shot smoke test uses this.

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::error::{Result, TransportError};

/// Receive buffer size in bytes
pub const RECV_BUFFER_SIZE: usize = 1024;

/// Write `message` to the stream as raw bytes, no delimiter
pub async fn send_text<W: AsyncWrite + Unpin>(writer: &mut W, message: &str) -> Result<()> {
    writer.write_all(message.as_bytes()).await?;
    writer.flush().await?;
    Ok(())
}

/// Read one buffer's worth of bytes and decode it as UTF-8 (lossy).
///
/// Returns [`TransportError::ConnectionClosed`] on a zero-length read.
pub async fn recv_text<R: AsyncRead + Unpin>(reader: &mut R) -> Result<String> {
    let mut buffer = [0u8; RECV_BUFFER_SIZE];
    let n = reader.read(&mut buffer).await?;
    if n == 0 {
        return Err(TransportError::ConnectionClosed);
    }
    Ok(String::from_utf8_lossy(&buffer[..n]).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_text_exchange_over_duplex() {
        let (mut a, mut b) = tokio::io::duplex(RECV_BUFFER_SIZE);

        send_text(&mut a, "Hello from Client Socket!").await.unwrap();
        let received = recv_text(&mut b).await.unwrap();
        assert_eq!(received, "Hello from Client Socket!");

        send_text(&mut b, "Hello from Server Socket!").await.unwrap();
        let received = recv_text(&mut a).await.unwrap();
        assert_eq!(received, "Hello from Server Socket!");
    }

    #[tokio::test]
    async fn test_recv_on_closed_stream() {
        let (a, mut b) = tokio::io::duplex(RECV_BUFFER_SIZE);
        drop(a);

        let result = recv_text(&mut b).await;
        assert!(matches!(result, Err(TransportError::ConnectionClosed)));
    }
}
