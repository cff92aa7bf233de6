//! Connectivity demo transport
//!
//! Shared TCP plumbing for the client/server smoke test:
//! - TCP connect/bind/accept (TcpTransport, TcpListener)
//! - Unframed plain-text exchange helpers (send_text, recv_text)
//!
//! There is deliberately no message framing, no delimiter and no length
//! prefix: the wire contract is a raw byte stream carrying one fixed
//! string in each direction.

mod error;
mod tcp;
mod text;

pub use error::{Result, TransportError};
pub use tcp::{TcpListener, TcpTransport, TransportConfig};
pub use text::{recv_text, send_text, RECV_BUFFER_SIZE};

use std::time::Duration;

/// Default demo port, used when no port is configured
pub const DEFAULT_PORT: u16 = 5000;

/// Connection timeout
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
