pub mod endpoint;
pub mod tcp;
pub mod udp;

use async_trait::async_trait;
use dnslook_domain::DomainError;
use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::time::{Duration, Instant};

pub use endpoint::{parse_endpoint, resolve_endpoint, Endpoint, DEFAULT_DNS_PORT};

/// Result of a raw DNS transport operation
#[derive(Debug)]
pub struct TransportResponse {
    /// Raw DNS response bytes (wire format)
    pub bytes: Vec<u8>,
    /// Time from the first send to the matching answer
    pub latency: Duration,
    /// Which protocol was used
    pub protocol_used: &'static str,
}

/// A failed exchange, with the time spent before it failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportError {
    pub error: DomainError,
    pub latency: Duration,
}

/// Trait for sending raw DNS messages over the wire
///
/// `timeout` is one deadline for the whole exchange (connect, send and
/// every read), not a per-operation limit.
#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, TransportError>;

    fn protocol_name(&self) -> &'static str;
}

/// Runs `exchange` under a single deadline and stamps the latency.
pub(crate) async fn exchange_with_deadline<F>(
    server_addr: SocketAddr,
    protocol: &'static str,
    timeout: Duration,
    exchange: F,
) -> Result<TransportResponse, TransportError>
where
    F: Future<Output = Result<Vec<u8>, DomainError>>,
{
    let start = Instant::now();
    let outcome = tokio::time::timeout(timeout, exchange).await;
    let latency = start.elapsed();

    match outcome {
        Ok(Ok(bytes)) => Ok(TransportResponse {
            bytes,
            latency,
            protocol_used: protocol,
        }),
        Ok(Err(error)) => Err(TransportError { error, latency }),
        Err(_) => Err(TransportError {
            error: DomainError::TransportTimeout {
                server: server_addr.to_string(),
            },
            latency,
        }),
    }
}

/// Maps socket errors onto the domain classification.
pub(crate) fn classify_io_error(server_addr: SocketAddr, error: &io::Error) -> DomainError {
    match error.kind() {
        io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => DomainError::TransportTimeout {
            server: server_addr.to_string(),
        },
        _ => DomainError::TransportUnreachable {
            server: server_addr.to_string(),
            reason: error.to_string(),
        },
    }
}

/// Transaction id of a wire-format message, if it has a header at all.
pub(crate) fn message_id(bytes: &[u8]) -> Option<u16> {
    match bytes {
        [hi, lo, ..] => Some(u16::from_be_bytes([*hi, *lo])),
        _ => None,
    }
}

pub(crate) fn query_id(message_bytes: &[u8]) -> Result<u16, DomainError> {
    message_id(message_bytes).ok_or_else(|| {
        DomainError::InvalidInput("DNS query is shorter than its header".to_string())
    })
}
