use super::{
    classify_io_error, exchange_with_deadline, message_id, query_id, DnsTransport,
    TransportError, TransportResponse,
};
use async_trait::async_trait;
use dnslook_domain::DomainError;
use std::io;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;

/// DNS over TCP (RFC 1035 4.2.2), one connection per query.
///
/// Used as the continuation of a UDP exchange whose answer came back
/// truncated.
pub struct TcpTransport {
    server_addr: SocketAddr,
}

impl TcpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    async fn exchange(&self, message_bytes: &[u8]) -> Result<Vec<u8>, DomainError> {
        let expected_id = query_id(message_bytes)?;

        let mut stream = TcpStream::connect(self.server_addr)
            .await
            .map_err(|e| classify_io_error(self.server_addr, &e))?;
        stream
            .set_nodelay(true)
            .map_err(|e| classify_io_error(self.server_addr, &e))?;

        send_with_length_prefix(&mut stream, message_bytes)
            .await
            .map_err(|e| classify_io_error(self.server_addr, &e))?;

        debug!(
            server = %self.server_addr,
            message_len = message_bytes.len(),
            "TCP query sent"
        );

        let response = read_with_length_prefix(&mut stream)
            .await
            .map_err(|e| classify_io_error(self.server_addr, &e))?;

        if message_id(&response) != Some(expected_id) {
            return Err(DomainError::MalformedResponse(format!(
                "TCP response from {} does not match query id {}",
                self.server_addr, expected_id
            )));
        }

        debug!(
            server = %self.server_addr,
            response_len = response.len(),
            "TCP response received"
        );

        Ok(response)
    }
}

#[async_trait]
impl DnsTransport for TcpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, TransportError> {
        exchange_with_deadline(
            self.server_addr,
            self.protocol_name(),
            timeout,
            self.exchange(message_bytes),
        )
        .await
    }

    fn protocol_name(&self) -> &'static str {
        "TCP"
    }
}

pub(crate) async fn send_with_length_prefix<S>(stream: &mut S, message_bytes: &[u8]) -> io::Result<()>
where
    S: AsyncWriteExt + Unpin,
{
    let length = u16::try_from(message_bytes.len()).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("DNS message too large: {} bytes", message_bytes.len()),
        )
    })?;

    stream.write_all(&length.to_be_bytes()).await?;
    stream.write_all(message_bytes).await?;
    stream.flush().await
}

pub(crate) async fn read_with_length_prefix<S>(stream: &mut S) -> io::Result<Vec<u8>>
where
    S: AsyncReadExt + Unpin,
{
    let mut len_buf = [0u8; 2];
    stream.read_exact(&mut len_buf).await?;

    let response_len = u16::from_be_bytes(len_buf) as usize;

    let mut response = vec![0u8; response_len];
    stream.read_exact(&mut response).await?;

    Ok(response)
}
