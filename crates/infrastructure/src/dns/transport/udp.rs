use super::{
    classify_io_error, exchange_with_deadline, message_id, query_id, DnsTransport,
    TransportError, TransportResponse,
};
use async_trait::async_trait;
use dnslook_domain::DomainError;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::{debug, warn};

/// Maximum UDP DNS response size with EDNS(0)
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

/// DNS over UDP, one socket per query.
///
/// The socket is connected to the server so that only its datagrams are
/// delivered and an ICMP port-unreachable surfaces as a connection error.
pub struct UdpTransport {
    server_addr: SocketAddr,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    async fn exchange(&self, message_bytes: &[u8]) -> Result<Vec<u8>, DomainError> {
        let expected_id = query_id(message_bytes)?;

        let bind_addr = if self.server_addr.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| classify_io_error(self.server_addr, &e))?;
        socket
            .connect(self.server_addr)
            .await
            .map_err(|e| classify_io_error(self.server_addr, &e))?;

        let bytes_sent = socket
            .send(message_bytes)
            .await
            .map_err(|e| classify_io_error(self.server_addr, &e))?;

        debug!(server = %self.server_addr, bytes_sent, "UDP query sent");

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];

        loop {
            let bytes_received = socket
                .recv(&mut recv_buf)
                .await
                .map_err(|e| classify_io_error(self.server_addr, &e))?;

            let received_id = message_id(&recv_buf[..bytes_received]);
            if received_id != Some(expected_id) {
                warn!(
                    server = %self.server_addr,
                    expected_id,
                    received_id = ?received_id,
                    "Discarding UDP datagram with mismatched transaction id"
                );
                continue;
            }

            recv_buf.truncate(bytes_received);

            debug!(
                server = %self.server_addr,
                bytes_received,
                "UDP response received"
            );

            return Ok(recv_buf);
        }
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
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
        "UDP"
    }
}
