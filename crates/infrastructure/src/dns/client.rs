use crate::dns::forwarding::{DnsResponse, MessageBuilder, ResponseParser};
use crate::dns::transport::tcp::TcpTransport;
use crate::dns::transport::udp::UdpTransport;
use crate::dns::transport::{resolve_endpoint, DnsTransport};
use async_trait::async_trait;
use dnslook_application::ports::RecordLookup;
use dnslook_domain::config::ResolverConfig;
use dnslook_domain::{DomainError, QueryRequest, QueryResult};
use std::net::SocketAddr;
use std::time::{Duration, Instant};
use tracing::debug;

/// `RecordLookup` over the wire: UDP first, TCP when the answer is truncated.
///
/// The request timeout is a single budget shared by host resolution, the
/// UDP exchange and the TCP continuation.
pub struct DnsClient {
    tcp_fallback: bool,
}

impl DnsClient {
    pub fn new(tcp_fallback: bool) -> Self {
        Self { tcp_fallback }
    }

    pub fn from_config(config: &ResolverConfig) -> Self {
        Self::new(config.tcp_fallback)
    }

    async fn exchange(&self, request: &QueryRequest) -> Result<DnsResponse, DomainError> {
        let deadline = Instant::now() + request.timeout;

        let server_addr = tokio::time::timeout(request.timeout, resolve_endpoint(&request.server))
            .await
            .map_err(|_| DomainError::TransportTimeout {
                server: request.server.to_string(),
            })??;

        let (id, message_bytes) = MessageBuilder::build_query(&request.domain, &request.kind)?;

        debug!(
            id,
            domain = %request.domain,
            kind = %request.kind,
            server = %server_addr,
            "Sending DNS query"
        );

        let udp = UdpTransport::new(server_addr);
        let response = udp
            .send(&message_bytes, remaining(deadline))
            .await
            .map_err(|e| e.error)?;
        debug!(
            protocol = response.protocol_used,
            latency = ?response.latency,
            "DNS response received"
        );
        let parsed = ResponseParser::parse(&response.bytes)?;

        if parsed.truncated && self.tcp_fallback {
            debug!(server = %server_addr, "UDP answer truncated, continuing over TCP");
            return self
                .exchange_tcp(server_addr, &message_bytes, deadline)
                .await;
        }

        Ok(parsed)
    }

    async fn exchange_tcp(
        &self,
        server_addr: SocketAddr,
        message_bytes: &[u8],
        deadline: Instant,
    ) -> Result<DnsResponse, DomainError> {
        let tcp = TcpTransport::new(server_addr);
        let response = tcp
            .send(message_bytes, remaining(deadline))
            .await
            .map_err(|e| e.error)?;
        debug!(
            protocol = response.protocol_used,
            latency = ?response.latency,
            "DNS response received"
        );

        ResponseParser::parse(&response.bytes)
    }
}

fn remaining(deadline: Instant) -> Duration {
    deadline.saturating_duration_since(Instant::now())
}

#[async_trait]
impl RecordLookup for DnsClient {
    async fn lookup(&self, request: &QueryRequest) -> QueryResult {
        let start = Instant::now();
        let exchanged = self.exchange(request).await;
        let latency = start.elapsed();

        let response = match exchanged {
            Ok(response) => response,
            Err(error) => return QueryResult::failed(request, error, latency),
        };

        if response.is_refused() {
            return QueryResult::failed(
                request,
                DomainError::ServerRefused {
                    server: request.server.to_string(),
                },
                latency,
            );
        }

        let records = ResponseParser::decode(&response, request.kind);
        QueryResult::answered(request, records, latency, response.status())
    }
}
