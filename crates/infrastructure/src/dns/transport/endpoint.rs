use dnslook_domain::DomainError;
use std::net::{IpAddr, SocketAddr};
use tracing::debug;

pub const DEFAULT_DNS_PORT: u16 = 53;

/// A server endpoint as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Addr(SocketAddr),
    /// Needs a name lookup before a socket can be opened.
    Host { host: String, port: u16 },
}

/// Parses `ip:port`, `[v6]:port`, a bare IP (port 53), `host:port` or a bare host.
pub fn parse_endpoint(server: &str) -> Result<Endpoint, DomainError> {
    let server = server.trim();
    if server.is_empty() {
        return Err(DomainError::InvalidInput(
            "server endpoint cannot be empty".to_string(),
        ));
    }

    if let Ok(addr) = server.parse::<SocketAddr>() {
        return Ok(Endpoint::Addr(addr));
    }

    let unbracketed = server
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .unwrap_or(server);
    if let Ok(ip) = unbracketed.parse::<IpAddr>() {
        return Ok(Endpoint::Addr(SocketAddr::new(ip, DEFAULT_DNS_PORT)));
    }

    let (host, port) = match server.rsplit_once(':') {
        Some((host, port)) => {
            let port = port.parse::<u16>().map_err(|_| {
                DomainError::InvalidInput(format!("Invalid port in server '{}'", server))
            })?;
            (host, port)
        }
        None => (server, DEFAULT_DNS_PORT),
    };

    if host.is_empty() || host.contains(|c: char| c.is_whitespace() || c == '[' || c == ']') {
        return Err(DomainError::InvalidInput(format!(
            "Invalid server '{}'",
            server
        )));
    }

    Ok(Endpoint::Host {
        host: host.to_string(),
        port,
    })
}

/// Turns a server string into a socket address, resolving host names.
pub async fn resolve_endpoint(server: &str) -> Result<SocketAddr, DomainError> {
    match parse_endpoint(server)? {
        Endpoint::Addr(addr) => Ok(addr),
        Endpoint::Host { host, port } => {
            let mut addrs = tokio::net::lookup_host((host.as_str(), port))
                .await
                .map_err(|e| DomainError::TransportUnreachable {
                    server: server.trim().to_string(),
                    reason: format!("cannot resolve host '{}': {}", host, e),
                })?;

            let addr = addrs.next().ok_or_else(|| DomainError::TransportUnreachable {
                server: server.trim().to_string(),
                reason: format!("host '{}' has no addresses", host),
            })?;

            debug!(server = %server.trim(), resolved = %addr, "Server host resolved");
            Ok(addr)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_socket_addr() {
        assert_eq!(
            parse_endpoint("8.8.8.8:53").unwrap(),
            Endpoint::Addr("8.8.8.8:53".parse().unwrap())
        );
        assert_eq!(
            parse_endpoint("[2001:4860:4860::8888]:5353").unwrap(),
            Endpoint::Addr("[2001:4860:4860::8888]:5353".parse().unwrap())
        );
    }

    #[test]
    fn test_bare_ip_gets_default_port() {
        assert_eq!(
            parse_endpoint(" 1.1.1.1 ").unwrap(),
            Endpoint::Addr("1.1.1.1:53".parse().unwrap())
        );
        assert_eq!(
            parse_endpoint("2606:4700:4700::1111").unwrap(),
            Endpoint::Addr("[2606:4700:4700::1111]:53".parse().unwrap())
        );
        assert_eq!(
            parse_endpoint("[::1]").unwrap(),
            Endpoint::Addr("[::1]:53".parse().unwrap())
        );
    }

    #[test]
    fn test_parse_host_names() {
        assert_eq!(
            parse_endpoint("dns.google:853").unwrap(),
            Endpoint::Host {
                host: "dns.google".to_string(),
                port: 853
            }
        );
        assert_eq!(
            parse_endpoint("localhost").unwrap(),
            Endpoint::Host {
                host: "localhost".to_string(),
                port: 53
            }
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            parse_endpoint(""),
            Err(DomainError::InvalidInput(_))
        ));
        assert!(matches!(
            parse_endpoint("dns.google:port"),
            Err(DomainError::InvalidInput(_))
        ));
        assert!(matches!(
            parse_endpoint(":53"),
            Err(DomainError::InvalidInput(_))
        ));
        assert!(matches!(
            parse_endpoint("8.8.8.8:99999"),
            Err(DomainError::InvalidInput(_))
        ));
    }

    #[tokio::test]
    async fn test_resolve_ip_without_lookup() {
        let addr = resolve_endpoint("127.0.0.1:5353").await.unwrap();
        assert_eq!(addr, "127.0.0.1:5353".parse::<SocketAddr>().unwrap());
    }
}
