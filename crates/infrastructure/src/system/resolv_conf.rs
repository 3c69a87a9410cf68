use crate::dns::transport::DEFAULT_DNS_PORT;
use dnslook_application::ports::ServerSource;
use dnslook_domain::config::resolver::default_fallback_servers;
use dnslook_domain::config::ResolverConfig;
use resolv_conf::ScopedIp;
use std::net::{SocketAddr, SocketAddrV6};
use tracing::{debug, warn};

/// Server list from the system resolver configuration (`/etc/resolv.conf`).
pub struct SystemServerSource {
    resolv_conf_path: String,
    fallback_servers: Vec<String>,
}

impl SystemServerSource {
    pub fn new() -> Self {
        Self {
            resolv_conf_path: "/etc/resolv.conf".to_string(),
            fallback_servers: default_fallback_servers(),
        }
    }

    pub fn from_config(config: &ResolverConfig) -> Self {
        Self::new()
            .with_path(config.resolv_conf.clone())
            .with_fallback(config.fallback_servers.clone())
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.resolv_conf_path = path.into();
        self
    }

    pub fn with_fallback(mut self, servers: Vec<String>) -> Self {
        if !servers.is_empty() {
            self.fallback_servers = servers;
        }
        self
    }

    fn read_nameservers(&self) -> Result<Vec<String>, String> {
        let contents = std::fs::read(&self.resolv_conf_path).map_err(|e| e.to_string())?;
        let config = resolv_conf::Config::parse(&contents).map_err(|e| e.to_string())?;
        Ok(render_nameservers(&config.nameservers))
    }
}

impl Default for SystemServerSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ServerSource for SystemServerSource {
    fn list_servers(&self) -> Vec<String> {
        match self.read_nameservers() {
            Ok(servers) if !servers.is_empty() => {
                debug!(
                    path = %self.resolv_conf_path,
                    count = servers.len(),
                    "System DNS servers loaded"
                );
                servers
            }
            Ok(_) => {
                warn!(
                    path = %self.resolv_conf_path,
                    "No nameservers configured, using fallback servers"
                );
                self.fallback_servers.clone()
            }
            Err(error) => {
                warn!(
                    path = %self.resolv_conf_path,
                    error = %error,
                    "Failed to read resolver configuration, using fallback servers"
                );
                self.fallback_servers.clone()
            }
        }
    }
}

/// Renders nameservers as `host:53` in file order, dropping duplicates.
///
/// A numeric IPv6 zone (`fe80::1%2`) is kept in the endpoint. Zones given
/// as interface names cannot be carried in a socket address, so those
/// entries are skipped.
fn render_nameservers(nameservers: &[ScopedIp]) -> Vec<String> {
    let mut servers: Vec<String> = Vec::with_capacity(nameservers.len());

    for nameserver in nameservers {
        let addr = match nameserver {
            ScopedIp::V4(ip) => SocketAddr::from((*ip, DEFAULT_DNS_PORT)),
            ScopedIp::V6(ip, None) => SocketAddr::from((*ip, DEFAULT_DNS_PORT)),
            ScopedIp::V6(ip, Some(zone)) => match zone.parse::<u32>() {
                Ok(scope_id) => {
                    SocketAddr::V6(SocketAddrV6::new(*ip, DEFAULT_DNS_PORT, 0, scope_id))
                }
                Err(_) => {
                    warn!(nameserver = %ip, zone = %zone, "Skipping nameserver with named zone");
                    continue;
                }
            },
        };
        let endpoint = addr.to_string();
        if !servers.contains(&endpoint) {
            servers.push(endpoint);
        }
    }

    servers
}
