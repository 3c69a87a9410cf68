use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Where candidate servers come from and how long a query may take.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// System resolver configuration file
    #[serde(default = "default_resolv_conf")]
    pub resolv_conf: String,

    /// Used when the resolver configuration is unreadable or lists no servers
    #[serde(default = "default_fallback_servers")]
    pub fallback_servers: Vec<String>,

    /// Explicit server, takes precedence over the system list
    #[serde(default)]
    pub server: Option<String>,

    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,

    /// Retry over TCP when a UDP answer comes back truncated
    #[serde(default = "default_true")]
    pub tcp_fallback: bool,
}

impl ResolverConfig {
    pub fn query_timeout(&self) -> Duration {
        Duration::from_millis(self.query_timeout_ms)
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            resolv_conf: default_resolv_conf(),
            fallback_servers: default_fallback_servers(),
            server: None,
            query_timeout_ms: default_query_timeout_ms(),
            tcp_fallback: default_true(),
        }
    }
}

fn default_resolv_conf() -> String {
    "/etc/resolv.conf".to_string()
}

pub fn default_fallback_servers() -> Vec<String> {
    vec!["8.8.8.8:53".to_string(), "1.1.1.1:53".to_string()]
}

fn default_query_timeout_ms() -> u64 {
    5_000
}

fn default_true() -> bool {
    true
}
