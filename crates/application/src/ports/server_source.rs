use dnslook_domain::config::resolver::default_fallback_servers;

/// Supplies candidate DNS server endpoints (`host:port`).
///
/// Advisory only: used to pre-fill the server field. Implementations should
/// always return at least one endpoint.
pub trait ServerSource: Send + Sync {
    fn list_servers(&self) -> Vec<String>;

    fn default_server(&self) -> String {
        self.list_servers()
            .into_iter()
            .next()
            .or_else(|| default_fallback_servers().into_iter().next())
            .unwrap_or_default()
    }
}
