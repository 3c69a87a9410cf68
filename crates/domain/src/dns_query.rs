use super::{DomainError, RecordKind};
use std::sync::Arc;
use std::time::Duration;

/// A single lookup, built fresh for every dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    pub domain: Arc<str>,
    pub kind: RecordKind,
    /// Endpoint in `host:port` form. Never empty once constructed.
    pub server: Arc<str>,
    pub timeout: Duration,
}

impl QueryRequest {
    pub fn new(
        domain: &str,
        kind: RecordKind,
        server: &str,
        timeout: Duration,
    ) -> Result<Self, DomainError> {
        let domain = domain.trim();
        if domain.is_empty() {
            return Err(DomainError::InvalidInput(
                "domain cannot be empty".to_string(),
            ));
        }

        let server = server.trim();
        if server.is_empty() {
            return Err(DomainError::InvalidInput(
                "server endpoint cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            domain: Arc::from(domain),
            kind,
            server: Arc::from(server),
            timeout,
        })
    }

    /// The domain in fully-qualified form (trailing dot).
    pub fn fqdn(&self) -> String {
        to_fqdn(&self.domain)
    }
}

/// Appends the root label separator when it is missing.
pub fn to_fqdn(domain: &str) -> String {
    if domain.ends_with('.') {
        domain.to_string()
    } else {
        format!("{}.", domain)
    }
}
