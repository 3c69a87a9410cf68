use thiserror::Error;

/// Failure classification carried by a `QueryResult`.
///
/// An empty answer is not represented here: a lookup that completes with
/// zero matching records is a success with no records.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Query to {server} timed out")]
    TransportTimeout { server: String },

    #[error("Server {server} unreachable: {reason}")]
    TransportUnreachable { server: String, reason: String },

    #[error("Server {server} refused the query")]
    ServerRefused { server: String },

    #[error("Malformed DNS response: {0}")]
    MalformedResponse(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl DomainError {
    /// True for failures raised by the network exchange itself.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            DomainError::TransportTimeout { .. } | DomainError::TransportUnreachable { .. }
        )
    }

    pub fn label(&self) -> &'static str {
        match self {
            DomainError::TransportTimeout { .. } => "TIMEOUT",
            DomainError::TransportUnreachable { .. } => "UNREACHABLE",
            DomainError::ServerRefused { .. } => "REFUSED",
            DomainError::MalformedResponse(_) => "MALFORMED",
            DomainError::InvalidInput(_) => "INVALID",
        }
    }
}
