use super::{DomainError, QueryRequest, RecordKind};
use std::sync::Arc;
use std::time::Duration;

/// Outcome of one lookup. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResult {
    pub domain: Arc<str>,
    pub kind: RecordKind,
    pub server: Arc<str>,
    pub records: Vec<String>,
    pub failure: Option<DomainError>,
    pub latency: Duration,
    /// Response code reported by the server (NOERROR, NXDOMAIN, ...), when one arrived.
    pub response_code: Option<&'static str>,
}

/// The three mutually exclusive ways a lookup can end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome<'a> {
    Records(&'a [String]),
    NoRecords,
    Failed(&'a DomainError),
}

impl QueryResult {
    pub fn answered(
        request: &QueryRequest,
        records: Vec<String>,
        latency: Duration,
        response_code: &'static str,
    ) -> Self {
        Self {
            domain: Arc::clone(&request.domain),
            kind: request.kind,
            server: Arc::clone(&request.server),
            records,
            failure: None,
            latency,
            response_code: Some(response_code),
        }
    }

    pub fn failed(request: &QueryRequest, failure: DomainError, latency: Duration) -> Self {
        Self {
            domain: Arc::clone(&request.domain),
            kind: request.kind,
            server: Arc::clone(&request.server),
            records: Vec::new(),
            failure: Some(failure),
            latency,
            response_code: None,
        }
    }

    pub fn outcome(&self) -> Outcome<'_> {
        match &self.failure {
            Some(failure) => Outcome::Failed(failure),
            None if self.records.is_empty() => Outcome::NoRecords,
            None => Outcome::Records(&self.records),
        }
    }

    pub fn is_success(&self) -> bool {
        self.failure.is_none()
    }

    /// Identity used by the history: one entry per (domain, kind).
    pub fn same_lookup(&self, other: &QueryResult) -> bool {
        self.kind == other.kind && self.domain == other.domain
    }
}
