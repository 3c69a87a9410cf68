use crate::ports::RecordLookup;
use dnslook_domain::{Outcome, QueryRequest, QueryResult};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Use case: run one lookup off the event path.
///
/// Never fails outward. Transport and decode failures are carried inside
/// the returned `QueryResult`; nothing is retried.
pub struct LookupRecordsUseCase {
    lookup: Arc<dyn RecordLookup>,
}

impl LookupRecordsUseCase {
    pub fn new(lookup: Arc<dyn RecordLookup>) -> Self {
        Self { lookup }
    }

    pub async fn execute(&self, request: QueryRequest) -> QueryResult {
        debug!(
            domain = %request.domain,
            kind = %request.kind,
            server = %request.server,
            timeout_ms = request.timeout.as_millis() as u64,
            "Starting lookup"
        );

        let result = self.lookup.lookup(&request).await;
        let latency_ms = result.latency.as_millis() as u64;

        match result.outcome() {
            Outcome::Records(records) => info!(
                domain = %result.domain,
                kind = %result.kind,
                records = records.len(),
                latency_ms,
                "Lookup answered"
            ),
            Outcome::NoRecords => info!(
                domain = %result.domain,
                kind = %result.kind,
                rcode = result.response_code.unwrap_or("UNKNOWN"),
                latency_ms,
                "Lookup returned no records"
            ),
            Outcome::Failed(error) => warn!(
                domain = %result.domain,
                kind = %result.kind,
                error = %error,
                error_kind = error.label(),
                latency_ms,
                "Lookup failed"
            ),
        }

        result
    }
}
