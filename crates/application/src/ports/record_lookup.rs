use async_trait::async_trait;
use dnslook_domain::{QueryRequest, QueryResult};

/// Executes one lookup end to end: encode, send, decode.
///
/// Failures are reported inside the returned `QueryResult` together with the
/// latency observed up to the failure, so implementations never return `Err`.
#[async_trait]
pub trait RecordLookup: Send + Sync {
    async fn lookup(&self, request: &QueryRequest) -> QueryResult;
}
