use async_trait::async_trait;
use dnslook_application::ports::{RecordLookup, ServerSource};
use dnslook_domain::{DomainError, QueryRequest, QueryResult, RecordKind};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

// ============================================================================
// Result builders
// ============================================================================

pub fn answered(domain: &str, kind: RecordKind, records: &[&str]) -> QueryResult {
    let request = QueryRequest::new(domain, kind, "8.8.8.8:53", Duration::from_secs(5)).unwrap();
    QueryResult::answered(
        &request,
        records.iter().map(|r| r.to_string()).collect(),
        Duration::from_millis(15),
        "NOERROR",
    )
}

pub fn failed(domain: &str, kind: RecordKind, failure: DomainError) -> QueryResult {
    let request = QueryRequest::new(domain, kind, "8.8.8.8:53", Duration::from_secs(5)).unwrap();
    QueryResult::failed(&request, failure, Duration::from_secs(5))
}

// ============================================================================
// Mock RecordLookup
// ============================================================================

#[derive(Clone, Default)]
pub struct MockRecordLookup {
    records: Arc<RwLock<HashMap<(String, RecordKind), Vec<String>>>>,
    failure: Arc<RwLock<Option<DomainError>>>,
    calls: Arc<RwLock<Vec<QueryRequest>>>,
}

impl MockRecordLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_records(&self, domain: &str, kind: RecordKind, records: &[&str]) {
        self.records.write().await.insert(
            (domain.to_string(), kind),
            records.iter().map(|r| r.to_string()).collect(),
        );
    }

    pub async fn set_failure(&self, failure: Option<DomainError>) {
        *self.failure.write().await = failure;
    }

    pub async fn calls(&self) -> Vec<QueryRequest> {
        self.calls.read().await.clone()
    }
}

#[async_trait]
impl RecordLookup for MockRecordLookup {
    async fn lookup(&self, request: &QueryRequest) -> QueryResult {
        self.calls.write().await.push(request.clone());

        if let Some(failure) = self.failure.read().await.clone() {
            return QueryResult::failed(request, failure, request.timeout);
        }

        let records = self
            .records
            .read()
            .await
            .get(&(request.domain.to_string(), request.kind))
            .cloned()
            .unwrap_or_default();

        QueryResult::answered(request, records, Duration::from_millis(10), "NOERROR")
    }
}

// ============================================================================
// Static ServerSource
// ============================================================================

pub struct StaticServerSource(pub Vec<String>);

impl ServerSource for StaticServerSource {
    fn list_servers(&self) -> Vec<String> {
        self.0.clone()
    }
}
