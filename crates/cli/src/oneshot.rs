use crate::di::Services;
use dnslook_domain::{Outcome, QueryRequest, RecordKind};

/// Runs a single lookup and prints it. Returns whether it succeeded.
pub async fn run(services: &Services, domain: &str, kind: RecordKind) -> anyhow::Result<bool> {
    let request = QueryRequest::new(
        domain,
        kind,
        &services.default_server,
        services.settings.query_timeout,
    )?;

    let result = services.lookup.execute(request).await;

    println!(
        ";; {} {} @{} ({:.2?})",
        result.domain, result.kind, result.server, result.latency
    );

    match result.outcome() {
        Outcome::Records(records) => {
            for record in records {
                println!("{}", record);
            }
            Ok(true)
        }
        Outcome::NoRecords => {
            println!(
                ";; no records ({})",
                result.response_code.unwrap_or("NOERROR")
            );
            Ok(true)
        }
        Outcome::Failed(error) => {
            eprintln!("Error: {}", error);
            Ok(false)
        }
    }
}
