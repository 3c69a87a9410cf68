//! # dnslook
//!
//! Interactive DNS lookup tool. With a domain argument it runs one lookup
//! and exits.

use clap::Parser;
use dnslook_application::session::Session;
use dnslook_domain::{CliOverrides, RecordKind};
use tracing::info;

mod bootstrap;
mod di;
mod interactive;
mod oneshot;

#[derive(Parser)]
#[command(name = "dnslook")]
#[command(version)]
#[command(about = "Interactive DNS lookup tool")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server (host:port, or a bare IP for port 53)
    #[arg(short = 's', long, value_name = "HOST:PORT")]
    server: Option<String>,

    /// Query timeout in milliseconds
    #[arg(long, value_name = "MS")]
    timeout_ms: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Record type for one-shot mode and the initial selection
    #[arg(short = 't', long = "type", default_value = "A")]
    kind: RecordKind,

    /// Look up this domain once and exit
    domain: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        server: cli.server.clone(),
        timeout_ms: cli.timeout_ms,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);
    bootstrap::log_config(cli.config.as_deref(), &config);

    info!("Starting dnslook v{}", env!("CARGO_PKG_VERSION"));

    let services = di::Services::new(&config);

    if let Some(domain) = cli.domain.as_deref() {
        if !oneshot::run(&services, domain, cli.kind).await? {
            std::process::exit(1);
        }
        return Ok(());
    }

    let mut session = Session::new(services.settings.clone());
    session.select_kind(cli.kind);

    interactive::run(session, services.lookup).await
}
