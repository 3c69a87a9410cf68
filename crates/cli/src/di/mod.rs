use dnslook_application::ports::{RecordLookup, ServerSource};
use dnslook_application::session::SessionSettings;
use dnslook_application::use_cases::LookupRecordsUseCase;
use dnslook_domain::Config;
use dnslook_infrastructure::dns::DnsClient;
use dnslook_infrastructure::system::SystemServerSource;
use std::sync::Arc;
use tracing::info;

/// Everything the session and the one-shot runner need, wired once.
pub struct Services {
    pub lookup: Arc<LookupRecordsUseCase>,
    pub default_server: String,
    pub settings: SessionSettings,
}

impl Services {
    pub fn new(config: &Config) -> Self {
        let server_source = SystemServerSource::from_config(&config.resolver);
        let default_server = Self::choose_default_server(config, &server_source);

        let client: Arc<dyn RecordLookup> = Arc::new(DnsClient::from_config(&config.resolver));
        let lookup = Arc::new(LookupRecordsUseCase::new(client));

        info!(default_server = %default_server, "DNS services initialized");

        Self {
            lookup,
            settings: SessionSettings::from_config(config, default_server.clone()),
            default_server,
        }
    }

    /// An explicit server wins; otherwise the first system server.
    fn choose_default_server(config: &Config, source: &dyn ServerSource) -> String {
        match config.resolver.server.as_deref().map(str::trim) {
            Some(server) if !server.is_empty() => server.to_string(),
            _ => source.default_server(),
        }
    }
}
