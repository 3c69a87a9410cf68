use dnslook_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}

/// Called once the subscriber exists, so the summary is not lost.
pub fn log_config(config_path: Option<&str>, config: &Config) {
    info!(
        config_file = config_path.unwrap_or("default"),
        resolv_conf = %config.resolver.resolv_conf,
        server = config.resolver.server.as_deref().unwrap_or("system"),
        query_timeout_ms = config.resolver.query_timeout_ms,
        tcp_fallback = config.resolver.tcp_fallback,
        debounce_ms = config.session.debounce_ms,
        "Configuration loaded"
    );
}
