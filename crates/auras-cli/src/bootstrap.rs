use anyhow::Context;
use auras_config::AurasConfig;
use auras_services::Services;

/// Load configuration (`.env`, TOML files, `AURAS_*` environment).
pub fn load_config() -> anyhow::Result<AurasConfig> {
    AurasConfig::load_with_dotenv().context("failed to load auras configuration")
}

/// Open the configured session store and build every service.
pub fn build_services(config: &AurasConfig) -> anyhow::Result<Services> {
    let services = Services::from_config(config).context("failed to initialize services")?;
    tracing::debug!(
        backend = services.session().backend_name(),
        authenticated = services.session().is_authenticated(),
        "services ready"
    );
    Ok(services)
}
