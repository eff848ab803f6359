//! Integration tests for TOML configuration loading.
//!
//! Uses `figment::Jail` for sandboxed working directories and env vars.

use auras_config::{AurasConfig, SessionBackend};
use auras_core::ServiceKind;
use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;

#[test]
fn loads_service_urls_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[services]
auth = "https://auth.auras.dev"
core = "https://core.auras.dev"
"#,
        )?;

        let config: AurasConfig = Figment::from(Serialized::defaults(AurasConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.services.url(ServiceKind::Auth), "https://auth.auras.dev");
        assert_eq!(config.services.url(ServiceKind::Core), "https://core.auras.dev");
        // Untouched services keep their defaults.
        assert_eq!(config.services.url(ServiceKind::Ai), "http://localhost:3003");
        Ok(())
    });
}

#[test]
fn loads_http_and_session_sections() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[http]
timeout_ms = 5000

[session]
backend = "memory"
path = "/tmp/auras-session.json"
"#,
        )?;

        let config: AurasConfig = Figment::from(Serialized::defaults(AurasConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.http.timeout_ms, 5000);
        assert!(config.http.user_agent.starts_with("auras/"));
        assert_eq!(config.session.backend, SessionBackend::Memory);
        assert_eq!(
            config.session.path.as_deref(),
            Some(std::path::Path::new("/tmp/auras-session.json"))
        );
        Ok(())
    });
}

#[test]
fn project_config_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        jail.create_dir(".auras")?;
        jail.create_file(
            ".auras/config.toml",
            r#"
[services]
reports = "http://reports.internal:8080"
"#,
        )?;

        let config = AurasConfig::load().expect("config loads");
        assert_eq!(
            config.services.url(ServiceKind::Reports),
            "http://reports.internal:8080"
        );
        Ok(())
    });
}

#[test]
fn invalid_backend_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[session]
backend = "vault"
"#,
        )?;

        let result: Result<AurasConfig, _> =
            Figment::from(Serialized::defaults(AurasConfig::default()))
                .merge(Toml::file("config.toml"))
                .extract();
        assert!(result.is_err());
        Ok(())
    });
}
