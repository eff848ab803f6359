use auras_config::{AurasConfig, SessionBackend};
use auras_core::ServiceKind;
use figment::Jail;

#[test]
fn env_vars_override_defaults() {
    Jail::expect_with(|jail| {
        jail.set_env("AURAS_SERVICES__AI", "http://ai.example:9000");
        jail.set_env("AURAS_HTTP__TIMEOUT_MS", "1500");
        jail.set_env("AURAS_SESSION__BACKEND", "keyring");

        let config = AurasConfig::load().expect("config loads");
        assert_eq!(config.services.url(ServiceKind::Ai), "http://ai.example:9000");
        assert_eq!(config.http.timeout_ms, 1500);
        assert_eq!(config.session.backend, SessionBackend::Keyring);
        Ok(())
    });
}

#[test]
fn env_beats_project_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".auras")?;
        jail.create_file(
            ".auras/config.toml",
            r#"
[services]
auth = "http://from-toml:3001"
"#,
        )?;
        jail.set_env("AURAS_SERVICES__AUTH", "http://from-env:3001");

        let config = AurasConfig::load().expect("config loads");
        assert_eq!(config.services.url(ServiceKind::Auth), "http://from-env:3001");
        Ok(())
    });
}

#[test]
fn scheme_less_url_fails_validation() {
    Jail::expect_with(|jail| {
        jail.set_env("AURAS_SERVICES__NOTES", "notes.internal:3005");

        let err = AurasConfig::load().unwrap_err();
        assert!(err.to_string().contains("services.notes"));
        Ok(())
    });
}

#[test]
fn unrelated_auras_vars_are_ignored() {
    Jail::expect_with(|jail| {
        jail.set_env("AURAS_LOG", "debug");

        let config = AurasConfig::load().expect("config loads");
        assert_eq!(config, AurasConfig::default());
        Ok(())
    });
}
