use figment::Jail;
use kosei_config::{ConfigError, KoseiConfig};

#[test]
fn env_overrides_endpoint() {
    Jail::expect_with(|jail| {
        jail.set_env("KOSEI_SERVICE__ENDPOINT", "http://review.internal:8080/review");

        let config = KoseiConfig::load().expect("config loads");
        assert_eq!(config.service.endpoint, "http://review.internal:8080/review");
        Ok(())
    });
}

#[test]
fn env_beats_project_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".kosei")?;
        jail.create_file(
            ".kosei/config.toml",
            r#"
[progress]
tick_interval_ms = 250
"#,
        )?;
        jail.set_env("KOSEI_PROGRESS__TICK_INTERVAL_MS", "100");

        let config = KoseiConfig::load().expect("config loads");
        assert_eq!(config.progress.tick_interval_ms, 100);
        Ok(())
    });
}

#[test]
fn env_with_bad_endpoint_fails_validation() {
    Jail::expect_with(|jail| {
        jail.set_env("KOSEI_SERVICE__ENDPOINT", "not a url");

        let err = KoseiConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        Ok(())
    });
}
