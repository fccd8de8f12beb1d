//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var and working directory
//! manipulation.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use kosei_config::{ConfigError, KoseiConfig};

#[test]
fn loads_service_and_progress_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[service]
endpoint = "https://review.example.com/api/review"

[progress]
tick_interval_ms = 250
min_step = 2
max_step = 8
cap = 80
reset_delay_ms = 500
"#,
        )?;

        let config: KoseiConfig = Figment::from(Serialized::defaults(KoseiConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.service.endpoint, "https://review.example.com/api/review");
        assert_eq!(config.progress.tick_interval_ms, 250);
        assert_eq!(config.progress.min_step, 2);
        assert_eq!(config.progress.max_step, 8);
        assert_eq!(config.progress.cap, 80);
        assert_eq!(config.progress.reset_delay_ms, 500);
        assert!(config.validate().is_ok());
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[progress]
cap = 70
"#,
        )?;

        let config: KoseiConfig = Figment::from(Serialized::defaults(KoseiConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.progress.cap, 70);
        assert_eq!(config.progress.min_step, 5);
        assert_eq!(config.service.endpoint, "http://localhost:8080/review");
        Ok(())
    });
}

#[test]
fn project_config_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        jail.create_dir(".kosei")?;
        jail.create_file(
            ".kosei/config.toml",
            r#"
[service]
endpoint = "http://127.0.0.1:9000/review"
"#,
        )?;

        let config = KoseiConfig::load().expect("config loads");
        assert_eq!(config.service.endpoint, "http://127.0.0.1:9000/review");
        Ok(())
    });
}

#[test]
fn load_rejects_invalid_step_range() {
    Jail::expect_with(|jail| {
        jail.create_dir(".kosei")?;
        jail.create_file(
            ".kosei/config.toml",
            r#"
[progress]
min_step = 30
max_step = 10
"#,
        )?;

        let err = KoseiConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "progress.min_step"));
        Ok(())
    });
}
