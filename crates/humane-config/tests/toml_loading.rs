//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed file and env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use humane_config::HumaneConfig;
use humane_core::enums::{WeekStart, ZoneSetting};

#[test]
fn loads_tracker_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[tracker]
week_starts_on = "sunday"
time_zone = "utc"
prune_dangling_on_repair = false
"#,
        )?;

        let config: HumaneConfig = Figment::from(Serialized::defaults(HumaneConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.tracker.week_starts_on, WeekStart::Sunday);
        assert_eq!(config.tracker.time_zone, ZoneSetting::Utc);
        assert!(!config.tracker.prune_dangling_on_repair);
        Ok(())
    });
}

#[test]
fn loads_backup_and_general_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[backup]
path = "/data/humane-tracker-backup.json"

[general]
default_format = "table"
"#,
        )?;

        let config: HumaneConfig = Figment::from(Serialized::defaults(HumaneConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.backup.path, "/data/humane-tracker-backup.json");
        assert!(config.backup.is_configured());
        assert_eq!(config.general.default_format, "table");
        assert_eq!(config.tracker.week_starts_on, WeekStart::Monday);
        Ok(())
    });
}

#[test]
fn project_config_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".humane")?;
        jail.create_file(
            ".humane/config.toml",
            r#"
[backup]
path = "project-backup.json"
"#,
        )?;

        let config: HumaneConfig = HumaneConfig::figment().extract()?;
        assert_eq!(config.backup.path, "project-backup.json");
        Ok(())
    });
}

#[test]
fn unknown_week_start_is_rejected() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[tracker]
week_starts_on = "wednesday"
"#,
        )?;

        let result: Result<HumaneConfig, _> =
            Figment::from(Serialized::defaults(HumaneConfig::default()))
                .merge(Toml::file("config.toml"))
                .extract();
        assert!(result.is_err());
        Ok(())
    });
}
