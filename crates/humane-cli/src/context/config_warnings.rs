use humane_config::HumaneConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &HumaneConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &HumaneConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.backup.is_configured() && has_env_prefix(&env_keys, "HUMANE_BACKUP") {
        warnings.push(
            "Backup path appears unset while HUMANE_BACKUP* env vars exist. Use double underscores (example: HUMANE_BACKUP__PATH)."
                .to_string(),
        );
    }

    if has_env_prefix(&env_keys, "HUMANE_TRACKER_")
        && !has_env_prefix(&env_keys, "HUMANE_TRACKER__")
    {
        warnings.push(
            "HUMANE_TRACKER_* env vars are ignored. Use double underscores (example: HUMANE_TRACKER__TIME_ZONE)."
                .to_string(),
        );
    }

    warnings
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}
