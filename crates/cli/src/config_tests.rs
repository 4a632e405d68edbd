// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use tempfile::TempDir;
use yare::parameterized;

#[test]
fn missing_file_loads_defaults() {
    let temp = TempDir::new().unwrap();
    let config = Config::load(temp.path()).unwrap();

    assert_eq!(config, Config::default());
    assert_eq!(config.api_url, "http://localhost:8000");
    assert_eq!(config.cache.stale_after_secs, 300);
    assert_eq!(config.cache.retry, RetryPolicy::default());
    assert_eq!(config.watch.interval_secs, 5);
    assert_eq!(config.request_timeout(), None);
}

#[test]
fn save_then_load_preserves_values() {
    let temp = TempDir::new().unwrap();
    let home = temp.path().join("nested/home");
    let mut config = Config::default();
    config.set("api_url", "https://api.nextvisa.dev/").unwrap();
    config.set("request_timeout_secs", "20").unwrap();
    config.set("cache.retry.max_retries", "4").unwrap();

    config.save(&home).unwrap();
    let loaded = Config::load(&home).unwrap();

    assert_eq!(loaded, config);
    assert_eq!(loaded.api_url, "https://api.nextvisa.dev");
    assert_eq!(loaded.request_timeout(), Some(Duration::from_secs(20)));
}

#[test]
fn partial_file_fills_in_defaults() {
    let temp = TempDir::new().unwrap();
    fs::write(
        config_path(temp.path()),
        "api_url = \"http://backend:9000\"\n\n[cache.retry]\nmax_retries = 5\n",
    )
    .unwrap();

    let config = Config::load(temp.path()).unwrap();

    assert_eq!(config.api_url, "http://backend:9000");
    assert_eq!(config.cache.retry.max_retries, 5);
    assert_eq!(config.cache.retry.initial_delay_ms, 250);
    assert_eq!(config.cache.stale_after_secs, 300);
}

#[test]
fn malformed_file_is_a_config_error() {
    let temp = TempDir::new().unwrap();
    fs::write(config_path(temp.path()), "api_url = [").unwrap();

    let err = Config::load(temp.path()).unwrap_err();
    assert!(err.to_string().starts_with("config error: failed to parse"));
}

#[test]
fn api_url_override_wins() {
    let config = Config::default().with_api_url_override(Some("http://10.0.0.5:8000".into()));
    assert_eq!(config.api_url, "http://10.0.0.5:8000");
    assert_eq!(
        Config::default().with_api_url_override(None).api_url,
        DEFAULT_API_URL
    );
}

#[parameterized(
    bad_url = { "api_url", "not a url" },
    zero_interval = { "watch.interval_secs", "0" },
    word_for_number = { "cache.stale_after_secs", "five" },
    negative = { "cache.retry.max_delay_secs", "-1" },
    zero_timeout = { "request_timeout_secs", "0" },
)]
fn invalid_values_are_rejected(key: &str, value: &str) {
    let mut config = Config::default();
    let err = config.set(key, value).unwrap_err();
    assert!(matches!(err, Error::InvalidConfigValue { .. }), "{err}");
    assert_eq!(config, Config::default());
}

#[test]
fn unknown_key_is_rejected_with_hint() {
    let err = Config::default().set("theme", "dark").unwrap_err();
    assert!(err.to_string().contains("valid keys are: api_url"));
}

#[test]
fn timeout_can_be_cleared() {
    let mut config = Config::default();
    config.set("request_timeout_secs", "10").unwrap();
    config.set("request_timeout_secs", "none").unwrap();
    assert_eq!(config.request_timeout_secs, None);
}

#[test]
fn store_settings_follow_cache_section() {
    let mut config = Config::default();
    config.set("cache.stale_after_secs", "60").unwrap();
    config.set("cache.retry.initial_delay_ms", "100").unwrap();

    let settings = config.store_settings();
    assert_eq!(settings.applicant_stale_after, Duration::from_secs(60));
    assert_eq!(settings.retry.initial_delay_ms, 100);
    assert_eq!(settings.retry.max_retries, 2);
}

#[test]
fn paths_live_under_home() {
    let home = Path::new("/srv/console");
    assert_eq!(config_path(home), PathBuf::from("/srv/console/config.toml"));
    assert_eq!(session_path(home), PathBuf::from("/srv/console/session"));
}
