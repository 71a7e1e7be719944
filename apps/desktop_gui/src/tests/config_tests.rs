use super::*;

use std::{
    collections::HashMap,
    env,
    time::{SystemTime, UNIX_EPOCH},
};

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| vars.get(name).cloned()
}

fn temp_config(contents: &str) -> PathBuf {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let dir = env::temp_dir().join(format!("album_desk_config_test_{suffix}"));
    fs::create_dir_all(&dir).expect("temp dir");
    let path = dir.join(CONFIG_FILE_NAME);
    fs::write(&path, contents).expect("write config");
    path
}

#[test]
fn defaults_point_at_placeholder_api_without_timeout() {
    let settings = Settings::default();
    assert_eq!(settings.api_base_url, "https://jsonplaceholder.typicode.com");
    assert_eq!(settings.default_user_id, UserId(1));
    assert_eq!(settings.request_timeout(), None);
    assert_eq!(settings.log_filter, "info");
}

#[test]
fn file_values_override_defaults() {
    let mut settings = Settings::default();
    apply_file(
        &mut settings,
        r#"
api_base_url = "http://127.0.0.1:3000"
default_user_id = 4
request_timeout_secs = 15
"#,
    )
    .expect("valid file");

    assert_eq!(settings.api_base_url, "http://127.0.0.1:3000");
    assert_eq!(settings.default_user_id, UserId(4));
    assert_eq!(settings.request_timeout(), Some(Duration::from_secs(15)));
    assert_eq!(settings.log_filter, "info");
}

#[test]
fn unknown_file_keys_are_rejected() {
    let mut settings = Settings::default();
    assert!(apply_file(&mut settings, "bind_addr = \"0.0.0.0:1\"").is_err());
}

#[test]
fn env_overrides_file_and_skips_unparseable_numbers() {
    let mut settings = Settings::default();
    apply_file(&mut settings, "default_user_id = 4").expect("valid file");

    apply_env(
        &mut settings,
        env_from(&[
            ("ALBUMS_API_URL", "http://legacy.example"),
            ("APP__API_BASE_URL", "http://preferred.example"),
            ("APP__DEFAULT_USER_ID", "not-a-number"),
            ("APP__REQUEST_TIMEOUT_SECS", "30"),
            ("APP__LOG_FILTER", "debug"),
        ]),
    );

    assert_eq!(settings.api_base_url, "http://preferred.example");
    assert_eq!(settings.default_user_id, UserId(4));
    assert_eq!(settings.request_timeout_secs, Some(30));
    assert_eq!(settings.log_filter, "debug");
}

#[test]
fn zero_timeout_means_no_timeout() {
    let settings = Settings {
        request_timeout_secs: Some(0),
        ..Settings::default()
    };
    assert_eq!(settings.request_timeout(), None);
}

#[test]
fn explicit_file_and_cli_url_are_layered() {
    let path = temp_config("default_user_id = 9\napi_base_url = \"http://from-file.example\"\n");

    let settings =
        load_settings(Some(&path), Some("http://from-cli.example")).expect("load settings");

    assert_eq!(settings.api_base_url, "http://from-cli.example");
    assert_eq!(settings.default_user_id, UserId(9));

    fs::remove_dir_all(path.parent().expect("parent")).expect("cleanup");
}

#[test]
fn missing_explicit_file_is_an_error() {
    let path = env::temp_dir().join("album_desk_config_test_missing").join(CONFIG_FILE_NAME);
    let err = load_settings(Some(&path), None).expect_err("must fail");
    assert!(err.to_string().contains("failed to read config file"));
}
