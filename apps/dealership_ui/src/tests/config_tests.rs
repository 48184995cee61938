use super::*;

use std::{
    env,
    time::{SystemTime, UNIX_EPOCH},
};

#[test]
fn adds_scheme_and_strips_trailing_slash() {
    assert_eq!(
        normalize_base_url(" localhost:8000/ ").expect("normalize"),
        "http://localhost:8000"
    );
    assert_eq!(
        normalize_base_url("https://cars.example.com/app//").expect("normalize"),
        "https://cars.example.com/app"
    );
}

#[test]
fn empty_url_falls_back_to_default() {
    assert_eq!(
        normalize_base_url("").expect("normalize"),
        "http://127.0.0.1:8000"
    );
}

#[test]
fn rejects_non_http_schemes() {
    assert!(normalize_base_url("ftp://example.com").is_err());
    assert!(normalize_base_url("http://exa mple.com").is_err());
}

#[test]
fn env_overrides_in_priority_order() {
    let mut settings = Settings::default();
    apply_env(&mut settings, |key| match key {
        "DEALERSHIP_API_URL" => Some("http://first:1".into()),
        "APP__API_BASE_URL" => Some("http://second:2".into()),
        _ => None,
    });
    assert_eq!(settings.api_base_url, "http://second:2");
    assert_eq!(settings.log_filter, "info");
}

#[test]
fn file_values_override_defaults() {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let path = env::temp_dir().join(format!("dealership_ui_config_test_{suffix}.toml"));
    fs::write(
        &path,
        "api_base_url = \"http://dealers.internal:9000\"\nlog_filter = \"debug\"\n",
    )
    .expect("write config");

    let mut settings = Settings::default();
    assert_eq!(apply_file(&mut settings, &path), None);
    assert_eq!(settings.api_base_url, "http://dealers.internal:9000");
    assert_eq!(settings.log_filter, "debug");

    fs::remove_file(path).expect("cleanup");
}

#[test]
fn missing_file_keeps_defaults() {
    let mut settings = Settings::default();
    let warning = apply_file(&mut settings, Path::new("/definitely/not/here/dealership.toml"));
    assert_eq!(warning, None);
    assert_eq!(settings, Settings::default());
}

#[test]
fn unparseable_file_keeps_defaults_and_reports_it() {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let path = env::temp_dir().join(format!("dealership_ui_bad_config_{suffix}.toml"));
    fs::write(&path, "api_base_url = [not toml\n").expect("write config");

    let mut settings = Settings::default();
    let warning = apply_file(&mut settings, &path).expect("parse failure is reported");
    assert!(warning.contains("dealership_ui_bad_config_"));
    assert_eq!(settings, Settings::default());

    fs::remove_file(path).expect("cleanup");
}
