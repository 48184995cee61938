use std::{collections::HashMap, fs, path::Path};

use anyhow::{bail, Context};
use url::Url;

pub const DEFAULT_CONFIG_FILE: &str = "dealership.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_base_url: String,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:8000".into(),
            log_filter: "info".into(),
        }
    }
}

/// Defaults, then `dealership.toml` (if present), then environment.
///
/// A config file that exists but does not parse is skipped; the returned
/// warning is meant to be logged once tracing is up.
pub fn load_settings() -> (Settings, Option<String>) {
    let mut settings = Settings::default();
    let warning = apply_file(&mut settings, Path::new(DEFAULT_CONFIG_FILE));
    apply_env(&mut settings, |key| std::env::var(key).ok());
    (settings, warning)
}

fn apply_file(settings: &mut Settings, path: &Path) -> Option<String> {
    let raw = fs::read_to_string(path).ok()?;
    match toml::from_str::<HashMap<String, String>>(&raw) {
        Ok(file_cfg) => {
            if let Some(v) = file_cfg.get("api_base_url") {
                settings.api_base_url = v.clone();
            }
            if let Some(v) = file_cfg.get("log_filter") {
                settings.log_filter = v.clone();
            }
            None
        }
        Err(err) => Some(format!(
            "ignoring unparseable config file {}: {err}",
            path.display()
        )),
    }
}

fn apply_env(settings: &mut Settings, var: impl Fn(&str) -> Option<String>) {
    if let Some(v) = var("DEALERSHIP_API_URL") {
        settings.api_base_url = v;
    }
    if let Some(v) = var("APP__API_BASE_URL") {
        settings.api_base_url = v;
    }
    if let Some(v) = var("APP__LOG_FILTER") {
        settings.log_filter = v;
    }
}

/// Trims, defaults the scheme to `http://`, drops trailing slashes and
/// rejects anything that is not an http(s) URL.
pub fn normalize_base_url(raw: &str) -> anyhow::Result<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(Settings::default().api_base_url);
    }

    let candidate = if raw.contains("://") {
        raw.to_string()
    } else {
        format!("http://{raw}")
    };
    let parsed =
        Url::parse(&candidate).with_context(|| format!("invalid api base url '{raw}'"))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        bail!("api base url must use http or https, got '{}'", parsed.scheme());
    }

    Ok(candidate.trim_end_matches('/').to_string())
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
