use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{bail, Context};
use serde::Deserialize;

pub const CONFIG_FILE_NAME: &str = "employee_admin.toml";
const CONFIG_DIR_NAME: &str = "employee-admin";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub server_url: String,
    pub request_timeout_secs: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:8000".into(),
            request_timeout_secs: None,
        }
    }
}

impl Settings {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

/// Values given on the command line; they win over every other layer.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub config_path: Option<PathBuf>,
    pub server_url: Option<String>,
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    server_url: Option<String>,
    request_timeout_secs: Option<u64>,
}

pub fn load_settings(overrides: &SettingsOverrides) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    match &overrides.config_path {
        Some(path) => {
            if !path.is_file() {
                bail!("config file '{}' does not exist", path.display());
            }
            apply_file(&mut settings, path)?;
        }
        None => {
            if let Some(path) = default_config_paths().into_iter().find(|p| p.is_file()) {
                apply_file(&mut settings, &path)?;
            }
        }
    }

    apply_env(&mut settings, |name| std::env::var(name).ok());
    apply_overrides(&mut settings, overrides);

    tracing::debug!(?settings, "resolved settings");
    Ok(settings)
}

fn default_config_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE_NAME)];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME));
    }
    paths
}

fn apply_file(settings: &mut Settings, path: &Path) -> anyhow::Result<()> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file '{}'", path.display()))?;
    let file_cfg: FileSettings = toml::from_str(&raw)
        .with_context(|| format!("failed to parse config file '{}'", path.display()))?;

    if let Some(v) = file_cfg.server_url {
        settings.server_url = v;
    }
    if let Some(v) = file_cfg.request_timeout_secs {
        settings.request_timeout_secs = Some(v);
    }
    Ok(())
}

fn apply_env(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("EMPLOYEE_ADMIN_SERVER_URL").filter(|v| !v.trim().is_empty()) {
        settings.server_url = v;
    }
    if let Some(v) = lookup("EMPLOYEE_ADMIN_REQUEST_TIMEOUT_SECS") {
        match v.trim().parse::<u64>() {
            Ok(parsed) => settings.request_timeout_secs = Some(parsed),
            Err(err) => tracing::warn!(
                value = %v,
                "ignoring EMPLOYEE_ADMIN_REQUEST_TIMEOUT_SECS: {err}"
            ),
        }
    }
}

fn apply_overrides(settings: &mut Settings, overrides: &SettingsOverrides) {
    if let Some(v) = &overrides.server_url {
        settings.server_url = v.clone();
    }
    if let Some(v) = overrides.request_timeout_secs {
        settings.request_timeout_secs = Some(v);
    }
}
