use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{bail, Context};
use calendar_core::ThemeKind;
use serde::Deserialize;

pub const DEFAULT_CONFIG_FILE: &str = "calendar.toml";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub font_path: PathBuf,
    pub window_width: f32,
    pub window_height: f32,
    pub window_title: String,
    pub frame_rate: u32,
    pub theme: ThemeKind,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            font_path: PathBuf::from("OpenSans.ttf"),
            window_width: 800.0,
            window_height: 600.0,
            window_title: "Calendar".into(),
            frame_rate: 60,
            theme: ThemeKind::Light,
        }
    }
}

impl Settings {
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.frame_rate.max(1)))
    }
}

/// Keys accepted in `calendar.toml`. Unknown keys are rejected.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    font_path: Option<PathBuf>,
    window_width: Option<f32>,
    window_height: Option<f32>,
    window_title: Option<String>,
    frame_rate: Option<u32>,
    theme: Option<ThemeKind>,
}

/// Values taken from the command line; they win over every other layer.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub config_path: Option<PathBuf>,
    pub font_path: Option<PathBuf>,
    pub theme: Option<ThemeKind>,
}

pub fn load_settings(overrides: &Overrides) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    if let Some(path) = &overrides.config_path {
        let file_cfg = read_file_settings(path)?;
        apply_file_settings(&mut settings, file_cfg);
    } else if let Some(path) = default_config_locations().into_iter().find(|p| p.is_file()) {
        match read_file_settings(&path) {
            Ok(file_cfg) => apply_file_settings(&mut settings, file_cfg),
            Err(err) => tracing::warn!(path = %path.display(), "ignoring config file: {err:#}"),
        }
    }

    apply_env_overrides(&mut settings, |name| std::env::var(name).ok());

    if let Some(path) = &overrides.font_path {
        settings.font_path = path.clone();
    }
    if let Some(theme) = overrides.theme {
        settings.theme = theme;
    }

    validate(&settings)?;
    Ok(settings)
}

fn default_config_locations() -> Vec<PathBuf> {
    let mut locations = vec![PathBuf::from(DEFAULT_CONFIG_FILE)];
    if let Some(dir) = dirs::config_dir() {
        locations.push(dir.join("calendar").join(DEFAULT_CONFIG_FILE));
    }
    locations
}

fn read_file_settings(path: &Path) -> anyhow::Result<FileSettings> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file '{}'", path.display()))?;
    toml::from_str(&raw)
        .with_context(|| format!("failed to parse config file '{}'", path.display()))
}

fn apply_file_settings(settings: &mut Settings, file_cfg: FileSettings) {
    if let Some(v) = file_cfg.font_path {
        settings.font_path = v;
    }
    if let Some(v) = file_cfg.window_width {
        settings.window_width = v;
    }
    if let Some(v) = file_cfg.window_height {
        settings.window_height = v;
    }
    if let Some(v) = file_cfg.window_title {
        settings.window_title = v;
    }
    if let Some(v) = file_cfg.frame_rate {
        settings.frame_rate = v;
    }
    if let Some(v) = file_cfg.theme {
        settings.theme = v;
    }
}

fn apply_env_overrides(settings: &mut Settings, var: impl Fn(&str) -> Option<String>) {
    if let Some(v) = var("APP__FONT_PATH").filter(|v| !v.trim().is_empty()) {
        settings.font_path = PathBuf::from(v);
    }
    if let Some(v) = var("APP__THEME") {
        match v.parse::<ThemeKind>() {
            Ok(theme) => settings.theme = theme,
            Err(err) => tracing::warn!("ignoring APP__THEME: {err}"),
        }
    }
}

fn validate(settings: &Settings) -> anyhow::Result<()> {
    if settings.frame_rate == 0 {
        bail!("frame_rate must be at least 1");
    }
    if !(settings.window_width > 0.0 && settings.window_height > 0.0) {
        bail!(
            "window size must be positive, got {}x{}",
            settings.window_width,
            settings.window_height
        );
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
