use colored::Color;
use ratcore::{grid::CellState, invariants::CheckLevel};
use ron::{self, extensions::Extensions};
use serde::{Deserialize, Serialize};
use std::{
    fs, io,
    path::{Path, PathBuf},
};

const DEFAULT_SETTINGS: &str = include_str!("./default_settings.ron");

#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read/write settings file: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to parse settings file: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScheme {
    pub wall: String,
    pub open: String,
    pub visited: String,
    pub mouse: String,
    pub exit: String,
}

impl ColorScheme {
    pub fn color_of(&self, state: CellState) -> Color {
        let name = match state {
            CellState::Wall => &self.wall,
            CellState::Open => &self.open,
            CellState::Visited => &self.visited,
            CellState::MouseStart => &self.mouse,
            CellState::Exit => &self.exit,
        };

        name.parse().unwrap_or_else(|_| {
            log::warn!("Unknown color {:?}, using white", name);
            Color::White
        })
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        ColorScheme {
            wall: "bright black".into(),
            open: "white".into(),
            visited: "yellow".into(),
            mouse: "green".into(),
            exit: "red".into(),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub trace: Option<bool>,
    #[serde(default)]
    pub color: Option<bool>,
    #[serde(default)]
    pub log_level: Option<String>,
    #[serde(default)]
    pub deep_checks: Option<bool>,
    #[serde(default)]
    pub color_scheme: Option<ColorScheme>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_trace(mut self, value: bool) -> Self {
        self.trace = Some(value);
        self
    }

    pub fn get_trace(&self) -> bool {
        self.trace.unwrap_or(true)
    }

    pub fn set_color(mut self, value: bool) -> Self {
        self.color = Some(value);
        self
    }

    pub fn get_color(&self) -> bool {
        self.color.unwrap_or_default()
    }

    pub fn set_log_level(mut self, value: impl Into<String>) -> Self {
        self.log_level = Some(value.into());
        self
    }

    pub fn get_log_level(&self) -> log::LevelFilter {
        match self.log_level.as_deref().map(str::parse::<log::LevelFilter>) {
            None => log::LevelFilter::Warn,
            Some(Ok(level)) => level,
            Some(Err(_)) => {
                log::warn!("Invalid log level {:?}, using warn", self.log_level);
                log::LevelFilter::Warn
            }
        }
    }

    pub fn set_deep_checks(mut self, value: bool) -> Self {
        self.deep_checks = Some(value);
        self
    }

    pub fn get_check_level(&self) -> CheckLevel {
        self.deep_checks
            .map(CheckLevel::from_deep)
            .unwrap_or_default()
    }

    pub fn get_color_scheme(&self) -> ColorScheme {
        self.color_scheme.clone().unwrap_or_default()
    }

    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("ratmaze")
            .join("settings.ron")
    }

    pub fn defaults() -> Result<Self, SettingsError> {
        Self::parse(DEFAULT_SETTINGS)
    }

    pub fn parse(s: &str) -> Result<Self, SettingsError> {
        let options = ron::Options::default().with_default_extension(Extensions::IMPLICIT_SOME);
        Ok(options.from_str(s)?)
    }

    /// Loads settings from `path`, falling back to the defaults when there's no such file.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        match fs::read_to_string(path) {
            Ok(s) => Self::parse(&s),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::debug!("No settings at {:?}, using defaults", path);
                Self::defaults()
            }
            Err(err) => Err(err.into()),
        }
    }

    pub fn reset_config(path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_SETTINGS)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_parse() {
        let settings = Settings::defaults().unwrap();
        assert!(settings.get_trace());
        assert!(!settings.get_color());
        assert_eq!(settings.get_log_level(), log::LevelFilter::Warn);
        assert_eq!(settings.deep_checks, None);
        assert_eq!(settings.get_color_scheme(), ColorScheme::default());
    }

    #[test]
    fn implicit_some() {
        let settings = Settings::parse("(trace: false, deep_checks: true)").unwrap();
        assert!(!settings.get_trace());
        assert_eq!(settings.get_check_level(), CheckLevel::Full);
        assert_eq!(settings.color_scheme, None);
    }

    #[test]
    fn builders() {
        let settings = Settings::new()
            .set_trace(false)
            .set_color(true)
            .set_deep_checks(false)
            .set_log_level("debug");
        assert!(!settings.get_trace());
        assert!(settings.get_color());
        assert_eq!(settings.get_check_level(), CheckLevel::Structural);
        assert_eq!(settings.get_log_level(), log::LevelFilter::Debug);
    }

    #[test]
    fn bad_values() {
        assert!(Settings::parse("(trace: 3)").is_err());
        let settings = Settings::parse(r#"(log_level: "loud")"#).unwrap();
        assert_eq!(settings.get_log_level(), log::LevelFilter::Warn);
    }

    #[test]
    fn scheme_colors() {
        let scheme = ColorScheme {
            wall: "blue".into(),
            ..Default::default()
        };
        assert_eq!(scheme.color_of(CellState::Wall), Color::Blue);
        assert_eq!(scheme.color_of(CellState::Exit), Color::Red);
        assert_eq!(scheme.color_of(CellState::Visited), Color::Yellow);
    }

    #[test]
    fn missing_file_means_defaults() {
        let path = std::env::temp_dir().join("ratmaze-no-such-dir/settings.ron");
        assert_eq!(Settings::load(&path).unwrap(), Settings::defaults().unwrap());
    }
}
