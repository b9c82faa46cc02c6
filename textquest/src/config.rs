use crate::error::ConfigError;
use crate::game::{DEFAULT_PROMPT, DEFAULT_WIDTH};
use crate::rendering::MIN_WIDTH;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub world_file: Option<PathBuf>, // e.g. "worlds/internship.yaml"
    pub color: bool,
    pub width: usize,
    pub prompt: String,
    pub log_filter: String, // e.g. "textquest=debug"
}

impl Default for Config {
    fn default() -> Self {
        Self {
            world_file: None,
            color: true,
            width: DEFAULT_WIDTH,
            prompt: DEFAULT_PROMPT.to_string(),
            log_filter: "warn".to_string(),
        }
    }
}

impl Config {
    /// Reads a TOML file. Keys that are missing keep their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg: Self = toml::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(cfg.clamped())
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_env()
    }

    /// Applies `TEXTQUEST_*` variables (and a `.env` file, if present) on top
    /// of `self`.
    pub fn with_env(self) -> Result<Self, ConfigError> {
        let _ = dotenvy::from_filename(".env");
        self.overlay(|key| std::env::var(key).ok())
    }

    fn overlay(mut self, var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        if let Some(v) = var("TEXTQUEST_WORLD") {
            self.world_file = Some(PathBuf::from(v));
        }
        if let Some(v) = var("TEXTQUEST_COLOR") {
            self.color = parse_bool(&v).ok_or_else(|| ConfigError::InvalidEnv("TEXTQUEST_COLOR".into(), v))?;
        }
        if let Some(v) = var("TEXTQUEST_WIDTH") {
            self.width = v
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidEnv("TEXTQUEST_WIDTH".into(), v))?;
        }
        if let Some(v) = var("TEXTQUEST_PROMPT") {
            self.prompt = v;
        }
        if let Some(v) = var("TEXTQUEST_LOG") {
            self.log_filter = v;
        }
        Ok(self.clamped())
    }

    fn clamped(mut self) -> Self {
        if self.width < MIN_WIDTH {
            tracing::warn!(width = self.width, min = MIN_WIDTH, "width too small, clamping");
            self.width = MIN_WIDTH;
        }
        self
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults() {
        let cfg = Config::default();
        assert!(cfg.color);
        assert_eq!(cfg.width, 80);
        assert_eq!(cfg.prompt, "> ");
        assert_eq!(cfg.log_filter, "warn");
        assert!(cfg.world_file.is_none());
    }

    #[test]
    fn load_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("textquest.toml");
        std::fs::write(&path, "color = false\nworld_file = \"my.yaml\"\n").unwrap();

        let cfg = Config::load(&path).unwrap();
        assert!(!cfg.color);
        assert_eq!(cfg.world_file, Some(PathBuf::from("my.yaml")));
        assert_eq!(cfg.width, 80);
    }

    #[test]
    fn load_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Config::load(dir.path().join("missing.toml")),
            Err(ConfigError::Read { .. })
        ));

        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "width = \"wide\"\n").unwrap();
        assert!(matches!(Config::load(&path), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn narrow_width_is_clamped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("narrow.toml");
        std::fs::write(&path, "width = 5\n").unwrap();
        assert_eq!(Config::load(&path).unwrap().width, MIN_WIDTH);
    }

    #[test]
    fn env_overrides() {
        let cfg = Config::default()
            .overlay(vars(&[
                ("TEXTQUEST_WORLD", "/tmp/w.yaml"),
                ("TEXTQUEST_COLOR", "off"),
                ("TEXTQUEST_WIDTH", " 100 "),
                ("TEXTQUEST_PROMPT", "? "),
                ("TEXTQUEST_LOG", "debug"),
            ]))
            .unwrap();

        assert_eq!(cfg.world_file, Some(PathBuf::from("/tmp/w.yaml")));
        assert!(!cfg.color);
        assert_eq!(cfg.width, 100);
        assert_eq!(cfg.prompt, "? ");
        assert_eq!(cfg.log_filter, "debug");
    }

    #[test]
    fn malformed_env() {
        let err = Config::default().overlay(vars(&[("TEXTQUEST_WIDTH", "wide")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnv(k, v) if k == "TEXTQUEST_WIDTH" && v == "wide"));

        let err = Config::default().overlay(vars(&[("TEXTQUEST_COLOR", "maybe")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnv(k, _) if k == "TEXTQUEST_COLOR"));
    }
}
