use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const FILENAME: &str = "config.yaml";
const APP_DIR: &str = "ecodeck";

/// Bounds for `defaults.interval`, in seconds.
pub const MIN_INTERVAL_SECS: u64 = 1;
pub const MAX_INTERVAL_SECS: u64 = 600;

pub const KEYS: &[&str] = &[
    "defaults.autoplay",
    "defaults.interval",
    "defaults.start_slide",
    "defaults.transition",
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defaults: Option<DefaultsConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Start with auto-play on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autoplay: Option<bool>,

    /// Seconds between auto-play advances.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<u64>,

    /// 1-indexed slide to open on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_slide: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition: Option<String>,
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|d| d.join(APP_DIR).join(FILENAME))
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                anyhow::anyhow!("No config found. Run `ecodeck config show` to see defaults.")
            } else {
                anyhow::anyhow!("Failed to read config: {e}")
            }
        })?;
        let config: Config = serde_yaml::from_str(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }

    /// Config from disk, or the empty config when there is none.
    ///
    /// A file that exists but cannot be parsed is reported and ignored.
    pub fn load_or_default() -> Self {
        match Self::path() {
            Ok(path) if path.exists() => Self::load_from(&path).unwrap_or_else(|e| {
                tracing::warn!("ignoring config: {e:#}");
                Self::default()
            }),
            _ => Self::default(),
        }
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let contents = format!("# ecodeck configuration\n{yaml}");
        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let defaults = self.defaults.get_or_insert_with(DefaultsConfig::default);
        match key {
            "defaults.autoplay" => {
                let enabled = match value {
                    "true" | "on" | "yes" => true,
                    "false" | "off" | "no" => false,
                    _ => anyhow::bail!("Invalid autoplay: {value}. Must be 'true' or 'false'."),
                };
                defaults.autoplay = Some(enabled);
            }
            "defaults.interval" => {
                let secs = value
                    .parse::<u64>()
                    .ok()
                    .filter(|s| (MIN_INTERVAL_SECS..=MAX_INTERVAL_SECS).contains(s))
                    .ok_or_else(|| {
                        anyhow::anyhow!(
                            "Invalid interval: {value}. Must be a whole number of seconds between {MIN_INTERVAL_SECS} and {MAX_INTERVAL_SECS}."
                        )
                    })?;
                defaults.interval = Some(secs);
            }
            "defaults.start_slide" => {
                let slide = value
                    .parse::<usize>()
                    .ok()
                    .filter(|n| *n >= 1)
                    .ok_or_else(|| {
                        anyhow::anyhow!("Invalid start_slide: {value}. Must be a slide number (1 or more).")
                    })?;
                defaults.start_slide = Some(slide);
            }
            "defaults.transition" => {
                match value {
                    "slide" | "fade" | "none" => {}
                    _ => anyhow::bail!(
                        "Invalid transition: {value}. Must be 'slide', 'fade', or 'none'."
                    ),
                }
                defaults.transition = Some(value.to_string());
            }
            _ => anyhow::bail!("Unknown config key: {key}. Valid keys: {}", KEYS.join(", ")),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_each_key() {
        let mut config = Config::default();
        config.set("defaults.autoplay", "true").unwrap();
        config.set("defaults.interval", "12").unwrap();
        config.set("defaults.start_slide", "3").unwrap();
        config.set("defaults.transition", "fade").unwrap();
        assert_eq!(
            config.defaults,
            Some(DefaultsConfig {
                autoplay: Some(true),
                interval: Some(12),
                start_slide: Some(3),
                transition: Some("fade".to_string()),
            })
        );
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = Config::default();
        assert!(config.set("defaults.autoplay", "maybe").is_err());
        assert!(config.set("defaults.interval", "0").is_err());
        assert!(config.set("defaults.interval", "601").is_err());
        assert!(config.set("defaults.interval", "7.5").is_err());
        assert!(config.set("defaults.start_slide", "0").is_err());
        assert!(config.set("defaults.transition", "spatial").is_err());
    }

    #[test]
    fn test_set_unknown_key_lists_valid_keys() {
        let err = Config::default()
            .set("defaults.theme", "dark")
            .unwrap_err()
            .to_string();
        assert!(err.contains("Unknown config key: defaults.theme"));
        assert!(err.contains("defaults.interval"));
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(FILENAME);
        let mut config = Config::default();
        config.set("defaults.interval", "9").unwrap();
        config.save_to(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("# ecodeck configuration"));
        assert!(!written.contains("autoplay"));
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_load_missing_file_explains() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_from(&dir.path().join(FILENAME)).unwrap_err();
        assert!(err.to_string().contains("No config found"));
    }

    #[test]
    fn test_load_invalid_yaml_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(FILENAME);
        std::fs::write(&path, "defaults:\n  interval: soon\n").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_empty_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(FILENAME);
        std::fs::write(&path, "{}\n").unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }
}
