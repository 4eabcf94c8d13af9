/// Host-facing settings: preview size limit, banner highlight, viewport
/// background. TOML-based with per-field defaults; a malformed file falls
/// back to defaults rather than failing the preview.
/// Config file: `~/.config/svg-preview/config.toml`

use crate::renderer::ViewportStyle;
use crate::theme::{self, Color};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::{Duration, SystemTime};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    pub max_size: usize,
    pub banner: BannerConfig,
    pub viewport: ViewportConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BannerConfig {
    pub background: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    pub background: String,
    pub checkered: bool,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            max_size: 4 * 1024 * 1024,
            banner: BannerConfig::default(),
            viewport: ViewportConfig::default(),
        }
    }
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self { background: "#ffffe0".into() }
    }
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self { background: "#ffffff".into(), checkered: false }
    }
}

impl PreviewConfig {
    /// Config file path: `~/.config/svg-preview/config.toml`
    pub fn path() -> PathBuf {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        PathBuf::from(home).join(".config").join("svg-preview").join("config.toml")
    }

    /// Load config from file, falling back to defaults.
    pub fn load() -> Self {
        match std::fs::read_to_string(Self::path()) {
            Ok(contents) => Self::from_str(&contents),
            Err(_) => Self::default(),
        }
    }

    /// Parse config from TOML string.
    pub fn from_str(s: &str) -> Self {
        toml::from_str(s).unwrap_or_else(|e| {
            log::warn!("malformed config, using defaults: {e}");
            Self::default()
        })
    }

    /// Banner highlight color; an unparsable hex falls back to light yellow.
    pub fn banner_color(&self) -> Color {
        Color::from_hex(&self.banner.background).unwrap_or(theme::LIGHT_YELLOW)
    }

    pub fn viewport_style(&self) -> ViewportStyle {
        ViewportStyle {
            background: Color::from_hex(&self.viewport.background).unwrap_or(theme::WHITE),
            checkered: self.viewport.checkered,
        }
    }
}

/// Stat-based hot reload for hosts that keep the control alive across many
/// previews. Call `poll` periodically; yields a fresh config on change.
pub struct ConfigWatcher {
    path: PathBuf,
    last_modified: Option<SystemTime>,
    poll_interval: Duration,
    last_check: std::time::Instant,
}

impl ConfigWatcher {
    pub fn new() -> Self {
        Self::with_path(PreviewConfig::path())
    }

    pub fn with_path(path: PathBuf) -> Self {
        let last_modified = std::fs::metadata(&path).ok().and_then(|m| m.modified().ok());
        Self {
            path,
            last_modified,
            poll_interval: Duration::from_secs(2),
            last_check: std::time::Instant::now(),
        }
    }

    pub fn poll(&mut self) -> Option<PreviewConfig> {
        if self.last_check.elapsed() < self.poll_interval {
            return None;
        }
        self.last_check = std::time::Instant::now();

        let modified = std::fs::metadata(&self.path).ok().and_then(|m| m.modified().ok());
        if modified == self.last_modified {
            return None;
        }
        self.last_modified = modified;
        log::debug!("config changed, reloading {}", self.path.display());
        let contents = std::fs::read_to_string(&self.path).unwrap_or_default();
        Some(PreviewConfig::from_str(&contents))
    }
}

impl Default for ConfigWatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = PreviewConfig::default();
        assert_eq!(cfg.max_size, 4 * 1024 * 1024);
        assert_eq!(cfg.banner_color(), theme::LIGHT_YELLOW);
        assert_eq!(cfg.viewport_style().background, theme::WHITE);
        assert!(!cfg.viewport.checkered);
    }

    #[test]
    fn test_parse_empty_toml() {
        let cfg = PreviewConfig::from_str("");
        assert_eq!(cfg.max_size, 4 * 1024 * 1024);
        assert_eq!(cfg.banner.background, "#ffffe0");
    }

    #[test]
    fn test_parse_partial_toml() {
        let cfg = PreviewConfig::from_str(r#"
            max_size = 1048576

            [viewport]
            checkered = true
        "#);
        assert_eq!(cfg.max_size, 1048576);
        assert!(cfg.viewport.checkered);
        // Defaults preserved for unset fields
        assert_eq!(cfg.banner.background, "#ffffe0");
        assert_eq!(cfg.viewport.background, "#ffffff");
    }

    #[test]
    fn test_parse_full_toml() {
        let cfg = PreviewConfig::from_str(r##"
            max_size = 2097152

            [banner]
            background = "#fff8c4"

            [viewport]
            background = "#1a1b26"
            checkered = true
        "##);
        assert_eq!(cfg.max_size, 2097152);
        assert_eq!(cfg.banner_color(), Color { r: 255, g: 248, b: 196 });
        assert_eq!(cfg.viewport_style().background, Color { r: 26, g: 27, b: 38 });
        assert!(cfg.viewport_style().checkered);
    }

    #[test]
    fn test_invalid_toml_falls_back() {
        let cfg = PreviewConfig::from_str("this is not valid toml {{{}}}");
        assert_eq!(cfg.max_size, 4 * 1024 * 1024);
    }

    #[test]
    fn test_bad_hex_color_falls_back() {
        let cfg = PreviewConfig::from_str(r#"
            [banner]
            background = "not-a-color"
        "#);
        assert_eq!(cfg.banner_color(), theme::LIGHT_YELLOW);
    }

    #[test]
    fn test_config_path() {
        let path = PreviewConfig::path();
        assert!(path.to_str().unwrap().ends_with(".config/svg-preview/config.toml"));
    }

    #[test]
    fn test_watcher_within_interval_is_quiet() {
        let mut w = ConfigWatcher::new();
        assert!(w.poll().is_none());
    }

    #[test]
    fn test_watcher_detects_change() {
        let dir = std::env::temp_dir().join("svg_preview_test_watcher");
        let _ = std::fs::create_dir_all(&dir);
        let path = dir.join("config.toml");
        std::fs::write(&path, "max_size = 1000").unwrap();

        let mut w = ConfigWatcher {
            path: path.clone(),
            last_modified: None, // force detection
            poll_interval: Duration::from_millis(0),
            last_check: std::time::Instant::now() - Duration::from_secs(10),
        };
        let cfg = w.poll().unwrap();
        assert_eq!(cfg.max_size, 1000);

        std::thread::sleep(Duration::from_millis(50));
        std::fs::write(&path, "max_size = 2000").unwrap();
        w.last_check = std::time::Instant::now() - Duration::from_secs(10);
        let cfg = w.poll().unwrap();
        assert_eq!(cfg.max_size, 2000);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
