use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::deck::ShellOptions;
use crate::error::{AppError, AppResult};
use crate::motion::{DEFAULT_TIMING, Easing, Timing};

const MIN_STAGE_WIDTH: u16 = 20;
const MIN_FRAME_INTERVAL_MS: u64 = 4;
const MAX_DURATION_MS: u64 = 10_000;

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub deck: DeckConfig,
    pub motion: MotionConfig,
    pub keymap: KeymapConfig,
    pub catalog: CatalogConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DeckConfig {
    /// Widest the slide stage may grow, in cells.
    pub stage_max_width: u16,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            stage_max_width: 110,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MotionConfig {
    pub enabled: bool,
    pub frame_interval_ms: u64,
    pub default_duration_ms: u64,
    pub default_easing: String,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            frame_interval_ms: 16,
            default_duration_ms: duration_ms(DEFAULT_TIMING.duration),
            default_easing: DEFAULT_TIMING.easing.id().to_string(),
        }
    }
}

impl MotionConfig {
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }

    pub fn default_timing(&self) -> Timing {
        Timing {
            duration: Duration::from_millis(self.default_duration_ms),
            easing: Easing::parse(&self.default_easing).unwrap_or(DEFAULT_TIMING.easing),
        }
    }

    pub fn shell_options(&self) -> ShellOptions {
        ShellOptions {
            motion_enabled: self.enabled,
            default_timing: self.default_timing(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeymapConfig {
    pub preset: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            preset: "default".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct CatalogConfig {
    pub decks_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LogConfig {
    pub file: Option<PathBuf>,
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: None,
            level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn load() -> AppResult<Self> {
        let Some(path) = default_config_path() else {
            return Ok(Self::default());
        };
        Self::load_from_path(path)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        if !path.is_file() {
            return Err(AppError::invalid_argument(format!(
                "config path is not a regular file: {}",
                path.display()
            )));
        }

        let raw = fs::read_to_string(path).map_err(|source| {
            AppError::io_with_context(source, format!("failed to read config: {}", path.display()))
        })?;
        let parsed =
            toml::from_str::<Self>(&raw).map_err(|source| AppError::config_parse(path, source))?;
        Ok(parsed.sanitized())
    }

    fn sanitized(mut self) -> Self {
        self.deck.stage_max_width = self.deck.stage_max_width.max(MIN_STAGE_WIDTH);
        self.motion.frame_interval_ms = self.motion.frame_interval_ms.max(MIN_FRAME_INTERVAL_MS);
        self.motion.default_duration_ms = self.motion.default_duration_ms.min(MAX_DURATION_MS);
        if Easing::parse(&self.motion.default_easing).is_none() {
            self.motion.default_easing = MotionConfig::default().default_easing;
        }
        if self.keymap.preset.trim().is_empty() {
            self.keymap.preset = KeymapConfig::default().preset;
        }
        if self.log.level.trim().is_empty() {
            self.log.level = LogConfig::default().level;
        }
        self
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    if let Some(explicit) = std::env::var_os("DECK_CONFIG_PATH")
        && !explicit.is_empty()
    {
        return Some(PathBuf::from(explicit));
    }

    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME")
        && !xdg.is_empty()
    {
        return Some(PathBuf::from(xdg).join("deck").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME")
        && !home.is_empty()
    {
        return Some(
            PathBuf::from(home)
                .join(".config")
                .join("deck")
                .join("config.toml"),
        );
    }
    if let Some(appdata) = std::env::var_os("APPDATA")
        && !appdata.is_empty()
    {
        return Some(PathBuf::from(appdata).join("deck").join("config.toml"));
    }
    None
}

fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
