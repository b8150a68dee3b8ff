use log::{warn, Level};
use serde::Deserialize;
use thiserror::Error;

use crate::cipher::state::{PuzzleError, PuzzleState, DEFAULT_TARGET, DEFAULT_TILES};

/// Id of the inline `<script type="application/json">` holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid site config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unsolvable cipher: {0}")]
    Puzzle(#[from] PuzzleError),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub target_word: String,
    pub tiles: String,
    pub unlock_delay_ms: u32,
    pub loader_ms: u32,
    pub video_url: String,
    pub carousel_images: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            target_word: DEFAULT_TARGET.to_string(),
            tiles: DEFAULT_TILES.to_string(),
            unlock_delay_ms: 900,
            loader_ms: 1400,
            video_url: "https://www.youtube.com/embed/ZCbuEQKNwzE?autoplay=1&mute=0".to_string(),
            carousel_images: (1..=6).map(|i| format!("/images/img{}.jpeg", i)).collect(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(raw)?;
        config.puzzle()?;
        Ok(config)
    }

    /// Reads overrides from the page, falling back to defaults.
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match raw {
            Some(raw) if !raw.trim().is_empty() => Self::from_json(&raw).unwrap_or_else(|e| {
                warn!("{}, using defaults", e);
                Self::default()
            }),
            _ => Self::default(),
        }
    }

    pub fn puzzle(&self) -> Result<PuzzleState, PuzzleError> {
        PuzzleState::new(&self.target_word, &self.tiles)
    }
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
