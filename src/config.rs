//! UI configuration
//!
//! Display settings, the skin catalog, skin image paths, the icon set and the
//! menu vocabulary are loaded from one JSON file. Every section has defaults,
//! so a missing or broken file still produces a usable UI.

use crate::error::Result;
use crate::skin::SkinRects;
use crate::text::FontSetting;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Skin shipped with every window unless a menu picks another
pub const SKIN_DEFAULT: &str = "default";
pub const SKIN_CELESTIA: &str = "celestia";
pub const SKIN_LUNA: &str = "luna";
pub const SKIN_RARITY: &str = "rarity";

/// Shared layout metrics every window reads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub app_width: f32,
    pub app_height: f32,
    pub padding: f32,
    pub spacing: f32,
    pub line_height: f32,

    /// Frame-rate compensation applied to per-frame animation deltas
    pub speed_factor: f32,

    pub default_font: FontSetting,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        DisplaySettings {
            app_width: 800.0,
            app_height: 600.0,
            padding: 16.0,
            spacing: 8.0,
            line_height: 24.0,
            speed_factor: 1.0,
            default_font: FontSetting::default(),
        }
    }
}

impl DisplaySettings {
    /// X that centers an element of the given width in the app
    pub fn app_center_width(&self, width: f32) -> f32 {
        (self.app_width - width) / 2.0
    }

    /// Y that centers an element of the given height in the app
    pub fn app_center_height(&self, height: f32) -> f32 {
        (self.app_height - height) / 2.0
    }
}

/// Icon sheet layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconSet {
    pub image: String,
    pub path: String,
    pub icon_size: f32,
    pub columns: u32,

    /// Index of the "close" cross icon
    pub xmark: u32,
}

impl Default for IconSet {
    fn default() -> Self {
        IconSet {
            image: "iconset".to_string(),
            path: "assets/img/iconset.png".to_string(),
            icon_size: 24.0,
            columns: 16,
            xmark: 2,
        }
    }
}

/// Menu strings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vocab {
    pub start_game: String,
    pub rules: String,
    pub options: String,
    pub credits: String,
    pub rules_redirect: String,
    pub rules_link: String,
    pub credits_redirect: String,

    /// Empty when the build ships no credits page
    pub credits_link: String,
    pub master_volume: String,
    pub bgm_volume: String,
    pub se_volume: String,
    pub traditional: String,
    pub traditional_help: String,
    pub battle_puno: String,
    pub battle_puno_help: String,
    pub death_match: String,
    pub death_match_help: String,
    pub hand_cards: String,
    pub extra_cards: String,
    pub max_hp: String,
    pub score_goal: String,
    pub on: String,
    pub off: String,
}

impl Default for Vocab {
    fn default() -> Self {
        Vocab {
            start_game: "Start Game".to_string(),
            rules: "Rules".to_string(),
            options: "Options".to_string(),
            credits: "Credits".to_string(),
            rules_redirect: "Open the rules page in your browser?".to_string(),
            rules_link: "https://en.wikipedia.org/wiki/Uno_(card_game)".to_string(),
            credits_redirect: "Open the credits page in your browser?".to_string(),
            credits_link: String::new(),
            master_volume: "Master".to_string(),
            bgm_volume: "BGM".to_string(),
            se_volume: "SE".to_string(),
            traditional: "Traditional".to_string(),
            traditional_help: "Classic rules. First to empty their hand wins.".to_string(),
            battle_puno: "Battle Puno".to_string(),
            battle_puno_help: "Cards deal damage. Reach the score goal to win.".to_string(),
            death_match: "Death Match".to_string(),
            death_match_help: "Cards deal damage. Last player standing wins.".to_string(),
            hand_cards: "Hand Cards".to_string(),
            extra_cards: "Extra Cards".to_string(),
            max_hp: "Max HP".to_string(),
            score_goal: "Score Goal".to_string(),
            on: "On".to_string(),
            off: "Off".to_string(),
        }
    }
}

/// Root config file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub display: DisplaySettings,
    pub skin_rects: SkinRects,

    /// Skin key -> image path
    pub skins: BTreeMap<String, String>,

    pub icons: IconSet,
    pub vocab: Vocab,
}

impl Default for UiConfig {
    fn default() -> Self {
        let skins = [SKIN_DEFAULT, SKIN_CELESTIA, SKIN_LUNA, SKIN_RARITY]
            .into_iter()
            .map(|key| (key.to_string(), format!("assets/img/skin_{}.png", key)))
            .collect();
        UiConfig {
            display: DisplaySettings::default(),
            skin_rects: SkinRects::default(),
            skins,
            icons: IconSet::default(),
            vocab: Vocab::default(),
        }
    }
}

impl UiConfig {
    /// Parses a config file, propagating IO and JSON errors
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: UiConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Loads a config file, falling back to defaults on any error
    pub fn load_from_file(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Failed to load UI config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
