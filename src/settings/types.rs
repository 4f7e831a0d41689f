//! Persisted user settings
//!
//! Audio volumes from the option window and the match rules from the game
//! option window. Serialized as JSON by [`super::SettingsStore`].

use crate::sound::{Channel, Sound};
use serde::{Deserialize, Serialize};

/// Current settings file version
pub const CURRENT_SETTINGS_VERSION: u32 = 1;

/// Root settings file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSettings {
    pub version: u32,
    #[serde(default)]
    pub audio: AudioSettings,
    #[serde(default)]
    pub game: GameOptions,
}

impl Default for UserSettings {
    fn default() -> Self {
        UserSettings {
            version: CURRENT_SETTINGS_VERSION,
            audio: AudioSettings::default(),
            game: GameOptions::default(),
        }
    }
}

/// Channel volumes in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AudioSettings {
    pub master: f32,
    pub bgm: f32,
    pub se: f32,
}

impl Default for AudioSettings {
    fn default() -> Self {
        AudioSettings {
            master: 1.0,
            bgm: 1.0,
            se: 1.0,
        }
    }
}

impl AudioSettings {
    /// Reads the current volumes from a sound collaborator
    pub fn capture(sound: &dyn Sound) -> Self {
        AudioSettings {
            master: sound.volume(Channel::Master),
            bgm: sound.volume(Channel::Bgm),
            se: sound.volume(Channel::Se),
        }
    }

    /// Pushes these volumes into a sound collaborator
    pub fn apply(&self, sound: &dyn Sound) {
        sound.set_volume(Channel::Master, self.master);
        sound.set_volume(Channel::Bgm, self.bgm);
        sound.set_volume(Channel::Se, self.se);
    }
}

/// Game modes offered by the mode select window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    Traditional,
    BattlePuno,
    DeathMatch,
}

/// Match rules adjustable before a game
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameOptions {
    /// Cards each player holds at the start
    pub hand_cards: u32,

    /// Trade / wild chaos / discard all / wild hit cards in the deck
    pub extra_cards: bool,

    /// Starting HP in Battle Puno and Death Match
    pub max_hp: u32,

    /// Score that ends a Battle Puno match
    pub score_goal: u32,
}

impl Default for GameOptions {
    fn default() -> Self {
        GameOptions {
            hand_cards: 7,
            extra_cards: true,
            max_hp: 200,
            score_goal: 500,
        }
    }
}

impl GameOptions {
    pub const HAND_CARDS_RANGE: (u32, u32) = (1, 15);
    pub const MAX_HP_RANGE: (u32, u32) = (50, 500);
    pub const MAX_HP_STEP: u32 = 50;
    pub const SCORE_GOAL_RANGE: (u32, u32) = (100, 1000);
    pub const SCORE_GOAL_STEP: u32 = 100;

    /// Next hand size, wrapping to the minimum after the maximum
    pub fn cycle_hand_cards(&mut self) {
        self.hand_cards = cycle(self.hand_cards, 1, Self::HAND_CARDS_RANGE);
    }

    pub fn toggle_extra_cards(&mut self) {
        self.extra_cards = !self.extra_cards;
    }

    pub fn cycle_max_hp(&mut self) {
        self.max_hp = cycle(self.max_hp, Self::MAX_HP_STEP, Self::MAX_HP_RANGE);
    }

    pub fn cycle_score_goal(&mut self) {
        self.score_goal = cycle(self.score_goal, Self::SCORE_GOAL_STEP, Self::SCORE_GOAL_RANGE);
    }

    /// Pulls every value back into its range
    pub fn clamp_to_ranges(&mut self) {
        let (lo, hi) = Self::HAND_CARDS_RANGE;
        self.hand_cards = self.hand_cards.clamp(lo, hi);
        let (lo, hi) = Self::MAX_HP_RANGE;
        self.max_hp = self.max_hp.clamp(lo, hi);
        let (lo, hi) = Self::SCORE_GOAL_RANGE;
        self.score_goal = self.score_goal.clamp(lo, hi);
    }
}

fn cycle(value: u32, step: u32, (min, max): (u32, u32)) -> u32 {
    let next = value.saturating_add(step);
    if next > max { min } else { next.max(min) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sound::SoundBoard;

    #[test]
    fn test_game_option_defaults() {
        let options = GameOptions::default();
        assert_eq!(options.hand_cards, 7);
        assert!(options.extra_cards);
        assert_eq!(options.max_hp, 200);
        assert_eq!(options.score_goal, 500);
    }

    #[test]
    fn test_cycling_wraps() {
        let mut options = GameOptions {
            hand_cards: 15,
            max_hp: 500,
            score_goal: 900,
            ..Default::default()
        };
        options.cycle_hand_cards();
        options.cycle_max_hp();
        options.cycle_score_goal();
        assert_eq!(options.hand_cards, 1);
        assert_eq!(options.max_hp, 50);
        assert_eq!(options.score_goal, 1000);
        options.cycle_score_goal();
        assert_eq!(options.score_goal, 100);
    }

    #[test]
    fn test_cycling_from_out_of_range_values() {
        let mut options = GameOptions {
            hand_cards: u32::MAX,
            max_hp: u32::MAX - 10,
            score_goal: 0,
            ..Default::default()
        };
        options.cycle_hand_cards();
        options.cycle_max_hp();
        options.cycle_score_goal();
        assert_eq!(options.hand_cards, 1);
        assert_eq!(options.max_hp, 50);
        assert_eq!(options.score_goal, 100);
    }

    #[test]
    fn test_clamp_to_ranges() {
        let mut options = GameOptions {
            hand_cards: 0,
            max_hp: 9000,
            score_goal: 300,
            ..Default::default()
        };
        options.clamp_to_ranges();
        assert_eq!(options.hand_cards, 1);
        assert_eq!(options.max_hp, 500);
        assert_eq!(options.score_goal, 300);
    }

    #[test]
    fn test_audio_capture_and_apply() {
        let board = SoundBoard::new();
        AudioSettings { master: 0.5, bgm: 0.25, se: 0.75 }.apply(&board);
        let captured = AudioSettings::capture(&board);
        assert_eq!(captured, AudioSettings { master: 0.5, bgm: 0.25, se: 0.75 });
    }
}
