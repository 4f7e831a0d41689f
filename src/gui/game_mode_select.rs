//! Game mode picker
//!
//! Raised by "Start Game". Each entry carries a help line for the linked
//! help window and asks the host to start its mode when clicked.

use std::rc::Rc;

use super::{MenuWindow, cancel_overlay};
use crate::config::SKIN_LUNA;
use crate::error::Result;
use crate::graphics::Graphics;
use crate::scene::SceneHost;
use crate::settings::GameMode;
use crate::sound::Sound;
use crate::window::{NavKey, TextSelection, Window};

pub struct GameModeSelectWindow {
    window: Window,
    modes: Vec<GameMode>,
}

impl GameModeSelectWindow {
    pub fn new(
        graphics: Rc<Graphics>,
        sound: Rc<dyn Sound>,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    ) -> Result<Self> {
        let mut window = Window::new(graphics, sound, x, y, width, height)?;
        window.set_label("GameModeSelect");
        window.change_skin(SKIN_LUNA)?;

        let mut select = GameModeSelectWindow {
            window,
            modes: Vec::new(),
        };
        select.create_selections()?;
        Ok(select)
    }

    fn create_selections(&mut self) -> Result<()> {
        let vocab = self.window.graphics().vocab.clone();
        self.add_mode(GameMode::Traditional, &vocab.traditional, &vocab.traditional_help)?;
        self.add_mode(GameMode::BattlePuno, &vocab.battle_puno, &vocab.battle_puno_help)?;
        self.add_mode(GameMode::DeathMatch, &vocab.death_match, &vocab.death_match_help)?;
        Ok(())
    }

    fn add_mode(&mut self, mode: GameMode, text: &str, help: &str) -> Result<()> {
        self.window.add_text_selection(
            TextSelection::new(text)
                .help(help)
                .handler(move |host| host.start_game(mode)),
        )?;
        self.modes.push(mode);
        Ok(())
    }

    /// Mode under the cursor
    pub fn selected_mode(&self) -> Option<GameMode> {
        self.window
            .selected()
            .and_then(|index| self.modes.get(index).copied())
    }
}

impl MenuWindow for GameModeSelectWindow {
    fn window(&self) -> &Window {
        &self.window
    }

    fn window_mut(&mut self) -> &mut Window {
        &mut self.window
    }

    fn handle_key(&mut self, key: NavKey, host: &mut dyn SceneHost) -> bool {
        if key == NavKey::Cancel && self.window.is_active() {
            cancel_overlay(&self.window, host);
            return true;
        }
        self.window.handle_key(key, host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphics::test_support::graphics;
    use crate::gui::HelpWindow;
    use crate::scene::{SceneRequest, SceneRequests};
    use crate::sound::{Cue, SoundBoard};
    use std::cell::RefCell;

    fn mode_select() -> (GameModeSelectWindow, Rc<SoundBoard>) {
        let sound = Rc::new(SoundBoard::new());
        let mut select =
            GameModeSelectWindow::new(graphics(), sound.clone(), 200.0, 150.0, 400.0, 180.0)
                .unwrap();
        select.activate();
        (select, sound)
    }

    #[test]
    fn test_uses_luna_skin_and_three_modes() {
        let (select, _) = mode_select();
        assert_eq!(select.window().skin_name(), SKIN_LUNA);
        assert_eq!(select.window().selections_len(), 3);
        assert_eq!(select.selected_mode(), None);
    }

    #[test]
    fn test_confirm_starts_selected_mode() {
        let (mut select, _) = mode_select();
        let mut host = SceneRequests::new();
        select.handle_key(NavKey::Down, &mut host);
        select.handle_key(NavKey::Down, &mut host);
        assert_eq!(select.selected_mode(), Some(GameMode::BattlePuno));
        select.handle_key(NavKey::Confirm, &mut host);
        assert_eq!(host.drain(), vec![SceneRequest::StartGame(GameMode::BattlePuno)]);
    }

    #[test]
    fn test_selection_shows_mode_help() {
        let (mut select, _) = mode_select();
        let help = Rc::new(RefCell::new(
            HelpWindow::new(graphics(), Rc::new(SoundBoard::new()), 0.0, 0.0, 800.0, 80.0)
                .unwrap(),
        ));
        select.window_mut().set_help_window(help.clone());
        select.window_mut().select(2);
        assert_eq!(
            help.borrow().text(),
            vec![crate::config::Vocab::default().death_match_help]
        );
    }

    #[test]
    fn test_cancel_closes() {
        let (mut select, sound) = mode_select();
        let mut host = SceneRequests::new();
        assert!(select.handle_key(NavKey::Cancel, &mut host));
        assert_eq!(host.drain(), vec![SceneRequest::CloseOverlay]);
        assert_eq!(sound.played(), vec![Cue::Cancel]);
    }
}
