//! Title screen menu
//!
//! Four centered entries on the celestia skin: Start Game, Rules, Options
//! and Credits.

use std::rc::Rc;

use super::MenuWindow;
use crate::config::SKIN_CELESTIA;
use crate::error::Result;
use crate::graphics::Graphics;
use crate::scene::Overlay;
use crate::sound::{Cue, Sound};
use crate::window::{Align, TextSelection, Window};

pub struct TitleMenuWindow {
    window: Window,
}

impl TitleMenuWindow {
    pub fn new(
        graphics: Rc<Graphics>,
        sound: Rc<dyn Sound>,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    ) -> Result<Self> {
        let mut window = Window::new(graphics, sound, x, y, width, height)?;
        window.set_label("TitleMenu");
        window.change_skin(SKIN_CELESTIA)?;

        let mut menu = TitleMenuWindow { window };
        menu.add_start_game()?;
        menu.add_rules()?;
        menu.add_options()?;
        menu.add_credits()?;
        Ok(menu)
    }

    fn add_start_game(&mut self) -> Result<()> {
        let text = self.window.graphics().vocab.start_game.clone();
        self.window.add_text_selection(
            TextSelection::new(text)
                .align(Align::Center)
                .handler(|host| host.raise_overlay(Overlay::GameModeSelect)),
        )?;
        Ok(())
    }

    fn add_rules(&mut self) -> Result<()> {
        let vocab = &self.window.graphics().vocab;
        let (text, prompt, link) = (
            vocab.rules.clone(),
            vocab.rules_redirect.clone(),
            vocab.rules_link.clone(),
        );
        self.add_link(text, prompt, link)
    }

    fn add_options(&mut self) -> Result<()> {
        let text = self.window.graphics().vocab.options.clone();
        let sound = Rc::clone(self.window.sound());
        self.window.add_text_selection(
            TextSelection::new(text)
                .align(Align::Center)
                .handler(move |host| {
                    sound.play(Cue::Ok);
                    host.raise_overlay(Overlay::Options);
                }),
        )?;
        Ok(())
    }

    fn add_credits(&mut self) -> Result<()> {
        let vocab = &self.window.graphics().vocab;
        let (text, prompt, link) = (
            vocab.credits.clone(),
            vocab.credits_redirect.clone(),
            vocab.credits_link.clone(),
        );
        self.add_link(text, prompt, link)
    }

    /// Item that opens `link` after confirmation; disabled without a link
    fn add_link(&mut self, text: String, prompt: String, link: String) -> Result<()> {
        let selection = TextSelection::new(text).align(Align::Center);
        let selection = if link.is_empty() {
            selection.disabled()
        } else {
            selection.handler(move |host| host.confirm_and_open(&prompt, &link))
        };
        self.window.add_text_selection(selection)?;
        Ok(())
    }
}

impl MenuWindow for TitleMenuWindow {
    fn window(&self) -> &Window {
        &self.window
    }

    fn window_mut(&mut self) -> &mut Window {
        &mut self.window
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UiConfig;
    use crate::graphics::test_support::{graphics, graphics_with};
    use crate::scene::{SceneRequest, SceneRequests};
    use crate::sound::SoundBoard;
    use crate::window::NavKey;

    fn title_menu() -> (TitleMenuWindow, Rc<SoundBoard>) {
        let sound = Rc::new(SoundBoard::new());
        let mut menu =
            TitleMenuWindow::new(graphics(), sound.clone(), 250.0, 300.0, 300.0, 200.0).unwrap();
        menu.activate();
        (menu, sound)
    }

    fn confirm_at(menu: &mut TitleMenuWindow, index: usize) -> Vec<SceneRequest> {
        let mut host = SceneRequests::new();
        menu.window_mut().select(index);
        assert!(menu.handle_key(NavKey::Confirm, &mut host));
        host.drain()
    }

    #[test]
    fn test_title_menu_layout() {
        let (menu, _) = title_menu();
        let win = menu.window();
        assert_eq!(win.skin_name(), SKIN_CELESTIA);
        assert_eq!(win.selections_len(), 4);
        let texts: Vec<&str> = (0..4)
            .map(|i| win.selection(i).unwrap().drawable.as_text().unwrap().text())
            .collect();
        assert_eq!(texts, vec!["Start Game", "Rules", "Options", "Credits"]);
    }

    #[test]
    fn test_start_raises_mode_select() {
        let (mut menu, _) = title_menu();
        assert_eq!(
            confirm_at(&mut menu, 0),
            vec![SceneRequest::RaiseOverlay(Overlay::GameModeSelect)]
        );
    }

    #[test]
    fn test_rules_and_credits_confirm_links() {
        let mut config = UiConfig::default();
        config.vocab.credits_link = "https://example.org/credits".to_string();
        let vocab = config.vocab.clone();
        let sound = Rc::new(SoundBoard::new());
        let mut menu =
            TitleMenuWindow::new(graphics_with(config), sound, 250.0, 300.0, 300.0, 200.0).unwrap();
        menu.activate();

        assert_eq!(
            confirm_at(&mut menu, 1),
            vec![SceneRequest::ConfirmAndOpen {
                prompt: vocab.rules_redirect,
                url: vocab.rules_link,
            }]
        );
        assert_eq!(
            confirm_at(&mut menu, 3),
            vec![SceneRequest::ConfirmAndOpen {
                prompt: vocab.credits_redirect,
                url: vocab.credits_link,
            }]
        );
    }

    #[test]
    fn test_credits_without_link_buzzes() {
        let (mut menu, sound) = title_menu();
        assert!(!menu.window().selection(3).unwrap().enabled);
        assert!(confirm_at(&mut menu, 3).is_empty());
        assert_eq!(sound.played(), vec![Cue::Cursor, Cue::Buzzer]);
    }

    #[test]
    fn test_options_plays_ok_and_raises_overlay() {
        let (mut menu, sound) = title_menu();
        assert_eq!(
            confirm_at(&mut menu, 2),
            vec![SceneRequest::RaiseOverlay(Overlay::Options)]
        );
        // cursor, handler OK, trigger OK
        assert_eq!(sound.played(), vec![Cue::Cursor, Cue::Ok, Cue::Ok]);
    }
}
