//! Match rule options
//!
//! One row per rule on the rarity skin. Clicking or confirming a row cycles
//! its value; the row text is rebuilt after every handled event.

use std::cell::Cell;
use std::rc::Rc;

use super::{MenuWindow, cancel_overlay};
use crate::config::{SKIN_RARITY, Vocab};
use crate::error::Result;
use crate::graphics::Graphics;
use crate::scene::SceneHost;
use crate::settings::GameOptions;
use crate::sound::Sound;
use crate::window::{NavKey, PointerEvent, TextSelection, Window};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OptionRow {
    HandCards,
    ExtraCards,
    MaxHp,
    ScoreGoal,
}

impl OptionRow {
    const ALL: [OptionRow; 4] = [
        OptionRow::HandCards,
        OptionRow::ExtraCards,
        OptionRow::MaxHp,
        OptionRow::ScoreGoal,
    ];

    fn cycle(self, options: &mut GameOptions) {
        match self {
            OptionRow::HandCards => options.cycle_hand_cards(),
            OptionRow::ExtraCards => options.toggle_extra_cards(),
            OptionRow::MaxHp => options.cycle_max_hp(),
            OptionRow::ScoreGoal => options.cycle_score_goal(),
        }
    }

    fn text(self, vocab: &Vocab, options: &GameOptions) -> String {
        match self {
            OptionRow::HandCards => format!("{}: {}", vocab.hand_cards, options.hand_cards),
            OptionRow::ExtraCards => {
                let state = if options.extra_cards { &vocab.on } else { &vocab.off };
                format!("{}: {}", vocab.extra_cards, state)
            }
            OptionRow::MaxHp => format!("{}: {}", vocab.max_hp, options.max_hp),
            OptionRow::ScoreGoal => format!("{}: {}", vocab.score_goal, options.score_goal),
        }
    }
}

pub struct GameOptionWindow {
    window: Window,
    options: Rc<Cell<GameOptions>>,
}

impl GameOptionWindow {
    pub fn new(
        graphics: Rc<Graphics>,
        sound: Rc<dyn Sound>,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        options: GameOptions,
    ) -> Result<Self> {
        let mut window = Window::new(graphics, sound, x, y, width, height)?;
        window.set_label("GameOption");
        window.change_skin(SKIN_RARITY)?;

        let mut game_options = GameOptionWindow {
            window,
            options: Rc::new(Cell::new(options)),
        };
        game_options.create_options()?;
        Ok(game_options)
    }

    fn create_options(&mut self) -> Result<()> {
        let vocab = self.window.graphics().vocab.clone();
        for row in OptionRow::ALL {
            let options = Rc::clone(&self.options);
            let text = row.text(&vocab, &options.get());
            self.window
                .add_text_selection(TextSelection::new(text).handler(move |_| {
                    let mut current = options.get();
                    row.cycle(&mut current);
                    options.set(current);
                }))?;
        }
        Ok(())
    }

    pub fn options(&self) -> GameOptions {
        self.options.get()
    }

    pub fn set_options(&mut self, options: GameOptions) {
        self.options.set(options);
        self.refresh_texts();
    }

    fn refresh_texts(&mut self) {
        let options = self.options.get();
        let vocab = self.window.graphics().vocab.clone();
        for (index, row) in OptionRow::ALL.into_iter().enumerate() {
            let text = self
                .window
                .selection_mut(index)
                .and_then(|item| item.drawable.as_text_mut());
            if let Some(text) = text {
                text.set_text(row.text(&vocab, &options));
            }
        }
        self.window.refresh();
    }
}

impl MenuWindow for GameOptionWindow {
    fn window(&self) -> &Window {
        &self.window
    }

    fn window_mut(&mut self) -> &mut Window {
        &mut self.window
    }

    fn handle_pointer(&mut self, event: PointerEvent, host: &mut dyn SceneHost) -> bool {
        let handled = self.window.handle_pointer(event, host);
        if matches!(event, PointerEvent::Released(_)) {
            self.refresh_texts();
        }
        handled
    }

    fn handle_key(&mut self, key: NavKey, host: &mut dyn SceneHost) -> bool {
        if key == NavKey::Cancel && self.window.is_active() {
            cancel_overlay(&self.window, host);
            return true;
        }
        let handled = self.window.handle_key(key, host);
        if key == NavKey::Confirm {
            self.refresh_texts();
        }
        handled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::graphics::test_support::graphics;
    use crate::scene::SceneRequests;
    use crate::sound::SoundBoard;

    fn game_options() -> GameOptionWindow {
        let mut window = GameOptionWindow::new(
            graphics(),
            Rc::new(SoundBoard::new()),
            200.0,
            150.0,
            400.0,
            200.0,
            GameOptions::default(),
        )
        .unwrap();
        window.activate();
        window
    }

    fn row_text(window: &GameOptionWindow, index: usize) -> String {
        window
            .window()
            .selection(index)
            .and_then(|item| item.drawable.as_text())
            .map(|text| text.text().to_string())
            .unwrap()
    }

    #[test]
    fn test_rows_show_defaults() {
        let window = game_options();
        assert_eq!(window.window().skin_name(), SKIN_RARITY);
        assert_eq!(row_text(&window, 0), "Hand Cards: 7");
        assert_eq!(row_text(&window, 1), "Extra Cards: On");
        assert_eq!(row_text(&window, 2), "Max HP: 200");
        assert_eq!(row_text(&window, 3), "Score Goal: 500");
    }

    #[test]
    fn test_confirm_cycles_row() {
        let mut window = game_options();
        let mut host = SceneRequests::new();
        window.window_mut().select(1);
        window.handle_key(NavKey::Confirm, &mut host);
        assert!(!window.options().extra_cards);
        assert_eq!(row_text(&window, 1), "Extra Cards: Off");

        window.window_mut().select(2);
        window.handle_key(NavKey::Confirm, &mut host);
        assert_eq!(window.options().max_hp, 250);
        assert_eq!(row_text(&window, 2), "Max HP: 250");
    }

    #[test]
    fn test_click_cycles_row() {
        let mut window = game_options();
        let mut host = SceneRequests::new();
        let rect = window.window().cursor_rect(0);
        let p = Point::new(200.0 + rect.x + 2.0, 150.0 + rect.y + 2.0);
        window.handle_pointer(PointerEvent::Pressed(p), &mut host);
        window.handle_pointer(PointerEvent::Released(p), &mut host);
        assert_eq!(window.options().hand_cards, 8);
        assert_eq!(row_text(&window, 0), "Hand Cards: 8");
    }

    #[test]
    fn test_set_options_rewrites_rows() {
        let mut window = game_options();
        window.set_options(GameOptions {
            hand_cards: 10,
            score_goal: 1000,
            ..GameOptions::default()
        });
        assert_eq!(row_text(&window, 0), "Hand Cards: 10");
        assert_eq!(row_text(&window, 3), "Score Goal: 1000");
    }
}
