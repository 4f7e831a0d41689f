//! Help text panel

use std::rc::Rc;

use super::MenuWindow;
use crate::error::Result;
use crate::graphics::Graphics;
use crate::sound::Sound;
use crate::window::{HelpSink, Window};

pub struct HelpWindow {
    window: Window,
}

impl HelpWindow {
    pub fn new(
        graphics: Rc<Graphics>,
        sound: Rc<dyn Sound>,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    ) -> Result<Self> {
        let mut window = Window::new(graphics, sound, x, y, width, height)?;
        window.set_label("Help");
        Ok(HelpWindow { window })
    }

    /// Replaces the content with `lines`, each wrapped to the window width
    /// and stacked below the previous one
    pub fn set_text<S: AsRef<str>>(&mut self, lines: &[S]) {
        self.window.clear();
        let mut dy = 0.0;
        for line in lines {
            let id = self.window.draw_text(0.0, dy, line.as_ref(), None, true);
            dy += self
                .window
                .drawn(id)
                .map(|drawn| drawn.bounds().height)
                .unwrap_or(0.0);
        }
    }

    /// Current lines, one per `set_text` argument
    pub fn text(&self) -> Vec<String> {
        self.window
            .drawn_iter()
            .filter_map(|drawn| drawn.as_text())
            .map(|text| text.text().to_string())
            .collect()
    }
}

impl HelpSink for HelpWindow {
    fn set_help_text(&mut self, text: &str) {
        self.set_text(&[text]);
    }
}

impl MenuWindow for HelpWindow {
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
    use crate::graphics::test_support::graphics;
    use crate::sound::SoundBoard;
    use crate::window::TextSelection;
    use std::cell::RefCell;

    fn help_window() -> HelpWindow {
        HelpWindow::new(graphics(), Rc::new(SoundBoard::new()), 0.0, 500.0, 400.0, 100.0).unwrap()
    }

    #[test]
    fn test_set_text_stacks_lines() {
        let mut help = help_window();
        help.set_text(&["First", "Second"]);
        assert_eq!(help.text(), vec!["First", "Second"]);

        let first = help.window().drawn_iter().next().unwrap().bounds();
        let second = help.window().drawn_iter().nth(1).unwrap().bounds();
        assert_eq!(second.y, first.y + first.height);
    }

    #[test]
    fn test_set_text_replaces_previous() {
        let mut help = help_window();
        help.set_text(&["Old", "Lines"]);
        help.set_text(&["New"]);
        assert_eq!(help.text(), vec!["New"]);
    }

    #[test]
    fn test_wrapped_line_pushes_next_down() {
        let mut help = help_window();
        // 384px inner width, 32 chars per line
        let long = "cards deal damage and the last player standing wins";
        help.set_text(&[long, "next"]);
        let first = help.window().drawn_iter().next().unwrap().bounds();
        assert_eq!(first.height, 36.0);
        let second = help.window().drawn_iter().nth(1).unwrap().bounds();
        assert_eq!(second.y, 8.0 + 36.0);
    }

    #[test]
    fn test_receives_help_from_selection() {
        let help = Rc::new(RefCell::new(help_window()));
        let mut menu = Window::new(graphics(), Rc::new(SoundBoard::new()), 0.0, 0.0, 300.0, 200.0)
            .unwrap();
        menu.set_help_window(help.clone());
        menu.add_text_selection(TextSelection::new("Traditional").help("Classic rules"))
            .unwrap();
        menu.select(0);
        assert_eq!(help.borrow().text(), vec!["Classic rules"]);
    }
}
