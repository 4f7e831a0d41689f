//! Puno Menu Windows
//!
//! Concrete windows built on [`crate::window::Window`]. Each one wraps a
//! window, picks its skin and fills it with items; none of them subclass.
//!
//! # Available Components
//!
//! - [`TitleMenuWindow`] - Start Game / Rules / Options / Credits
//! - [`OptionWindow`] - Volume overlay with drag bars
//! - [`HelpWindow`] - Help text for the selected item
//! - [`GameModeSelectWindow`] - Traditional / Battle Puno / Death Match
//! - [`GameOptionWindow`] - Match rules
//!
//! # Example Usage
//!
//! ```ignore
//! use puno_ui::gui::{MenuWindow, TitleMenuWindow};
//!
//! // Create menu once
//! let mut menu = TitleMenuWindow::new(graphics, sound, 250.0, 300.0, 300.0, 200.0)?;
//! menu.activate();
//!
//! // Handle input
//! menu.handle_key(NavKey::Down, &mut requests);
//!
//! // Apply what the menu asked for
//! for request in requests.drain() { /* ... */ }
//! ```

pub mod game_mode_select;
pub mod game_option_window;
pub mod help_window;
pub mod option_window;
pub mod title_menu;

pub use game_mode_select::GameModeSelectWindow;
pub use game_option_window::GameOptionWindow;
pub use help_window::HelpWindow;
pub use option_window::OptionWindow;
pub use title_menu::TitleMenuWindow;

use crate::render::RenderList;
use crate::scene::SceneHost;
use crate::sound::Cue;
use crate::window::{NavKey, PointerEvent, Window};

/// Shared surface of every menu window.
///
/// Input defaults to the wrapped window's routing; menus with extra widgets
/// (drag bars, close icons) override it.
pub trait MenuWindow {
    fn window(&self) -> &Window;

    fn window_mut(&mut self) -> &mut Window;

    fn handle_pointer(&mut self, event: PointerEvent, host: &mut dyn SceneHost) -> bool {
        self.window_mut().handle_pointer(event, host)
    }

    fn handle_key(&mut self, key: NavKey, host: &mut dyn SceneHost) -> bool {
        self.window_mut().handle_key(key, host)
    }

    fn activate(&mut self) {
        self.window_mut().activate();
    }

    fn deactivate(&mut self) {
        self.window_mut().deactivate();
    }

    fn update(&mut self) {
        self.window_mut().update();
    }

    fn render(&self, list: &mut RenderList) {
        self.window().render(list);
    }
}

/// Plays the cancel cue and asks the host to close the top overlay
pub(crate) fn cancel_overlay(window: &Window, host: &mut dyn SceneHost) {
    window.sound().play(Cue::Cancel);
    host.close_overlay();
}
