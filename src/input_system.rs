use sdl2::EventPump;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;

use crate::geometry::Point;
use crate::window::{NavKey, PointerEvent};

/// Actions the menu layer understands
///
/// This enum decouples SDL2 events from window routing: the scene only ever
/// sees pointer events, navigation keys and quit requests.
#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    Pointer(PointerEvent),
    Key(NavKey),
    Quit,
}

/// Input context determines what Escape means
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Title menu has focus; Escape quits
    Title,
    /// An overlay is open; Escape cancels it
    Overlay,
}

/// InputSystem processes SDL2 events and produces UiActions
///
/// Input processing happens in phases:
/// 1. The scene sets the context (title or overlay)
/// 2. Poll SDL2 events
/// 3. Translate events to UiActions
/// 4. Return actions to the frame loop for routing
pub struct InputSystem {
    /// Current input context
    pub context: InputContext,
}

impl InputSystem {
    /// Creates a new InputSystem starting in Title context
    pub fn new() -> Self {
        InputSystem {
            context: InputContext::Title,
        }
    }

    /// Update the input context from whether an overlay is open
    pub fn update_context(&mut self, overlay_open: bool) {
        self.context = if overlay_open {
            InputContext::Overlay
        } else {
            InputContext::Title
        };
    }

    /// Process SDL2 events and return list of actions to handle
    pub fn poll_events(&self, event_pump: &mut EventPump) -> Vec<UiAction> {
        let mut actions = Vec::new();

        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => {
                    actions.push(UiAction::Quit);
                }
                Event::KeyDown {
                    keycode: Some(key),
                    ..
                } => {
                    if let Some(action) = self.translate_key(key) {
                        actions.push(action);
                    }
                }
                Event::MouseButtonDown {
                    mouse_btn: MouseButton::Left,
                    x,
                    y,
                    ..
                } => {
                    actions.push(UiAction::Pointer(PointerEvent::Pressed(point(x, y))));
                }
                Event::MouseButtonUp {
                    mouse_btn: MouseButton::Left,
                    x,
                    y,
                    ..
                } => {
                    actions.push(UiAction::Pointer(PointerEvent::Released(point(x, y))));
                }
                Event::MouseMotion { x, y, .. } => {
                    actions.push(UiAction::Pointer(PointerEvent::Moved(point(x, y))));
                }
                _ => {
                    // Ignore other event types
                }
            }
        }

        actions
    }

    /// Maps a key press to an action in the current context
    pub fn translate_key(&self, key: Keycode) -> Option<UiAction> {
        let nav = match key {
            Keycode::Up | Keycode::W => NavKey::Up,
            Keycode::Down | Keycode::S => NavKey::Down,
            Keycode::Left | Keycode::A => NavKey::Left,
            Keycode::Right | Keycode::D => NavKey::Right,
            Keycode::Return | Keycode::Space => NavKey::Confirm,
            Keycode::Escape | Keycode::Backspace => match self.context {
                InputContext::Title if key == Keycode::Escape => return Some(UiAction::Quit),
                _ => NavKey::Cancel,
            },
            _ => return None,
        };
        Some(UiAction::Key(nav))
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}

fn point(x: i32, y: i32) -> Point {
    Point::new(x as f32, y as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_system_creation() {
        let input = InputSystem::new();
        assert_eq!(input.context, InputContext::Title);
    }

    #[test]
    fn test_context_switching() {
        let mut input = InputSystem::new();
        input.update_context(true);
        assert_eq!(input.context, InputContext::Overlay);
        input.update_context(false);
        assert_eq!(input.context, InputContext::Title);
    }

    #[test]
    fn test_escape_depends_on_context() {
        let mut input = InputSystem::new();
        assert_eq!(input.translate_key(Keycode::Escape), Some(UiAction::Quit));
        assert_eq!(
            input.translate_key(Keycode::Backspace),
            Some(UiAction::Key(NavKey::Cancel))
        );

        input.update_context(true);
        assert_eq!(
            input.translate_key(Keycode::Escape),
            Some(UiAction::Key(NavKey::Cancel))
        );
    }

    #[test]
    fn test_navigation_keys() {
        let input = InputSystem::new();
        assert_eq!(input.translate_key(Keycode::Down), Some(UiAction::Key(NavKey::Down)));
        assert_eq!(input.translate_key(Keycode::A), Some(UiAction::Key(NavKey::Left)));
        assert_eq!(
            input.translate_key(Keycode::Return),
            Some(UiAction::Key(NavKey::Confirm))
        );
        assert_eq!(input.translate_key(Keycode::F5), None);
    }
}
