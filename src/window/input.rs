//! Pointer and keyboard routing
//!
//! Events arrive in screen space. The window converts them to its own
//! space, tracks which item is hovered, and runs item handlers on click.

use super::Window;
use crate::geometry::{Point, Rect};
use crate::scene::SceneHost;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Moved(Point),
    Pressed(Point),
    Released(Point),
}

impl PointerEvent {
    pub fn point(&self) -> Point {
        match *self {
            PointerEvent::Moved(p) | PointerEvent::Pressed(p) | PointerEvent::Released(p) => p,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Up,
    Down,
    Left,
    Right,
    Confirm,
    Cancel,
}

impl Window {
    /// Screen space to window space
    pub fn to_local(&self, point: Point) -> Point {
        Point::new(point.x - self.x, point.y - self.y)
    }

    /// Whether a screen-space point lies on the window
    pub fn contains_point(&self, point: Point) -> bool {
        let local = self.to_local(point);
        Rect::new(0.0, 0.0, self.width, self.height).contains(local)
    }

    /// Topmost item whose hit rectangle contains `local` (window space)
    pub fn item_at(&self, local: Point) -> Option<usize> {
        self.grid
            .items
            .iter()
            .enumerate()
            .rev()
            .find(|(_, item)| {
                item.as_ref()
                    .map(|item| item.hit_rect().contains(local))
                    .unwrap_or(false)
            })
            .map(|(i, _)| i)
    }

    /// Routes a pointer event. Returns true when the event landed on the
    /// window, so callers can stop passing it to windows underneath.
    pub fn handle_pointer(&mut self, event: PointerEvent, host: &mut dyn SceneHost) -> bool {
        if !self.visible || self.is_disposed() {
            return false;
        }
        let inside = self.contains_point(event.point());
        if !self.grid.active {
            return inside;
        }
        let local = self.to_local(event.point());

        match event {
            PointerEvent::Moved(_) => {
                let hovered = self.item_at(local);
                if hovered != self.hovered {
                    if self.hovered.is_some() && self.hovered == self.grid.index {
                        self.unselect();
                    }
                    if let Some(index) = hovered {
                        if self.grid.index != Some(index) {
                            self.select(index);
                        }
                    }
                    self.hovered = hovered;
                }
            }
            PointerEvent::Pressed(_) => {
                self.pressed = inside;
            }
            PointerEvent::Released(_) => {
                if self.pressed && inside {
                    if let Some(index) = self.item_at(local) {
                        self.trigger(index, host);
                    }
                }
                self.pressed = false;
            }
        }
        inside
    }

    /// Routes a navigation key. Returns true when the key was consumed.
    pub fn handle_key(&mut self, key: NavKey, host: &mut dyn SceneHost) -> bool {
        if !self.visible || !self.grid.active || self.grid.items.is_empty() {
            return false;
        }
        match key {
            NavKey::Up => self.cursor_up(),
            NavKey::Down => self.cursor_down(),
            NavKey::Left => self.cursor_left(),
            NavKey::Right => self.cursor_right(),
            NavKey::Confirm => match self.grid.index {
                Some(index) => self.trigger(index, host),
                None => return false,
            },
            NavKey::Cancel => return false,
        }
        true
    }

    /// Runs the handler of `index`, then the window's own trigger.
    /// Disabled items only buzz.
    pub fn trigger(&mut self, index: usize, host: &mut dyn SceneHost) {
        if self.grid.index != Some(index) {
            self.select(index);
        }
        if self.is_current_item_enabled() {
            if let Some(item) = self.selection_mut(index) {
                item.run_handler(host);
            }
        }
        self.on_self_trigger();
    }
}
