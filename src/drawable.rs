//! Window content nodes
//!
//! Everything a window draws on top of its skin (text, icons, selection
//! rows) is a [`Drawable`]. A [`Group`] nests drawables the way a sub-canvas
//! does, with child positions relative to the group.

use crate::geometry::{Point, Rect};
use crate::render::{RenderList, Renderable};
use crate::sprite::{Sprite, TextSprite};
use crate::widgets::DragBar;

#[derive(Debug, Clone)]
pub enum Drawable {
    Text(TextSprite),
    Icon(Sprite),
    Group(Group),
    DragBar(DragBar),
}

impl Drawable {
    pub fn position(&self) -> Point {
        match self {
            Drawable::Text(t) => Point::new(t.x, t.y),
            Drawable::Icon(s) => Point::new(s.x, s.y),
            Drawable::Group(g) => Point::new(g.x, g.y),
            Drawable::DragBar(b) => Point::new(b.x, b.y),
        }
    }

    pub fn set_pos(&mut self, x: f32, y: f32) {
        match self {
            Drawable::Text(t) => t.set_pos(x, y),
            Drawable::Icon(s) => s.set_pos(x, y),
            Drawable::Group(g) => {
                g.x = x;
                g.y = y;
            }
            Drawable::DragBar(b) => {
                b.x = x;
                b.y = y;
            }
        }
    }

    /// Bounds in the parent's coordinate space
    pub fn bounds(&self) -> Rect {
        match self {
            Drawable::Text(t) => t.bounds(),
            Drawable::Icon(s) => s.bounds(),
            Drawable::Group(g) => g.bounds(),
            Drawable::DragBar(b) => b.bounds(),
        }
    }

    pub fn set_z(&mut self, z: f32) {
        match self {
            Drawable::Text(t) => t.z = z,
            Drawable::Icon(s) => s.z = z,
            Drawable::Group(g) => g.z = z,
            Drawable::DragBar(b) => b.z = z,
        }
    }

    pub fn set_interactive(&mut self, interactive: bool) {
        match self {
            Drawable::Text(t) => t.interactive = interactive,
            Drawable::Icon(s) => s.interactive = interactive,
            Drawable::Group(g) => g.interactive = interactive,
            Drawable::DragBar(b) => {
                if interactive {
                    b.activate()
                } else {
                    b.deactivate()
                }
            }
        }
    }

    pub fn is_interactive(&self) -> bool {
        match self {
            Drawable::Text(t) => t.interactive,
            Drawable::Icon(s) => s.interactive,
            Drawable::Group(g) => g.interactive,
            Drawable::DragBar(b) => b.is_active(),
        }
    }

    pub fn as_text(&self) -> Option<&TextSprite> {
        match self {
            Drawable::Text(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_text_mut(&mut self) -> Option<&mut TextSprite> {
        match self {
            Drawable::Text(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_group_mut(&mut self) -> Option<&mut Group> {
        match self {
            Drawable::Group(g) => Some(g),
            _ => None,
        }
    }

    fn as_renderable(&self) -> &dyn Renderable {
        match self {
            Drawable::Text(t) => t,
            Drawable::Icon(s) => s,
            Drawable::Group(g) => g,
            Drawable::DragBar(b) => b,
        }
    }
}

impl Renderable for Drawable {
    fn z(&self) -> f32 {
        self.as_renderable().z()
    }

    fn emit(&self, origin: Point, opacity: f32, list: &mut RenderList) {
        self.as_renderable().emit(origin, opacity, list);
    }
}

/// Sub-canvas of drawables
#[derive(Debug, Clone)]
pub struct Group {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub z: f32,
    pub interactive: bool,
    pub children: Vec<Drawable>,
}

impl Group {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Group {
            x,
            y,
            width,
            height,
            z: 0.0,
            interactive: false,
            children: Vec::new(),
        }
    }

    /// Adds a child, returning its position in `children`
    pub fn add_child(&mut self, child: Drawable) -> usize {
        self.children.push(child);
        self.children.len() - 1
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

impl Renderable for Group {
    fn z(&self) -> f32 {
        self.z
    }

    fn emit(&self, origin: Point, opacity: f32, list: &mut RenderList) {
        list.push_group(
            self.z,
            Point::new(origin.x + self.x, origin.y + self.y),
            opacity,
            self.children.iter().map(|c| c as &dyn Renderable),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::DrawCommand;
    use crate::text::FontSetting;

    #[test]
    fn test_group_children_offset_by_group() {
        let mut group = Group::new(10.0, 20.0, 100.0, 30.0);
        let mut label = TextSprite::new("BGM", FontSetting::default());
        label.set_pos(5.0, 0.0);
        group.add_child(Drawable::Text(label));

        let mut list = RenderList::new();
        Drawable::Group(group).emit(Point::new(100.0, 100.0), 1.0, &mut list);
        let commands = list.into_sorted();
        assert_eq!(commands.len(), 1);
        match &commands[0] {
            DrawCommand::Text { x, y, .. } => assert_eq!((*x, *y), (115.0, 120.0)),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_interactivity_reaches_drag_bar() {
        let mut bar = Drawable::DragBar(DragBar::new(0.0, 0.0, 100.0, 0));
        assert!(!bar.is_interactive());
        bar.set_interactive(true);
        assert!(bar.is_interactive());
    }
}
