/// Depth-sorted draw lists
///
/// Windows are retained trees of sprites. To draw one, the tree is flattened
/// into a [`RenderList`] of backend-agnostic [`DrawCommand`]s, then sorted by
/// z (painter's algorithm): smaller z draws first, farther back.
///
/// # Architecture
///
/// - `Renderable` trait: implemented by every node that can emit commands
/// - `RenderList`: collects `(z, command)` pairs and sorts them stably
/// - `DrawCommand`: what a backend must be able to draw (textures, text, fills)
///
/// Children of a group are sorted inside the group first and then inserted at
/// the group's own z, so a group never interleaves with its siblings.
use crate::geometry::{Point, Rect};
use crate::graphics::TextureRegion;
use crate::text::FontSetting;

/// One backend draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Copy a texture region to a destination rect (stretching as needed)
    Texture {
        region: TextureRegion,
        dest: Rect,
        opacity: f32,
    },

    /// Bitmap-font text with its top-left corner at (x, y)
    Text {
        text: String,
        x: f32,
        y: f32,
        font: FontSetting,
        opacity: f32,
    },

    /// Solid rectangle
    Fill {
        rect: Rect,
        color: [u8; 3],
        opacity: f32,
    },
}

/// Anything that can add itself to a render list.
///
/// `origin` is the parent's absolute top-left; `opacity` is the parent's
/// accumulated opacity.
pub trait Renderable {
    fn z(&self) -> f32;

    fn emit(&self, origin: Point, opacity: f32, list: &mut RenderList);
}

#[derive(Debug, Default)]
pub struct RenderList {
    entries: Vec<(f32, DrawCommand)>,
}

impl RenderList {
    pub fn new() -> Self {
        RenderList { entries: Vec::new() }
    }

    pub fn push(&mut self, z: f32, command: DrawCommand) {
        self.entries.push((z, command));
    }

    /// Emits every child into a nested list and splices the sorted result in
    /// at `z`.
    pub fn push_group<'a, I>(&mut self, z: f32, origin: Point, opacity: f32, children: I)
    where
        I: IntoIterator<Item = &'a dyn Renderable>,
    {
        let mut nested = RenderList::new();
        for child in children {
            child.emit(origin, opacity, &mut nested);
        }
        for command in nested.into_sorted() {
            self.entries.push((z, command));
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sorts back to front. `sort_by` is stable, so equal z keeps emit order.
    pub fn into_sorted(mut self) -> Vec<DrawCommand> {
        self.entries.sort_by(|(a, _), (b, _)| a.total_cmp(b));
        self.entries.into_iter().map(|(_, command)| command).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(tag: u8) -> DrawCommand {
        DrawCommand::Fill {
            rect: Rect::default(),
            color: [tag, 0, 0],
            opacity: 1.0,
        }
    }

    fn tag(command: &DrawCommand) -> u8 {
        match command {
            DrawCommand::Fill { color, .. } => color[0],
            _ => panic!("expected fill"),
        }
    }

    #[test]
    fn test_depth_sorting_order() {
        let mut list = RenderList::new();
        list.push(5.0, fill(1));
        list.push(0.0, fill(2));
        list.push(1.5, fill(3));

        let sorted: Vec<u8> = list.into_sorted().iter().map(tag).collect();
        assert_eq!(sorted, vec![2, 3, 1]);
    }

    #[test]
    fn test_equal_depth_stable_sort() {
        let mut list = RenderList::new();
        list.push(2.0, fill(1));
        list.push(2.0, fill(2));
        list.push(2.0, fill(3));

        let sorted: Vec<u8> = list.into_sorted().iter().map(tag).collect();
        assert_eq!(sorted, vec![1, 2, 3]);
    }
}
