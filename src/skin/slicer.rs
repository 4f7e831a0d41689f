//! Skin slicer
//!
//! Cuts one skin image into independent sprites. Every category is built by
//! its own function so a skin change can rebuild exactly what it replaces.

use crate::error::Result;
use crate::geometry::{Point, Rect};
use crate::graphics::Graphics;
use crate::render::{RenderList, Renderable};
use crate::sprite::{AnimatedSprite, Sprite};

use super::catalog::NineSlice;

pub const Z_INDEX: f32 = 0.0;
pub const Z_PATTERN: f32 = 1.0;
pub const Z_CURSOR: f32 = 1.5;
pub const Z_TEXT: f32 = 2.0;
pub const Z_BUTTON: f32 = 3.0;
pub const Z_BORDER: f32 = 5.0;
pub const Z_ARROW: f32 = 6.0;

/// Background tint opacity for index and pattern
const BACKGROUND_OPACITY: f32 = 0.5;

/// Frames per update for the continue button
const BUTTON_ANIMATION_SPEED: f32 = 0.25;

/// The eight outer tiles of a nine-patch frame
#[derive(Debug, Clone)]
pub struct FrameTiles {
    pub top_left: Sprite,
    pub top: Sprite,
    pub top_right: Sprite,
    pub bottom_left: Sprite,
    pub bottom: Sprite,
    pub bottom_right: Sprite,
    pub left: Sprite,
    pub right: Sprite,
}

impl FrameTiles {
    fn slice(graphics: &Graphics, skin: &str, rects: &NineSlice, z: f32) -> Result<Self> {
        let tile = |rect: Rect| -> Result<Sprite> {
            Ok(Sprite::new(graphics.load_texture(skin, rect)?).with_z(z))
        };
        Ok(FrameTiles {
            top_left: tile(rects.top_left)?,
            top: tile(rects.top)?,
            top_right: tile(rects.top_right)?,
            bottom_left: tile(rects.bottom_left)?,
            bottom: tile(rects.bottom)?,
            bottom_right: tile(rects.bottom_right)?,
            left: tile(rects.left)?,
            right: tile(rects.right)?,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sprite> {
        [
            &self.top_left,
            &self.top,
            &self.top_right,
            &self.bottom_left,
            &self.bottom,
            &self.bottom_right,
            &self.left,
            &self.right,
        ]
        .into_iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Sprite> {
        [
            &mut self.top_left,
            &mut self.top,
            &mut self.top_right,
            &mut self.bottom_left,
            &mut self.bottom,
            &mut self.bottom_right,
            &mut self.left,
            &mut self.right,
        ]
        .into_iter()
    }
}

/// Selection cursor: a nine-patch frame plus its stretched center
///
/// Opacity "breathes" while visible; see [`CursorSprite::update`].
#[derive(Debug, Clone)]
pub struct CursorSprite {
    pub center: Sprite,
    pub frame: FrameTiles,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub z: f32,
    pub opacity: f32,
    pub visible: bool,
    brightening: bool,
}

impl CursorSprite {
    pub fn set_pos(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Breathing animation: fades down to 0.1, then back up to 1
    pub fn update(&mut self, speed_factor: f32) {
        if !self.visible {
            return;
        }
        let delta = 0.02 * speed_factor;
        if !self.brightening {
            self.opacity -= delta;
            if self.opacity < 0.1 {
                self.brightening = true;
            }
        } else {
            self.opacity += delta;
            if self.opacity >= 1.0 {
                self.brightening = false;
            }
        }
    }
}

impl Renderable for CursorSprite {
    fn z(&self) -> f32 {
        self.z
    }

    fn emit(&self, origin: Point, opacity: f32, list: &mut RenderList) {
        if !self.visible {
            return;
        }
        let children = std::iter::once(&self.center as &dyn Renderable)
            .chain(self.frame.iter().map(|s| s as &dyn Renderable));
        list.push_group(
            self.z,
            Point::new(origin.x + self.x, origin.y + self.y),
            opacity * self.opacity,
            children,
        );
    }
}

/// Every sprite derived from one skin image
#[derive(Debug, Clone)]
pub struct Skin {
    pub name: String,
    pub index: Sprite,
    pub pattern: Sprite,

    /// Ordered down, left, right, up (bit i of the surplus mask)
    pub arrows: [Sprite; 4],

    pub cursor: CursorSprite,
    pub button: AnimatedSprite,
    pub border: FrameTiles,
}

impl Skin {
    /// Slices every category, in stacking order
    pub fn slice(graphics: &Graphics, name: &str) -> Result<Self> {
        let index = slice_index(graphics, name)?;
        let pattern = slice_pattern(graphics, name)?;
        let arrows = slice_arrows(graphics, name)?;
        let cursor = slice_cursor(graphics, name)?;
        let button = slice_button(graphics, name)?;
        let border = slice_border(graphics, name)?;
        log::debug!("Sliced window skin '{}'", name);
        Ok(Skin {
            name: name.to_string(),
            index,
            pattern,
            arrows,
            cursor,
            button,
            border,
        })
    }

    pub fn arrow_down(&self) -> &Sprite {
        &self.arrows[0]
    }

    pub fn arrow_left(&self) -> &Sprite {
        &self.arrows[1]
    }

    pub fn arrow_right(&self) -> &Sprite {
        &self.arrows[2]
    }

    pub fn arrow_up(&self) -> &Sprite {
        &self.arrows[3]
    }

    /// Number of scene children the skin contributes to its window
    pub fn children_len(&self) -> usize {
        // index + pattern + arrows + cursor container + button + border tiles
        2 + self.arrows.len() + 1 + 1 + 8
    }

    pub fn set_interactive(&mut self, interactive: bool) {
        self.index.interactive = interactive;
        self.pattern.interactive = interactive;
        self.button.interactive = interactive;
        for arrow in self.arrows.iter_mut() {
            arrow.interactive = interactive;
        }
        for tile in self.border.iter_mut() {
            tile.interactive = interactive;
        }
    }

    pub fn emit(&self, origin: Point, opacity: f32, list: &mut RenderList) {
        self.index.emit(origin, opacity, list);
        self.pattern.emit(origin, opacity, list);
        for arrow in &self.arrows {
            arrow.emit(origin, opacity, list);
        }
        self.cursor.emit(origin, opacity, list);
        self.button.emit(origin, opacity, list);
        for tile in self.border.iter() {
            tile.emit(origin, opacity, list);
        }
    }
}

fn slice_index(graphics: &Graphics, skin: &str) -> Result<Sprite> {
    let region = graphics.load_texture(skin, graphics.skin_rects.index)?;
    Ok(Sprite::new(region)
        .with_z(Z_INDEX)
        .with_opacity(BACKGROUND_OPACITY))
}

fn slice_pattern(graphics: &Graphics, skin: &str) -> Result<Sprite> {
    let region = graphics.load_texture(skin, graphics.skin_rects.pattern)?;
    Ok(Sprite::new(region)
        .with_z(Z_PATTERN)
        .with_opacity(BACKGROUND_OPACITY))
}

fn slice_arrows(graphics: &Graphics, skin: &str) -> Result<[Sprite; 4]> {
    let rects = graphics.skin_rects.arrows;
    let arrow = |rect: Rect| -> Result<Sprite> {
        Ok(Sprite::new(graphics.load_texture(skin, rect)?)
            .with_z(Z_ARROW)
            .hidden())
    };
    Ok([
        arrow(rects.down)?,
        arrow(rects.left)?,
        arrow(rects.right)?,
        arrow(rects.up)?,
    ])
}

fn slice_cursor(graphics: &Graphics, skin: &str) -> Result<CursorSprite> {
    let rects = &graphics.skin_rects.cursor;
    let frame = FrameTiles::slice(graphics, skin, rects, Z_CURSOR)?;
    let mut center = Sprite::new(graphics.load_texture(skin, rects.center)?).with_z(Z_CURSOR);
    center.set_pos(frame.top_left.width(), frame.top_left.height());
    Ok(CursorSprite {
        center,
        frame,
        x: 0.0,
        y: 0.0,
        width: 32.0,
        height: 32.0,
        z: Z_CURSOR,
        opacity: 1.0,
        visible: false,
        brightening: false,
    })
}

fn slice_button(graphics: &Graphics, skin: &str) -> Result<AnimatedSprite> {
    let frames = graphics
        .skin_rects
        .button
        .quadrants()
        .into_iter()
        .map(|rect| graphics.load_texture(skin, rect))
        .collect::<Result<Vec<_>>>()?;
    let mut button = AnimatedSprite::new(frames);
    button.z = Z_BUTTON;
    button.animation_speed = BUTTON_ANIMATION_SPEED;
    button.visible = false;
    Ok(button)
}

fn slice_border(graphics: &Graphics, skin: &str) -> Result<FrameTiles> {
    FrameTiles::slice(graphics, skin, &graphics.skin_rects.border, Z_BORDER)
}
