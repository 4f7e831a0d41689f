//! Sprite primitives
//!
//! - [`Sprite`]: one textured quad (a skin tile, an icon)
//! - [`AnimatedSprite`]: a list of texture frames played at a fixed speed
//! - [`TextSprite`]: bitmap-font text
//!
//! Positions are relative to the parent (window or group). Nothing here
//! knows about SDL2; backends consume the draw commands emitted through
//! [`crate::render::Renderable`].

use crate::geometry::{Point, Rect};
use crate::graphics::TextureRegion;
use crate::render::{DrawCommand, RenderList, Renderable};
use crate::text::{self, FontSetting};

#[derive(Debug, Clone)]
pub struct Sprite {
    pub region: TextureRegion,
    pub x: f32,
    pub y: f32,
    pub scale_x: f32,
    pub scale_y: f32,
    pub z: f32,
    pub opacity: f32,
    pub visible: bool,
    pub interactive: bool,
}

impl Sprite {
    pub fn new(region: TextureRegion) -> Self {
        Sprite {
            region,
            x: 0.0,
            y: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            z: 0.0,
            opacity: 1.0,
            visible: true,
            interactive: false,
        }
    }

    pub fn with_z(mut self, z: f32) -> Self {
        self.z = z;
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn set_pos(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    pub fn set_scale(&mut self, scale_x: f32, scale_y: f32) {
        self.scale_x = scale_x;
        self.scale_y = scale_y;
    }

    /// Native width of the texture region
    pub fn texture_width(&self) -> f32 {
        self.region.rect.width
    }

    /// Native height of the texture region
    pub fn texture_height(&self) -> f32 {
        self.region.rect.height
    }

    /// Scaled width
    pub fn width(&self) -> f32 {
        self.region.rect.width * self.scale_x
    }

    /// Scaled height
    pub fn height(&self) -> f32 {
        self.region.rect.height * self.scale_y
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width(), self.height())
    }
}

impl Renderable for Sprite {
    fn z(&self) -> f32 {
        self.z
    }

    fn emit(&self, origin: Point, opacity: f32, list: &mut RenderList) {
        if !self.visible {
            return;
        }
        list.push(
            self.z,
            DrawCommand::Texture {
                region: self.region.clone(),
                dest: self.bounds().offset(origin.x, origin.y),
                opacity: self.opacity * opacity,
            },
        );
    }
}

/// Frame-list animation
///
/// `animation_speed` is the number of frames advanced per update at speed
/// factor 1. A speed of 0.25 shows each frame for four updates.
#[derive(Debug, Clone)]
pub struct AnimatedSprite {
    frames: Vec<TextureRegion>,
    cursor: f32,
    pub animation_speed: f32,
    pub loop_animation: bool,
    is_playing: bool,
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub opacity: f32,
    pub visible: bool,
    pub interactive: bool,
}

impl AnimatedSprite {
    pub fn new(frames: Vec<TextureRegion>) -> Self {
        AnimatedSprite {
            frames,
            cursor: 0.0,
            animation_speed: 1.0,
            loop_animation: true,
            is_playing: true,
            x: 0.0,
            y: 0.0,
            z: 0.0,
            opacity: 1.0,
            visible: true,
            interactive: false,
        }
    }

    pub fn set_pos(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    pub fn play(&mut self) {
        self.is_playing = true;
    }

    pub fn stop(&mut self) {
        self.is_playing = false;
    }

    pub fn reset(&mut self) {
        self.cursor = 0.0;
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn current_frame(&self) -> usize {
        self.cursor as usize
    }

    pub fn frame(&self, index: usize) -> Option<&TextureRegion> {
        self.frames.get(index)
    }

    /// Advances the animation by one tick
    pub fn update(&mut self, speed_factor: f32) {
        if !self.is_playing || self.frames.is_empty() {
            return;
        }
        let len = self.frames.len() as f32;
        let next = self.cursor + self.animation_speed * speed_factor;
        if next < len {
            self.cursor = next;
        } else if self.loop_animation {
            self.cursor = next % len;
        } else {
            self.cursor = len - 1.0;
            self.is_playing = false;
        }
    }

    pub fn width(&self) -> f32 {
        self.frames.first().map(|f| f.rect.width).unwrap_or(0.0)
    }

    pub fn height(&self) -> f32 {
        self.frames.first().map(|f| f.rect.height).unwrap_or(0.0)
    }
}

impl Renderable for AnimatedSprite {
    fn z(&self) -> f32 {
        self.z
    }

    fn emit(&self, origin: Point, opacity: f32, list: &mut RenderList) {
        if !self.visible {
            return;
        }
        if let Some(region) = self.frames.get(self.current_frame()) {
            list.push(
                self.z,
                DrawCommand::Texture {
                    region: region.clone(),
                    dest: Rect::new(
                        origin.x + self.x,
                        origin.y + self.y,
                        region.rect.width,
                        region.rect.height,
                    ),
                    opacity: self.opacity * opacity,
                },
            );
        }
    }
}

/// Bitmap-font text
#[derive(Debug, Clone)]
pub struct TextSprite {
    text: String,
    pub font: FontSetting,
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub visible: bool,
    pub interactive: bool,
}

impl TextSprite {
    pub fn new(text: impl Into<String>, font: FontSetting) -> Self {
        TextSprite {
            text: text.into(),
            font,
            x: 0.0,
            y: 0.0,
            z: 0.0,
            visible: true,
            interactive: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn set_pos(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    pub fn width(&self) -> f32 {
        text::measure(&self.text, &self.font).0
    }

    pub fn height(&self) -> f32 {
        text::measure(&self.text, &self.font).1
    }

    pub fn bounds(&self) -> Rect {
        let (w, h) = text::measure(&self.text, &self.font);
        Rect::new(self.x, self.y, w, h)
    }
}

impl Renderable for TextSprite {
    fn z(&self) -> f32 {
        self.z
    }

    fn emit(&self, origin: Point, opacity: f32, list: &mut RenderList) {
        if !self.visible || self.text.is_empty() {
            return;
        }
        list.push(
            self.z,
            DrawCommand::Text {
                text: self.text.clone(),
                x: origin.x + self.x,
                y: origin.y + self.y,
                font: self.font,
                opacity,
            },
        );
    }
}
