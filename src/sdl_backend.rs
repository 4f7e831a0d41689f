//! SDL2 backend
//!
//! Loads the skin and icon images into textures and executes draw commands
//! on an SDL2 canvas. When an image file is missing a placeholder skin is
//! painted procedurally, so the demo runs from a bare checkout.

use std::collections::HashMap;

use sdl2::image::LoadTexture;
use sdl2::pixels::{Color, PixelFormatEnum};
use sdl2::rect::Rect as SdlRect;
use sdl2::render::{BlendMode, Canvas, Texture, TextureCreator};
use sdl2::surface::Surface;
use sdl2::video::{Window, WindowContext};

use crate::config::{IconSet, UiConfig};
use crate::geometry::Rect;
use crate::graphics::TextureAtlas;
use crate::render::DrawCommand;
use crate::skin::{NineSlice, SkinRects};
use crate::text::{self, GLYPH_COLS};

pub struct SdlRenderer<'a> {
    textures: HashMap<String, Texture<'a>>,
}

impl<'a> SdlRenderer<'a> {
    pub fn new() -> Self {
        SdlRenderer {
            textures: HashMap::new(),
        }
    }

    /// Loads every skin and the icon sheet, returning their sizes
    pub fn load_images(
        &mut self,
        texture_creator: &'a TextureCreator<WindowContext>,
        config: &UiConfig,
    ) -> Result<TextureAtlas, String> {
        let mut atlas = TextureAtlas::new();

        for (key, path) in &config.skins {
            let texture = match texture_creator.load_texture(path) {
                Ok(texture) => texture,
                Err(e) => {
                    log::warn!("Failed to load skin {} ({}), painting a placeholder", path, e);
                    let surface = paint_skin(&config.skin_rects, skin_tint(key))?;
                    texture_creator
                        .create_texture_from_surface(&surface)
                        .map_err(|e| e.to_string())?
                }
            };
            self.insert(&mut atlas, key, texture);
        }

        let icons = &config.icons;
        let texture = match texture_creator.load_texture(&icons.path) {
            Ok(texture) => texture,
            Err(e) => {
                log::warn!("Failed to load icons {} ({}), painting a placeholder", icons.path, e);
                let surface = paint_icons(icons)?;
                texture_creator
                    .create_texture_from_surface(&surface)
                    .map_err(|e| e.to_string())?
            }
        };
        self.insert(&mut atlas, &icons.image, texture);

        log::info!("Loaded {} UI textures", self.textures.len());
        Ok(atlas)
    }

    fn insert(&mut self, atlas: &mut TextureAtlas, key: &str, mut texture: Texture<'a>) {
        let query = texture.query();
        texture.set_blend_mode(BlendMode::Blend);
        atlas.register(key, query.width, query.height);
        self.textures.insert(key.to_string(), texture);
    }

    /// Executes draw commands in order
    pub fn draw(&mut self, canvas: &mut Canvas<Window>, commands: &[DrawCommand]) -> Result<(), String> {
        canvas.set_blend_mode(BlendMode::Blend);
        for command in commands {
            match command {
                DrawCommand::Texture {
                    region,
                    dest,
                    opacity,
                } => {
                    let Some(dst) = to_sdl(dest) else {
                        continue;
                    };
                    let Some(texture) = self.textures.get_mut(&region.image) else {
                        log::warn!("Draw skipped, unknown texture '{}'", region.image);
                        continue;
                    };
                    texture.set_alpha_mod(alpha(*opacity));
                    canvas.copy(texture, to_sdl(&region.rect), dst)?;
                }
                DrawCommand::Text {
                    text,
                    x,
                    y,
                    font,
                    opacity,
                } => {
                    let [r, g, b] = font.color;
                    let color = Color::RGBA(r, g, b, alpha(*opacity));
                    let line_advance = font.line_advance() as i32;
                    for (i, line) in text.split('\n').enumerate() {
                        draw_simple_text(
                            canvas,
                            line,
                            *x as i32,
                            *y as i32 + i as i32 * line_advance,
                            color,
                            font.scale,
                        )?;
                    }
                }
                DrawCommand::Fill {
                    rect,
                    color,
                    opacity,
                } => {
                    if let Some(dst) = to_sdl(rect) {
                        let [r, g, b] = *color;
                        canvas.set_draw_color(Color::RGBA(r, g, b, alpha(*opacity)));
                        canvas.fill_rect(dst)?;
                    }
                }
            }
        }
        Ok(())
    }
}

impl Default for SdlRenderer<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// Draws one line of text using the bitmap font
///
/// Each character is 5x7 pixels, scaled by `scale`, advancing 6 pixels
/// (times scale) per character.
pub fn draw_simple_text(
    canvas: &mut Canvas<Window>,
    text: &str,
    x: i32,
    y: i32,
    color: Color,
    scale: u32,
) -> Result<(), String> {
    canvas.set_draw_color(color);

    let char_width = (GLYPH_COLS + 1) * scale;
    let pixel_size = scale as i32;

    for (i, c) in text.chars().enumerate() {
        if c == ' ' {
            continue;
        }
        let char_x = x + (i as i32 * char_width as i32);
        for (row, bits) in text::glyph(c).iter().enumerate() {
            for col in 0..GLYPH_COLS {
                if bits & (1 << (GLYPH_COLS - 1 - col)) != 0 {
                    canvas.fill_rect(SdlRect::new(
                        char_x + col as i32 * pixel_size,
                        y + row as i32 * pixel_size,
                        scale,
                        scale,
                    ))?;
                }
            }
        }
    }

    Ok(())
}

fn alpha(opacity: f32) -> u8 {
    (opacity.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Rounds a float rect to pixels; empty rects draw nothing
fn to_sdl(rect: &Rect) -> Option<SdlRect> {
    let width = rect.width.round();
    let height = rect.height.round();
    if width < 1.0 || height < 1.0 {
        return None;
    }
    Some(SdlRect::new(
        rect.x.round() as i32,
        rect.y.round() as i32,
        width as u32,
        height as u32,
    ))
}

fn skin_tint(key: &str) -> [u8; 3] {
    match key {
        "celestia" => [200, 150, 60],
        "luna" => [60, 50, 120],
        "rarity" => [170, 80, 160],
        _ => [40, 60, 110],
    }
}

fn fill(surface: &mut Surface, rect: &Rect, color: Color) -> Result<(), String> {
    match to_sdl(rect) {
        Some(dst) => surface.fill_rect(dst, color),
        None => Ok(()),
    }
}

fn fill_slice(surface: &mut Surface, slice: &NineSlice, edge: Color, center: Color) -> Result<(), String> {
    for rect in [
        &slice.top_left,
        &slice.top,
        &slice.top_right,
        &slice.left,
        &slice.right,
        &slice.bottom_left,
        &slice.bottom,
        &slice.bottom_right,
    ] {
        fill(surface, rect, edge)?;
    }
    fill(surface, &slice.center, center)
}

/// Paints a placeholder skin sheet following the rectangle catalog
fn paint_skin(rects: &SkinRects, [r, g, b]: [u8; 3]) -> Result<Surface<'static>, String> {
    let extent = [
        rects.border.bottom_right,
        rects.cursor.bottom_right,
        rects.index,
        rects.pattern,
        rects.button,
    ]
    .iter()
    .fold((0.0f32, 0.0f32), |(w, h), rect| {
        (w.max(rect.right()), h.max(rect.bottom()))
    });
    let mut surface = Surface::new(
        extent.0.ceil() as u32,
        extent.1.ceil() as u32,
        PixelFormatEnum::RGBA32,
    )?;

    fill(&mut surface, &rects.index, Color::RGBA(r, g, b, 255))?;

    // 8px checkerboard
    let pattern = rects.pattern;
    let dark = Color::RGBA(r / 2, g / 2, b / 2, 255);
    let light = Color::RGBA(r / 2 + 20, g / 2 + 20, b / 2 + 20, 255);
    let mut y = 0.0;
    while y < pattern.height {
        let mut x = 0.0;
        while x < pattern.width {
            let odd = ((x / 8.0) as u32 + (y / 8.0) as u32) % 2 == 1;
            let cell = Rect::new(pattern.x + x, pattern.y + y, 8.0, 8.0);
            fill(&mut surface, &cell, if odd { light } else { dark })?;
            x += 8.0;
        }
        y += 8.0;
    }

    fill_slice(
        &mut surface,
        &rects.border,
        Color::RGBA(230, 230, 240, 255),
        Color::RGBA(0, 0, 0, 0),
    )?;
    fill_slice(
        &mut surface,
        &rects.cursor,
        Color::RGBA(255, 255, 255, 200),
        Color::RGBA(255, 255, 255, 90),
    )?;

    for arrow in [rects.arrows.up, rects.arrows.down, rects.arrows.left, rects.arrows.right] {
        fill(&mut surface, &arrow, Color::RGBA(255, 255, 255, 255))?;
    }
    for (i, frame) in rects.button.quadrants().iter().enumerate() {
        let level = 140 + 35 * i as u8;
        fill(&mut surface, frame, Color::RGBA(level, level, level, 255))?;
    }

    Ok(surface)
}

/// Paints a placeholder icon sheet with a cross at the close icon slot
fn paint_icons(icons: &IconSet) -> Result<Surface<'static>, String> {
    let columns = icons.columns.max(1);
    let size = icons.icon_size.max(1.0);
    let side = (columns as f32 * size) as u32;
    let mut surface = Surface::new(side, side, PixelFormatEnum::RGBA32)?;

    let origin_x = (icons.xmark % columns) as f32 * size;
    let origin_y = (icons.xmark / columns) as f32 * size;
    let red = Color::RGBA(220, 60, 60, 255);
    let steps = size as u32;
    for i in 2..steps.saturating_sub(2) {
        let d = i as f32;
        fill(&mut surface, &Rect::new(origin_x + d, origin_y + d, 2.0, 2.0), red)?;
        fill(&mut surface, &Rect::new(origin_x + size - d - 2.0, origin_y + d, 2.0, 2.0), red)?;
    }

    Ok(surface)
}
