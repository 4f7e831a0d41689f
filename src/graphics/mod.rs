//! Graphics collaborator
//!
//! [`Graphics`] bundles what every window reads but never owns: the display
//! settings, the skin rectangle catalog, the icon set, the vocabulary and the
//! texture source. It is created once by the host and shared by `Rc`.

pub mod atlas;

pub use atlas::{TextureAtlas, TextureRegion, TextureSource};

use crate::config::{DisplaySettings, IconSet, UiConfig, Vocab};
use crate::error::Result;
use crate::geometry::Rect;
use crate::skin::SkinRects;

pub struct Graphics {
    pub display: DisplaySettings,
    pub skin_rects: SkinRects,
    pub icons: IconSet,
    pub vocab: Vocab,
    textures: Box<dyn TextureSource>,
}

impl Graphics {
    pub fn new(config: UiConfig, textures: Box<dyn TextureSource>) -> Self {
        Graphics {
            display: config.display,
            skin_rects: config.skin_rects,
            icons: config.icons,
            vocab: config.vocab,
            textures,
        }
    }

    /// Loads a sub-rectangle of a skin image
    pub fn load_texture(&self, image: &str, rect: Rect) -> Result<TextureRegion> {
        self.textures.load_texture(image, rect)
    }

    /// Source rect of an icon in the icon sheet
    pub fn icon_rect(&self, icon_index: u32) -> Rect {
        let columns = self.icons.columns.max(1);
        let size = self.icons.icon_size;
        Rect::new(
            (icon_index % columns) as f32 * size,
            (icon_index / columns) as f32 * size,
            size,
            size,
        )
    }

    /// Loads the region of an icon
    pub fn load_icon(&self, icon_index: u32) -> Result<TextureRegion> {
        self.textures
            .load_texture(&self.icons.image, self.icon_rect(icon_index))
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::config::{SKIN_CELESTIA, SKIN_DEFAULT, SKIN_LUNA, SKIN_RARITY};
    use std::rc::Rc;

    /// Graphics with every default skin registered at 192x192
    pub fn graphics() -> Rc<Graphics> {
        graphics_with(UiConfig::default())
    }

    pub fn graphics_with(config: UiConfig) -> Rc<Graphics> {
        let mut atlas = TextureAtlas::new();
        for skin in [SKIN_DEFAULT, SKIN_CELESTIA, SKIN_LUNA, SKIN_RARITY] {
            atlas.register(skin, 192, 192);
        }
        atlas.register("iconset", 384, 384);
        Rc::new(Graphics::new(config, Box::new(atlas)))
    }
}
