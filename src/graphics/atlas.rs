use crate::error::{Result, UiError};
use crate::geometry::Rect;
use std::collections::HashMap;

/// A sub-rectangle of a named image
#[derive(Debug, Clone, PartialEq)]
pub struct TextureRegion {
    pub image: String,
    pub rect: Rect,
}

/// Texture lookup collaborator
///
/// Windows never touch pixels. They only ask for validated regions of
/// images the host has loaded, and the backend resolves the image key when
/// drawing.
pub trait TextureSource {
    /// Pixel size of a loaded image, or None if the key is unknown
    fn image_size(&self, image: &str) -> Option<(u32, u32)>;

    /// Hands out a region after checking it lies inside the image
    fn load_texture(&self, image: &str, rect: Rect) -> Result<TextureRegion> {
        let (w, h) = self
            .image_size(image)
            .ok_or_else(|| UiError::UnknownSkin(image.to_string()))?;
        let fits = rect.x >= 0.0
            && rect.y >= 0.0
            && rect.width > 0.0
            && rect.height > 0.0
            && rect.right() <= w as f32
            && rect.bottom() <= h as f32;
        if !fits {
            return Err(UiError::BadSkinRect {
                skin: image.to_string(),
                rect,
            });
        }
        Ok(TextureRegion {
            image: image.to_string(),
            rect,
        })
    }
}

/// Image key -> size table filled by the host after it loads textures
#[derive(Debug, Default, Clone)]
pub struct TextureAtlas {
    sizes: HashMap<String, (u32, u32)>,
}

impl TextureAtlas {
    pub fn new() -> Self {
        TextureAtlas {
            sizes: HashMap::new(),
        }
    }

    /// Records a loaded image
    pub fn register(&mut self, image: impl Into<String>, width: u32, height: u32) {
        self.sizes.insert(image.into(), (width, height));
    }
}

impl TextureSource for TextureAtlas {
    fn image_size(&self, image: &str) -> Option<(u32, u32)> {
        self.sizes.get(image).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atlas() -> TextureAtlas {
        let mut atlas = TextureAtlas::new();
        atlas.register("default", 192, 192);
        atlas
    }

    #[test]
    fn test_region_inside_image() {
        let region = atlas().load_texture("default", Rect::new(96.0, 0.0, 96.0, 96.0)).unwrap();
        assert_eq!(region.image, "default");
        assert_eq!(region.rect.width, 96.0);
    }

    #[test]
    fn test_region_outside_image_fails() {
        let result = atlas().load_texture("default", Rect::new(180.0, 0.0, 24.0, 24.0));
        assert!(matches!(result, Err(UiError::BadSkinRect { .. })));
    }

    #[test]
    fn test_empty_region_fails() {
        let result = atlas().load_texture("default", Rect::new(0.0, 0.0, 0.0, 24.0));
        assert!(matches!(result, Err(UiError::BadSkinRect { .. })));
    }

    #[test]
    fn test_unknown_image_fails() {
        let result = atlas().load_texture("luna", Rect::new(0.0, 0.0, 8.0, 8.0));
        assert!(matches!(result, Err(UiError::UnknownSkin(name)) if name == "luna"));
    }
}
