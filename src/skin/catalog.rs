//! Skin rectangle catalog
//!
//! Every window skin image shares one layout. The catalog names the pixel
//! rectangles inside that image for the border frame, the selection cursor,
//! the background tiles, the scroll arrows and the "continue" button.
//!
//! The default layout follows the common 192x192 window skin sheet:
//!
//! ```text
//!  0      96     192
//!  +------+------+   0
//!  |index |border|
//!  |      |arrows|
//!  +------+------+  96
//!  |patt- |cursor|
//!  |ern   |button|
//!  +------+------+ 192
//! ```

use crate::geometry::Rect;
use serde::{Deserialize, Serialize};

/// The nine named regions of a nine-patch frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NineSlice {
    pub top_left: Rect,
    pub top: Rect,
    pub top_right: Rect,
    pub left: Rect,
    pub center: Rect,
    pub right: Rect,
    pub bottom_left: Rect,
    pub bottom: Rect,
    pub bottom_right: Rect,
}

impl NineSlice {
    /// Builds a nine-slice from an outer rect and a uniform corner size
    pub fn from_outer(outer: Rect, corner: f32) -> Self {
        let inner_w = outer.width - corner * 2.0;
        let inner_h = outer.height - corner * 2.0;
        let (x0, x1, x2) = (outer.x, outer.x + corner, outer.right() - corner);
        let (y0, y1, y2) = (outer.y, outer.y + corner, outer.bottom() - corner);
        NineSlice {
            top_left: Rect::new(x0, y0, corner, corner),
            top: Rect::new(x1, y0, inner_w, corner),
            top_right: Rect::new(x2, y0, corner, corner),
            left: Rect::new(x0, y1, corner, inner_h),
            center: Rect::new(x1, y1, inner_w, inner_h),
            right: Rect::new(x2, y1, corner, inner_h),
            bottom_left: Rect::new(x0, y2, corner, corner),
            bottom: Rect::new(x1, y2, inner_w, corner),
            bottom_right: Rect::new(x2, y2, corner, corner),
        }
    }
}

/// Scroll arrow regions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArrowRects {
    pub up: Rect,
    pub down: Rect,
    pub left: Rect,
    pub right: Rect,
}

/// Complete rectangle catalog for one skin layout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkinRects {
    pub border: NineSlice,
    pub cursor: NineSlice,
    pub index: Rect,
    pub pattern: Rect,
    pub button: Rect,
    pub arrows: ArrowRects,
}

impl Default for SkinRects {
    fn default() -> Self {
        SkinRects {
            border: NineSlice::from_outer(Rect::new(96.0, 0.0, 96.0, 96.0), 24.0),
            cursor: NineSlice::from_outer(Rect::new(96.0, 96.0, 48.0, 48.0), 4.0),
            index: Rect::new(0.0, 0.0, 96.0, 96.0),
            pattern: Rect::new(0.0, 96.0, 96.0, 96.0),
            button: Rect::new(144.0, 96.0, 48.0, 48.0),
            arrows: ArrowRects {
                up: Rect::new(132.0, 24.0, 24.0, 12.0),
                down: Rect::new(132.0, 60.0, 24.0, 12.0),
                left: Rect::new(120.0, 36.0, 12.0, 24.0),
                right: Rect::new(156.0, 36.0, 12.0, 24.0),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_outer_tiles_cover_outer() {
        let slice = NineSlice::from_outer(Rect::new(96.0, 0.0, 96.0, 96.0), 24.0);
        assert_eq!(slice.top_left, Rect::new(96.0, 0.0, 24.0, 24.0));
        assert_eq!(slice.top, Rect::new(120.0, 0.0, 48.0, 24.0));
        assert_eq!(slice.top_right, Rect::new(168.0, 0.0, 24.0, 24.0));
        assert_eq!(slice.left, Rect::new(96.0, 24.0, 24.0, 48.0));
        assert_eq!(slice.bottom_right, Rect::new(168.0, 72.0, 24.0, 24.0));
        assert_eq!(slice.center, Rect::new(120.0, 24.0, 48.0, 48.0));
    }

    #[test]
    fn test_catalog_json_round_trip() {
        let rects = SkinRects::default();
        let json = serde_json::to_string(&rects).unwrap();
        let back: SkinRects = serde_json::from_str(&json).unwrap();
        assert_eq!(rects, back);
    }
}
