//! Nine-patch layout
//!
//! Stretches a sliced skin to an arbitrary window size. Corners keep their
//! native size; straight edges scale along their long axis only; every tile
//! is placed by accumulating the extents of its neighbours.

use crate::geometry::Rect;

use super::catalog::{NineSlice, SkinRects};
use super::slicer::{FrameTiles, Skin};

/// Stretch ratios of the border edges for a window of `width` x `height`.
///
/// Floored at 0: a window smaller than its corners collapses the edges
/// instead of mirroring them.
pub fn border_ratios(slice: &NineSlice, width: f32, height: f32) -> (f32, f32) {
    let corners_x = slice.top_left.width + slice.top_right.width;
    let corners_y = slice.top_left.height + slice.bottom_left.height;
    (
        ((width - corners_x) / slice.top.width).max(0.0),
        ((height - corners_y) / slice.left.height).max(0.0),
    )
}

/// Stretch ratios of the cursor edges for a cursor rectangle.
///
/// Floored at 1: the cursor never shrinks below its native tile size.
pub fn cursor_ratios(slice: &NineSlice, cursor: Rect) -> (f32, f32) {
    (
        (cursor.width / slice.top.width).max(1.0),
        (cursor.height / slice.left.height).max(1.0),
    )
}

/// Scales the straight edges and places all eight tiles
pub fn arrange_frame(tiles: &mut FrameTiles, ratio_x: f32, ratio_y: f32) {
    tiles.top.set_scale(ratio_x, 1.0);
    tiles.bottom.set_scale(ratio_x, 1.0);
    tiles.left.set_scale(1.0, ratio_y);
    tiles.right.set_scale(1.0, ratio_y);

    tiles.top.x = tiles.top_left.width();
    tiles.top_right.x = tiles.top.x + tiles.top.width();
    tiles.left.y = tiles.top_left.height();
    tiles.bottom_left.y = tiles.left.y + tiles.left.height();

    let (top_x, right_x) = (tiles.top.x, tiles.top_right.x);
    let (left_y, bottom_y) = (tiles.left.y, tiles.bottom_left.y);
    tiles.bottom.set_pos(top_x, bottom_y);
    tiles.bottom_right.set_pos(right_x, bottom_y);
    tiles.right.set_pos(right_x, left_y);
}

/// Lays out every skin sprite for a window of `width` x `height`.
///
/// `cursor_rect` is the window's cursor rectangle for item 0; `spacing`
/// offsets the arrows and the button from the edges.
pub fn layout_skin(
    skin: &mut Skin,
    rects: &SkinRects,
    width: f32,
    height: f32,
    spacing: f32,
    cursor_rect: Rect,
) {
    let background = (width / rects.index.width, height / rects.index.height);
    skin.index.set_scale(background.0, background.1);
    skin.pattern.set_scale(background.0, background.1);

    let (bx, by) = border_ratios(&rects.border, width, height);
    arrange_frame(&mut skin.border, bx, by);

    let (cx, cy) = cursor_ratios(&rects.cursor, cursor_rect);
    skin.cursor.width = width;
    skin.cursor.height = height;
    skin.cursor.center.set_scale(cx, cy);
    arrange_frame(&mut skin.cursor.frame, cx, cy);

    let [down, left, right, up] = &mut skin.arrows;
    up.set_pos((width - up.width()) / 2.0, spacing);
    down.set_pos(up.x, height - spacing - down.height());
    left.set_pos(spacing, (height - left.height()) / 2.0);
    right.set_pos(width - spacing - right.width(), left.y);

    let button_x = (width - skin.button.width()) / 2.0;
    skin.button.set_pos(button_x, height - spacing * 2.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SKIN_DEFAULT;
    use crate::graphics::test_support;

    fn sliced() -> (Skin, SkinRects) {
        let graphics = test_support::graphics();
        let skin = Skin::slice(&graphics, SKIN_DEFAULT).unwrap();
        (skin, graphics.skin_rects)
    }

    #[test]
    fn test_border_ratios() {
        let rects = SkinRects::default();
        // (300 - 48) / 48, (150 - 48) / 48
        assert_eq!(border_ratios(&rects.border, 300.0, 150.0), (5.25, 2.125));
    }

    #[test]
    fn test_border_ratios_never_negative() {
        let rects = SkinRects::default();
        assert_eq!(border_ratios(&rects.border, 10.0, 1.0), (0.0, 0.0));
    }

    #[test]
    fn test_cursor_ratios_floor_at_one() {
        let rects = SkinRects::default();
        assert_eq!(
            cursor_ratios(&rects.cursor, Rect::new(0.0, 0.0, 10.0, 10.0)),
            (1.0, 1.0)
        );
        assert_eq!(
            cursor_ratios(&rects.cursor, Rect::new(0.0, 0.0, 200.0, 80.0)),
            (5.0, 2.0)
        );
    }

    #[test]
    fn test_frame_tiles_accumulate() {
        let (mut skin, rects) = sliced();
        layout_skin(&mut skin, &rects, 300.0, 150.0, 8.0, Rect::new(0.0, 0.0, 40.0, 40.0));
        let b = &skin.border;

        assert_eq!((b.top_left.scale_x, b.top_left.scale_y), (1.0, 1.0));
        assert_eq!((b.bottom_right.scale_x, b.bottom_right.scale_y), (1.0, 1.0));
        assert_eq!((b.top.scale_x, b.top.scale_y), (5.25, 1.0));
        assert_eq!((b.left.scale_x, b.left.scale_y), (1.0, 2.125));

        assert_eq!(b.top.x, 24.0);
        assert_eq!(b.top_right.x, 276.0);
        assert_eq!(b.left.y, 24.0);
        assert_eq!(b.bottom_left.y, 126.0);
        assert_eq!((b.bottom.x, b.bottom.y), (24.0, 126.0));
        assert_eq!((b.bottom_right.x, b.bottom_right.y), (276.0, 126.0));
        assert_eq!((b.right.x, b.right.y), (276.0, 24.0));

        // Frame spans the full window
        assert_eq!(b.top_right.x + b.top_right.width(), 300.0);
        assert_eq!(b.bottom_left.y + b.bottom_left.height(), 150.0);
    }

    #[test]
    fn test_arrows_and_button_relative_to_bounds() {
        let (mut skin, rects) = sliced();
        layout_skin(&mut skin, &rects, 300.0, 150.0, 8.0, Rect::new(0.0, 0.0, 40.0, 40.0));

        let up = skin.arrow_up();
        assert_eq!((up.x, up.y), (138.0, 8.0));
        let down = skin.arrow_down();
        assert_eq!((down.x, down.y), (138.0, 130.0));
        let left = skin.arrow_left();
        assert_eq!((left.x, left.y), (8.0, 63.0));
        let right = skin.arrow_right();
        assert_eq!((right.x, right.y), (280.0, 63.0));

        assert_eq!((skin.button.x, skin.button.y), (138.0, 134.0));
    }

    #[test]
    fn test_background_scales_to_window() {
        let (mut skin, rects) = sliced();
        layout_skin(&mut skin, &rects, 192.0, 48.0, 8.0, Rect::default());
        assert_eq!((skin.index.scale_x, skin.index.scale_y), (2.0, 0.5));
        assert_eq!(skin.pattern.width(), 192.0);
        assert_eq!(skin.pattern.height(), 48.0);
    }
}
