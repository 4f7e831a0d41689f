//! Window skins
//!
//! - `catalog`: where each tile lives inside a skin image
//! - `slicer`: cuts a skin image into sprites
//! - `layout`: nine-patch stretching for an arbitrary window size

pub mod catalog;
pub mod layout;
pub mod slicer;

pub use catalog::{ArrowRects, NineSlice, SkinRects};
pub use slicer::{CursorSprite, FrameTiles, Skin};
