//! Skinned window and menu layer for the Puno card game
//!
//! - `window`: skinned windows with a selection grid
//! - `skin`: slicing and nine-patch layout of window skins
//! - `gui`: the concrete title, option, help, mode and rule windows
//! - `settings`: persisted volumes and match rules
//!
//! The core is backend-agnostic: windows flatten into [`render::DrawCommand`]s.
//! The `sdl` feature adds the SDL2 backend and input translation used by the
//! demo binary.

pub mod config;
pub mod drawable;
pub mod error;
pub mod geometry;
pub mod graphics;
pub mod gui;
pub mod render;
pub mod scene;
pub mod settings;
pub mod skin;
pub mod sound;
pub mod sprite;
pub mod text;
pub mod widgets;
pub mod window;

#[cfg(feature = "sdl")]
pub mod input_system;
#[cfg(feature = "sdl")]
pub mod sdl_backend;

pub use error::{Result, UiError};
