use crate::geometry::Rect;
use std::fmt;

/// Errors raised by the window layer
#[derive(Debug)]
pub enum UiError {
    /// A text selection was requested without any text
    MissingText,

    /// A skin rectangle falls outside its image or has no area
    BadSkinRect { skin: String, rect: Rect },

    /// Skin image key was never registered with the texture source
    UnknownSkin(String),

    /// Reading or writing a config/settings file failed
    Io(std::io::Error),

    /// Config/settings JSON could not be (de)serialized
    Json(serde_json::Error),
}

impl fmt::Display for UiError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            UiError::MissingText => write!(f, "Text selection requires non-empty text"),
            UiError::BadSkinRect { skin, rect } => write!(
                f,
                "Skin rect ({}, {}, {}x{}) is invalid for skin '{}'",
                rect.x, rect.y, rect.width, rect.height, skin
            ),
            UiError::UnknownSkin(skin) => write!(f, "Unknown skin: {}", skin),
            UiError::Io(e) => write!(f, "IO error: {}", e),
            UiError::Json(e) => write!(f, "JSON error: {}", e),
        }
    }
}

impl std::error::Error for UiError {}

impl From<std::io::Error> for UiError {
    fn from(err: std::io::Error) -> Self {
        UiError::Io(err)
    }
}

impl From<serde_json::Error> for UiError {
    fn from(err: serde_json::Error) -> Self {
        UiError::Json(err)
    }
}

impl From<UiError> for String {
    fn from(error: UiError) -> Self {
        error.to_string()
    }
}

pub type Result<T> = std::result::Result<T, UiError>;
