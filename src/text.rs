//! Bitmap Text Metrics
//!
//! The window layer renders all text with a 5x7 bitmap font. This module owns
//! the glyph table, the font settings used by windows, measurement and the
//! word wrapping behind `Window::draw_text(.., autowrap = true)`.
//!
//! Drawing itself happens in the backend (see `sdl_backend`), which walks the
//! glyph rows returned by [`glyph`].

use serde::{Deserialize, Serialize};

/// Rows per glyph
pub const GLYPH_ROWS: usize = 7;

/// Columns per glyph (excluding the 1px advance gap)
pub const GLYPH_COLS: u32 = 5;

/// Font settings for a text sprite
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontSetting {
    /// Pixel scale (1 = 5x7 glyphs, 2 = 10x14, ...)
    pub scale: u32,

    /// RGB color
    pub color: [u8; 3],
}

impl Default for FontSetting {
    fn default() -> Self {
        FontSetting {
            scale: 2,
            color: [255, 255, 255],
        }
    }
}

impl FontSetting {
    /// Horizontal advance per character
    pub fn char_advance(&self) -> f32 {
        ((GLYPH_COLS + 1) * self.scale) as f32
    }

    /// Vertical advance per line (7 rows + 2 rows gap)
    pub fn line_advance(&self) -> f32 {
        ((GLYPH_ROWS as u32 + 2) * self.scale) as f32
    }
}

/// Measures multi-line text, returns (width, height)
pub fn measure(text: &str, font: &FontSetting) -> (f32, f32) {
    let mut lines = 0usize;
    let mut widest = 0usize;
    for line in text.split('\n') {
        lines += 1;
        widest = widest.max(line.chars().count());
    }
    (
        widest as f32 * font.char_advance(),
        lines as f32 * font.line_advance(),
    )
}

/// Word-wraps text so no line is wider than `max_width`.
///
/// Words longer than a full line are hard-split. Existing line breaks are kept.
pub fn wrap(text: &str, font: &FontSetting, max_width: f32) -> String {
    let per_line = ((max_width / font.char_advance()).floor() as usize).max(1);
    let mut out: Vec<String> = Vec::new();

    for paragraph in text.split('\n') {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();
            while word.len() > per_line {
                if !line.is_empty() {
                    out.push(std::mem::take(&mut line));
                }
                let rest = word.split_off(per_line);
                out.push(word.iter().collect());
                word = rest;
            }
            let line_len = line.chars().count();
            let needed = if line_len == 0 { word.len() } else { line_len + 1 + word.len() };
            if needed > per_line {
                out.push(std::mem::take(&mut line));
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.extend(word);
        }
        out.push(line);
    }

    out.join("\n")
}

/// Returns the 5x7 bitmap for a character (1 = pixel on).
///
/// Lookup is case-insensitive; unknown characters render as a full block.
pub fn glyph(c: char) -> [u8; GLYPH_ROWS] {
    match c.to_ascii_uppercase() {
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01110],
        'H' => [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b11111],
        'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10001, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01110, 0b10001, 0b10000, 0b01110, 0b00001, 0b10001, 0b01110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10101, 0b11011, 0b10001],
        'X' => [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00110, 0b01000, 0b10000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        ':' => [0b00000, 0b00000, 0b00100, 0b00000, 0b00100, 0b00000, 0b00000],
        '/' => [0b00001, 0b00010, 0b00010, 0b00100, 0b01000, 0b01000, 0b10000],
        '-' => [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
        '+' => [0b00000, 0b00100, 0b00100, 0b11111, 0b00100, 0b00100, 0b00000],
        '.' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100],
        ',' => [0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b00100, 0b01000],
        '!' => [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100],
        '?' => [0b01110, 0b10001, 0b00001, 0b00110, 0b00100, 0b00000, 0b00100],
        '\'' => [0b00100, 0b00100, 0b01000, 0b00000, 0b00000, 0b00000, 0b00000],
        '%' => [0b11001, 0b11010, 0b00010, 0b00100, 0b01000, 0b01011, 0b10011],
        '(' => [0b00010, 0b00100, 0b01000, 0b01000, 0b01000, 0b00100, 0b00010],
        ')' => [0b01000, 0b00100, 0b00010, 0b00010, 0b00010, 0b00100, 0b01000],
        ' ' => [0; GLYPH_ROWS],
        _ => [0b11111; GLYPH_ROWS],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_single_and_multi_line() {
        let font = FontSetting::default();
        assert_eq!(measure("ABC", &font), (36.0, 18.0));
        assert_eq!(measure("AB\nABCD", &font), (48.0, 36.0));
    }

    #[test]
    fn test_wrap_breaks_on_words() {
        let font = FontSetting { scale: 1, ..Default::default() };
        // 6px per char, 60px = 10 chars per line
        let wrapped = wrap("play the card you drew", &font, 60.0);
        assert_eq!(wrapped, "play the\ncard you\ndrew");
    }

    #[test]
    fn test_wrap_hard_splits_long_words() {
        let font = FontSetting { scale: 1, ..Default::default() };
        let wrapped = wrap("abcdefghijkl", &font, 30.0);
        assert_eq!(wrapped, "abcde\nfghij\nkl");
    }

    #[test]
    fn test_wrap_keeps_line_breaks() {
        let font = FontSetting { scale: 1, ..Default::default() };
        assert_eq!(wrap("one\ntwo", &font, 600.0), "one\ntwo");
    }

    #[test]
    fn test_glyph_case_insensitive() {
        assert_eq!(glyph('a'), glyph('A'));
        assert_eq!(glyph(' '), [0; GLYPH_ROWS]);
        assert_eq!(glyph('~'), [0b11111; GLYPH_ROWS]);
    }
}
