//! Skinned windows
//!
//! A [`Window`] is a rectangle of the screen drawn with a sliced skin and
//! holding two kinds of content:
//!
//! - drawn objects (`draw_text`, `draw_icon`), tracked for disposal
//! - selection items, laid out by the selection grid (see `selection`)
//!
//! Concrete menus in `crate::gui` wrap a `Window` and configure its skin,
//! grid flow and items instead of extending it.
//!
//! # Example
//!
//! ```ignore
//! let mut win = Window::new(graphics, sound, 40.0, 40.0, 300.0, 200.0)?;
//! win.add_text_selection(TextSelection::new("Start Game").align(Align::Center))?;
//! win.activate();
//!
//! // Each frame
//! win.update();
//! let commands = win.draw_commands();
//! ```

pub mod input;
pub mod selection;

pub use input::{NavKey, PointerEvent};
pub use selection::{Align, GridFlow, ItemHandler, SelectionItem, TextSelection};

use crate::config::SKIN_DEFAULT;
use crate::drawable::Drawable;
use crate::error::Result;
use crate::geometry::{Point, Rect, clamp_dimension};
use crate::graphics::Graphics;
use crate::render::{DrawCommand, RenderList, Renderable};
use crate::scene::{SceneHost, WindowId};
use crate::skin::layout::layout_skin;
use crate::skin::slicer::Z_TEXT;
use crate::skin::Skin;
use crate::sound::Sound;
use crate::sprite::{Sprite, TextSprite};
use crate::text::{self, FontSetting};
use selection::SelectionGrid;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU32, Ordering};

static NEXT_WINDOW_ID: AtomicU32 = AtomicU32::new(1);

/// Content overflow bits, in arrow order
pub const SURPLUS_DOWN: u8 = 1 << 0;
pub const SURPLUS_LEFT: u8 = 1 << 1;
pub const SURPLUS_RIGHT: u8 = 1 << 2;
pub const SURPLUS_UP: u8 = 1 << 3;

/// Handle to an object created by `draw_text` / `draw_icon`.
///
/// Valid until the next `clear`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawnId(usize);

/// Receiver for the help text of the selected item
pub trait HelpSink {
    fn set_help_text(&mut self, text: &str);
}

pub struct Window {
    id: WindowId,
    label: &'static str,
    graphics: Rc<Graphics>,
    sound: Rc<dyn Sound>,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    visible: bool,
    skin_name: String,
    skin: Option<Skin>,
    drawn: Vec<Drawable>,
    grid: SelectionGrid,
    help_window: Option<Rc<RefCell<dyn HelpSink>>>,
    hovered: Option<usize>,
    pressed: bool,
}

impl Window {
    /// Creates a window with the default skin. Size is clamped to `[1, 4096]`.
    pub fn new(
        graphics: Rc<Graphics>,
        sound: Rc<dyn Sound>,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    ) -> Result<Self> {
        let mut window = Window {
            id: WindowId(NEXT_WINDOW_ID.fetch_add(1, Ordering::Relaxed)),
            label: "Window",
            graphics,
            sound,
            x,
            y,
            width: clamp_dimension(width),
            height: clamp_dimension(height),
            visible: true,
            skin_name: SKIN_DEFAULT.to_string(),
            skin: None,
            drawn: Vec::new(),
            grid: SelectionGrid::default(),
            help_window: None,
            hovered: None,
            pressed: false,
        };
        window.change_skin(SKIN_DEFAULT)?;
        Ok(window)
    }

    /// Default geometry: (0, 0) 300x150
    pub fn with_defaults(graphics: Rc<Graphics>, sound: Rc<dyn Sound>) -> Result<Self> {
        Self::new(graphics, sound, 0.0, 0.0, 300.0, 150.0)
    }

    pub fn id(&self) -> WindowId {
        self.id
    }

    /// Name used in log lines
    pub fn set_label(&mut self, label: &'static str) {
        self.label = label;
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn graphics(&self) -> &Rc<Graphics> {
        &self.graphics
    }

    pub fn sound(&self) -> &Rc<dyn Sound> {
        &self.sound
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn set_pos(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn padding(&self) -> f32 {
        self.graphics.display.padding
    }

    pub fn spacing(&self) -> f32 {
        self.graphics.display.spacing
    }

    pub fn line_height(&self) -> f32 {
        self.graphics.display.line_height
    }

    pub fn skin(&self) -> Option<&Skin> {
        self.skin.as_ref()
    }

    pub fn skin_name(&self) -> &str {
        &self.skin_name
    }

    /// Switches skin, re-slicing every skin sprite and re-running layout
    pub fn change_skin(&mut self, skin_name: &str) -> Result<()> {
        self.skin_name = skin_name.to_string();
        self.apply_skin()?;
        self.resize(self.width, self.height);
        Ok(())
    }

    /// Rebuilds all skin sprites. The previous set is dropped as a whole.
    pub fn apply_skin(&mut self) -> Result<()> {
        let mut skin = Skin::slice(&self.graphics, &self.skin_name)?;
        if let Some(old) = self.skin.as_ref() {
            skin.cursor.visible = old.cursor.visible;
            skin.cursor.set_pos(old.cursor.x, old.cursor.y);
            skin.button.visible = old.button.visible;
        }
        skin.set_interactive(self.grid.active);
        self.skin = Some(skin);
        Ok(())
    }

    /// Resizes the window and stretches the skin to fit.
    ///
    /// Both dimensions are clamped to `[1, 4096]`. A disposed window only
    /// records its new size.
    pub fn resize(&mut self, width: f32, height: f32) -> &mut Self {
        self.width = clamp_dimension(width);
        self.height = clamp_dimension(height);
        if self.is_disposed() {
            return self;
        }

        let cursor_rect = self.cursor_rect(0);
        let spacing = self.spacing();
        let (w, h) = (self.width, self.height);
        if let Some(skin) = self.skin.as_mut() {
            layout_skin(skin, &self.graphics.skin_rects, w, h, spacing, cursor_rect);
        }
        if let Some(index) = self.grid.index {
            let rect = self.cursor_rect(index);
            if let Some(skin) = self.skin.as_mut() {
                skin.cursor.set_pos(rect.x, rect.y);
            }
        }
        self
    }

    /// Per-frame update: cursor breathing and button animation
    pub fn update(&mut self) {
        let speed = self.graphics.display.speed_factor;
        if let Some(skin) = self.skin.as_mut() {
            skin.cursor.update(speed);
            skin.button.update(speed);
        }
    }

    /// Shows or hides the animated continue button
    pub fn set_button_visible(&mut self, visible: bool) {
        if let Some(skin) = self.skin.as_mut() {
            skin.button.visible = visible;
        }
    }

    /// Draws text at (x, y) offset by half the padding.
    ///
    /// `font` falls back to the default font; `autowrap` wraps words to the
    /// inner width.
    pub fn draw_text(
        &mut self,
        x: f32,
        y: f32,
        text: &str,
        font: Option<FontSetting>,
        autowrap: bool,
    ) -> DrawnId {
        let font = font.unwrap_or(self.graphics.display.default_font);
        let content = if autowrap {
            text::wrap(text, &font, self.width - self.padding())
        } else {
            text.to_string()
        };
        let half = self.padding() / 2.0;
        let mut sprite = TextSprite::new(content, font);
        sprite.set_pos(x + half, y + half);
        sprite.z = Z_TEXT;
        self.push_drawn(Drawable::Text(sprite))
    }

    /// Draws an icon from the icon sheet at (x, y) offset by half the padding
    pub fn draw_icon(&mut self, icon_index: u32, x: f32, y: f32) -> Result<DrawnId> {
        let region = self.graphics.load_icon(icon_index)?;
        let half = self.padding() / 2.0;
        let mut sprite = Sprite::new(region).with_z(Z_TEXT);
        sprite.set_pos(x + half, y + half);
        Ok(self.push_drawn(Drawable::Icon(sprite)))
    }

    fn push_drawn(&mut self, mut drawable: Drawable) -> DrawnId {
        drawable.set_interactive(self.grid.active);
        self.drawn.push(drawable);
        self.refresh();
        DrawnId(self.drawn.len() - 1)
    }

    pub fn drawn(&self, id: DrawnId) -> Option<&Drawable> {
        self.drawn.get(id.0)
    }

    pub fn drawn_mut(&mut self, id: DrawnId) -> Option<&mut Drawable> {
        self.drawn.get_mut(id.0)
    }

    pub fn drawn_len(&self) -> usize {
        self.drawn.len()
    }

    /// Drawn objects in drawing order
    pub fn drawn_iter(&self) -> impl Iterator<Item = &Drawable> {
        self.drawn.iter()
    }

    /// Re-evaluates overflow arrows and child interactivity
    pub fn refresh(&mut self) {
        self.check_arrows_visibility();
        self.sync_children_properties();
    }

    /// Bitmask of sides where content overflows the window
    /// (`SURPLUS_DOWN | SURPLUS_LEFT | SURPLUS_RIGHT | SURPLUS_UP`)
    pub fn surplus_direction(&self) -> u8 {
        let content = self
            .drawn
            .iter()
            .chain(self.grid.items.iter().flatten().map(|item| &item.drawable))
            .map(Drawable::bounds)
            .reduce(|a, b| a.union(&b));

        let Some(content) = content else {
            return 0;
        };
        let mut surplus = 0;
        if content.bottom() > self.height {
            surplus |= SURPLUS_DOWN;
        }
        if content.x < 0.0 {
            surplus |= SURPLUS_LEFT;
        }
        if content.right() > self.width {
            surplus |= SURPLUS_RIGHT;
        }
        if content.y < 0.0 {
            surplus |= SURPLUS_UP;
        }
        surplus
    }

    /// Arrow i is shown exactly when bit i of the surplus mask is set
    fn check_arrows_visibility(&mut self) {
        let surplus = self.surplus_direction();
        if let Some(skin) = self.skin.as_mut() {
            for (i, arrow) in skin.arrows.iter_mut().enumerate() {
                arrow.visible = surplus & (1 << i) != 0;
            }
        }
    }

    fn sync_children_properties(&mut self) {
        let active = self.grid.active;
        if let Some(skin) = self.skin.as_mut() {
            skin.set_interactive(active);
        }
        for drawable in self.drawn.iter_mut() {
            drawable.set_interactive(active);
        }
        for item in self.grid.items.iter_mut().flatten() {
            item.drawable.set_interactive(active);
        }
    }

    /// Drops drawn objects and selections. The skin stays.
    pub fn clear(&mut self) {
        self.drawn.clear();
        self.grid.items.clear();
        self.hovered = None;
        self.unselect();
    }

    /// Drops everything, skin included. The window is disposed afterwards.
    pub fn clear_all(&mut self) {
        self.clear();
        self.skin = None;
    }

    /// Destroys all children and detaches the window from its host
    pub fn dispose(&mut self, host: &mut dyn SceneHost) {
        self.clear_all();
        log::debug!("Disposing {} {:?}", self.label, self.id);
        host.remove_window(self.id);
    }

    /// Number of scene children: skin sprites, drawn objects and items
    pub fn children_len(&self) -> usize {
        self.skin.as_ref().map(Skin::children_len).unwrap_or(0)
            + self.drawn.len()
            + self.grid.items.iter().flatten().count()
    }

    pub fn is_disposed(&self) -> bool {
        self.children_len() == 0
    }

    /// Window rectangle in screen space
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Flattens the window into a z-sorted list of draw commands
    pub fn draw_commands(&self) -> Vec<DrawCommand> {
        let mut list = RenderList::new();
        self.render(&mut list);
        list.into_sorted()
    }

    /// Emits the window into a list at its own origin
    pub fn render(&self, list: &mut RenderList) {
        if !self.visible {
            return;
        }
        let origin = Point::new(self.x, self.y);
        if let Some(skin) = self.skin.as_ref() {
            skin.emit(origin, 1.0, list);
        }
        for drawable in &self.drawn {
            drawable.emit(origin, 1.0, list);
        }
        for item in self.grid.items.iter().flatten() {
            item.drawable.emit(origin, 1.0, list);
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::graphics::test_support::graphics;
    use crate::sound::SoundBoard;

    pub fn window_with_sound(w: f32, h: f32) -> (Window, Rc<SoundBoard>) {
        let sound = Rc::new(SoundBoard::new());
        let window = Window::new(graphics(), sound.clone(), 0.0, 0.0, w, h).unwrap();
        (window, sound)
    }

    pub fn window(w: f32, h: f32) -> Window {
        window_with_sound(w, h).0
    }
}
