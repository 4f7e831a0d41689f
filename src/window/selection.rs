//! Selection grid
//!
//! Items fill rows left to right, `n` items per row, and rows grow downward.
//! The flow decides how wide an item is and which axis the cursor spans:
//!
//! - `Vertical { row_max }`: the row is split into `row_max` equal cells
//! - `Horizontal { col_max }`: each cell takes the full inner width and the
//!   cursor height is split by `col_max`
//!
//! At most one item is selected. The selected item carries the cursor and
//! its help text is pushed to the attached help window.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::{HelpSink, Window};
use crate::drawable::Drawable;
use crate::error::{Result, UiError};
use crate::geometry::{Point, Rect};
use crate::render::Renderable;
use crate::scene::SceneHost;
use crate::skin::slicer::Z_PATTERN;
use crate::sound::Cue;
use crate::sprite::TextSprite;
use crate::text::FontSetting;

/// Action run when an item is clicked or confirmed
pub type ItemHandler = Box<dyn FnMut(&mut dyn SceneHost)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridFlow {
    Vertical { row_max: u32 },
    Horizontal { col_max: u32 },
}

impl Default for GridFlow {
    fn default() -> Self {
        GridFlow::Vertical { row_max: 1 }
    }
}

impl GridFlow {
    /// Items per row, -1 when rows are unbounded
    pub fn row_max(&self) -> i32 {
        match *self {
            GridFlow::Vertical { row_max } => row_max.max(1) as i32,
            GridFlow::Horizontal { .. } => -1,
        }
    }

    /// Items per column, -1 when columns are unbounded
    pub fn col_max(&self) -> i32 {
        match *self {
            GridFlow::Vertical { .. } => -1,
            GridFlow::Horizontal { col_max } => col_max.max(1) as i32,
        }
    }

    /// (column, row) of the item at `index`
    pub fn cell(&self, index: usize) -> (usize, usize) {
        match *self {
            GridFlow::Vertical { row_max: n } | GridFlow::Horizontal { col_max: n } => {
                let n = n.max(1) as usize;
                (index % n, index / n)
            }
        }
    }
}

/// A selectable entry of a window
pub struct SelectionItem {
    pub drawable: Drawable,
    pub help: Option<String>,
    pub enabled: bool,
    handler: Option<ItemHandler>,
    hit_area: Rect,
}

impl SelectionItem {
    pub fn new(drawable: Drawable) -> Self {
        SelectionItem {
            drawable,
            help: None,
            enabled: true,
            handler: None,
            hit_area: Rect::default(),
        }
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn with_handler(mut self, handler: impl FnMut(&mut dyn SceneHost) + 'static) -> Self {
        self.handler = Some(Box::new(handler));
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Hit rectangle relative to the item's own position
    pub fn hit_area(&self) -> Rect {
        self.hit_area
    }

    /// Hit rectangle in window space
    pub fn hit_rect(&self) -> Rect {
        let pos = self.drawable.position();
        self.hit_area.offset(pos.x, pos.y)
    }

    pub(crate) fn run_handler(&mut self, host: &mut dyn SceneHost) {
        if let Some(handler) = self.handler.as_mut() {
            handler(host);
        }
    }
}

impl fmt::Debug for SelectionItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionItem")
            .field("drawable", &self.drawable)
            .field("help", &self.help)
            .field("enabled", &self.enabled)
            .field("has_handler", &self.handler.is_some())
            .field("hit_area", &self.hit_area)
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// Arguments for [`Window::add_text_selection`]
#[derive(Default)]
pub struct TextSelection {
    pub text: Option<String>,
    pub font: Option<FontSetting>,
    pub align: Align,
    pub help: Option<String>,
    pub enabled: bool,
    pub handler: Option<ItemHandler>,
}

impl TextSelection {
    pub fn new(text: impl Into<String>) -> Self {
        TextSelection {
            text: Some(text.into()),
            enabled: true,
            ..Default::default()
        }
    }

    pub fn font(mut self, font: FontSetting) -> Self {
        self.font = Some(font);
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub fn handler(mut self, handler: impl FnMut(&mut dyn SceneHost) + 'static) -> Self {
        self.handler = Some(Box::new(handler));
        self
    }
}

/// Selection state owned by a window.
///
/// `None` entries are placeholders: they occupy a grid slot and can be
/// selected, but draw nothing and have no hit area.
#[derive(Debug, Default)]
pub(crate) struct SelectionGrid {
    pub flow: GridFlow,
    pub items: Vec<Option<SelectionItem>>,
    pub index: Option<usize>,
    pub active: bool,
}

impl Window {
    pub fn flow(&self) -> GridFlow {
        self.grid.flow
    }

    /// Changes the grid flow and re-lays the cursor
    pub fn set_flow(&mut self, flow: GridFlow) {
        self.grid.flow = flow;
        self.resize(self.width, self.height);
    }

    pub fn row_max(&self) -> i32 {
        self.grid.flow.row_max()
    }

    pub fn col_max(&self) -> i32 {
        self.grid.flow.col_max()
    }

    pub fn is_vertical(&self) -> bool {
        matches!(self.grid.flow, GridFlow::Vertical { .. })
    }

    pub fn is_horizontal(&self) -> bool {
        matches!(self.grid.flow, GridFlow::Horizontal { .. })
    }

    pub fn item_width(&self) -> f32 {
        match self.grid.flow {
            GridFlow::Vertical { .. } => (self.width - self.padding()) / self.row_max() as f32,
            GridFlow::Horizontal { .. } => self.width - self.padding(),
        }
    }

    pub fn item_height(&self) -> f32 {
        self.line_height() + self.spacing()
    }

    /// Top-left of the grid cell for `index`, in window space
    pub fn item_position(&self, index: usize) -> Point {
        let (col, row) = self.grid.flow.cell(index);
        let sp = self.spacing();
        Point::new(
            col as f32 * (self.item_width() + sp) + sp * 2.0,
            row as f32 * (self.item_height() + sp) + sp * 2.0,
        )
    }

    /// Where the next added item will go
    pub fn next_item_position(&self) -> Point {
        self.item_position(self.grid.items.len())
    }

    /// Cursor rectangle for the item at `index`, in window space
    pub fn cursor_rect(&self, index: usize) -> Rect {
        let pos = self.item_position(index);
        let sp = self.spacing();
        let mut rect = Rect::new(pos.x - sp, pos.y - sp, self.item_width(), self.item_height());
        match self.grid.flow {
            GridFlow::Vertical { .. } => {
                rect.width = self.width / self.row_max() as f32 - self.padding() / 2.0;
            }
            GridFlow::Horizontal { .. } => {
                rect.height = self.height / self.col_max() as f32 - self.padding() / 2.0;
            }
        }
        rect
    }

    /// Appends an item (or a placeholder) and returns its index.
    ///
    /// The item is raised above the pattern and receives a hit area equal
    /// to its cursor rectangle.
    pub fn add_selection(&mut self, item: Option<SelectionItem>) -> usize {
        let index = self.grid.items.len();
        let rect = self.cursor_rect(index);
        let item = item.map(|mut item| {
            let z = item.drawable.z() + Z_PATTERN + 1.0;
            item.drawable.set_z(z);
            let pos = item.drawable.position();
            item.hit_area = Rect::new(rect.x - pos.x, rect.y - pos.y, rect.width, rect.height);
            item.drawable.set_interactive(self.grid.active);
            item
        });
        self.grid.items.push(item);
        self.refresh();
        index
    }

    /// Adds a text item at the next grid position.
    ///
    /// Fails with [`UiError::MissingText`] and adds nothing when `text` is
    /// absent or empty.
    pub fn add_text_selection(&mut self, args: TextSelection) -> Result<usize> {
        let text = args
            .text
            .filter(|t| !t.is_empty())
            .ok_or(UiError::MissingText)?;
        let font = args.font.unwrap_or(self.graphics.display.default_font);
        let mut sprite = TextSprite::new(text, font);

        let pos = self.next_item_position();
        let item_width = self.item_width();
        let x = match args.align {
            Align::Left => pos.x,
            Align::Center => ((pos.x + item_width - sprite.width()) / 2.0 + self.spacing()).max(pos.x),
            Align::Right => (pos.x + item_width - sprite.width()).max(pos.x),
        };
        sprite.set_pos(x, pos.y);

        let item = SelectionItem {
            drawable: Drawable::Text(sprite),
            help: args.help,
            enabled: args.enabled,
            handler: args.handler,
            hit_area: Rect::default(),
        };
        Ok(self.add_selection(Some(item)))
    }

    pub fn selections_len(&self) -> usize {
        self.grid.items.len()
    }

    /// Item at `index`; `None` for placeholders and out-of-range indices
    pub fn selection(&self, index: usize) -> Option<&SelectionItem> {
        self.grid.items.get(index).and_then(Option::as_ref)
    }

    pub fn selection_mut(&mut self, index: usize) -> Option<&mut SelectionItem> {
        self.grid.items.get_mut(index).and_then(Option::as_mut)
    }

    /// Selects `index`, moving the cursor and updating the help window.
    /// Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index >= self.grid.items.len() {
            log::warn!(
                "{}: select({}) out of range ({} items)",
                self.label,
                index,
                self.grid.items.len()
            );
            return;
        }
        self.grid.index = Some(index);
        let rect = self.cursor_rect(index);
        if let Some(skin) = self.skin.as_mut() {
            skin.cursor.set_pos(rect.x, rect.y);
            skin.cursor.show();
        }
        self.sound.play(Cue::Cursor);

        if let Some(help_window) = self.help_window.as_ref() {
            let help = self
                .selection(index)
                .and_then(|item| item.help.as_deref())
                .unwrap_or("");
            help_window.borrow_mut().set_help_text(help);
        }
    }

    /// Clears the selection and hides the cursor
    pub fn unselect(&mut self) {
        self.grid.index = None;
        if let Some(skin) = self.skin.as_mut() {
            skin.cursor.hide();
        }
    }

    /// Selected index, -1 when nothing is selected
    pub fn index(&self) -> i32 {
        self.grid.index.map(|i| i as i32).unwrap_or(-1)
    }

    pub fn selected(&self) -> Option<usize> {
        self.grid.index
    }

    pub fn current_item(&self) -> Option<&SelectionItem> {
        self.grid.index.and_then(|i| self.selection(i))
    }

    /// Placeholders count as enabled
    pub fn is_current_item_enabled(&self) -> bool {
        self.current_item().map(|item| item.enabled).unwrap_or(true)
    }

    /// Confirmation sound for the selected item: OK when enabled, buzzer
    /// otherwise. Does nothing when nothing is selected.
    pub fn on_self_trigger(&mut self) {
        let Some(index) = self.grid.index else {
            return;
        };
        log::debug!("{} triggered index: {}", self.label, index);
        if self.is_current_item_enabled() {
            self.sound.play(Cue::Ok);
        } else {
            self.sound.play(Cue::Buzzer);
        }
    }

    pub fn activate(&mut self) {
        self.grid.active = true;
        self.refresh();
    }

    pub fn deactivate(&mut self) {
        self.grid.active = false;
        self.refresh();
    }

    pub fn is_active(&self) -> bool {
        self.grid.active
    }

    pub fn set_help_window(&mut self, help_window: Rc<RefCell<dyn HelpSink>>) {
        self.help_window = Some(help_window);
    }

    /// Items per row for either flow
    fn lane_len(&self) -> usize {
        match self.grid.flow {
            GridFlow::Vertical { row_max } => row_max.max(1) as usize,
            GridFlow::Horizontal { col_max } => col_max.max(1) as usize,
        }
    }

    pub fn cursor_down(&mut self) {
        self.step_in_column(true);
    }

    pub fn cursor_up(&mut self) {
        self.step_in_column(false);
    }

    pub fn cursor_right(&mut self) {
        if self.lane_len() > 1 {
            self.step_in_row(true);
        }
    }

    pub fn cursor_left(&mut self) {
        if self.lane_len() > 1 {
            self.step_in_row(false);
        }
    }

    /// Moves one row, wrapping to the other end of the same column
    fn step_in_column(&mut self, forward: bool) {
        let len = self.grid.items.len();
        if len == 0 {
            return;
        }
        let Some(current) = self.grid.index else {
            self.select(0);
            return;
        };
        let stride = self.lane_len();
        let next = if forward {
            if current + stride < len {
                current + stride
            } else {
                current % stride
            }
        } else if current >= stride {
            current - stride
        } else {
            let mut last = current;
            while last + stride < len {
                last += stride;
            }
            last
        };
        self.select(next);
    }

    /// Moves one item, wrapping to the other end of the same row
    fn step_in_row(&mut self, forward: bool) {
        let len = self.grid.items.len();
        if len == 0 {
            return;
        }
        let Some(current) = self.grid.index else {
            self.select(0);
            return;
        };
        let lane = self.lane_len();
        let row_start = current - current % lane;
        let row_end = (row_start + lane).min(len);
        let next = if forward {
            if current + 1 < row_end { current + 1 } else { row_start }
        } else if current > row_start {
            current - 1
        } else {
            row_end - 1
        };
        self.select(next);
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::sound::Cue;

    struct HelpLog(Vec<String>);

    impl HelpSink for HelpLog {
        fn set_help_text(&mut self, text: &str) {
            self.0.push(text.to_string());
        }
    }

    fn filled(count: usize, flow: GridFlow) -> Window {
        let mut win = window(300.0, 200.0);
        win.set_flow(flow);
        for i in 0..count {
            win.add_text_selection(TextSelection::new(format!("Item {}", i)))
                .unwrap();
        }
        win
    }

    #[test]
    fn test_flow_accessors() {
        let vertical = GridFlow::Vertical { row_max: 3 };
        assert_eq!((vertical.row_max(), vertical.col_max()), (3, -1));
        let horizontal = GridFlow::Horizontal { col_max: 2 };
        assert_eq!((horizontal.row_max(), horizontal.col_max()), (-1, 2));
    }

    #[test]
    fn test_vertical_grid_positions() {
        let win = filled(0, GridFlow::Vertical { row_max: 3 });
        // item_width = (300 - 16) / 3, item_height = 24 + 8
        let iw = 284.0 / 3.0;
        assert_eq!(win.item_height(), 32.0);
        assert_eq!(win.flow().cell(4), (1, 1));

        let pos = win.item_position(4);
        assert!((pos.x - (iw + 8.0 + 16.0)).abs() < 1e-4);
        assert_eq!(pos.y, 40.0 + 16.0);

        let first = win.item_position(0);
        assert_eq!((first.x, first.y), (16.0, 16.0));
    }

    #[test]
    fn test_vertical_grid_fills_rows_in_order() {
        let win = filled(0, GridFlow::Vertical { row_max: 3 });
        let iw = 284.0 / 3.0;
        let cells: Vec<(usize, usize)> = (0..6).map(|i| win.flow().cell(i)).collect();
        assert_eq!(cells, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);

        for (i, (col, row)) in cells.into_iter().enumerate() {
            let pos = win.item_position(i);
            assert!((pos.x - (col as f32 * (iw + 8.0) + 16.0)).abs() < 1e-4);
            assert_eq!(pos.y, row as f32 * 40.0 + 16.0);
        }
    }

    #[test]
    fn test_horizontal_grid_positions() {
        let win = filled(0, GridFlow::Horizontal { col_max: 2 });
        assert_eq!(win.item_width(), 284.0);
        let cells: Vec<(usize, usize)> = (0..4).map(|i| win.flow().cell(i)).collect();
        assert_eq!(cells, vec![(0, 0), (1, 0), (0, 1), (1, 1)]);

        let second = win.item_position(1);
        assert_eq!((second.x, second.y), (308.0, 16.0));
        let third = win.item_position(2);
        assert_eq!((third.x, third.y), (16.0, 56.0));
    }

    #[test]
    fn test_cursor_rect() {
        let win = filled(0, GridFlow::Vertical { row_max: 1 });
        let rect = win.cursor_rect(1);
        // pos (16, 56) - spacing, width = 300 - 8
        assert_eq!(rect, Rect::new(8.0, 48.0, 292.0, 32.0));

        let win = filled(0, GridFlow::Horizontal { col_max: 2 });
        let rect = win.cursor_rect(0);
        assert_eq!(rect.height, 200.0 / 2.0 - 8.0);
        assert_eq!(rect.width, 284.0);
    }

    #[test]
    fn test_add_selection_assigns_hit_area_and_depth() {
        let mut win = filled(2, GridFlow::Vertical { row_max: 1 });
        let item = win.selection(1).unwrap();
        assert_eq!(item.hit_rect(), win.cursor_rect(1));
        assert_eq!(item.drawable.z(), Z_PATTERN + 1.0);

        let index = win.add_selection(None);
        assert_eq!(index, 2);
        assert_eq!(win.selections_len(), 3);
        assert!(win.selection(2).is_none());
    }

    #[test]
    fn test_add_text_selection_requires_text() {
        let mut win = window(300.0, 200.0);
        let before = win.children_len();
        assert!(matches!(
            win.add_text_selection(TextSelection::default()),
            Err(UiError::MissingText)
        ));
        assert!(matches!(
            win.add_text_selection(TextSelection::new("")),
            Err(UiError::MissingText)
        ));
        assert_eq!(win.selections_len(), 0);
        assert_eq!(win.children_len(), before);
    }

    #[test]
    fn test_text_alignment() {
        let mut win = window(300.0, 200.0);
        win.add_text_selection(TextSelection::new("Puno").align(Align::Right))
            .unwrap();
        win.add_text_selection(TextSelection::new("Puno").align(Align::Center))
            .unwrap();
        // "Puno" is 48px wide
        let right = win.selection(0).unwrap().drawable.position();
        assert_eq!(right.x, 16.0 + 284.0 - 48.0);
        let center = win.selection(1).unwrap().drawable.position();
        assert_eq!(center.x, (16.0 + 284.0 - 48.0) / 2.0 + 8.0);
    }

    #[test]
    fn test_select_and_unselect() {
        let (mut win, sound) = window_with_sound(300.0, 200.0);
        win.add_text_selection(TextSelection::new("A")).unwrap();
        win.add_text_selection(TextSelection::new("B")).unwrap();
        assert_eq!(win.index(), -1);

        win.select(1);
        assert_eq!(win.index(), 1);
        let cursor = &win.skin().unwrap().cursor;
        assert!(cursor.visible);
        let rect = win.cursor_rect(1);
        assert_eq!((cursor.x, cursor.y), (rect.x, rect.y));
        assert_eq!(sound.played(), vec![Cue::Cursor]);

        win.unselect();
        assert_eq!(win.index(), -1);
        assert!(!win.skin().unwrap().cursor.visible);
        assert!(win.current_item().is_none());
    }

    #[test]
    fn test_select_is_idempotent() {
        let mut win = filled(3, GridFlow::Vertical { row_max: 1 });
        win.select(2);
        let cursor = win.skin().unwrap().cursor.clone();
        win.select(2);
        let again = &win.skin().unwrap().cursor;
        assert_eq!(win.index(), 2);
        assert_eq!((again.x, again.y, again.visible), (cursor.x, cursor.y, cursor.visible));
    }

    #[test]
    fn test_select_out_of_range_is_ignored() {
        let mut win = filled(2, GridFlow::Vertical { row_max: 1 });
        win.select(0);
        win.select(5);
        assert_eq!(win.index(), 0);
    }

    #[test]
    fn test_select_updates_help() {
        let help = Rc::new(RefCell::new(HelpLog(Vec::new())));
        let mut win = window(300.0, 200.0);
        win.set_help_window(help.clone());
        win.add_text_selection(TextSelection::new("Start").help("Begin a match"))
            .unwrap();
        win.add_text_selection(TextSelection::new("Quit")).unwrap();

        win.select(0);
        win.select(1);
        assert_eq!(help.borrow().0, vec!["Begin a match".to_string(), String::new()]);
    }

    #[test]
    fn test_clear_empties_selections() {
        let mut win = filled(4, GridFlow::Vertical { row_max: 2 });
        win.select(3);
        win.clear();
        assert_eq!(win.selections_len(), 0);
        assert_eq!(win.index(), -1);
        assert!(!win.is_disposed());
        assert_eq!(win.skin().unwrap().children_len(), win.children_len());
    }

    #[test]
    fn test_trigger_sounds() {
        let (mut win, sound) = window_with_sound(300.0, 200.0);
        win.add_text_selection(TextSelection::new("On")).unwrap();
        win.add_text_selection(TextSelection::new("Off").disabled())
            .unwrap();

        win.on_self_trigger();
        assert!(sound.played().is_empty());

        win.select(0);
        win.on_self_trigger();
        win.select(1);
        win.on_self_trigger();
        assert_eq!(
            sound.played(),
            vec![Cue::Cursor, Cue::Ok, Cue::Cursor, Cue::Buzzer]
        );
    }

    #[test]
    fn test_activation_reaches_items() {
        let mut win = filled(2, GridFlow::Vertical { row_max: 1 });
        assert!(!win.selection(0).unwrap().drawable.is_interactive());
        win.activate();
        assert!(win.is_active());
        assert!(win.selection(1).unwrap().drawable.is_interactive());
        assert!(win.skin().unwrap().border.top.interactive);
        win.deactivate();
        assert!(!win.selection(0).unwrap().drawable.is_interactive());
    }

    #[test]
    fn test_vertical_navigation_wraps() {
        let mut win = filled(5, GridFlow::Vertical { row_max: 2 });
        win.cursor_down();
        assert_eq!(win.index(), 0);
        win.cursor_down();
        assert_eq!(win.index(), 2);
        win.cursor_down();
        assert_eq!(win.index(), 4);
        win.cursor_down();
        assert_eq!(win.index(), 0);
        win.cursor_up();
        assert_eq!(win.index(), 4);

        // the short last row holds only item 4
        win.cursor_right();
        assert_eq!(win.index(), 4);
        win.cursor_left();
        assert_eq!(win.index(), 4);
    }

    #[test]
    fn test_sideways_navigation_stays_in_row() {
        let mut win = filled(5, GridFlow::Vertical { row_max: 2 });
        win.select(1);
        win.cursor_right();
        assert_eq!(win.index(), 0);
        win.cursor_left();
        assert_eq!(win.index(), 1);

        win.select(2);
        win.cursor_left();
        assert_eq!(win.index(), 3);
        win.cursor_right();
        assert_eq!(win.index(), 2);
    }

    #[test]
    fn test_single_column_ignores_sideways() {
        let mut win = filled(3, GridFlow::Vertical { row_max: 1 });
        win.select(1);
        win.cursor_left();
        win.cursor_right();
        assert_eq!(win.index(), 1);
        win.cursor_up();
        win.cursor_up();
        assert_eq!(win.index(), 2);
    }

    #[test]
    fn test_horizontal_navigation() {
        let mut win = filled(4, GridFlow::Horizontal { col_max: 2 });
        win.select(0);
        win.cursor_right();
        assert_eq!(win.index(), 1);
        win.cursor_down();
        assert_eq!(win.index(), 3);
        win.cursor_right();
        assert_eq!(win.index(), 2);
        win.cursor_down();
        assert_eq!(win.index(), 0);
    }
}
