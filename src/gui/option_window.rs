//! Audio options overlay
//!
//! A 500x400 window centered on the app with a close icon and one row per
//! volume channel. Each row is a group holding the channel label, the current
//! value and a drag bar; dragging writes straight to the sound collaborator.

use std::rc::Rc;

use super::{MenuWindow, cancel_overlay};
use crate::drawable::{Drawable, Group};
use crate::error::Result;
use crate::geometry::Point;
use crate::graphics::Graphics;
use crate::scene::SceneHost;
use crate::sound::{Channel, Sound};
use crate::sprite::TextSprite;
use crate::widgets::DragBar;
use crate::widgets::drag_bar::{COLOR_ORANGE, COLOR_SKY, COLOR_VIOLET};
use crate::window::{DrawnId, NavKey, PointerEvent, SelectionItem, Window};

const WINDOW_WIDTH: f32 = 500.0;
const WINDOW_HEIGHT: f32 = 400.0;

const BAR_X: f32 = 150.0;
const BAR_WIDTH: f32 = 250.0;
const VALUE_X: f32 = 410.0;

/// Volume change per Left/Right key press
const KEY_STEP: u32 = 5;

struct VolumeRow {
    channel: Channel,
    selection: usize,
    value_text: usize,
    bar: usize,
}

pub struct OptionWindow {
    window: Window,
    close_icon: DrawnId,
    close_pressed: bool,
    rows: Vec<VolumeRow>,
    dragging: Option<usize>,
}

impl OptionWindow {
    pub fn new(graphics: Rc<Graphics>, sound: Rc<dyn Sound>) -> Result<Self> {
        let x = graphics.display.app_center_width(WINDOW_WIDTH);
        let y = graphics.display.app_center_height(WINDOW_HEIGHT);
        let mut window = Window::new(graphics, sound, x, y, WINDOW_WIDTH, WINDOW_HEIGHT)?;
        window.set_label("Options");

        draw_title(&mut window);
        let close_icon = add_close(&mut window)?;

        let mut options = OptionWindow {
            window,
            close_icon,
            close_pressed: false,
            rows: Vec::new(),
            dragging: None,
        };
        let vocab = options.window.graphics().vocab.clone();
        options.add_volume(Channel::Master, &vocab.master_volume, COLOR_SKY);
        options.add_volume(Channel::Bgm, &vocab.bgm_volume, COLOR_VIOLET);
        options.add_volume(Channel::Se, &vocab.se_volume, COLOR_ORANGE);
        Ok(options)
    }

    fn add_volume(&mut self, channel: Channel, label: &str, color: [u8; 3]) {
        let pos = self.window.next_item_position();
        let offset = self.window.spacing() / 2.0;
        let value = percent(self.window.sound().volume(channel));

        let mut group = Group::new(
            pos.x,
            pos.y,
            self.window.item_width(),
            self.window.item_height(),
        );
        let font = self.window.graphics().display.default_font;
        group.add_child(Drawable::Text(TextSprite::new(label, font)));

        let mut value_text = TextSprite::new(value.to_string(), font);
        value_text.set_pos(VALUE_X, -offset);
        let value_text = group.add_child(Drawable::Text(value_text));

        let mut bar = DragBar::new(BAR_X, -offset, BAR_WIDTH, value);
        bar.change_color(color);
        let bar = group.add_child(Drawable::DragBar(bar));

        let selection = self
            .window
            .add_selection(Some(SelectionItem::new(Drawable::Group(group))));
        self.rows.push(VolumeRow {
            channel,
            selection,
            value_text,
            bar,
        });
    }

    /// Drag bar of a channel row
    pub fn volume_bar(&self, channel: Channel) -> Option<&DragBar> {
        let row = self.rows.iter().find(|row| row.channel == channel)?;
        match self.row_group(row)?.children.get(row.bar)? {
            Drawable::DragBar(bar) => Some(bar),
            _ => None,
        }
    }

    /// Value text shown next to a channel's bar
    pub fn value_text(&self, channel: Channel) -> Option<&str> {
        let row = self.rows.iter().find(|row| row.channel == channel)?;
        self.row_group(row)?
            .children
            .get(row.value_text)?
            .as_text()
            .map(TextSprite::text)
    }

    pub fn close_icon(&self) -> Option<&Drawable> {
        self.window.drawn(self.close_icon)
    }

    fn row_group(&self, row: &VolumeRow) -> Option<&Group> {
        match &self.window.selection(row.selection)?.drawable {
            Drawable::Group(group) => Some(group),
            _ => None,
        }
    }

    /// Writes a bar value to the sound collaborator and refreshes the text
    fn apply_volume(&mut self, row_index: usize, value: u32) {
        let sound = Rc::clone(self.window.sound());
        let row = &self.rows[row_index];
        sound.set_volume(row.channel, value as f32 / 100.0);
        let shown = percent(sound.volume(row.channel));
        log::debug!("{:?} volume set to {}", row.channel, shown);

        let text = self
            .window
            .selection_mut(row.selection)
            .and_then(|item| item.drawable.as_group_mut())
            .and_then(|group| group.children.get_mut(row.value_text))
            .and_then(Drawable::as_text_mut);
        if let Some(text) = text {
            text.set_text(shown.to_string());
        }
    }

    /// Pointer position relative to a row's group
    fn row_point(&self, row: &VolumeRow, local: Point) -> Option<Point> {
        let group = self.row_group(row)?;
        Some(Point::new(local.x - group.x, local.y - group.y))
    }

    fn route_drag(&mut self, event: PointerEvent) {
        let local = self.window.to_local(event.point());
        match event {
            PointerEvent::Pressed(_) => {
                for i in 0..self.rows.len() {
                    let Some(point) = self.row_point(&self.rows[i], local) else {
                        continue;
                    };
                    let started = bar_mut(&mut self.window, &self.rows[i])
                        .and_then(|bar| bar.begin_drag(point));
                    if let Some(value) = started {
                        self.dragging = Some(i);
                        self.apply_volume(i, value);
                        break;
                    }
                }
            }
            PointerEvent::Moved(_) => {
                let Some(i) = self.dragging else {
                    return;
                };
                let Some(point) = self.row_point(&self.rows[i], local) else {
                    return;
                };
                let moved = bar_mut(&mut self.window, &self.rows[i])
                    .and_then(|bar| bar.drag_to(point));
                if let Some(value) = moved {
                    self.apply_volume(i, value);
                }
            }
            PointerEvent::Released(_) => {
                if let Some(i) = self.dragging.take() {
                    if let Some(bar) = bar_mut(&mut self.window, &self.rows[i]) {
                        bar.end_drag();
                    }
                }
            }
        }
    }

    fn route_close(&mut self, event: PointerEvent, host: &mut dyn SceneHost) {
        let local = self.window.to_local(event.point());
        let on_icon = self.window.is_active()
            && self
                .close_icon()
                .map(|icon| icon.bounds().contains(local))
                .unwrap_or(false);
        match event {
            PointerEvent::Pressed(_) => self.close_pressed = on_icon,
            PointerEvent::Released(_) => {
                if self.close_pressed && on_icon {
                    cancel_overlay(&self.window, host);
                }
                self.close_pressed = false;
            }
            PointerEvent::Moved(_) => {}
        }
    }

    /// Nudges the selected row's volume by `delta` steps
    fn nudge_selected(&mut self, delta: i32) -> bool {
        let Some(selected) = self.window.selected() else {
            return false;
        };
        let Some(i) = self.rows.iter().position(|row| row.selection == selected) else {
            return false;
        };
        let Some(bar) = bar_mut(&mut self.window, &self.rows[i]) else {
            return false;
        };
        let value = (bar.value() as i32 + delta * KEY_STEP as i32).clamp(0, 100) as u32;
        bar.set_value(value);
        self.apply_volume(i, value);
        true
    }
}

impl MenuWindow for OptionWindow {
    fn window(&self) -> &Window {
        &self.window
    }

    fn window_mut(&mut self) -> &mut Window {
        &mut self.window
    }

    fn handle_pointer(&mut self, event: PointerEvent, host: &mut dyn SceneHost) -> bool {
        if self.window.is_visible() && self.window.is_active() {
            self.route_drag(event);
        }
        self.route_close(event, host);
        self.window.handle_pointer(event, host)
    }

    fn handle_key(&mut self, key: NavKey, host: &mut dyn SceneHost) -> bool {
        if !self.window.is_active() {
            return false;
        }
        match key {
            NavKey::Cancel => {
                cancel_overlay(&self.window, host);
                true
            }
            NavKey::Left => self.nudge_selected(-1),
            NavKey::Right => self.nudge_selected(1),
            _ => self.window.handle_key(key, host),
        }
    }

    fn activate(&mut self) {
        self.window.activate();
        for i in 0..self.rows.len() {
            if let Some(bar) = bar_mut(&mut self.window, &self.rows[i]) {
                bar.activate();
            }
        }
    }

    fn deactivate(&mut self) {
        self.window.deactivate();
        self.dragging = None;
        for i in 0..self.rows.len() {
            if let Some(bar) = bar_mut(&mut self.window, &self.rows[i]) {
                bar.deactivate();
            }
        }
    }
}

fn draw_title(window: &mut Window) {
    let title = window.graphics().vocab.options.clone();
    let spacing = window.spacing();
    let id = window.draw_text(0.0, spacing, &title, None, false);
    let width = window.width();
    if let Some(text) = window.drawn_mut(id) {
        let pos = text.position();
        let x = (width - text.bounds().width) / 2.0;
        text.set_pos(x, pos.y);
    }
}

/// Draws the close icon top right and reserves selection 0 for it
fn add_close(window: &mut Window) -> Result<DrawnId> {
    let icons = &window.graphics().icons;
    let (xmark, icon_size) = (icons.xmark, icons.icon_size);
    let dx = window.width() - window.padding() - icon_size;
    let id = window.draw_icon(xmark, dx, 0.0)?;
    window.add_selection(None);
    Ok(id)
}

fn bar_mut<'a>(window: &'a mut Window, row: &VolumeRow) -> Option<&'a mut DragBar> {
    let group = window.selection_mut(row.selection)?.drawable.as_group_mut()?;
    match group.children.get_mut(row.bar)? {
        Drawable::DragBar(bar) => Some(bar),
        _ => None,
    }
}

fn percent(volume: f32) -> u32 {
    (volume * 100.0).round().clamp(0.0, 100.0) as u32
}
