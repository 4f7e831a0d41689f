//! Draggable meter
//!
//! A horizontal bar holding a value in `0..=100`. Pressing inside the bar
//! starts a drag; moving while dragging sets the value from the pointer's x.
//! The owner decides what the value means (the option window maps it to a
//! channel volume).

use crate::geometry::{Point, Rect};
use crate::render::{DrawCommand, RenderList, Renderable};

pub const COLOR_SKY: [u8; 3] = [90, 170, 240];
pub const COLOR_VIOLET: [u8; 3] = [160, 100, 230];
pub const COLOR_ORANGE: [u8; 3] = [245, 150, 50];

const TRACK_COLOR: [u8; 3] = [40, 40, 50];
const KNOB_COLOR: [u8; 3] = [240, 240, 240];
const KNOB_WIDTH: f32 = 4.0;
const DEFAULT_HEIGHT: f32 = 12.0;

#[derive(Debug, Clone)]
pub struct DragBar {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub z: f32,
    pub color: [u8; 3],
    value: u32,
    active: bool,
    dragging: bool,
}

impl DragBar {
    pub fn new(x: f32, y: f32, width: f32, value: u32) -> Self {
        DragBar {
            x,
            y,
            width,
            height: DEFAULT_HEIGHT,
            z: 0.0,
            color: COLOR_SKY,
            value: value.min(100),
            active: false,
            dragging: false,
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn set_value(&mut self, value: u32) {
        self.value = value.min(100);
    }

    pub fn change_color(&mut self, color: [u8; 3]) {
        self.color = color;
    }

    pub fn activate(&mut self) {
        self.active = true;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
        self.dragging = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Starts a drag if `point` (parent space) is on the bar.
    /// Returns the new value when one was set.
    pub fn begin_drag(&mut self, point: Point) -> Option<u32> {
        if !self.active || !self.bounds().contains(point) {
            return None;
        }
        self.dragging = true;
        self.value = self.value_at(point.x);
        Some(self.value)
    }

    /// Follows the pointer while dragging
    pub fn drag_to(&mut self, point: Point) -> Option<u32> {
        if !self.dragging {
            return None;
        }
        self.value = self.value_at(point.x);
        Some(self.value)
    }

    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    fn value_at(&self, x: f32) -> u32 {
        let ratio = ((x - self.x) / self.width).clamp(0.0, 1.0);
        (ratio * 100.0).round() as u32
    }
}

impl Renderable for DragBar {
    fn z(&self) -> f32 {
        self.z
    }

    fn emit(&self, origin: Point, opacity: f32, list: &mut RenderList) {
        let track = self.bounds().offset(origin.x, origin.y);
        let filled = self.width * self.value as f32 / 100.0;
        let knob_x = (track.x + filled - KNOB_WIDTH / 2.0)
            .clamp(track.x, track.right() - KNOB_WIDTH);

        list.push(self.z, DrawCommand::Fill { rect: track, color: TRACK_COLOR, opacity });
        list.push(
            self.z,
            DrawCommand::Fill {
                rect: Rect::new(track.x, track.y, filled, track.height),
                color: self.color,
                opacity,
            },
        );
        list.push(
            self.z,
            DrawCommand::Fill {
                rect: Rect::new(knob_x, track.y - 2.0, KNOB_WIDTH, track.height + 4.0),
                color: KNOB_COLOR,
                opacity,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inactive_bar_ignores_drag() {
        let mut bar = DragBar::new(150.0, 0.0, 250.0, 40);
        assert_eq!(bar.begin_drag(Point::new(200.0, 5.0)), None);
        assert_eq!(bar.value(), 40);
    }

    #[test]
    fn test_drag_sets_value_from_x() {
        let mut bar = DragBar::new(150.0, 0.0, 250.0, 40);
        bar.activate();
        assert_eq!(bar.begin_drag(Point::new(275.0, 5.0)), Some(50));
        assert_eq!(bar.drag_to(Point::new(1000.0, 50.0)), Some(100));
        assert_eq!(bar.drag_to(Point::new(0.0, 5.0)), Some(0));
        bar.end_drag();
        assert_eq!(bar.drag_to(Point::new(275.0, 5.0)), None);
        assert_eq!(bar.value(), 0);
    }

    #[test]
    fn test_press_outside_does_not_start_drag() {
        let mut bar = DragBar::new(150.0, 0.0, 250.0, 40);
        bar.activate();
        assert_eq!(bar.begin_drag(Point::new(100.0, 5.0)), None);
        assert!(!bar.is_dragging());
    }

    #[test]
    fn test_deactivate_stops_drag() {
        let mut bar = DragBar::new(0.0, 0.0, 100.0, 10);
        bar.activate();
        bar.begin_drag(Point::new(20.0, 1.0));
        bar.deactivate();
        assert!(!bar.is_dragging());
    }

    #[test]
    fn test_set_value_clamped() {
        let mut bar = DragBar::new(0.0, 0.0, 100.0, 300);
        assert_eq!(bar.value(), 100);
        bar.set_value(101);
        assert_eq!(bar.value(), 100);
    }
}
