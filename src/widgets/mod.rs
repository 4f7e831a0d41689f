pub mod drag_bar;

pub use drag_bar::DragBar;
