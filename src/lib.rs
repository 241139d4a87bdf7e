pub mod calendar;
pub mod config;
pub mod datetime;
pub mod error;
pub mod events;
pub mod grid;
pub mod picker;
pub mod ui;

pub use calendar::{Calendar, CalendarDate, View, ViewMeta};
pub use grid::{CellClass, GridCell};
pub use picker::{DatePicker, PickerConfig};
