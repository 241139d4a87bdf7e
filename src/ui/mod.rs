pub mod app;
pub mod calendar_pane;
pub mod context;
pub mod picker_pane;

pub use app::App;
pub use calendar_pane::{render_text, CalendarPane};
pub use context::{Part, Slot, Target, Theme};
pub use picker_pane::{PickerPane, TextLine};
