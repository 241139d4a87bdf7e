use serde::Deserialize;
use std::cell::Cell;
use std::rc::Rc;

use crate::calendar::{Calendar, CalendarDate};

pub const DEFAULT_PLACEHOLDER: &str = "YYYY-MM-DD";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Check for outside clicks while the click travels down to its target
    /// instead of after the target has handled it.
    pub use_capture_phase: bool,
    pub placeholder: Option<String>,
}

impl Default for PickerConfig {
    fn default() -> Self {
        PickerConfig {
            use_capture_phase: true,
            placeholder: Some(DEFAULT_PLACEHOLDER.to_owned()),
        }
    }
}

/// Where a click landed, relative to the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Input,
    Overlay,
    Outside,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Capture,
    Bubble,
}

/// Read-only text field that opens a calendar overlay while focused.
pub struct DatePicker {
    config: PickerConfig,
    calendar: Calendar<'static>,
    pending: Rc<Cell<Option<CalendarDate>>>,
    picked: Option<CalendarDate>,
    open: bool,
    focused: bool,
}

impl DatePicker {
    pub fn new(config: PickerConfig, today: CalendarDate) -> Self {
        let pending = Rc::new(Cell::new(None));
        let sink = Rc::clone(&pending);
        let calendar = Calendar::new(today).with_callback(move |date| sink.set(Some(*date)));

        DatePicker {
            config,
            calendar,
            pending,
            picked: None,
            open: false,
            focused: false,
        }
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn has_focus(&self) -> bool {
        self.focused
    }

    pub fn picked(&self) -> Option<&CalendarDate> {
        self.picked.as_ref()
    }

    pub fn calendar(&self) -> &Calendar<'static> {
        &self.calendar
    }

    /// Text shown in the field together with whether it is the placeholder.
    pub fn display(&self) -> (String, bool) {
        match (&self.picked, &self.config.placeholder) {
            (Some(date), _) => (date.to_string(), false),
            (None, Some(placeholder)) => (placeholder.clone(), true),
            (None, None) => (String::new(), false),
        }
    }

    pub fn value(&self) -> String {
        self.picked.map(|date| date.to_string()).unwrap_or_default()
    }

    pub fn focus_input(&mut self) {
        if !self.focused {
            self.focused = true;
            self.set_open(true);
        }
    }

    pub fn blur_input(&mut self) {
        self.focused = false;
    }

    /// Edits typed into the field never change its value.
    pub fn type_text(&mut self, text: &str) {
        log::debug!("suppressed edit {:?}, keeping {:?}", text, self.value());
    }

    /// Document level click listener, invoked once per dispatch phase.
    ///
    /// A click outside input and overlay takes the focus away from the
    /// input and closes the overlay.
    pub fn document_click(&mut self, phase: Phase, region: Region) {
        let listening = match phase {
            Phase::Capture => self.config.use_capture_phase,
            Phase::Bubble => !self.config.use_capture_phase,
        };

        if listening && region == Region::Outside {
            if self.open {
                log::debug!("click outside the picker");
            }
            self.blur_input();
            self.set_open(false);
        }
    }

    /// Runs `action` against the overlay calendar as a click inside the
    /// overlay, then applies a date the calendar committed meanwhile.
    pub fn click_overlay<F>(&mut self, action: F)
    where
        F: FnOnce(&mut Calendar<'static>),
    {
        action(&mut self.calendar);
        self.focus_input();

        if let Some(date) = self.pending.take() {
            self.pick(date);
        }
    }

    fn pick(&mut self, date: CalendarDate) {
        self.picked = Some(date);
        self.blur_input();
        self.set_open(false);
    }

    fn set_open(&mut self, open: bool) {
        if self.open != open {
            log::info!("date picker {}", if open { "opened" } else { "closed" });
        }
        self.open = open;
    }
}
