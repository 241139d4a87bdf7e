use std::sync::mpsc;

use crate::calendar::{Calendar, CalendarDate};
use crate::config::Config;
use crate::error::Result;
use crate::events::{Dispatcher, Event};
use crate::picker::{DatePicker, Phase, Region};

use super::context::{calendar_parts, click_part, Part, Slot, Target, Theme};
use super::{CalendarPane, PickerPane, TextLine};

use unsegen::base::Terminal;
use unsegen::input::{Event as InputEvent, Input, Key};
use unsegen::widget::*;

const HELP: &str = "<Tab>/<S-Tab> focus  <Enter> click  q quit";

/// Demo page: a standalone calendar reporting its selection next to a
/// date picker field.
pub struct App {
    theme: Theme,
    calendar: Calendar<'static>,
    picker: DatePicker,
    result: CalendarDate,
    focus: Target,
}

impl App {
    pub fn new(config: &Config, today: CalendarDate, sink: mpsc::Sender<Event>) -> Result<App> {
        let theme = Theme::from_config(&config.theme)?;
        let calendar = Calendar::new(today).with_callback(move |date| {
            if sink.send(Event::Pick(*date)).is_err() {
                log::warn!("Dropped pick of {}, event queue closed", date);
            }
        });

        Ok(App {
            theme,
            calendar,
            picker: DatePicker::new(config.picker.clone(), today),
            result: today,
            focus: Target::Calendar(Slot::Standalone, Part::Heading),
        })
    }

    fn result_line(&self) -> String {
        format!(
            "Result: {{\"year\":{},\"month\":{},\"day\":{}}}",
            self.result.year, self.result.month, self.result.day
        )
    }

    fn focused_part(&self, slot: Slot) -> Option<Part> {
        match self.focus {
            Target::Calendar(s, part) if s == slot => Some(part),
            _ => None,
        }
    }

    fn as_widget<'w>(&'w self) -> impl Widget + 'w {
        let standalone = VLayout::new()
            .widget(
                CalendarPane::new(&self.calendar, &self.theme)
                    .focus(self.focused_part(Slot::Standalone)),
            )
            .widget(TextLine::new(self.result_line()));

        let picker = PickerPane::new(&self.picker, &self.theme)
            .input_focused(self.focus == Target::Input)
            .overlay_focus(self.focused_part(Slot::Overlay));

        VLayout::new()
            .widget(
                HLayout::new()
                    .widget(standalone)
                    .widget(TextLine::new("    "))
                    .widget(picker.as_widget()),
            )
            .widget(TextLine::new(HELP).style(self.theme.header_style))
    }

    /// Focusable elements in tab order. The overlay only takes part while
    /// it is open.
    fn targets(&self) -> Vec<Target> {
        let mut targets: Vec<Target> = calendar_parts(&self.calendar)
            .into_iter()
            .map(|part| Target::Calendar(Slot::Standalone, part))
            .collect();

        targets.push(Target::Input);

        if self.picker.is_open() {
            targets.extend(
                calendar_parts(self.picker.calendar())
                    .into_iter()
                    .map(|part| Target::Calendar(Slot::Overlay, part)),
            );
        }

        targets
    }

    // The overlay counts as part of the input: moving into it keeps the
    // picker focused, moving anywhere else blurs it.
    fn set_focus(&mut self, target: Target) {
        match target {
            Target::Input => self.picker.focus_input(),
            Target::Calendar(Slot::Overlay, _) => {}
            Target::Calendar(Slot::Standalone, _) => self.picker.blur_input(),
        }
        self.focus = target;
    }

    fn move_focus(&mut self, step: isize) {
        let targets = self.targets();
        let pos = targets
            .iter()
            .position(|target| *target == self.focus)
            .unwrap_or(0);
        let next = (pos as isize + step).rem_euclid(targets.len() as isize) as usize;
        self.set_focus(targets[next]);
    }

    // Keeps the focus on something that is still on screen after a click
    // changed the grid or closed the overlay.
    fn fix_focus(&mut self) {
        if self.targets().contains(&self.focus) {
            return;
        }

        self.focus = match self.focus {
            Target::Calendar(Slot::Overlay, _) if !self.picker.is_open() => Target::Input,
            Target::Calendar(slot, _) => Target::Calendar(slot, Part::Heading),
            Target::Input => Target::Input,
        };
    }

    fn activate(&mut self, target: Target) {
        let region = match target {
            Target::Input => Region::Input,
            Target::Calendar(Slot::Overlay, _) => Region::Overlay,
            Target::Calendar(Slot::Standalone, _) => Region::Outside,
        };

        self.picker.document_click(Phase::Capture, region);

        match target {
            Target::Input => self.picker.focus_input(),
            Target::Calendar(Slot::Standalone, part) => click_part(&mut self.calendar, part),
            Target::Calendar(Slot::Overlay, part) => self
                .picker
                .click_overlay(|calendar| click_part(calendar, part)),
        }

        self.picker.document_click(Phase::Bubble, region);
        self.fix_focus();
    }

    /// Returns false once the user asked to quit.
    pub fn handle_key(&mut self, key: Key) -> bool {
        match key {
            Key::Esc => return false,
            Key::Char('\t') => self.move_focus(1),
            Key::BackTab => self.move_focus(-1),
            Key::Char('\n') | Key::Char(' ') => self.activate(self.focus),
            Key::Char('q') if self.focus != Target::Input => return false,
            Key::Char(c) if self.focus == Target::Input => self.picker.type_text(&c.to_string()),
            Key::Backspace | Key::Delete if self.focus == Target::Input => {
                self.picker.type_text("")
            }
            _ => {}
        }
        true
    }

    pub fn handle(&mut self, event: Event) -> bool {
        match event {
            Event::Input(Input {
                event: InputEvent::Key(key),
                ..
            }) => self.handle_key(key),
            Event::Input(_) | Event::Resize => true,
            Event::Pick(date) => {
                log::info!("picked {}", date);
                self.result = date;
                true
            }
        }
    }

    pub fn run(
        &mut self,
        dispatcher: Dispatcher,
        mut term: Terminal,
    ) -> std::result::Result<(), Box<dyn std::error::Error>> {
        let mut run = true;

        while run {
            // Draw
            let root = term.create_root_window();
            self.as_widget().draw(root, RenderingHints::new());
            term.present();

            // Handle events
            run = self.handle(dispatcher.next()?);
        }

        Ok(())
    }
}
