use std::fmt::Write;
use unsegen::base::*;
use unsegen::widget::*;

use super::calendar_pane::CalendarPane;
use super::context::{Part, Theme};
use crate::picker::{DatePicker, DEFAULT_PLACEHOLDER};

/// Single line of styled text.
pub struct TextLine {
    text: String,
    style: StyleModifier,
}

impl TextLine {
    pub fn new<S: Into<String>>(text: S) -> Self {
        TextLine {
            text: text.into(),
            style: StyleModifier::default(),
        }
    }

    pub fn style(mut self, style: StyleModifier) -> Self {
        self.style = style;
        self
    }
}

impl Widget for TextLine {
    fn space_demand(&self) -> Demand2D {
        Demand2D {
            width: ColDemand::exact(self.text.chars().count()),
            height: RowDemand::exact(1),
        }
    }

    fn draw(&self, mut window: Window, _hints: RenderingHints) {
        let mut cursor = Cursor::new(&mut window).style_modifier(self.style);
        let _ = write!(&mut cursor, "{}", self.text);
    }
}

pub struct PickerPane<'a> {
    picker: &'a DatePicker,
    theme: &'a Theme,
    input_focused: bool,
    overlay_focus: Option<Part>,
}

impl<'a> PickerPane<'a> {
    const LABEL: &'static str = "Date ";

    pub fn new(picker: &'a DatePicker, theme: &'a Theme) -> Self {
        PickerPane {
            picker,
            theme,
            input_focused: false,
            overlay_focus: None,
        }
    }

    pub fn input_focused(mut self, focused: bool) -> Self {
        self.input_focused = focused;
        self
    }

    pub fn overlay_focus(mut self, focus: Option<Part>) -> Self {
        self.overlay_focus = focus;
        self
    }

    fn field(&self) -> TextLine {
        let (text, is_placeholder) = self.picker.display();
        let width = DEFAULT_PLACEHOLDER.len().max(text.chars().count());
        let style = if is_placeholder {
            self.theme.placeholder_style
        } else {
            StyleModifier::default()
        };

        TextLine::new(format!("[{:<width$}]", text, width = width))
            .style(self.theme.focused(style, self.input_focused))
    }

    pub fn as_widget(&self) -> impl Widget + 'a {
        let mut layout = VLayout::new().widget(
            HLayout::new()
                .widget(TextLine::new(Self::LABEL))
                .widget(self.field()),
        );

        if self.picker.is_open() {
            layout = layout.widget(
                CalendarPane::new(self.picker.calendar(), self.theme).focus(self.overlay_focus),
            );
        }

        layout
    }
}
