use std::fmt::{self, Display, Write};
use unsegen::base::*;
use unsegen::widget::*;

use super::context::{grid_shape, Part, Theme};
use crate::calendar::{Calendar, View};
use crate::datetime::WEEK_DAYS;
use crate::grid::{CellClass, GridCell};

struct CellLabel<'a> {
    label: String,
    width: usize,
    is_today: bool,
    focused: bool,
    theme: &'a Theme,
}

impl Display for CellLabel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arg_today = if self.is_today {
            self.theme.today_char.unwrap_or(' ')
        } else {
            ' '
        };

        let arg_focus = if self.focused {
            self.theme.focus_char.unwrap_or(' ')
        } else {
            ' '
        };

        write!(
            f,
            "{}{}{:>width$}",
            arg_focus,
            arg_today,
            self.label,
            width = self.width - 2
        )
    }
}

pub struct CalendarPane<'a, 'c> {
    calendar: &'a Calendar<'c>,
    theme: &'a Theme,
    focus: Option<Part>,
}

impl<'a, 'c> CalendarPane<'a, 'c> {
    pub const WIDTH: usize = 28;
    pub const HEIGHT: usize = 8;
    const HEADER_ROWS: usize = 1;

    pub fn new(calendar: &'a Calendar<'c>, theme: &'a Theme) -> Self {
        CalendarPane {
            calendar,
            theme,
            focus: None,
        }
    }

    pub fn focus(mut self, focus: Option<Part>) -> Self {
        self.focus = focus;
        self
    }

    fn cell_width(view: View) -> usize {
        Self::WIDTH / grid_shape(view).1
    }

    fn is_focused(&self, part: Part) -> bool {
        self.focus == Some(part)
    }
}

impl Widget for CalendarPane<'_, '_> {
    fn space_demand(&self) -> Demand2D {
        Demand2D {
            width: ColDemand::exact(Self::WIDTH),
            height: RowDemand::exact(Self::HEIGHT),
        }
    }

    fn draw(&self, mut window: Window, _hints: RenderingHints) {
        let theme = self.theme;
        let view = self.calendar.view();
        let heading = self.calendar.heading();
        let mut cursor = Cursor::new(&mut window);

        let header_style = |part| theme.focused(theme.header_style, self.is_focused(part));

        cursor.set_style_modifier(header_style(Part::LeftArrow));
        let _ = write!(&mut cursor, "<");

        cursor.move_to(
            ColIndex::new(((Self::WIDTH - heading.len()) / 2) as i32),
            RowIndex::new(0),
        );
        cursor.set_style_modifier(header_style(Part::Heading));
        let _ = write!(&mut cursor, "{}", heading);

        cursor.move_to(ColIndex::new(Self::WIDTH as i32 - 1), RowIndex::new(0));
        cursor.set_style_modifier(header_style(Part::RightArrow));
        let _ = write!(&mut cursor, ">");

        let cell_width = Self::cell_width(view);
        let mut first_row = Self::HEADER_ROWS;

        if view == View::Day {
            cursor.move_to(ColIndex::new(0), RowIndex::new(first_row as i32));
            cursor.set_style_modifier(theme.label_style);
            for &label in WEEK_DAYS.iter() {
                let _ = write!(&mut cursor, "{:>width$}", label, width = cell_width);
            }
            first_row += 1;
        }

        for (row, cells) in self.calendar.grid().iter().enumerate() {
            cursor.move_to(
                ColIndex::new(0),
                RowIndex::new((first_row + row) as i32),
            );
            for (col, cell) in cells.iter().enumerate() {
                let focused = self.is_focused(Part::Cell(row, col));
                cursor.set_style_modifier(theme.focused(theme.cell_style(cell.class), focused));
                let _ = write!(
                    &mut cursor,
                    "{}",
                    CellLabel {
                        label: cell.label(view),
                        width: cell_width,
                        is_today: is_today(self.calendar, cell),
                        focused,
                        theme,
                    }
                );
            }
        }
    }
}

// Overflow days of the neighbouring months are never marked as today.
fn is_today(calendar: &Calendar, cell: &GridCell) -> bool {
    let today = calendar.today();
    match (calendar.view(), cell.class) {
        (View::Day, CellClass::Marked) => true,
        (View::Day, CellClass::Selected) => {
            (cell.year, cell.month, cell.day) == (today.year, today.month, today.day)
        }
        _ => false,
    }
}

/// Plain text rendering of the calendar.
///
/// Selected cells are prefixed with `>`, today with `*` and cells of a
/// neighbouring month or decade with `.`.
pub fn render_text(calendar: &Calendar) -> String {
    let view = calendar.view();
    let cell_width = CalendarPane::cell_width(view);
    let heading = calendar.heading();
    let pad = CalendarPane::WIDTH - 2 - heading.len();

    let mut out = format!(
        "<{:left$}{}{:right$}>\n",
        "",
        heading,
        "",
        left = pad / 2,
        right = pad - pad / 2
    );

    if view == View::Day {
        for label in WEEK_DAYS.iter() {
            out.push_str(&format!("{:>width$}", label, width = cell_width));
        }
        out.push('\n');
    }

    for row in calendar.grid() {
        for cell in row {
            let marker = match cell.class {
                CellClass::None => ' ',
                CellClass::Pale => '.',
                CellClass::Selected => '>',
                CellClass::Marked => '*',
            };
            out.push_str(&format!(
                "{}{:>width$}",
                marker,
                cell.label(view),
                width = cell_width - 1
            ));
        }
        out.push('\n');
    }

    out
}
