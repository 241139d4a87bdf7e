use unsegen::base::{Color, StyleModifier, TextFormatModifier};

use crate::calendar::{Calendar, View};
use crate::config::ThemeConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::grid::{CellClass, DAY_COLUMNS, DAY_ROWS, LARGE_COLUMNS, LARGE_ROWS};

#[derive(Clone, Debug)]
pub struct Theme {
    pub header_style: StyleModifier,
    pub label_style: StyleModifier,
    pub day_style: StyleModifier,
    pub pale_style: StyleModifier,
    pub selected_style: StyleModifier,
    pub today_style: StyleModifier,
    pub placeholder_style: StyleModifier,
    pub focus_char: Option<char>,
    pub today_char: Option<char>,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            header_style: StyleModifier::default().fg_color(Color::Yellow),
            label_style: StyleModifier::default().fg_color(Color::Yellow),
            day_style: StyleModifier::default(),
            pale_style: StyleModifier::default().fg_color(Color::Cyan),
            selected_style: StyleModifier::default().bg_color(Color::Blue),
            today_style: StyleModifier::default()
                .format(TextFormatModifier::default().italic(true)),
            placeholder_style: StyleModifier::default()
                .format(TextFormatModifier::default().italic(true)),
            focus_char: None,
            today_char: Some('*'),
        }
    }
}

impl Theme {
    pub fn from_config(config: &ThemeConfig) -> Result<Self> {
        let header = parse_color(&config.header)?;

        Ok(Theme {
            header_style: StyleModifier::default().fg_color(header),
            label_style: StyleModifier::default().fg_color(header),
            pale_style: StyleModifier::default().fg_color(parse_color(&config.pale)?),
            selected_style: StyleModifier::default().bg_color(parse_color(&config.selected)?),
            focus_char: config.focus_char,
            today_char: config.today_char,
            ..Theme::default()
        })
    }

    pub fn cell_style(&self, class: CellClass) -> StyleModifier {
        match class {
            CellClass::None => self.day_style,
            CellClass::Pale => self.pale_style,
            CellClass::Selected => self.selected_style,
            CellClass::Marked => self.today_style,
        }
    }

    /// Focus is shown by inverting whatever style the element has.
    pub fn focused(&self, style: StyleModifier, focused: bool) -> StyleModifier {
        if focused {
            style.invert(true)
        } else {
            style
        }
    }
}

pub fn parse_color(name: &str) -> Result<Color> {
    match name.to_lowercase().as_str() {
        "black" => Ok(Color::Black),
        "red" => Ok(Color::Red),
        "green" => Ok(Color::Green),
        "yellow" => Ok(Color::Yellow),
        "blue" => Ok(Color::Blue),
        "magenta" => Ok(Color::Magenta),
        "cyan" => Ok(Color::Cyan),
        "white" => Ok(Color::White),
        _ => Err(Error::new(ErrorKind::ThemeColor, &format!("'{}'", name))),
    }
}

/// Which of the two calendars on screen an element belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Standalone,
    Overlay,
}

/// Focusable parts of a calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    LeftArrow,
    Heading,
    RightArrow,
    Cell(usize, usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Calendar(Slot, Part),
    Input,
}

pub fn grid_shape(view: View) -> (usize, usize) {
    match view {
        View::Day => (DAY_ROWS, DAY_COLUMNS),
        View::Month | View::Year => (LARGE_ROWS, LARGE_COLUMNS),
    }
}

/// Parts of `calendar` in tab order: arrows and heading first, then the
/// grid in reading order.
pub fn calendar_parts(calendar: &Calendar) -> Vec<Part> {
    let (rows, columns) = grid_shape(calendar.view());

    vec![Part::LeftArrow, Part::Heading, Part::RightArrow]
        .into_iter()
        .chain((0..rows).flat_map(move |row| (0..columns).map(move |col| Part::Cell(row, col))))
        .collect()
}

pub fn click_part(calendar: &mut Calendar, part: Part) {
    match part {
        Part::LeftArrow => calendar.click_left_arrow(),
        Part::Heading => calendar.click_header(),
        Part::RightArrow => calendar.click_right_arrow(),
        Part::Cell(row, col) => {
            let cell = calendar.grid().get(row).and_then(|r| r.get(col)).copied();
            if let Some(cell) = cell {
                calendar.click_cell(&cell);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::CalendarDate;

    #[test]
    fn parts_follow_view() {
        let mut calendar = Calendar::new(CalendarDate::new(2024, 6, 15));
        let parts = calendar_parts(&calendar);
        assert_eq!(parts.len(), 3 + 42);
        assert_eq!(parts[1], Part::Heading);
        assert_eq!(parts[3], Part::Cell(0, 0));
        assert_eq!(parts[44], Part::Cell(5, 6));

        calendar.click_header();
        let parts = calendar_parts(&calendar);
        assert_eq!(parts.len(), 3 + 12);
        assert_eq!(parts[14], Part::Cell(2, 3));
    }

    #[test]
    fn clicking_parts_drives_calendar() {
        let mut calendar = Calendar::new(CalendarDate::new(2024, 6, 15));

        click_part(&mut calendar, Part::RightArrow);
        assert_eq!(calendar.heading(), "Jul 2024");

        click_part(&mut calendar, Part::Heading);
        click_part(&mut calendar, Part::Cell(0, 2));
        assert_eq!(calendar.selected(), &CalendarDate::new(2024, 3, 15));
        assert_eq!(calendar.view(), View::Day);

        // out of range cells are ignored
        click_part(&mut calendar, Part::Cell(9, 9));
        assert_eq!(calendar.selected(), &CalendarDate::new(2024, 3, 15));
    }

    #[test]
    fn colors_by_name() {
        assert!(matches!(parse_color("Yellow"), Ok(Color::Yellow)));
        let err = parse_color("purple").unwrap_err();
        assert!(matches!(err.kind, ErrorKind::ThemeColor));
    }

    #[test]
    fn theme_from_default_config() {
        let theme = Theme::from_config(&ThemeConfig::default()).unwrap();
        assert_eq!(theme.today_char, Some('*'));
        assert_eq!(theme.focus_char, None);
    }
}
