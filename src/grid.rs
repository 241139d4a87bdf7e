use crate::calendar::{CalendarDate, View, ViewMeta};
use crate::datetime::{
    days_in_month, first_weekday_of_month, month_abbrev, next_month, prev_month,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellClass {
    None,
    Pale,
    Selected,
    Marked,
}

/// A single clickable cell. Year and month are recorded for every cell
/// since overflow days of the neighbouring months are selectable as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub class: CellClass,
}

impl GridCell {
    fn new(year: i32, month: u32, day: u32, class: CellClass) -> Self {
        GridCell {
            year,
            month,
            day,
            class,
        }
    }

    pub fn label(&self, view: View) -> String {
        match view {
            View::Day => self.day.to_string(),
            View::Month => month_abbrev(self.month).to_owned(),
            View::Year => self.year.to_string(),
        }
    }
}

pub type Grid = Vec<Vec<GridCell>>;

pub const DAY_ROWS: usize = 6;
pub const DAY_COLUMNS: usize = 7;
pub const LARGE_ROWS: usize = 3;
pub const LARGE_COLUMNS: usize = 4;

pub fn heading(meta: &ViewMeta) -> String {
    match meta.view {
        View::Day => format!("{} {}", month_abbrev(meta.month), meta.year),
        View::Month => format!("{}", meta.year),
        View::Year => format!("{}-{}", meta.decade, meta.decade + 9),
    }
}

pub fn build(meta: &ViewMeta, selected: &CalendarDate, today: &CalendarDate) -> Grid {
    match meta.view {
        View::Day => day_grid(meta, selected, today),
        View::Month => month_grid(meta, selected),
        View::Year => year_grid(meta, selected),
    }
}

pub fn day_grid(meta: &ViewMeta, selected: &CalendarDate, today: &CalendarDate) -> Grid {
    let (year, month) = (meta.year, meta.month);
    let (before_year, before_month) = prev_month(year, month);
    let (after_year, after_month) = next_month(year, month);

    let first_weekday = first_weekday_of_month(year, month) as i64;
    let num_days = days_in_month(year, month) as i64;
    let last_month_num_days = days_in_month(before_year, before_month) as i64;

    (0..DAY_ROWS as i64)
        .map(|row| {
            (0..DAY_COLUMNS as i64)
                .map(|col| {
                    let day = 7 * row + col - first_weekday + 1;

                    if row == 0 && col < first_weekday {
                        GridCell::new(
                            before_year,
                            before_month,
                            (last_month_num_days - first_weekday + 1 + col) as u32,
                            CellClass::Pale,
                        )
                    } else if day > num_days {
                        GridCell::new(
                            after_year,
                            after_month,
                            (day - num_days) as u32,
                            CellClass::Pale,
                        )
                    } else {
                        let cell = CalendarDate::new(year, month, day as u32);
                        let class = if cell == *selected {
                            CellClass::Selected
                        } else if cell == *today {
                            CellClass::Marked
                        } else {
                            CellClass::None
                        };
                        GridCell::new(year, month, day as u32, class)
                    }
                })
                .collect()
        })
        .collect()
}

// The year is not compared: a selected month stays highlighted in every
// year browsed in Month view.
pub fn month_grid(meta: &ViewMeta, selected: &CalendarDate) -> Grid {
    (0..LARGE_ROWS as u32)
        .map(|row| {
            (0..LARGE_COLUMNS as u32)
                .map(|col| {
                    let month = LARGE_COLUMNS as u32 * row + col + 1;
                    let class = if month == selected.month {
                        CellClass::Selected
                    } else {
                        CellClass::None
                    };
                    GridCell::new(meta.year, month, 1, class)
                })
                .collect()
        })
        .collect()
}

/// Twelve consecutive years starting one before the decade, so the last
/// year of the previous and the first of the next decade frame it.
pub fn year_grid(meta: &ViewMeta, selected: &CalendarDate) -> Grid {
    let first = meta.decade - 1;

    (0..LARGE_ROWS as i32)
        .map(|row| {
            (0..LARGE_COLUMNS as i32)
                .map(|col| {
                    let year = first + LARGE_COLUMNS as i32 * row + col;
                    let class = if year == selected.year {
                        CellClass::Selected
                    } else if year < meta.decade || year > meta.decade + 9 {
                        CellClass::Pale
                    } else {
                        CellClass::None
                    };
                    GridCell::new(year, meta.month, 1, class)
                })
                .collect()
        })
        .collect()
}
