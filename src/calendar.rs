use chrono::Datelike;
use derive_more::Constructor;
use std::fmt;

use crate::datetime::decade_of;
use crate::grid::{self, Grid, GridCell};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Constructor)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CalendarDate {
    pub fn from_datelike<T: Datelike>(date: &T) -> Self {
        CalendarDate::new(date.year(), date.month(), date.day())
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Day,
    Month,
    Year,
}

/// What the calendar currently displays, independent of the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewMeta {
    pub view: View,
    pub decade: i32,
    pub year: i32,
    pub month: u32,
}

impl ViewMeta {
    pub fn showing(date: &CalendarDate) -> Self {
        ViewMeta {
            view: View::Day,
            decade: decade_of(date.year),
            year: date.year,
            month: date.month,
        }
    }
}

pub type PickCallback<'a> = Box<dyn FnMut(&CalendarDate) + 'a>;

/// Day/Month/Year calendar with a committed selection and a separate
/// display cursor.
///
/// Clicks on the header, the arrows and the grid cells drive the view
/// state machine. Each committed selection is reported once to the
/// subscribed callback after the state has been updated.
pub struct Calendar<'a> {
    selected: CalendarDate,
    meta: ViewMeta,
    today: CalendarDate,
    on_pick: Option<PickCallback<'a>>,
}

impl<'a> Calendar<'a> {
    pub fn new(today: CalendarDate) -> Self {
        Calendar {
            selected: today,
            meta: ViewMeta::showing(&today),
            today,
            on_pick: None,
        }
    }

    pub fn with_callback<F>(mut self, on_pick: F) -> Self
    where
        F: FnMut(&CalendarDate) + 'a,
    {
        self.subscribe(on_pick);
        self
    }

    /// Replaces any previously subscribed callback.
    pub fn subscribe<F>(&mut self, on_pick: F)
    where
        F: FnMut(&CalendarDate) + 'a,
    {
        self.on_pick = Some(Box::new(on_pick));
    }

    pub fn selected(&self) -> &CalendarDate {
        &self.selected
    }

    pub fn meta(&self) -> &ViewMeta {
        &self.meta
    }

    pub fn view(&self) -> View {
        self.meta.view
    }

    pub fn today(&self) -> &CalendarDate {
        &self.today
    }

    pub fn heading(&self) -> String {
        grid::heading(&self.meta)
    }

    pub fn grid(&self) -> Grid {
        grid::build(&self.meta, &self.selected, &self.today)
    }

    pub fn click_header(&mut self) {
        self.meta.view = match self.meta.view {
            View::Day => View::Month,
            View::Month | View::Year => View::Year,
        };
        log::debug!("header clicked, now in {:?} view", self.meta.view);
    }

    pub fn click_left_arrow(&mut self) {
        let meta = &mut self.meta;
        match meta.view {
            View::Day => {
                if meta.month == 1 {
                    if (meta.year - 1) % 10 == 0 {
                        meta.decade = meta.year - 1;
                    }
                    meta.year -= 1;
                    meta.month = 12;
                } else {
                    meta.month -= 1;
                }
            }
            View::Month => {
                if (meta.year - 1) % 10 == 0 {
                    meta.decade = meta.year - 1;
                }
                meta.year -= 1;
            }
            View::Year => meta.decade -= 10,
        }
    }

    pub fn click_right_arrow(&mut self) {
        let meta = &mut self.meta;
        match meta.view {
            View::Day => {
                if meta.month == 12 {
                    if (meta.year + 1) % 10 == 0 {
                        meta.decade = meta.year + 1;
                    }
                    meta.year += 1;
                    meta.month = 1;
                } else {
                    meta.month += 1;
                }
            }
            View::Month => {
                if (meta.year + 1) % 10 == 0 {
                    meta.decade = meta.year + 1;
                }
                meta.year += 1;
            }
            View::Year => meta.decade += 10,
        }
    }

    pub fn click_day(&mut self, year: i32, month: u32, day: u32) {
        self.meta.decade = decade_of(year);
        self.meta.year = year;
        self.meta.month = month;
        self.commit(CalendarDate::new(year, month, day));
    }

    pub fn click_month(&mut self, month: u32) {
        self.meta.view = View::Day;
        if month == self.selected.month {
            return;
        }

        self.meta.month = month;
        self.commit(CalendarDate {
            year: self.meta.year,
            month,
            ..self.selected
        });
    }

    pub fn click_year(&mut self, year: i32) {
        self.meta.view = View::Month;
        if year == self.selected.year {
            return;
        }

        self.meta.decade = decade_of(year);
        self.meta.year = year;
        self.commit(CalendarDate {
            year,
            ..self.selected
        });
    }

    /// Clicks a cell of the grid currently on display.
    pub fn click_cell(&mut self, cell: &GridCell) {
        match self.meta.view {
            View::Day => self.click_day(cell.year, cell.month, cell.day),
            View::Month => self.click_month(cell.month),
            View::Year => self.click_year(cell.year),
        }
    }

    fn commit(&mut self, date: CalendarDate) {
        self.selected = date;
        log::debug!("selected {}", date);

        if let Some(on_pick) = self.on_pick.as_mut() {
            on_pick(&self.selected);
        }
    }
}

impl fmt::Debug for Calendar<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Calendar")
            .field("selected", &self.selected)
            .field("meta", &self.meta)
            .field("today", &self.today)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::CellClass;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn today() -> CalendarDate {
        CalendarDate::new(2024, 6, 15)
    }

    fn recording(today: CalendarDate) -> (Calendar<'static>, Rc<RefCell<Vec<CalendarDate>>>) {
        let picks = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&picks);
        let calendar = Calendar::new(today).with_callback(move |date| {
            sink.borrow_mut().push(*date);
        });
        (calendar, picks)
    }

    #[test]
    fn starts_on_today() {
        let (calendar, picks) = recording(today());

        assert_eq!(calendar.selected(), &today());
        assert_eq!(
            calendar.meta(),
            &ViewMeta {
                view: View::Day,
                decade: 2020,
                year: 2024,
                month: 6
            }
        );
        assert_eq!(calendar.heading(), "Jun 2024");
        assert!(picks.borrow().is_empty());
    }

    #[test]
    fn header_drills_up_and_stops_at_year() {
        let mut calendar = Calendar::new(today());

        calendar.click_header();
        assert_eq!(calendar.view(), View::Month);
        assert_eq!(calendar.heading(), "2024");

        calendar.click_header();
        assert_eq!(calendar.view(), View::Year);
        assert_eq!(calendar.heading(), "2020-2029");

        calendar.click_header();
        assert_eq!(calendar.view(), View::Year);
    }

    #[test]
    fn twelve_months_back_is_one_year_back() {
        for month in 1..=12 {
            let mut calendar = Calendar::new(CalendarDate::new(2024, month, 1));
            for _ in 0..12 {
                calendar.click_left_arrow();
            }
            assert_eq!((calendar.meta().year, calendar.meta().month), (2023, month));
        }
    }

    #[test]
    fn paging_forward_and_back_is_symmetric() {
        let mut calendar = Calendar::new(today());
        for _ in 0..30 {
            calendar.click_right_arrow();
        }
        assert_eq!((calendar.meta().year, calendar.meta().month), (2026, 12));
        for _ in 0..30 {
            calendar.click_left_arrow();
        }
        assert_eq!((calendar.meta().year, calendar.meta().month), (2024, 6));
    }

    #[test]
    fn day_paging_rolls_decade() {
        let mut calendar = Calendar::new(CalendarDate::new(2031, 1, 10));
        calendar.click_left_arrow();
        assert_eq!(
            calendar.meta(),
            &ViewMeta {
                view: View::Day,
                decade: 2030,
                year: 2030,
                month: 12
            }
        );

        let mut calendar = Calendar::new(CalendarDate::new(2029, 12, 10));
        calendar.click_right_arrow();
        assert_eq!(
            calendar.meta(),
            &ViewMeta {
                view: View::Day,
                decade: 2030,
                year: 2030,
                month: 1
            }
        );
    }

    #[test]
    fn day_paging_keeps_decade_inside_year() {
        let mut calendar = Calendar::new(CalendarDate::new(2030, 1, 10));
        calendar.click_left_arrow();
        // (2030 - 1) % 10 != 0, the decade cursor stays put
        assert_eq!(calendar.meta().year, 2029);
        assert_eq!(calendar.meta().decade, 2030);
    }

    #[test]
    fn month_view_pages_years() {
        let mut calendar = Calendar::new(CalendarDate::new(2031, 3, 1));
        calendar.click_header();

        calendar.click_left_arrow();
        assert_eq!((calendar.meta().year, calendar.meta().decade), (2030, 2030));
        assert_eq!(calendar.meta().month, 3);

        calendar.click_right_arrow();
        calendar.click_right_arrow();
        assert_eq!((calendar.meta().year, calendar.meta().decade), (2032, 2030));

        let mut calendar = Calendar::new(CalendarDate::new(2039, 3, 1));
        calendar.click_header();
        calendar.click_right_arrow();
        assert_eq!((calendar.meta().year, calendar.meta().decade), (2040, 2040));
    }

    #[test]
    fn year_view_pages_decades() {
        let mut calendar = Calendar::new(today());
        calendar.click_header();
        calendar.click_header();

        calendar.click_right_arrow();
        assert_eq!(calendar.heading(), "2030-2039");
        calendar.click_left_arrow();
        calendar.click_left_arrow();
        assert_eq!(calendar.heading(), "2010-2019");
        assert_eq!((calendar.meta().year, calendar.meta().month), (2024, 6));
    }

    #[test]
    fn clicking_overflow_day_recentres() {
        let (mut calendar, picks) = recording(today());

        let cell = calendar.grid()[5][3];
        assert_eq!((cell.month, cell.day, cell.class), (7, 3, CellClass::Pale));
        calendar.click_cell(&cell);

        assert_eq!(calendar.selected(), &CalendarDate::new(2024, 7, 3));
        assert_eq!(calendar.meta().month, 7);
        assert_eq!(calendar.view(), View::Day);
        assert_eq!(*picks.borrow(), vec![CalendarDate::new(2024, 7, 3)]);
    }

    #[test]
    fn clicking_day_resets_decade() {
        let mut calendar = Calendar::new(CalendarDate::new(2030, 1, 10));
        calendar.click_left_arrow();
        calendar.click_day(2029, 12, 24);
        assert_eq!(calendar.meta().decade, 2020);
    }

    #[test]
    fn clicking_selected_month_only_switches_view() {
        for month in 1..=12 {
            let selected = CalendarDate::new(2024, month, 10);
            let (mut calendar, picks) = recording(selected);
            calendar.click_header();
            calendar.click_month(month);

            assert_eq!(calendar.selected(), &selected);
            assert_eq!(calendar.view(), View::Day);
            assert!(picks.borrow().is_empty());
        }
    }

    #[test]
    fn clicking_other_month_takes_displayed_year() {
        let (mut calendar, picks) = recording(today());
        calendar.click_header();
        calendar.click_right_arrow();
        calendar.click_month(2);

        assert_eq!(calendar.selected(), &CalendarDate::new(2025, 2, 15));
        assert_eq!(calendar.view(), View::Day);
        assert_eq!(calendar.heading(), "Feb 2025");
        assert_eq!(picks.borrow().len(), 1);
    }

    #[test]
    fn month_confirm_compares_month_only() {
        let (mut calendar, picks) = recording(today());
        calendar.click_header();
        calendar.click_right_arrow();
        calendar.click_month(6);

        assert_eq!(calendar.selected(), &today());
        assert_eq!(calendar.heading(), "Jun 2025");
        assert!(picks.borrow().is_empty());
    }

    #[test]
    fn clicking_selected_year_only_switches_view() {
        for year in 2019..=2030 {
            let selected = CalendarDate::new(year, 4, 2);
            let (mut calendar, picks) = recording(selected);
            calendar.click_header();
            calendar.click_header();
            calendar.click_year(year);

            assert_eq!(calendar.selected(), &selected);
            assert_eq!(calendar.view(), View::Month);
            assert!(picks.borrow().is_empty());
        }
    }

    #[test]
    fn clicking_other_year_moves_decade() {
        let (mut calendar, picks) = recording(today());
        calendar.click_header();
        calendar.click_header();

        let cell = calendar.grid()[2][3];
        assert_eq!(cell.year, 2030);
        calendar.click_cell(&cell);

        assert_eq!(calendar.selected(), &CalendarDate::new(2030, 6, 15));
        assert_eq!(
            calendar.meta(),
            &ViewMeta {
                view: View::Month,
                decade: 2030,
                year: 2030,
                month: 6
            }
        );
        assert_eq!(*picks.borrow(), vec![CalendarDate::new(2030, 6, 15)]);
    }

    #[test]
    fn full_cycle_notifies_once_per_commit() {
        let (mut calendar, picks) = recording(today());

        calendar.click_header();
        calendar.click_header();
        calendar.click_year(2021);
        calendar.click_month(3);
        calendar.click_day(2021, 3, 31);
        calendar.click_left_arrow();

        assert_eq!(
            *picks.borrow(),
            vec![
                CalendarDate::new(2021, 6, 15),
                CalendarDate::new(2021, 3, 15),
                CalendarDate::new(2021, 3, 31),
            ]
        );
        assert_eq!(calendar.heading(), "Feb 2021");
    }

    #[test]
    fn displays_as_iso_date() {
        assert_eq!(CalendarDate::new(2024, 7, 3).to_string(), "2024-07-03");
        assert_eq!(CalendarDate::new(2024, 11, 30).to_string(), "2024-11-30");
    }
}
