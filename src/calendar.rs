use crate::index::DeliveryIndex;
use chrono::{Datelike, Local, NaiveDate, TimeZone};
use serde::Serialize;

pub const WEEKDAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const KEY_FORMAT: &str = "%Y-%m-%d";

/// The month currently on screen. Owned by one calendar instance; only moved
/// by previous/next navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarView {
    pub year: i32,
    /// 1 = January.
    pub month: u32,
}

impl CalendarView {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { year, month })
    }

    pub fn at(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn previous(&self) -> Self {
        let (year, month) = if self.month == 1 {
            (self.year - 1, 12)
        } else {
            (self.year, self.month - 1)
        };
        Self::new(year, month).unwrap_or(*self)
    }

    pub fn next(&self) -> Self {
        let (year, month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        Self::new(year, month).unwrap_or(*self)
    }

    /// Long month name and year, e.g. "March 2024".
    pub fn title(&self) -> String {
        self.first_day().format("%B %Y").to_string()
    }
}

/// Weekday of the 1st, counted from Sunday = 0.
pub fn first_weekday(view: CalendarView) -> u32 {
    view.first_day().weekday().num_days_from_sunday()
}

pub fn days_in_month(view: CalendarView) -> u32 {
    view.first_day()
        .iter_days()
        .take_while(|day| day.month() == view.month)
        .count() as u32
}

/// Canonical `YYYY-MM-DD` key for a calendar day.
///
/// The day is pinned to noon before it goes through local time, so no UTC
/// offset can push it over midnight into a neighbouring date.
pub fn date_key(date: NaiveDate) -> String {
    let local_noon = date
        .and_hms_opt(12, 0, 0)
        .and_then(|noon| Local.from_local_datetime(&noon).earliest());
    match local_noon {
        Some(at) => at.date_naive().format(KEY_FORMAT).to_string(),
        None => date.format(KEY_FORMAT).to_string(),
    }
}

pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key.trim(), KEY_FORMAT).ok()
}

#[derive(Debug, Clone, Serialize)]
pub struct DayCell {
    pub day: u32,
    pub key: String,
    pub is_today: bool,
    pub has_delivery: bool,
    pub received: bool,
    /// Supplier names shown in the hover tooltip.
    pub suppliers: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthGrid {
    pub view: CalendarView,
    pub title: String,
    pub previous: CalendarView,
    pub next: CalendarView,
    pub weekdays: [&'static str; 7],
    pub leading_blanks: u32,
    pub days: Vec<DayCell>,
}

impl MonthGrid {
    /// Blank lead-in cells plus one cell per day.
    pub fn cell_count(&self) -> usize {
        self.leading_blanks as usize + self.days.len()
    }
}

pub fn build_month_grid_at(view: CalendarView, index: &DeliveryIndex, today: NaiveDate) -> MonthGrid {
    let total_days = days_in_month(view);
    let mut days = Vec::with_capacity(total_days as usize);

    for date in view.first_day().iter_days().take(total_days as usize) {
        let key = date_key(date);
        let cell = match index.get(date) {
            Some(suppliers) => DayCell {
                day: date.day(),
                is_today: date == today,
                has_delivery: true,
                received: index.is_fully_received(date),
                suppliers: suppliers.iter().map(|s| s.company_name.clone()).collect(),
                key,
            },
            None => DayCell {
                day: date.day(),
                is_today: date == today,
                has_delivery: false,
                received: false,
                suppliers: Vec::new(),
                key,
            },
        };
        days.push(cell);
    }

    MonthGrid {
        view,
        title: view.title(),
        previous: view.previous(),
        next: view.next(),
        weekdays: WEEKDAY_HEADERS,
        leading_blanks: first_weekday(view),
        days,
    }
}
