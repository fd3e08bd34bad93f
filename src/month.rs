//! Month grid computation: day counts, weekday alignment and the mapping
//! from a linear grid index to a concrete date.
//!
//! A grid is seven columns wide. Column 0 holds the configured first
//! weekday (Sunday unless changed), so day 1 of the month sits at index
//! [`MonthGrid::first_weekday_offset`]. Cells before it hold the trailing
//! days of the previous month and cells after the last day hold the
//! leading days of the next one.

use std::fmt::Write;
use std::hash::{Hash, Hasher};

use chrono::{Datelike, Days, Locale, Months, NaiveDate, TimeDelta, Weekday};
use log::warn;

use crate::error::CalError;
use crate::types::{DAYS_PER_WEEK, DEFAULT_MONTH_FORMAT};

/// Row and column of a cell in the seven-column grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPosition {
    pub row: usize,
    pub column: usize,
}

impl GridPosition {
    pub fn from_index(index: usize) -> Self {
        GridPosition {
            row: index / DAYS_PER_WEEK,
            column: index % DAYS_PER_WEEK,
        }
    }

    pub fn index(self) -> usize {
        self.row * DAYS_PER_WEEK + self.column
    }
}

/// One calendar month laid out as a grid of whole weeks.
///
/// Only the year and month of the reference date take part in grid math.
/// Two grids compare equal when they cover the same month of the same year.
#[derive(Debug, Clone)]
pub struct MonthGrid {
    reference: NaiveDate,
    format: String,
    week_start: Weekday,
}

impl MonthGrid {
    pub fn new(reference: NaiveDate) -> Self {
        MonthGrid {
            reference,
            format: DEFAULT_MONTH_FORMAT.to_string(),
            week_start: Weekday::Sun,
        }
    }

    /// Build a grid for the month containing any chrono date or datetime.
    pub fn containing<D: Datelike>(date: &D) -> Result<Self, CalError> {
        NaiveDate::from_ymd_opt(date.year(), date.month(), date.day())
            .map(Self::new)
            .ok_or(CalError::DateArithmetic {
                year: date.year(),
                month: date.month(),
                day: i64::from(date.day()),
            })
    }

    /// Replace the month-name format (strftime syntax, e.g. `"%B %Y"`).
    pub fn with_format(mut self, format: &str) -> Result<Self, CalError> {
        self.set_format(format)?;
        Ok(self)
    }

    pub fn set_format(&mut self, format: &str) -> Result<(), CalError> {
        validate_format(format)?;
        self.format = format.to_string();
        Ok(())
    }

    pub fn with_week_start(mut self, week_start: Weekday) -> Self {
        self.week_start = week_start;
        self
    }

    pub fn reference(&self) -> NaiveDate {
        self.reference
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn week_start(&self) -> Weekday {
        self.week_start
    }

    pub fn year(&self) -> i32 {
        self.reference.year()
    }

    pub fn month(&self) -> u32 {
        self.reference.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        // Day 1 of the reference month is always representable.
        self.reference - Days::new(u64::from(self.reference.day0()))
    }

    /// Number of days in the month, found by stepping to the first of the
    /// next month and back one day.
    pub fn days_in_month(&self) -> Result<u32, CalError> {
        self.first_day()
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .map(|last| last.day())
            .ok_or_else(|| self.arithmetic_error(32))
    }

    /// Number of leading cells before day 1, from 0 to 6.
    pub fn first_weekday_offset(&self) -> u32 {
        let first = self.first_day().weekday().num_days_from_sunday();
        let start = self.week_start.num_days_from_sunday();
        (first + 7 - start) % 7
    }

    pub fn weeks_in_month(&self) -> Result<u32, CalError> {
        let needed = self.days_in_month()? + self.first_weekday_offset();
        Ok(needed.div_ceil(DAYS_PER_WEEK as u32))
    }

    /// Total number of cells, always a whole number of weeks.
    pub fn cell_count(&self) -> Result<usize, CalError> {
        Ok(self.weeks_in_month()? as usize * DAYS_PER_WEEK)
    }

    /// Date shown in the cell at `index`.
    ///
    /// Indices before the first weekday offset land in the previous month,
    /// indices past the last day land in the next one.
    pub fn date_for_position(&self, index: usize) -> Result<NaiveDate, CalError> {
        let index = i64::try_from(index).map_err(|_| self.arithmetic_error(i64::MAX))?;
        let day = index - i64::from(self.first_weekday_offset()) + 1;
        TimeDelta::try_days(day - 1)
            .and_then(|delta| self.first_day().checked_add_signed(delta))
            .ok_or_else(|| self.arithmetic_error(day))
    }

    /// Like [`date_for_position`](Self::date_for_position), but falls back to
    /// the reference date when the cell date cannot be represented.
    pub fn date_for_position_or_reference(&self, index: usize) -> NaiveDate {
        match self.date_for_position(index) {
            Ok(date) => date,
            Err(err) => {
                warn!("grid cell {index}: {err}; using reference date {}", self.reference);
                self.reference
            }
        }
    }

    /// Every date of the grid in cell order.
    pub fn dates(&self) -> Result<Vec<NaiveDate>, CalError> {
        (0..self.cell_count()?)
            .map(|index| self.date_for_position(index))
            .collect()
    }

    pub fn is_date_outside_month<D: Datelike>(&self, date: &D) -> bool {
        date.year() != self.year() || date.month() != self.month()
    }

    /// Month name rendered with the configured format in `locale`.
    pub fn month_name(&self, locale: Locale) -> String {
        self.reference
            .format_localized(&self.format, locale)
            .to_string()
    }

    /// Grid for the month `months` away, keeping format and week start.
    ///
    /// The day of month is clamped when the target month is shorter.
    pub fn offset(&self, months: i32) -> Result<Self, CalError> {
        let step = Months::new(months.unsigned_abs());
        let shifted = if months >= 0 {
            self.reference.checked_add_months(step)
        } else {
            self.reference.checked_sub_months(step)
        };

        shifted
            .map(|reference| MonthGrid {
                reference,
                format: self.format.clone(),
                week_start: self.week_start,
            })
            .ok_or_else(|| self.arithmetic_error(i64::from(self.reference.day())))
    }

    fn arithmetic_error(&self, day: i64) -> CalError {
        CalError::DateArithmetic {
            year: self.year(),
            month: self.month(),
            day,
        }
    }
}

impl PartialEq for MonthGrid {
    fn eq(&self, other: &Self) -> bool {
        self.year() == other.year() && self.month() == other.month()
    }
}

impl Eq for MonthGrid {}

impl Hash for MonthGrid {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.year(), self.month()).hash(state);
    }
}

/// Reject patterns a plain date cannot render.
///
/// Unknown specifiers fail, and so do time and offset fields such as `%H`
/// or `%z`, which need more than a calendar date.
fn validate_format(format: &str) -> Result<(), CalError> {
    let mut rendered = String::new();
    write!(rendered, "{}", NaiveDate::default().format(format))
        .map_err(|_| CalError::InvalidFormat(format.to_string()))
}
