//! Month paging and selection state for a calendar view.
//!
//! A view keeps five months loaded (two either side of the current one) so
//! it can page in both directions; after every move the window is rebuilt
//! around the new current month.

use chrono::NaiveDate;
use log::debug;

use crate::eligibility::{EligibilityConfig, is_selectable};
use crate::error::CalError;
use crate::month::MonthGrid;

/// Months loaded on each side of the current month.
pub const WINDOW_RADIUS: usize = 2;

/// Callbacks fired by [`MonthWindow`]. Every method defaults to a no-op.
pub trait CalendarListener {
    fn date_selected(&mut self, _date: NaiveDate) {}

    /// `weeks` is the row count of the new current month.
    fn scrolled_to_month(&mut self, _month: &MonthGrid, _weeks: u32) {}
}

impl CalendarListener for () {}

#[derive(Debug, Clone)]
pub struct MonthWindow {
    months: Vec<MonthGrid>,
    selected: Option<NaiveDate>,
}

impl MonthWindow {
    pub fn new(current: MonthGrid) -> Result<Self, CalError> {
        Ok(MonthWindow {
            months: build_window(&current)?,
            selected: None,
        })
    }

    pub fn months(&self) -> &[MonthGrid] {
        &self.months
    }

    pub fn current(&self) -> &MonthGrid {
        &self.months[WINDOW_RADIUS]
    }

    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    /// Make the month at `section` current and reload the window around it.
    ///
    /// Scrolling to the month that is already current does nothing.
    pub fn scroll_to<L: CalendarListener>(
        &mut self,
        section: usize,
        listener: &mut L,
    ) -> Result<(), CalError> {
        let month = self.months.get(section).cloned().ok_or_else(|| {
            CalError::InvalidArgument(format!(
                "section {} outside window of {} months",
                section,
                self.months.len()
            ))
        })?;
        self.recenter(month, listener)
    }

    /// Move the current month by `delta` months.
    pub fn step<L: CalendarListener>(&mut self, delta: i32, listener: &mut L) -> Result<(), CalError> {
        let month = self.current().offset(delta)?;
        self.recenter(month, listener)
    }

    /// Select `date` if the current month allows it.
    ///
    /// Returns false and keeps the previous selection when the date is not
    /// selectable.
    pub fn select<L: CalendarListener>(
        &mut self,
        date: NaiveDate,
        config: &EligibilityConfig,
        listener: &mut L,
    ) -> bool {
        if !is_selectable(&date, config, self.current()) {
            debug!("rejected selection of {date}");
            return false;
        }
        self.selected = Some(date);
        listener.date_selected(date);
        true
    }

    fn recenter<L: CalendarListener>(
        &mut self,
        month: MonthGrid,
        listener: &mut L,
    ) -> Result<(), CalError> {
        if month == *self.current() {
            return Ok(());
        }
        let weeks = month.weeks_in_month()?;
        self.months = build_window(&month)?;
        debug!("window centered on {}-{:02}", month.year(), month.month());
        listener.scrolled_to_month(self.current(), weeks);
        Ok(())
    }
}

fn build_window(current: &MonthGrid) -> Result<Vec<MonthGrid>, CalError> {
    let radius = WINDOW_RADIUS as i32;
    (-radius..=radius)
        .map(|offset| current.offset(offset))
        .collect()
}
