//! Date eligibility rules: min/max bounds, explicitly disabled dates and
//! weekend blocking.
//!
//! All comparisons are made at day granularity, so any chrono type that
//! implements [`Datelike`] can be checked and its time of day is ignored.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Deserialize;
use thiserror::Error;

use crate::month::MonthGrid;

/// Rules deciding which dates may be selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EligibilityConfig {
    /// Earliest selectable date, inclusive.
    pub min_date: Option<NaiveDate>,
    /// Latest selectable date, inclusive.
    pub max_date: Option<NaiveDate>,
    pub disabled_dates: BTreeSet<NaiveDate>,
    pub disable_weekends: bool,
}

/// Reason a date is not selectable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Ineligibility {
    #[error("outside the displayed month")]
    OutsideMonth,
    #[error("before {0}")]
    BeforeMin(NaiveDate),
    #[error("after {0}")]
    AfterMax(NaiveDate),
    #[error("weekend")]
    Weekend,
    #[error("disabled date")]
    Disabled,
}

impl EligibilityConfig {
    /// Apply the bound, weekend and disabled-date rules without a grid.
    pub fn check_date<D: Datelike>(&self, date: &D) -> Result<(), Ineligibility> {
        if let Some(min) = self.min_date
            && day_key(date) < day_key(&min)
        {
            return Err(Ineligibility::BeforeMin(min));
        }
        if let Some(max) = self.max_date
            && day_key(date) > day_key(&max)
        {
            return Err(Ineligibility::AfterMax(max));
        }
        if self.disable_weekends && is_weekend(date) {
            return Err(Ineligibility::Weekend);
        }
        if self.disabled_dates.iter().any(|d| dates_equal(d, date)) {
            return Err(Ineligibility::Disabled);
        }
        Ok(())
    }
}

/// First rule that makes `date` unselectable in `grid`, if any.
///
/// Rules are checked cheapest first: month membership, lower bound, upper
/// bound, weekends, then the disabled list.
pub fn check<D: Datelike>(
    date: &D,
    config: &EligibilityConfig,
    grid: &MonthGrid,
) -> Result<(), Ineligibility> {
    if grid.is_date_outside_month(date) {
        return Err(Ineligibility::OutsideMonth);
    }
    config.check_date(date)
}

pub fn is_selectable<D: Datelike>(date: &D, config: &EligibilityConfig, grid: &MonthGrid) -> bool {
    check(date, config, grid).is_ok()
}

pub fn is_weekend<D: Datelike>(date: &D) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Same calendar day, ignoring time of day.
pub fn dates_equal<A: Datelike, B: Datelike>(a: &A, b: &B) -> bool {
    day_key(a) == day_key(b)
}

fn day_key<D: Datelike>(date: &D) -> (i32, u32, u32) {
    (date.year(), date.month(), date.day())
}
