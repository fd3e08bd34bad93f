//! Month grid and date eligibility engine for calendar widgets.
//!
//! Features:
//! - Month grid math: day counts, first-weekday offset, week rows,
//!   grid index to date mapping
//! - Selection rules: min/max bounds, disabled dates, weekends
//! - Month paging window with listener callbacks
//! - Terminal rendering of grids with disabled-date marking

pub mod args;
pub mod config;
pub mod eligibility;
pub mod error;
pub mod formatter;
pub mod month;
pub mod navigator;
pub mod types;
