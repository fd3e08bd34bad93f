//! Rendering context shared by the argument parser and the grid formatter,
//! plus the layout widths and ANSI codes the formatter draws with.

use chrono::{NaiveDate, Weekday};

use crate::eligibility::EligibilityConfig;

/// Column display mode for multi-month layouts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnsMode {
    /// Fixed number of columns.
    Fixed(u32),
    /// Auto-detect from terminal width.
    Auto,
}

/// Rendering context containing all display and eligibility options.
#[derive(Clone, Debug)]
pub struct CalContext {
    /// Weekday shown in the first grid column.
    pub week_start: Weekday,
    /// strftime pattern for month headers.
    pub month_format: String,
    /// Whether to use ANSI color codes in output.
    pub color: bool,
    /// Whether to print the leading/trailing days of adjacent months.
    pub adjacent: bool,
    /// Today's date for highlighting.
    pub today: NaiveDate,
    /// Width of gutter between months in multi-month display.
    pub gutter_width: usize,
    /// Column display mode.
    pub columns: ColumnsMode,
    /// Rules deciding which days are rendered as selectable.
    pub eligibility: EligibilityConfig,
}

// Constants for grid formatting
pub const DAYS_PER_WEEK: usize = 7;
pub const MAX_WEEKS: u32 = 6;
pub const MONTH_WIDTH: usize = 20;
pub const GUTTER_WIDTH_REGULAR: usize = 2;

/// Default month header format, the full month name.
pub const DEFAULT_MONTH_FORMAT: &str = "%B";

// ANSI color codes
pub const COLOR_RESET: &str = "\x1b[0m";
pub const COLOR_REVERSE: &str = "\x1b[7m";
pub const COLOR_DIM: &str = "\x1b[2m";
pub const COLOR_RED: &str = "\x1b[91m";
pub const COLOR_TEAL: &str = "\x1b[96m";
pub const COLOR_SAND_YELLOW: &str = "\x1b[93m";
