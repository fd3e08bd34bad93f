//! Command-line argument parsing using clap.
//!
//! Positional arguments follow the `cal` convention: `[[month] year]`.

use std::io::IsTerminal;
use std::path::PathBuf;

use chrono::{Datelike, NaiveDate, Weekday};
use clap::{Parser, ValueHint};

use crate::config::ConfigFile;
use crate::error::CalError;
use crate::formatter::parse_month;
use crate::types::{CalContext, ColumnsMode, DEFAULT_MONTH_FORMAT, GUTTER_WIDTH_REGULAR};

#[derive(Parser, Debug)]
#[command(name = "calkit")]
#[command(about = "Displays month grids with selectable and disabled dates", long_about = None)]
#[command(version)]
#[command(after_help = HELP_MESSAGE)]
pub struct Args {
    /// Week starts on Sunday (default).
    #[arg(short = 's', long, help_heading = "Calendar options")]
    pub sunday: bool,

    /// Week starts on Monday.
    #[arg(short = 'm', long, help_heading = "Calendar options")]
    pub monday: bool,

    /// Display three months (previous, current, next).
    #[arg(short = '3', long = "three", help_heading = "Display options")]
    pub three_months: bool,

    /// Number of months to display.
    #[arg(
        short = 'n',
        long = "months",
        help_heading = "Display options",
        value_name = "num"
    )]
    pub months_count: Option<u32>,

    /// Show the days of adjacent months that fill the first and last week.
    #[arg(short = 'a', long, help_heading = "Display options")]
    pub adjacent: bool,

    /// Month header format (strftime, default "%B").
    #[arg(long, help_heading = "Display options", value_name = "fmt")]
    pub format: Option<String>,

    /// Earliest selectable date (YYYY-MM-DD).
    #[arg(long, help_heading = "Selection rules", value_name = "date", value_parser = parse_date)]
    pub min: Option<NaiveDate>,

    /// Latest selectable date (YYYY-MM-DD).
    #[arg(long, help_heading = "Selection rules", value_name = "date", value_parser = parse_date)]
    pub max: Option<NaiveDate>,

    /// Disable a specific date (YYYY-MM-DD); may be repeated.
    #[arg(
        short = 'd',
        long = "disable",
        help_heading = "Selection rules",
        value_name = "date",
        value_parser = parse_date
    )]
    pub disabled: Vec<NaiveDate>,

    /// Make Saturdays and Sundays unselectable.
    #[arg(short = 'W', long = "no-weekends", help_heading = "Selection rules")]
    pub no_weekends: bool,

    /// Read selection rules and display defaults from a TOML file.
    #[arg(long, help_heading = "Selection rules", value_name = "file", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Report whether a single date is selectable instead of printing a grid.
    #[arg(long, help_heading = "Selection rules", value_name = "date", value_parser = parse_date)]
    pub check: Option<NaiveDate>,

    /// Month (1-12 or name) - optional, used with year.
    #[arg(index = 1, default_value = None, value_name = "month", value_hint = ValueHint::Other)]
    pub month_arg: Option<String>,

    /// Year (1-9999).
    #[arg(index = 2, default_value = None, value_name = "year", value_hint = ValueHint::Other)]
    pub year_arg: Option<String>,

    /// Disable colorized output.
    #[arg(long, help_heading = "Output options")]
    pub color: bool,

    /// Number of columns for multiple months (or "auto" for terminal width).
    #[arg(
        short = 'c',
        long = "columns",
        help_heading = "Output options",
        value_name = "width"
    )]
    pub columns: Option<String>,
}

/// Help message displayed with --help.
const HELP_MESSAGE: &str = "Display month grids, marking dates that cannot be selected.

Without any arguments, display the current month.

Examples:
  calkit                          Display current month
  calkit -3                       Display three months (prev, current, next)
  calkit 6 2016                   Display June 2016
  calkit --min 2016-06-10 6 2016  Days before June 10 are disabled
  calkit -W -d 2016-06-14 6 2016  Disable weekends and June 14
  calkit --check 2016-06-04 -W    Report whether June 4 can be selected
  calkit --config rules.toml      Read rules from a TOML file
  calkit --color                  Disable colorized output";

impl Args {
    pub fn parse() -> Self {
        Parser::parse()
    }
}

/// Parse a `YYYY-MM-DD` date argument.
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| format!("Invalid date: {} (expected YYYY-MM-DD)", s))
}

impl CalContext {
    /// Build the rendering context from arguments and the optional config
    /// file. Command-line values take precedence over the file.
    pub fn new(args: &Args) -> Result<Self, CalError> {
        let file = match &args.config {
            Some(path) => ConfigFile::load(path)?,
            None => ConfigFile::default(),
        };

        let color = !args.color && std::io::stdout().is_terminal();

        let columns = match args.columns.as_deref() {
            Some("auto") | None => ColumnsMode::Auto,
            Some(s) => {
                let n = s
                    .parse::<u32>()
                    .map_err(|_| CalError::InvalidArgument(format!("Invalid columns value: {}", s)))?;
                if n == 0 {
                    return Err(CalError::InvalidArgument("Columns must be positive".to_string()));
                }
                ColumnsMode::Fixed(n)
            }
        };

        if args.months_count == Some(0) {
            return Err(CalError::InvalidArgument(
                "Number of months must be positive".to_string(),
            ));
        }

        if args.three_months && args.months_count.is_some() {
            return Err(CalError::InvalidArgument(
                "Options -3 and -n are mutually exclusive".to_string(),
            ));
        }
        if args.sunday && args.monday {
            return Err(CalError::InvalidArgument(
                "Options -s and -m are mutually exclusive".to_string(),
            ));
        }

        let week_start = if args.monday {
            Weekday::Mon
        } else if args.sunday {
            Weekday::Sun
        } else {
            file.display.week_start.map_or(Weekday::Sun, Weekday::from)
        };

        let month_format = args
            .format
            .clone()
            .or(file.display.month_format)
            .unwrap_or_else(|| DEFAULT_MONTH_FORMAT.to_string());

        let mut eligibility = file.eligibility;
        if args.min.is_some() {
            eligibility.min_date = args.min;
        }
        if args.max.is_some() {
            eligibility.max_date = args.max;
        }
        eligibility.disabled_dates.extend(args.disabled.iter().copied());
        eligibility.disable_weekends |= args.no_weekends;

        if let (Some(min), Some(max)) = (eligibility.min_date, eligibility.max_date)
            && min > max
        {
            return Err(CalError::InvalidArgument(format!(
                "Minimum date {} is after maximum date {}",
                min, max
            )));
        }

        Ok(CalContext {
            week_start,
            month_format,
            color,
            adjacent: args.adjacent || file.display.adjacent.unwrap_or(false),
            today: get_today_date(),
            gutter_width: GUTTER_WIDTH_REGULAR,
            columns,
            eligibility,
        })
    }
}

/// Get today's date, respecting CALKIT_TEST_TIME environment variable for testing.
pub fn get_today_date() -> NaiveDate {
    if let Ok(test_time) = std::env::var("CALKIT_TEST_TIME")
        && let Ok(date) = NaiveDate::parse_from_str(&test_time, "%Y-%m-%d")
    {
        return date;
    }
    chrono::Local::now().date_naive()
}

/// Calculate the displayed month from positional arguments.
///
/// Argument patterns:
/// - no args: current month
/// - 1 arg: year (4 digits) keeps the current month, otherwise a month of this year
/// - 2 args: month year
pub fn get_display_date(args: &Args) -> Result<NaiveDate, CalError> {
    let today = get_today_date();

    let (year, month) = match (args.month_arg.as_deref(), args.year_arg.as_deref()) {
        (None, None) => (today.year(), today.month()),
        (Some(val), None) => {
            if let Ok(num) = val.parse::<i32>()
                && (1000..=9999).contains(&num)
            {
                (num, today.month())
            } else {
                let month = parse_month(val)
                    .ok_or_else(|| CalError::InvalidArgument(format!("Invalid argument: {}", val)))?;
                (today.year(), month)
            }
        }
        (Some(month_str), Some(year_str)) => {
            let month = parse_month(month_str)
                .ok_or_else(|| CalError::InvalidArgument(format!("Invalid month: {}", month_str)))?;
            (parse_year(year_str)?, month)
        }
        (None, Some(_)) => {
            return Err(CalError::InvalidArgument(
                "Invalid argument combination".to_string(),
            ));
        }
    };

    NaiveDate::from_ymd_opt(year, month, 1).ok_or(CalError::DateArithmetic {
        year,
        month,
        day: 1,
    })
}

fn parse_year(s: &str) -> Result<i32, CalError> {
    let year = s
        .parse::<i32>()
        .map_err(|_| CalError::InvalidArgument(format!("Invalid year: {}", s)))?;
    if !(1..=9999).contains(&year) {
        return Err(CalError::InvalidArgument(format!(
            "Invalid year: {} (must be 1-9999)",
            year
        )));
    }
    Ok(year)
}
