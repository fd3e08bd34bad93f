//! Text rendering of month grids with localization and color support.

use chrono::{Datelike, Locale, NaiveDate, Weekday};
use console::measure_text_width;
use unicode_width::UnicodeWidthStr;

use crate::eligibility::{check, is_weekend};
use crate::error::CalError;
use crate::month::MonthGrid;
use crate::navigator::{MonthWindow, WINDOW_RADIUS};
use crate::types::{
    COLOR_DIM, COLOR_RED, COLOR_RESET, COLOR_REVERSE, COLOR_SAND_YELLOW, COLOR_TEAL, CalContext,
    ColumnsMode, DAYS_PER_WEEK, MAX_WEEKS, MONTH_WIDTH,
};

/// Get system locale from environment (LC_ALL > LC_TIME > LANG > en_US).
pub fn get_system_locale() -> Locale {
    std::env::var("LC_ALL")
        .or_else(|_| std::env::var("LC_TIME"))
        .or_else(|_| std::env::var("LANG"))
        .unwrap_or_else(|_| "en_US.UTF-8".to_string())
        .split('.')
        .next()
        .unwrap_or("en_US")
        .split('@')
        .next()
        .unwrap_or("en_US")
        .parse()
        .unwrap_or(Locale::en_US)
}

/// Parse month from string (numeric 1-12 or English name).
pub fn parse_month(s: &str) -> Option<u32> {
    if let Ok(n) = s.parse::<u32>()
        && (1..=12).contains(&n)
    {
        return Some(n);
    }

    let s_lower = s.to_lowercase();
    let month_names: [(&str, u32); 23] = [
        ("january", 1),
        ("february", 2),
        ("march", 3),
        ("april", 4),
        ("may", 5),
        ("june", 6),
        ("july", 7),
        ("august", 8),
        ("september", 9),
        ("october", 10),
        ("november", 11),
        ("december", 12),
        ("jan", 1),
        ("feb", 2),
        ("mar", 3),
        ("apr", 4),
        ("jun", 6),
        ("jul", 7),
        ("aug", 8),
        ("sep", 9),
        ("oct", 10),
        ("nov", 11),
        ("dec", 12),
    ];
    month_names
        .iter()
        .find(|(name, _)| *name == s_lower)
        .map(|(_, num)| *num)
}

/// Build the grid for the month containing `date` with the context's
/// week start and header format.
pub fn grid_for(ctx: &CalContext, date: NaiveDate) -> Result<MonthGrid, CalError> {
    MonthGrid::new(date)
        .with_week_start(ctx.week_start)
        .with_format(&ctx.month_format)
}

/// Format month header centered over the grid.
pub fn format_month_header(grid: &MonthGrid, locale: Locale, color: bool) -> String {
    let centered = center_text(&grid.month_name(locale), MONTH_WIDTH);
    if color {
        format!("{}{}{}", COLOR_TEAL, centered, COLOR_RESET)
    } else {
        centered
    }
}

/// Center text within a specified width, accounting for Unicode character widths.
fn center_text(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width >= width {
        return text.to_string();
    }
    let total_padding = width - text_width;
    let left_padding = total_padding.div_ceil(2);
    let right_padding = total_padding - left_padding;
    format!(
        "{}{}{}",
        " ".repeat(left_padding),
        text,
        " ".repeat(right_padding)
    )
}

/// Get weekday order starting from `week_start`.
pub fn get_weekday_order(week_start: Weekday) -> [Weekday; DAYS_PER_WEEK] {
    let mut day = week_start;
    std::array::from_fn(|_| {
        let current = day;
        day = day.succ();
        current
    })
}

/// Get 2-character weekday abbreviation for current locale.
pub fn get_weekday_short_name(weekday: Weekday, locale: Locale) -> String {
    NaiveDate::from_weekday_of_month_opt(2000, 1, weekday, 1)
        .map(|date| date.format_localized("%a", locale).to_string())
        .unwrap_or_default()
        .chars()
        .take(2)
        .collect()
}

/// Format weekday header row with optional color.
pub fn format_weekday_headers(ctx: &CalContext, locale: Locale) -> String {
    let names: Vec<String> = get_weekday_order(ctx.week_start)
        .iter()
        .map(|&weekday| format!("{:>2}", get_weekday_short_name(weekday, locale)))
        .collect();
    let line = names.join(" ");

    if ctx.color {
        format!("{}{}{}", COLOR_SAND_YELLOW, line, COLOR_RESET)
    } else {
        line
    }
}

/// Format a single day cell.
///
/// Color priority: today > unselectable > weekend > regular. Without
/// color, unselectable days of the month are printed as `--`.
fn format_day(ctx: &CalContext, grid: &MonthGrid, date: NaiveDate) -> String {
    let day_str = format!("{:>2}", date.day());

    if grid.is_date_outside_month(&date) {
        return match (ctx.adjacent, ctx.color) {
            (false, _) => "  ".to_string(),
            (true, true) => format!("{}{}{}", COLOR_DIM, day_str, COLOR_RESET),
            (true, false) => day_str,
        };
    }

    let selectable = check(&date, &ctx.eligibility, grid).is_ok();

    if !ctx.color {
        return if selectable { day_str } else { "--".to_string() };
    }

    if date == ctx.today {
        format!("{}{}{}", COLOR_REVERSE, day_str, COLOR_RESET)
    } else if !selectable {
        format!("{}{}{}", COLOR_DIM, day_str, COLOR_RESET)
    } else if is_weekend(&date) {
        format!("{}{}{}", COLOR_RED, day_str, COLOR_RESET)
    } else {
        day_str
    }
}

/// Format month as grid of lines: header, weekday names, one line per week.
pub fn format_month_grid(ctx: &CalContext, grid: &MonthGrid) -> Result<Vec<String>, CalError> {
    let locale = get_system_locale();
    let mut lines = Vec::with_capacity(MAX_WEEKS as usize + 2);

    lines.push(format_month_header(grid, locale, ctx.color));
    lines.push(format_weekday_headers(ctx, locale));

    let dates = grid.dates()?;
    for week in dates.chunks(DAYS_PER_WEEK) {
        let cells: Vec<String> = week.iter().map(|&date| format_day(ctx, grid, date)).collect();
        lines.push(cells.join(" ").trim_end().to_string());
    }

    Ok(lines)
}

/// Print a single month.
pub fn print_month(ctx: &CalContext, grid: &MonthGrid) -> Result<(), CalError> {
    for line in format_month_grid(ctx, grid)? {
        println!("{}", line);
    }
    Ok(())
}

/// Print multiple months side by side.
pub fn print_months_side_by_side(ctx: &CalContext, grids: &[MonthGrid]) -> Result<(), CalError> {
    for line in format_months_side_by_side(ctx, grids)? {
        println!("{}", line);
    }
    Ok(())
}

/// Join the grids of several months into shared lines, padding shorter
/// months so every column keeps its width.
pub fn format_months_side_by_side(
    ctx: &CalContext,
    grids: &[MonthGrid],
) -> Result<Vec<String>, CalError> {
    let blocks = grids
        .iter()
        .map(|grid| format_month_grid(ctx, grid))
        .collect::<Result<Vec<_>, _>>()?;
    let max_height = blocks.iter().map(Vec::len).max().unwrap_or(0);

    let mut lines = Vec::with_capacity(max_height);
    for row in 0..max_height {
        let mut line = String::new();
        for (i, block) in blocks.iter().enumerate() {
            let text = block.get(row).map(String::as_str).unwrap_or("");
            line.push_str(text);
            if i < blocks.len() - 1 {
                let padding = MONTH_WIDTH.saturating_sub(measure_text_width(text));
                line.push_str(&" ".repeat(padding + ctx.gutter_width));
            }
        }
        lines.push(line.trim_end().to_string());
    }
    Ok(lines)
}

/// Print the previous, current and next month.
pub fn print_three_months(ctx: &CalContext, grid: &MonthGrid) -> Result<(), CalError> {
    let window = MonthWindow::new(grid.clone())?;
    let months = &window.months()[WINDOW_RADIUS - 1..=WINDOW_RADIUS + 1];
    print_months_side_by_side(ctx, months)
}

/// Print `count` months starting with `grid`.
pub fn print_months_count(ctx: &CalContext, grid: &MonthGrid, count: u32) -> Result<(), CalError> {
    let count = i32::try_from(count)
        .map_err(|_| CalError::InvalidArgument(format!("Too many months: {}", count)))?;
    let months = (0..count)
        .map(|i| grid.offset(i))
        .collect::<Result<Vec<_>, _>>()?;

    for chunk in months.chunks(months_per_row(ctx) as usize) {
        print_months_side_by_side(ctx, chunk)?;
    }
    Ok(())
}

pub fn months_per_row(ctx: &CalContext) -> u32 {
    match ctx.columns {
        ColumnsMode::Fixed(n) => n,
        ColumnsMode::Auto => {
            // ~20 chars per month + gutter, clamp to 1-3 for readability
            let month_width = MONTH_WIDTH + ctx.gutter_width;
            if let Some(term_width) = get_terminal_width() {
                (term_width / month_width as u32).clamp(1, 3)
            } else {
                3
            }
        }
    }
}

/// One-line verdict for `--check`, and whether the date is selectable.
pub fn format_check(ctx: &CalContext, date: NaiveDate) -> (String, bool) {
    let grid = MonthGrid::new(date);
    match check(&date, &ctx.eligibility, &grid) {
        Ok(()) => (format!("{}: selectable", date), true),
        Err(reason) => (format!("{}: disabled ({})", date, reason), false),
    }
}

/// Get terminal width using terminal_size crate.
fn get_terminal_width() -> Option<u32> {
    terminal_size::terminal_size().map(|(w, _)| w.0 as u32)
}
