//! Calendar grid CLI application.
//!
//! # Usage
//! ```ignore
//! calkit                        // Current month
//! calkit 6 2016                 // June 2016
//! calkit -3                     // Three months
//! calkit -W --min 2016-06-10    // Disable weekends and days before June 10
//! calkit --check 2016-06-04 -W  // Is June 4 selectable?
//! ```

use calkit::args::{Args, get_display_date};
use calkit::error::CalError;
use calkit::formatter::{
    format_check, grid_for, print_month, print_months_count, print_three_months,
};
use calkit::types::CalContext;

/// Exit status of `--check` when the date cannot be selected.
const EXIT_NOT_SELECTABLE: i32 = 2;

fn main() {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("calkit: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(args: &Args) -> Result<i32, CalError> {
    let ctx = CalContext::new(args)?;

    if let Some(date) = args.check {
        let (line, selectable) = format_check(&ctx, date);
        println!("{}", line);
        return Ok(if selectable { 0 } else { EXIT_NOT_SELECTABLE });
    }

    let grid = grid_for(&ctx, get_display_date(args)?)?;
    log::debug!(
        "rendering {}-{:02}, {} weeks",
        grid.year(),
        grid.month(),
        grid.weeks_in_month()?
    );

    // Display mode priority: three_months > months_count > single
    if args.three_months {
        print_three_months(&ctx, &grid)?;
    } else if let Some(count) = args.months_count {
        print_months_count(&ctx, &grid, count)?;
    } else {
        print_month(&ctx, &grid)?;
    }

    Ok(0)
}
