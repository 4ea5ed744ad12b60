use chrono::{NaiveDate, Utc};
use clap::Subcommand;
use dawam_core::shift::{group_by_month, ShiftPattern};
use serde_json::json;

use super::load_settings;

/// The editing surface bounds block lengths; the calculator itself
/// tolerates any positive values.
const MAX_BLOCK_DAYS: u32 = 14;

#[derive(Subcommand)]
pub enum ShiftAction {
    /// Show the stored pattern
    Show,
    /// Save a pattern
    Set {
        /// Cycle anchor date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        start_date: Option<String>,
        /// Consecutive work days per cycle (1-14)
        #[arg(long, default_value_t = 4)]
        work_days: u32,
        /// Consecutive leave days per cycle (1-14)
        #[arg(long, default_value_t = 2)]
        leave_days: u32,
        /// Days to shift the anchor (may be negative)
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        offset: i64,
        /// Begin the cycle with the leave block instead of the work block
        #[arg(long)]
        start_with_leave: bool,
    },
    /// Render the pattern preview grouped by month
    Preview {
        /// Number of days to render
        #[arg(long, default_value_t = 60)]
        days: usize,
        /// First previewed date (YYYY-MM-DD), defaults to the pattern anchor
        #[arg(long)]
        from: Option<String>,
    },
}

pub fn run(action: ShiftAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ShiftAction::Show => {
            let settings = load_settings()?;
            match &settings.shift_pattern {
                Some(pattern) => println!("{}", serde_json::to_string_pretty(pattern)?),
                None => println!("no shift pattern saved"),
            }
        }
        ShiftAction::Set { start_date, work_days, leave_days, offset, start_with_leave } => {
            if !(1..=MAX_BLOCK_DAYS).contains(&work_days) {
                return Err(format!("work-days must be in 1..={MAX_BLOCK_DAYS}").into());
            }
            if !(1..=MAX_BLOCK_DAYS).contains(&leave_days) {
                return Err(format!("leave-days must be in 1..={MAX_BLOCK_DAYS}").into());
            }
            let start_date = match start_date {
                Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
                    .map_err(|e| format!("invalid start date '{raw}': {e}"))?,
                None => Utc::now().date_naive(),
            };
            let pattern = ShiftPattern {
                start_date,
                work_days,
                leave_days,
                offset,
                start_with_work: !start_with_leave,
            };

            let mut settings = load_settings()?;
            settings.shift_pattern = Some(pattern);
            settings.save()?;
            println!("{}", serde_json::to_string_pretty(&pattern)?);
        }
        ShiftAction::Preview { days, from } => {
            let settings = load_settings()?;
            let pattern = settings
                .shift_pattern
                .ok_or("no shift pattern saved; run `shift set` first")?;
            let from = match from {
                Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
                    .map_err(|e| format!("invalid date '{raw}': {e}"))?,
                None => pattern.anchor(),
            };

            let groups = group_by_month(pattern.preview(from, days));
            let output = json!({
                "pattern": pattern,
                "cycle_length": pattern.cycle_length(),
                "from": from,
                "days": days,
                "months": groups,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}
