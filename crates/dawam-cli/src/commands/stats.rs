use chrono::Utc;
use clap::{Args, ValueEnum};
use dawam_core::calendar::Lang;
use dawam_core::{aggregate, DayClassifier, Period};
use serde_json::json;

use super::{holiday_calendar, load_settings};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PeriodArg {
    Month,
    Quarter,
    Year,
}

impl From<PeriodArg> for Period {
    fn from(arg: PeriodArg) -> Self {
        match arg {
            PeriodArg::Month => Period::Month,
            PeriodArg::Quarter => Period::Quarter,
            PeriodArg::Year => Period::Year,
        }
    }
}

#[derive(Args)]
pub struct StatsArgs {
    /// Aggregation window relative to today
    #[arg(long, value_enum, default_value = "month")]
    pub period: PeriodArg,
}

pub fn run(args: StatsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let settings = load_settings()?;
    let holidays = holiday_calendar(&settings);
    let classifier = DayClassifier::new(&settings.work, &holidays, settings.shift_pattern.as_ref());

    let period = Period::from(args.period);
    let today = Utc::now().date_naive();
    let (start, end) = period.bounds(today);
    let stats = aggregate(start, end, &classifier);

    let output = json!({
        "period": period,
        "label": {
            "en": period.label(Lang::En, today),
            "ar": period.label(Lang::Ar, today),
        },
        "start": start,
        "end": end,
        "total_days": stats.total(),
        "stats": stats,
        "breakdown": stats.breakdown(settings.language),
        "work_ratio": stats.work_ratio(),
        "break_ratio": stats.break_ratio(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
