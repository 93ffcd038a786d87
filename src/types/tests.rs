use super::{Clock, FixedClock};

use anyhow::{Result, anyhow};
use chrono::NaiveDate;

#[test]
fn test_fixed_clock_reports_pinned_day_and_date() -> Result<()> {
    let date = NaiveDate::from_ymd_opt(2026, 3, 25).ok_or_else(|| anyhow!("invalid date"))?;
    let instant = date
        .and_hms_opt(9, 30, 0)
        .ok_or_else(|| anyhow!("invalid time"))?
        .and_utc();

    let clock = FixedClock(instant);

    assert_eq!(clock.day_of_month(), 25);
    assert_eq!(clock.today(), date);
    assert_eq!(clock.now(), instant);

    Ok(())
}
