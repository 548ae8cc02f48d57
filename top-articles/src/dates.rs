use chrono::{DateTime, Days, NaiveDate, Utc};

/// Dates for the past `num_days` days, excluding today.
///
/// The first element is yesterday relative to `now`, and every following
/// element is one day further back.
pub fn past_dates(now: DateTime<Utc>, num_days: u32) -> Vec<NaiveDate> {
    let today = now.date_naive();
    (1..=num_days)
        .filter_map(|days_back| today.checked_sub_days(Days::new(u64::from(days_back))))
        .collect()
}

/// Human readable form used in log lines, e.g. `2024/03/09`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y/%m/%d").to_string()
}
