use std::collections::{BTreeSet, HashSet};

use chrono::{DateTime, NaiveDate, Utc};
use log::{error, info};

use crate::config::{AccumulationPolicy, Config};
use crate::dates::{format_date, past_dates};
use crate::pageviews::{ArticleEntry, TopPagesSource};

#[derive(Debug, Clone, PartialEq)]
pub struct SkippedDate {
    pub date: NaiveDate,
    pub reason: String,
}

/// Outcome of one run over the lookback window
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunReport {
    /// Final list, ready to be written out
    pub titles: Vec<String>,
    /// Dates whose ranking was fetched and merged
    pub fetched: Vec<NaiveDate>,
    pub skipped: Vec<SkippedDate>,
    /// Set when the capped policy filled up before the window was exhausted
    /// or exactly on its last day
    pub reached_target: bool,
}

impl RunReport {
    /// Lines printed after the output file is written
    pub fn summary(&self) -> Vec<String> {
        let mut lines = Vec::new();

        if self.reached_target {
            lines.push(format!(
                "Stopped once the target of {} titles was reached ({} days fetched)",
                self.titles.len(),
                self.fetched.len()
            ));
        }

        if !self.skipped.is_empty() {
            lines.push(format!(
                "Skipped {} of {} days:",
                self.skipped.len(),
                self.skipped.len() + self.fetched.len()
            ));
            for skipped in &self.skipped {
                lines.push(format!("  {}: {}", format_date(skipped.date), skipped.reason));
            }
        }

        lines
    }
}

/// Walk the lookback window ending yesterday relative to `now`, one request
/// at a time, and merge each day's ranking according to `config.policy`.
///
/// A day that fails to fetch is logged, recorded in `RunReport::skipped`
/// and otherwise ignored.
pub fn aggregate<S: TopPagesSource + ?Sized>(
    source: &S,
    config: &Config,
    now: DateTime<Utc>,
) -> RunReport {
    let dates = past_dates(now, config.num_days);
    let mut report = RunReport::default();

    match config.policy {
        AccumulationPolicy::CappedGlobal { target } => {
            collect_capped(source, &dates, target, &mut report)
        }
        AccumulationPolicy::PerDayTopK { k } => collect_per_day(source, &dates, k, &mut report),
    }

    info!(
        "Collected {} titles from {} days ({} skipped)",
        report.titles.len(),
        report.fetched.len(),
        report.skipped.len()
    );
    report
}

fn collect_capped<S: TopPagesSource + ?Sized>(
    source: &S,
    dates: &[NaiveDate],
    target: usize,
    report: &mut RunReport,
) {
    let mut seen = HashSet::new();

    for &date in dates {
        if report.titles.len() >= target {
            break;
        }
        let Some(articles) = fetch_day(source, date, report) else {
            continue;
        };

        for article in articles {
            if report.titles.len() >= target {
                break;
            }
            if seen.insert(article.title.clone()) {
                report.titles.push(article.title);
            }
        }
    }

    report.reached_target = report.titles.len() >= target;
}

fn collect_per_day<S: TopPagesSource + ?Sized>(
    source: &S,
    dates: &[NaiveDate],
    k: usize,
    report: &mut RunReport,
) {
    // BTreeSet keeps the output sorted so reruns produce identical files
    let mut titles = BTreeSet::new();

    for &date in dates {
        let Some(articles) = fetch_day(source, date, report) else {
            continue;
        };
        titles.extend(articles.into_iter().take(k).map(|article| article.title));
    }

    report.titles = titles.into_iter().collect();
}

fn fetch_day<S: TopPagesSource + ?Sized>(
    source: &S,
    date: NaiveDate,
    report: &mut RunReport,
) -> Option<Vec<ArticleEntry>> {
    let date_str = format_date(date);
    info!("Fetching top pages for {}...", date_str);

    match source.top_pages(date) {
        Ok(articles) => {
            report.fetched.push(date);
            Some(articles)
        }
        Err(err) => {
            error!("Error fetching data for {}: {}", date_str, err);
            report.skipped.push(SkippedDate {
                date,
                reason: err.to_string(),
            });
            None
        }
    }
}
