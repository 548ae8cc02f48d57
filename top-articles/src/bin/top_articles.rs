use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use std::path::PathBuf;
use wiki_top_articles::config::{
    DEFAULT_ACCESS, DEFAULT_API_BASE, DEFAULT_NUM_DAYS, DEFAULT_OUTPUT_DIR, DEFAULT_PER_DAY,
    DEFAULT_PROJECT, DEFAULT_TARGET, DEFAULT_USER_AGENT,
};
use wiki_top_articles::{aggregate, save_top_articles, AccumulationPolicy, Config, PageviewsClient};

/// Collect the most viewed article titles of recent days into top_articles.json
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Wikimedia project, e.g. he.wikipedia or en.wikipedia
    #[arg(long, default_value = DEFAULT_PROJECT)]
    project: String,

    /// Access method: all-access, desktop, mobile-app or mobile-web
    #[arg(long, default_value = DEFAULT_ACCESS)]
    access: String,

    /// Number of days to look back, starting with yesterday
    #[arg(long, default_value_t = DEFAULT_NUM_DAYS)]
    days: u32,

    /// Stop once this many distinct titles are collected
    #[arg(long, default_value_t = DEFAULT_TARGET)]
    target: usize,

    /// Take the top N titles of every day instead (10 when N is omitted),
    /// with no cap; output is sorted
    #[arg(long, value_name = "N", num_args = 0..=1, conflicts_with = "target")]
    per_day: Option<Option<usize>>,

    /// Directory to write top_articles.json into
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    #[arg(long, default_value = DEFAULT_API_BASE)]
    api_base: String,

    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    user_agent: String,
}

impl Cli {
    fn into_config(self) -> Config {
        let policy = match self.per_day {
            Some(k) => AccumulationPolicy::PerDayTopK {
                k: k.unwrap_or(DEFAULT_PER_DAY),
            },
            None => AccumulationPolicy::CappedGlobal {
                target: self.target,
            },
        };

        Config {
            project: self.project,
            access: self.access,
            num_days: self.days,
            policy,
            output_dir: self.output_dir,
            api_base: self.api_base,
            user_agent: self.user_agent,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Cli::parse().into_config();
    let client = PageviewsClient::new(&config);

    let report = aggregate(&client, &config, Utc::now());

    if let Some(path) = save_top_articles(&report.titles, &config.output_dir)? {
        println!(
            "Successfully saved {} pages to {}",
            report.titles.len(),
            path.display()
        );
    }

    for line in report.summary() {
        println!("{}", line);
    }

    Ok(())
}
