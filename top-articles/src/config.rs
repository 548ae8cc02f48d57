use std::path::PathBuf;

use crate::output::OUTPUT_FILE_NAME;

pub const DEFAULT_PROJECT: &str = "he.wikipedia";
pub const DEFAULT_ACCESS: &str = "all-access";
pub const DEFAULT_NUM_DAYS: u32 = 14;
pub const DEFAULT_TARGET: usize = 5000;
pub const DEFAULT_PER_DAY: usize = 10;
pub const DEFAULT_OUTPUT_DIR: &str = "WikiGameExpo/assets";
pub const DEFAULT_API_BASE: &str = "https://wikimedia.org";
pub const DEFAULT_USER_AGENT: &str = "WikiGameBot/1.0 (your_email@example.com)";

/// How titles from each day are merged into the final list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccumulationPolicy {
    /// Walk every day's ranking in order, keeping distinct titles until
    /// `target` is reached. No further days are fetched after that.
    /// Output keeps insertion order.
    CappedGlobal { target: usize },
    /// Keep the first `k` titles of every day with no overall cap.
    /// Output is sorted so repeated runs can be diffed.
    PerDayTopK { k: usize },
}

impl Default for AccumulationPolicy {
    fn default() -> Self {
        AccumulationPolicy::CappedGlobal {
            target: DEFAULT_TARGET,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Site edition ranked by the pageviews API, e.g. `he.wikipedia`
    pub project: String,
    /// Access dimension, e.g. `all-access`, `desktop`, `mobile-web`
    pub access: String,
    /// Number of days to look back, starting with yesterday
    pub num_days: u32,
    pub policy: AccumulationPolicy,
    /// Directory that receives `top_articles.json`
    pub output_dir: PathBuf,
    /// Scheme and host of the pageviews REST API
    pub api_base: String,
    /// Sent with every request; Wikimedia rejects anonymous clients
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            project: DEFAULT_PROJECT.to_string(),
            access: DEFAULT_ACCESS.to_string(),
            num_days: DEFAULT_NUM_DAYS,
            policy: AccumulationPolicy::default(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            api_base: DEFAULT_API_BASE.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Config {
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(OUTPUT_FILE_NAME)
    }
}
