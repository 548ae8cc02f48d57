// Building blocks of the top articles list generator
pub mod aggregate;
pub mod config;
pub mod dates;
pub mod output;
pub mod pageviews;

#[cfg(test)]
pub mod tests;

// Re-export key types and functions for easier access
pub use crate::aggregate::{aggregate, RunReport, SkippedDate};
pub use crate::config::{AccumulationPolicy, Config};
pub use crate::dates::{format_date, past_dates};
pub use crate::output::{
    check_top_articles, load_top_articles, save_top_articles, to_json, OUTPUT_FILE_NAME,
};
pub use crate::pageviews::{
    check_status, is_content_title, parse_top_pages, ArticleEntry, FetchError, PageviewsClient,
    TopPagesSource,
};
