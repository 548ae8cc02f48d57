use chrono::{DateTime, TimeZone, Utc};
use serde_json::json;
use std::fs;
use std::path::Path;

/// Load a recorded API response body by name
pub fn load_json_fixture(fixture_name: &str) -> String {
    let path = Path::new("src/tests/fixtures").join(format!("{}.json", fixture_name));
    fs::read_to_string(path)
        .unwrap_or_else(|_| panic!("Failed to load test fixture: {}", fixture_name))
}

/// Response body ranking `titles` in the given order
pub fn top_pages_body(titles: &[&str]) -> String {
    let articles: Vec<_> = titles
        .iter()
        .enumerate()
        .map(|(idx, title)| {
            json!({
                "article": title,
                "views": 100_000 - idx * 10,
                "rank": idx + 1,
            })
        })
        .collect();

    json!({
        "items": [{
            "project": "he.wikipedia",
            "access": "all-access",
            "articles": articles,
        }]
    })
    .to_string()
}

/// Fixed reference instant; yesterday is 2024-03-14
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).unwrap()
}
