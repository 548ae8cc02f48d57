use chrono::NaiveDate;
use reqwest::StatusCode;
use std::cell::RefCell;
use std::collections::HashMap;

use crate::pageviews::{check_status, parse_top_pages, ArticleEntry, FetchError, TopPagesSource};

pub mod fixtures;

/// In-memory stand-in for the pageviews API. Dates without a registered
/// response answer 404, like the real API does for days it has no data for.
#[derive(Default)]
pub struct FakeSource {
    responses: HashMap<NaiveDate, (StatusCode, String)>,
    queried: RefCell<Vec<NaiveDate>>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(mut self, date: NaiveDate, status: u16, body: &str) -> Self {
        let status = StatusCode::from_u16(status).unwrap();
        self.responses.insert(date, (status, body.to_string()));
        self
    }

    pub fn with_titles(self, date: NaiveDate, titles: &[&str]) -> Self {
        let body = fixtures::top_pages_body(titles);
        self.with_response(date, 200, &body)
    }

    /// Dates requested so far, in request order
    pub fn queried(&self) -> Vec<NaiveDate> {
        self.queried.borrow().clone()
    }
}

impl TopPagesSource for FakeSource {
    fn top_pages(&self, date: NaiveDate) -> Result<Vec<ArticleEntry>, FetchError> {
        self.queried.borrow_mut().push(date);
        let (status, body) = self
            .responses
            .get(&date)
            .cloned()
            .unwrap_or((StatusCode::NOT_FOUND, fixtures::load_json_fixture("not_found")));

        check_status(status)?;
        parse_top_pages(&body)
    }
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
