use chrono::{DateTime, Local, NaiveDate};

pub fn now() -> DateTime<Local> {
    Local::now()
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Long form used on the dashboard ("May 1").
pub fn month_day(d: NaiveDate) -> String {
    d.format("%B %-d").to_string()
}
