use crate::models::earthquake::{EarthquakeLookup, TsunamiAlert};
use chrono::{Local, TimeZone};

const EVENT_TIME_FORMAT: &str = "%a, %-d %b %Y at %H:%M:%S %Z";

pub const ALERT_NO: &str = "no tsunami alert";
pub const ALERT_YES: &str = "tsunami alert issued";
pub const ALERT_NOT_AVAILABLE: &str = "tsunami alert not available";

/// Formats epoch milliseconds in the local timezone, e.g. `Mon, 24 Feb 2014 at 23:22:21 +00:00`.
///
/// The zone is rendered as a numeric UTC offset, not an abbreviation such as
/// `PST`: `chrono::Local` does not know zone names.
pub fn format_event_time(millis: i64) -> String {
    match Local.timestamp_millis_opt(millis).single() {
        Some(t) => t.format(EVENT_TIME_FORMAT).to_string(),
        None => String::new(),
    }
}

pub fn tsunami_alert_text(code: i32) -> &'static str {
    match TsunamiAlert::from_code(code) {
        TsunamiAlert::None => ALERT_NO,
        TsunamiAlert::Issued => ALERT_YES,
        TsunamiAlert::Unknown => ALERT_NOT_AVAILABLE,
    }
}

/// Display strings for the single earthquake screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EarthquakeView {
    pub title: String,
    pub date: String,
    pub tsunami_alert: String,
}

impl EarthquakeView {
    pub fn from_lookup(lookup: &EarthquakeLookup) -> Self {
        match lookup.record() {
            Some(record) => Self {
                title: record.title.clone(),
                date: format_event_time(record.time_millis),
                tsunami_alert: tsunami_alert_text(record.tsunami_alert).to_string(),
            },
            None => Self {
                title: String::new(),
                date: String::new(),
                tsunami_alert: ALERT_NOT_AVAILABLE.to_string(),
            },
        }
    }
}

pub fn render(view: &EarthquakeView) -> String {
    format!(
        "Title:   {}\nDate:    {}\nTsunami: {}",
        view.title, view.date, view.tsunami_alert
    )
}
