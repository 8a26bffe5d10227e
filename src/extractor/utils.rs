use std::{borrow::Borrow, cmp::Ordering, sync::LazyLock};

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use scraper::{ElementRef, Selector};

use super::data::ExtractedPost;

const SUBTITLE_SELECTOR_STR: &str = r#"section[data-field="subtitle"]"#;
const BODY_SELECTOR_STR: &str = r#"section[data-field="body"]"#;
const TITLE_SELECTOR_STR: &str = "h1.p-name";
const PUBLISHED_SELECTOR_STR: &str = "time.dt-published";

// rfc3339 needs seconds; these cover `12:00+09:00` and `12:00:00+0900` too
const OFFSET_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M%:z",
    "%Y-%m-%d %H:%M%z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%z",
];

// naive forms are read as UTC
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

fn selector(s: &str) -> Selector {
    Selector::parse(s).unwrap_or_else(|e| panic!("invalid selector {s:?}: {e:?}"))
}

pub(super) static SUBTITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| selector(SUBTITLE_SELECTOR_STR));
pub(super) static BODY_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| selector(BODY_SELECTOR_STR));
pub(super) static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| selector(TITLE_SELECTOR_STR));
pub(super) static PUBLISHED_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| selector(PUBLISHED_SELECTOR_STR));

pub(super) fn trimmed_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

// joined with a space so that `<p>a</p><p>b</p>` reads `a b`
pub(super) fn flattened_text(element: ElementRef) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parses the `datetime` attribute of a `<time>` element.
///
/// Timestamps without an offset, and bare dates, are taken to be UTC.
pub(super) fn parse_published(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    let with_offset = match value.strip_suffix(['Z', 'z']) {
        Some(rest) => format!("{rest}+00:00"),
        None => value.to_string(),
    };
    for format in OFFSET_DATETIME_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(&with_offset, format) {
            return Some(dt.with_timezone(&Utc));
        }
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt.and_utc());
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

// newest first, undated last
pub(super) fn sort_post<T: Borrow<ExtractedPost>>(a: &T, b: &T) -> Ordering {
    b.borrow().sort_key.cmp(&a.borrow().sort_key)
}
