//! Display formatting for backend values.
//!
//! The backend sends naive ISO timestamps such as `2025-06-07T20:30:15.462598`;
//! they are rendered with Korean date conventions (`2025. 6. 7.`, `오후 8:30:15`).
//! Strings that fail to parse are displayed unchanged.

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, Timelike};
use pulldown_cmark::{html, Event, Options, Parser, Tag};
use url::Url;

const NAIVE_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Parses a backend timestamp. Offset-aware values are shifted to local time.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.with_timezone(&Local).naive_local())
        })
}

fn meridiem(hour: u32) -> (&'static str, u32) {
    let label = if hour < 12 { "오전" } else { "오후" };
    let hour12 = match hour % 12 {
        0 => 12,
        h => h,
    };
    (label, hour12)
}

fn date_part(dt: &NaiveDateTime) -> String {
    format!("{}. {}. {}.", dt.year(), dt.month(), dt.day())
}

fn time_part(dt: &NaiveDateTime) -> String {
    let (label, hour) = meridiem(dt.hour());
    format!("{} {}:{:02}:{:02}", label, hour, dt.minute(), dt.second())
}

/// `2025. 6. 7.`
pub fn format_date(value: &str) -> String {
    parse_timestamp(value)
        .map(|dt| date_part(&dt))
        .unwrap_or_else(|| value.to_string())
}

/// `2025. 6. 7. 오후 8:30:15`
pub fn format_date_time(value: &str) -> String {
    parse_timestamp(value)
        .map(|dt| format!("{} {}", date_part(&dt), time_part(&dt)))
        .unwrap_or_else(|| value.to_string())
}

/// `2025년 6월 7일 오후 08:30`
pub fn format_long_date_time(value: &str) -> String {
    parse_timestamp(value)
        .map(|dt| {
            let (label, hour) = meridiem(dt.hour());
            format!(
                "{}년 {}월 {}일 {} {:02}:{:02}",
                dt.year(),
                dt.month(),
                dt.day(),
                label,
                hour,
                dt.minute()
            )
        })
        .unwrap_or_else(|| value.to_string())
}

/// `20250607`, used in export file names.
pub fn compact_date(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// Thousands separated integer, e.g. `1,234,567`.
pub fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

pub fn format_seconds(seconds: f64) -> String {
    format!("{:.2}초", seconds)
}

/// Average score with one decimal, e.g. `87.5점`.
pub fn format_average_score(score: f64) -> String {
    format!("{:.1}점", score)
}

/// Score without a trailing `.0` for whole numbers, e.g. `85점`.
pub fn format_points(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{:.0}점", score)
    } else {
        format!("{}점", score)
    }
}

/// Absolute URL with a scheme and a host.
pub fn is_valid_url(value: &str) -> bool {
    Url::parse(value)
        .map(|url| url.has_host())
        .unwrap_or(false)
}

const LINK_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// Relative destinations and http(s)/mailto URLs.
fn is_safe_destination(destination: &str) -> bool {
    // Browsers ignore whitespace and control characters inside a scheme
    let cleaned: String = destination
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect();

    match cleaned.find([':', '/', '?', '#']) {
        Some(index) if cleaned[index..].starts_with(':') => {
            let scheme = cleaned[..index].to_ascii_lowercase();
            LINK_SCHEMES.contains(&scheme.as_str())
        }
        _ => true,
    }
}

/// Renders backend markdown (evaluation feedback, code summaries) to HTML.
///
/// Raw HTML in the source is emitted as escaped text. Links and images with
/// any other scheme than http, https or mailto are dropped, keeping their text.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    // One entry per open link or image, true when its tags are dropped
    let mut dropped: Vec<bool> = Vec::new();

    let parser = Parser::new_ext(markdown, options).filter_map(move |event| match event {
        Event::Html(raw) => Some(Event::Text(raw)),
        Event::Start(Tag::Link(_, ref destination, _))
        | Event::Start(Tag::Image(_, ref destination, _)) => {
            let unsafe_destination = !is_safe_destination(destination);
            dropped.push(unsafe_destination);
            (!unsafe_destination).then_some(event)
        }
        Event::End(Tag::Link(..)) | Event::End(Tag::Image(..)) => {
            let was_dropped = dropped.pop().unwrap_or(false);
            (!was_dropped).then_some(event)
        }
        event => Some(event),
    });

    let mut rendered = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut rendered, parser);
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;

    const EVENING: &str = "2025-06-07T20:30:15.462598";
    const MORNING: &str = "2025-05-30T00:05:44";

    #[test]
    fn formats_korean_dates_and_times() {
        assert_eq!(format_date(EVENING), "2025. 6. 7.");
        assert_eq!(format_date_time(EVENING), "2025. 6. 7. 오후 8:30:15");
        assert_eq!(format_long_date_time(EVENING), "2025년 6월 7일 오후 08:30");
    }

    #[test]
    fn midnight_is_twelve_am() {
        assert_eq!(format_date_time(MORNING), "2025. 5. 30. 오전 12:05:44");
        assert_eq!(format_long_date_time(MORNING), "2025년 5월 30일 오전 12:05");
    }

    #[test]
    fn unparseable_timestamps_pass_through() {
        assert_eq!(format_date("yesterday"), "yesterday");
        assert_eq!(format_long_date_time(""), "");
    }

    #[test]
    fn accepts_space_separated_timestamps() {
        assert_eq!(format_date("2024-12-31 23:59:59"), "2024. 12. 31.");
    }

    #[test]
    fn groups_digits() {
        assert_eq!(group_digits(0), "0");
        assert_eq!(group_digits(999), "999");
        assert_eq!(group_digits(1_000), "1,000");
        assert_eq!(group_digits(1_234_567), "1,234,567");
    }

    #[test]
    fn formats_scores_and_durations() {
        assert_eq!(format_points(85.0), "85점");
        assert_eq!(format_points(85.5), "85.5점");
        assert_eq!(format_average_score(87.26), "87.3점");
        assert_eq!(format_seconds(1.23456), "1.23초");
    }

    #[test]
    fn compact_date_is_zero_padded() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 7).unwrap();
        assert_eq!(compact_date(date), "20250607");
    }

    #[test]
    fn validates_repository_urls() {
        assert!(is_valid_url("https://github.com/nowjiin/on-device-ai"));
        assert!(is_valid_url("http://localhost:3000/repo"));
        assert!(!is_valid_url("github.com/nowjiin"));
        assert!(!is_valid_url(""));
        assert!(!is_valid_url("mailto:someone@example.com"));
    }

    #[test]
    fn renders_markdown_feedback() {
        let rendered = markdown_to_html("**Strong** test coverage\n\n- add CI");
        assert!(rendered.contains("<strong>Strong</strong>"));
        assert!(rendered.contains("<li>add CI</li>"));
    }

    #[test]
    fn escapes_raw_html() {
        let rendered = markdown_to_html("<script>alert(1)</script>");
        assert!(!rendered.contains("<script>"));
        assert!(rendered.contains("&lt;script&gt;"));
    }

    #[test]
    fn drops_script_links_but_keeps_their_text() {
        assert_eq!(
            markdown_to_html("[click](javascript:alert(document.cookie))"),
            "<p>click</p>\n"
        );
        assert_eq!(markdown_to_html("![logo](JavaScript:alert(1))"), "<p>logo</p>\n");

        let rendered = markdown_to_html("[x](vbscript:msgbox) and [y](data:text/html,hi)");
        assert_eq!(rendered, "<p>x and y</p>\n");
    }

    #[test]
    fn keeps_web_and_relative_links() {
        let rendered = markdown_to_html("[repo](https://github.com/nowjiin/on-device-ai)");
        assert!(rendered.contains(r#"<a href="https://github.com/nowjiin/on-device-ai">repo</a>"#));

        let rendered = markdown_to_html("[mine](/mypage) [mail](mailto:team@snapcode.dev)");
        assert!(rendered.contains(r#"href="/mypage""#));
        assert!(rendered.contains(r#"href="mailto:team@snapcode.dev""#));
    }
}
