// crates/tatra-core/src/format.rs

//! Localized display formatting and site URL helpers.
//!
//! Number formatting mirrors the browser's `pl-PL` / `en-US` conventions:
//! Polish uses a decimal comma and groups thousands with a non-breaking space
//! only from five integer digits on; English uses a decimal point and groups
//! with `,` from four digits on.
//!
//! Dates follow the short `pl` / `en-US` styles: `15 sty 2024`,
//! `Jan 15, 2024`.

use crate::model::Language;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};

const NBSP: char = '\u{a0}';

fn group_digits(int_part: &str, lang: Language) -> String {
    let (sep, min_len) = match lang {
        Language::Pl => (NBSP, 5),
        Language::En => (',', 4),
    };
    if int_part.len() < min_len {
        return int_part.to_string();
    }
    let mut out = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(ch);
    }
    out
}

/// Format with at most `max_fraction` fraction digits, dropping trailing
/// zeros.
pub fn format_number(value: f64, max_fraction: usize, lang: Language) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let fixed = format!("{:.*}", max_fraction, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, f.trim_end_matches('0')),
        None => (fixed.as_str(), ""),
    };
    let is_zero = int_part.chars().all(|c| c == '0') && frac_part.is_empty();
    let mut out = String::new();
    if value < 0.0 && !is_zero {
        out.push('-');
    }
    out.push_str(&group_digits(int_part, lang));
    if !frac_part.is_empty() {
        out.push(match lang {
            Language::Pl => ',',
            Language::En => '.',
        });
        out.push_str(frac_part);
    }
    out
}

/// `"12,5 km"` / `"12.5 km"`.
pub fn format_distance(km: f64, lang: Language) -> String {
    format!("{} km", format_number(km, 1, lang))
}

/// `"850m"`, `"1,200m"`, `"12 000m"`.
pub fn format_elevation(meters: f64, lang: Language) -> String {
    format!("{}m", format_number(meters, 0, lang))
}

/// `"3,5 godziny"` / `"3.5 hours"`.
pub fn format_duration(hours: f64, lang: Language) -> String {
    let n = format_number(hours, 1, lang);
    match lang {
        Language::Pl if hours == 1.0 => format!("{n} godzina"),
        Language::Pl if hours < 5.0 => format!("{n} godziny"),
        Language::Pl => format!("{n} godzin"),
        Language::En if hours == 1.0 => format!("{n} hour"),
        Language::En => format!("{n} hours"),
    }
}

/// `"49.2016°N, 20.0731°E"`.
pub fn format_gps(lat: f64, lng: f64) -> String {
    let lat_dir = if lat >= 0.0 { 'N' } else { 'S' };
    let lng_dir = if lng >= 0.0 { 'E' } else { 'W' };
    format!(
        "{:.4}°{lat_dir}, {:.4}°{lng_dir}",
        lat.abs(),
        lng.abs()
    )
}

const PL_MONTHS: [&str; 12] = [
    "sty", "lut", "mar", "kwi", "maj", "cze", "lip", "sie", "wrz", "paź", "lis", "gru",
];
const EN_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Parse a content-store date: RFC 3339, a zone-less `YYYY-MM-DDTHH:MM:SS`
/// (read as UTC) or a bare `YYYY-MM-DD`.
pub fn parse_date(date: &str) -> Option<DateTime<Utc>> {
    let date = date.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(date) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(date, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.and_utc());
    }
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// `"15 sty 2024"` / `"Jan 15, 2024"`. Unparseable input is returned as is.
pub fn format_date(date: &str, lang: Language) -> String {
    let Some(dt) = parse_date(date) else {
        return date.to_string();
    };
    let month = dt.month0() as usize;
    match lang {
        Language::Pl => format!("{} {} {}", dt.day(), PL_MONTHS[month], dt.year()),
        Language::En => format!("{} {}, {}", EN_MONTHS[month], dt.day(), dt.year()),
    }
}

#[derive(Clone, Copy)]
enum Unit {
    Minute,
    Hour,
    Day,
    Month,
    Year,
}

impl Unit {
    fn english(self, n: u64) -> &'static str {
        let (one, many) = match self {
            Unit::Minute => ("minute", "minutes"),
            Unit::Hour => ("hour", "hours"),
            Unit::Day => ("day", "days"),
            Unit::Month => ("month", "months"),
            Unit::Year => ("year", "years"),
        };
        if n == 1 {
            one
        } else {
            many
        }
    }

    /// Accusative forms, as used after `za` and before `temu`.
    fn polish(self, n: u64) -> &'static str {
        let (one, few, many) = match self {
            Unit::Minute => ("minutę", "minuty", "minut"),
            Unit::Hour => ("godzinę", "godziny", "godzin"),
            Unit::Day => ("dzień", "dni", "dni"),
            Unit::Month => ("miesiąc", "miesiące", "miesięcy"),
            Unit::Year => ("rok", "lata", "lat"),
        };
        if n == 1 {
            one
        } else if (2..=4).contains(&(n % 10)) && !(12..=14).contains(&(n % 100)) {
            few
        } else {
            many
        }
    }
}

const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;
const MONTH: u64 = 30 * DAY;
const YEAR: u64 = 365 * DAY;

/// Distance between `date` and `now` in words, e.g. `"3 dni temu"` or
/// `"in 2 hours"`. Unparseable input is returned as is.
pub fn format_relative_time_at(date: &str, lang: Language, now: DateTime<Utc>) -> String {
    let Some(then) = parse_date(date) else {
        return date.to_string();
    };
    let delta = now.signed_duration_since(then).num_seconds();
    let past = delta >= 0;
    let secs = delta.unsigned_abs();

    let amount = if secs < 45 {
        match lang {
            Language::Pl => "mniej niż minutę".to_string(),
            Language::En => "less than a minute".to_string(),
        }
    } else {
        let (n, unit) = match secs {
            s if s < 45 * MINUTE => (((s + MINUTE / 2) / MINUTE).max(1), Unit::Minute),
            s if s < DAY => (((s + HOUR / 2) / HOUR).max(1), Unit::Hour),
            s if s < MONTH => (((s + DAY / 2) / DAY).max(1), Unit::Day),
            s if s < YEAR => ((s / MONTH).max(1), Unit::Month),
            s => (s / YEAR, Unit::Year),
        };
        match lang {
            Language::Pl => format!("{n} {}", unit.polish(n)),
            Language::En => format!("{n} {}", unit.english(n)),
        }
    };

    match (lang, past) {
        (Language::Pl, true) => format!("{amount} temu"),
        (Language::Pl, false) => format!("za {amount}"),
        (Language::En, true) => format!("{amount} ago"),
        (Language::En, false) => format!("in {amount}"),
    }
}

/// [`format_relative_time_at`] against the current time.
pub fn format_relative_time(date: &str, lang: Language) -> String {
    format_relative_time_at(date, lang, Utc::now())
}

fn prefixed(lang: Language, path: &str) -> String {
    match lang {
        Language::Pl => path.to_string(),
        Language::En => format!("/en{path}"),
    }
}

/// Trail detail page, `/trail/{slug}` or `/en/trail/{slug}`.
pub fn trail_url(slug: &str, lang: Language) -> String {
    prefixed(lang, &format!("/trail/{slug}"))
}

pub fn post_url(slug: &str, lang: Language) -> String {
    prefixed(lang, &format!("/post/{slug}"))
}

pub fn category_url(slug: &str, lang: Language) -> String {
    prefixed(lang, &format!("/category/{slug}"))
}

/// Rewrite a site path for `target`: strips an existing `/en` or `/pl`
/// prefix and adds `/en` for English. Polish is unprefixed.
///
/// ```rust
/// use tatra_core::format::localize_path;
/// use tatra_core::Language;
///
/// assert_eq!(localize_path("/trails", Language::En), "/en/trails");
/// assert_eq!(localize_path("/en/map", Language::Pl), "/map");
/// assert_eq!(localize_path("/en", Language::Pl), "/");
/// ```
pub fn localize_path(path: &str, target: Language) -> String {
    let bare = ["/en", "/pl"]
        .iter()
        .find_map(|prefix| {
            path.strip_prefix(prefix)
                .filter(|rest| rest.is_empty() || rest.starts_with('/'))
        })
        .unwrap_or(path);
    let bare = if bare.is_empty() { "/" } else { bare };
    match target {
        Language::Pl => bare.to_string(),
        Language::En if bare == "/" => "/en".to_string(),
        Language::En => format!("/en{bare}"),
    }
}
