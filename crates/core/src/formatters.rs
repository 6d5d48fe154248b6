//! Presentation helpers: currency, numbers, percentages, dates and text.
//!
//! Every helper is total: missing or non-numeric input renders as `-`,
//! unparseable dates render as `Invalid date`.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::{Decimal, RoundingStrategy};

/// Placeholder for missing values.
pub const MISSING: &str = "-";
/// Rendered for a date string that cannot be parsed.
pub const INVALID_DATE: &str = "Invalid date";

/// Default truncation length for free text.
pub const DEFAULT_TRUNCATE_LEN: usize = 50;

/// Relative times further back than this fall back to an absolute date.
const RELATIVE_CUTOFF_DAYS: i64 = 30;

/// Date rendering styles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateStyle {
    /// `1/15/25`
    Short,
    /// `Jan 15, 2025`
    #[default]
    Medium,
    /// `Wednesday, January 15, 2025`
    Long,
    /// `03:30 PM`
    Time,
    /// `Jan 15, 2025, 03:30 PM`
    DateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Grouping {
    /// 1,234,567
    Western,
    /// 12,34,567
    Indian,
}

// ── Numbers ─────────────────────────────────────────────────────────

/// Format a number with thousands separators and a fixed number of decimals.
pub fn format_number(value: Option<f64>, decimals: u32) -> String {
    match value {
        Some(v) if !v.is_nan() => grouped(v, decimals, Grouping::Western),
        _ => MISSING.to_string(),
    }
}

/// Format a value as a percentage, e.g. `12.345` → `12.35%`.
pub fn format_percentage(value: Option<f64>, decimals: u32) -> String {
    match value {
        Some(v) if !v.is_nan() => format!("{}%", grouped(v, decimals, Grouping::Western)),
        _ => MISSING.to_string(),
    }
}

/// Format an amount in the given ISO currency with exactly two decimals.
///
/// INR uses Indian digit grouping (`₹12,34,567.00`); every other currency
/// uses Western grouping. Unknown codes are prefixed with the code itself.
pub fn format_currency(amount: Option<f64>, currency: &str) -> String {
    let value = match amount {
        Some(v) if !v.is_nan() => v,
        _ => return MISSING.to_string(),
    };

    let code = currency.trim().to_ascii_uppercase();
    let grouping = if code == "INR" {
        Grouping::Indian
    } else {
        Grouping::Western
    };
    let body = grouped(value.abs(), 2, grouping);
    let negative = value < 0.0 && body.chars().any(|c| c.is_ascii_digit() && c != '0');
    let sign = if negative { "-" } else { "" };

    format!("{sign}{}{body}", currency_prefix(&code))
}

fn currency_prefix(code: &str) -> String {
    match code {
        "USD" => "$".to_string(),
        "INR" => "₹".to_string(),
        "EUR" => "€".to_string(),
        "GBP" => "£".to_string(),
        "JPY" => "¥".to_string(),
        "CNY" => "CN¥".to_string(),
        "CAD" => "CA$".to_string(),
        "AUD" => "A$".to_string(),
        other => format!("{other}\u{a0}"),
    }
}

/// Round half away from zero on the shortest decimal representation,
/// so `12.345` rounds to `12.35` even though the nearest double is below it.
fn round_fixed(value: f64, decimals: u32) -> String {
    match Decimal::from_str(&value.to_string()) {
        Ok(d) => {
            let mut rounded = d.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
            rounded.rescale(decimals);
            if rounded.is_zero() {
                rounded.set_sign_positive(true);
            }
            rounded.to_string()
        }
        // Out of Decimal's range: plain float formatting is close enough there.
        Err(_) => format!("{:.*}", decimals as usize, value),
    }
}

fn grouped(value: f64, decimals: u32, grouping: Grouping) -> String {
    if value.is_infinite() {
        return if value < 0.0 { "-∞".to_string() } else { "∞".to_string() };
    }

    let fixed = round_fixed(value, decimals);
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut out = String::with_capacity(fixed.len() + fixed.len() / 2);
    out.push_str(sign);
    out.push_str(&group_digits(int_part, grouping));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

fn group_digits(digits: &str, grouping: Grouping) -> String {
    let len = digits.len();
    if len <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(len - 3);
    let step = match grouping {
        Grouping::Western => 3,
        Grouping::Indian => 2,
    };

    let mut chunks: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(step);
        chunks.push(&head[start..end]);
        end = start;
    }
    chunks.reverse();
    chunks.push(tail);
    chunks.join(",")
}

// ── Dates ───────────────────────────────────────────────────────────

/// Parse the date formats the backend emits.
///
/// Accepts RFC 3339 (kept at the sender's wall-clock time, offset dropped, so a
/// transaction is filed under the day it was made), `YYYY-MM-DDTHH:MM:SS[.fff]`,
/// `YYYY-MM-DD HH:MM:SS[.fff]`, `YYYY-MM-DDTHH:MM` and bare `YYYY-MM-DD`
/// (midnight).
pub fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Format a raw date string in the given style.
pub fn format_date(raw: Option<&str>, style: DateStyle) -> String {
    match raw.map(str::trim) {
        None | Some("") => MISSING.to_string(),
        Some(s) => match parse_datetime(s) {
            Some(dt) => format_datetime(dt, style),
            None => INVALID_DATE.to_string(),
        },
    }
}

/// Format an already-parsed timestamp in the given style.
pub fn format_datetime(dt: NaiveDateTime, style: DateStyle) -> String {
    match style {
        DateStyle::Short => dt.format("%-m/%-d/%y").to_string(),
        DateStyle::Medium => dt.format("%b %-d, %Y").to_string(),
        DateStyle::Long => dt.format("%A, %B %-d, %Y").to_string(),
        DateStyle::Time => dt.format("%I:%M %p").to_string(),
        DateStyle::DateTime => dt.format("%b %-d, %Y, %I:%M %p").to_string(),
    }
}

#[derive(Debug, Clone, Copy)]
enum RelativeUnit {
    Minute,
    Hour,
    Day,
}

fn relative_phrase(amount: i64, unit: RelativeUnit) -> String {
    let name = match unit {
        RelativeUnit::Minute => "minute",
        RelativeUnit::Hour => "hour",
        RelativeUnit::Day => "day",
    };
    match (amount, unit) {
        (-1, RelativeUnit::Day) => "yesterday".to_string(),
        (-1, _) => format!("1 {name} ago"),
        (n, _) => format!("{} {name}s ago", -n),
    }
}

/// "5 minutes ago", "yesterday", ... relative to `now`.
///
/// Anything older than 30 days renders as a medium date; timestamps at or
/// after `now` render as "just now".
pub fn relative_time(dt: NaiveDateTime, now: NaiveDateTime) -> String {
    let seconds = (dt - now).num_seconds();
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    if days < -RELATIVE_CUTOFF_DAYS {
        format_datetime(dt, DateStyle::Medium)
    } else if days < 0 {
        relative_phrase(days, RelativeUnit::Day)
    } else if hours < 0 {
        relative_phrase(hours, RelativeUnit::Hour)
    } else if minutes < 0 {
        relative_phrase(minutes, RelativeUnit::Minute)
    } else {
        "just now".to_string()
    }
}

/// [`relative_time`] over a raw date string.
pub fn relative_time_str(raw: Option<&str>, now: NaiveDateTime) -> String {
    match raw.map(str::trim) {
        None | Some("") => MISSING.to_string(),
        Some(s) => match parse_datetime(s) {
            Some(dt) => relative_time(dt, now),
            None => INVALID_DATE.to_string(),
        },
    }
}

// ── Text ────────────────────────────────────────────────────────────

/// Cut `text` to `max_len` characters and append `...` when it was longer.
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_len).collect();
    out.push_str("...");
    out
}
