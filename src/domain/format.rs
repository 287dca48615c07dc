//! Display formatting for prices, time-to-sell ranges and timestamps.

use time::format_description::well_known::{Iso8601, Rfc3339};
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

/// Formats a value as whole US dollars, e.g. `1234.4` -> `"$1,234"`.
pub fn format_currency(value: f64) -> String {
    if value.is_nan() {
        return "$NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "$∞" } else { "-$∞" }.to_string();
    }

    // f64::round rounds half away from zero. Negative inputs keep their sign
    // even when they round to zero.
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let sign = if value.is_sign_negative() { "-" } else { "" };
    format!("{sign}${}", group_thousands(&digits))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// `"{min} - {max}"` with both ends formatted as currency.
pub fn format_price_range(min: f64, max: f64) -> String {
    format!("{} - {}", format_currency(min), format_currency(max))
}

/// `"3 days"`, `"1 day"` or `"2-5 days"`.
pub fn format_time_range(min: f64, max: f64, unit: &str) -> String {
    if min == max {
        let plural = if min != 1.0 { "s" } else { "" };
        format!("{} {unit}{plural}", format_number(min))
    } else {
        format!("{}-{} {unit}s", format_number(min), format_number(max))
    }
}

/// Prints integral values without a fractional part.
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Renders an API timestamp in local time as `M/D/YYYY, h:mm:ss AM`.
///
/// Accepts RFC 3339, naive ISO 8601 (taken as local time) and epoch
/// milliseconds. Anything else is returned unchanged.
pub fn format_local_timestamp(raw: &str) -> String {
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    match parse_timestamp(raw, offset) {
        Some(instant) => format_instant(instant.to_offset(offset)),
        None => raw.to_string(),
    }
}

pub(crate) fn parse_timestamp(raw: &str, local: UtcOffset) -> Option<OffsetDateTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if trimmed.bytes().all(|b| b.is_ascii_digit()) {
        let millis: i128 = trimmed.parse().ok()?;
        return OffsetDateTime::from_unix_timestamp_nanos(millis * 1_000_000).ok();
    }

    if let Ok(instant) = OffsetDateTime::parse(trimmed, &Rfc3339) {
        return Some(instant);
    }
    if let Ok(instant) = OffsetDateTime::parse(trimmed, &Iso8601::DEFAULT) {
        return Some(instant);
    }

    PrimitiveDateTime::parse(trimmed, &Iso8601::DEFAULT)
        .ok()
        .map(|naive| naive.assume_offset(local))
}

pub(crate) fn format_instant(instant: OffsetDateTime) -> String {
    let layout = format_description!(
        "[month padding:none]/[day padding:none]/[year], [hour repr:12 padding:none]:[minute]:[second] [period]"
    );
    instant
        .format(&layout)
        .unwrap_or_else(|_| instant.to_string())
}
