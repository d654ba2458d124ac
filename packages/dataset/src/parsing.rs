//! Lenient field parsing for the fire statistics CSV.
//!
//! The source file mixes numeric columns with stray quoting and junk values.
//! Parsing is lossy by design: an unparseable value becomes `None` rather
//! than failing the whole load.

use chrono::NaiveDate;

/// Date format used by the fire statistics CSV.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses an ignition date in `YYYY-MM-DD` format.
#[must_use]
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}

/// Parses a float field, stripping any embedded double quotes first.
///
/// Coordinate columns in the source file are sometimes exported as
/// `"\"42.1\""`.
#[must_use]
pub fn parse_quoted_f64(s: Option<&String>) -> Option<f64> {
    s?.replace('"', "").trim().parse::<f64>().ok()
}

/// Parses a plain float field. Returns `None` for missing or junk values.
#[must_use]
pub fn parse_f64(s: Option<&String>) -> Option<f64> {
    s?.trim().parse::<f64>().ok()
}

/// Parses a plain integer field. Returns `None` for missing or junk values.
#[must_use]
pub fn parse_i64(s: Option<&String>) -> Option<i64> {
    s?.trim().parse::<i64>().ok()
}

/// Parses a numeric code field into a `u8`. Returns `None` for missing or
/// junk values.
#[must_use]
pub fn parse_code(s: Option<&String>) -> Option<u8> {
    s?.trim().parse::<u8>().ok()
}

/// Parses a 0/1 flag field, stripping any embedded double quotes first.
#[must_use]
pub fn parse_quoted_flag(s: Option<&String>) -> Option<bool> {
    let value = s?.replace('"', "").trim().parse::<i8>().ok()?;
    Some(value == 1)
}

/// Clamps a reported duration to zero. Negative control/extinction times in
/// the source data are recording artifacts.
#[must_use]
pub fn clamp_non_negative(value: Option<i64>) -> Option<i64> {
    value.map(|v| v.max(0))
}
