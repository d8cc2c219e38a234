use crate::error::{Result, SundirError};
use crate::types::Coordinate;

pub const LATITUDE_LIMIT: f64 = 90.0;
pub const LONGITUDE_LIMIT: f64 = 180.0;

/// Parses `35d37m51s` (sexagesimal) or `35.6799d` (decimal degrees), each with
/// an optional leading sign that applies to the whole angle.
pub fn parse_angle(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    let (sign, body) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1.0, &trimmed[1..]),
        Some(b'+') => (1.0, &trimmed[1..]),
        Some(_) => (1.0, trimmed),
        None => return Err(SundirError::invalid_angle(text, "empty angle")),
    };

    let (deg_text, rest) = body
        .split_once('d')
        .ok_or_else(|| SundirError::invalid_angle(text, "missing 'd' after degrees"))?;

    if rest.is_empty() {
        let degrees = parse_decimal(deg_text)
            .ok_or_else(|| SundirError::invalid_angle(text, "degrees are not a number"))?;
        return Ok(sign * degrees);
    }

    let degrees = parse_integer(deg_text)
        .ok_or_else(|| SundirError::invalid_angle(text, "degrees are not an integer"))?;
    let (min_text, rest) = rest
        .split_once('m')
        .ok_or_else(|| SundirError::invalid_angle(text, "missing 'm' after minutes"))?;
    let sec_text = rest
        .strip_suffix('s')
        .ok_or_else(|| SundirError::invalid_angle(text, "missing 's' after seconds"))?;

    let minutes = parse_integer(min_text)
        .ok_or_else(|| SundirError::invalid_angle(text, "minutes are not an integer"))?;
    let seconds = parse_decimal(sec_text)
        .ok_or_else(|| SundirError::invalid_angle(text, "seconds are not a number"))?;

    if minutes >= 60.0 {
        return Err(SundirError::invalid_angle(text, "minutes must be below 60"));
    }
    if seconds >= 60.0 {
        return Err(SundirError::invalid_angle(text, "seconds must be below 60"));
    }

    Ok(sign * (degrees + minutes / 60.0 + seconds / 3600.0))
}

pub fn parse_latitude(text: &str) -> Result<Coordinate> {
    parse_bounded(text, LATITUDE_LIMIT)
}

pub fn parse_longitude(text: &str) -> Result<Coordinate> {
    parse_bounded(text, LONGITUDE_LIMIT)
}

fn parse_bounded(text: &str, limit: f64) -> Result<Coordinate> {
    let value = parse_angle(text)?;
    if value.abs() > limit {
        return Err(SundirError::AngleOutOfRange {
            input: text.to_string(),
            value,
            limit,
        });
    }
    Ok(Coordinate {
        text: text.to_string(),
        degrees: value,
    })
}

fn parse_integer(field: &str) -> Option<f64> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse::<u32>().ok().map(f64::from)
}

// Plain `digits[.digits]`; rejects exponents, `inf` and `nan` that `f64::from_str` would take.
fn parse_decimal(field: &str) -> Option<f64> {
    let (whole, frac) = field.split_once('.').unwrap_or((field, ""));
    let digits_only = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if whole.is_empty() && frac.is_empty() {
        return None;
    }
    if !digits_only(whole) || !digits_only(frac) {
        return None;
    }
    field.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer_rejects_signs_and_blanks() {
        assert_eq!(parse_integer("37"), Some(37.0));
        assert_eq!(parse_integer(""), None);
        assert_eq!(parse_integer("+3"), None);
        assert_eq!(parse_integer("3.5"), None);
    }

    #[test]
    fn test_parse_decimal_forms() {
        assert_eq!(parse_decimal("51"), Some(51.0));
        assert_eq!(parse_decimal("51.25"), Some(51.25));
        assert_eq!(parse_decimal(".5"), Some(0.5));
        assert_eq!(parse_decimal("5."), Some(5.0));
        assert_eq!(parse_decimal("."), None);
        assert_eq!(parse_decimal("1e3"), None);
        assert_eq!(parse_decimal("nan"), None);
        assert_eq!(parse_decimal("1.2.3"), None);
    }
}
