use std::fmt;
use std::str::FromStr;

use chrono::{
    DateTime, Duration, FixedOffset, Local, LocalResult, NaiveDateTime, Offset, SubsecRound,
    TimeZone, Utc,
};
use chrono_tz::Tz;

use crate::error::{Result, SundirError};

/// Civil timestamp layout used both for `--date` and for rendered rows.
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// How wall-clock time relates to UTC. Passed explicitly instead of reading
/// the host zone behind the caller's back.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum ZoneRule {
    /// The host's configured zone.
    #[default]
    Local,
    Fixed(FixedOffset),
    Named(Tz),
}

impl fmt::Display for ZoneRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZoneRule::Local => write!(f, "local"),
            ZoneRule::Fixed(offset) => write!(f, "{offset}"),
            ZoneRule::Named(tz) => write!(f, "{tz}"),
        }
    }
}

impl FromStr for ZoneRule {
    type Err = SundirError;

    /// Accepts `local`, an IANA name (`Asia/Tokyo`, `UTC`) or a fixed offset
    /// such as `+09:00`, `-0530` or `+9`.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("local") {
            return Ok(ZoneRule::Local);
        }
        if s.starts_with('+') || s.starts_with('-') {
            return parse_fixed_offset(s)
                .map(ZoneRule::Fixed)
                .ok_or_else(|| SundirError::UnknownZone {
                    input: s.to_string(),
                });
        }
        s.parse::<Tz>()
            .map(ZoneRule::Named)
            .map_err(|_| SundirError::UnknownZone {
                input: s.to_string(),
            })
    }
}

fn parse_fixed_offset(s: &str) -> Option<FixedOffset> {
    let sign = if s.starts_with('-') { -1 } else { 1 };
    let body = &s[1..];
    if !body.is_ascii() {
        return None;
    }
    let (hours, minutes) = match body.split_once(':') {
        Some((h, m)) => (h, m),
        None if body.len() == 4 => body.split_at(2),
        None => (body, "0"),
    };
    if hours.is_empty() || !hours.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if minutes.is_empty() || !minutes.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    if hours > 23 || minutes >= 60 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

pub fn parse_local_time(text: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text.trim(), TIMESTAMP_FORMAT).map_err(|source| {
        SundirError::InvalidTimestamp {
            input: text.to_string(),
            source,
        }
    })
}

pub fn format_local_time(local: &NaiveDateTime) -> String {
    local.format(TIMESTAMP_FORMAT).to_string()
}

/// Reads `local` as wall-clock time in `zone`.
///
/// Ambiguous times (clocks turned back) resolve to the earliest instant.
/// Times skipped by a forward transition are read with the offset in force
/// a day earlier, i.e. before the transition: `02:30` in a one-hour spring gap
/// lands on the instant the clock shows as `03:30`.
pub fn to_utc(local: &NaiveDateTime, zone: &ZoneRule) -> Result<DateTime<Utc>> {
    let resolved = match zone {
        ZoneRule::Local => resolve_local(&Local, local),
        ZoneRule::Fixed(offset) => resolve_local(offset, local),
        ZoneRule::Named(tz) => resolve_local(tz, local),
    };
    resolved.ok_or(SundirError::UnresolvableLocalTime { local: *local })
}

fn resolve_local<Z: TimeZone>(zone: &Z, local: &NaiveDateTime) -> Option<DateTime<Utc>> {
    match zone.from_local_datetime(local) {
        LocalResult::Single(dt) => Some(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(earliest, _) => Some(earliest.with_timezone(&Utc)),
        LocalResult::None => {
            let before = local.checked_sub_signed(Duration::days(1))?;
            let offset = zone.offset_from_utc_datetime(&before).fix();
            let shift = Duration::seconds(offset.local_minus_utc().into());
            let utc = local.checked_sub_signed(shift)?;
            Some(Utc.from_utc_datetime(&utc))
        }
    }
}

pub fn from_utc(instant: &DateTime<Utc>, zone: &ZoneRule) -> NaiveDateTime {
    match zone {
        ZoneRule::Local => instant.with_timezone(&Local).naive_local(),
        ZoneRule::Fixed(offset) => instant.with_timezone(offset).naive_local(),
        ZoneRule::Named(tz) => instant.with_timezone(tz).naive_local(),
    }
}

/// Current instant truncated to whole seconds.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(0)
}
