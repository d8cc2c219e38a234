use chrono::{DateTime, Utc};
use log::trace;

use crate::error::{Result, SundirError};
use crate::types::{GeoLocation, SunPosition};

pub const J2000_JULIAN_DAY: f64 = 2_451_545.0;
/// 2000-01-01T12:00:00Z as a Unix timestamp.
pub const J2000_UNIX_SECONDS: i64 = 946_728_000;
pub const SECONDS_PER_DAY: f64 = 86_400.0;
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Days (with fraction) elapsed since J2000.0.
pub fn days_since_j2000(instant: &DateTime<Utc>) -> f64 {
    let whole = (instant.timestamp() - J2000_UNIX_SECONDS) as f64;
    let frac = f64::from(instant.timestamp_subsec_nanos()) * 1e-9;
    (whole + frac) / SECONDS_PER_DAY
}

pub fn julian_day(instant: &DateTime<Utc>) -> f64 {
    J2000_JULIAN_DAY + days_since_j2000(instant)
}

pub fn julian_centuries(days: f64) -> f64 {
    days / DAYS_PER_CENTURY
}

pub fn mean_longitude(t: f64) -> f64 {
    normalize_angle(280.46646 + 36_000.76983 * t + 0.000_303_2 * t * t)
}

pub fn mean_anomaly(t: f64) -> f64 {
    normalize_angle(357.52911 + 35_999.05029 * t - 0.000_153_7 * t * t)
}

pub fn equation_of_center(t: f64, mean_anomaly: f64) -> f64 {
    let m = deg_to_rad(mean_anomaly);
    (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin()
}

/// Longitude of the Moon's ascending node, driving the one-term corrections
/// of the apparent longitude and obliquity.
pub fn ascending_node(t: f64) -> f64 {
    125.04 - 1_934.136 * t
}

pub fn true_longitude(t: f64) -> f64 {
    let l0 = mean_longitude(t);
    let m = mean_anomaly(t);
    normalize_angle(l0 + equation_of_center(t, m))
}

pub fn apparent_longitude(t: f64) -> f64 {
    let omega = deg_to_rad(ascending_node(t));
    normalize_angle(true_longitude(t) - 0.005_69 - 0.004_78 * omega.sin())
}

pub fn mean_obliquity(t: f64) -> f64 {
    let seconds = 21.448 - 46.815_0 * t - 0.000_59 * t * t + 0.001_813 * t * t * t;
    23.0 + (26.0 + seconds / 60.0) / 60.0
}

pub fn apparent_obliquity(t: f64) -> f64 {
    mean_obliquity(t) + 0.002_56 * deg_to_rad(ascending_node(t)).cos()
}

/// Ecliptic longitude (latitude 0) to (right ascension, declination), degrees.
pub fn equatorial_coordinates(longitude: f64, obliquity: f64) -> (f64, f64) {
    let lambda = deg_to_rad(longitude);
    let eps = deg_to_rad(obliquity);
    let ra = (eps.cos() * lambda.sin()).atan2(lambda.cos());
    let dec = (eps.sin() * lambda.sin()).clamp(-1.0, 1.0).asin();
    (normalize_angle(rad_to_deg(ra)), rad_to_deg(dec))
}

pub fn greenwich_mean_sidereal_time(days: f64) -> f64 {
    let t = julian_centuries(days);
    normalize_angle(
        280.460_618_37 + 360.985_647_366_29 * days + 0.000_387_933 * t * t
            - t * t * t / 38_710_000.0,
    )
}

/// Degrees west of the local meridian.
pub fn hour_angle(sidereal_time: f64, longitude: f64, right_ascension: f64) -> f64 {
    normalize_angle(sidereal_time + longitude - right_ascension)
}

pub fn solar_zenith_angle(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    let lat_rad = deg_to_rad(latitude);
    let dec_rad = deg_to_rad(declination);
    let ha_rad = deg_to_rad(hour_angle);
    let cos_zenith =
        lat_rad.sin() * dec_rad.sin() + lat_rad.cos() * dec_rad.cos() * ha_rad.cos();
    rad_to_deg(cos_zenith.clamp(-1.0, 1.0).acos())
}

pub fn solar_altitude(zenith_angle: f64) -> f64 {
    90.0 - zenith_angle
}

pub fn solar_azimuth(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    let lat_rad = deg_to_rad(latitude);
    let dec_rad = deg_to_rad(declination);
    let ha_rad = deg_to_rad(hour_angle);
    let sin_az = -dec_rad.cos() * ha_rad.sin();
    let cos_az = dec_rad.sin() * lat_rad.cos() - dec_rad.cos() * lat_rad.sin() * ha_rad.cos();
    let az_rad = sin_az.atan2(cos_az);
    normalize_angle(rad_to_deg(az_rad))
}

fn ensure_finite(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SundirError::InvalidInput { name, value })
    }
}

/// Apparent azimuth and elevation of the sun seen from `location` at `instant`.
///
/// Low-precision solar coordinates (good to roughly 0.01°) with no
/// refraction. `location.height` is checked but does not enter the result:
/// the sun's parallax is under 0.003° and is not modelled.
pub fn solar_position(instant: &DateTime<Utc>, location: &GeoLocation) -> Result<SunPosition> {
    ensure_finite("latitude", location.latitude)?;
    ensure_finite("longitude", location.longitude)?;
    ensure_finite("height", location.height)?;

    let days = days_since_j2000(instant);
    let t = julian_centuries(days);
    let (ra, dec) = equatorial_coordinates(apparent_longitude(t), apparent_obliquity(t));
    let gmst = greenwich_mean_sidereal_time(days);
    let ha = hour_angle(gmst, location.longitude, ra);

    let zenith = solar_zenith_angle(location.latitude, dec, ha);
    let elevation = solar_altitude(zenith);
    let azimuth = solar_azimuth(location.latitude, dec, ha);
    trace!("{instant}: ra={ra:.4} dec={dec:.4} ha={ha:.4} az={azimuth:.4} el={elevation:.4}");

    Ok(SunPosition {
        azimuth,
        elevation,
        right_ascension: ra,
        declination: dec,
        hour_angle: ha,
    })
}
