pub mod angles;
pub mod cli;
pub mod coordinates;
pub mod error;
pub mod output;
pub mod sequence;
pub mod time;
pub mod types;

pub use angles::{
    apparent_longitude, apparent_obliquity, days_since_j2000, deg_to_rad, equation_of_center,
    equatorial_coordinates, greenwich_mean_sidereal_time, hour_angle, julian_centuries,
    julian_day, mean_anomaly, mean_longitude, normalize_angle, rad_to_deg, solar_altitude,
    solar_azimuth, solar_position, solar_zenith_angle,
};

pub use coordinates::{parse_angle, parse_latitude, parse_longitude};

pub use error::{ErrorKind, Result, SundirError};

pub use output::{ConsoleSink, CsvSink, Report, ReportRow, ResultSink};

pub use sequence::{generate, sample_instant, Samples};

pub use time::{format_local_time, from_utc, parse_local_time, to_utc, ZoneRule, TIMESTAMP_FORMAT};

pub use types::{Coordinate, GeoLocation, Sample, Site, SunPosition};
