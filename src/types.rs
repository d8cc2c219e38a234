use chrono::{DateTime, Utc};

/// Observer on the Earth's surface. Angles in degrees, height in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub height: f64,
}

impl GeoLocation {
    pub const fn new(latitude: f64, longitude: f64, height: f64) -> Self {
        Self {
            latitude,
            longitude,
            height,
        }
    }
}

/// Apparent direction of the sun. `azimuth` is clockwise from true north in
/// [0, 360), `elevation` is above the horizon in [-90, 90].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunPosition {
    pub azimuth: f64,
    pub elevation: f64,
    pub right_ascension: f64,
    pub declination: f64,
    pub hour_angle: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub instant: DateTime<Utc>,
    pub position: SunPosition,
}

/// A parsed angle together with the text it was parsed from, so the exact
/// input can be echoed back in reports.
#[derive(Debug, Clone, PartialEq)]
pub struct Coordinate {
    pub text: String,
    pub degrees: f64,
}

/// Everything the user said about where the observer stands.
#[derive(Debug, Clone, PartialEq)]
pub struct Site {
    pub latitude: Coordinate,
    pub longitude: Coordinate,
    pub altitude: f64,
}

impl Site {
    pub fn location(&self) -> GeoLocation {
        GeoLocation::new(self.latitude.degrees, self.longitude.degrees, self.altitude)
    }
}
