//! Solar position from the NOAA simplified Solar Position Algorithm.
//!
//! Accurate to roughly 0.01° within ±50 years of J2000, far better than the
//! twilight band widths the darkness converter works with.

use std::f64::consts::PI;

use chrono::{DateTime, Datelike, Timelike, Utc};
use qtty::Degrees;

const DEG: f64 = PI / 180.0;
const J2000: f64 = 2_451_545.0;
const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Sun position seen from one point on Earth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    /// Altitude above the horizon, negative below it.
    pub elevation: Degrees,
    /// Clockwise from north.
    pub azimuth: Degrees,
    pub declination: Degrees,
    /// Equation of time in minutes.
    pub equation_of_time: f64,
}

fn fractional_hour(dt: &DateTime<Utc>) -> f64 {
    dt.hour() as f64 + dt.minute() as f64 / 60.0 + dt.second() as f64 / 3600.0
}

/// Julian date of a UTC instant.
pub fn julian_date(dt: &DateTime<Utc>) -> f64 {
    let (mut y, mut m) = (dt.year() as f64, dt.month() as f64);
    if m <= 2.0 {
        y -= 1.0;
        m += 12.0;
    }
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();

    (365.25 * (y + 4716.0)).floor()
        + (30.6001 * (m + 1.0)).floor()
        + dt.day() as f64
        + fractional_hour(dt) / 24.0
        + b
        - 1524.5
}

fn normalize_degrees(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

fn mean_longitude(t: f64) -> f64 {
    normalize_degrees(280.46646 + t * (36000.76983 + t * 0.0003032))
}

fn mean_anomaly(t: f64) -> f64 {
    normalize_degrees(357.52911 + t * (35999.05029 - t * 0.0001537))
}

fn orbit_eccentricity(t: f64) -> f64 {
    0.016708634 - t * (0.000042037 + t * 0.0000001267)
}

fn apparent_longitude(t: f64) -> f64 {
    let m = mean_anomaly(t) * DEG;
    let center = m.sin() * (1.914602 - t * (0.004817 + t * 0.000014))
        + (2.0 * m).sin() * (0.019993 - t * 0.000101)
        + (3.0 * m).sin() * 0.000289;
    let omega = 125.04 - 1934.136 * t;
    mean_longitude(t) + center - 0.00569 - 0.00478 * (omega * DEG).sin()
}

fn obliquity(t: f64) -> f64 {
    let mean = 23.0 + (26.0 + (21.448 - t * (46.815 + t * (0.00059 - t * 0.001813))) / 60.0) / 60.0;
    let omega = 125.04 - 1934.136 * t;
    mean + 0.00256 * (omega * DEG).cos()
}

fn declination(t: f64) -> f64 {
    ((obliquity(t) * DEG).sin() * (apparent_longitude(t) * DEG).sin()).asin() / DEG
}

fn equation_of_time(t: f64) -> f64 {
    let l0 = mean_longitude(t) * DEG;
    let m = mean_anomaly(t) * DEG;
    let e = orbit_eccentricity(t);
    let y = (obliquity(t) * DEG / 2.0).tan().powi(2);

    let eq = y * (2.0 * l0).sin() - 2.0 * e * m.sin() + 4.0 * e * y * m.sin() * (2.0 * l0).cos()
        - 0.5 * y * y * (4.0 * l0).sin()
        - 1.25 * e * e * (2.0 * m).sin();

    4.0 * eq / DEG
}

/// Full solar position for an instant and observer.
///
/// # Arguments
/// * `latitude` - Observer latitude in degrees, north positive
/// * `longitude` - Observer longitude in degrees, east positive
/// * `time` - UTC instant
pub fn solar_position(latitude: f64, longitude: f64, time: DateTime<Utc>) -> SolarPosition {
    let t = (julian_date(&time) - J2000) / DAYS_PER_CENTURY;
    let decl = declination(t);
    let eqt = equation_of_time(t);

    let true_solar_minutes = fractional_hour(&time) * 60.0 + eqt + 4.0 * longitude;
    let hour_angle = true_solar_minutes / 4.0 - 180.0;

    let (lat_r, decl_r, ha_r) = (latitude * DEG, decl * DEG, hour_angle * DEG);
    let sin_alt = lat_r.sin() * decl_r.sin() + lat_r.cos() * decl_r.cos() * ha_r.cos();
    let alt_r = sin_alt.clamp(-1.0, 1.0).asin();

    let azimuth = if lat_r.cos().abs() > 1e-10 && alt_r.cos().abs() > 1e-10 {
        let cos_az = (decl_r.sin() - alt_r.sin() * lat_r.sin()) / (alt_r.cos() * lat_r.cos());
        let az = cos_az.clamp(-1.0, 1.0).acos() / DEG;
        if normalize_degrees(hour_angle) < 180.0 {
            360.0 - az
        } else {
            az
        }
    } else if decl > 0.0 {
        180.0
    } else {
        0.0
    };

    SolarPosition {
        elevation: Degrees::new(alt_r / DEG),
        azimuth: Degrees::new(normalize_degrees(azimuth)),
        declination: Degrees::new(decl),
        equation_of_time: eqt,
    }
}

/// Sun altitude above the horizon for an observer at an instant.
pub fn solar_elevation(latitude: f64, longitude: f64, time: DateTime<Utc>) -> Degrees {
    solar_position(latitude, longitude, time).elevation
}
