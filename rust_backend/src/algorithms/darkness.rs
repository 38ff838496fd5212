//! Solar elevation to darkness factor conversion.
//!
//! The darkness factor is a 0-100 value describing how suitable the ambient
//! light level is for seeing aurora. It interpolates linearly across the three
//! twilight bands and jumps to 100 once the Sun is 18° below the horizon
//! (astronomical night).
//!
//! Two seasonal overrides apply at Tromsø latitude, keyed on the calendar date
//! only:
//! - midnight sun (May 19 - Jul 23): darkness is forced to 0
//! - polar night (Nov 21 - Jan 21): darkness gets +10, capped at 100
//!
//! The date is always passed in by the caller; nothing here reads the clock.

use chrono::{Datelike, NaiveDate};
use qtty::Degrees;
use serde::{Deserialize, Serialize};

/// Sun altitude at the end of civil twilight.
pub const CIVIL_TWILIGHT_DEG: f64 = -6.0;
/// Sun altitude at the end of nautical twilight.
pub const NAUTICAL_TWILIGHT_DEG: f64 = -12.0;
/// Sun altitude at the end of astronomical twilight.
pub const ASTRONOMICAL_TWILIGHT_DEG: f64 = -18.0;

/// Darkness reached at the end of civil twilight.
const CIVIL_DARKNESS: f64 = 10.0;
/// Darkness reached at the end of nautical twilight.
const NAUTICAL_DARKNESS: f64 = 40.0;
/// Darkness reached just before astronomical night.
const ASTRONOMICAL_DARKNESS: f64 = 80.0;
const NIGHT_DARKNESS: f64 = 100.0;

const POLAR_NIGHT_BONUS: f64 = 10.0;

/// (month, day) bounds, both inclusive.
const MIDNIGHT_SUN_START: (u32, u32) = (5, 19);
const MIDNIGHT_SUN_END: (u32, u32) = (7, 23);
const POLAR_NIGHT_START: (u32, u32) = (11, 21);
const POLAR_NIGHT_END: (u32, u32) = (1, 21);

/// Seasonal regime used for darkness overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    MidnightSun,
    PolarNight,
    Regular,
}

/// Determine the seasonal regime for a calendar date.
pub fn season_for(date: NaiveDate) -> Season {
    let md = (date.month(), date.day());

    if md >= MIDNIGHT_SUN_START && md <= MIDNIGHT_SUN_END {
        Season::MidnightSun
    } else if md >= POLAR_NIGHT_START || md <= POLAR_NIGHT_END {
        // Wraps the year boundary
        Season::PolarNight
    } else {
        Season::Regular
    }
}

/// Darkness from solar elevation alone, without seasonal overrides.
pub fn base_darkness(elevation: Degrees) -> f64 {
    let e = elevation.value();

    if !e.is_finite() || e > 0.0 {
        return 0.0;
    }

    if e > CIVIL_TWILIGHT_DEG {
        // 0 -> 10 as the Sun sinks from 0° to -6°
        (-e / -CIVIL_TWILIGHT_DEG) * CIVIL_DARKNESS
    } else if e > NAUTICAL_TWILIGHT_DEG {
        let progress = (CIVIL_TWILIGHT_DEG - e) / (CIVIL_TWILIGHT_DEG - NAUTICAL_TWILIGHT_DEG);
        CIVIL_DARKNESS + progress * (NAUTICAL_DARKNESS - CIVIL_DARKNESS)
    } else if e > ASTRONOMICAL_TWILIGHT_DEG {
        let progress =
            (NAUTICAL_TWILIGHT_DEG - e) / (NAUTICAL_TWILIGHT_DEG - ASTRONOMICAL_TWILIGHT_DEG);
        NAUTICAL_DARKNESS + progress * (ASTRONOMICAL_DARKNESS - NAUTICAL_DARKNESS)
    } else {
        NIGHT_DARKNESS
    }
}

/// Convert solar elevation to a 0-100 darkness factor for the given date.
///
/// # Arguments
/// * `elevation` - Sun altitude; values above the horizon give 0
/// * `date` - Calendar date of the window, used only for seasonal overrides
///
/// # Returns
/// Darkness factor in `[0, 100]`.
pub fn darkness_factor(elevation: Degrees, date: NaiveDate) -> f64 {
    let base = base_darkness(elevation);

    match season_for(date) {
        Season::MidnightSun => 0.0,
        Season::PolarNight => (base + POLAR_NIGHT_BONUS).min(NIGHT_DARKNESS),
        Season::Regular => base,
    }
}

/// Whether the Sun is low enough for aurora to be observable at all.
pub fn is_dark_enough(elevation: Degrees) -> bool {
    elevation.value() <= CIVIL_TWILIGHT_DEG
}
