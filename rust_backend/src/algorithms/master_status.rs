//! GO / WAIT / NO reduction of the current conditions.

use qtty::Degrees;
use serde::{Deserialize, Serialize};

use super::darkness::CIVIL_TWILIGHT_DEG;
use crate::models::GlobalState;

/// Cloud cover (percent) above which going out is pointless.
pub const NO_GO_CLOUD: f64 = 80.0;
/// KP below which going out is pointless.
pub const NO_GO_KP: f64 = 2.0;
pub const GO_MIN_KP: f64 = 3.0;
pub const GO_MAX_CLOUD: f64 = 50.0;

/// One-word status for the current hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MasterStatus {
    Go,
    Wait,
    No,
}

impl MasterStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MasterStatus::Go => "GO",
            MasterStatus::Wait => "WAIT",
            MasterStatus::No => "NO",
        }
    }
}

impl std::fmt::Display for MasterStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<GlobalState> for MasterStatus {
    fn from(state: GlobalState) -> Self {
        match state {
            GlobalState::Excellent => MasterStatus::Go,
            GlobalState::Possible => MasterStatus::Wait,
            GlobalState::Unlikely => MasterStatus::No,
        }
    }
}

/// Reduce current readings to a single status.
///
/// Hard blockers (heavy cloud, quiet field) win over daylight: a bright but
/// promising evening is `Wait`, an overcast one is `No`.
pub fn master_status(kp_index: f64, cloud_cover: f64, solar_elevation: Degrees) -> MasterStatus {
    // NaN fails every comparison, so treat it as the blocking value
    let kp = if kp_index.is_finite() { kp_index } else { 0.0 };
    let cloud = if cloud_cover.is_finite() { cloud_cover } else { 100.0 };

    if cloud > NO_GO_CLOUD || kp < NO_GO_KP {
        MasterStatus::No
    } else if solar_elevation.value() > CIVIL_TWILIGHT_DEG {
        MasterStatus::Wait
    } else if kp >= GO_MIN_KP && cloud <= GO_MAX_CLOUD {
        MasterStatus::Go
    } else {
        MasterStatus::Wait
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dark() -> Degrees {
        Degrees::new(-15.0)
    }

    #[test]
    fn test_blockers() {
        assert_eq!(master_status(6.0, 81.0, dark()), MasterStatus::No);
        assert_eq!(master_status(1.9, 0.0, dark()), MasterStatus::No);
        assert_eq!(master_status(1.0, 10.0, Degrees::new(5.0)), MasterStatus::No);
    }

    #[test]
    fn test_daylight_waits() {
        assert_eq!(master_status(6.0, 10.0, Degrees::new(-5.0)), MasterStatus::Wait);
    }

    #[test]
    fn test_go() {
        assert_eq!(master_status(3.0, 50.0, dark()), MasterStatus::Go);
        assert_eq!(master_status(5.0, 0.0, Degrees::new(-6.0)), MasterStatus::Go);
    }

    #[test]
    fn test_marginal_conditions_wait() {
        assert_eq!(master_status(2.5, 20.0, dark()), MasterStatus::Wait);
        assert_eq!(master_status(4.0, 65.0, dark()), MasterStatus::Wait);
        assert_eq!(master_status(4.0, 80.0, dark()), MasterStatus::Wait);
    }

    #[test]
    fn test_non_finite_readings_block() {
        assert_eq!(master_status(f64::NAN, 10.0, dark()), MasterStatus::No);
        assert_eq!(master_status(5.0, f64::NAN, dark()), MasterStatus::No);
    }

    #[test]
    fn test_from_global_state() {
        assert_eq!(MasterStatus::from(GlobalState::Excellent), MasterStatus::Go);
        assert_eq!(MasterStatus::from(GlobalState::Possible), MasterStatus::Wait);
        assert_eq!(MasterStatus::from(GlobalState::Unlikely), MasterStatus::No);
    }

    #[test]
    fn test_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&MasterStatus::Go).unwrap(), "\"GO\"");
    }
}
