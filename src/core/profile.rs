use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{KundaliError, KundaliResult};

/// Birth data the chart was computed from. The engine never recomputes
/// positions from it; it travels alongside the chart so hosts can key
/// relation-matrix fetches and detail lookups off one value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthProfile {
    #[serde(default)]
    pub name: Option<String>,
    pub birth_time_utc: DateTime<Utc>,
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    #[serde(default)]
    pub timezone_offset_minutes: i32,
    #[serde(default)]
    pub place: Option<String>,
}

impl BirthProfile {
    pub fn validate(&self) -> KundaliResult<()> {
        if !self.latitude_deg.is_finite() || self.latitude_deg.abs() > 90.0 {
            return Err(KundaliError::InvalidData(format!(
                "birth latitude out of range [-90, 90]: {}",
                self.latitude_deg
            )));
        }
        if !self.longitude_deg.is_finite() || self.longitude_deg.abs() > 180.0 {
            return Err(KundaliError::InvalidData(format!(
                "birth longitude out of range [-180, 180]: {}",
                self.longitude_deg
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::BirthProfile;

    fn sample() -> BirthProfile {
        BirthProfile {
            name: Some("sample".to_owned()),
            birth_time_utc: Utc
                .with_ymd_and_hms(1990, 7, 14, 4, 30, 0)
                .single()
                .expect("valid timestamp"),
            latitude_deg: 28.61,
            longitude_deg: 77.21,
            timezone_offset_minutes: 330,
            place: Some("New Delhi".to_owned()),
        }
    }

    #[test]
    fn valid_profile_passes_validation() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn out_of_range_coordinates_are_rejected() {
        let mut profile = sample();
        profile.latitude_deg = 91.0;
        assert!(profile.validate().is_err());

        let mut profile = sample();
        profile.longitude_deg = f64::NAN;
        assert!(profile.validate().is_err());
    }
}
