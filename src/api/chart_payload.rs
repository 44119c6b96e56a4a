use serde::{Deserialize, Serialize};

use crate::core::{BirthProfile, ChartData, PlanetPosition};
use crate::error::{KundaliError, KundaliResult};

/// Wire planet record as delivered by ephemeris backends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetPayload {
    pub name: String,
    pub longitude_deg: f64,
    #[serde(default)]
    pub retrograde: bool,
    /// Signed daily motion; a negative value also marks retrograde.
    #[serde(default)]
    pub speed_deg_per_day: Option<f64>,
}

/// Wire chart record: ascendant longitude plus positioned points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPayload {
    pub ascendant_longitude_deg: f64,
    #[serde(default)]
    pub planets: Vec<PlanetPayload>,
    #[serde(default)]
    pub profile: Option<BirthProfile>,
}

impl ChartPayload {
    pub fn from_json_str(raw: &str) -> KundaliResult<Self> {
        serde_json::from_str(raw).map_err(|error| KundaliError::InvalidPayload(error.to_string()))
    }

    /// Normalizes the wire form into validated chart data. Longitudes
    /// wrap into [0, 360); sign and in-sign degree are derived here and
    /// never trusted from the wire.
    pub fn into_chart(self) -> KundaliResult<ChartData> {
        let planets = self
            .planets
            .into_iter()
            .map(|planet| {
                let retrograde = planet.retrograde
                    || planet.speed_deg_per_day.is_some_and(|speed| speed < 0.0);
                PlanetPosition::new(planet.name, planet.longitude_deg, retrograde)
            })
            .collect();

        let mut chart = ChartData::new(self.ascendant_longitude_deg, planets);
        if let Some(profile) = self.profile {
            chart = chart.with_profile(profile);
        }
        chart.validate()?;
        Ok(chart)
    }
}

#[cfg(test)]
mod tests {
    use super::ChartPayload;
    use crate::core::Rashi;

    #[test]
    fn minimal_payload_parses_with_defaults() {
        let raw = r#"{
            "ascendant_longitude_deg": 10.0,
            "planets": [{"name": "Sun", "longitude_deg": 375.0}]
        }"#;
        let chart = ChartPayload::from_json_str(raw)
            .expect("payload parses")
            .into_chart()
            .expect("chart valid");
        let sun = chart.planet("Sun").expect("sun present");
        assert_eq!(sun.longitude_deg, 15.0);
        assert_eq!(sun.sign, Rashi::Aries);
        assert!(!sun.retrograde);
    }

    #[test]
    fn negative_speed_marks_retrograde() {
        let raw = r#"{
            "ascendant_longitude_deg": 0.0,
            "planets": [{"name": "Saturn", "longitude_deg": 200.0, "speed_deg_per_day": -0.05}]
        }"#;
        let chart = ChartPayload::from_json_str(raw)
            .expect("payload parses")
            .into_chart()
            .expect("chart valid");
        assert!(chart.planet("Saturn").expect("saturn present").retrograde);
    }

    #[test]
    fn duplicate_planet_names_are_rejected() {
        let raw = r#"{
            "ascendant_longitude_deg": 0.0,
            "planets": [
                {"name": "Mars", "longitude_deg": 10.0},
                {"name": "mars", "longitude_deg": 40.0}
            ]
        }"#;
        let result = ChartPayload::from_json_str(raw)
            .expect("payload parses")
            .into_chart();
        assert!(result.is_err());
    }

    #[test]
    fn malformed_json_reports_invalid_payload() {
        assert!(ChartPayload::from_json_str("{not json").is_err());
    }
}
