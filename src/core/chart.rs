use serde::{Deserialize, Serialize};

use crate::core::body::Body;
use crate::core::profile::BirthProfile;
use crate::core::rashi::{Rashi, normalize_degrees, split_longitude};
use crate::error::{KundaliError, KundaliResult};

/// A positioned point in the chart. `sign` and `degree_in_sign` are always
/// derived from `longitude_deg`, never stored independently; constructors
/// keep them in step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetPosition {
    pub name: String,
    /// Resolved body for names the engine knows; `None` leaves the point
    /// name-only (drawn, but skipped by body-keyed classifiers).
    pub body: Option<Body>,
    pub longitude_deg: f64,
    pub sign: Rashi,
    pub degree_in_sign: f64,
    pub retrograde: bool,
}

impl PlanetPosition {
    #[must_use]
    pub fn new(name: impl Into<String>, longitude_deg: f64, retrograde: bool) -> Self {
        let name = name.into();
        let normalized = normalize_degrees(longitude_deg);
        let (sign, degree_in_sign) = split_longitude(normalized);
        Self {
            body: Body::from_name(&name),
            name,
            longitude_deg: normalized,
            sign,
            degree_in_sign,
            retrograde,
        }
    }

    pub fn validate(&self) -> KundaliResult<()> {
        if self.name.trim().is_empty() {
            return Err(KundaliError::InvalidData(
                "planet name must not be empty".to_owned(),
            ));
        }
        if !self.longitude_deg.is_finite() {
            return Err(KundaliError::InvalidData(format!(
                "planet `{}` longitude must be finite",
                self.name
            )));
        }
        Ok(())
    }
}

/// Validated chart model: an ascendant longitude plus positioned points.
/// This is the input to layout and every classifier; it is immutable once
/// installed (ascendant overrides live in view state, not here).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartData {
    pub ascendant_longitude_deg: f64,
    pub planets: Vec<PlanetPosition>,
    #[serde(default)]
    pub profile: Option<BirthProfile>,
}

impl ChartData {
    #[must_use]
    pub fn new(ascendant_longitude_deg: f64, planets: Vec<PlanetPosition>) -> Self {
        Self {
            ascendant_longitude_deg: normalize_degrees(ascendant_longitude_deg),
            planets,
            profile: None,
        }
    }

    #[must_use]
    pub fn with_profile(mut self, profile: BirthProfile) -> Self {
        self.profile = Some(profile);
        self
    }

    /// Natal ascendant sign, before any view-level override.
    #[must_use]
    pub fn ascendant_sign(&self) -> Rashi {
        Rashi::from_longitude(self.ascendant_longitude_deg)
    }

    #[must_use]
    pub fn planet(&self, name: &str) -> Option<&PlanetPosition> {
        self.planets
            .iter()
            .find(|planet| planet.name.eq_ignore_ascii_case(name))
    }

    #[must_use]
    pub fn position_of(&self, body: Body) -> Option<&PlanetPosition> {
        self.planets.iter().find(|planet| planet.body == Some(body))
    }

    pub fn validate(&self) -> KundaliResult<()> {
        if !self.ascendant_longitude_deg.is_finite() {
            return Err(KundaliError::InvalidData(
                "ascendant longitude must be finite".to_owned(),
            ));
        }
        for planet in &self.planets {
            planet.validate()?;
        }
        for (index, planet) in self.planets.iter().enumerate() {
            let duplicate = self.planets[index + 1..]
                .iter()
                .any(|other| other.name.eq_ignore_ascii_case(&planet.name));
            if duplicate {
                return Err(KundaliError::InvalidData(format!(
                    "duplicate planet name `{}`",
                    planet.name
                )));
            }
        }
        if let Some(profile) = &self.profile {
            profile.validate()?;
        }
        Ok(())
    }
}
