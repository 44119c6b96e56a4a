pub mod aspects;
pub mod combustion;
pub mod dignity;

pub use aspects::{AspectOnHouse, HouseAspect, aspects_from, aspects_on_house, special_offsets};
pub use combustion::{angular_separation_deg, combustion_orb_deg, is_combust};
pub use dignity::{Dignity, dignity_of};

use serde::{Deserialize, Serialize};

use crate::core::body::Body;
use crate::core::chart::{ChartData, PlanetPosition};

/// Natural polarity used for display classification (aspect/highlight
/// tinting). Fixed benefic set; everything else counts malefic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nature {
    Benefic,
    Malefic,
}

const NATURAL_BENEFICS: [Body; 3] = [Body::Jupiter, Body::Venus, Body::Moon];

#[must_use]
pub fn natural_nature(body: Body) -> Nature {
    if NATURAL_BENEFICS.contains(&body) {
        Nature::Benefic
    } else {
        Nature::Malefic
    }
}

/// Combined classifier verdict for one positioned planet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanetStatus {
    pub dignity: Dignity,
    pub combust: bool,
    /// `None` for name-only points, which have no natural polarity.
    pub nature: Option<Nature>,
}

/// Pure and total over any chart/planet pair: name-only points classify
/// as neutral, never combust, and carry no polarity.
#[must_use]
pub fn classify(chart: &ChartData, planet: &PlanetPosition) -> PlanetStatus {
    let dignity = match planet.body {
        Some(body) => dignity_of(body, planet.sign, planet.degree_in_sign),
        None => Dignity::Neutral,
    };
    PlanetStatus {
        dignity,
        combust: is_combust(chart, planet),
        nature: planet.body.map(natural_nature),
    }
}
