use smallvec::SmallVec;

use crate::core::body::Body;
use crate::core::chart::ChartData;
use crate::core::house::{HouseNumber, house_of_sign};
use crate::core::rashi::Rashi;

/// Houses forward of the seat (counting the seat as 1) that every planet
/// aspects: the 7th.
const UNIVERSAL_OFFSETS: [u8; 1] = [6];

/// One house a planet casts sight on, labeled with the relative house the
/// classical rule names ("7th", "4th", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HouseAspect {
    pub target: HouseNumber,
    pub label: &'static str,
}

/// A planet found aspecting a queried house, for the reverse scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AspectOnHouse {
    pub planet: String,
    pub from_house: HouseNumber,
    pub label: &'static str,
}

/// Additional full-sight offsets beyond the universal 7th. House-based:
/// the offset counts houses forward of the seat, not degrees.
#[must_use]
pub fn special_offsets(body: Body) -> &'static [u8] {
    match body {
        Body::Mars => &[3, 7],
        Body::Jupiter => &[4, 8],
        Body::Saturn => &[2, 9],
        Body::Rahu | Body::Ketu => &[2, 10],
        Body::Sun | Body::Moon | Body::Mercury | Body::Venus | Body::Gulika | Body::Mandi => &[],
    }
}

/// Houses aspected by a planet seated in `seat`. Name-only points carry
/// the universal aspect alone. Output order is the universal 7th first,
/// then specials in table order.
#[must_use]
pub fn aspects_from(body: Option<Body>, seat: HouseNumber) -> SmallVec<[HouseAspect; 3]> {
    let mut aspects = SmallVec::new();
    let specials = body.map(special_offsets).unwrap_or(&[]);
    for &offset in UNIVERSAL_OFFSETS.iter().chain(specials) {
        aspects.push(HouseAspect {
            target: seat.advance(offset),
            label: HouseNumber::clamped(offset + 1).ordinal_label(),
        });
    }
    aspects
}

/// Reverse scan: every planet in the chart whose sight falls on `target`,
/// with seats resolved against the given ascendant sign (override applied
/// by the caller). Planets are visited in chart order.
#[must_use]
pub fn aspects_on_house(
    chart: &ChartData,
    ascendant: Rashi,
    target: HouseNumber,
) -> Vec<AspectOnHouse> {
    let mut found = Vec::new();
    for planet in &chart.planets {
        let seat = house_of_sign(ascendant, planet.sign);
        for aspect in aspects_from(planet.body, seat) {
            if aspect.target == target {
                found.push(AspectOnHouse {
                    planet: planet.name.clone(),
                    from_house: seat,
                    label: aspect.label,
                });
            }
        }
    }
    found
}
