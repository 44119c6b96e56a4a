pub mod geometry;
pub mod slots;

pub use geometry::{ChartSquare, HouseFrame, HouseShape, TooltipAnchor};
pub use slots::SlotBand;

use serde::{Deserialize, Serialize};

use crate::classify::{PlanetStatus, classify};
use crate::core::body::{Body, display_code};
use crate::core::chart::ChartData;
use crate::core::house::{HouseNumber, house_of_sign, sign_for_house};
use crate::core::rashi::Rashi;
use crate::core::types::{Point, Viewport};
use crate::layout::geometry::{HouseGeometrySpec, NORTH_HOUSE_TABLE, south_spec_for_sign};
use crate::layout::slots::plan_slots;

/// The two supported grid topologies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GridStyle {
    NorthDiamond,
    SouthGrid,
}

impl GridStyle {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            GridStyle::NorthDiamond => "north_diamond",
            GridStyle::SouthGrid => "south_grid",
        }
    }
}

/// A planet placed at concrete draw coordinates, carrying its classifier
/// verdict so renderers never re-derive it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedPlanet {
    pub name: String,
    pub body: Option<Body>,
    /// Two-letter glyph code (curated or generated).
    pub code: String,
    pub x: f64,
    pub y: f64,
    pub degree_in_sign: f64,
    pub retrograde: bool,
    pub status: PlanetStatus,
}

/// One annotated house: resolved sign, fixed geometry, occupants in chart
/// order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseLayout {
    pub house: HouseNumber,
    pub sign: Rashi,
    pub shape: HouseShape,
    pub frame: HouseFrame,
    pub sign_label: Point,
    pub tooltip: TooltipAnchor,
    pub band: SlotBand,
    pub occupants: Vec<PlacedPlanet>,
}

/// Full annotated layout for one render cycle. Houses are ordered 1..=12.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub style: GridStyle,
    pub viewport: Viewport,
    /// Ascendant sign after any view-level override.
    pub ascendant: Rashi,
    pub houses: Vec<HouseLayout>,
}

impl ChartLayout {
    #[must_use]
    pub fn house(&self, house: HouseNumber) -> &HouseLayout {
        &self.houses[house.index()]
    }

    #[must_use]
    pub fn house_of_planet(&self, name: &str) -> Option<HouseNumber> {
        self.houses.iter().find_map(|entry| {
            entry
                .occupants
                .iter()
                .any(|occupant| occupant.name.eq_ignore_ascii_case(name))
                .then_some(entry.house)
        })
    }

    #[must_use]
    pub fn placed_planet(&self, name: &str) -> Option<&PlacedPlanet> {
        self.houses.iter().find_map(|entry| {
            entry
                .occupants
                .iter()
                .find(|occupant| occupant.name.eq_ignore_ascii_case(name))
        })
    }

    /// Currently resolved (house, sign) pairs, the form hosts consume.
    #[must_use]
    pub fn resolved_signs(&self) -> Vec<(HouseNumber, Rashi)> {
        self.houses
            .iter()
            .map(|entry| (entry.house, entry.sign))
            .collect()
    }

    #[must_use]
    pub fn occupant_count(&self) -> usize {
        self.houses.iter().map(|entry| entry.occupants.len()).sum()
    }
}

/// Lays out a chart into 12 annotated houses. Total: any chart that
/// passed boundary validation produces a layout, and an empty chart
/// produces the bare skeleton (12 signed houses, no occupants).
///
/// The override reinterprets the house-to-sign mapping only; chart data
/// is read, never rewritten. Coordinate distinctness of co-located
/// occupants holds for any valid (non-zero) viewport.
#[must_use]
pub fn layout_chart(
    chart: &ChartData,
    style: GridStyle,
    ascendant_override: Option<Rashi>,
    viewport: Viewport,
) -> ChartLayout {
    let ascendant = ascendant_override.unwrap_or_else(|| chart.ascendant_sign());
    let square = ChartSquare::from_viewport(viewport);

    let mut seats: [Vec<usize>; 12] = Default::default();
    for (index, planet) in chart.planets.iter().enumerate() {
        let seat = house_of_sign(ascendant, planet.sign);
        seats[seat.index()].push(index);
    }

    let mut houses = Vec::with_capacity(12);
    for house in HouseNumber::ALL {
        let sign = sign_for_house(ascendant, house);
        let spec = spec_for(style, house, sign);
        let occupant_indices = &seats[house.index()];
        let slots = plan_slots(
            spec.shape,
            spec.slot_origin,
            spec.single_offset,
            occupant_indices.len(),
        );

        let occupants = occupant_indices
            .iter()
            .zip(slots.iter())
            .map(|(&planet_index, &(fx, fy))| {
                let planet = &chart.planets[planet_index];
                let point = square.project(fx, fy);
                PlacedPlanet {
                    name: planet.name.clone(),
                    body: planet.body,
                    code: display_code(&planet.name),
                    x: point.x,
                    y: point.y,
                    degree_in_sign: planet.degree_in_sign,
                    retrograde: planet.retrograde,
                    status: classify(chart, planet),
                }
            })
            .collect();

        let frame = spec.frame.project(square);
        houses.push(HouseLayout {
            house,
            sign,
            shape: spec.shape,
            frame,
            sign_label: square.project(spec.sign_label.0, spec.sign_label.1),
            tooltip: tooltip_anchor(frame, square),
            band: SlotBand::for_count(occupant_indices.len()),
            occupants,
        });
    }

    ChartLayout {
        style,
        viewport,
        ascendant,
        houses,
    }
}

fn spec_for(style: GridStyle, house: HouseNumber, sign: Rashi) -> HouseGeometrySpec {
    match style {
        GridStyle::NorthDiamond => NORTH_HOUSE_TABLE[house.index()],
        GridStyle::SouthGrid => south_spec_for_sign(sign),
    }
}

const TOOLTIP_OFFSET_FRACTION: f64 = 0.04;

/// Anchor next to the house, flipped to the left for houses on the right
/// half of the chart square so tooltips never open offscreen.
fn tooltip_anchor(frame: HouseFrame, square: ChartSquare) -> TooltipAnchor {
    let centroid = frame.centroid();
    let center_x = square.left_px + square.side_px * 0.5;
    let offset = square.side_px * TOOLTIP_OFFSET_FRACTION;
    let mirrored = centroid.x > center_x;
    TooltipAnchor {
        x: if mirrored {
            centroid.x - offset
        } else {
            centroid.x + offset
        },
        y: centroid.y,
        mirrored,
    }
}

#[cfg(test)]
mod tests {
    use super::{GridStyle, layout_chart};
    use crate::core::chart::{ChartData, PlanetPosition};
    use crate::core::house::HouseNumber;
    use crate::core::rashi::Rashi;
    use crate::core::types::Viewport;

    fn viewport() -> Viewport {
        Viewport::new(400, 400)
    }

    #[test]
    fn empty_chart_still_produces_twelve_signed_houses() {
        let chart = ChartData::default();
        let layout = layout_chart(&chart, GridStyle::NorthDiamond, None, viewport());
        assert_eq!(layout.houses.len(), 12);
        assert_eq!(layout.ascendant, Rashi::Aries);
        assert!(layout.houses.iter().all(|house| house.occupants.is_empty()));
    }

    #[test]
    fn planets_seat_relative_to_the_ascendant() {
        // Scorpio ascendant; Sun in Capricorn seats in house 3.
        let chart = ChartData::new(220.0, vec![PlanetPosition::new("Sun", 280.0, false)]);
        let layout = layout_chart(&chart, GridStyle::NorthDiamond, None, viewport());
        assert_eq!(layout.house_of_planet("Sun"), HouseNumber::new(3));
        assert_eq!(layout.house(HouseNumber::clamped(3)).sign, Rashi::Capricorn);
    }

    #[test]
    fn override_reseats_without_touching_chart_data() {
        let chart = ChartData::new(220.0, vec![PlanetPosition::new("Sun", 280.0, false)]);
        let layout = layout_chart(
            &chart,
            GridStyle::NorthDiamond,
            Some(Rashi::Capricorn),
            viewport(),
        );
        assert_eq!(layout.house_of_planet("Sun"), Some(HouseNumber::FIRST));
        assert_eq!(chart.ascendant_sign(), Rashi::Scorpio);
    }

    #[test]
    fn tooltip_anchors_mirror_on_the_right_half() {
        let chart = ChartData::default();
        let layout = layout_chart(&chart, GridStyle::NorthDiamond, None, viewport());
        let left_house = layout.house(HouseNumber::clamped(4));
        let right_house = layout.house(HouseNumber::clamped(10));
        assert!(!left_house.tooltip.mirrored);
        assert!(right_house.tooltip.mirrored);
    }

    #[test]
    fn south_layout_keeps_signs_fixed_under_override() {
        let chart = ChartData::new(10.0, vec![]);
        let natal = layout_chart(&chart, GridStyle::SouthGrid, None, viewport());
        let overridden = layout_chart(&chart, GridStyle::SouthGrid, Some(Rashi::Leo), viewport());
        // House 1 follows the override sign; that sign's cell frame is
        // the fixed Leo cell.
        assert_eq!(overridden.house(HouseNumber::FIRST).sign, Rashi::Leo);
        let leo_frame = natal
            .houses
            .iter()
            .find(|house| house.sign == Rashi::Leo)
            .map(|house| house.frame)
            .expect("leo house present");
        assert_eq!(overridden.house(HouseNumber::FIRST).frame, leo_frame);
    }
}
