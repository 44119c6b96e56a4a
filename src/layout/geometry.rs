use serde::{Deserialize, Serialize};

use crate::core::rashi::Rashi;
use crate::core::types::{Point, Viewport};

/// Shape class of a house cell. Placement rules key off this: edge
/// triangles are too narrow for two columns, grid cells and diamonds are
/// not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseShape {
    CenterDiamond,
    CornerTriangle,
    EdgeTriangle,
    GridCell,
}

/// House cell outline in pixels. South grid cells project as quads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum HouseFrame {
    Triangle([Point; 3]),
    Quad([Point; 4]),
}

impl HouseFrame {
    #[must_use]
    pub fn centroid(&self) -> Point {
        match self {
            HouseFrame::Triangle(points) => average(points.as_slice()),
            HouseFrame::Quad(points) => average(points.as_slice()),
        }
    }
}

fn average(points: &[Point]) -> Point {
    let count = points.len().max(1) as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Point::new(sx / count, sy / count)
}

/// Where a hover tooltip attaches for a house. `mirrored` is set when the
/// house sits on the right half of the chart square, so hosts open the
/// tooltip leftward instead of clipping offscreen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipAnchor {
    pub x: f64,
    pub y: f64,
    pub mirrored: bool,
}

/// The centered square all chart geometry is projected into. Fractional
/// table coordinates run over [0, 1] on both axes of this square.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartSquare {
    pub left_px: f64,
    pub top_px: f64,
    pub side_px: f64,
}

impl ChartSquare {
    #[must_use]
    pub fn from_viewport(viewport: Viewport) -> Self {
        let side = viewport.square_side();
        Self {
            left_px: (f64::from(viewport.width) - side) * 0.5,
            top_px: (f64::from(viewport.height) - side) * 0.5,
            side_px: side,
        }
    }

    #[must_use]
    pub fn project(self, fx: f64, fy: f64) -> Point {
        Point::new(
            self.left_px + fx * self.side_px,
            self.top_px + fy * self.side_px,
        )
    }
}

/// Fractional outline of a house cell over the unit chart square.
#[derive(Debug, Clone, Copy)]
pub(crate) enum FrameSpec {
    Triangle([(f64, f64); 3]),
    Quad([(f64, f64); 4]),
}

impl FrameSpec {
    pub(crate) fn project(self, square: ChartSquare) -> HouseFrame {
        match self {
            FrameSpec::Triangle(points) => {
                HouseFrame::Triangle(points.map(|(fx, fy)| square.project(fx, fy)))
            }
            FrameSpec::Quad(points) => {
                HouseFrame::Quad(points.map(|(fx, fy)| square.project(fx, fy)))
            }
        }
    }
}

/// One row of the declarative placement table: shape class, outline, sign
/// label anchor, planet slot origin, and the nudge applied to a lone
/// occupant. All coordinates are fractions of the chart square.
#[derive(Debug, Clone, Copy)]
pub(crate) struct HouseGeometrySpec {
    pub shape: HouseShape,
    pub frame: FrameSpec,
    pub sign_label: (f64, f64),
    pub slot_origin: (f64, f64),
    pub single_offset: (f64, f64),
}

/// North-style table, indexed by house index (house 1 at index 0). The
/// diamond chart is the unit square cut by both diagonals and the
/// midpoint diamond; houses run counterclockwise from the top-center
/// diamond. Label anchors hug each cell's inner vertex and slot origins
/// sit in the cell's visual pocket, clear of the cut lines.
pub(crate) const NORTH_HOUSE_TABLE: [HouseGeometrySpec; 12] = [
    HouseGeometrySpec {
        shape: HouseShape::CenterDiamond,
        frame: FrameSpec::Quad([(0.25, 0.25), (0.5, 0.0), (0.75, 0.25), (0.5, 0.5)]),
        sign_label: (0.5, 0.40),
        slot_origin: (0.5, 0.22),
        single_offset: (0.0, 0.0),
    },
    HouseGeometrySpec {
        shape: HouseShape::CornerTriangle,
        frame: FrameSpec::Triangle([(0.0, 0.0), (0.5, 0.0), (0.25, 0.25)]),
        sign_label: (0.25, 0.205),
        slot_origin: (0.25, 0.10),
        single_offset: (0.0, -0.015),
    },
    HouseGeometrySpec {
        shape: HouseShape::EdgeTriangle,
        frame: FrameSpec::Triangle([(0.0, 0.0), (0.25, 0.25), (0.0, 0.5)]),
        sign_label: (0.205, 0.25),
        slot_origin: (0.085, 0.25),
        single_offset: (-0.015, 0.0),
    },
    HouseGeometrySpec {
        shape: HouseShape::CenterDiamond,
        frame: FrameSpec::Quad([(0.0, 0.5), (0.25, 0.25), (0.5, 0.5), (0.25, 0.75)]),
        sign_label: (0.415, 0.5),
        slot_origin: (0.22, 0.5),
        single_offset: (0.0, 0.0),
    },
    HouseGeometrySpec {
        shape: HouseShape::EdgeTriangle,
        frame: FrameSpec::Triangle([(0.0, 0.5), (0.25, 0.75), (0.0, 1.0)]),
        sign_label: (0.205, 0.75),
        slot_origin: (0.085, 0.75),
        single_offset: (-0.015, 0.0),
    },
    HouseGeometrySpec {
        shape: HouseShape::CornerTriangle,
        frame: FrameSpec::Triangle([(0.0, 1.0), (0.25, 0.75), (0.5, 1.0)]),
        sign_label: (0.25, 0.795),
        slot_origin: (0.25, 0.90),
        single_offset: (0.0, 0.015),
    },
    HouseGeometrySpec {
        shape: HouseShape::CenterDiamond,
        frame: FrameSpec::Quad([(0.5, 0.5), (0.25, 0.75), (0.5, 1.0), (0.75, 0.75)]),
        sign_label: (0.5, 0.60),
        slot_origin: (0.5, 0.78),
        single_offset: (0.0, 0.0),
    },
    HouseGeometrySpec {
        shape: HouseShape::CornerTriangle,
        frame: FrameSpec::Triangle([(0.5, 1.0), (0.75, 0.75), (1.0, 1.0)]),
        sign_label: (0.75, 0.795),
        slot_origin: (0.75, 0.90),
        single_offset: (0.0, 0.015),
    },
    HouseGeometrySpec {
        shape: HouseShape::EdgeTriangle,
        frame: FrameSpec::Triangle([(1.0, 1.0), (0.75, 0.75), (1.0, 0.5)]),
        sign_label: (0.795, 0.75),
        slot_origin: (0.915, 0.75),
        single_offset: (0.015, 0.0),
    },
    HouseGeometrySpec {
        shape: HouseShape::CenterDiamond,
        frame: FrameSpec::Quad([(1.0, 0.5), (0.75, 0.75), (0.5, 0.5), (0.75, 0.25)]),
        sign_label: (0.585, 0.5),
        slot_origin: (0.78, 0.5),
        single_offset: (0.0, 0.0),
    },
    HouseGeometrySpec {
        shape: HouseShape::EdgeTriangle,
        frame: FrameSpec::Triangle([(1.0, 0.5), (0.75, 0.25), (1.0, 0.0)]),
        sign_label: (0.795, 0.25),
        slot_origin: (0.915, 0.25),
        single_offset: (0.015, 0.0),
    },
    HouseGeometrySpec {
        shape: HouseShape::CornerTriangle,
        frame: FrameSpec::Triangle([(1.0, 0.0), (0.75, 0.25), (0.5, 0.0)]),
        sign_label: (0.75, 0.205),
        slot_origin: (0.75, 0.10),
        single_offset: (0.0, -0.015),
    },
];

/// Skeleton of the north chart: outer border, both diagonals, and the
/// midpoint diamond.
pub(crate) const NORTH_FRAME_SEGMENTS: [((f64, f64), (f64, f64)); 10] = [
    ((0.0, 0.0), (1.0, 0.0)),
    ((1.0, 0.0), (1.0, 1.0)),
    ((1.0, 1.0), (0.0, 1.0)),
    ((0.0, 1.0), (0.0, 0.0)),
    ((0.0, 0.0), (1.0, 1.0)),
    ((1.0, 0.0), (0.0, 1.0)),
    ((0.5, 0.0), (1.0, 0.5)),
    ((1.0, 0.5), (0.5, 1.0)),
    ((0.5, 1.0), (0.0, 0.5)),
    ((0.0, 0.5), (0.5, 0.0)),
];

pub(crate) const SOUTH_CELL_SIZE: f64 = 0.25;

/// South-style sign anchoring: (row, column) of each sign's fixed cell in
/// the 4x4 ring, indexed by sign index. Pisces holds the top-left corner
/// and signs run clockwise; the central 2x2 block is empty.
pub(crate) const SOUTH_CELL_BY_SIGN: [(u8, u8); 12] = [
    (0, 1), // Aries
    (0, 2), // Taurus
    (0, 3), // Gemini
    (1, 3), // Cancer
    (2, 3), // Leo
    (3, 3), // Virgo
    (3, 2), // Libra
    (3, 1), // Scorpio
    (3, 0), // Sagittarius
    (2, 0), // Capricorn
    (1, 0), // Aquarius
    (0, 0), // Pisces
];

/// Skeleton of the south chart: outer border plus the ring separators.
/// Separator segments inside the empty central block are omitted.
pub(crate) const SOUTH_FRAME_SEGMENTS: [((f64, f64), (f64, f64)); 12] = [
    ((0.0, 0.0), (1.0, 0.0)),
    ((1.0, 0.0), (1.0, 1.0)),
    ((1.0, 1.0), (0.0, 1.0)),
    ((0.0, 1.0), (0.0, 0.0)),
    ((0.25, 0.0), (0.25, 1.0)),
    ((0.75, 0.0), (0.75, 1.0)),
    ((0.0, 0.25), (1.0, 0.25)),
    ((0.0, 0.75), (1.0, 0.75)),
    ((0.5, 0.0), (0.5, 0.25)),
    ((0.5, 0.75), (0.5, 1.0)),
    ((0.0, 0.5), (0.25, 0.5)),
    ((0.75, 0.5), (1.0, 0.5)),
];

/// Placement table row for a sign's fixed south cell.
pub(crate) fn south_spec_for_sign(sign: Rashi) -> HouseGeometrySpec {
    let (row, col) = SOUTH_CELL_BY_SIGN[sign.index() as usize];
    let left = f64::from(col) * SOUTH_CELL_SIZE;
    let top = f64::from(row) * SOUTH_CELL_SIZE;
    HouseGeometrySpec {
        shape: HouseShape::GridCell,
        frame: FrameSpec::Quad([
            (left, top),
            (left + SOUTH_CELL_SIZE, top),
            (left + SOUTH_CELL_SIZE, top + SOUTH_CELL_SIZE),
            (left, top + SOUTH_CELL_SIZE),
        ]),
        sign_label: (left + 0.035, top + 0.055),
        slot_origin: (left + 0.125, top + 0.145),
        single_offset: (0.0, 0.0),
    }
}

/// Corner slash marking the ascendant's cell in the south style.
pub(crate) fn south_lagna_slash(sign: Rashi) -> ((f64, f64), (f64, f64)) {
    let (row, col) = SOUTH_CELL_BY_SIGN[sign.index() as usize];
    let left = f64::from(col) * SOUTH_CELL_SIZE;
    let top = f64::from(row) * SOUTH_CELL_SIZE;
    ((left, top + 0.07), (left + 0.07, top))
}
