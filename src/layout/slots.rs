use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::layout::geometry::HouseShape;

/// Occupancy band a house's slot sub-layout falls into. Glyph sizing is
/// inverse to the band: lone occupants draw largest, dense columns
/// smallest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotBand {
    Single,
    Clustered,
    Dense,
}

impl SlotBand {
    #[must_use]
    pub fn for_count(count: usize) -> Self {
        match count {
            0 | 1 => SlotBand::Single,
            2..=4 => SlotBand::Clustered,
            _ => SlotBand::Dense,
        }
    }
}

/// Column/row spacing for a shape, as fractions of the chart square side.
/// Edge triangles are narrow and never get a second column.
fn gaps_for(shape: HouseShape) -> (f64, f64) {
    match shape {
        HouseShape::CenterDiamond => (0.055, 0.052),
        HouseShape::CornerTriangle => (0.05, 0.042),
        HouseShape::EdgeTriangle => (0.0, 0.045),
        HouseShape::GridCell => (0.05, 0.048),
    }
}

fn column_only(shape: HouseShape) -> bool {
    matches!(shape, HouseShape::EdgeTriangle)
}

const DENSE_ROW_FACTOR: f64 = 0.72;

/// Fractional slot coordinates for `count` occupants of a house. Total
/// and deterministic; every returned coordinate pair is distinct for
/// counts the chart can physically hold.
///
/// Band rules: one occupant takes the shape's single offset; two to four
/// form a symmetric two-column grid (or one column in narrow shapes),
/// columns at origin ± gap so they straddle the center; five or more
/// collapse to one dense column.
pub(crate) fn plan_slots(
    shape: HouseShape,
    origin: (f64, f64),
    single_offset: (f64, f64),
    count: usize,
) -> SmallVec<[(f64, f64); 8]> {
    let mut points = SmallVec::new();
    if count == 0 {
        return points;
    }

    let (origin_x, origin_y) = origin;
    if !origin_x.is_finite() || !origin_y.is_finite() {
        // Center-only fallback keeps the function total.
        points.extend(std::iter::repeat((0.5, 0.5)).take(count));
        return points;
    }

    let (col_gap, row_gap) = gaps_for(shape);
    match SlotBand::for_count(count) {
        SlotBand::Single => {
            points.push((origin_x + single_offset.0, origin_y + single_offset.1));
        }
        SlotBand::Clustered if column_only(shape) => {
            extend_column(&mut points, origin_x, origin_y, row_gap, count);
        }
        SlotBand::Clustered => {
            extend_grid(&mut points, origin_x, origin_y, col_gap, row_gap, count);
        }
        SlotBand::Dense => {
            extend_column(
                &mut points,
                origin_x,
                origin_y,
                row_gap * DENSE_ROW_FACTOR,
                count,
            );
        }
    }
    points
}

/// Single vertical column centered on the origin.
fn extend_column(
    points: &mut SmallVec<[(f64, f64); 8]>,
    origin_x: f64,
    origin_y: f64,
    row_gap: f64,
    count: usize,
) {
    let mid = (count as f64 - 1.0) * 0.5;
    for index in 0..count {
        let y = origin_y + (index as f64 - mid) * row_gap;
        points.push((origin_x, y));
    }
}

/// Row-major two-column grid. Columns sit at origin ± col_gap; an odd
/// trailing occupant centers on the origin column.
fn extend_grid(
    points: &mut SmallVec<[(f64, f64); 8]>,
    origin_x: f64,
    origin_y: f64,
    col_gap: f64,
    row_gap: f64,
    count: usize,
) {
    let rows = count.div_ceil(2);
    let row_mid = (rows as f64 - 1.0) * 0.5;
    for index in 0..count {
        let row = index / 2;
        let y = origin_y + (row as f64 - row_mid) * row_gap;
        let is_odd_tail = index == count - 1 && count % 2 == 1;
        let x = if is_odd_tail {
            origin_x
        } else if index % 2 == 0 {
            origin_x - col_gap
        } else {
            origin_x + col_gap
        };
        points.push((x, y));
    }
}
