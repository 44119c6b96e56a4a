use crate::core::body::Body;
use crate::core::chart::{ChartData, PlanetPosition};
use crate::core::rashi::normalize_degrees;

/// Combustion orb in degrees. Bodies with no entry (the Sun itself, the
/// nodes, shadow points, unresolved names) are evaluated like everything
/// else but can never pass the proximity test.
#[must_use]
pub fn combustion_orb_deg(body: Body) -> Option<f64> {
    match body {
        Body::Moon => Some(12.0),
        Body::Mars => Some(17.0),
        Body::Mercury => Some(14.0),
        Body::Jupiter => Some(11.0),
        Body::Venus => Some(10.0),
        Body::Saturn => Some(15.0),
        Body::Sun | Body::Rahu | Body::Ketu | Body::Gulika | Body::Mandi => None,
    }
}

/// Shortest angular distance between two longitudes, in [0, 180].
#[must_use]
pub fn angular_separation_deg(a_deg: f64, b_deg: f64) -> f64 {
    let a = normalize_degrees(a_deg);
    let b = normalize_degrees(b_deg);
    if !a.is_finite() || !b.is_finite() {
        return f64::INFINITY;
    }
    let diff = (a - b).abs();
    diff.min(360.0 - diff)
}

/// Whether a planet sits within its combustion orb of the Sun. Total:
/// charts without a Sun, name-only points, and orbless bodies all report
/// `false`.
#[must_use]
pub fn is_combust(chart: &ChartData, planet: &PlanetPosition) -> bool {
    let orb = match planet.body.and_then(combustion_orb_deg) {
        Some(orb) => orb,
        None => return false,
    };
    let sun = match chart.position_of(Body::Sun) {
        Some(sun) => sun,
        None => return false,
    };
    angular_separation_deg(planet.longitude_deg, sun.longitude_deg) <= orb
}
