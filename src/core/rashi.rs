use serde::{Deserialize, Serialize};

use crate::error::{KundaliError, KundaliResult};

pub const SIGN_COUNT: u8 = 12;
pub const SIGN_SPAN_DEG: f64 = 30.0;

/// Sidereal zodiac sign. The discriminant is the zero-based sign index
/// (Aries = 0 .. Pisces = 11), which all wheel arithmetic is done in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Rashi {
    Aries = 0,
    Taurus = 1,
    Gemini = 2,
    Cancer = 3,
    Leo = 4,
    Virgo = 5,
    Libra = 6,
    Scorpio = 7,
    Sagittarius = 8,
    Capricorn = 9,
    Aquarius = 10,
    Pisces = 11,
}

impl Rashi {
    pub const ALL: [Rashi; SIGN_COUNT as usize] = [
        Rashi::Aries,
        Rashi::Taurus,
        Rashi::Gemini,
        Rashi::Cancer,
        Rashi::Leo,
        Rashi::Virgo,
        Rashi::Libra,
        Rashi::Scorpio,
        Rashi::Sagittarius,
        Rashi::Capricorn,
        Rashi::Aquarius,
        Rashi::Pisces,
    ];

    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// One-based sign number (Aries = 1 .. Pisces = 12), the form charts
    /// print inside houses.
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Wraps any index into the wheel.
    #[must_use]
    pub fn from_index(index: u8) -> Self {
        Self::ALL[(index % SIGN_COUNT) as usize]
    }

    pub fn from_number(number: u8) -> KundaliResult<Self> {
        if (1..=SIGN_COUNT).contains(&number) {
            Ok(Self::ALL[(number - 1) as usize])
        } else {
            Err(KundaliError::InvalidData(format!(
                "sign number out of range 1..=12: {number}"
            )))
        }
    }

    /// Sign containing an ecliptic longitude. Total: the longitude is
    /// normalized into [0, 360) first and the index clamped so float edge
    /// cases never leave the wheel; non-finite input falls back to Aries.
    #[must_use]
    pub fn from_longitude(longitude_deg: f64) -> Self {
        let normalized = normalize_degrees(longitude_deg);
        if !normalized.is_finite() {
            return Rashi::Aries;
        }
        let index = (normalized / SIGN_SPAN_DEG) as usize;
        Self::ALL[index.min(SIGN_COUNT as usize - 1)]
    }

    /// Sign reached by walking `count` signs forward (negative walks back).
    #[must_use]
    pub fn offset(self, count: i32) -> Self {
        let index = (i32::from(self.index()) + count).rem_euclid(i32::from(SIGN_COUNT));
        Self::ALL[index as usize]
    }

    #[must_use]
    pub fn opposite(self) -> Self {
        self.offset(6)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Rashi::Aries => "Aries",
            Rashi::Taurus => "Taurus",
            Rashi::Gemini => "Gemini",
            Rashi::Cancer => "Cancer",
            Rashi::Leo => "Leo",
            Rashi::Virgo => "Virgo",
            Rashi::Libra => "Libra",
            Rashi::Scorpio => "Scorpio",
            Rashi::Sagittarius => "Sagittarius",
            Rashi::Capricorn => "Capricorn",
            Rashi::Aquarius => "Aquarius",
            Rashi::Pisces => "Pisces",
        }
    }
}

/// Normalizes an angle into [0, 360). Non-finite input is passed through
/// unchanged; callers that must exclude it validate separately.
#[must_use]
pub fn normalize_degrees(value_deg: f64) -> f64 {
    if !value_deg.is_finite() {
        return value_deg;
    }
    let wrapped = value_deg % 360.0;
    if wrapped < 0.0 { wrapped + 360.0 } else { wrapped }
}

/// Splits a longitude into its sign and the degree offset within that sign.
#[must_use]
pub fn split_longitude(longitude_deg: f64) -> (Rashi, f64) {
    let sign = Rashi::from_longitude(longitude_deg);
    let normalized = normalize_degrees(longitude_deg);
    let offset = if normalized.is_finite() {
        (normalized - f64::from(sign.index()) * SIGN_SPAN_DEG).clamp(0.0, SIGN_SPAN_DEG)
    } else {
        0.0
    };
    (sign, offset)
}

#[cfg(test)]
mod tests {
    use super::{Rashi, normalize_degrees, split_longitude};

    #[test]
    fn longitudes_map_onto_sign_boundaries() {
        assert_eq!(Rashi::from_longitude(0.0), Rashi::Aries);
        assert_eq!(Rashi::from_longitude(29.999), Rashi::Aries);
        assert_eq!(Rashi::from_longitude(30.0), Rashi::Taurus);
        assert_eq!(Rashi::from_longitude(359.999), Rashi::Pisces);
        assert_eq!(Rashi::from_longitude(360.0), Rashi::Aries);
    }

    #[test]
    fn negative_and_oversized_longitudes_normalize() {
        assert_eq!(normalize_degrees(-30.0), 330.0);
        assert_eq!(Rashi::from_longitude(-0.5), Rashi::Pisces);
        assert_eq!(Rashi::from_longitude(720.0 + 45.0), Rashi::Taurus);
    }

    #[test]
    fn non_finite_longitude_stays_on_the_wheel() {
        assert_eq!(Rashi::from_longitude(f64::NAN), Rashi::Aries);
        assert_eq!(Rashi::from_longitude(f64::INFINITY), Rashi::Aries);
    }

    #[test]
    fn offsets_wrap_in_both_directions() {
        assert_eq!(Rashi::Pisces.offset(1), Rashi::Aries);
        assert_eq!(Rashi::Aries.offset(-1), Rashi::Pisces);
        assert_eq!(Rashi::Leo.opposite(), Rashi::Aquarius);
    }

    #[test]
    fn split_longitude_returns_degree_within_sign() {
        let (sign, degree) = split_longitude(95.25);
        assert_eq!(sign, Rashi::Cancer);
        assert!((degree - 5.25).abs() < 1e-9);
    }
}
