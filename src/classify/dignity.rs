use serde::{Deserialize, Serialize};

use crate::core::body::Body;
use crate::core::rashi::Rashi;

/// Sign-based strength classification. Ordered roughly strongest to
/// weakest for display sorting; classification itself uses the precedence
/// documented on [`dignity_of`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dignity {
    Exalted,
    MoolaTrikona,
    OwnSign,
    Debilitated,
    Neutral,
}

/// Classical exaltation signs for the seven grahas. Nodes and shadow
/// points are exempt from dignity and never appear here.
#[must_use]
pub fn exaltation_sign(body: Body) -> Option<Rashi> {
    match body {
        Body::Sun => Some(Rashi::Aries),
        Body::Moon => Some(Rashi::Taurus),
        Body::Mars => Some(Rashi::Capricorn),
        Body::Mercury => Some(Rashi::Virgo),
        Body::Jupiter => Some(Rashi::Cancer),
        Body::Venus => Some(Rashi::Pisces),
        Body::Saturn => Some(Rashi::Libra),
        Body::Rahu | Body::Ketu | Body::Gulika | Body::Mandi => None,
    }
}

/// Debilitation is always the sign opposite exaltation.
#[must_use]
pub fn debilitation_sign(body: Body) -> Option<Rashi> {
    exaltation_sign(body).map(Rashi::opposite)
}

#[must_use]
pub fn own_signs(body: Body) -> &'static [Rashi] {
    match body {
        Body::Sun => &[Rashi::Leo],
        Body::Moon => &[Rashi::Cancer],
        Body::Mars => &[Rashi::Aries, Rashi::Scorpio],
        Body::Mercury => &[Rashi::Gemini, Rashi::Virgo],
        Body::Jupiter => &[Rashi::Sagittarius, Rashi::Pisces],
        Body::Venus => &[Rashi::Taurus, Rashi::Libra],
        Body::Saturn => &[Rashi::Capricorn, Rashi::Aquarius],
        Body::Rahu | Body::Ketu | Body::Gulika | Body::Mandi => &[],
    }
}

/// Moolatrikona portion as (sign, start degree, end degree), half-open on
/// the end. Degrees within a sign stay below 30 by construction, so the
/// Moon's 3..30 band covers the whole remainder of Taurus.
#[must_use]
pub fn moolatrikona_band(body: Body) -> Option<(Rashi, f64, f64)> {
    match body {
        Body::Sun => Some((Rashi::Leo, 0.0, 20.0)),
        Body::Moon => Some((Rashi::Taurus, 3.0, 30.0)),
        Body::Mars => Some((Rashi::Aries, 0.0, 12.0)),
        Body::Mercury => Some((Rashi::Virgo, 15.0, 20.0)),
        Body::Jupiter => Some((Rashi::Sagittarius, 0.0, 10.0)),
        Body::Venus => Some((Rashi::Libra, 0.0, 15.0)),
        Body::Saturn => Some((Rashi::Aquarius, 0.0, 20.0)),
        Body::Rahu | Body::Ketu | Body::Gulika | Body::Mandi => None,
    }
}

/// Total dignity classification for a body at a degree within a sign.
/// Precedence: exaltation, then debilitation, then the moolatrikona band,
/// then own sign, else neutral. Exaltation and debilitation never overlap
/// the other tiers for the classical tables, so the precedence only
/// decides within-sign refinements (e.g. Mercury in Virgo).
#[must_use]
pub fn dignity_of(body: Body, sign: Rashi, degree_in_sign: f64) -> Dignity {
    if exaltation_sign(body) == Some(sign) {
        return refine_in_sign(body, sign, degree_in_sign, Dignity::Exalted);
    }
    if debilitation_sign(body) == Some(sign) {
        return Dignity::Debilitated;
    }
    refine_in_sign(body, sign, degree_in_sign, Dignity::Neutral)
}

fn refine_in_sign(body: Body, sign: Rashi, degree_in_sign: f64, base: Dignity) -> Dignity {
    if base == Dignity::Exalted {
        // Mercury is the one graha exalted in a sign it also owns; the
        // exaltation band (0..15 Virgo) wins there, the rest of the sign
        // falls through to the moolatrikona/own refinement below.
        if body != Body::Mercury || degree_in_sign < 15.0 {
            return Dignity::Exalted;
        }
    }
    if let Some((band_sign, start, end)) = moolatrikona_band(body) {
        if band_sign == sign && degree_in_sign >= start && degree_in_sign < end {
            return Dignity::MoolaTrikona;
        }
    }
    if own_signs(body).contains(&sign) {
        return Dignity::OwnSign;
    }
    base
}
