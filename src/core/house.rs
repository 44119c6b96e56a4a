use serde::{Deserialize, Serialize};

use crate::core::rashi::{Rashi, SIGN_COUNT};

/// One-based house number. The wrapped value is always in 1..=12; all
/// constructors enforce it, so wheel arithmetic never leaves the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HouseNumber(u8);

impl HouseNumber {
    pub const FIRST: HouseNumber = HouseNumber(1);

    pub const ALL: [HouseNumber; 12] = {
        let mut all = [HouseNumber(1); 12];
        let mut number = 1u8;
        while number <= 12 {
            all[(number - 1) as usize] = HouseNumber(number);
            number += 1;
        }
        all
    };

    #[must_use]
    pub const fn new(number: u8) -> Option<Self> {
        if number >= 1 && number <= 12 {
            Some(Self(number))
        } else {
            None
        }
    }

    /// Lenient constructor for boundary input: anything outside 1..=12
    /// falls back to the first house.
    #[must_use]
    pub const fn clamped(number: u8) -> Self {
        match Self::new(number) {
            Some(house) => house,
            None => Self::FIRST,
        }
    }

    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// House reached by counting `offset` houses forward of this one, with
    /// offset 0 returning `self`. Counting is inclusive of the start in the
    /// traditional sense: the "7th from" house 1 is `advance(6)`.
    #[must_use]
    pub fn advance(self, offset: u8) -> Self {
        let index = (u16::from(self.0) - 1 + u16::from(offset)) % u16::from(SIGN_COUNT);
        Self(index as u8 + 1)
    }

    /// Ordinal label used for aspect annotations ("3rd", "7th", ...).
    #[must_use]
    pub const fn ordinal_label(self) -> &'static str {
        match self.0 {
            1 => "1st",
            2 => "2nd",
            3 => "3rd",
            4 => "4th",
            5 => "5th",
            6 => "6th",
            7 => "7th",
            8 => "8th",
            9 => "9th",
            10 => "10th",
            11 => "11th",
            _ => "12th",
        }
    }
}

/// Sign occupying a house for the given ascendant sign. House 1 carries the
/// ascendant sign itself; signs proceed zodiacally from there.
#[must_use]
pub fn sign_for_house(ascendant: Rashi, house: HouseNumber) -> Rashi {
    ascendant.offset(house.index() as i32)
}

/// Inverse of [`sign_for_house`]: the house a sign occupies for the given
/// ascendant sign.
#[must_use]
pub fn house_of_sign(ascendant: Rashi, sign: Rashi) -> HouseNumber {
    let offset = (i32::from(sign.index()) - i32::from(ascendant.index()))
        .rem_euclid(i32::from(SIGN_COUNT));
    HouseNumber::clamped(offset as u8 + 1)
}
