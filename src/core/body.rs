use serde::{Deserialize, Serialize};

/// Bodies the engine knows by name. Charts may carry additional points
/// (special lagnas, upagrahas beyond Gulika/Mandi); those stay name-only
/// and skip every body-keyed classifier table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
    Mars,
    Mercury,
    Jupiter,
    Venus,
    Saturn,
    Rahu,
    Ketu,
    Gulika,
    Mandi,
}

impl Body {
    pub const ALL: [Body; 11] = [
        Body::Sun,
        Body::Moon,
        Body::Mars,
        Body::Mercury,
        Body::Jupiter,
        Body::Venus,
        Body::Saturn,
        Body::Rahu,
        Body::Ketu,
        Body::Gulika,
        Body::Mandi,
    ];

    /// The seven classical grahas plus the two nodes, in the order wire
    /// matrices enumerate pairs.
    pub const NAVAGRAHA: [Body; 9] = [
        Body::Sun,
        Body::Moon,
        Body::Mars,
        Body::Mercury,
        Body::Jupiter,
        Body::Venus,
        Body::Saturn,
        Body::Rahu,
        Body::Ketu,
    ];

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let trimmed = name.trim();
        Self::ALL
            .into_iter()
            .find(|body| body.name().eq_ignore_ascii_case(trimmed))
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Moon => "Moon",
            Body::Mars => "Mars",
            Body::Mercury => "Mercury",
            Body::Jupiter => "Jupiter",
            Body::Venus => "Venus",
            Body::Saturn => "Saturn",
            Body::Rahu => "Rahu",
            Body::Ketu => "Ketu",
            Body::Gulika => "Gulika",
            Body::Mandi => "Mandi",
        }
    }

    /// Curated two-letter glyph code drawn inside houses.
    #[must_use]
    pub const fn short_code(self) -> &'static str {
        match self {
            Body::Sun => "Su",
            Body::Moon => "Mo",
            Body::Mars => "Ma",
            Body::Mercury => "Me",
            Body::Jupiter => "Ju",
            Body::Venus => "Ve",
            Body::Saturn => "Sa",
            Body::Rahu => "Ra",
            Body::Ketu => "Ke",
            Body::Gulika => "Gk",
            Body::Mandi => "Md",
        }
    }

    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Rahu, Ketu and the shadow points have no disc to swallow; they never
    /// enter combustion or special-aspect tables keyed on true grahas.
    #[must_use]
    pub const fn is_node(self) -> bool {
        matches!(self, Body::Rahu | Body::Ketu)
    }

    #[must_use]
    pub const fn is_shadow_point(self) -> bool {
        matches!(self, Body::Gulika | Body::Mandi)
    }
}

/// Two-letter display code for any planet name: curated table first, then
/// a generated fallback (first two characters, title-cased) so unknown
/// points still draw a stable glyph.
#[must_use]
pub fn display_code(name: &str) -> String {
    if let Some(body) = Body::from_name(name) {
        return body.short_code().to_owned();
    }
    let mut chars = name.trim().chars();
    let first = chars.next();
    let second = chars.next();
    match (first, second) {
        (Some(a), Some(b)) => {
            let mut code = String::new();
            code.extend(a.to_uppercase());
            code.extend(b.to_lowercase());
            code
        }
        (Some(a), None) => a.to_uppercase().collect(),
        (None, _) => "?".to_owned(),
    }
}
