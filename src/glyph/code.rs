//! Gardiner codes and the character-database names they map to.
//!
//! A Gardiner code (`A1`, `D21`, `Aa31b`) and a glyph name
//! (`EGYPTIAN HIEROGLYPH AA031B`) identify the same sign. The two spellings
//! differ in case and padding:
//!
//! | part     | Gardiner code         | glyph name            |
//! |----------|-----------------------|-----------------------|
//! | category | `A`, `Aa`, `NL`       | `A`, `AA`, `NL`       |
//! | number   | `1`, `21` (unpadded)  | `001`, `021`          |
//! | variant  | lowercase `b`         | uppercase `B`         |
//!
//! All case and padding conversion between the two lives in this module.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{SignError, SignResult};

/// Prefix shared by every named sign in the Egyptian Hieroglyphs block.
pub const NAME_PREFIX: &str = "EGYPTIAN HIEROGLYPH ";

/// Highest sign number a three-digit code can carry.
pub const MAX_NUMBER: u16 = 999;

static CODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<category>[A-Za-z]{1,3})(?P<number>[0-9]{1,3})(?P<variant>[a-z]+)?$").unwrap()
});

static NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^EGYPTIAN HIEROGLYPH (?P<category>[A-Z]{1,3})(?P<number>[0-9]{1,3})(?P<variant>[A-Z]+)?$")
        .unwrap()
});

/// A parsed Gardiner Sign List code.
///
/// The category is stored in its canonical sign-list spelling (see
/// [`canonical_category`]), so `a1` and `A1` parse to the same code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GardinerCode {
    category: String,
    number: u16,
    variant: Option<String>,
}

impl GardinerCode {
    /// Build a code from its parts, validating each against the code shape.
    pub fn new(category: &str, number: u16, variant: Option<&str>) -> SignResult<Self> {
        let category_ok = (1..=3).contains(&category.len())
            && category.chars().all(|c| c.is_ascii_alphabetic());
        let variant_ok = variant
            .is_none_or(|v| !v.is_empty() && v.chars().all(|c| c.is_ascii_lowercase()));

        if !category_ok || number > MAX_NUMBER || !variant_ok {
            return Err(SignError::MalformedCode {
                token: format!("{category}{number}{}", variant.unwrap_or_default()),
            });
        }

        Ok(Self {
            category: canonical_category(category),
            number,
            variant: variant.map(str::to_string),
        })
    }

    /// Parse a single code token such as `Aa31b`.
    ///
    /// The whole token must match; trailing characters (`A1B`, `Z9999`) are
    /// rejected rather than silently ignored.
    pub fn parse(token: &str) -> SignResult<Self> {
        let malformed = || SignError::MalformedCode {
            token: token.to_string(),
        };
        let caps = CODE_RE.captures(token).ok_or_else(malformed)?;
        let number = caps["number"].parse::<u16>().map_err(|_| malformed())?;

        Ok(Self {
            category: canonical_category(&caps["category"]),
            number,
            variant: caps.name("variant").map(|m| m.as_str().to_string()),
        })
    }

    /// Recover the code from a character-database name.
    ///
    /// Returns `None` when the name does not follow the
    /// `EGYPTIAN HIEROGLYPH {CATEGORY}{digits}{VARIANT}` convention, e.g. for
    /// format controls (`EGYPTIAN HIEROGLYPH VERTICAL JOINER`) or for
    /// characters outside the block.
    pub fn from_glyph_name(name: &str) -> Option<Self> {
        let caps = NAME_RE.captures(name)?;
        // Leading zeros vanish here: "001" -> 1.
        let number = caps["number"].parse::<u16>().ok()?;

        Some(Self {
            category: canonical_category(&caps["category"]),
            number,
            variant: caps.name("variant").map(|m| m.as_str().to_lowercase()),
        })
    }

    /// The database name for this code.
    pub fn glyph_name(&self) -> GlyphName {
        GlyphName(format!(
            "{NAME_PREFIX}{}{:03}{}",
            self.category.to_uppercase(),
            self.number,
            self.variant.as_deref().unwrap_or_default().to_uppercase(),
        ))
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn number(&self) -> u16 {
        self.number
    }

    pub fn variant(&self) -> Option<&str> {
        self.variant.as_deref()
    }
}

impl fmt::Display for GardinerCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.category, self.number)?;
        if let Some(variant) = &self.variant {
            f.write_str(variant)?;
        }
        Ok(())
    }
}

impl FromStr for GardinerCode {
    type Err = SignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A canonical character-database name, e.g. `EGYPTIAN HIEROGLYPH AA001B`.
///
/// Only constructible from a [`GardinerCode`], so it always has the
/// normalized shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GlyphName(String);

impl GlyphName {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for GlyphName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&GardinerCode> for GlyphName {
    fn from(code: &GardinerCode) -> Self {
        code.glyph_name()
    }
}

/// Canonical sign-list spelling of a category.
///
/// Single-letter and uppercase series (`A`, `NL`, `NU`) are uppercase; the
/// doubled series is written `Aa`.
pub fn canonical_category(category: &str) -> String {
    let upper = category.to_ascii_uppercase();
    if upper == "AA" { "Aa".to_string() } else { upper }
}
