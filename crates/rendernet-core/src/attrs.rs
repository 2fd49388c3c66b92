//! Participant attributes: project size, urgency, and pricing tier.
//!
//! All three are three-valued enums with a lowercase word form
//! (`small`/`medium`/`large`, `low`/`medium`/`high`) used by the
//! tabular interfaces.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// Size of an artist's rendering project.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProjectSize {
    /// Size factor 1.
    Small,
    /// Size factor 2.
    Medium,
    /// Size factor 3.
    Large,
}

impl ProjectSize {
    /// Every variant, in ascending order.
    pub const ALL: [ProjectSize; 3] = [Self::Small, Self::Medium, Self::Large];

    /// Lowercase word form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

/// How urgently an artist wants the job done.
///
/// Carried as data; the allocation rule does not consume it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Urgency {
    /// Low urgency.
    Low,
    /// Medium urgency.
    Medium,
    /// High urgency.
    High,
}

impl Urgency {
    /// Every variant, in ascending order.
    pub const ALL: [Urgency; 3] = [Self::Low, Self::Medium, Self::High];

    /// Lowercase word form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Price band a node charges in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PricingTier {
    /// Rate 10 per size unit.
    Low,
    /// Rate 20 per size unit.
    Medium,
    /// Rate 30 per size unit.
    High,
}

impl PricingTier {
    /// Every variant, in ascending order.
    pub const ALL: [PricingTier; 3] = [Self::Low, Self::Medium, Self::High];

    /// Lowercase word form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// A word that does not name any variant of the target attribute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseAttributeError {
    /// Attribute being parsed (e.g. `"project size"`).
    pub attribute: &'static str,
    /// The rejected input.
    pub value: String,
}

impl fmt::Display for ParseAttributeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} '{}'", self.attribute, self.value)
    }
}

impl Error for ParseAttributeError {}

macro_rules! word_enum {
    ($ty:ty, $attribute:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = ParseAttributeError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .into_iter()
                    .find(|v| v.as_str() == s.trim())
                    .ok_or_else(|| ParseAttributeError {
                        attribute: $attribute,
                        value: s.to_string(),
                    })
            }
        }
    };
}

word_enum!(ProjectSize, "project size");
word_enum!(Urgency, "urgency");
word_enum!(PricingTier, "pricing tier");
