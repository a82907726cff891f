//! Headphones Widget Domain Models
//!
//! Typed contracts for the `find_headphones` tool: the catalog record,
//! the filter dimensions, and the tool input/output shapes. Deserialization
//! of [`FindHeadphonesInput`] is the schema validation for tool calls —
//! arguments outside the enumerated values are rejected before any
//! filtering runs.

use serde::{Deserialize, Serialize};

/// Price range of a headphone model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceBracket {
    Budget,
    Midrange,
    Premium,
}

impl PriceBracket {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Budget => "budget",
            Self::Midrange => "midrange",
            Self::Premium => "premium",
        }
    }
}

/// Primary activity a headphone model is tuned for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activity {
    Commuting,
    Gaming,
    Studio,
    Fitness,
}

impl Activity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Commuting => "commuting",
            Self::Gaming => "gaming",
            Self::Studio => "studio",
            Self::Fitness => "fitness",
        }
    }
}

/// Wearing style of a headphone model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Style {
    InEar,
    OnEar,
    OverEar,
}

impl Style {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InEar => "in-ear",
            Self::OnEar => "on-ear",
            Self::OverEar => "over-ear",
        }
    }
}

/// One filter dimension: either the explicit wildcard `"all"` or a
/// concrete value. An absent field means the same as `"all"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter<T> {
    All,
    #[serde(untagged)]
    Only(T),
}

impl<T: PartialEq> Filter<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(v) => v == value,
        }
    }
}

/// A catalog record.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Headphone {
    pub id: &'static str,
    pub name: &'static str,
    pub price_bracket: PriceBracket,
    pub activity: Activity,
    pub style: Style,
    pub price: &'static str,
    pub description: &'static str,
    pub cta_url: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<&'static str>,
}

/// Input for the `find_headphones` tool. Every field is optional; an
/// absent or `"all"` value places no constraint on that dimension.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FindHeadphonesInput {
    pub price_bracket: Option<Filter<PriceBracket>>,
    pub activity: Option<Filter<Activity>>,
    pub style: Option<Filter<Style>>,
}

/// Structured output for the `find_headphones` tool.
#[derive(Debug, Serialize)]
pub struct FindHeadphonesOutput {
    pub headphones: Vec<Headphone>,
    pub summary: String,
}
