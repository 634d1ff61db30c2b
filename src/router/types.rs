//! Classification result types.
//!
//! These types form the crate's output contract: every classify call
//! returns a complete [`Classification`], and the serialized form (camel
//! case keys, lowercase tags) is what downstream services consume.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::entity::EntityBundle;

/// What the user is trying to do with their query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    /// Looking up an ingredient or nutrient.
    Ingredient,
    /// Looking up a product line or brand.
    Product,
    /// Describing a complaint and seeking relief.
    Symptom,
    /// Asking an open question.
    Question,
    /// Stating a personal circumstance that constrains advice.
    Condition,
    /// Weighing alternatives against each other.
    Comparison,
    /// No signal recognized.
    Unknown,
}

impl Intent {
    /// The serialized tag for this intent.
    pub fn as_str(self) -> &'static str {
        match self {
            Intent::Ingredient => "ingredient",
            Intent::Product => "product",
            Intent::Symptom => "symptom",
            Intent::Question => "question",
            Intent::Condition => "condition",
            Intent::Comparison => "comparison",
            Intent::Unknown => "unknown",
        }
    }

    /// The default destination for this intent.
    ///
    /// Catalog-shaped intents go to search, consultative ones to the
    /// concierge. Some cascade tiers override this mapping for `Unknown`
    /// (an empty query routes to search, a long prose query to the
    /// concierge), so the pairing in a [`Classification`] is decided by
    /// the cascade, not by this function alone.
    pub fn destination(self) -> Destination {
        match self {
            Intent::Ingredient | Intent::Product => Destination::Search,
            Intent::Symptom
            | Intent::Question
            | Intent::Condition
            | Intent::Comparison
            | Intent::Unknown => Destination::Concierge,
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which downstream surface should handle the query.
///
/// Advisory: it is a routing recommendation, not a promise that the
/// surface will produce good results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Destination {
    /// Structured catalog search.
    Search,
    /// The conversational concierge.
    Concierge,
}

impl Destination {
    /// The serialized tag for this destination.
    pub fn as_str(self) -> &'static str {
        match self {
            Destination::Search => "search",
            Destination::Concierge => "concierge",
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How sure the pipeline is about the intent it picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// An explicit construction or a high-priority dictionary hit.
    High,
    /// Dictionary evidence of the weakest priority tier.
    Medium,
    /// Shape heuristics and fallbacks.
    Low,
}

impl Confidence {
    /// The serialized tag for this confidence level.
    pub fn as_str(self) -> &'static str {
        match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which tier of the cascade produced the decision.
///
/// Provenance only; it says where the answer came from, not how good it
/// is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// A rule family matched.
    Pattern,
    /// Dictionary evidence decided.
    Dictionary,
    /// Reserved for a future model-backed escalation path. The pipeline
    /// never produces this value itself.
    Ai,
    /// Shape heuristics or the terminal default.
    Fallback,
}

impl Method {
    /// The serialized tag for this method.
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Pattern => "pattern",
            Method::Dictionary => "dictionary",
            Method::Ai => "ai",
            Method::Fallback => "fallback",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The complete, immutable outcome of classifying one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    /// The resolved intent.
    pub intent: Intent,
    /// The recommended downstream surface.
    pub destination: Destination,
    /// How sure the pipeline is.
    pub confidence: Confidence,
    /// Everything the extractors found, regardless of which tier decided.
    pub entities: EntityBundle,
    /// The input after normalization; cache keys build on this.
    pub normalized_input: String,
    /// Which tier decided.
    pub method: Method,
}
