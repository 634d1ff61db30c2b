//! Entity extraction.
//!
//! Four independent extractors pull domain entities out of a normalized
//! query: ingredients and products match literal dictionary terms by
//! substring containment, conditions and symptoms match regular
//! expressions. Extraction never influences which extractor runs; all
//! four always run and each reports into its own container.

pub mod builtin;
pub mod dictionary;

pub use self::dictionary::{PatternDictionary, TermDictionary};

use serde::{Deserialize, Serialize};
use std::fmt;

/// The entity categories the extractors currently produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// Ingredient and nutrient names, matched as literal terms.
    Ingredient,
    /// Product lines and brand names, matched as literal terms.
    Product,
    /// Health and biographical circumstances, matched as patterns.
    Condition,
    /// Subjective complaints, matched as patterns.
    Symptom,
}

impl EntityKind {
    /// All categories, in extraction order.
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Ingredient,
        EntityKind::Product,
        EntityKind::Condition,
        EntityKind::Symptom,
    ];

    /// The serialized tag for this category.
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Ingredient => "ingredient",
            EntityKind::Product => "product",
            EntityKind::Condition => "condition",
            EntityKind::Symptom => "symptom",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Entities extracted from one normalized query, one container per
/// category.
///
/// Every container is always present: "nothing matched" is an empty
/// vector, never a missing field. The category set is expected to grow
/// over time, so downstream consumers of the serialized form should
/// ignore keys they do not recognize rather than reject them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityBundle {
    /// Ingredient hits, in dictionary order.
    pub ingredients: Vec<String>,
    /// Product and brand hits, in dictionary order.
    pub products: Vec<String>,
    /// Condition hits, in pattern order.
    pub conditions: Vec<String>,
    /// Symptom hits, in pattern order.
    pub symptoms: Vec<String>,
}

impl EntityBundle {
    /// An empty bundle (all containers present, none populated).
    pub fn empty() -> Self {
        EntityBundle::default()
    }

    /// The container for `kind`.
    pub fn get(&self, kind: EntityKind) -> &[String] {
        match kind {
            EntityKind::Ingredient => &self.ingredients,
            EntityKind::Product => &self.products,
            EntityKind::Condition => &self.conditions,
            EntityKind::Symptom => &self.symptoms,
        }
    }

    /// Total number of extracted entities across all categories.
    pub fn len(&self) -> usize {
        EntityKind::ALL
            .iter()
            .map(|&kind| self.get(kind).len())
            .sum()
    }

    /// True when no category matched anything.
    pub fn is_empty(&self) -> bool {
        EntityKind::ALL.iter().all(|&kind| self.get(kind).is_empty())
    }
}
