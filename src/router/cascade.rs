//! The decision cascade.
//!
//! One deterministic, synchronous resolution: normalize, extract, then
//! walk a fixed ladder of tiers until one produces an answer. Priorities
//! live in data tables, so reading the tables top to bottom reads the
//! routing policy.

use log::debug;

use crate::entity::{EntityBundle, EntityKind, PatternDictionary, TermDictionary, builtin};
use crate::normalize::normalize;
use crate::pattern::{self, PatternFamily, classify_by_pattern};
use crate::router::types::{Classification, Confidence, Destination, Intent, Method};

/// Entity-to-intent priority, highest first. When several categories
/// matched, the first row with a non-empty container decides.
const ENTITY_PRIORITY: &[(EntityKind, Intent, Confidence)] = &[
    (EntityKind::Symptom, Intent::Symptom, Confidence::High),
    (EntityKind::Condition, Intent::Condition, Confidence::High),
    (EntityKind::Product, Intent::Product, Confidence::High),
    (EntityKind::Ingredient, Intent::Ingredient, Confidence::Medium),
];

/// Inputs at most this many chars look like catalog lookups.
const SHORT_QUERY_CHARS: usize = 10;

/// Inputs at least this many chars read like free-form sentences.
const LONG_QUERY_CHARS: usize = 30;

/// Enumeration separators, both widths.
const COMMA_CHARS: [char; 3] = ['、', '，', ','];

/// The query-intent router.
///
/// Starts out with the built-in bilingual tables; every table can be
/// swapped through the `with_*` builders. Classification is total: every
/// input, including the empty string, maps to a complete
/// [`Classification`].
///
/// # Examples
///
/// ```
/// use sekisho::router::{Destination, Intent, QueryRouter};
///
/// let router = QueryRouter::new();
/// let result = router.classify("ビタミンD");
///
/// assert_eq!(result.intent, Intent::Ingredient);
/// assert_eq!(result.destination, Destination::Search);
/// ```
#[derive(Debug, Clone)]
pub struct QueryRouter {
    ingredients: TermDictionary,
    products: TermDictionary,
    conditions: PatternDictionary,
    symptoms: PatternDictionary,
    families: Vec<PatternFamily>,
}

impl QueryRouter {
    /// A router over the built-in dictionaries and rule families.
    pub fn new() -> Self {
        QueryRouter {
            ingredients: builtin::INGREDIENTS.clone(),
            products: builtin::PRODUCTS.clone(),
            conditions: builtin::CONDITIONS.clone(),
            symptoms: builtin::SYMPTOMS.clone(),
            families: pattern::default_families().to_vec(),
        }
    }

    /// Replace the ingredient dictionary.
    pub fn with_ingredients(mut self, dictionary: TermDictionary) -> Self {
        self.ingredients = dictionary;
        self
    }

    /// Replace the product dictionary.
    pub fn with_products(mut self, dictionary: TermDictionary) -> Self {
        self.products = dictionary;
        self
    }

    /// Replace the condition dictionary.
    pub fn with_conditions(mut self, dictionary: PatternDictionary) -> Self {
        self.conditions = dictionary;
        self
    }

    /// Replace the symptom dictionary.
    pub fn with_symptoms(mut self, dictionary: PatternDictionary) -> Self {
        self.symptoms = dictionary;
        self
    }

    /// Replace the rule families, preserving the given evaluation order.
    pub fn with_families(mut self, families: Vec<PatternFamily>) -> Self {
        self.families = families;
        self
    }

    /// Classify raw search-box input.
    ///
    /// Runs the full pipeline: normalization, entity extraction, pattern
    /// rules, dictionary priorities, then shape heuristics. The same
    /// input always yields the same result.
    pub fn classify(&self, raw: &str) -> Classification {
        let normalized = normalize(raw);

        // Nothing left after normalization: invite the user to keep
        // typing rather than wake the concierge.
        if normalized.is_empty() {
            debug!("classify: empty after normalization, routing to search");
            return Classification {
                intent: Intent::Unknown,
                destination: Destination::Search,
                confidence: Confidence::Low,
                entities: EntityBundle::empty(),
                normalized_input: normalized,
                method: Method::Fallback,
            };
        }

        // Extraction always runs; the bundle rides along on every
        // outcome below, whichever tier decides.
        let entities = self.extract(&normalized);

        // Explicit constructions outrank dictionary evidence.
        let signal = classify_by_pattern(&self.families, &normalized);
        if signal.intent != Intent::Unknown {
            return Classification {
                intent: signal.intent,
                destination: signal.intent.destination(),
                confidence: signal.confidence,
                entities,
                normalized_input: normalized,
                method: Method::Pattern,
            };
        }

        // Dictionary evidence, in fixed priority order.
        if let Some((intent, confidence)) = infer_from_entities(&entities) {
            debug!("classify: dictionary tier resolved intent={intent}");
            return Classification {
                intent,
                destination: intent.destination(),
                confidence,
                entities,
                normalized_input: normalized,
                method: Method::Dictionary,
            };
        }

        // Shape of the string, content ignored.
        if let Some(destination) = format_heuristic(&normalized, &entities) {
            debug!("classify: format tier routed to {destination}");
            return Classification {
                intent: Intent::Unknown,
                destination,
                confidence: Confidence::Low,
                entities,
                normalized_input: normalized,
                method: Method::Fallback,
            };
        }

        debug!("classify: no tier fired, defaulting to concierge");
        Classification {
            intent: Intent::Unknown,
            destination: Destination::Concierge,
            confidence: Confidence::Low,
            entities,
            normalized_input: normalized,
            method: Method::Fallback,
        }
    }

    /// Run all four extractors over already-normalized text.
    pub fn extract(&self, normalized: &str) -> EntityBundle {
        EntityBundle {
            ingredients: self.ingredients.extract(normalized),
            products: self.products.extract(normalized),
            conditions: self.conditions.extract(normalized),
            symptoms: self.symptoms.extract(normalized),
        }
    }
}

impl Default for QueryRouter {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve an intent from extracted entities by the priority table, or
/// `None` when every container is empty.
fn infer_from_entities(entities: &EntityBundle) -> Option<(Intent, Confidence)> {
    ENTITY_PRIORITY
        .iter()
        .find(|(kind, _, _)| !entities.get(*kind).is_empty())
        .map(|&(_, intent, confidence)| (intent, confidence))
}

/// Shape-only routing for queries no earlier tier could place.
///
/// Short inputs that carried entity evidence would go to search, but the
/// dictionary tier has already consumed every such query by the time this
/// runs; the branch is kept so that short-input routing stays an explicit
/// decision instead of falling through silently. Long inputs read like
/// prose, and a comma suggests an enumeration someone wants advice about.
fn format_heuristic(normalized: &str, entities: &EntityBundle) -> Option<Destination> {
    let chars = normalized.chars().count();

    if chars <= SHORT_QUERY_CHARS && !entities.is_empty() {
        return Some(Destination::Search);
    }
    if chars >= LONG_QUERY_CHARS {
        return Some(Destination::Concierge);
    }
    if normalized.contains(COMMA_CHARS) {
        return Some(Destination::Concierge);
    }

    None
}
