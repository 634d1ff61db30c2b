//! Dictionary types backing the entity extractors.
//!
//! Two flavors exist. [`TermDictionary`] holds literal terms and matches
//! by substring containment, reporting the dictionary term itself.
//! [`PatternDictionary`] holds regular expressions and reports the text
//! each pattern actually matched. Both scan their entries in authoring
//! order, so output order follows the table, not the input.

use ahash::AHashSet;
use regex::Regex;

use crate::entity::EntityKind;
use crate::error::{Result, SekishoError};

/// A literal-term dictionary matched by substring containment.
///
/// Terms are lowercased at construction so they compare cleanly against
/// normalized input. Because matching is plain containment, a broad term
/// and a narrower term containing it can both hit the same input (for
/// example `ビタミン` and `ビタミンd`); both are reported.
#[derive(Debug, Clone)]
pub struct TermDictionary {
    kind: EntityKind,
    terms: Vec<String>,
}

impl TermDictionary {
    /// Create a dictionary over `terms`.
    ///
    /// Terms are lowercased; empty terms are dropped (an empty term is a
    /// substring of everything and would hit every query).
    pub fn new<I, S>(kind: EntityKind, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let terms = terms
            .into_iter()
            .map(|term| term.into().to_lowercase())
            .filter(|term| !term.is_empty())
            .collect();

        TermDictionary { kind, terms }
    }

    /// The entity category this dictionary produces.
    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// The terms in authoring order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Number of terms in the dictionary.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// True when the dictionary holds no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Collect every dictionary term contained in `normalized`.
    ///
    /// Results come back in dictionary order, deduplicated. An empty
    /// vector means nothing matched.
    ///
    /// # Examples
    ///
    /// ```
    /// use sekisho::entity::{EntityKind, TermDictionary};
    ///
    /// let dict = TermDictionary::new(EntityKind::Ingredient, ["ビタミン", "ビタミンd"]);
    /// assert_eq!(dict.extract("ビタミンdのサプリ"), ["ビタミン", "ビタミンd"]);
    /// assert!(dict.extract("まくら").is_empty());
    /// ```
    pub fn extract(&self, normalized: &str) -> Vec<String> {
        let hits = self
            .terms
            .iter()
            .filter(|term| normalized.contains(term.as_str()))
            .cloned()
            .collect();

        dedup_preserving_order(hits)
    }
}

/// A regex dictionary reporting the first match of each pattern.
///
/// Unlike [`TermDictionary`], the *matched input text* is reported rather
/// than the pattern itself, so two patterns can yield distinct strings
/// that overlap in the input.
#[derive(Debug, Clone)]
pub struct PatternDictionary {
    kind: EntityKind,
    patterns: Vec<Regex>,
}

impl PatternDictionary {
    /// Compile a dictionary from pattern sources.
    ///
    /// # Errors
    ///
    /// Returns [`SekishoError::InvalidPattern`] naming the first source
    /// that fails to compile.
    ///
    /// # Examples
    ///
    /// ```
    /// use sekisho::entity::{EntityKind, PatternDictionary};
    ///
    /// let dict = PatternDictionary::new(EntityKind::Condition, [r"妊娠中|妊婦"]).unwrap();
    /// assert_eq!(dict.extract("妊婦です"), ["妊婦"]);
    /// ```
    pub fn new<I, S>(kind: EntityKind, patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut compiled = Vec::new();
        for source in patterns {
            let source = source.as_ref();
            let regex = Regex::new(source)
                .map_err(|e| SekishoError::invalid_pattern(source, e))?;
            compiled.push(regex);
        }

        Ok(PatternDictionary {
            kind,
            patterns: compiled,
        })
    }

    /// The entity category this dictionary produces.
    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// Number of patterns in the dictionary.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// True when the dictionary holds no patterns.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Collect the first match of each pattern against `normalized`.
    ///
    /// Patterns run in authoring order and contribute at most one string
    /// each; the results are deduplicated. Zero-length matches are skipped.
    pub fn extract(&self, normalized: &str) -> Vec<String> {
        let hits = self
            .patterns
            .iter()
            .filter_map(|pattern| pattern.find(normalized))
            .filter(|m| !m.as_str().is_empty())
            .map(|m| m.as_str().to_string())
            .collect();

        dedup_preserving_order(hits)
    }
}

/// Drop duplicate values, keeping the first occurrence of each.
fn dedup_preserving_order(values: Vec<String>) -> Vec<String> {
    let mut seen = AHashSet::with_capacity(values.len());
    values
        .into_iter()
        .filter(|value| seen.insert(value.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_dictionary_matches_by_containment() {
        let dict = TermDictionary::new(EntityKind::Ingredient, ["ビタミン", "鉄", "dha"]);

        assert_eq!(dict.extract("ビタミンのサプリ"), ["ビタミン"]);
        assert_eq!(dict.extract("dhaが入ったもの"), ["dha"]);
        assert!(dict.extract("まったく関係ない話").is_empty());
    }

    #[test]
    fn test_term_dictionary_reports_nested_terms() {
        let dict = TermDictionary::new(EntityKind::Ingredient, ["ビタミン", "ビタミンd"]);

        // Containment matching means the broad term and the narrow term
        // both hit; neither shadows the other.
        assert_eq!(dict.extract("ビタミンd"), ["ビタミン", "ビタミンd"]);
    }

    #[test]
    fn test_term_dictionary_output_follows_dictionary_order() {
        let dict = TermDictionary::new(EntityKind::Ingredient, ["ビタミン", "dha"]);

        // `dha` appears first in the input but second in the table.
        assert_eq!(dict.extract("dhaとビタミン"), ["ビタミン", "dha"]);
    }

    #[test]
    fn test_term_dictionary_lowercases_terms() {
        let dict = TermDictionary::new(EntityKind::Product, ["DHC"]);

        assert_eq!(dict.terms(), ["dhc"]);
        assert_eq!(dict.extract("dhcのサプリ"), ["dhc"]);
    }

    #[test]
    fn test_term_dictionary_drops_empty_terms() {
        let dict = TermDictionary::new(EntityKind::Product, ["", "dhc", ""]);

        assert_eq!(dict.len(), 1);
        assert!(dict.extract("何でもない文").is_empty());
    }

    #[test]
    fn test_term_dictionary_deduplicates() {
        let dict = TermDictionary::new(EntityKind::Ingredient, ["鉄", "亜鉛", "鉄"]);

        assert_eq!(dict.extract("鉄と亜鉛"), ["鉄", "亜鉛"]);
    }

    #[test]
    fn test_pattern_dictionary_reports_matched_text() {
        let dict =
            PatternDictionary::new(EntityKind::Condition, [r"妊娠中|妊婦", r"[0-9]+歳"]).unwrap();

        assert_eq!(dict.extract("妊婦です"), ["妊婦"]);
        assert_eq!(dict.extract("40歳 妊娠中"), ["妊娠中", "40歳"]);
    }

    #[test]
    fn test_pattern_dictionary_first_match_only() {
        let dict = PatternDictionary::new(EntityKind::Symptom, [r"頭痛"]).unwrap();

        assert_eq!(dict.extract("頭痛がひどい日と頭痛がない日"), ["頭痛"]);
    }

    #[test]
    fn test_pattern_dictionary_overlapping_matches_both_reported() {
        let dict = PatternDictionary::new(
            EntityKind::Condition,
            [r"アレルギー(体質|持ち)?", r"(卵|乳|小麦)アレルギー"],
        )
        .unwrap();

        // The two patterns cover overlapping spans of the same text and
        // each reports its own slice.
        assert_eq!(
            dict.extract("卵アレルギー体質です"),
            ["アレルギー体質", "卵アレルギー"]
        );
    }

    #[test]
    fn test_pattern_dictionary_rejects_bad_source() {
        let result = PatternDictionary::new(EntityKind::Condition, [r"妊娠中", "[broken"]);

        match result {
            Err(SekishoError::InvalidPattern { pattern, .. }) => assert_eq!(pattern, "[broken"),
            Ok(_) => panic!("expected a compile error"),
        }
    }

    #[test]
    fn test_pattern_dictionary_skips_zero_length_matches() {
        let dict = PatternDictionary::new(EntityKind::Symptom, [r"z*"]).unwrap();

        assert!(dict.extract("頭痛").is_empty());
    }

    #[test]
    fn test_dedup_preserving_order() {
        let values = vec!["b".to_string(), "a".to_string(), "b".to_string()];
        assert_eq!(dedup_preserving_order(values), ["b", "a"]);
    }
}
