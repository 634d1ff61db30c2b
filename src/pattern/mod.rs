//! Pattern classification.
//!
//! Ordered regex families recognize explicit question-like constructions
//! before any dictionary evidence is weighed. Families are checked in
//! order and, inside a family, rules are checked in order; the first hit
//! wins outright, so precedence lives in the tables rather than in code.

use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::error::{Result, SekishoError};
use crate::router::types::{Confidence, Intent};

/// Comparison constructions, JA then EN. "A vs B" style queries.
const COMPARISON_RULES: &[(&str, &str)] = &[
    ("difference", r"と.{1,24}の違い|との違い|の違いは|違いを(教|おし)えて"),
    ("which_better", r"どっち|どちらが"),
    ("compare", r"比較|比べ"),
    ("versus", r"\bvs\b"),
    ("difference_en", r"difference between|what is the difference"),
    ("which_better_en", r"which (one )?is better|which should i (take|choose)"),
    ("compared_en", r"compared? (to|with)"),
];

/// Open-question constructions, JA then EN. Safety worries, advice
/// seeking, dosage, conditionals.
const QUESTION_RULES: &[(&str, &str)] = &[
    ("trailing_question_mark", r"[?？]$"),
    ("safety", r"安全|大丈夫|副作用|危険|リスク|悪影響"),
    ("advice", r"何がいい|何が良い|どれがいい|どれが良い|おすすめ|お勧め|オススメ|教えて"),
    ("interaction", r"飲み合わせ|併用|一緒に(飲|の)(ん|み|め)"),
    ("conditional", r"(て|で)も(いい|良い|大丈夫|平気)|けど|けれど|のに"),
    ("dosage", r"いつ(飲|の)(む|めば)|飲み方|摂取量|目安量|何錠|何粒"),
    ("effect", r"効果|効き目|効く"),
    ("safety_en", r"is it safe|side effects?|any risks?"),
    ("advice_en", r"what should i (take|buy|choose)|recommend"),
    ("interaction_en", r"interactions?|take (them |it )?together"),
    ("conditional_en", r"even (if|though)|is it ok(ay)?|\bbut\b"),
    ("dosage_en", r"how (much|many|often)|when should i take|dosage"),
];

/// The built-in families: comparison first, then question.
static DEFAULT_FAMILIES: LazyLock<Vec<PatternFamily>> = LazyLock::new(|| {
    vec![
        PatternFamily::from_sources(Intent::Comparison, COMPARISON_RULES)
            .expect("built-in comparison rules compile"),
        PatternFamily::from_sources(Intent::Question, QUESTION_RULES)
            .expect("built-in question rules compile"),
    ]
});

/// The built-in rule families in evaluation order.
pub fn default_families() -> &'static [PatternFamily] {
    &DEFAULT_FAMILIES
}

/// One named classification rule.
#[derive(Debug, Clone)]
pub struct PatternRule {
    name: String,
    regex: Regex,
}

impl PatternRule {
    /// Compile a rule from its source.
    ///
    /// # Errors
    ///
    /// Returns [`SekishoError::InvalidPattern`] when `source` does not
    /// compile.
    pub fn new<S: Into<String>>(name: S, source: &str) -> Result<Self> {
        let regex =
            Regex::new(source).map_err(|e| SekishoError::invalid_pattern(source, e))?;

        Ok(PatternRule {
            name: name.into(),
            regex,
        })
    }

    /// The rule's name, used in logs.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The rule's pattern source.
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// True when the rule matches anywhere in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// An ordered family of rules that all vote for the same intent.
#[derive(Debug, Clone)]
pub struct PatternFamily {
    intent: Intent,
    rules: Vec<PatternRule>,
}

impl PatternFamily {
    /// Create a family from already-compiled rules.
    pub fn new(intent: Intent, rules: Vec<PatternRule>) -> Self {
        PatternFamily { intent, rules }
    }

    /// Compile a family from `(name, source)` pairs, preserving order.
    pub fn from_sources(intent: Intent, sources: &[(&str, &str)]) -> Result<Self> {
        let rules = sources
            .iter()
            .map(|(name, source)| PatternRule::new(*name, source))
            .collect::<Result<Vec<_>>>()?;

        Ok(PatternFamily { intent, rules })
    }

    /// The intent this family votes for.
    pub fn intent(&self) -> Intent {
        self.intent
    }

    /// The rules in evaluation order.
    pub fn rules(&self) -> &[PatternRule] {
        &self.rules
    }

    /// The first rule that matches `text`, if any.
    pub fn first_match(&self, text: &str) -> Option<&PatternRule> {
        self.rules.iter().find(|rule| rule.is_match(text))
    }
}

/// Signal produced by the pattern tier.
///
/// A signal is always produced: a miss is `Intent::Unknown` at low
/// confidence, never an absent value. The cascade treats only a
/// non-`Unknown` signal as a short-circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternSignal {
    /// The winning family's intent, or `Unknown` on a miss.
    pub intent: Intent,
    /// `High` on any rule hit, `Low` otherwise.
    pub confidence: Confidence,
}

/// Run `normalized` through the families in order.
///
/// The first family with a matching rule wins at high confidence; later
/// families are not consulted.
pub fn classify_by_pattern(families: &[PatternFamily], normalized: &str) -> PatternSignal {
    for family in families {
        if let Some(rule) = family.first_match(normalized) {
            debug!(
                "pattern rule `{}` matched, intent={}",
                rule.name(),
                family.intent()
            );
            return PatternSignal {
                intent: family.intent(),
                confidence: Confidence::High,
            };
        }
    }

    PatternSignal {
        intent: Intent::Unknown,
        confidence: Confidence::Low,
    }
}
