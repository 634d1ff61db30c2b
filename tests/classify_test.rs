//! End-to-end tests for the classification pipeline.

use sekisho::normalize::normalize;
use sekisho::router::{Confidence, Destination, Intent, Method, QueryRouter, classify};

#[test]
fn test_normalization_contract() {
    assert_eq!(normalize("ＡＢＣ１２３"), "abc123");
    assert_eq!(normalize("ビタミン   D"), "ビタミン d");

    // classify reports the normalized form it worked on.
    assert_eq!(classify("ＤＨＣ").normalized_input, "dhc");
    assert_eq!(classify("  ビタミン　　D  ").normalized_input, "ビタミン d");
}

#[test]
fn test_empty_query_routes_to_search() {
    for raw in ["", "   ", "\u{3000}"] {
        let result = classify(raw);
        assert_eq!(result.intent, Intent::Unknown, "{raw:?}");
        assert_eq!(result.destination, Destination::Search, "{raw:?}");
        assert_eq!(result.confidence, Confidence::Low, "{raw:?}");
        assert_eq!(result.method, Method::Fallback, "{raw:?}");
        assert!(result.entities.is_empty(), "{raw:?}");
    }
}

#[test]
fn test_comparison_question() {
    let result = classify("DHAとEPAの違いは？");

    assert_eq!(result.intent, Intent::Comparison);
    assert_eq!(result.destination, Destination::Concierge);
    assert_eq!(result.confidence, Confidence::High);
    assert_eq!(result.method, Method::Pattern);
    // Extraction ran even though the pattern tier decided.
    assert_eq!(result.entities.ingredients, ["dha", "epa"]);
}

#[test]
fn test_comparison_outranks_trailing_question_mark() {
    // Both a comparison construction and a trailing question mark are
    // present; comparison wins because its family is checked first.
    assert_eq!(classify("DHAとEPAの違いは？").intent, Intent::Comparison);
    assert_eq!(classify("DHAって何？").intent, Intent::Question);
}

#[test]
fn test_condition_with_ingredient_still_routes_to_concierge() {
    let result = classify("妊娠中 ビタミン");

    assert_eq!(result.intent, Intent::Condition);
    assert_eq!(result.destination, Destination::Concierge);
    assert_eq!(result.confidence, Confidence::High);
    assert_eq!(result.method, Method::Dictionary);
    assert_eq!(result.entities.conditions, ["妊娠中"]);
    assert_eq!(result.entities.ingredients, ["ビタミン"]);
}

#[test]
fn test_bare_ingredient_is_searchable_at_medium_confidence() {
    let result = classify("ビタミンD");

    assert_eq!(result.intent, Intent::Ingredient);
    assert_eq!(result.destination, Destination::Search);
    assert_eq!(result.confidence, Confidence::Medium);
    assert_eq!(result.method, Method::Dictionary);
    assert_eq!(result.normalized_input, "ビタミンd");
}

#[test]
fn test_nested_dictionary_terms_are_both_reported() {
    let result = classify("ビタミンD");
    assert_eq!(result.entities.ingredients, ["ビタミン", "ビタミンd"]);
}

#[test]
fn test_brand_query_prefers_product_over_ingredient() {
    let result = classify("DHC ビタミンC");

    assert_eq!(result.intent, Intent::Product);
    assert_eq!(result.destination, Destination::Search);
    assert_eq!(result.confidence, Confidence::High);
    assert_eq!(result.method, Method::Dictionary);
    assert_eq!(result.entities.products, ["dhc"]);
    assert_eq!(result.entities.ingredients, ["ビタミン", "ビタミンc"]);
}

#[test]
fn test_symptom_question_populates_symptoms() {
    let result = classify("疲れやすいんだけど何がいい？");

    assert_eq!(result.destination, Destination::Concierge);
    assert_eq!(result.intent, Intent::Question);
    assert_eq!(result.method, Method::Pattern);
    assert_eq!(result.entities.symptoms, ["疲れやすい"]);
}

#[test]
fn test_overlapping_condition_patterns_both_reported() {
    let result = classify("卵アレルギー体質です");

    assert_eq!(result.intent, Intent::Condition);
    // Two patterns matched overlapping spans and each reported its own
    // slice of the input.
    assert_eq!(result.entities.conditions, ["アレルギー体質", "卵アレルギー"]);
}

#[test]
fn test_long_prose_without_evidence_goes_to_concierge() {
    let inputs = [
        "昨日から新しい生活を始めてみようと思って色々調べてみることにしました",
        "i want something that helps me feel better every single day",
    ];

    for raw in inputs {
        assert!(raw.chars().count() >= 30, "{raw}");
        let result = classify(raw);
        assert_eq!(result.intent, Intent::Unknown, "{raw}");
        assert_eq!(result.destination, Destination::Concierge, "{raw}");
        assert_eq!(result.confidence, Confidence::Low, "{raw}");
        assert_eq!(result.method, Method::Fallback, "{raw}");
        assert!(result.entities.is_empty(), "{raw}");
    }
}

#[test]
fn test_comma_separated_list_goes_to_concierge() {
    let result = classify("今日の買い物リスト、赤いりんごたち");

    assert_eq!(result.intent, Intent::Unknown);
    assert_eq!(result.destination, Destination::Concierge);
    assert_eq!(result.method, Method::Fallback);
}

#[test]
fn test_json_contract() {
    let result = classify("DHC ビタミンC");
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["intent"], "product");
    assert_eq!(json["destination"], "search");
    assert_eq!(json["confidence"], "high");
    assert_eq!(json["method"], "dictionary");
    assert_eq!(json["normalizedInput"], "dhc ビタミンc");
    assert_eq!(json["entities"]["products"][0], "dhc");
    assert!(json.get("normalized_input").is_none(), "keys are camelCase");
}

#[test]
fn test_every_result_is_complete() {
    let inputs = [
        "",
        "ビタミンD",
        "DHC ビタミンC",
        "妊娠中 ビタミン",
        "DHAとEPAの違いは？",
        "疲れやすいんだけど何がいい？",
        "abc",
        "今日の買い物リスト、赤いりんごたち",
        "昨日から新しい生活を始めてみようと思って色々調べてみることにしました",
    ];

    for raw in inputs {
        let result = classify(raw);
        assert_eq!(result.normalized_input, normalize(raw), "{raw:?}");

        // The serialized form always carries every field and every
        // entity container, populated or not.
        let json = serde_json::to_value(&result).unwrap();
        for key in [
            "intent",
            "destination",
            "confidence",
            "entities",
            "normalizedInput",
            "method",
        ] {
            assert!(json.get(key).is_some(), "{raw:?} missing {key}");
        }
        for container in ["ingredients", "products", "conditions", "symptoms"] {
            assert!(
                json["entities"][container].is_array(),
                "{raw:?} missing {container}"
            );
        }
    }
}

#[test]
fn test_repeated_calls_are_identical() {
    let router = QueryRouter::new();
    let inputs = ["ビタミンD", "妊娠中 ビタミン", "DHAとEPAの違いは？", "", "abc"];

    for raw in inputs {
        let first = classify(raw);
        assert_eq!(first, classify(raw), "{raw:?}");
        assert_eq!(first, router.classify(raw), "{raw:?}");
    }
}
