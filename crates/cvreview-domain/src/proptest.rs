//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - result construction (length, order, failure modes)
//! - order preservation of both projections
//! - metadata type fidelity through the structured value bridge

use crate::build;
use crate::error::ReviewErrorKind;
use crate::test_support::map;
use cvreview_types::{ConstraintRef, DynMap, Dynamic, EvalResult, Response, Responses};
use proptest::prelude::*;
use serde_json::{Map as JsonMap, Number, Value as JsonValue};

// ============================================================================
// Strategies
// ============================================================================

fn arb_target() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{1,8}(\\.[a-z]{1,8}){0,3}").unwrap()
}

fn arb_resource_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("//[a-z]{3,12}\\.googleapis\\.com/[a-z0-9/-]{1,32}").unwrap()
}

fn arb_constraint_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9-]{0,23}").unwrap()
}

/// Arbitrary JSON with finite numbers only.
fn arb_json() -> impl Strategy<Value = JsonValue> {
    let leaf = prop_oneof![
        Just(JsonValue::Null),
        any::<bool>().prop_map(JsonValue::Bool),
        any::<i64>().prop_map(|i| JsonValue::Number(i.into())),
        any::<u64>().prop_map(|u| JsonValue::Number(u.into())),
        (-1.0e9f64..1.0e9)
            .prop_map(|f| Number::from_f64(f).map_or(JsonValue::Null, JsonValue::Number)),
        "[ -~]{0,12}".prop_map(JsonValue::String),
    ];
    leaf.prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(JsonValue::Array),
            prop::collection::btree_map("[a-z_]{1,8}", inner, 0..6)
                .prop_map(|m| JsonValue::Object(m.into_iter().collect::<JsonMap<_, _>>())),
        ]
    })
}

fn arb_metadata() -> impl Strategy<Value = JsonValue> {
    prop::collection::btree_map("[a-z_]{1,8}", arb_json(), 0..5)
        .prop_map(|m| JsonValue::Object(m.into_iter().collect::<JsonMap<_, _>>()))
}

fn arb_eval_result() -> impl Strategy<Value = EvalResult> {
    (arb_constraint_name(), "[ -~]{0,40}", arb_metadata()).prop_map(|(name, msg, metadata)| {
        EvalResult {
            msg,
            metadata: map(metadata),
            constraint: ConstraintRef::new("GCPGeneratedConstraintV1", name),
        }
    })
}

fn responses_for(target: &str, results: Vec<EvalResult>) -> Responses {
    let mut responses = Responses::default();
    responses.insert(Response {
        target: target.to_string(),
        results,
    });
    responses
}

fn cai(name: &str) -> DynMap {
    let mut m = DynMap::new();
    m.insert("name".to_string(), Dynamic::from(name));
    m
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn build_preserves_count_and_order(
        target in arb_target(),
        name in arb_resource_name(),
        results in prop::collection::vec(arb_eval_result(), 0..8),
    ) {
        let responses = responses_for(&target, results.clone());
        let result = build(&target, cai(&name), DynMap::new(), &responses).expect("build");

        prop_assert_eq!(result.name(), name.as_str());
        prop_assert_eq!(result.constraint_violations().len(), results.len());
        for (cv, r) in result.constraint_violations().iter().zip(&results) {
            prop_assert_eq!(&cv.message, &r.msg);
            prop_assert_eq!(&cv.metadata, &r.metadata);
            prop_assert_eq!(&cv.constraint, &r.constraint);
        }
    }

    #[test]
    fn absent_target_is_always_not_found(
        target in arb_target(),
        resource in arb_metadata(),
    ) {
        let responses = responses_for(&format!("{target}.other"), Vec::new());
        let err = build(&target, map(resource), DynMap::new(), &responses).unwrap_err();
        prop_assert_eq!(err.kind(), ReviewErrorKind::NotFound);
    }

    #[test]
    fn non_string_name_is_type_mismatch(
        name in arb_json().prop_filter("not a string", |v| !v.is_string()),
    ) {
        let responses = responses_for("t", Vec::new());
        let mut resource = DynMap::new();
        resource.insert("name".to_string(), Dynamic::from(name));
        let err = build("t", resource, DynMap::new(), &responses).unwrap_err();
        prop_assert_eq!(err.kind(), ReviewErrorKind::TypeMismatch);
    }

    #[test]
    fn projections_preserve_violation_order(
        name in arb_resource_name(),
        results in prop::collection::vec(arb_eval_result(), 0..8),
    ) {
        let responses = responses_for("t", results.clone());
        let result = build("t", cai(&name), DynMap::new(), &responses).expect("build");

        let expected: Vec<&str> = results.iter().map(|r| r.constraint.name.as_str()).collect();

        let violations = result.to_violations().expect("violations");
        let from_violations: Vec<&str> =
            violations.iter().map(|v| v.constraint.as_str()).collect();
        prop_assert_eq!(&from_violations, &expected);

        let insights = result.to_insights();
        let from_insights: Vec<&str> =
            insights.iter().map(|i| i.insight_subtype.as_str()).collect();
        prop_assert_eq!(&from_insights, &expected);
        for insight in &insights {
            prop_assert_eq!(&insight.target_resources, &vec![name.clone()]);
        }
    }

    #[test]
    fn metadata_survives_the_bridge(metadata in arb_metadata()) {
        let responses = responses_for(
            "t",
            vec![EvalResult {
                msg: "m".to_string(),
                metadata: map(metadata.clone()),
                constraint: ConstraintRef::new("K", "c"),
            }],
        );
        let result = build("t", cai("r"), DynMap::new(), &responses).expect("build");
        let violations = result.to_violations().expect("violations");
        prop_assert_eq!(violations[0].metadata.to_json(), metadata);
    }
}
