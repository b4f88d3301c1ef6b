#![allow(clippy::unwrap_used)]

use crate::helpers::graph_fixtures::{activity, claim_reference, claim_student};
use crate::helpers::report_assertions::{
    assert_score, assert_session_invariants, bucket_ids, graph_ids,
};
use dcr::{
    CompareConfig, CompareError, CompareMethod, Comparison, ElementKind, EvaluationMethod,
    Evaluator, Graph, IntersectionFold, SourceIntersectionMode, UnknownMethodPolicy, compare,
};
use rstest::rstest;

fn session(source: &Graph, target: &Graph, config: &CompareConfig) -> Comparison {
    Comparison::new(
        source,
        target,
        &config.compare_types,
        &config.compare_methods,
    )
    .unwrap()
}

#[test]
fn test_overlapping_activities_score_hundred() {
    let source = Graph::new().with(activity("A1", 0, 10));
    let target = Graph::new().with(activity("A2", 5, 15));
    let config = CompareConfig::from_names(&["activity"], &["spans"], "union").unwrap();

    let comparison = session(&source, &target, &config);
    assert_eq!(comparison.matches().len(), 1);
    assert_eq!(comparison.matches()[0].a.id.as_str(), "A1");
    assert_eq!(comparison.matches()[0].b.id.as_str(), "A2");
    assert_eq!(graph_ids(comparison.union()), vec!["A1", "A2"]);
    assert_eq!(graph_ids(comparison.intersection()), vec!["A1", "A2"]);
    assert!(comparison.remaining().is_empty());
    assert_score(
        Evaluator::new(&comparison, EvaluationMethod::Union).similarity(),
        100.0,
    );
    assert_session_invariants(&comparison);
}

#[test]
fn test_disjoint_activities_score_zero() {
    let source = Graph::new().with(activity("A1", 0, 10));
    let target = Graph::new().with(activity("A2", 20, 30));
    let config = CompareConfig::from_names(&["activity"], &["spans"], "union").unwrap();

    let comparison = session(&source, &target, &config);
    assert!(comparison.matches().is_empty());
    assert!(comparison.intersection().is_empty());
    assert_eq!(comparison.union().len(), 2);
    assert_eq!(comparison.remaining().len(), 2);
    assert_score(
        Evaluator::new(&comparison, EvaluationMethod::Union).similarity(),
        0.0,
    );
}

#[rstest]
#[case(IntersectionFold::Pairwise, 100.0)]
#[case(IntersectionFold::Distinct, 50.0)]
fn test_self_comparison_score(#[case] fold: IntersectionFold, #[case] expected: f64) {
    let graph = Graph::new()
        .with(activity("A1", 0, 10))
        .with(activity("A2", 20, 30));
    let config = CompareConfig::default().with_intersection_fold(fold);

    let report = compare(&graph, &graph.clone(), &config).unwrap();
    assert_score(report.score, expected);
}

#[test]
fn test_reference_graded_against_itself_scores_hundred() {
    let reference = claim_reference();
    let report = compare(&reference, &reference.clone(), &CompareConfig::default()).unwrap();
    assert_score(report.score, 100.0);
    assert_eq!(report.intersection.ids().len(), 2 * reference.len());
}

#[test]
fn test_fan_out_match_counts_shared_endpoint_per_pair() {
    let source = Graph::new().with(activity("a1", 0, 100));
    let target = Graph::new()
        .with(activity("b1", 10, 20))
        .with(activity("b2", 50, 60));
    let config = CompareConfig::from_names(&["activity"], &["spans"], "union").unwrap();

    let comparison = session(&source, &target, &config);
    assert_eq!(graph_ids(comparison.intersection()), vec!["a1", "b1", "a1", "b2"]);
    assert_session_invariants(&comparison);
}

#[test]
fn test_claim_grading_all_types() {
    let config = CompareConfig::default();
    let comparison = session(&claim_reference(), &claim_student(), &config);

    assert_eq!(comparison.union().len(), 9);
    assert_eq!(
        graph_ids(comparison.intersection()),
        vec!["register", "s_register", "assess", "s_assess", "clerk", "s_clerk"]
    );
    assert_eq!(
        graph_ids(comparison.remaining()),
        vec!["payout", "assess_after_register", "s_rule"]
    );
    assert_session_invariants(&comparison);
}

#[rstest]
#[case(EvaluationMethod::Union, SourceIntersectionMode::Corrected, 600.0 / 9.0)]
#[case(EvaluationMethod::SourceIntersection, SourceIntersectionMode::Corrected, 60.0)]
#[case(EvaluationMethod::SourceIntersection, SourceIntersectionMode::Literal, 300.0)]
fn test_claim_grading_scores(
    #[case] method: EvaluationMethod,
    #[case] mode: SourceIntersectionMode,
    #[case] expected: f64,
) {
    let config = CompareConfig::default()
        .with_evaluation(method)
        .with_source_intersection_mode(mode);

    let report = compare(&claim_reference(), &claim_student(), &config).unwrap();
    assert_score(report.score, expected);
}

#[rstest]
#[case(&["activity"], 5, 80.0)]
#[case(&["ROLE"], 2, 100.0)]
#[case(&["rule"], 2, 0.0)]
#[case(&["Activity", "role"], 7, 600.0 / 7.0)]
fn test_claim_grading_per_type(
    #[case] types: &[&str],
    #[case] union_size: usize,
    #[case] expected: f64,
) {
    let config = CompareConfig::from_names(types, &["spans"], "union").unwrap();
    let comparison = session(&claim_reference(), &claim_student(), &config);

    assert_eq!(comparison.union().len(), union_size);
    assert_score(
        Evaluator::new(&comparison, config.evaluation).similarity(),
        expected,
    );
}

#[test]
fn test_unknown_compare_method_is_ignored() {
    let with_unknown =
        CompareConfig::from_names(&["activity", "role", "rule"], &["colors", "spans"], "union")
            .unwrap();
    let without =
        CompareConfig::from_names(&["activity", "role", "rule"], &["spans"], "union").unwrap();

    let a = session(&claim_reference(), &claim_student(), &with_unknown);
    let b = session(&claim_reference(), &claim_student(), &without);
    assert_eq!(graph_ids(a.intersection()), graph_ids(b.intersection()));
    assert_eq!(graph_ids(a.remaining()), graph_ids(b.remaining()));
}

#[test]
fn test_unknown_compare_method_only_leaves_sets_untouched() {
    let config = CompareConfig::from_names(&["activity"], &["colors"], "union").unwrap();
    assert!(config.compare_methods.is_empty());

    let comparison = session(&claim_reference(), &claim_student(), &config);
    assert!(comparison.intersection().is_empty());
    assert_eq!(
        graph_ids(comparison.remaining()),
        graph_ids(comparison.union())
    );
}

#[test]
fn test_unknown_compare_method_rejected_under_strict_policy() {
    let err = CompareConfig::from_names_with_policy(
        &["activity"],
        &["colors"],
        "union",
        UnknownMethodPolicy::Reject,
    )
    .unwrap_err();
    assert_eq!(err, CompareError::UnknownMethod("colors".to_string()));
}

#[rstest]
#[case(CompareMethod::Labels, "labels")]
#[case(CompareMethod::Compositions, "roles")]
fn test_unsupported_methods_fail_loudly(#[case] method: CompareMethod, #[case] matcher: &str) {
    let config = CompareConfig::new(ElementKind::ALL, [method], EvaluationMethod::Union);
    let err = compare(&claim_reference(), &claim_student(), &config).unwrap_err();
    match err {
        CompareError::UnsupportedMatcher { matcher: name } => assert_eq!(name, matcher),
        other => panic!("Expected unsupported matcher error, got {other:?}"),
    }
}

#[test]
fn test_unknown_evaluation_method_is_named() {
    let comparison = session(
        &claim_reference(),
        &claim_student(),
        &CompareConfig::default(),
    );
    let err = Evaluator::from_name(&comparison, "overlap").unwrap_err();
    assert_eq!(err.to_string(), "Comparison Method > overlap < not recognized.");
}

#[test]
fn test_remaining_mutation_never_shrinks_union() {
    let reference = claim_reference();
    let config = CompareConfig::default();
    let comparison = session(&reference, &claim_student(), &config);

    let before = reference.len() + claim_student().len();
    assert!(comparison.remaining().len() < before);
    assert_eq!(comparison.union().len(), before);
    assert_eq!(
        bucket_ids(comparison.union(), ElementKind::Activity),
        vec!["register", "assess", "payout", "s_register", "s_assess"]
    );
}

#[test]
fn test_input_graphs_are_untouched() {
    let reference = claim_reference();
    let student = claim_student();
    let _ = compare(&reference, &student, &CompareConfig::default()).unwrap();
    assert_eq!(reference.len(), 5);
    assert_eq!(student.len(), 4);
}
