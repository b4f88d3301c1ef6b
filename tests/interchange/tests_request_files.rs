#![allow(clippy::unwrap_used)]

use std::io::Write;

use dcr::interchange::{CompareRequest, InterchangeError, graph_from_xml};
use dcr::{CompareConfig, ElementKind, UnknownMethodPolicy, grade_all};
use rstest::rstest;

fn highlight(kind: &str, id: &str, start: i64, end: i64, text: &str) -> String {
    format!(
        r#"<highlight type="{kind}">
  <layers><layer name="description"><ranges>
    <range start="{start}" end="{end}">{text}</range>
  </ranges></layer></layers>
  <items><item id="{id}"/></items>
</highlight>"#
    )
}

fn graph(highlights: &[String]) -> String {
    format!(
        "<dcrgraph><specification/><highlights>{}</highlights></dcrgraph>",
        highlights.concat()
    )
}

fn reference_graph() -> String {
    graph(&[
        highlight("activity", "Register", 0, 14, "register the claim"),
        highlight("activity", "Assess", 20, 34, "assess the claim"),
        highlight("role", "Clerk", 60, 65, "clerk"),
        highlight("rule", "R1", 70, 90, "after registering"),
    ])
}

fn student_graph() -> String {
    graph(&[
        highlight("activity", "Act1", 2, 10, "register"),
        highlight("role", "Role1", 58, 61, "the clerk"),
        highlight("rule", "Rule1", 300, 320, "unrelated"),
    ])
}

fn request(types: &[&str], methods: &[&str], evaluation: &str) -> String {
    let types: String = types.iter().map(|t| format!("<type>{t}</type>")).collect();
    let methods: String = methods
        .iter()
        .map(|m| format!("<compare_method>{m}</compare_method>"))
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<request>
  <compare_types>{types}</compare_types>
  <compare_methods>{methods}</compare_methods>
  <evaluation_methods><evaluation_method>{evaluation}</evaluation_method></evaluation_methods>
  <source_graph>{}</source_graph>
  <target_graph>{}</target_graph>
</request>"#,
        reference_graph(),
        student_graph()
    )
}

#[test]
fn test_request_from_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(request(&["activity", "role", "rule"], &["spans"], "union").as_bytes())
        .unwrap();

    let request = CompareRequest::from_path(file.path()).unwrap();
    assert_eq!(request.compare_types, vec!["activity", "role", "rule"]);
    assert_eq!(request.source.len(), 4);
    assert_eq!(request.target.len(), 3);

    let report = request.run().unwrap();
    // union 7, intersection Register, Act1, Clerk, Role1
    assert!((report.score - 400.0 / 7.0).abs() < 1e-9);
    assert_eq!(report.intersection.ids(), vec!["Register", "Act1", "Clerk", "Role1"]);
}

#[test]
fn test_request_from_missing_path() {
    let dir = tempfile::tempdir().unwrap();
    let err = CompareRequest::from_path(dir.path().join("absent.xml")).unwrap_err();
    assert!(matches!(err, InterchangeError::Io(_)));
}

#[rstest]
#[case(&["activity"], "union", 200.0 / 3.0)]
#[case(&["role"], "union", 100.0)]
#[case(&["rule"], "union", 0.0)]
#[case(&["activity", "role", "rule"], "source_intersection", 50.0)]
fn test_request_scores(#[case] types: &[&str], #[case] evaluation: &str, #[case] expected: f64) {
    let xml = request(types, &["spans"], evaluation);
    let report = CompareRequest::from_xml(xml.as_bytes()).unwrap().run().unwrap();
    assert!(
        (report.score - expected).abs() < 1e-9,
        "Expected {expected}, got {}",
        report.score
    );
}

#[test]
fn test_request_json_response() {
    let xml = request(&["role"], &["spans"], "union");
    let json = CompareRequest::from_xml(xml.as_bytes())
        .unwrap()
        .run()
        .unwrap()
        .to_json()
        .unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["score"], 100.0);
    let roles = value["intersection"]["roles"].as_array().unwrap();
    assert_eq!(roles.len(), 2);
    assert_eq!(roles[0]["id"], "Clerk");
    assert_eq!(roles[0]["highlights"][0]["text"], "clerk");
    assert_eq!(roles[1]["highlights"][0]["start"], 58);
}

#[test]
fn test_request_labels_fail_loudly() {
    let xml = request(&["activity"], &["labels"], "union");
    let err = CompareRequest::from_xml(xml.as_bytes())
        .unwrap()
        .run()
        .unwrap_err();
    assert_eq!(err.to_string(), "Matcher 'labels' is not supported");
}

#[test]
fn test_request_unknown_method_policies() {
    let xml = request(&["activity"], &["colors", "spans"], "union");
    let request = CompareRequest::from_xml(xml.as_bytes()).unwrap();

    let lenient = request.config(UnknownMethodPolicy::Ignore).unwrap();
    assert_eq!(lenient.compare_methods.len(), 1);
    assert!(request.config(UnknownMethodPolicy::Reject).is_err());
}

#[test]
fn test_grade_extracted_graphs() {
    let reference = graph_from_xml(reference_graph().as_bytes()).unwrap();
    let candidates = vec![
        graph_from_xml(student_graph().as_bytes()).unwrap(),
        graph_from_xml(reference_graph().as_bytes()).unwrap(),
    ];
    let config = CompareConfig::new(
        [ElementKind::Activity],
        [dcr::CompareMethod::Spans],
        dcr::EvaluationMethod::Union,
    );

    let scores: Vec<f64> = grade_all(&reference, &candidates, &config)
        .into_iter()
        .map(|r| r.unwrap().score)
        .collect();
    // Student: union 3, matched Register + Act1.
    assert!((scores[0] - 200.0 / 3.0).abs() < 1e-9);
    // Reference against itself: every union entry is matched.
    assert_eq!(scores[1], 100.0);
}
