//! Tests for fail-fast validation of depot path specs.

use views::{ViewError, ViewSpec};

#[test]
fn empty_spec_reports_invalid_spec() {
    let err = ViewSpec::compile("", "job1").expect_err("rejected");
    assert!(matches!(err, ViewError::InvalidSpec(_)));
}

#[test]
fn whitespace_only_spec_reports_invalid_spec() {
    let err = ViewSpec::compile("   \n\t \n", "job1").expect_err("rejected");
    assert!(matches!(err, ViewError::InvalidSpec(_)));
}

#[test]
fn empty_workspace_reports_invalid_spec() {
    let err = ViewSpec::compile("//depot", "").expect_err("rejected");
    assert!(matches!(err, ViewError::InvalidSpec(_)));
}

#[test]
fn whitespace_workspace_reports_invalid_spec() {
    let err = ViewSpec::compile("//depot", "  ").expect_err("rejected");
    assert!(matches!(err, ViewError::InvalidSpec(_)));
}

#[test]
fn rootless_path_reports_malformed_path() {
    let err = ViewSpec::compile("depot/src", "job1").expect_err("rejected");
    assert_eq!(err, ViewError::MalformedPath("depot/src".to_owned()));
}

#[test]
fn single_slash_path_reports_malformed_path() {
    let err = ViewSpec::compile("/depot/src", "job1").expect_err("rejected");
    assert_eq!(err, ViewError::MalformedPath("/depot/src".to_owned()));
}

#[test]
fn malformed_second_line_aborts_whole_compile() {
    let err = ViewSpec::compile("//depot/src\ntgt", "job1").expect_err("rejected");
    assert_eq!(err, ViewError::MalformedPath("tgt".to_owned()));
}

#[test]
fn error_display_names_the_offending_line() {
    let err = ViewSpec::compile("depot/src", "job1").expect_err("rejected");
    let message = err.to_string();
    assert!(message.contains("depot/src"));
    assert!(message.contains("root marker"));
}

#[test]
fn errors_implement_std_error() {
    fn assert_error<E: std::error::Error>(_: &E) {}
    let err = ViewSpec::compile("", "job1").expect_err("rejected");
    assert_error(&err);
}
