//! Break command tests - reflowing parameter lists over several lines

mod common;

use common::{buffer_to_string, selection_tuple, test_buffer};
use duplicator::editable::IndentSettings;
use duplicator::update::{break_parameters, EditOutcome, SkipReason};

#[test]
fn test_break_swift_signature_with_nested_tuple() {
    let mut buffer = test_buffer("func foo(a: Int, b: (x: Int, y: Int)) {", 0, 0);
    assert!(break_parameters(&mut buffer, &IndentSettings::spaces(4)).is_applied());

    assert_eq!(
        buffer.lines,
        vec!["func foo(", "    a: Int,", "    b: (x: Int, y: Int)", ") {"]
    );
}

#[test]
fn test_break_produces_exactly_one_line_per_parameter() {
    let mut buffer = test_buffer("func foo(a: Int, b: (x: Int, y: Int)) {", 0, 0);
    assert!(break_parameters(&mut buffer, &IndentSettings::spaces(4)).is_applied());

    let params: Vec<&String> = buffer.lines[1..buffer.lines.len() - 1].iter().collect();
    assert_eq!(params.len(), 2);
    assert_eq!(params[0].trim(), "a: Int,");
    assert_eq!(params[1].trim(), "b: (x: Int, y: Int)");
}

#[test]
fn test_break_rust_call_with_generics_and_closures() {
    let mut buffer = test_buffer(
        "    let v = build(items[0], |a, b| { a + b }, vec![1, 2]);",
        0,
        10,
    );
    assert!(break_parameters(&mut buffer, &IndentSettings::spaces(4)).is_applied());

    assert_eq!(
        buffer.lines,
        vec![
            "    let v = build(",
            "        items[0],",
            "        |a,",
            "        b| { a + b },",
            "        vec![1, 2]",
            "    );",
        ]
    );
}

#[test]
fn test_break_only_touches_cursor_line() {
    let text = "struct S {}\nimpl S {\n\tfn new(a: u8, b: u8) -> Self {\n}";
    let mut buffer = test_buffer(text, 2, 5);
    assert!(break_parameters(&mut buffer, &IndentSettings::tabs(8)).is_applied());

    assert_eq!(
        buffer_to_string(&buffer),
        "struct S {}\nimpl S {\n\tfn new(\n\t\ta: u8,\n\t\tb: u8\n\t) -> Self {\n}"
    );
    assert_eq!(selection_tuple(&buffer), ((2, 0), (2, 0)));
}

#[test]
fn test_break_uses_selection_start_line() {
    let mut buffer = common::test_buffer_with_selection("f(a, b)\ng(c, d)", 1, 0, 0, 2);
    assert!(break_parameters(&mut buffer, &IndentSettings::spaces(2)).is_applied());

    assert_eq!(buffer.lines, vec!["f(", "  a,", "  b", ")", "g(c, d)"]);
}

#[test]
fn test_break_single_parameter() {
    let mut buffer = test_buffer("print(message)", 0, 0);
    assert!(break_parameters(&mut buffer, &IndentSettings::spaces(4)).is_applied());

    assert_eq!(buffer.lines, vec!["print(", "    message", ")"]);
}

#[test]
fn test_break_empty_parameter_list_is_noop() {
    let mut buffer = test_buffer("func run() {", 0, 4);
    assert_eq!(
        break_parameters(&mut buffer, &IndentSettings::spaces(4)),
        EditOutcome::Skipped(SkipReason::EmptyParameterList)
    );
    assert_eq!(buffer.lines, vec!["func run() {"]);
    assert_eq!(selection_tuple(&buffer), ((0, 4), (0, 4)));
}

#[test]
fn test_break_without_parentheses_is_noop() {
    let mut buffer = test_buffer("let total = a + b", 0, 0);
    assert_eq!(
        break_parameters(&mut buffer, &IndentSettings::spaces(4)),
        EditOutcome::Skipped(SkipReason::NoParameterList)
    );
    assert_eq!(buffer.lines, vec!["let total = a + b"]);
}
