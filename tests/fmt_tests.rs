use lambda_front::fmt::{to_functional, to_source};
use lambda_front::parse_source;

fn format_source(input: &str) -> String {
    to_source(&parse_source(input).expect("parsing failed"))
}

fn format_functional(input: &str) -> String {
    to_functional(&parse_source(input).expect("parsing failed"))
}

#[test]
fn format_identity() {
    assert_eq!(format_source("λx.x"), "λx.x");
    assert_eq!(format_functional("λx.x"), "Function(Name(x), Name(x))");
}

#[test]
fn format_normalizes_whitespace() {
    assert_eq!(format_source("  ( λ f . f\n\n   a )  "), "(λf.f a)");
}

#[test]
fn format_program_with_definitions() {
    let input = "def identity = λx.x\ndef apply = λfunc.λarg.(func arg)\nidentity";
    assert_eq!(format_source(input), input);
    assert_eq!(
        format_functional(input),
        "DefinitionList(Definition(Name(identity), Function(Name(x), Name(x))), \
         Definition(Name(apply), Function(Name(func), Function(Name(arg), Application(Name(func), Name(arg))))))\n\
         Name(identity)"
    );
}

#[test]
fn format_definitions_only() {
    let input = "def a = x\ndef b = y";
    assert_eq!(format_source(input), input);
    assert_eq!(
        format_functional(input),
        "DefinitionList(Definition(Name(a), Name(x)), Definition(Name(b), Name(y)))"
    );
}

#[test]
fn format_empty_program() {
    assert_eq!(format_source(""), "");
    assert_eq!(format_functional(""), "");
}

#[test]
fn format_round_trips() {
    for input in [
        "λfirst.λsecond.first",
        "λf.λa.(f a)",
        "(λx.x λa.λb.b)",
        "(λS.(S S) λS.(S S))",
        "((λfunc.λarg.(func arg) λx.x) λS.(S S))",
        "def make_pair = λfirst.λsecond.λfunc.((func first) second)\n(make_pair a)",
    ] {
        let printed = format_source(input);
        assert_eq!(printed, input);
        let reparsed = parse_source(&printed).expect("reparsing failed");
        assert_eq!(to_functional(&reparsed), format_functional(input));
    }
}

#[test]
fn display_uses_source_notation() {
    let program = parse_source("def id = λx.x\n(id y)").unwrap();
    assert_eq!(program.to_string(), "def id = λx.x\n(id y)");
    let expression = program.expression().unwrap();
    assert_eq!(expression.to_string(), "(id y)");
}
