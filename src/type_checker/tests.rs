use crate::{
    ast::{
        ast::{Node, NodeKind},
        types::DataType,
    },
    errors::{diagnostics::Warning, errors::Error},
    parser::parser::parse,
};

use super::type_checker::{type_check, type_check_node, TypeChecker};

fn check(source: &str) -> Result<(Node, Vec<Warning>), Error> {
    let (root, scopes) = parse(source, "test.code")?;
    let mut warnings: Vec<Warning> = vec![];
    let root = type_check(root, &scopes, &mut warnings)?;
    Ok((root, warnings))
}

fn error_name(source: &str) -> String {
    check(source).unwrap_err().get_error_name().to_string()
}

/// The type of the only statement of `source`.
fn type_of(source: &str) -> DataType {
    let (root, scopes) = parse(source, "test.code").unwrap();
    let NodeKind::StatementList(mut statements) = root.kind else {
        panic!("root is not a statement list");
    };
    let statement = statements.pop().unwrap();

    let mut warnings: Vec<Warning> = vec![];
    let mut type_checker = TypeChecker::new(&scopes, &mut warnings);
    type_check_node(&mut type_checker, statement).unwrap().1
}

#[test]
fn test_literal_types() {
    assert_eq!(type_of("1"), DataType::Integer);
    assert_eq!(type_of("1.5"), DataType::Float);
    assert_eq!(type_of("\"s\""), DataType::String);
}

#[test]
fn test_arithmetic_types() {
    assert_eq!(type_of("1 + 2 * 3"), DataType::Integer);
    assert_eq!(type_of("1.5 ^ 2.0"), DataType::Float);
    assert_eq!(type_of("2 / 4.0"), DataType::Float);
}

#[test]
fn test_ordering_yields_boolean() {
    assert_eq!(type_of("1 < 2"), DataType::Boolean);
    assert_eq!(type_of("1 >= 2.5"), DataType::Boolean);
}

#[test]
fn test_equality_yields_operand_type() {
    assert_eq!(type_of("1 == 2"), DataType::Integer);
    assert_eq!(type_of("1.0 != 2"), DataType::Float);
    assert_eq!(type_of("\"a\" == \"b\""), DataType::String);
}

#[test]
fn test_equality_mismatch() {
    assert_eq!(error_name("1 == \"a\""), "EqualityTypeMismatch");
    assert_eq!(error_name("(1 < 2) == (3 < 4)"), "EqualityTypeMismatch");
}

#[test]
fn test_string_arithmetic_is_fatal() {
    assert_eq!(error_name("1 + \"a\""), "TypeMatchError");
    assert_eq!(error_name("\"a\" * \"b\""), "TypeMatchError");
    assert_eq!(error_name("\"a\" < \"b\""), "TypeMatchError");
}

#[test]
fn test_widening_inserts_cast_and_warns() {
    let (root, warnings) = check("float f = 1 + 2.5").unwrap();

    assert_eq!(
        root.to_string(),
        "[STATEMENTS [VAR Float [= f [Add [CAST(Float) [IntegerLiteral 1]] [FloatLiteral 2.5]]]]]"
    );
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].message, "Implicit Integer->Float cast");
    assert_eq!(warnings[0].position.column, 13);
}

#[test]
fn test_widening_right_operand() {
    let (root, warnings) = check("bool b = 2.5 > 1").unwrap();

    assert_eq!(
        root.to_string(),
        "[STATEMENTS [VAR Boolean [= b [GreaterThan [FloatLiteral 2.5] [CAST(Float) [IntegerLiteral 1]]]]]]"
    );
    assert_eq!(warnings.len(), 1);
}

#[test]
fn test_cast_takes_operand_position() {
    let (root, _) = check("1.5 * 2").unwrap();
    let NodeKind::StatementList(statements) = root.kind else {
        panic!("root is not a statement list");
    };
    let NodeKind::Binary { right, .. } = &statements[0].kind else {
        panic!("expected a binary node");
    };

    assert_eq!(right.position.column, 7);
}

#[test]
fn test_no_widening_between_same_types() {
    let (_, warnings) = check("int a = 1 + 2 float b = 1.0 + 2.0").unwrap();
    assert!(warnings.is_empty());
}

#[test]
fn test_widening_is_idempotent() {
    let (root, scopes) = parse("float f = 1 + 2.5", "test.code").unwrap();

    let mut first: Vec<Warning> = vec![];
    let once = type_check(root, &scopes, &mut first).unwrap();
    let mut second: Vec<Warning> = vec![];
    let twice = type_check(once.clone(), &scopes, &mut second).unwrap();

    assert_eq!(once, twice);
    assert_eq!(first.len(), 1);
    assert!(second.is_empty());
}

#[test]
fn test_cast_types() {
    assert_eq!(type_of("<int> 2.5"), DataType::Integer);
    assert_eq!(type_of("<float>(1 < 2)"), DataType::Float);
    assert_eq!(type_of("<bool> 1"), DataType::Boolean);
}

#[test]
fn test_cast_from_string_is_fatal() {
    assert_eq!(error_name("<int> \"12\""), "InvalidCast");
}

#[test]
fn test_undeclared_identifier() {
    let error = check("print missing").unwrap_err();
    assert_eq!(error.get_error_name(), "VariableNotDeclared");
    assert_eq!(error.get_position().column, 7);
}

#[test]
fn test_predicates_must_be_boolean() {
    assert_eq!(error_name("if 1 { print 1 }"), "PredicateNotBoolean");
    assert_eq!(error_name("while 1 == 1 { }"), "PredicateNotBoolean");
    assert!(check("if 1 < 2 { print 1 } else { print 2 }").is_ok());
}

#[test]
fn test_branches_are_checked() {
    assert_eq!(
        error_name("if 1 < 2 { print 1 } else { print 1 + \"a\" }"),
        "TypeMatchError"
    );
}

#[test]
fn test_declaration_type_must_match_exactly() {
    assert_eq!(error_name("int x = 1 + 2.0"), "DeclarationTypeMismatch");
    assert_eq!(error_name("float y = 1 + 2"), "DeclarationTypeMismatch");
    assert!(check("string s = \"ok\" int n").is_ok());
}

#[test]
fn test_assignment() {
    assert!(check("int a = 1 set a = 2").is_ok());
    assert_eq!(
        error_name("int a = 1 set a = \"two\""),
        "AssignmentTypeMismatch"
    );
    assert_eq!(error_name("set nowhere = 1"), "VariableNotDeclared");
}

#[test]
fn test_call_returns_declared_type() {
    let source = "float scale(float v, int k) { v * k } ";
    assert!(check(&format!("{} float r = scale(1.5, 2)", source)).is_ok());
    assert_eq!(
        error_name(&format!("{} int r = scale(1.5, 2)", source)),
        "DeclarationTypeMismatch"
    );
}

#[test]
fn test_call_argument_types() {
    let error = check("int twice(int n) { n * 2 } twice(1.5)").unwrap_err();
    assert_eq!(error.get_error_name(), "ArgumentTypeMatchError");
    assert_eq!(error.get_position().column, 34);
}

#[test]
fn test_call_checks_arguments() {
    assert_eq!(
        error_name("int twice(int n) { n * 2 } twice(missing)"),
        "VariableNotDeclared"
    );
}

#[test]
fn test_call_of_non_callable() {
    assert_eq!(error_name("int foo = 1 foo()"), "NotCallable");
    assert_eq!(error_name("foo()"), "VariableNotDeclared");
}

#[test]
fn test_function_body_is_checked() {
    assert_eq!(
        error_name("int broken(int n) { set n = \"text\" }"),
        "AssignmentTypeMismatch"
    );
}

#[test]
fn test_function_is_not_visible_in_its_own_body() {
    assert_eq!(
        error_name("int loop(int n) { loop(n) }"),
        "VariableNotDeclared"
    );
}

#[test]
fn test_parameters_are_local() {
    assert_eq!(
        error_name("int id(int n) { n } print n"),
        "VariableNotDeclared"
    );
}
