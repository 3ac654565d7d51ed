//! Integration tests for end-to-end compilation.
//!
//! These tests run the complete pipeline from source text through scanning,
//! parsing and type checking, and lower the result to instructions where
//! the instruction set allows it.

use frontend::{
    ast::{ast::NodeKind, types::DataType},
    compile,
    compiler::compiler::{generate, Immediate, Opcode},
    errors::{diagnostics::Warning, errors::ErrorImpl},
    Program,
};

fn compile_ok(source: &str) -> (Program, Vec<Warning>) {
    let mut warnings: Vec<Warning> = vec![];
    let program = compile(source, "main.code", &mut warnings).unwrap();
    (program, warnings)
}

fn compile_err(source: &str) -> ErrorImpl {
    let mut warnings: Vec<Warning> = vec![];
    compile(source, "main.code", &mut warnings)
        .unwrap_err()
        .get_internal_error()
        .clone()
}

#[test]
fn test_declaration_rejects_widened_initializer() {
    assert_eq!(
        compile_err("int x = 1 + 2.0"),
        ErrorImpl::DeclarationTypeMismatch {
            expected: "Integer".to_string(),
            received: "Float".to_string(),
        }
    );
}

#[test]
fn test_declaration_equality_is_exact() {
    assert_eq!(
        compile_err("float y = 1 + 2"),
        ErrorImpl::DeclarationTypeMismatch {
            expected: "Float".to_string(),
            received: "Integer".to_string(),
        }
    );
}

#[test]
fn test_integer_predicate_is_fatal() {
    assert_eq!(
        compile_err("if 1 { print 1 }"),
        ErrorImpl::PredicateNotBoolean {
            received: "Integer".to_string(),
        }
    );
}

#[test]
fn test_assignment_of_matching_type() {
    let (program, warnings) = compile_ok("int a = 1 set a = 2");

    assert!(warnings.is_empty());
    assert_eq!(
        program.root.to_string(),
        "[STATEMENTS [VAR Integer [= a [IntegerLiteral 1]]] \
         [ASSIGN [= [Identifier a] [IntegerLiteral 2]]]]"
    );
}

#[test]
fn test_call_of_undeclared_function() {
    assert_eq!(
        compile_err("foo()"),
        ErrorImpl::VariableNotDeclared {
            variable: "foo".to_string(),
        }
    );
    assert_eq!(
        compile_err("string foo = \"bar\" foo()"),
        ErrorImpl::NotCallable {
            identifier: "foo".to_string(),
        }
    );
}

#[test]
fn test_string_in_arithmetic_is_fatal() {
    assert_eq!(
        compile_err("1 + \"a\""),
        ErrorImpl::TypeMatchError {
            left: "Integer".to_string(),
            right: "String".to_string(),
        }
    );
}

#[test]
fn test_shadowed_variable_resolves_to_outer_after_block() {
    let source = "
int x = 1
while x < 10 {
    string x = \"inner\"
    print x
}
set x = x + 1
";
    let (program, _) = compile_ok(source);

    let NodeKind::StatementList(statements) = &program.root.kind else {
        panic!("root is not a statement list");
    };
    let NodeKind::Assignment { identifier, .. } = &statements[2].kind else {
        panic!("expected an assignment");
    };
    let NodeKind::Identifier { name, scope } = &identifier.kind else {
        panic!("expected an identifier");
    };

    assert_eq!(
        program.scopes.lookup_symbol(*scope, name),
        Some(DataType::Integer)
    );
}

#[test]
fn test_inner_string_shadow_is_string() {
    assert_eq!(
        compile_err("int x = 1 if x < 2 { string x = \"s\" set x = 5 }"),
        ErrorImpl::AssignmentTypeMismatch {
            expected: "String".to_string(),
            received: "Integer".to_string(),
        }
    );
}

#[test]
fn test_redeclaration_is_fatal_for_every_type() {
    for (first, second) in [
        ("int", "int"),
        ("float", "string"),
        ("string", "bool"),
        ("bool", "callable"),
    ] {
        let source = format!("{} v {} v", first, second);
        assert_eq!(
            compile_err(&source),
            ErrorImpl::IdentifierAlreadyDeclared {
                identifier: "v".to_string(),
            }
        );
    }
}

#[test]
fn test_redeclaring_function_name() {
    assert_eq!(
        compile_err("int f() { } float f() { }"),
        ErrorImpl::IdentifierAlreadyDeclared {
            identifier: "f".to_string(),
        }
    );
}

#[test]
fn test_widening_is_stable_across_passes() {
    let mut warnings: Vec<Warning> = vec![];
    let (root, scopes) = frontend::parser::parser::parse("float r = 2 * 1.5 + 3", "main.code").unwrap();

    let once = frontend::type_checker::type_checker::type_check(root, &scopes, &mut warnings).unwrap();
    assert_eq!(warnings.len(), 2);

    let twice = frontend::type_checker::type_checker::type_check(once.clone(), &scopes, &mut warnings)
        .unwrap();
    assert_eq!(warnings.len(), 2);
    assert_eq!(once, twice);
    assert_eq!(
        twice.to_string(),
        "[STATEMENTS [VAR Float [= r [Add [Multiply [CAST(Float) [IntegerLiteral 2]] [FloatLiteral 1.5]] \
         [CAST(Float) [IntegerLiteral 3]]]]]]"
    );
}

#[test]
fn test_call_arity_is_enforced() {
    let declaration = "int add(int a, int b) { a + b } ";

    for (arguments, received) in [("1", 1), ("1, 2, 3", 3)] {
        let source = format!("{}add({})", declaration, arguments);
        assert_eq!(
            compile_err(&source),
            ErrorImpl::ArgumentCountMismatch {
                expected: 2,
                received,
            }
        );
    }

    let (program, _) = compile_ok(&format!("{}int sum = add(1, 2)", declaration));
    assert_eq!(
        program.root.to_string(),
        "[STATEMENTS [FUNCTION add [PARAMS [VAR Integer [= a NULL]] [VAR Integer [= b NULL]]] \
         [EXEC [STATEMENTS [Add [Identifier a] [Identifier b]]]] [RET Integer]] \
         [VAR Integer [= sum [CALL add [PARAMS [IntegerLiteral 1] [IntegerLiteral 2]]]]]]"
    );
}

#[test]
fn test_call_argument_type_is_enforced() {
    assert_eq!(
        compile_err("int add(int a, int b) { a + b } add(1, \"2\")"),
        ErrorImpl::ArgumentTypeMatchError {
            expected: "Integer".to_string(),
            received: "String".to_string(),
        }
    );
}

#[test]
fn test_function_callable_from_nested_block() {
    let source = "
float half(float v) { v / 2.0 }
if 1 < 2 {
    float h = half(3.0)
    print h
}
";
    assert!(compile_ok(source).0.root.to_string().contains("[CALL half"));
}

#[test]
fn test_shadowed_function_name_loses_outer_signature() {
    assert_eq!(
        compile_err("int f(int a) { print a } if 1 < 2 { callable f print f(1) }"),
        ErrorImpl::CallableNotVisible {
            identifier: "f".to_string(),
        }
    );
    assert_eq!(
        compile_err("int f(int a) { print a } if 1 < 2 { callable f = f print f(\"s\") }"),
        ErrorImpl::CallableNotVisible {
            identifier: "f".to_string(),
        }
    );
}

#[test]
fn test_inner_function_shadows_outer_signature() {
    let source = "
int f(int a) { print a }
if 1 < 2 {
    float f(string s) { print s }
    float r = f(\"x\")
}
";
    assert!(compile_ok(source).0.root.to_string().contains("[VAR Float [= r [CALL f"));
}

#[test]
fn test_literals_round_trip() {
    let (program, _) = compile_ok("\"hello\" 123 1.5");
    let NodeKind::StatementList(statements) = &program.root.kind else {
        panic!("root is not a statement list");
    };

    assert_eq!(statements[0].kind, NodeKind::StringLiteral("hello".to_string()));
    assert_eq!(statements[1].kind, NodeKind::IntegerLiteral("123".to_string()));
    assert_eq!(statements[2].kind, NodeKind::FloatLiteral("1.5".to_string()));

    assert_eq!(
        compile_err("1."),
        ErrorImpl::MalformedNumber {
            token: "1.".to_string()
        }
    );
}

#[test]
fn test_warning_positions() {
    let (_, warnings) = compile_ok("float a = 1.0\nfloat b = a * 2\nbool c = 3 < a");

    assert_eq!(warnings.len(), 2);
    assert_eq!(
        warnings[0].to_string(),
        "WARNING - Implicit Integer->Float cast @ main.code:2:13"
    );
    assert_eq!(
        warnings[1].to_string(),
        "WARNING - Implicit Integer->Float cast @ main.code:3:12"
    );
}

#[test]
fn test_error_positions() {
    let mut warnings: Vec<Warning> = vec![];
    let error = compile("int a = 1\n\n  print a + \"b\"", "main.code", &mut warnings).unwrap_err();

    assert_eq!(error.get_position().to_string(), "main.code:3:11");
    assert_eq!(
        error.to_string(),
        "type mismatch - Integer->String @ main.code:3:11"
    );
}

#[test]
fn test_program_with_comments_and_crlf() {
    let source = "// running total\r\nint total = 0\r\nint i = 0\r\nwhile i < 3 {\r\n    set total = total + i // accumulate\r\n    set i = i + 1\r\n}\r\nprint total\r\n";
    let (program, warnings) = compile_ok(source);

    assert!(warnings.is_empty());
    assert!(program.root.to_string().starts_with("[STATEMENTS [VAR Integer [= total"));
}

#[test]
fn test_generate_instructions() {
    let (program, _) = compile_ok("string greeting = \"hi\" string copy set copy = greeting");
    let opcodes: Vec<Opcode> = generate(&program.root)
        .unwrap()
        .into_iter()
        .map(|instruction| instruction.opcode)
        .collect();

    assert_eq!(
        opcodes,
        vec![
            Opcode::Push(Immediate::String("hi".to_string())),
            Opcode::Store("greeting".to_string()),
            Opcode::Load("greeting".to_string()),
            Opcode::Store("copy".to_string()),
        ]
    );
}
