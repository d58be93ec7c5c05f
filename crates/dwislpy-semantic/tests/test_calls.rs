//! Function and procedure call tests.

mod common;
use common::{error_kind, error_message, should_pass};
use dwislpy_core::ErrorKind;

const REPEAT: &str = r#"
def repeat(n: int, s: str) -> str:
    result: str = ""
    while 0 < n:
        result = result + s
        n = n - 1
    return result
"#;

#[test]
fn test_function_call() {
    let source = format!("{REPEAT}print(repeat(3, 'ab'))\n");
    assert!(should_pass(&source));
}

#[test]
fn test_too_few_arguments() {
    let source = format!("{REPEAT}print(repeat(3))\n");
    assert_eq!(error_kind(&source), ErrorKind::ArityMismatch);
}

#[test]
fn test_too_many_arguments() {
    let source = format!("{REPEAT}print(repeat(3, 'a', 'b'))\n");
    assert_eq!(error_kind(&source), ErrorKind::ArityMismatch);
}

#[test]
fn test_argument_type_mismatch_names_position() {
    let source = format!("{REPEAT}print(repeat('3', 'a'))\n");
    assert_eq!(error_kind(&source), ErrorKind::TypeMismatch);
    insta::assert_snapshot!(
        error_message(&source),
        @"type mismatch: argument 1 of 'repeat': expected 'int', found 'str'"
    );
}

#[test]
fn test_arity_is_checked_before_argument_types() {
    let source = format!("{REPEAT}print(repeat('3'))\n");
    assert_eq!(error_kind(&source), ErrorKind::ArityMismatch);
}

#[test]
fn test_unknown_function() {
    assert_eq!(error_kind("print(missing(1))\n"), ErrorKind::UnknownIdentifier);
    assert_eq!(error_kind("missing(1)\n"), ErrorKind::UnknownIdentifier);
}

#[test]
fn test_call_result_type() {
    let source = r#"
def half(n: int) -> int:
    return n // 2
x: str = half(4)
"#;
    assert_eq!(error_kind(source), ErrorKind::TypeMismatch);
}

#[test]
fn test_forward_reference() {
    let source = r#"
def first() -> int:
    return second() + 1
def second() -> int:
    return 1
print(first())
"#;
    assert!(should_pass(source));
}

#[test]
fn test_mutual_recursion() {
    let source = r#"
def is_even(n: int) -> bool:
    if n == 0:
        return True
    else:
        return is_odd(n - 1)
def is_odd(n: int) -> bool:
    if n == 0:
        return False
    else:
        return is_even(n - 1)
print(is_even(10))
"#;
    assert!(should_pass(source));
}

#[test]
fn test_procedure_call_statement() {
    let source = r#"
def greet(name: str) -> None:
    print("hello, " + name)
    return
greet("world")
"#;
    assert!(should_pass(source));
}

#[test]
fn test_procedure_used_as_value() {
    let source = r#"
def greet(name: str) -> None:
    print(name)
    return
print(greet("world"))
"#;
    assert_eq!(error_kind(source), ErrorKind::TypeMismatch);
}

#[test]
fn test_function_called_as_statement() {
    let source = r#"
def one() -> int:
    return 1
one()
"#;
    assert_eq!(error_kind(source), ErrorKind::TypeMismatch);
}

#[test]
fn test_procedure_call_arguments_are_checked() {
    let source = r#"
def greet(name: str) -> None:
    print(name)
    return
greet(1)
"#;
    assert_eq!(error_kind(source), ErrorKind::TypeMismatch);
}

#[test]
fn test_definitions_cannot_see_main_variables() {
    let source = r#"
limit: int = 10
def over(n: int) -> bool:
    return limit < n
"#;
    assert_eq!(error_kind(source), ErrorKind::UnknownIdentifier);
}

#[test]
fn test_local_may_shadow_main_variable_name() {
    let source = r#"
x: str = "main"
def f() -> int:
    x: int = 1
    return x
print(x + str(f()))
"#;
    assert!(should_pass(source));
}
