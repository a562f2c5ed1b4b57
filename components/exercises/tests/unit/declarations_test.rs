//! Binding-rule tests for the declarations exercises.

use es_values::{Console, ErrorKind, EsValue};
use exercises::{check_scope, print_many_times, BindingKind, ScopeChain};

#[test]
fn shadowing_stacks_through_multiple_blocks() {
    let mut scope = ScopeChain::new();
    scope
        .declare("i", BindingKind::Let, EsValue::number(1.0))
        .unwrap();
    scope.enter_block();
    scope
        .declare("i", BindingKind::Let, EsValue::number(2.0))
        .unwrap();
    scope.enter_block();
    scope
        .declare("i", BindingKind::Let, EsValue::number(3.0))
        .unwrap();

    assert_eq!(scope.lookup("i"), Some(EsValue::number(3.0)));
    scope.exit_block();
    assert_eq!(scope.lookup("i"), Some(EsValue::number(2.0)));
    scope.exit_block();
    assert_eq!(scope.lookup("i"), Some(EsValue::number(1.0)));
}

#[test]
fn let_then_var_in_same_scope_is_syntax_error() {
    let mut scope = ScopeChain::new();
    scope
        .declare("camper", BindingKind::Let, EsValue::string("James"))
        .unwrap();
    let error = scope
        .declare("camper", BindingKind::Var, EsValue::string("David"))
        .unwrap_err();
    assert_eq!(error.kind, ErrorKind::SyntaxError);
    assert!(error.message.contains("'camper'"));
}

#[test]
fn assignment_updates_the_innermost_binding_only() {
    let mut scope = ScopeChain::new();
    scope
        .declare("x", BindingKind::Let, EsValue::number(1.0))
        .unwrap();
    scope.enter_block();
    scope
        .declare("x", BindingKind::Let, EsValue::number(2.0))
        .unwrap();
    scope.assign("x", EsValue::number(20.0)).unwrap();
    scope.exit_block();
    // The outer binding never saw the write.
    assert_eq!(scope.lookup("x"), Some(EsValue::number(1.0)));
}

#[test]
fn assignment_reaches_outer_binding_when_not_shadowed() {
    let mut scope = ScopeChain::new();
    scope
        .declare("x", BindingKind::Let, EsValue::number(1.0))
        .unwrap();
    scope.enter_block();
    scope.assign("x", EsValue::number(20.0)).unwrap();
    scope.exit_block();
    assert_eq!(scope.lookup("x"), Some(EsValue::number(20.0)));
}

#[test]
fn exit_block_never_pops_the_function_scope() {
    let mut scope = ScopeChain::new();
    scope
        .declare("x", BindingKind::Let, EsValue::number(1.0))
        .unwrap();
    scope.exit_block();
    scope.exit_block();
    assert_eq!(scope.lookup("x"), Some(EsValue::number(1.0)));
}

#[test]
fn check_scope_returns_the_function_scope_value() {
    let console = Console::captured();
    let result = check_scope(&console).unwrap();
    assert_eq!(result, EsValue::string("function scope"));
}

#[test]
fn print_many_times_counts_even_indices() {
    // "cats" has length 4: even indices 0 and 2, two lines.
    let console = Console::captured();
    print_many_times(&console, "cats");
    assert_eq!(console.transcript().len(), 2);
}
