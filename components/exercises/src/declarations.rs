//! Variable declaration semantics: `var`, `let` and `const`.
//!
//! The declaration exercises all hinge on the same binding rules, so they
//! share a small binding table. A `ScopeChain` is a stack of scopes with
//! parent links; `var` binds in the nearest function scope, `let` and
//! `const` bind in the current block and may shadow an outer name.

use es_values::{Console, EsError, EsResult, EsValue};

/// How a name was declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingKind {
    /// `var`: function-scoped, redeclaration silently overwrites
    Var,
    /// `let`: block-scoped, single declaration per scope
    Let,
    /// `const`: block-scoped, single declaration, read-only
    Const,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScopeKind {
    Function,
    Block,
}

#[derive(Debug)]
struct Scope {
    kind: ScopeKind,
    bindings: Vec<(String, BindingKind, EsValue)>,
}

impl Scope {
    fn new(kind: ScopeKind) -> Self {
        Scope {
            kind,
            bindings: Vec::new(),
        }
    }

    fn find(&self, name: &str) -> Option<usize> {
        self.bindings.iter().position(|(n, _, _)| n == name)
    }
}

/// A stack of scopes resolving names innermost-first.
///
/// # Examples
///
/// ```
/// use exercises::{BindingKind, ScopeChain};
/// use es_values::EsValue;
///
/// let mut scope = ScopeChain::new();
/// scope
///     .declare("i", BindingKind::Let, EsValue::string("function scope"))
///     .unwrap();
/// scope.enter_block();
/// scope
///     .declare("i", BindingKind::Let, EsValue::string("block scope"))
///     .unwrap();
/// assert_eq!(scope.lookup("i"), Some(EsValue::string("block scope")));
/// scope.exit_block();
/// assert_eq!(scope.lookup("i"), Some(EsValue::string("function scope")));
/// ```
#[derive(Debug)]
pub struct ScopeChain {
    scopes: Vec<Scope>,
}

impl ScopeChain {
    /// Create a chain with a single function scope.
    pub fn new() -> Self {
        ScopeChain {
            scopes: vec![Scope::new(ScopeKind::Function)],
        }
    }

    /// Enter a nested block scope.
    pub fn enter_block(&mut self) {
        self.scopes.push(Scope::new(ScopeKind::Block));
    }

    /// Exit the innermost block scope, dropping its bindings.
    ///
    /// The outermost function scope is never popped.
    pub fn exit_block(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    /// Declare a name in the current scope.
    ///
    /// `var` declarations bind in the nearest enclosing function scope and
    /// silently overwrite an existing `var` binding there. `let` and
    /// `const` bind in the current scope exactly once.
    ///
    /// # Errors
    ///
    /// Redeclaring a name already bound in the target scope is a
    /// `SyntaxError`, unless both declarations are `var`.
    pub fn declare(
        &mut self,
        name: &str,
        kind: BindingKind,
        value: EsValue,
    ) -> EsResult<()> {
        let index = match kind {
            BindingKind::Var => self
                .scopes
                .iter()
                .rposition(|s| s.kind == ScopeKind::Function)
                .unwrap_or(0),
            BindingKind::Let | BindingKind::Const => self.scopes.len() - 1,
        };
        let scope = &mut self.scopes[index];
        if let Some(existing) = scope.find(name) {
            let existing_kind = scope.bindings[existing].1;
            if kind == BindingKind::Var && existing_kind == BindingKind::Var {
                scope.bindings[existing].2 = value;
                return Ok(());
            }
            return Err(EsError::syntax_error(format!(
                "Identifier '{}' has already been declared",
                name
            )));
        }
        scope.bindings.push((name.to_string(), kind, value));
        Ok(())
    }

    /// Assign to an existing binding, strict-mode semantics.
    ///
    /// # Errors
    ///
    /// Assigning to a `const` binding is a `TypeError`; assigning to an
    /// undeclared name is a `ReferenceError`.
    pub fn assign(&mut self, name: &str, value: EsValue) -> EsResult<()> {
        for scope in self.scopes.iter_mut().rev() {
            if let Some(index) = scope.find(name) {
                if scope.bindings[index].1 == BindingKind::Const {
                    return Err(EsError::type_error(
                        "Assignment to constant variable.",
                    ));
                }
                scope.bindings[index].2 = value;
                return Ok(());
            }
        }
        Err(EsError::reference_error(format!("{} is not defined", name)))
    }

    /// Resolve a name innermost-first.
    pub fn lookup(&self, name: &str) -> Option<EsValue> {
        self.scopes.iter().rev().find_map(|scope| {
            scope
                .find(name)
                .map(|index| scope.bindings[index].2.clone())
        })
    }
}

impl Default for ScopeChain {
    fn default() -> Self {
        ScopeChain::new()
    }
}

/// The scope-comparison demonstration.
///
/// Binds `i` at function depth and again inside a nested block, logs which
/// value is visible at each nesting level, and returns the function-scope
/// value once the block has exited.
pub fn check_scope(console: &Console) -> EsResult<EsValue> {
    let mut scope = ScopeChain::new();
    scope.declare("i", BindingKind::Let, EsValue::string("function scope"))?;

    scope.enter_block();
    scope.declare("i", BindingKind::Let, EsValue::string("block scope"))?;
    if let Some(inner) = scope.lookup("i") {
        console.log(&[EsValue::string("Block scope i is:"), inner]);
    }
    scope.exit_block();

    let outer = scope
        .lookup("i")
        .ok_or_else(|| EsError::reference_error("i is not defined"))?;
    console.log(&[EsValue::string("Function scope i is:"), outer.clone()]);
    Ok(outer)
}

/// The `let` rewrite of the cat-talk demonstration.
pub fn cat_talk() -> String {
    let cat_name = "Oliver";
    format!("{} says Meow!", cat_name)
}

/// Logs `"<word> is cool!"` once per even index of the word.
///
/// The sentence is a `const` binding; only the loop counter changes.
pub fn print_many_times(console: &Console, word: &str) {
    let sentence = format!("{} is cool!", word);
    for _ in (0..word.len()).step_by(2) {
        console.log(&[EsValue::string(sentence.clone())]);
    }
}
