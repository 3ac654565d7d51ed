use std::{
    collections::{HashMap, HashSet},
    rc::Rc,
};

use crate::ast::types::{DataType, Signature};

/// Index of a scope inside its `ScopeStack`.
pub type ScopeId = usize;

#[derive(Debug)]
pub struct Scope {
    pub id: ScopeId,
    /// Everything visible here: a copy of the parent's symbols taken on
    /// entry, plus this scope's own additions.
    symbols: HashMap<String, DataType>,
    /// Names added in this scope itself, not inherited.
    declared: HashSet<String>,
    callables: HashMap<String, Rc<Signature>>,
}

impl Scope {
    fn new(id: ScopeId, parent: Option<&Scope>) -> Self {
        match parent {
            Some(parent) => Scope {
                id,
                symbols: parent.symbols.clone(),
                declared: HashSet::new(),
                callables: parent.callables.clone(),
            },
            None => Scope {
                id,
                symbols: HashMap::new(),
                declared: HashSet::new(),
                callables: HashMap::new(),
            },
        }
    }

    pub fn get_symbol(&self, name: &str) -> Option<DataType> {
        self.symbols.get(name).copied()
    }

    pub fn get_callable(&self, name: &str) -> Option<Rc<Signature>> {
        self.callables.get(name).map(Rc::clone)
    }

    #[cfg(test)]
    pub(crate) fn is_declared_here(&self, name: &str) -> bool {
        self.declared.contains(name)
    }
}

/// Every scope of one compilation, plus the path of currently open scopes.
///
/// Scopes are never dropped when exited; nodes keep referring to them by
/// `ScopeId` until the type checker has run.
#[derive(Debug, Default)]
pub struct ScopeStack {
    scopes: Vec<Scope>,
    path: Vec<ScopeId>,
}

impl ScopeStack {
    pub fn new() -> Self {
        ScopeStack::default()
    }

    /// Pushes the root scope. Called exactly once per compilation.
    pub fn create_global_scope(&mut self) -> ScopeId {
        assert!(self.scopes.is_empty(), "global scope already created");

        self.scopes.push(Scope::new(0, None));
        self.path.push(0);
        0
    }

    /// Pushes a child of the current scope, seeded with a snapshot of the
    /// current scope's symbols and callables.
    pub fn enter_scope(&mut self) -> ScopeId {
        let id = self.scopes.len();
        let scope = Scope::new(id, Some(&self.scopes[self.current_scope()]));

        self.scopes.push(scope);
        self.path.push(id);
        id
    }

    pub fn exit_scope(&mut self) {
        assert!(self.path.len() > 1, "attempted to exit the global scope");
        self.path.pop();
    }

    pub fn current_scope(&self) -> ScopeId {
        match self.path.last() {
            Some(id) => *id,
            None => panic!("no scope is open, create the global scope first"),
        }
    }

    #[cfg(test)]
    pub(crate) fn depth(&self) -> usize {
        self.path.len()
    }

    pub fn get(&self, id: ScopeId) -> &Scope {
        &self.scopes[id]
    }

    /// Registers `name` in the current scope. Fails if this scope already
    /// declared it itself; shadowing an inherited name is allowed.
    ///
    /// A shadowing declaration also hides any inherited signature for the
    /// name until `add_callable` binds a new one.
    pub fn add_symbol(&mut self, name: &str, data_type: DataType) -> bool {
        let id = self.current_scope();
        let scope = &mut self.scopes[id];

        if !scope.declared.insert(name.to_string()) {
            return false;
        }
        scope.symbols.insert(name.to_string(), data_type);
        scope.callables.remove(name);
        true
    }

    /// Binds a callable signature in the current scope.
    pub fn add_callable(&mut self, name: &str, signature: Signature) {
        let id = self.current_scope();
        self.scopes[id]
            .callables
            .insert(name.to_string(), Rc::new(signature));
    }

    pub fn lookup_symbol(&self, scope: ScopeId, name: &str) -> Option<DataType> {
        self.get(scope).get_symbol(name)
    }

    pub fn lookup_callable(&self, scope: ScopeId, name: &str) -> Option<Rc<Signature>> {
        self.get(scope).get_callable(name)
    }
}
