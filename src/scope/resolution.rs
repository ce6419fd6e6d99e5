use std::collections::HashMap;

use crate::ast::{Binder, FunctionId, NameId};
use crate::lexer::Span;

/// A function parameter that hides the parameter of an enclosing function.
///
/// Substituting into the inner body would capture the outer variable, so
/// one of the two functions has to be alpha-renamed first. Renaming is not
/// performed here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shadowing {
    pub name: String,
    pub shadowed: FunctionId,
    pub shadowing: FunctionId,
    pub span: Span,
}

/// Scope annotations of a program, keyed by node identity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    bindings: HashMap<NameId, Option<Binder>>,
    uses: HashMap<Binder, Vec<NameId>>,
    shadowings: Vec<Shadowing>,
}

impl Resolution {
    pub(crate) fn record(&mut self, name: NameId, binder: Option<Binder>) {
        self.bindings.insert(name, binder);
        if let Some(binder) = binder {
            self.uses.entry(binder).or_default().push(name);
        }
    }

    pub(crate) fn record_shadowing(&mut self, shadowing: Shadowing) {
        self.shadowings.push(shadowing);
    }

    /// The binder `name` was resolved to; `None` for free names and for
    /// names that are binding sites rather than uses.
    pub fn binding(&self, name: NameId) -> Option<Binder> {
        self.bindings.get(&name).copied().flatten()
    }

    /// Whether `name` is a use site that resolved to no binder.
    pub fn is_free(&self, name: NameId) -> bool {
        matches!(self.bindings.get(&name), Some(None))
    }

    /// Whether `name` was visited as a use site at all.
    pub fn is_use(&self, name: NameId) -> bool {
        self.bindings.contains_key(&name)
    }

    /// Every use site bound to `binder`, in source order.
    pub fn uses_of(&self, binder: Binder) -> &[NameId] {
        self.uses.get(&binder).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn shadowings(&self) -> &[Shadowing] {
        &self.shadowings
    }

    /// Whether alpha-renaming is required before substitution is sound.
    pub fn needs_renaming(&self) -> bool {
        !self.shadowings.is_empty()
    }

    pub fn use_count(&self) -> usize {
        self.bindings.len()
    }
}
