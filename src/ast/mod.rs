pub mod expression;
pub(crate) mod factory;
pub mod visit;

pub use expression::{Application, Expression, Function, FunctionId, Name, NameId};
pub(crate) use factory::NodeFactory;
pub use visit::Visitor;

use crate::lexer::Span;
use crate::scope::Resolution;

/// Position of a definition within its program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DefinitionId(pub(crate) usize);

impl DefinitionId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A node that introduces a name into scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Binder {
    Definition(DefinitionId),
    Function(FunctionId),
}

/// `def name = expression`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    pub name: Name,
    pub expression: Expression,
    pub span: Span,
}

impl Definition {
    /// Always `false`: whatever the defining expression binds stays inside
    /// it and is not reported through the definition itself.
    pub fn is_bound(&self, _name: &str) -> bool {
        false
    }
}

/// A parsed and resolved program.
///
/// Only the parser builds programs, and every program is resolved exactly
/// once before it is handed out. The scope annotations live in
/// [`Program::resolution`] and are keyed by node identity, so the tree
/// itself never changes after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    definitions: Vec<Definition>,
    expression: Option<Expression>,
    resolution: Resolution,
}

impl Program {
    pub(crate) fn new(
        definitions: Vec<Definition>,
        expression: Option<Expression>,
        resolution: Resolution,
    ) -> Self {
        Self {
            definitions,
            expression,
            resolution,
        }
    }

    pub fn definitions(&self) -> &[Definition] {
        &self.definitions
    }

    pub fn definition(&self, id: DefinitionId) -> Option<&Definition> {
        self.definitions.get(id.0)
    }

    pub fn expression(&self) -> Option<&Expression> {
        self.expression.as_ref()
    }

    pub fn resolution(&self) -> &Resolution {
        &self.resolution
    }

    /// The binder a use-site name refers to, `None` if it is free or not a
    /// use site.
    pub fn binding_of(&self, name: &Name) -> Option<Binder> {
        self.resolution.binding(name.id)
    }

    /// Finds the function node with the given identity.
    pub fn function(&self, id: FunctionId) -> Option<&Function> {
        let mut finder = visit::FindFunction::new(id);
        self.accept(&mut finder);
        finder.found
    }

    /// Text of the name a binder introduces.
    pub fn binder_name(&self, binder: Binder) -> Option<&str> {
        match binder {
            Binder::Definition(id) => self.definition(id).map(|d| d.name.text.as_str()),
            Binder::Function(id) => self.function(id).map(|f| f.parameter.text.as_str()),
        }
    }

    /// Whether the trailing expression binds `name`. Definitions are not
    /// consulted.
    pub fn is_bound(&self, name: &str) -> bool {
        self.expression
            .as_ref()
            .is_some_and(|expression| expression.is_bound(name))
    }

    pub fn accept<'ast, V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V) {
        visitor.visit_program(self);
    }
}
