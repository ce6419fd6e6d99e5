use crate::lexer::Span;

use super::visit::{Visitor, walk_expression};

/// Identity of a single name occurrence, assigned by the node factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NameId(pub(crate) usize);

impl NameId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Identity of a function node, assigned by the node factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FunctionId(pub(crate) usize);

impl FunctionId {
    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Name(Name),
    Function(Function),
    Application(Application),
}

impl Expression {
    pub fn span(&self) -> Span {
        match self {
            Expression::Name(name) => name.span,
            Expression::Function(function) => function.span,
            Expression::Application(application) => application.span,
        }
    }

    pub fn accept<'ast, V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V) {
        walk_expression(visitor, self);
    }

    /// Whether this expression, taken on its own, binds `name` anywhere
    /// inside it.
    pub fn is_bound(&self, name: &str) -> bool {
        match self {
            Expression::Name(inner) => inner.is_bound(name),
            Expression::Function(inner) => inner.is_bound(name),
            Expression::Application(inner) => inner.is_bound(name),
        }
    }
}

/// An identifier occurrence, either a use site or a binding site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name {
    pub id: NameId,
    pub text: String,
    pub span: Span,
}

impl Name {
    /// A lone name binds nothing.
    pub fn is_bound(&self, _name: &str) -> bool {
        false
    }
}

/// `λparameter.body`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    pub id: FunctionId,
    pub parameter: Name,
    pub body: Box<Expression>,
    pub span: Span,
}

impl Function {
    pub fn is_bound(&self, name: &str) -> bool {
        self.parameter.text == name || self.body.is_bound(name)
    }
}

/// `(callee argument)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Application {
    pub callee: Box<Expression>,
    pub argument: Box<Expression>,
    pub span: Span,
}

impl Application {
    pub fn is_bound(&self, name: &str) -> bool {
        self.callee.is_bound(name) || self.argument.is_bound(name)
    }
}
