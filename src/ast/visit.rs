//! Read-only traversal over a finished program.
//!
//! There is one `visit_*` method per node kind. The defaults walk into the
//! node's children in source order, so an implementor overrides only the
//! kinds it cares about and calls the matching `walk_*` function to keep
//! descending. Visitors only ever see shared references; a program cannot
//! be changed through this interface.

use super::{Application, Definition, Expression, Function, FunctionId, Name, Program};

pub trait Visitor<'ast> {
    fn visit_program(&mut self, program: &'ast Program) {
        walk_program(self, program);
    }

    fn visit_definition(&mut self, definition: &'ast Definition) {
        walk_definition(self, definition);
    }

    fn visit_function(&mut self, function: &'ast Function) {
        walk_function(self, function);
    }

    fn visit_application(&mut self, application: &'ast Application) {
        walk_application(self, application);
    }

    fn visit_name(&mut self, _name: &'ast Name) {}
}

pub fn walk_program<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, program: &'ast Program) {
    for definition in program.definitions() {
        visitor.visit_definition(definition);
    }
    if let Some(expression) = program.expression() {
        walk_expression(visitor, expression);
    }
}

pub fn walk_definition<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    definition: &'ast Definition,
) {
    visitor.visit_name(&definition.name);
    walk_expression(visitor, &definition.expression);
}

pub fn walk_function<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, function: &'ast Function) {
    visitor.visit_name(&function.parameter);
    walk_expression(visitor, &function.body);
}

pub fn walk_application<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    application: &'ast Application,
) {
    walk_expression(visitor, &application.callee);
    walk_expression(visitor, &application.argument);
}

/// Dispatches to the visitor method matching the expression's kind.
pub fn walk_expression<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    expression: &'ast Expression,
) {
    match expression {
        Expression::Name(name) => visitor.visit_name(name),
        Expression::Function(function) => visitor.visit_function(function),
        Expression::Application(application) => visitor.visit_application(application),
    }
}

pub(crate) struct FindFunction<'ast> {
    id: FunctionId,
    pub(crate) found: Option<&'ast Function>,
}

impl FindFunction<'_> {
    pub(crate) fn new(id: FunctionId) -> Self {
        Self { id, found: None }
    }
}

impl<'ast> Visitor<'ast> for FindFunction<'ast> {
    fn visit_function(&mut self, function: &'ast Function) {
        if function.id == self.id {
            self.found = Some(function);
        } else if self.found.is_none() {
            walk_function(self, function);
        }
    }
}
