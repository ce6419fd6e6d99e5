use crate::lexer::Span;
use crate::scope::Resolver;

use super::{Application, Definition, Expression, Function, FunctionId, Name, NameId, Program};

/// Builds AST nodes bottom-up and hands out node identities.
///
/// Every name and function gets a fresh id, so two occurrences of the same
/// text are still distinct nodes. [`NodeFactory::program`] is the only way
/// to obtain a [`Program`]: it runs the scope resolver over the finished
/// tree before returning it.
#[derive(Debug, Default)]
pub struct NodeFactory {
    names: usize,
    functions: usize,
}

impl NodeFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&mut self, text: impl Into<String>, span: Span) -> Name {
        let id = NameId(self.names);
        self.names += 1;
        Name {
            id,
            text: text.into(),
            span,
        }
    }

    pub fn function(&mut self, parameter: Name, body: Expression, span: Span) -> Function {
        let id = FunctionId(self.functions);
        self.functions += 1;
        Function {
            id,
            parameter,
            body: Box::new(body),
            span,
        }
    }

    pub fn application(&self, callee: Expression, argument: Expression, span: Span) -> Application {
        Application {
            callee: Box::new(callee),
            argument: Box::new(argument),
            span,
        }
    }

    pub fn definition(&self, name: Name, expression: Expression, span: Span) -> Definition {
        Definition {
            name,
            expression,
            span,
        }
    }

    /// Assembles and resolves a program.
    ///
    /// Fails with [`crate::Error::DuplicateDefinition`] when two definitions
    /// share a name; no program is produced in that case.
    pub fn program(
        &self,
        definitions: Vec<Definition>,
        expression: Option<Expression>,
    ) -> crate::Result<Program> {
        let resolution = Resolver::new().resolve(&definitions, expression.as_ref())?;
        Ok(Program::new(definitions, expression, resolution))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn ids_are_fresh_per_node() {
        let mut factory = NodeFactory::new();
        let first = factory.name("x", Span::default());
        let second = factory.name("x", Span::default());
        assert_ne!(first.id, second.id);

        let body = Expression::Name(second);
        let inner = factory.function(first.clone(), body.clone(), Span::default());
        let outer = factory.function(first, body, Span::default());
        assert_ne!(inner.id, outer.id);
    }

    #[test]
    fn rejects_duplicate_definitions() {
        let mut factory = NodeFactory::new();
        let mut definition = || {
            let name = factory.name("same", Span::default());
            let value = Expression::Name(factory.name("x", Span::default()));
            factory.definition(name, value, Span::default())
        };
        let first = definition();
        let second = definition();

        assert!(matches!(
            factory.program(vec![first, second], None),
            Err(Error::DuplicateDefinition { name, .. }) if name == "same"
        ));
    }
}
