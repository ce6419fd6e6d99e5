use crate::ast::{Application, Definition, Function, Name, Program, Visitor};

/// Writes the node structure of a program.
///
/// `(λy.z w)` prints as `Application(Function(Name(y), Name(z)), Name(w))`.
/// Definitions are grouped in a `DefinitionList(..)` line ahead of the
/// expression.
#[derive(Debug, Default)]
pub struct FunctionalPrinter {
    buffer: String,
}

impl FunctionalPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self) -> String {
        self.buffer
    }
}

impl<'ast> Visitor<'ast> for FunctionalPrinter {
    fn visit_program(&mut self, program: &'ast Program) {
        let definitions = program.definitions();
        if !definitions.is_empty() {
            self.buffer.push_str("DefinitionList(");
            for (index, definition) in definitions.iter().enumerate() {
                if index > 0 {
                    self.buffer.push_str(", ");
                }
                self.visit_definition(definition);
            }
            self.buffer.push(')');
        }
        if let Some(expression) = program.expression() {
            if !definitions.is_empty() {
                self.buffer.push('\n');
            }
            expression.accept(self);
        }
    }

    fn visit_definition(&mut self, definition: &'ast Definition) {
        self.buffer.push_str("Definition(");
        self.visit_name(&definition.name);
        self.buffer.push_str(", ");
        definition.expression.accept(self);
        self.buffer.push(')');
    }

    fn visit_function(&mut self, function: &'ast Function) {
        self.buffer.push_str("Function(");
        self.visit_name(&function.parameter);
        self.buffer.push_str(", ");
        function.body.accept(self);
        self.buffer.push(')');
    }

    fn visit_application(&mut self, application: &'ast Application) {
        self.buffer.push_str("Application(");
        application.callee.accept(self);
        self.buffer.push_str(", ");
        application.argument.accept(self);
        self.buffer.push(')');
    }

    fn visit_name(&mut self, name: &'ast Name) {
        self.buffer.push_str("Name(");
        self.buffer.push_str(&name.text);
        self.buffer.push(')');
    }
}

pub fn to_functional(program: &Program) -> String {
    let mut printer = FunctionalPrinter::new();
    program.accept(&mut printer);
    printer.finish()
}
