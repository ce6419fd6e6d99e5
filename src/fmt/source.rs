use std::fmt::{self, Display};

use crate::ast::{Application, Definition, Expression, Function, Name, Program, Visitor};

/// Writes a program back in lambda notation.
///
/// Definitions go one per line, followed by the trailing expression on its
/// own line.
#[derive(Debug, Default)]
pub struct SourcePrinter {
    buffer: String,
}

impl SourcePrinter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self) -> String {
        self.buffer
    }
}

impl<'ast> Visitor<'ast> for SourcePrinter {
    fn visit_program(&mut self, program: &'ast Program) {
        for (index, definition) in program.definitions().iter().enumerate() {
            if index > 0 {
                self.buffer.push('\n');
            }
            self.visit_definition(definition);
        }
        if let Some(expression) = program.expression() {
            if !program.definitions().is_empty() {
                self.buffer.push('\n');
            }
            expression.accept(self);
        }
    }

    fn visit_definition(&mut self, definition: &'ast Definition) {
        self.buffer.push_str("def ");
        self.visit_name(&definition.name);
        self.buffer.push_str(" = ");
        definition.expression.accept(self);
    }

    fn visit_function(&mut self, function: &'ast Function) {
        self.buffer.push('λ');
        self.visit_name(&function.parameter);
        self.buffer.push('.');
        function.body.accept(self);
    }

    fn visit_application(&mut self, application: &'ast Application) {
        self.buffer.push('(');
        application.callee.accept(self);
        self.buffer.push(' ');
        application.argument.accept(self);
        self.buffer.push(')');
    }

    fn visit_name(&mut self, name: &'ast Name) {
        self.buffer.push_str(&name.text);
    }
}

pub fn to_source(program: &Program) -> String {
    let mut printer = SourcePrinter::new();
    program.accept(&mut printer);
    printer.finish()
}

impl Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_source(self))
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut printer = SourcePrinter::new();
        self.accept(&mut printer);
        f.write_str(&printer.finish())
    }
}
