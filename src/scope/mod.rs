//! Lexical scope resolution.
//!
//! A single depth-first pass over a freshly built program that links every
//! use-site name to the function or definition introducing it:
//!
//! - the program opens a frame; each definition is resolved in an empty
//!   frame of its own and only then registered in the program frame, so it
//!   is visible to the trailing expression but not to other definitions;
//! - a function resolves its body in a copy of the enclosing frame extended
//!   with its parameter;
//! - both sides of an application share one copy of the enclosing frame;
//! - a name looks up parameters first, then definitions, and is free when
//!   neither matches.
//!
//! Duplicate definition names abort resolution. A parameter hiding an
//! enclosing parameter does not; it is recorded as a [`Shadowing`].

mod frame;
mod resolution;

pub use resolution::{Resolution, Shadowing};

use log::{debug, trace, warn};

use crate::ast::{
    Application, Binder, Definition, DefinitionId, Expression, Function, Name,
};
use crate::error::Error;

use frame::Frames;

pub(crate) struct Resolver {
    frames: Frames,
    resolution: Resolution,
}

impl Resolver {
    pub(crate) fn new() -> Self {
        Self {
            frames: Frames::default(),
            resolution: Resolution::default(),
        }
    }

    /// Consumes the resolver, so a resolution is produced at most once.
    pub(crate) fn resolve(
        mut self,
        definitions: &[Definition],
        expression: Option<&Expression>,
    ) -> crate::Result<Resolution> {
        self.frames.enter_empty();

        for (index, definition) in definitions.iter().enumerate() {
            let id = DefinitionId(index);
            self.resolve_definition(definition)?;
            if let Some(frame) = self.frames.current_mut() {
                frame.define(&definition.name.text, id);
            }
        }

        if let Some(expression) = expression {
            self.resolve_expression(expression);
        }

        self.frames.leave();

        let shadowings = self.resolution.shadowings();
        if !shadowings.is_empty() {
            warn!(
                "{} function parameter(s) shadow an enclosing parameter and must be renamed before substitution",
                shadowings.len()
            );
            for shadowing in shadowings {
                warn!(
                    "parameter '{}' at {} shadows an enclosing parameter",
                    shadowing.name, shadowing.span
                );
            }
        }

        debug!(
            "resolved {} names over {} definitions",
            self.resolution.use_count(),
            definitions.len()
        );
        Ok(self.resolution)
    }

    fn resolve_definition(&mut self, definition: &Definition) -> crate::Result<()> {
        let name = &definition.name;
        let duplicate = self
            .frames
            .current()
            .and_then(|frame| frame.definition(&name.text))
            .is_some();
        if duplicate {
            return Err(Error::DuplicateDefinition {
                name: name.text.clone(),
                span: name.span,
            });
        }

        self.frames.enter_empty();
        self.resolve_expression(&definition.expression);
        self.frames.leave();
        Ok(())
    }

    fn resolve_expression(&mut self, expression: &Expression) {
        match expression {
            Expression::Name(name) => self.resolve_name(name),
            Expression::Function(function) => self.resolve_function(function),
            Expression::Application(application) => self.resolve_application(application),
        }
    }

    fn resolve_function(&mut self, function: &Function) {
        let parameter = &function.parameter;
        let mut frame = self.frames.current().cloned().unwrap_or_default();

        if let Some(shadowed) = frame.bind(&parameter.text, function.id) {
            self.resolution.record_shadowing(Shadowing {
                name: parameter.text.clone(),
                shadowed,
                shadowing: function.id,
                span: parameter.span,
            });
        }

        self.frames.enter(frame);
        self.resolve_expression(&function.body);
        self.frames.leave();
    }

    fn resolve_application(&mut self, application: &Application) {
        self.frames.enter_copy();
        self.resolve_expression(&application.callee);
        self.resolve_expression(&application.argument);
        self.frames.leave();
    }

    fn resolve_name(&mut self, name: &Name) {
        let binder = self.frames.current().and_then(|frame| {
            frame
                .variable(&name.text)
                .map(Binder::Function)
                .or_else(|| frame.definition(&name.text).map(Binder::Definition))
        });

        trace!(
            "'{}' at {} (depth {}) -> {:?}",
            name.text,
            name.span,
            self.frames.depth(),
            binder
        );
        self.resolution.record(name.id, binder);
    }
}
