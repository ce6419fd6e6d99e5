//! Recursive-descent parser for lambda programs.
//!
//! ```text
//! program     := definition* expression?
//! definition  := 'def' NAME '=' expression
//! expression  := NAME | function | application
//! function    := 'λ' NAME '.' expression
//! application := '(' expression expression ')'
//! ```
//!
//! Parsing stops at the first mismatch; there is no error recovery.
//! Expressions nested deeper than [`MAX_NESTING`] are rejected.

mod grammar;
mod state;

pub use grammar::MAX_NESTING;
pub use state::ParseState;

use std::fmt;

use log::debug;

use crate::ast::{NodeFactory, Program};

use grammar::program;
use crate::lexer::Span;

/// A token did not fit the grammar at the point it was read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub message: String,
    pub expected: Option<String>,
    pub found: Option<String>,
    pub position: Option<Span>,
}

impl SyntaxError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
            expected: None,
            found: None,
            position: None,
        }
    }

    pub fn expected(mut self, expected: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self
    }

    pub fn found(mut self, found: impl Into<String>) -> Self {
        self.found = Some(found.into());
        self
    }

    pub fn at(mut self, position: Span) -> Self {
        self.position = Some(position);
        self
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        match (&self.expected, &self.found) {
            (Some(expected), Some(found)) => write!(f, ": expected {expected}, found {found}")?,
            (Some(expected), None) => write!(f, ": expected {expected}")?,
            (None, Some(found)) => write!(f, ": found {found}")?,
            (None, None) => {}
        }
        if let Some(position) = &self.position {
            write!(f, " at {position}")?;
        }
        Ok(())
    }
}

impl std::error::Error for SyntaxError {}

pub type ParseResult<T> = Result<T, SyntaxError>;

/// Parses a whole program from `state` and resolves its scopes.
///
/// Every token must be consumed; the returned program is already resolved.
pub fn parse(state: &mut ParseState) -> crate::Result<Program> {
    let mut factory = NodeFactory::new();
    let program = program(state, &mut factory)?;
    debug!(
        "parsed program with {} definitions",
        program.definitions().len()
    );
    Ok(program)
}
