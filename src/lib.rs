//! # lambda-front - scanner, parser and scope resolver for the lambda calculus
//!
//! This crate turns lambda calculus source text into a resolved abstract
//! syntax tree: every name occurrence is linked to the function parameter or
//! top-level definition it refers to, or marked free.
//!
//! ## Pipeline Flow
//!
//! ```text
//! Source Code (String)
//!     ↓
//! [Lexer] → Token Stream
//!     ↓
//! [Parser + NodeFactory] → AST (ast::Program)
//!     ↓
//! [Scope Resolver] → Resolution table attached to the Program
//!     ↓
//! [Printers] → lambda notation / node structure
//! ```
//!
//! ## Language
//!
//! ```text
//! program     := definition* expression?
//! definition  := 'def' NAME '=' expression
//! expression  := NAME | function | application
//! function    := 'λ' NAME '.' expression
//! application := '(' expression expression ')'
//! ```
//!
//! Names are runs of letters, digits, `_` and `$` that start with a letter.
//! `.`, `=`, `λ`, `(` and `)` are tokens of their own wherever they appear.
//! Expressions nest at most [`parser::MAX_NESTING`] levels deep.
//!
//! ## Scoping
//!
//! - A function parameter is visible in the function body and hides any
//!   enclosing parameter with the same name. Such shadowing is reported in
//!   [`scope::Resolution::shadowings`] but not renamed.
//! - A definition is visible to the trailing expression. Definitions do not
//!   see each other.
//! - Two definitions with the same name are an error.
//!
//! ## Module Structure
//!
//! - [`lexer`] - Tokens and the scanner
//! - [`parser`] - Token cursor and recursive-descent grammar
//! - [`ast`] - Tree nodes, node factory and the [`ast::Visitor`] traversal
//! - [`scope`] - Lexical scope resolution
//! - [`fmt`] - Printers built on the traversal
//! - [`error`] - The crate error type
//!
//! ## Example
//!
//! ```
//! use lambda_front::ast::{Binder, Expression};
//!
//! let program = lambda_front::parse_source("def identity = λx.x\n(identity y)").unwrap();
//! let Some(Expression::Application(app)) = program.expression() else {
//!     panic!("expected an application");
//! };
//! let Expression::Name(callee) = app.callee.as_ref() else {
//!     panic!("expected a name");
//! };
//! assert!(matches!(program.binding_of(callee), Some(Binder::Definition(_))));
//! assert_eq!(program.to_string(), "def identity = λx.x\n(identity y)");
//! ```

pub mod ast;
pub mod error;
pub mod fmt;
pub mod lexer;
pub mod parser;
pub mod scope;

pub use error::{Error, Result};

use parser::{ParseState, parse};

/// Scans and parses `source` into a resolved program.
pub fn parse_source(source: &str) -> Result<ast::Program> {
    let mut state = ParseState::from_source(source)?;
    parse(&mut state)
}

/// Parses a program given as separate lines, joined with newlines.
pub fn parse_lines<S: AsRef<str>>(lines: &[S]) -> Result<ast::Program> {
    let source = lines
        .iter()
        .map(|line| line.as_ref())
        .collect::<Vec<&str>>()
        .join("\n");
    parse_source(&source)
}
