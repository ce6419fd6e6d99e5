//! Errors that end a parse.
//!
//! Every failure is fatal: no partial program is returned. Shadowed
//! parameters are not errors; see [`crate::scope::Shadowing`].

use std::fmt;

use crate::lexer::{LexicalError, Span};
use crate::parser::SyntaxError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The source contains a character that cannot start a token.
    Lexical(LexicalError),
    /// The tokens do not form a program.
    Syntax(SyntaxError),
    /// Two definitions of the program share a name.
    DuplicateDefinition { name: String, span: Span },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Lexical(err) => write!(f, "lexical error: {err}"),
            Error::Syntax(err) => write!(f, "syntax error: {err}"),
            Error::DuplicateDefinition { name, span } => {
                write!(f, "duplicate definition for '{name}' at {span}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Lexical(err) => Some(err),
            Error::Syntax(err) => Some(err),
            Error::DuplicateDefinition { .. } => None,
        }
    }
}

impl From<LexicalError> for Error {
    fn from(err: LexicalError) -> Self {
        Error::Lexical(err)
    }
}

impl From<SyntaxError> for Error {
    fn from(err: SyntaxError) -> Self {
        Error::Syntax(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
