use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Range;

use log::debug;
use logos::Logos;

/// Byte range of a token or node in the scanned source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Smallest span covering both `self` and `other`.
    pub fn merge(&self, other: &Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Span::new(range.start, range.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// The lexical class of a token.
///
/// The derive generates the recognizer used by [`scan`]: each reserved
/// symbol is a token of its own, and a name is a run of identifier
/// characters starting with a letter. `λ` is a letter in Unicode, so it is
/// carved out of the name classes to keep it a symbol even mid-run.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"\s+")]
pub enum TokenClass {
    #[token("def")]
    Def,
    #[regex(r"[\p{L}--λ][\p{L}\p{M}\p{N}_$--λ]*")]
    Name,
    #[token("λ")]
    Lambda,
    #[token(".")]
    Dot,
    #[token("=")]
    Equals,
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
}

impl fmt::Display for TokenClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenClass::Def => f.write_str("'def'"),
            TokenClass::Name => f.write_str("name"),
            TokenClass::Lambda => f.write_str("'λ'"),
            TokenClass::Dot => f.write_str("'.'"),
            TokenClass::Equals => f.write_str("'='"),
            TokenClass::OpenParen => f.write_str("'('"),
            TokenClass::CloseParen => f.write_str("')'"),
        }
    }
}

/// A classified lexeme.
///
/// Two tokens are equal when their class and lexeme match; the span only
/// locates the token for diagnostics.
#[derive(Debug, Clone)]
pub struct Token {
    pub class: TokenClass,
    pub lexeme: String,
    pub span: Span,
}

impl Token {
    pub fn new(class: TokenClass, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            class,
            lexeme: lexeme.into(),
            span,
        }
    }

    pub fn pos(&self) -> Span {
        self.span
    }

    /// Returns a human-readable description of the token
    pub fn describe(&self) -> String {
        match self.class {
            TokenClass::Name => format!("name '{}'", self.lexeme),
            _ => format!("'{}'", self.lexeme),
        }
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.class == other.class && self.lexeme == other.lexeme
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.class.hash(state);
        self.lexeme.hash(state);
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}('{}')", self.class, self.lexeme)
    }
}

/// Failure to classify a character of the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexicalError {
    /// The character is neither whitespace, a reserved symbol nor part of a name.
    UnsupportedCharacter { character: char, span: Span },
    /// A name run starts with something other than a letter, e.g. a digit.
    InvalidNameStart { character: char, span: Span },
}

impl LexicalError {
    fn at(source: &str, offset: usize) -> Self {
        let character = source[offset..].chars().next().unwrap_or('\u{FFFD}');
        let span = Span::new(offset, offset + character.len_utf8());

        if is_name_continuation(character) {
            LexicalError::InvalidNameStart { character, span }
        } else {
            LexicalError::UnsupportedCharacter { character, span }
        }
    }

    pub fn character(&self) -> char {
        match self {
            LexicalError::UnsupportedCharacter { character, .. }
            | LexicalError::InvalidNameStart { character, .. } => *character,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            LexicalError::UnsupportedCharacter { span, .. }
            | LexicalError::InvalidNameStart { span, .. } => *span,
        }
    }
}

impl fmt::Display for LexicalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexicalError::UnsupportedCharacter { character, span } => {
                write!(f, "character is not supported: '{character}' at {span}")
            }
            LexicalError::InvalidNameStart { character, span } => write!(
                f,
                "every name must start with a letter, found '{character}' at {span}"
            ),
        }
    }
}

impl std::error::Error for LexicalError {}

fn is_name_continuation(character: char) -> bool {
    character.is_alphanumeric() || matches!(character, '_' | '$')
}

/// Splits `source` into tokens, failing on the first character that cannot
/// start a token.
pub fn scan(source: &str) -> Result<Vec<Token>, LexicalError> {
    let mut lexer = TokenClass::lexer(source);
    let mut tokens = Vec::new();

    while let Some(class) = lexer.next() {
        let span = Span::from(lexer.span());
        match class {
            Ok(class) => tokens.push(Token::new(class, lexer.slice(), span)),
            Err(()) => return Err(LexicalError::at(source, span.start)),
        }
    }

    debug!("scanned {} tokens", tokens.len());
    Ok(tokens)
}
