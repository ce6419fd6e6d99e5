use crate::lexer::{LexicalError, Span, Token, scan};

/// Bidirectional cursor over the scanned tokens.
///
/// Stepping back never drops a token, so the parser can look one token
/// ahead by consuming it and rewinding with [`ParseState::previous`].
pub struct ParseState {
    tokens: Vec<Token>,
    index: usize,
    /// Expressions currently open, tracked by the grammar.
    pub(crate) depth: usize,
}

impl ParseState {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            index: 0,
            depth: 0,
        }
    }

    pub fn from_source(source: &str) -> Result<Self, LexicalError> {
        Ok(Self::new(scan(source)?))
    }

    pub fn next(&mut self) -> Option<Token> {
        if self.has_next() {
            let token = self.tokens[self.index].clone();
            self.index += 1;
            Some(token)
        } else {
            None
        }
    }

    pub fn previous(&mut self) -> Option<Token> {
        if self.has_previous() {
            self.index -= 1;
            Some(self.tokens[self.index].clone())
        } else {
            None
        }
    }

    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.index)
    }

    pub fn has_next(&self) -> bool {
        self.index < self.tokens.len()
    }

    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    /// Empty span just past the last token, used to locate end-of-input errors.
    pub fn end_span(&self) -> Span {
        let end = self.tokens.last().map(|token| token.span.end).unwrap_or(0);
        Span::new(end, end)
    }
}
