use crate::ast::{Application, Definition, Expression, Function, Name, NodeFactory, Program};
use crate::lexer::{Span, Token, TokenClass};

use super::{ParseResult, ParseState, SyntaxError};

const EXPRESSION: &str = "a name, function, or application";

/// Deepest expression nesting the parser accepts.
///
/// Every later stage walks the tree recursively, so the bound keeps all of
/// them within the stack.
pub const MAX_NESTING: usize = 256;

fn unexpected(token: &Token, expected: impl Into<String>) -> SyntaxError {
    SyntaxError::new("unexpected token")
        .expected(expected)
        .found(token.describe())
        .at(token.pos())
}

fn end_of_input(state: &ParseState, expected: impl Into<String>) -> SyntaxError {
    SyntaxError::new("unexpected end of input")
        .expected(expected)
        .at(state.end_span())
}

/// Consumes the next token if it has the given class.
fn expect(state: &mut ParseState, class: TokenClass) -> ParseResult<Token> {
    match state.next() {
        Some(token) if token.class == class => Ok(token),
        Some(token) => Err(unexpected(&token, class.to_string())),
        None => Err(end_of_input(state, class.to_string())),
    }
}

/// One token of lookahead: read the next token, then step back over it.
fn next_is(state: &mut ParseState, class: TokenClass) -> bool {
    match state.next() {
        Some(token) => {
            state.previous();
            token.class == class
        }
        None => false,
    }
}

fn expect_end(state: &ParseState) -> ParseResult<()> {
    match state.peek() {
        Some(token) => Err(unexpected(token, "end of input")),
        None => Ok(()),
    }
}

fn name(token: &Token, factory: &mut NodeFactory) -> Name {
    factory.name(token.lexeme.clone(), token.pos())
}

/// program := definition* expression?
///
/// The factory resolves the program's scopes once the trailing input has
/// been checked, so a duplicate definition is reported only for otherwise
/// well-formed input.
pub fn program(state: &mut ParseState, factory: &mut NodeFactory) -> crate::Result<Program> {
    let mut definitions = Vec::new();
    while next_is(state, TokenClass::Def) {
        definitions.push(definition(state, factory)?);
    }

    let expression = if state.has_next() {
        Some(expression(state, factory)?)
    } else {
        None
    };

    expect_end(state)?;
    factory.program(definitions, expression)
}

/// definition := 'def' NAME '=' expression
pub fn definition(state: &mut ParseState, factory: &mut NodeFactory) -> ParseResult<Definition> {
    let start = expect(state, TokenClass::Def)?.pos();
    let name = name(&expect(state, TokenClass::Name)?, factory);
    expect(state, TokenClass::Equals)?;
    let expression = expression(state, factory)?;
    let span = start.merge(&expression.span());

    Ok(factory.definition(name, expression, span))
}

/// expression := NAME | function | application
pub fn expression(state: &mut ParseState, factory: &mut NodeFactory) -> ParseResult<Expression> {
    let Some(token) = state.next() else {
        return Err(end_of_input(state, EXPRESSION));
    };
    if state.depth == MAX_NESTING {
        return Err(SyntaxError::new("expression nested too deeply")
            .expected(format!("at most {MAX_NESTING} levels of nesting"))
            .found(token.describe())
            .at(token.pos()));
    }

    state.depth += 1;
    let expression = match token.class {
        TokenClass::Name => Ok(Expression::Name(name(&token, factory))),
        TokenClass::Lambda => function(state, factory, token.pos()).map(Expression::Function),
        TokenClass::OpenParen => {
            application(state, factory, token.pos()).map(Expression::Application)
        }
        _ => Err(unexpected(&token, EXPRESSION)),
    };
    state.depth -= 1;
    expression
}

/// function := 'λ' NAME '.' expression
///
/// Called with the `λ` already consumed; `start` is its span.
pub fn function(
    state: &mut ParseState,
    factory: &mut NodeFactory,
    start: Span,
) -> ParseResult<Function> {
    let parameter = name(&expect(state, TokenClass::Name)?, factory);
    expect(state, TokenClass::Dot)?;
    let body = expression(state, factory)?;
    let span = start.merge(&body.span());

    Ok(factory.function(parameter, body, span))
}

/// application := '(' expression expression ')'
///
/// Called with the `(` already consumed; `start` is its span.
pub fn application(
    state: &mut ParseState,
    factory: &mut NodeFactory,
    start: Span,
) -> ParseResult<Application> {
    let callee = expression(state, factory)?;
    let argument = expression(state, factory)?;
    let end = expect(state, TokenClass::CloseParen)?.pos();

    Ok(factory.application(callee, argument, start.merge(&end)))
}
