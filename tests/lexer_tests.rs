use lambda_front::lexer::{LexicalError, Span, Token, TokenClass, scan};

fn classes(input: &str) -> Vec<TokenClass> {
    scan(input)
        .expect("lexing failed")
        .into_iter()
        .map(|token| token.class)
        .collect()
}

#[test]
fn lex_names() {
    let tokens = scan("foo bar baz").unwrap();
    assert_eq!(tokens.len(), 3);
    assert!(matches!(&tokens[0], t if t.class == TokenClass::Name && t.lexeme == "foo"));
    assert!(matches!(&tokens[1], t if t.class == TokenClass::Name && t.lexeme == "bar"));
    assert!(matches!(&tokens[2], t if t.class == TokenClass::Name && t.lexeme == "baz"));
}

#[test]
fn lex_symbols() {
    assert_eq!(
        classes(". = λ ( )"),
        vec![
            TokenClass::Dot,
            TokenClass::Equals,
            TokenClass::Lambda,
            TokenClass::OpenParen,
            TokenClass::CloseParen,
        ]
    );
}

#[test]
fn lex_def_keyword() {
    let tokens = scan("def").unwrap();
    assert_eq!(tokens, vec![Token::new(TokenClass::Def, "def", Span::new(0, 3))]);
}

#[test]
fn lex_names_containing_def_are_names() {
    assert_eq!(
        classes("define undef Def"),
        vec![TokenClass::Name, TokenClass::Name, TokenClass::Name]
    );
}

#[test]
fn lex_symbols_split_name_runs() {
    let tokens = scan("λfunc.λarg(func arg)").unwrap();
    let lexemes: Vec<_> = tokens.iter().map(|t| t.lexeme.as_str()).collect();
    assert_eq!(
        lexemes,
        vec!["λ", "func", ".", "λ", "arg", "(", "func", "arg", ")"]
    );
}

#[test]
fn lex_lambda_inside_a_run() {
    assert_eq!(
        classes("xλy"),
        vec![TokenClass::Name, TokenClass::Lambda, TokenClass::Name]
    );
}

#[test]
fn lex_unicode_names_with_digits() {
    let tokens = scan("((λfunc1.λarg2ζ(func1 arg2ζ) arg) boing)").unwrap();
    assert_eq!(tokens.len(), 15);
    assert!(tokens.iter().any(|t| t.lexeme == "arg2ζ"));
}

#[test]
fn lex_token_counts() {
    assert_eq!(scan("tokens").unwrap().len(), 1);
    assert_eq!(scan("my tokens").unwrap().len(), 2);
    assert_eq!(scan("def name = λ.my").unwrap().len(), 6);
    assert_eq!(scan("def . name = λ.my").unwrap().len(), 7);
    assert_eq!(scan("name = λ.my def").unwrap().len(), 6);
    assert_eq!(scan("λ.my tokens").unwrap().len(), 4);
    assert_eq!(scan("((λfunc.λarg(func arg) arg) boing)").unwrap().len(), 15);
}

#[test]
fn lex_whitespace_and_newlines() {
    assert_eq!(
        classes("  def\tx\n=\r\n  y  "),
        vec![
            TokenClass::Def,
            TokenClass::Name,
            TokenClass::Equals,
            TokenClass::Name,
        ]
    );
    assert!(scan("").unwrap().is_empty());
    assert!(scan(" \n\t ").unwrap().is_empty());
}

#[test]
fn lex_spans() {
    let tokens = scan("(f ab)").unwrap();
    assert_eq!(tokens[0].span, Span::new(0, 1));
    assert_eq!(tokens[1].span, Span::new(1, 2));
    assert_eq!(tokens[2].span, Span::new(3, 5));
    assert_eq!(tokens[3].span, Span::new(5, 6));
}

#[test]
fn lex_unsupported_character() {
    let err = scan("<").unwrap_err();
    assert!(matches!(
        err,
        LexicalError::UnsupportedCharacter { character: '<', .. }
    ));
    assert!(err.to_string().contains("'<'"));
}

#[test]
fn lex_unsupported_character_after_valid_tokens() {
    let err = scan("λx.(x + y)").unwrap_err();
    assert_eq!(err.character(), '+');
    assert_eq!(err.span(), Span::new(7, 8));
}

#[test]
fn lex_name_starting_with_digit() {
    let err = scan("12").unwrap_err();
    assert!(matches!(
        err,
        LexicalError::InvalidNameStart { character: '1', .. }
    ));
    assert!(err.to_string().contains("every name must start with a letter"));
}

#[test]
fn lex_name_starting_with_underscore() {
    let err = scan("_").unwrap_err();
    assert!(matches!(
        err,
        LexicalError::InvalidNameStart { character: '_', .. }
    ));
}

#[test]
fn token_equality_ignores_position() {
    let a = Token::new(TokenClass::Name, "x", Span::new(0, 1));
    let b = Token::new(TokenClass::Name, "x", Span::new(10, 11));
    let c = Token::new(TokenClass::Name, "y", Span::new(0, 1));
    assert_eq!(a, b);
    assert_ne!(a, c);

    let mut set = std::collections::HashSet::new();
    set.insert(a);
    assert!(set.contains(&b));
}

#[test]
fn token_describe() {
    let tokens = scan("x ( def").unwrap();
    assert_eq!(tokens[0].describe(), "name 'x'");
    assert_eq!(tokens[1].describe(), "'('");
    assert_eq!(tokens[2].describe(), "'def'");
}
