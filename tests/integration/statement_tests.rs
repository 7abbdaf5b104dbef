//! Тесты полного разбора выражений через публичный API

use super::common::{kinds, tokenize, PORTABLE_STATEMENTS};
use sqlproxy_lexer::parser::{
    BaseParser, Dialect, Dictionary, Keyword, Lexer, Literal, SqlParser, Symbol, TokenKind,
};
use sqlproxy_lexer::{Error, Result};

#[test]
fn test_portable_statements_in_every_dialect() -> Result<()> {
    for dialect in Dialect::ALL {
        let dictionary = Dictionary::for_dialect(dialect);
        for sql in PORTABLE_STATEMENTS {
            let tokens = tokenize(sql, &dictionary, dialect)?;
            assert!(tokens.len() > 1, "{}: {}", dialect, sql);
            assert_eq!(tokens.last().map(|token| token.kind), Some(TokenKind::END));
            assert_eq!(tokens.last().map(|token| token.end_offset), Some(sql.len()));
        }
    }
    Ok(())
}

#[test]
fn test_mysql_statement_with_hint_and_variables() -> Result<()> {
    let dictionary = Dictionary::for_dialect(Dialect::MySql);
    let sql = "/*!40001 SQL_NO_CACHE */ SELECT @@tx_isolation, @rows := 1 FROM dual LIMIT 10";
    let tokens = tokenize(sql, &dictionary, Dialect::MySql)?;

    assert_eq!(
        kinds(&tokens),
        vec![
            Keyword::Select.into(),
            Literal::Variable.into(),
            Symbol::Comma.into(),
            Literal::Variable.into(),
            Symbol::ColonEq.into(),
            Literal::Int.into(),
            Keyword::From.into(),
            Keyword::Dual.into(),
            Keyword::Limit.into(),
            Literal::Int.into(),
            TokenKind::END,
        ]
    );
    Ok(())
}

#[test]
fn test_postgresql_cast_and_returning() -> Result<()> {
    let dictionary = Dictionary::for_dialect(Dialect::PostgreSql);
    let sql = "INSERT INTO t (a) VALUES ('1'::int) RETURNING id";
    let tokens = tokenize(sql, &dictionary, Dialect::PostgreSql)?;

    assert!(tokens
        .iter()
        .any(|token| token.kind == TokenKind::Symbol(Symbol::DoubleColon)));
    assert!(tokens
        .iter()
        .any(|token| token.kind == TokenKind::Keyword(Keyword::Returning)));
    Ok(())
}

#[test]
fn test_sqlserver_top_and_nchars() -> Result<()> {
    let dictionary = Dictionary::for_dialect(Dialect::SqlServer);
    let sql = "SELECT TOP 5 name FROM users WHERE title = N'Инженер'";
    let tokens = tokenize(sql, &dictionary, Dialect::SqlServer)?;

    assert_eq!(tokens[1].kind, TokenKind::Keyword(Keyword::Top));
    let chars = tokens[tokens.len() - 2];
    assert_eq!(chars.kind, TokenKind::Literal(Literal::Chars));
    assert_eq!(chars.text, "Инженер");
    Ok(())
}

#[test]
fn test_resume_from_offset() -> Result<()> {
    let dictionary = Dictionary::default();
    let sql = "SELECT a FROM t; SELECT b FROM u";

    let mut lexer = Lexer::new(sql, &dictionary, Dialect::MySql)?;
    while lexer.current_token().kind != TokenKind::Symbol(Symbol::Semi) {
        lexer.next_token()?;
    }
    let resume_at = lexer.current_token().end_offset;

    let second = Lexer::with_offset(sql, &dictionary, Dialect::MySql, resume_at)?.tokenize()?;
    let texts: Vec<&str> = second.iter().map(|token| token.text).collect();
    assert_eq!(texts, vec!["SELECT", "b", "FROM", "u", ""]);
    Ok(())
}

#[test]
fn test_parser_extracts_insert_parts() -> Result<()> {
    let dictionary = Dictionary::default();
    let sql = "INSERT INTO t_order (order_id, note) VALUES (1, 'a (b) c') ON DUPLICATE KEY UPDATE note = 'x'";
    let mut parser = SqlParser::new(sql, &dictionary, Dialect::MySql)?;

    parser.accept(Keyword::Insert.into())?;
    parser.accept(Keyword::Into.into())?;
    parser.accept(TokenKind::IDENTIFIER)?;
    assert_eq!(parser.skip_parentheses()?, "order_id, note");
    parser.accept(Keyword::Values.into())?;
    assert_eq!(parser.skip_parentheses()?, "1, 'a (b) c'");

    parser.unsupported_if_equal(&[Keyword::Select.into()])?;
    let error = parser
        .unsupported_if_equal(&[Keyword::On.into()])
        .unwrap_err();
    assert!(matches!(error, Error::Unsupported { .. }));
    Ok(())
}

#[test]
fn test_errors_carry_positions() {
    let dictionary = Dictionary::default();

    let error = tokenize("SELECT 'abc", &dictionary, Dialect::MySql).unwrap_err();
    assert!(matches!(
        error,
        Error::UnterminatedLiteral { offset: 7, .. }
    ));
    assert!(error.to_string().contains("unterminated"));

    let error = tokenize("SELECT a ¤ b", &dictionary, Dialect::MySql).unwrap_err();
    assert!(matches!(error, Error::UnexpectedChar { ch: '¤', position: 9 }));
}
