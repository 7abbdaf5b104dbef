//! Парсер SQL для sqlproxy-lexer
//!
//! [`SqlParser`] владеет лексером одного выражения и предоставляет операции
//! [`BaseParser`]. Грамматические парсеры конкретных выражений строятся поверх него.

use crate::common::Result;
use crate::parser::base_parser::BaseParser;
use crate::parser::dialect::Dialect;
use crate::parser::dictionary::Dictionary;
use crate::parser::lexer::Lexer;
use crate::parser::token::Token;

/// Парсер потока токенов одного SQL выражения
pub struct SqlParser<'a> {
    lexer: Lexer<'a>,
}

impl<'a> SqlParser<'a> {
    /// Создает новый парсер SQL
    pub fn new(input: &'a str, dictionary: &'a Dictionary, dialect: Dialect) -> Result<Self> {
        Ok(Self::from_lexer(Lexer::new(input, dictionary, dialect)?))
    }

    /// Создает парсер поверх уже настроенного лексера
    pub fn from_lexer(lexer: Lexer<'a>) -> Self {
        Self { lexer }
    }

    /// Текущий токен
    pub fn current_token(&self) -> &Token<'a> {
        self.lexer.current_token()
    }

    pub fn into_lexer(self) -> Lexer<'a> {
        self.lexer
    }
}

impl<'a> BaseParser<'a> for SqlParser<'a> {
    fn lexer(&self) -> &Lexer<'a> {
        &self.lexer
    }

    fn lexer_mut(&mut self) -> &mut Lexer<'a> {
        &mut self.lexer
    }
}
