//! Лексический анализатор SQL
//!
//! Курсор над потоком токенов одного SQL выражения. Пропускает пробелы,
//! комментарии и хинты, определяет по текущему символу нужный метод
//! [`Tokenizer`] и хранит последний прочитанный токен как текущий.

use crate::common::{Error, Result};
use crate::parser::char_type::{self, EOI};
use crate::parser::dialect::Dialect;
use crate::parser::dictionary::Dictionary;
use crate::parser::token::Token;
use crate::parser::tokenizer::Tokenizer;

/// Лексический анализатор SQL
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    /// Сканер над исходным текстом и словарем
    tokenizer: Tokenizer<'a>,
    /// Диалект, определяющий хинты, комментарии и переменные
    dialect: Dialect,
    /// Текущая позиция в тексте (байтовое смещение)
    offset: usize,
    /// Текущий токен
    current_token: Token<'a>,
}

impl<'a> Lexer<'a> {
    /// Создает лексер и сразу читает первый токен
    pub fn new(input: &'a str, dictionary: &'a Dictionary, dialect: Dialect) -> Result<Self> {
        Self::with_offset(input, dictionary, dialect, 0)
    }

    /// Создает лексер, начинающий разбор с заданного смещения
    pub fn with_offset(
        input: &'a str,
        dictionary: &'a Dictionary,
        dialect: Dialect,
        offset: usize,
    ) -> Result<Self> {
        if offset > input.len() || !input.is_char_boundary(offset) {
            return Err(Error::configuration(format!(
                "Start offset {} is not a character boundary of the input",
                offset
            )));
        }
        log::debug!(
            "Creating {} lexer at offset {} for {} bytes of input",
            dialect,
            offset,
            input.len()
        );
        let mut lexer = Self {
            tokenizer: Tokenizer::new(input, dictionary),
            dialect,
            offset,
            current_token: Token::end(offset),
        };
        lexer.next_token()?;
        Ok(lexer)
    }

    /// Читает следующий токен и делает его текущим
    pub fn next_token(&mut self) -> Result<()> {
        self.skip_ignored_token()?;
        let offset = self.offset;
        let tokenizer = self.tokenizer;
        let token = if self.is_variable_begin() {
            tokenizer.scan_variable(offset)
        } else if self.is_nchar_begin() {
            tokenizer.scan_chars(offset + 1)?.starting_at(offset)
        } else if self.is_identifier_begin() {
            tokenizer.scan_identifier(offset)?
        } else if self.is_hex_decimal_begin() {
            tokenizer.scan_hex_decimal(offset)
        } else if self.is_number_begin() {
            tokenizer.scan_number(offset)
        } else if self.is_symbol_begin() {
            tokenizer.scan_symbol(offset)?
        } else if self.is_chars_begin() {
            tokenizer.scan_chars(offset)?
        } else if self.is_end() {
            Token::end(offset)
        } else {
            return Err(Error::UnexpectedChar {
                ch: self.current_char(0),
                position: offset,
            });
        };
        log::trace!("{}", token);
        self.offset = token.end_offset;
        self.current_token = token;
        Ok(())
    }

    /// Пропускает пробелы, хинты и комментарии в любом порядке
    fn skip_ignored_token(&mut self) -> Result<()> {
        self.offset = self.tokenizer.skip_whitespace(self.offset);
        loop {
            if self.is_hint_begin() {
                self.offset = self.tokenizer.skip_hint(self.offset)?;
            } else if self.is_comment_begin() {
                self.offset = self.tokenizer.skip_comment(self.offset)?;
            } else {
                return Ok(());
            }
            self.offset = self.tokenizer.skip_whitespace(self.offset);
        }
    }

    /// Возвращает все токены до конца ввода включительно
    pub fn tokenize(mut self) -> Result<Vec<Token<'a>>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.current_token;
            tokens.push(token);
            if token.is_end() {
                break;
            }
            self.next_token()?;
        }
        Ok(tokens)
    }

    pub fn current_token(&self) -> &Token<'a> {
        &self.current_token
    }

    pub fn input(&self) -> &'a str {
        self.tokenizer.input()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn dictionary(&self) -> &'a Dictionary {
        self.tokenizer.dictionary()
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    // === Определение начала токена ===

    fn is_hint_begin(&self) -> bool {
        match self.dialect.hint_marker() {
            Some(marker) => {
                self.current_char(0) == '/'
                    && self.current_char(1) == '*'
                    && self.current_char(2) == marker
            }
            None => false,
        }
    }

    fn is_comment_begin(&self) -> bool {
        let current = self.current_char(0);
        let next = self.current_char(1);
        (self.dialect.supports_pound_comment() && current == '#')
            || (current == '/' && next == '/')
            || (current == '-' && next == '-')
            || (current == '/' && next == '*')
    }

    fn is_variable_begin(&self) -> bool {
        self.dialect.supports_variables() && self.current_char(0) == '@'
    }

    fn is_nchar_begin(&self) -> bool {
        self.dialect.supports_nchars()
            && self.current_char(0) == 'N'
            && self.current_char(1) == '\''
    }

    fn is_identifier_begin(&self) -> bool {
        is_identifier_begin(self.current_char(0))
    }

    fn is_hex_decimal_begin(&self) -> bool {
        self.current_char(0) == '0' && self.current_char(1) == 'x'
    }

    fn is_number_begin(&self) -> bool {
        let current = self.current_char(0);
        let next = self.current_char(1);
        char_type::is_digital(current)
            || (current == '.'
                && char_type::is_digital(next)
                && !is_identifier_begin(self.previous_char()))
            || (current == '-' && (next == '.' || char_type::is_digital(next)))
    }

    fn is_symbol_begin(&self) -> bool {
        char_type::is_symbol(self.current_char(0))
    }

    fn is_chars_begin(&self) -> bool {
        matches!(self.current_char(0), '\'' | '"')
    }

    fn is_end(&self) -> bool {
        self.offset >= self.input().len()
    }

    /// Символ на `ahead` байт впереди текущей позиции.
    /// Все проверяемые префиксы состоят из ASCII, поэтому побайтового смещения достаточно.
    fn current_char(&self, ahead: usize) -> char {
        self.tokenizer.char_at(self.offset + ahead)
    }

    fn previous_char(&self) -> char {
        self.input()
            .get(..self.offset)
            .and_then(|before| before.chars().next_back())
            .unwrap_or(EOI)
    }
}

fn is_identifier_begin(ch: char) -> bool {
    char_type::is_alphabet(ch) || matches!(ch, '`' | '_' | '$')
}
