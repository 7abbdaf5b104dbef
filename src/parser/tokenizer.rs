//! Сканер токенов
//!
//! Каждая операция является чистой функцией от (входная строка, словарь, смещение):
//! принимает смещение начала и возвращает либо новое смещение, либо токен,
//! несущий смещение своего конца. Чтение за пределами строки возвращает
//! символ-маркер [`EOI`], поэтому циклы сканирования сравнивают символы без
//! отдельных проверок границ.
//!
//! Смещения байтовые. Циклы, которые могут пройти через не-ASCII символы,
//! продвигаются на `len_utf8` символа, поэтому срезы никогда не режут код-пойнт.

use crate::common::{Error, Result};
use crate::parser::char_type::{self, EOI};
use crate::parser::dictionary::Dictionary;
use crate::parser::token::{Keyword, Literal, Token, TokenKind};

const MYSQL_SPECIAL_COMMENT_BEGIN_SYMBOL_LENGTH: usize = 1;

const COMMENT_BEGIN_SYMBOL_LENGTH: usize = 2;

const HINT_BEGIN_SYMBOL_LENGTH: usize = 3;

const COMMENT_AND_HINT_END_SYMBOL_LENGTH: usize = 2;

const HEX_BEGIN_SYMBOL_LENGTH: usize = 2;

/// Сканер токенов над неизменяемой строкой
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer<'a> {
    input: &'a str,
    dictionary: &'a Dictionary,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str, dictionary: &'a Dictionary) -> Self {
        Self { input, dictionary }
    }

    pub fn input(&self) -> &'a str {
        self.input
    }

    pub fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    /// Пропускает пробельные символы, возвращает смещение после них
    pub fn skip_whitespace(&self, offset: usize) -> usize {
        let mut position = offset;
        loop {
            let ch = self.char_at(position);
            if !char_type::is_whitespace(ch) {
                return position;
            }
            position += ch.len_utf8();
        }
    }

    /// Пропускает комментарий (`//`, `--`, `#` или `/* */`).
    ///
    /// Если в позиции нет комментария, возвращает исходное смещение.
    pub fn skip_comment(&self, offset: usize) -> Result<usize> {
        let current = self.char_at(offset);
        let next = self.char_at(offset + 1);
        if is_single_line_comment_begin(current, next) {
            Ok(self.skip_single_line_comment(offset, COMMENT_BEGIN_SYMBOL_LENGTH))
        } else if current == '#' {
            Ok(self.skip_single_line_comment(offset, MYSQL_SPECIAL_COMMENT_BEGIN_SYMBOL_LENGTH))
        } else if is_multiple_line_comment_begin(current, next) {
            self.until_comment_and_hint_terminate_sign(offset, COMMENT_BEGIN_SYMBOL_LENGTH)
        } else {
            Ok(offset)
        }
    }

    fn skip_single_line_comment(&self, offset: usize, comment_symbol_length: usize) -> usize {
        let mut position = offset + comment_symbol_length;
        loop {
            let ch = self.char_at(position);
            if char_type::is_end_of_input(ch) || ch == '\n' {
                break;
            }
            position += ch.len_utf8();
        }
        // Перевод строки (или встреченный в тексте маркер) поглощается вместе с комментарием
        if position < self.input.len() {
            position + 1
        } else {
            self.input.len()
        }
    }

    /// Пропускает хинт оптимизатора с трехсимвольным началом (`/*!`, `/*+`).
    ///
    /// Вызывающий код отвечает за то, что в позиции действительно начинается хинт.
    pub fn skip_hint(&self, offset: usize) -> Result<usize> {
        self.until_comment_and_hint_terminate_sign(offset, HINT_BEGIN_SYMBOL_LENGTH)
    }

    fn until_comment_and_hint_terminate_sign(
        &self,
        offset: usize,
        begin_symbol_length: usize,
    ) -> Result<usize> {
        let mut position = offset + begin_symbol_length;
        while !is_multiple_line_comment_end(self.char_at(position), self.char_at(position + 1)) {
            let ch = self.char_at(position);
            if char_type::is_end_of_input(ch) {
                return Err(Error::unterminated("*/", offset));
            }
            position += ch.len_utf8();
        }
        Ok(position + COMMENT_AND_HINT_END_SYMBOL_LENGTH)
    }

    /// Сканирует переменную `@name` или `@@scope.name`
    pub fn scan_variable(&self, offset: usize) -> Token<'a> {
        let mut length = 1;
        if self.char_at(offset + 1) == '@' {
            length += 1;
        }
        while is_variable_char(self.char_at(offset + length)) {
            length += 1;
        }
        Token::new(
            Literal::Variable,
            &self.input[offset..offset + length],
            offset + length,
        )
    }

    /// Сканирует идентификатор: в обратных кавычках или «голый».
    ///
    /// Голые `ORDER` и `GROUP` становятся ключевыми словами, только если за ними
    /// (после пробелов) идут символы `BY`.
    pub fn scan_identifier(&self, offset: usize) -> Result<Token<'a>> {
        if self.char_at(offset) == '`' {
            let length = self.length_until_terminated_char(offset, '`')?;
            return Ok(Token::new(
                Literal::Identifier,
                &self.input[offset..offset + length],
                offset + length,
            ));
        }
        let mut length = 0;
        while is_identifier_char(self.char_at(offset + length)) {
            length += 1;
        }
        let literals = &self.input[offset..offset + length];
        let kind = if is_ambiguous_identifier(literals) {
            self.process_ambiguous_identifier(offset + length, literals)?
        } else {
            self.dictionary.find_kind(literals, TokenKind::IDENTIFIER)
        };
        Ok(Token::new(kind, literals, offset + length))
    }

    fn process_ambiguous_identifier(&self, offset: usize, literals: &str) -> Result<TokenKind> {
        let position = self.skip_whitespace(offset);
        let first = self.char_at(position);
        let second = self.char_at(position + first.len_utf8());
        if first.eq_ignore_ascii_case(&'B') && second.eq_ignore_ascii_case(&'Y') {
            return self.dictionary.find_kind_strict(literals);
        }
        Ok(TokenKind::IDENTIFIER)
    }

    /// Длина литерала от открывающего ограничителя до закрывающего включительно.
    /// Удвоенный ограничитель внутри литерала считается экранированным символом.
    fn length_until_terminated_char(&self, offset: usize, terminated_char: char) -> Result<usize> {
        let delimiter_length = terminated_char.len_utf8();
        let mut length = delimiter_length;
        loop {
            let position = offset + length;
            let ch = self.char_at(position);
            let escaped = self.has_escape_char(terminated_char, position);
            if ch == terminated_char && !escaped {
                return Ok(length + delimiter_length);
            }
            if position >= self.input.len() {
                return Err(Error::unterminated(terminated_char.to_string(), offset));
            }
            if escaped {
                length += delimiter_length;
            }
            length += ch.len_utf8();
        }
    }

    fn has_escape_char(&self, terminated_char: char, position: usize) -> bool {
        self.char_at(position) == terminated_char
            && self.char_at(position + terminated_char.len_utf8()) == terminated_char
    }

    /// Сканирует шестнадцатеричное число; префикс `0x` уже проверен вызывающим кодом
    pub fn scan_hex_decimal(&self, offset: usize) -> Token<'a> {
        let mut length = HEX_BEGIN_SYMBOL_LENGTH;
        if self.char_at(offset + length) == '-' {
            length += 1;
        }
        while is_hex(self.char_at(offset + length)) {
            length += 1;
        }
        Token::new(
            Literal::Hex,
            &self.input[offset..offset + length],
            offset + length,
        )
    }

    /// Сканирует число: знак, целая часть, дробная часть, экспонента и суффикс `f`/`d`
    pub fn scan_number(&self, offset: usize) -> Token<'a> {
        let mut length = 0;
        if self.char_at(offset + length) == '-' {
            length += 1;
        }
        length += self.digital_length(offset + length);
        let mut is_float = false;
        if self.char_at(offset + length) == '.' {
            is_float = true;
            length += 1;
            length += self.digital_length(offset + length);
        }
        if is_scientific_notation(self.char_at(offset + length)) {
            is_float = true;
            length += 1;
            if matches!(self.char_at(offset + length), '+' | '-') {
                length += 1;
            }
            length += self.digital_length(offset + length);
        }
        if is_binary_number(self.char_at(offset + length)) {
            is_float = true;
            length += 1;
        }
        let literal = if is_float { Literal::Float } else { Literal::Int };
        Token::new(
            literal,
            &self.input[offset..offset + length],
            offset + length,
        )
    }

    fn digital_length(&self, offset: usize) -> usize {
        let mut result = 0;
        while char_type::is_digital(self.char_at(offset + result)) {
            result += 1;
        }
        result
    }

    /// Сканирует строковый литерал; ограничитель берется из символа в позиции `offset`.
    /// Текст токена не содержит внешних ограничителей, удвоенные остаются как есть.
    pub fn scan_chars(&self, offset: usize) -> Result<Token<'a>> {
        let terminated_char = self.char_at(offset);
        let delimiter_length = terminated_char.len_utf8();
        let length = self.length_until_terminated_char(offset, terminated_char)?;
        Ok(Token::spanning(
            Literal::Chars,
            &self.input[offset + delimiter_length..offset + length - delimiter_length],
            offset,
            offset + length,
        ))
    }

    /// Сканирует символ: берет максимальную серию символов-операторов и укорачивает
    /// ее с конца, пока префикс не найдется в словаре
    pub fn scan_symbol(&self, offset: usize) -> Result<Token<'a>> {
        let mut length = 0;
        while char_type::is_symbol(self.char_at(offset + length)) {
            length += 1;
        }
        let run = &self.input[offset..offset + length];
        while length > 0 {
            let literals = &self.input[offset..offset + length];
            if let Some(symbol) = self.dictionary.find_symbol(literals) {
                return Ok(Token::new(symbol, literals, offset + length));
            }
            length -= 1;
        }
        Err(Error::UnknownSymbol {
            literals: run.to_string(),
            position: offset,
        })
    }

    /// Символ по байтовому смещению или [`EOI`] за пределами строки
    pub fn char_at(&self, index: usize) -> char {
        self.input
            .get(index..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or(EOI)
    }
}

fn is_single_line_comment_begin(ch: char, next: char) -> bool {
    (ch == '/' && next == '/') || (ch == '-' && next == '-')
}

fn is_multiple_line_comment_begin(ch: char, next: char) -> bool {
    ch == '/' && next == '*'
}

fn is_multiple_line_comment_end(ch: char, next: char) -> bool {
    ch == '*' && next == '/'
}

fn is_variable_char(ch: char) -> bool {
    is_identifier_char(ch) || ch == '.'
}

pub(crate) fn is_identifier_char(ch: char) -> bool {
    char_type::is_alphabet(ch) || char_type::is_digital(ch) || matches!(ch, '_' | '$' | '#')
}

fn is_ambiguous_identifier(literals: &str) -> bool {
    literals.eq_ignore_ascii_case(Keyword::Order.name())
        || literals.eq_ignore_ascii_case(Keyword::Group.name())
}

fn is_hex(ch: char) -> bool {
    ch.is_ascii_hexdigit()
}

fn is_scientific_notation(ch: char) -> bool {
    matches!(ch, 'e' | 'E')
}

fn is_binary_number(ch: char) -> bool {
    matches!(ch, 'f' | 'F' | 'd' | 'D')
}
