//! Базовые операции над потоком токенов
//!
//! Не знают ничего о грамматике конкретных выражений: только проверка,
//! принятие и пропуск токенов текущего лексера. Парсеры выражений реализуют
//! [`BaseParser`] и получают эти операции как методы по умолчанию.

use crate::common::{Error, Result};
use crate::parser::lexer::Lexer;
use crate::parser::token::TokenKind;

/// Базовый парсер над лексером
pub trait BaseParser<'a> {
    fn lexer(&self) -> &Lexer<'a>;

    fn lexer_mut(&mut self) -> &mut Lexer<'a>;

    /// Проверяет, что текущий токен имеет ожидаемый вид, и переходит к следующему
    fn accept(&mut self, kind: TokenKind) -> Result<()> {
        let token = *self.lexer().current_token();
        if token.kind != kind {
            return Err(Error::unexpected_token(
                kind,
                token.kind,
                token.text,
                token.start_offset(),
            ));
        }
        self.lexer_mut().next_token()
    }

    /// Совпадает ли вид текущего токена хотя бы с одним из переданных
    fn equal_any(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.lexer().current_token().kind)
    }

    /// Пропускает текущий токен, если он совпадает с одним из переданных видов
    fn skip_if_equal(&mut self, kinds: &[TokenKind]) -> Result<bool> {
        if self.equal_any(kinds) {
            self.lexer_mut().next_token()?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Пропускает все токены подряд, пока их вид входит в набор
    fn skip_all(&mut self, kinds: &[TokenKind]) -> Result<()> {
        while self.equal_any(kinds) && !self.lexer().current_token().is_end() {
            self.lexer_mut().next_token()?;
        }
        Ok(())
    }

    /// Пропускает токены до первого, чей вид входит в набор, или до конца ввода
    fn skip_until(&mut self, kinds: &[TokenKind]) -> Result<()> {
        while !self.equal_any(kinds) && !self.lexer().current_token().is_end() {
            self.lexer_mut().next_token()?;
        }
        Ok(())
    }

    /// Пропускает содержимое круглых скобок вместе с вложенными скобками.
    ///
    /// Возвращает исходный текст между открывающей и закрывающей скобкой
    /// и оставляет курсор на токене после закрывающей скобки. Если текущий
    /// токен не `(`, возвращает пустую строку и ничего не меняет. Незакрытые
    /// скобки не считаются ошибкой: разбор останавливается на конце ввода,
    /// а возвращается текст до конца ввода.
    fn skip_parentheses(&mut self) -> Result<&'a str> {
        if self.lexer().current_token().kind != TokenKind::LEFT_PAREN {
            return Ok("");
        }
        let begin_position = self.lexer().current_token().end_offset;
        self.lexer_mut().next_token()?;
        let mut count = 0usize;
        loop {
            let token = *self.lexer().current_token();
            if token.is_end() || (token.kind == TokenKind::RIGHT_PAREN && count == 0) {
                break;
            }
            if token.kind == TokenKind::LEFT_PAREN {
                count += 1;
            } else if token.kind == TokenKind::RIGHT_PAREN {
                count -= 1;
            }
            self.lexer_mut().next_token()?;
        }
        let input = self.lexer().input();
        let token = *self.lexer().current_token();
        let end_position = if token.is_end() {
            log::warn!(
                "Unbalanced parentheses starting at offset {}, stopped at end of input",
                begin_position - 1
            );
            input.len()
        } else {
            token.start_offset()
        };
        let result = &input[begin_position..end_position];
        log::debug!("Skipped parentheses content '{}'", result);
        self.lexer_mut().next_token()?;
        Ok(result)
    }

    /// Отвергает неподдерживаемую конструкцию, если текущий токен совпадает с одним из видов
    fn unsupported_if_equal(&self, kinds: &[TokenKind]) -> Result<()> {
        if self.equal_any(kinds) {
            let token = self.lexer().current_token();
            return Err(Error::unsupported(
                token.kind,
                token.text,
                token.start_offset(),
            ));
        }
        Ok(())
    }

    /// Пропускает токен одного из видов, иначе отвергает конструкцию как неподдерживаемую
    fn unsupported_if_not_skip(&mut self, kinds: &[TokenKind]) -> Result<()> {
        if self.skip_if_equal(kinds)? {
            return Ok(());
        }
        let token = self.lexer().current_token();
        Err(Error::unsupported(
            token.kind,
            token.text,
            token.start_offset(),
        ))
    }
}
