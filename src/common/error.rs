//! Обработка ошибок для sqlproxy-lexer

use crate::parser::token::TokenKind;
use thiserror::Error;

/// Основной тип ошибки лексического и синтаксического уровня
#[derive(Error, Debug)]
pub enum Error {
    /// Литерал, комментарий или хинт не закрыт до конца ввода
    #[error("Illegal input, unterminated '{terminator}' (scan started at offset {offset}).")]
    UnterminatedLiteral { terminator: String, offset: usize },

    /// Текущий токен не совпал с ожидаемым
    #[error(
        "SQL syntax error, expected token is '{expected}', actual token is '{actual}', literals is '{literals}' (position {position})."
    )]
    UnexpectedToken {
        expected: TokenKind,
        actual: TokenKind,
        literals: String,
        position: usize,
    },

    /// Символ, с которого не начинается ни один токен
    #[error(
        "SQL syntax error, token is '{}', literals is '{ch}' (position {position}).",
        TokenKind::ERROR
    )]
    UnexpectedChar { ch: char, position: usize },

    /// Ни один префикс серии символов не найден в словаре
    #[error("Unknown symbol '{literals}' at position {position}.")]
    UnknownSymbol { literals: String, position: usize },

    /// Строгий поиск ключевого слова в словаре не дал результата
    #[error("Keyword '{literals}' is not registered in the dictionary.")]
    UnknownKeyword { literals: String },

    /// Конструкция распознана, но не поддерживается
    #[error("Unsupported SQL syntax, token is '{kind}', literals is '{literals}' (position {position}).")]
    Unsupported {
        kind: TokenKind,
        literals: String,
        position: usize,
    },

    /// Ошибка I/O операций
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Ошибка разбора TOML конфигурации
    #[error("TOML error: {0}")]
    TomlDe(#[from] toml::de::Error),

    /// Ошибка конфигурации
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Тип результата для sqlproxy-lexer
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Создает ошибку незакрытого литерала
    pub fn unterminated(terminator: impl Into<String>, offset: usize) -> Self {
        Self::UnterminatedLiteral {
            terminator: terminator.into(),
            offset,
        }
    }

    /// Создает ошибку несовпадения токена
    pub fn unexpected_token(
        expected: TokenKind,
        actual: TokenKind,
        literals: impl Into<String>,
        position: usize,
    ) -> Self {
        Self::UnexpectedToken {
            expected,
            actual,
            literals: literals.into(),
            position,
        }
    }

    /// Создает ошибку неподдерживаемой конструкции
    pub fn unsupported(kind: TokenKind, literals: impl Into<String>, position: usize) -> Self {
        Self::Unsupported {
            kind,
            literals: literals.into(),
            position,
        }
    }

    /// Создает ошибку конфигурации
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Вид токена, на котором остановился разбор, если ошибка связана с токеном
    pub fn kind(&self) -> Option<TokenKind> {
        match self {
            Self::UnexpectedToken { actual, .. } => Some(*actual),
            Self::Unsupported { kind, .. } => Some(*kind),
            Self::UnexpectedChar { .. } => Some(TokenKind::ERROR),
            _ => None,
        }
    }

    /// Проверяет, вызвана ли ошибка незакрытым литералом
    pub fn is_unterminated(&self) -> bool {
        matches!(self, Self::UnterminatedLiteral { .. })
    }
}
