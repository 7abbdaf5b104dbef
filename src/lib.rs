//! sqlproxy-lexer - лексический анализ SQL для прокси базы данных
//!
//! Превращает текст SQL выражения в поток классифицированных токенов (ключевые
//! слова, идентификаторы, литералы, символы) и предоставляет базовые операции
//! над этим потоком, на которых строятся парсеры конкретных выражений.
//!
//! ```
//! use sqlproxy_lexer::parser::{Dialect, Dictionary, Keyword, Lexer, TokenKind};
//!
//! let dictionary = Dictionary::for_dialect(Dialect::MySql);
//! let lexer = Lexer::new("SELECT id FROM t_order ORDER BY id", &dictionary, Dialect::MySql)?;
//! let tokens = lexer.tokenize()?;
//! assert_eq!(tokens[0].kind, TokenKind::Keyword(Keyword::Select));
//! assert_eq!(tokens[4].kind, TokenKind::Keyword(Keyword::Order));
//! # Ok::<(), sqlproxy_lexer::Error>(())
//! ```

pub mod cli;
pub mod common;
pub mod parser;

pub use common::error::{Error, Result};

/// Версия библиотеки
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
