//! Лексический анализ SQL и базовые операции над потоком токенов

pub mod base_parser;
pub mod char_type;
pub mod dialect;
pub mod dictionary;
pub mod lexer;
pub mod parser;
pub mod token;
pub mod tokenizer;


// Переэкспортируем основные типы
pub use base_parser::BaseParser;
pub use dialect::Dialect;
pub use dictionary::Dictionary;
pub use lexer::Lexer;
pub use parser::SqlParser;
pub use token::{Assist, Keyword, Literal, Symbol, Token, TokenKind};
pub use tokenizer::Tokenizer;
