//! Словарь ключевых слов и символов
//!
//! Неизменяемая таблица поиска, которую лексер получает по ссылке. Один словарь
//! можно разделять между параллельными разборами без синхронизации.

use crate::common::{Error, Result};
use crate::parser::dialect::Dialect;
use crate::parser::token::{Keyword, Symbol, TokenKind};
use std::collections::HashMap;

/// Ключевые слова, общие для всех диалектов
pub const DEFAULT_KEYWORDS: &[Keyword] = &[
    Keyword::Schema,
    Keyword::Database,
    Keyword::Table,
    Keyword::Column,
    Keyword::View,
    Keyword::Index,
    Keyword::Trigger,
    Keyword::Procedure,
    Keyword::Tablespace,
    Keyword::Function,
    Keyword::Sequence,
    Keyword::Cursor,
    Keyword::Type,
    Keyword::Package,
    Keyword::User,
    Keyword::Role,
    Keyword::Select,
    Keyword::Delete,
    Keyword::Insert,
    Keyword::Update,
    Keyword::Create,
    Keyword::Alter,
    Keyword::Drop,
    Keyword::Truncate,
    Keyword::Replace,
    Keyword::Grant,
    Keyword::Revoke,
    Keyword::Declare,
    Keyword::Call,
    Keyword::Explain,
    Keyword::Use,
    Keyword::Into,
    Keyword::Values,
    Keyword::Set,
    Keyword::From,
    Keyword::Where,
    Keyword::As,
    Keyword::On,
    Keyword::If,
    Keyword::Else,
    Keyword::Then,
    Keyword::For,
    Keyword::To,
    Keyword::And,
    Keyword::Or,
    Keyword::Not,
    Keyword::Null,
    Keyword::True,
    Keyword::False,
    Keyword::Is,
    Keyword::Between,
    Keyword::In,
    Keyword::Exists,
    Keyword::Like,
    Keyword::Escape,
    Keyword::All,
    Keyword::Any,
    Keyword::Some,
    Keyword::Distinct,
    Keyword::Order,
    Keyword::Group,
    Keyword::By,
    Keyword::Asc,
    Keyword::Desc,
    Keyword::Having,
    Keyword::Union,
    Keyword::Except,
    Keyword::Intersect,
    Keyword::Join,
    Keyword::Inner,
    Keyword::Left,
    Keyword::Right,
    Keyword::Full,
    Keyword::Outer,
    Keyword::Cross,
    Keyword::Using,
    Keyword::Natural,
    Keyword::Case,
    Keyword::When,
    Keyword::End,
    Keyword::With,
    Keyword::Over,
    Keyword::Interval,
    Keyword::Cast,
    Keyword::Collate,
    Keyword::Temporary,
    Keyword::Begin,
    Keyword::Commit,
    Keyword::Rollback,
    Keyword::Savepoint,
    Keyword::Transaction,
    Keyword::Count,
    Keyword::Sum,
    Keyword::Avg,
    Keyword::Max,
    Keyword::Min,
    Keyword::Default,
    Keyword::Primary,
    Keyword::Key,
    Keyword::Foreign,
    Keyword::References,
    Keyword::Unique,
    Keyword::Check,
    Keyword::Constraint,
    Keyword::Cascade,
];

/// Словарь ключевых слов и символов
#[derive(Debug, Clone)]
pub struct Dictionary {
    /// Ключевые слова по литералу в верхнем регистре
    keywords: HashMap<&'static str, Keyword>,
    /// Символы по точному тексту
    symbols: HashMap<&'static str, Symbol>,
}

impl Dictionary {
    /// Создает словарь из общих ключевых слов, дополнительных слов и всех символов
    pub fn new(extra_keywords: &[Keyword]) -> Self {
        Self::with_symbols(extra_keywords, &Symbol::ALL)
    }

    /// Создает словарь для диалекта
    pub fn for_dialect(dialect: Dialect) -> Self {
        Self::new(dialect.keywords())
    }

    /// Создает словарь с ограниченным набором символов
    pub fn with_symbols(extra_keywords: &[Keyword], symbols: &[Symbol]) -> Self {
        let keywords = DEFAULT_KEYWORDS
            .iter()
            .chain(extra_keywords)
            .map(|keyword| (keyword.name(), *keyword))
            .collect();
        let symbols = symbols
            .iter()
            .map(|symbol| (symbol.literals(), *symbol))
            .collect();

        Self { keywords, symbols }
    }

    /// Ищет вид токена по литералу без учета регистра, возвращая `default` при отсутствии
    pub fn find_kind(&self, literals: &str, default: TokenKind) -> TokenKind {
        self.lookup_keyword(literals)
            .map(TokenKind::Keyword)
            .unwrap_or(default)
    }

    /// Ищет ключевое слово, которое обязано присутствовать в словаре
    pub fn find_kind_strict(&self, literals: &str) -> Result<TokenKind> {
        self.lookup_keyword(literals)
            .map(TokenKind::Keyword)
            .ok_or_else(|| Error::UnknownKeyword {
                literals: literals.to_string(),
            })
    }

    /// Ищет символ по точному тексту
    pub fn find_symbol(&self, literals: &str) -> Option<Symbol> {
        self.symbols.get(literals).copied()
    }

    /// Количество ключевых слов в словаре
    pub fn keyword_count(&self) -> usize {
        self.keywords.len()
    }

    /// Количество символов в словаре
    pub fn symbol_count(&self) -> usize {
        self.symbols.len()
    }

    fn lookup_keyword(&self, literals: &str) -> Option<Keyword> {
        self.keywords
            .get(literals.to_ascii_uppercase().as_str())
            .copied()
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::for_dialect(Dialect::default())
    }
}
