//! Диалекты SQL, поддерживаемые лексером
//!
//! Диалект влияет только на набор ключевых слов словаря и на то, какие префиксы
//! лексер считает началом хинта, комментария, переменной или N-строки.

use crate::common::{Error, Result};
use crate::parser::token::Keyword;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Диалект SQL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    #[default]
    MySql,
    Oracle,
    PostgreSql,
    SqlServer,
}

const MYSQL_KEYWORDS: &[Keyword] = &[
    Keyword::Show,
    Keyword::Dual,
    Keyword::Limit,
    Keyword::Offset,
    Keyword::Value,
    Keyword::Force,
    Keyword::Ignore,
    Keyword::StraightJoin,
    Keyword::SqlCalcFoundRows,
    Keyword::HighPriority,
    Keyword::LowPriority,
    Keyword::Delayed,
    Keyword::Duplicate,
    Keyword::Partition,
    Keyword::Regexp,
    Keyword::Div,
    Keyword::Mod,
    Keyword::Xor,
    Keyword::Binary,
    Keyword::Modify,
    Keyword::Change,
    Keyword::AutoIncrement,
    Keyword::Describe,
];

const ORACLE_KEYWORDS: &[Keyword] = &[
    Keyword::Dual,
    Keyword::Minus,
    Keyword::Rownum,
    Keyword::Rowid,
    Keyword::Connect,
    Keyword::Start,
    Keyword::Prior,
    Keyword::Nocycle,
    Keyword::Siblings,
    Keyword::Merge,
    Keyword::Nowait,
    Keyword::Partition,
];

const POSTGRESQL_KEYWORDS: &[Keyword] = &[
    Keyword::Limit,
    Keyword::Offset,
    Keyword::Returning,
    Keyword::Only,
    Keyword::Fetch,
    Keyword::Next,
    Keyword::Row,
    Keyword::Rows,
    Keyword::First,
    Keyword::Ilike,
    Keyword::Similar,
    Keyword::Lateral,
    Keyword::Window,
    Keyword::Partition,
];

const SQLSERVER_KEYWORDS: &[Keyword] = &[
    Keyword::Top,
    Keyword::Output,
    Keyword::Nolock,
    Keyword::Percent,
    Keyword::Ties,
    Keyword::Offset,
    Keyword::Fetch,
    Keyword::Next,
    Keyword::Rows,
    Keyword::Only,
    Keyword::Apply,
    Keyword::Merge,
    Keyword::Partition,
];

impl Dialect {
    /// Все диалекты
    pub const ALL: [Dialect; 4] = [
        Dialect::MySql,
        Dialect::Oracle,
        Dialect::PostgreSql,
        Dialect::SqlServer,
    ];

    /// Ключевые слова, которые диалект добавляет к общему набору
    pub fn keywords(&self) -> &'static [Keyword] {
        match self {
            Dialect::MySql => MYSQL_KEYWORDS,
            Dialect::Oracle => ORACLE_KEYWORDS,
            Dialect::PostgreSql => POSTGRESQL_KEYWORDS,
            Dialect::SqlServer => SQLSERVER_KEYWORDS,
        }
    }

    /// Третий символ открывающей последовательности хинта (`/*!`, `/*+`)
    pub fn hint_marker(&self) -> Option<char> {
        match self {
            Dialect::MySql => Some('!'),
            Dialect::Oracle => Some('+'),
            Dialect::PostgreSql | Dialect::SqlServer => None,
        }
    }

    /// Поддерживает ли диалект комментарии `#`
    pub fn supports_pound_comment(&self) -> bool {
        matches!(self, Dialect::MySql)
    }

    /// Поддерживает ли диалект переменные `@name`
    pub fn supports_variables(&self) -> bool {
        matches!(self, Dialect::MySql | Dialect::SqlServer)
    }

    /// Поддерживает ли диалект строки `N'...'`
    pub fn supports_nchars(&self) -> bool {
        matches!(self, Dialect::SqlServer)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Dialect::MySql => "mysql",
            Dialect::Oracle => "oracle",
            Dialect::PostgreSql => "postgresql",
            Dialect::SqlServer => "sqlserver",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Dialect {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "mysql" => Ok(Dialect::MySql),
            "oracle" => Ok(Dialect::Oracle),
            "postgresql" | "postgres" => Ok(Dialect::PostgreSql),
            "sqlserver" | "mssql" => Ok(Dialect::SqlServer),
            other => Err(Error::configuration(format!("Unknown SQL dialect: {}", other))),
        }
    }
}
