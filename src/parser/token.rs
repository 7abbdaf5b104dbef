//! Токены для SQL лексера
//!
//! Определяет закрытое множество видов токенов: ключевые слова, символы,
//! литералы и служебные маркеры, а также сам токен с позицией конца в исходном тексте.

use std::fmt;

/// Ключевые слова SQL (общие и диалектные)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    // === Объекты схемы ===
    Schema,
    Database,
    Table,
    Column,
    View,
    Index,
    Trigger,
    Procedure,
    Tablespace,
    Function,
    Sequence,
    Cursor,
    Type,
    Package,
    User,
    Role,

    // === Команды ===
    Select,
    Delete,
    Insert,
    Update,
    Create,
    Alter,
    Drop,
    Truncate,
    Replace,
    Grant,
    Revoke,
    Declare,
    Call,
    Explain,
    Use,

    // === Предложения и операторы ===
    Into,
    Values,
    Set,
    From,
    Where,
    As,
    On,
    If,
    Else,
    Then,
    For,
    To,
    And,
    Or,
    Not,
    Null,
    True,
    False,
    Is,
    Between,
    In,
    Exists,
    Like,
    Escape,
    All,
    Any,
    Some,
    Distinct,
    Order,
    Group,
    By,
    Asc,
    Desc,
    Having,
    Union,
    Except,
    Intersect,
    Join,
    Inner,
    Left,
    Right,
    Full,
    Outer,
    Cross,
    Using,
    Natural,
    Case,
    When,
    End,
    With,
    Over,
    Interval,
    Cast,
    Collate,
    Temporary,

    // === Транзакции ===
    Begin,
    Commit,
    Rollback,
    Savepoint,
    Transaction,

    // === Агрегаты ===
    Count,
    Sum,
    Avg,
    Max,
    Min,

    // === Ограничения ===
    Default,
    Primary,
    Key,
    Foreign,
    References,
    Unique,
    Check,
    Constraint,
    Cascade,

    // === MySQL ===
    Show,
    Dual,
    Limit,
    Offset,
    Value,
    Force,
    Ignore,
    StraightJoin,
    SqlCalcFoundRows,
    HighPriority,
    LowPriority,
    Delayed,
    Duplicate,
    Partition,
    Regexp,
    Div,
    Mod,
    Xor,
    Binary,
    Modify,
    Change,
    AutoIncrement,
    Describe,

    // === Oracle ===
    Minus,
    Rownum,
    Rowid,
    Connect,
    Start,
    Prior,
    Nocycle,
    Siblings,
    Merge,
    Nowait,

    // === PostgreSQL ===
    Returning,
    Only,
    Fetch,
    Next,
    Row,
    Rows,
    First,
    Ilike,
    Similar,
    Lateral,
    Window,

    // === SQL Server ===
    Top,
    Output,
    Nolock,
    Percent,
    Ties,
    Apply,
}

impl Keyword {
    /// Возвращает литерал ключевого слова в верхнем регистре
    pub fn name(&self) -> &'static str {
        match self {
            Keyword::Schema => "SCHEMA",
            Keyword::Database => "DATABASE",
            Keyword::Table => "TABLE",
            Keyword::Column => "COLUMN",
            Keyword::View => "VIEW",
            Keyword::Index => "INDEX",
            Keyword::Trigger => "TRIGGER",
            Keyword::Procedure => "PROCEDURE",
            Keyword::Tablespace => "TABLESPACE",
            Keyword::Function => "FUNCTION",
            Keyword::Sequence => "SEQUENCE",
            Keyword::Cursor => "CURSOR",
            Keyword::Type => "TYPE",
            Keyword::Package => "PACKAGE",
            Keyword::User => "USER",
            Keyword::Role => "ROLE",
            Keyword::Select => "SELECT",
            Keyword::Delete => "DELETE",
            Keyword::Insert => "INSERT",
            Keyword::Update => "UPDATE",
            Keyword::Create => "CREATE",
            Keyword::Alter => "ALTER",
            Keyword::Drop => "DROP",
            Keyword::Truncate => "TRUNCATE",
            Keyword::Replace => "REPLACE",
            Keyword::Grant => "GRANT",
            Keyword::Revoke => "REVOKE",
            Keyword::Declare => "DECLARE",
            Keyword::Call => "CALL",
            Keyword::Explain => "EXPLAIN",
            Keyword::Use => "USE",
            Keyword::Into => "INTO",
            Keyword::Values => "VALUES",
            Keyword::Set => "SET",
            Keyword::From => "FROM",
            Keyword::Where => "WHERE",
            Keyword::As => "AS",
            Keyword::On => "ON",
            Keyword::If => "IF",
            Keyword::Else => "ELSE",
            Keyword::Then => "THEN",
            Keyword::For => "FOR",
            Keyword::To => "TO",
            Keyword::And => "AND",
            Keyword::Or => "OR",
            Keyword::Not => "NOT",
            Keyword::Null => "NULL",
            Keyword::True => "TRUE",
            Keyword::False => "FALSE",
            Keyword::Is => "IS",
            Keyword::Between => "BETWEEN",
            Keyword::In => "IN",
            Keyword::Exists => "EXISTS",
            Keyword::Like => "LIKE",
            Keyword::Escape => "ESCAPE",
            Keyword::All => "ALL",
            Keyword::Any => "ANY",
            Keyword::Some => "SOME",
            Keyword::Distinct => "DISTINCT",
            Keyword::Order => "ORDER",
            Keyword::Group => "GROUP",
            Keyword::By => "BY",
            Keyword::Asc => "ASC",
            Keyword::Desc => "DESC",
            Keyword::Having => "HAVING",
            Keyword::Union => "UNION",
            Keyword::Except => "EXCEPT",
            Keyword::Intersect => "INTERSECT",
            Keyword::Join => "JOIN",
            Keyword::Inner => "INNER",
            Keyword::Left => "LEFT",
            Keyword::Right => "RIGHT",
            Keyword::Full => "FULL",
            Keyword::Outer => "OUTER",
            Keyword::Cross => "CROSS",
            Keyword::Using => "USING",
            Keyword::Natural => "NATURAL",
            Keyword::Case => "CASE",
            Keyword::When => "WHEN",
            Keyword::End => "END",
            Keyword::With => "WITH",
            Keyword::Over => "OVER",
            Keyword::Interval => "INTERVAL",
            Keyword::Cast => "CAST",
            Keyword::Collate => "COLLATE",
            Keyword::Temporary => "TEMPORARY",
            Keyword::Begin => "BEGIN",
            Keyword::Commit => "COMMIT",
            Keyword::Rollback => "ROLLBACK",
            Keyword::Savepoint => "SAVEPOINT",
            Keyword::Transaction => "TRANSACTION",
            Keyword::Count => "COUNT",
            Keyword::Sum => "SUM",
            Keyword::Avg => "AVG",
            Keyword::Max => "MAX",
            Keyword::Min => "MIN",
            Keyword::Default => "DEFAULT",
            Keyword::Primary => "PRIMARY",
            Keyword::Key => "KEY",
            Keyword::Foreign => "FOREIGN",
            Keyword::References => "REFERENCES",
            Keyword::Unique => "UNIQUE",
            Keyword::Check => "CHECK",
            Keyword::Constraint => "CONSTRAINT",
            Keyword::Cascade => "CASCADE",
            Keyword::Show => "SHOW",
            Keyword::Dual => "DUAL",
            Keyword::Limit => "LIMIT",
            Keyword::Offset => "OFFSET",
            Keyword::Value => "VALUE",
            Keyword::Force => "FORCE",
            Keyword::Ignore => "IGNORE",
            Keyword::StraightJoin => "STRAIGHT_JOIN",
            Keyword::SqlCalcFoundRows => "SQL_CALC_FOUND_ROWS",
            Keyword::HighPriority => "HIGH_PRIORITY",
            Keyword::LowPriority => "LOW_PRIORITY",
            Keyword::Delayed => "DELAYED",
            Keyword::Duplicate => "DUPLICATE",
            Keyword::Partition => "PARTITION",
            Keyword::Regexp => "REGEXP",
            Keyword::Div => "DIV",
            Keyword::Mod => "MOD",
            Keyword::Xor => "XOR",
            Keyword::Binary => "BINARY",
            Keyword::Modify => "MODIFY",
            Keyword::Change => "CHANGE",
            Keyword::AutoIncrement => "AUTO_INCREMENT",
            Keyword::Describe => "DESCRIBE",
            Keyword::Minus => "MINUS",
            Keyword::Rownum => "ROWNUM",
            Keyword::Rowid => "ROWID",
            Keyword::Connect => "CONNECT",
            Keyword::Start => "START",
            Keyword::Prior => "PRIOR",
            Keyword::Nocycle => "NOCYCLE",
            Keyword::Siblings => "SIBLINGS",
            Keyword::Merge => "MERGE",
            Keyword::Nowait => "NOWAIT",
            Keyword::Returning => "RETURNING",
            Keyword::Only => "ONLY",
            Keyword::Fetch => "FETCH",
            Keyword::Next => "NEXT",
            Keyword::Row => "ROW",
            Keyword::Rows => "ROWS",
            Keyword::First => "FIRST",
            Keyword::Ilike => "ILIKE",
            Keyword::Similar => "SIMILAR",
            Keyword::Lateral => "LATERAL",
            Keyword::Window => "WINDOW",
            Keyword::Top => "TOP",
            Keyword::Output => "OUTPUT",
            Keyword::Nolock => "NOLOCK",
            Keyword::Percent => "PERCENT",
            Keyword::Ties => "TIES",
            Keyword::Apply => "APPLY",
        }
    }
}

/// Символы (знаки препинания и операторы) с точным текстовым представлением
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    LeftParen,    // (
    RightParen,   // )
    LeftBrace,    // {
    RightBrace,   // }
    LeftBracket,  // [
    RightBracket, // ]
    Semi,         // ;
    Comma,        // ,
    Dot,          // .
    DoubleDot,    // ..
    Plus,         // +
    Sub,          // -
    Star,         // *
    Slash,        // /
    Question,     // ?
    Eq,           // =
    Gt,           // >
    Lt,           // <
    Bang,         // !
    Tilde,        // ~
    Caret,        // ^
    Percent,      // %
    Colon,        // :
    DoubleColon,  // ::
    ColonEq,      // :=
    LtEq,         // <=
    GtEq,         // >=
    LtEqGt,       // <=>
    LtGt,         // <>
    BangEq,       // !=
    BangGt,       // !>
    BangLt,       // !<
    Amp,          // &
    Bar,          // |
    DoubleAmp,    // &&
    DoubleBar,    // ||
    DoubleLt,     // <<
    DoubleGt,     // >>
    Pound,        // #
}

impl Symbol {
    /// Все известные символы
    pub const ALL: [Symbol; 39] = [
        Symbol::LeftParen,
        Symbol::RightParen,
        Symbol::LeftBrace,
        Symbol::RightBrace,
        Symbol::LeftBracket,
        Symbol::RightBracket,
        Symbol::Semi,
        Symbol::Comma,
        Symbol::Dot,
        Symbol::DoubleDot,
        Symbol::Plus,
        Symbol::Sub,
        Symbol::Star,
        Symbol::Slash,
        Symbol::Question,
        Symbol::Eq,
        Symbol::Gt,
        Symbol::Lt,
        Symbol::Bang,
        Symbol::Tilde,
        Symbol::Caret,
        Symbol::Percent,
        Symbol::Colon,
        Symbol::DoubleColon,
        Symbol::ColonEq,
        Symbol::LtEq,
        Symbol::GtEq,
        Symbol::LtEqGt,
        Symbol::LtGt,
        Symbol::BangEq,
        Symbol::BangGt,
        Symbol::BangLt,
        Symbol::Amp,
        Symbol::Bar,
        Symbol::DoubleAmp,
        Symbol::DoubleBar,
        Symbol::DoubleLt,
        Symbol::DoubleGt,
        Symbol::Pound,
    ];

    /// Возвращает точный текст символа
    pub fn literals(&self) -> &'static str {
        match self {
            Symbol::LeftParen => "(",
            Symbol::RightParen => ")",
            Symbol::LeftBrace => "{",
            Symbol::RightBrace => "}",
            Symbol::LeftBracket => "[",
            Symbol::RightBracket => "]",
            Symbol::Semi => ";",
            Symbol::Comma => ",",
            Symbol::Dot => ".",
            Symbol::DoubleDot => "..",
            Symbol::Plus => "+",
            Symbol::Sub => "-",
            Symbol::Star => "*",
            Symbol::Slash => "/",
            Symbol::Question => "?",
            Symbol::Eq => "=",
            Symbol::Gt => ">",
            Symbol::Lt => "<",
            Symbol::Bang => "!",
            Symbol::Tilde => "~",
            Symbol::Caret => "^",
            Symbol::Percent => "%",
            Symbol::Colon => ":",
            Symbol::DoubleColon => "::",
            Symbol::ColonEq => ":=",
            Symbol::LtEq => "<=",
            Symbol::GtEq => ">=",
            Symbol::LtEqGt => "<=>",
            Symbol::LtGt => "<>",
            Symbol::BangEq => "!=",
            Symbol::BangGt => "!>",
            Symbol::BangLt => "!<",
            Symbol::Amp => "&",
            Symbol::Bar => "|",
            Symbol::DoubleAmp => "&&",
            Symbol::DoubleBar => "||",
            Symbol::DoubleLt => "<<",
            Symbol::DoubleGt => ">>",
            Symbol::Pound => "#",
        }
    }
}

/// Подвиды литералов
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Literal {
    /// Идентификатор (имя таблицы, колонки и т.д.)
    Identifier,
    /// Переменная (`@var`, `@@global.var`)
    Variable,
    /// Целое число
    Int,
    /// Число с плавающей точкой
    Float,
    /// Шестнадцатеричное число
    Hex,
    /// Строковый литерал без ограничителей
    Chars,
}

/// Служебные маркеры потока токенов
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Assist {
    /// Конец ввода
    End,
    /// Нераспознанный символ
    Error,
}

/// Вид токена
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Keyword(Keyword),
    Symbol(Symbol),
    Literal(Literal),
    Assist(Assist),
}

impl TokenKind {
    pub const IDENTIFIER: TokenKind = TokenKind::Literal(Literal::Identifier);
    pub const END: TokenKind = TokenKind::Assist(Assist::End);
    pub const LEFT_PAREN: TokenKind = TokenKind::Symbol(Symbol::LeftParen);
    pub const RIGHT_PAREN: TokenKind = TokenKind::Symbol(Symbol::RightParen);
    pub const ERROR: TokenKind = TokenKind::Assist(Assist::Error);

    /// Проверяет, является ли токен ключевым словом
    pub fn is_keyword(&self) -> bool {
        matches!(self, TokenKind::Keyword(_))
    }

    /// Проверяет, является ли токен литералом
    pub fn is_literal(&self) -> bool {
        matches!(self, TokenKind::Literal(_))
    }

    /// Проверяет, является ли токен символом
    pub fn is_symbol(&self) -> bool {
        matches!(self, TokenKind::Symbol(_))
    }
}

impl From<Keyword> for TokenKind {
    fn from(keyword: Keyword) -> Self {
        TokenKind::Keyword(keyword)
    }
}

impl From<Symbol> for TokenKind {
    fn from(symbol: Symbol) -> Self {
        TokenKind::Symbol(symbol)
    }
}

impl From<Literal> for TokenKind {
    fn from(literal: Literal) -> Self {
        TokenKind::Literal(literal)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Keyword(keyword) => keyword.name(),
            TokenKind::Symbol(symbol) => symbol.literals(),
            TokenKind::Literal(Literal::Identifier) => "IDENTIFIER",
            TokenKind::Literal(Literal::Variable) => "VARIABLE",
            TokenKind::Literal(Literal::Int) => "INT",
            TokenKind::Literal(Literal::Float) => "FLOAT",
            TokenKind::Literal(Literal::Hex) => "HEX",
            TokenKind::Literal(Literal::Chars) => "CHARS",
            TokenKind::Assist(Assist::End) => "END",
            TokenKind::Assist(Assist::Error) => "ERROR",
        };
        write!(f, "{}", name)
    }
}

/// Токен: вид, текст из исходной строки и границы токена в исходном тексте
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub end_offset: usize,
    /// Смещение первого символа токена, включая кавычки и префикс `N`
    start: usize,
}

impl<'a> Token<'a> {
    /// Создает токен, текст которого занимает ровно `text.len()` байт перед `end_offset`
    pub fn new(kind: impl Into<TokenKind>, text: &'a str, end_offset: usize) -> Self {
        Self::spanning(kind, text, end_offset.saturating_sub(text.len()), end_offset)
    }

    /// Создает токен с явной начальной позицией (строки без ограничителей в тексте)
    pub fn spanning(
        kind: impl Into<TokenKind>,
        text: &'a str,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Self {
            kind: kind.into(),
            text,
            end_offset,
            start: start_offset,
        }
    }

    /// Токен конца ввода
    pub fn end(end_offset: usize) -> Self {
        Self::new(TokenKind::END, "", end_offset)
    }

    /// Тот же токен, начинающийся с другой позиции
    pub fn starting_at(self, start_offset: usize) -> Self {
        Self {
            start: start_offset,
            ..self
        }
    }

    /// Смещение начала токена в исходном тексте
    pub fn start_offset(&self) -> usize {
        self.start
    }

    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::END
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}('{}') ending at {}", self.kind, self.text, self.end_offset)
    }
}
