//! Общие утилиты для интеграционных тестов

use sqlproxy_lexer::common::{ParsingConfig, Result};
use sqlproxy_lexer::parser::{Dialect, Dictionary, Lexer, Token, TokenKind};
use std::path::PathBuf;
use tempfile::TempDir;

/// Выражения, которые должны разбираться в каждом диалекте
pub const PORTABLE_STATEMENTS: &[&str] = &[
    "SELECT * FROM t_order",
    "SELECT o.order_id, o.user_id FROM t_order o WHERE o.status = 'PAID' ORDER BY o.order_id DESC",
    "INSERT INTO t_order (order_id, user_id, status) VALUES (1, 10, 'INIT')",
    "UPDATE t_order SET status = 'PAID' WHERE order_id IN (1, 2, 3)",
    "DELETE FROM t_order WHERE created_at < '2017-01-01' AND amount >= 10.5",
    "SELECT COUNT(*), SUM(amount) FROM t_order GROUP BY user_id HAVING COUNT(*) > 1",
    "SELECT a FROM t1 UNION ALL SELECT b FROM t2 -- trailing comment",
    "SELECT 0x1F, -3.5e2, 'it''s' FROM t /* block */ WHERE x <> 1",
];

/// Разбирает выражение на токены со словарем диалекта
pub fn tokenize<'a>(sql: &'a str, dictionary: &'a Dictionary, dialect: Dialect) -> Result<Vec<Token<'a>>> {
    Lexer::new(sql, dictionary, dialect)?.tokenize()
}

/// Виды токенов без текста
pub fn kinds(tokens: &[Token<'_>]) -> Vec<TokenKind> {
    tokens.iter().map(|token| token.kind).collect()
}

/// Контекст теста с временной директорией для конфигурационных файлов
pub struct TestContext {
    pub temp_dir: TempDir,
}

impl TestContext {
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
        })
    }

    /// Путь к файлу внутри временной директории
    pub fn path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    /// Записывает TOML файл и загружает из него конфигурацию
    pub fn load_config(&self, content: &str) -> Result<ParsingConfig> {
        let path = self.path("sqlproxy.toml");
        std::fs::write(&path, content)?;
        ParsingConfig::from_file(&path)
    }
}
