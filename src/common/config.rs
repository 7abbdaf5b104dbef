//! Конфигурация для sqlproxy-lexer
//!
//! Предоставляет структуры конфигурации лексера и логирования

use crate::common::error::{Error, Result};
use crate::parser::dialect::Dialect;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Допустимые уровни логирования
const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

const DIALECT_VAR: &str = "SQLPROXY_DIALECT";

const LOG_LEVEL_VAR: &str = "SQLPROXY_LOG_LEVEL";

/// Основная конфигурация разбора
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsingConfig {
    /// Диалект SQL
    pub dialect: Dialect,
    /// Настройки логирования
    pub logging: LoggingConfig,
}

/// Конфигурация логирования
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Уровень логирования
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl ParsingConfig {
    /// Загружает конфигурацию из TOML файла
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ParsingConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Сохраняет конфигурацию в TOML файл
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::configuration(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Загружает конфигурацию из переменных окружения поверх значений по умолчанию
    pub fn from_env() -> Result<Self> {
        Ok(Self::default().merge(PartialConfig::from_env()?))
    }

    /// Применяет слой настроек: заданные в нем значения заменяют текущие
    pub fn merge(mut self, other: impl Into<PartialConfig>) -> Self {
        let other = other.into();
        if let Some(dialect) = other.dialect {
            self.dialect = dialect;
        }
        if let Some(level) = other.logging.level {
            self.logging.level = level;
        }
        self
    }

    /// Валидирует конфигурацию
    pub fn validate(&self) -> Result<()> {
        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(Error::configuration(format!(
                "Unknown log level '{}', expected one of {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }
        Ok(())
    }
}

/// Слой настроек (файл, окружение, аргументы), в котором любое значение может отсутствовать
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct PartialConfig {
    pub dialect: Option<Dialect>,
    pub logging: PartialLoggingConfig,
}

/// Слой настроек логирования
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct PartialLoggingConfig {
    pub level: Option<String>,
}

impl PartialConfig {
    /// Читает из TOML файла только явно указанные значения
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: PartialConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Читает `SQLPROXY_DIALECT` и `SQLPROXY_LOG_LEVEL` из окружения процесса
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Читает переменные через переданную функцию поиска
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            dialect: lookup(DIALECT_VAR)
                .map(|value| value.parse::<Dialect>())
                .transpose()?,
            logging: PartialLoggingConfig {
                level: lookup(LOG_LEVEL_VAR),
            },
        })
    }
}

impl From<ParsingConfig> for PartialConfig {
    fn from(config: ParsingConfig) -> Self {
        Self {
            dialect: Some(config.dialect),
            logging: PartialLoggingConfig {
                level: Some(config.logging.level),
            },
        }
    }
}
