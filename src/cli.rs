//! CLI интерфейс для sqlproxy-lexer
//!
//! Предоставляет командную строку для разбора SQL на токены и проверки
//! диалектных настроек

use crate::common::{Error, ParsingConfig, PartialConfig, PartialLoggingConfig};
use crate::parser::{BaseParser, Dialect, Dictionary, Lexer, SqlParser, TokenKind};
use anyhow::Context;
use clap::{Parser, Subcommand};
use rayon::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// sqlproxy-lexer - лексический анализ SQL для прокси базы данных
#[derive(Parser)]
#[command(name = "sqlproxy-lexer")]
#[command(about = "SQL lexer and token-stream tooling for a database proxy")]
#[command(version)]
pub struct Cli {
    /// Конфигурационный файл
    #[arg(short, long, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Диалект SQL (mysql, oracle, postgresql, sqlserver)
    #[arg(short, long, value_name = "DIALECT")]
    pub dialect: Option<String>,

    /// Уровень детализации логирования
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Разобрать SQL выражение на токены
    Tokenize {
        /// SQL выражение
        sql: String,

        /// Смещение, с которого начинается разбор
        #[arg(long, default_value_t = 0)]
        offset: usize,

        /// Вывести токены в формате JSON
        #[arg(long)]
        json: bool,
    },

    /// Разобрать файл, по одному выражению в строке
    Batch {
        /// Путь к файлу с выражениями
        file: PathBuf,
    },

    /// Показать содержимое первых круглых скобок выражения
    Parens {
        /// SQL выражение
        sql: String,
    },

    /// Показать информацию о словаре и диалекте
    Info,
}

/// Строка вывода токена
#[derive(Serialize)]
struct TokenRow<'a> {
    kind: String,
    text: &'a str,
    end_offset: usize,
}

/// Собирает конфигурацию: значения по умолчанию, файл, окружение, аргументы
pub fn load_config(cli: &Cli) -> crate::common::Result<ParsingConfig> {
    let mut config = ParsingConfig::default();

    if let Some(path) = &cli.config {
        config = config.merge(PartialConfig::from_file(path)?);
    }

    config = config.merge(PartialConfig::from_env()?);
    config = config.merge(cli_overrides(cli)?);

    config.validate()?;
    Ok(config)
}

/// Значения, явно переданные флагами командной строки
fn cli_overrides(cli: &Cli) -> crate::common::Result<PartialConfig> {
    Ok(PartialConfig {
        dialect: cli
            .dialect
            .as_deref()
            .map(str::parse::<Dialect>)
            .transpose()?,
        logging: PartialLoggingConfig {
            level: cli.log_level.clone(),
        },
    })
}

/// Инициализирует логирование: `RUST_LOG` имеет приоритет над конфигурацией
pub fn init_logging(config: &ParsingConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.to_ascii_lowercase()));

    tracing_log::LogTracer::init().context("failed to bridge log records")?;

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to install tracing subscriber")?;

    Ok(())
}

/// Выполняет команду CLI
pub fn run(cli: Cli, config: &ParsingConfig) -> anyhow::Result<()> {
    let dialect = config.dialect;
    let dictionary = Dictionary::for_dialect(dialect);
    let _span = tracing::info_span!("command", dialect = %dialect).entered();

    match cli.command {
        Commands::Tokenize { sql, offset, json } => {
            tokenize(&sql, offset, json, &dictionary, dialect)?;
        }
        Commands::Batch { file } => {
            batch(&file, &dictionary, dialect)?;
        }
        Commands::Parens { sql } => {
            let mut parser = SqlParser::new(&sql, &dictionary, dialect)?;
            parser.skip_until(&[TokenKind::LEFT_PAREN])?;
            if parser.current_token().is_end() {
                println!("No parentheses found");
            } else {
                println!("{}", parser.skip_parentheses()?);
            }
        }
        Commands::Info => {
            println!("sqlproxy-lexer v{}", crate::VERSION);
            println!("Dialect: {}", dialect);
            println!("Keywords: {}", dictionary.keyword_count());
            println!("Symbols: {}", dictionary.symbol_count());
        }
    }

    Ok(())
}

fn tokenize(
    sql: &str,
    offset: usize,
    json: bool,
    dictionary: &Dictionary,
    dialect: Dialect,
) -> anyhow::Result<()> {
    let tokens = Lexer::with_offset(sql, dictionary, dialect, offset)?.tokenize()?;
    tracing::debug!(count = tokens.len(), "tokenized statement");

    if json {
        let rows: Vec<TokenRow> = tokens
            .iter()
            .map(|token| TokenRow {
                kind: token.kind.to_string(),
                text: token.text,
                end_offset: token.end_offset,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        for token in &tokens {
            println!("{}\t{}\t{}", token.kind, token.text, token.end_offset);
        }
    }

    Ok(())
}

fn batch(file: &Path, dictionary: &Dictionary, dialect: Dialect) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;

    let statements: Vec<(usize, &str)> = content
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .collect();

    let results: Vec<(usize, Result<usize, Error>)> = statements
        .into_par_iter()
        .map(|(line_number, sql)| {
            let count = Lexer::new(sql, dictionary, dialect)
                .and_then(|lexer| lexer.tokenize())
                .map(|tokens| tokens.len());
            (line_number, count)
        })
        .collect();

    let mut failures = 0;
    for (line_number, result) in results {
        match result {
            Ok(count) => println!("{}: {} tokens", line_number, count),
            Err(e) => {
                failures += 1;
                println!("{}: error: {}", line_number, e);
            }
        }
    }
    tracing::info!(failures, "batch finished");

    if failures > 0 {
        anyhow::bail!("{} statement(s) failed to tokenize", failures);
    }
    Ok(())
}
