//! Тесты загрузки конфигурации из файлов

use super::common::TestContext;
use sqlproxy_lexer::common::{LoggingConfig, ParsingConfig, PartialConfig};
use sqlproxy_lexer::parser::{Dialect, Dictionary, Keyword, Lexer, TokenKind};
use sqlproxy_lexer::{Error, Result};

#[test]
fn test_load_full_config() -> Result<()> {
    let context = TestContext::new()?;
    let config = context.load_config(
        r#"
dialect = "oracle"

[logging]
level = "debug"
"#,
    )?;

    assert_eq!(config.dialect, Dialect::Oracle);
    assert_eq!(config.logging.level, "debug");
    config.validate()?;
    Ok(())
}

#[test]
fn test_missing_sections_use_defaults() -> Result<()> {
    let context = TestContext::new()?;
    let config = context.load_config("dialect = \"sqlserver\"\n")?;

    assert_eq!(config.dialect, Dialect::SqlServer);
    assert_eq!(config.logging, LoggingConfig::default());

    let config = context.load_config("")?;
    assert_eq!(config, ParsingConfig::default());
    Ok(())
}

#[test]
fn test_unknown_dialect_in_file_is_rejected() -> Result<()> {
    let context = TestContext::new()?;
    let result = context.load_config("dialect = \"db2\"\n");
    assert!(matches!(result, Err(Error::TomlDe(_))));
    Ok(())
}

#[test]
fn test_missing_file_is_io_error() -> Result<()> {
    let context = TestContext::new()?;
    let result = ParsingConfig::from_file(context.path("absent.toml"));
    assert!(matches!(result, Err(Error::Io(_))));
    Ok(())
}

#[test]
fn test_config_file_roundtrip() -> Result<()> {
    let context = TestContext::new()?;
    let path = context.path("saved.toml");

    let mut config = ParsingConfig::default();
    config.dialect = Dialect::PostgreSql;
    config.logging.level = "warn".to_string();
    config.to_file(&path)?;

    assert_eq!(ParsingConfig::from_file(&path)?, config);
    Ok(())
}

#[test]
fn test_configured_dialect_drives_lexer() -> Result<()> {
    let context = TestContext::new()?;
    let config = context.load_config("dialect = \"sqlserver\"\n")?;
    let dictionary = Dictionary::for_dialect(config.dialect);

    let tokens = Lexer::new("SELECT TOP 1 @id", &dictionary, config.dialect)?.tokenize()?;
    assert_eq!(tokens[1].kind, TokenKind::Keyword(Keyword::Top));
    assert_eq!(tokens[3].text, "@id");
    Ok(())
}

#[test]
fn test_later_layers_override_file_with_default_values() -> Result<()> {
    let context = TestContext::new()?;
    let path = context.path("layered.toml");
    std::fs::write(&path, "dialect = \"oracle\"\n\n[logging]\nlevel = \"debug\"\n")?;

    let config = ParsingConfig::default().merge(PartialConfig::from_file(&path)?);
    assert_eq!(config.dialect, Dialect::Oracle);

    let env = PartialConfig::from_vars(|key| match key {
        "SQLPROXY_DIALECT" => Some("mysql".to_string()),
        "SQLPROXY_LOG_LEVEL" => Some("info".to_string()),
        _ => None,
    })?;
    let config = config.merge(env);
    assert_eq!(config.dialect, Dialect::MySql);
    assert_eq!(config.logging.level, "info");
    Ok(())
}

#[test]
fn test_partial_file_keeps_unset_values() -> Result<()> {
    let context = TestContext::new()?;
    let path = context.path("level_only.toml");
    std::fs::write(&path, "[logging]\nlevel = \"trace\"\n")?;

    let mut config = ParsingConfig::default();
    config.dialect = Dialect::SqlServer;
    let config = config.merge(PartialConfig::from_file(&path)?);

    assert_eq!(config.dialect, Dialect::SqlServer);
    assert_eq!(config.logging.level, "trace");
    Ok(())
}
