//! Общие типы для sqlproxy-lexer

pub mod config;
pub mod error;

pub use config::*;
pub use error::{Error, Result};
