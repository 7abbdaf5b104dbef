//! Интеграционные тесты для sqlproxy-lexer
//!
//! Проверяют совместную работу словаря, лексера, парсера и конфигурации
//! через публичный API библиотеки.

pub mod common;
pub mod concurrency_tests;
pub mod config_tests;
pub mod statement_tests;
