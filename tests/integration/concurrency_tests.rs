//! Тесты параллельного разбора с общим словарем

use super::common::{tokenize, PORTABLE_STATEMENTS};
use rayon::prelude::*;
use sqlproxy_lexer::parser::{Dialect, Dictionary, Token};
use sqlproxy_lexer::Result;
use std::sync::Arc;
use std::thread;

#[test]
fn test_parallel_lexers_share_dictionary() -> Result<()> {
    let dictionary = Dictionary::for_dialect(Dialect::MySql);

    let sequential: Vec<Vec<Token>> = PORTABLE_STATEMENTS
        .iter()
        .map(|sql| tokenize(sql, &dictionary, Dialect::MySql))
        .collect::<Result<_>>()?;

    let parallel: Vec<Vec<Token>> = PORTABLE_STATEMENTS
        .par_iter()
        .map(|sql| tokenize(sql, &dictionary, Dialect::MySql))
        .collect::<Result<_>>()?;

    assert_eq!(sequential, parallel);
    Ok(())
}

#[test]
fn test_dictionary_shared_through_arc() {
    let dictionary = Arc::new(Dictionary::for_dialect(Dialect::PostgreSql));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let dictionary = Arc::clone(&dictionary);
            thread::spawn(move || {
                let sql = format!("SELECT c{} FROM t WHERE id = {}", i, i);
                tokenize(&sql, &dictionary, Dialect::PostgreSql).map(|tokens| tokens.len())
            })
        })
        .collect();

    for handle in handles {
        let count = handle
            .join()
            .expect("поток разбора завершился паникой")
            .expect("выражение должно разбираться");
        assert_eq!(count, 9);
    }
}
