//! Классы символов для лексического анализатора

/// Символ-маркер конца ввода
pub const EOI: char = '\u{1A}';

/// Проверяет, является ли символ пробельным
pub fn is_whitespace(ch: char) -> bool {
    (ch <= '\u{20}' && ch != EOI) || ('\u{7F}'..='\u{A0}').contains(&ch)
}

/// Проверяет, достигнут ли конец ввода
pub fn is_end_of_input(ch: char) -> bool {
    ch == EOI
}

/// Проверяет, является ли символ латинской буквой
pub fn is_alphabet(ch: char) -> bool {
    ch.is_ascii_alphabetic()
}

/// Проверяет, является ли символ десятичной цифрой
pub fn is_digital(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// Проверяет, входит ли символ в класс символов-операторов
pub fn is_symbol(ch: char) -> bool {
    matches!(
        ch,
        '(' | ')'
            | '['
            | ']'
            | '{'
            | '}'
            | '+'
            | '-'
            | '*'
            | '/'
            | '%'
            | '^'
            | '='
            | '>'
            | '<'
            | '~'
            | '!'
            | '?'
            | '&'
            | '|'
            | '.'
            | ':'
            | '#'
            | ','
            | ';'
    )
}
