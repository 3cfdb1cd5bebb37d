//! Statement tokenizer

use std::fmt;

/// One lexical unit of a statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `(`
    ParenOpen,
    /// `)`
    ParenClose,
    /// `and`
    And,
    /// `or`
    Or,
    /// `not`
    Not,
    /// Opaque condition text, interpreted by the predicate
    Condition(String),
}

impl Token {
    fn from_word(word: &str) -> Self {
        match word {
            "and" => Token::And,
            "or" => Token::Or,
            "not" => Token::Not,
            _ => Token::Condition(word.to_string()),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::ParenOpen => write!(f, "("),
            Token::ParenClose => write!(f, ")"),
            Token::And => write!(f, "and"),
            Token::Or => write!(f, "or"),
            Token::Not => write!(f, "not"),
            Token::Condition(text) => write!(f, "{}", text),
        }
    }
}

/// Split a statement into tokens.
///
/// ASCII whitespace separates words and parentheses always stand alone, so
/// `(a<b` yields `ParenOpen` then `Condition("a<b")`. Keywords match exactly
/// and case-sensitively. Never fails: empty input gives an empty vector.
pub fn tokenize(statement: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    for c in statement.chars() {
        match c {
            '(' | ')' => {
                if !current.is_empty() {
                    tokens.push(Token::from_word(&current));
                    current.clear();
                }
                tokens.push(if c == '(' {
                    Token::ParenOpen
                } else {
                    Token::ParenClose
                });
            }
            c if c.is_ascii_whitespace() => {
                if !current.is_empty() {
                    tokens.push(Token::from_word(&current));
                    current.clear();
                }
            }
            _ => current.push(c),
        }
    }

    if !current.is_empty() {
        tokens.push(Token::from_word(&current));
    }

    tokens
}
