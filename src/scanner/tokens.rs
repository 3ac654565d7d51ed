use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

use crate::ast::types::DataType;

pub const LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";

pub fn is_letter(c: char) -> bool {
    LETTERS.contains(c)
}

pub fn is_digit(c: char) -> bool {
    DIGITS.contains(c)
}

pub fn is_identifier_char(c: char) -> bool {
    is_letter(c) || is_digit(c) || c == '_'
}

/// Type names in the order they are tried.
pub const TYPE_NAMES: [&str; 5] = ["int", "float", "string", "bool", "callable"];

lazy_static! {
    pub static ref NUMBER: Regex = Regex::new("^[0-9]+(\\.[0-9]*)?").unwrap();
    pub static ref IDENTIFIER: Regex = Regex::new("^[a-zA-Z][a-zA-Z0-9_]*").unwrap();
    pub static ref TRIVIA: Regex = Regex::new("^(?:\\s+|//[^\\n]*)+").unwrap();

    pub static ref TYPE_LOOKUP: HashMap<&'static str, DataType> = {
        let mut map = HashMap::new();
        map.insert("int", DataType::Integer);
        map.insert("float", DataType::Float);
        map.insert("string", DataType::String);
        map.insert("bool", DataType::Boolean);
        map.insert("callable", DataType::Callable);
        map
    };

    pub static ref RESERVED_LOOKUP: Vec<&'static str> = {
        let mut words = vec!["if", "else", "while", "print", "set"];
        words.extend(TYPE_NAMES.iter());
        words
    };
}

pub fn is_reserved(word: &str) -> bool {
    RESERVED_LOOKUP.contains(&word)
}
