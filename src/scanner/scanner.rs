use std::rc::Rc;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_ERROR,
};

use super::tokens::{is_identifier_char, is_reserved, IDENTIFIER, NUMBER, TRIVIA};

/// A number lexeme: its digits as written, and whether it has a fraction.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberLexeme {
    pub digits: String,
    pub is_float: bool,
}

#[derive(Debug, Clone)]
pub struct Scanner {
    source: String,
    /// Byte offset of the next character.
    cursor: usize,
    line: u32,
    column: u32,
    file: Rc<String>,
}

impl Scanner {
    pub fn new(source: &str, file: &str) -> Scanner {
        let mut scanner = Scanner {
            source: source.replace('\r', ""),
            cursor: 0,
            line: 1,
            column: 1,
            file: Rc::new(String::from(file)),
        };
        scanner.skip_trivia();
        scanner
    }

    pub fn position(&self) -> Position {
        Position::new(Rc::clone(&self.file), self.line, self.column)
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.cursor..]
    }

    pub fn at_eof(&self) -> bool {
        self.cursor >= self.source.len()
    }

    pub fn peek(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    /// Consumes one character without skipping what follows it.
    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.cursor += c.len_utf8();

        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(c)
    }

    fn skip_trivia(&mut self) {
        let length = match TRIVIA.find(self.remainder()) {
            Some(matched) => matched.as_str().chars().count(),
            None => 0,
        };

        for _ in 0..length {
            self.bump();
        }
    }

    /// Consumes `n` characters, then any whitespace and comments after them.
    pub fn advance(&mut self, n: usize) {
        for _ in 0..n {
            if self.bump().is_none() {
                break;
            }
        }
        self.skip_trivia();
    }

    pub fn accept(&mut self, literal: &str) -> bool {
        if self.remainder().starts_with(literal) {
            self.advance(literal.chars().count());
            true
        } else {
            false
        }
    }

    /// Like `accept`, but `word` must not run on into an identifier.
    pub fn accept_keyword(&mut self, word: &str) -> bool {
        let remainder = self.remainder();
        if !remainder.starts_with(word) {
            return false;
        }

        match remainder[word.len()..].chars().next() {
            Some(c) if is_identifier_char(c) => false,
            _ => {
                self.advance(word.chars().count());
                true
            }
        }
    }

    pub fn expect(&mut self, literal: &str) -> Result<(), Error> {
        if self.accept(literal) {
            return Ok(());
        }

        MK_ERROR!(
            ErrorImpl::UnexpectedToken {
                expected: format!("`{}`", literal),
                found: self.describe_next(),
            },
            self.position()
        );
    }

    /// The upcoming character as shown in diagnostics.
    pub fn describe_next(&self) -> String {
        match self.peek() {
            Some(c) => format!("`{}`", c),
            None => String::from("end of input"),
        }
    }

    /// The identifier-shaped word at the cursor, reserved or not.
    pub fn peek_word(&self) -> Option<&str> {
        IDENTIFIER.find(self.remainder()).map(|matched| matched.as_str())
    }

    /// Scans an identifier. Reserved words are left unconsumed.
    pub fn identifier(&mut self) -> Option<String> {
        let word = self.peek_word()?.to_string();
        if is_reserved(&word) {
            return None;
        }

        self.advance(word.chars().count());
        Some(word)
    }

    /// Scans `digits ('.' digits)?`. A dot with no digits after it is an error.
    pub fn number(&mut self) -> Result<Option<NumberLexeme>, Error> {
        let digits = match NUMBER.find(self.remainder()) {
            Some(matched) => matched.as_str().to_string(),
            None => return Ok(None),
        };

        if digits.ends_with('.') {
            MK_ERROR!(
                ErrorImpl::MalformedNumber { token: digits },
                self.position()
            );
        }

        self.advance(digits.len());
        let is_float = digits.contains('.');

        Ok(Some(NumberLexeme { digits, is_float }))
    }

    /// Scans a double-quoted string and returns its characters without the
    /// quotes. Inner whitespace is kept verbatim.
    pub fn string_literal(&mut self) -> Result<Option<String>, Error> {
        if self.peek() != Some('"') {
            return Ok(None);
        }

        let start = self.position();
        self.bump();

        let mut characters = String::new();
        loop {
            match self.bump() {
                None => MK_ERROR!(ErrorImpl::UnterminatedString, start),
                Some('"') => break,
                Some('\\') => match self.bump() {
                    None => MK_ERROR!(ErrorImpl::UnterminatedString, start),
                    Some('n') => characters.push('\n'),
                    Some('t') => characters.push('\t'),
                    Some('\\') => characters.push('\\'),
                    Some('"') => characters.push('"'),
                    Some(other) => {
                        // Unknown escapes keep their backslash
                        characters.push('\\');
                        characters.push(other);
                    }
                },
                Some(c) => characters.push(c),
            }
        }

        self.skip_trivia();
        Ok(Some(characters))
    }
}
