// src/lexer.rs

use std::fmt;

use crate::error::{ParseError, ParseErrorKind};

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    Number(f64),
    Identifier(String),
    Operator(char),
    LParen,
    RParen,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number(n) => write!(f, "{}", n),
            TokenKind::Identifier(name) => write!(f, "{}", name),
            TokenKind::Operator(op) => write!(f, "{}", op),
            TokenKind::LParen => write!(f, "("),
            TokenKind::RParen => write!(f, ")"),
        }
    }
}

/// A token and the character offset it started at.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub pos: usize,
}

pub const OPERATORS: &[char] = &['+', '-', '*', '/', '%', '^'];

// --- The Lexer ---
pub struct Lexer {
    input: Vec<char>,
    pos: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer { input: input.chars().collect(), pos: 0 }
    }

    fn current_char(&self) -> Option<char> { self.input.get(self.pos).copied() }

    fn advance(&mut self) {
        if self.pos < self.input.len() {
            self.pos += 1;
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.current_char() {
            if c.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError { kind, position: self.pos }
    }

    pub fn tokenize(&mut self) -> Result<Vec<Token>, ParseError> {
        let mut tokens = Vec::new();
        loop {
            self.skip_whitespace();
            let start = self.pos;
            let kind = match self.current_char() {
                None => break,
                Some(c) if c.is_ascii_digit() || c == '.' => self.lex_number()?,
                Some(c) if c.is_ascii_alphabetic() || c == '_' => self.lex_identifier(),
                Some('(') => {
                    self.advance();
                    TokenKind::LParen
                }
                Some(')') => {
                    self.advance();
                    TokenKind::RParen
                }
                Some(c) if OPERATORS.contains(&c) => {
                    self.advance();
                    TokenKind::Operator(c)
                }
                Some(c) => return Err(self.error(ParseErrorKind::UnexpectedChar(c))),
            };
            tokens.push(Token { kind, pos: start });
        }
        Ok(tokens)
    }

    fn lex_number(&mut self) -> Result<TokenKind, ParseError> {
        let start = self.pos;
        let mut s = String::new();

        // A second decimal point is rejected by the f64 parse below.
        while let Some(c) = self.current_char() {
            if c.is_ascii_digit() || c == '.' {
                s.push(c);
                self.advance();
            } else {
                break;
            }
        }

        s.parse::<f64>()
            .map(TokenKind::Number)
            .map_err(|_| ParseError { kind: ParseErrorKind::InvalidNumber(s), position: start })
    }

    fn lex_identifier(&mut self) -> TokenKind {
        let mut name = String::new();
        while let Some(c) = self.current_char() {
            if c.is_ascii_alphanumeric() || c == '_' {
                name.push(c);
                self.advance();
            } else {
                break;
            }
        }
        TokenKind::Identifier(name)
    }
}

// Convenience function for tokenizing
pub fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    Lexer::new(input).tokenize()
}
