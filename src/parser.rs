// src/parser.rs

use crate::ast::{BinaryOp, Expr};
use crate::error::{ParseError, ParseErrorKind};
use crate::lexer::{tokenize, Token, TokenKind};
use crate::registry::Registry;

pub const DEFAULT_MAX_DEPTH: usize = 256;

// --- The Parser ---
//
// expr    := term (('+' | '-') term)*
// term    := unary (('*' | '/' | '%') unary)*
// unary   := ('-' | '+') unary | power
// power   := primary ('^' unary)?
// primary := NUMBER | CONSTANT | FUNCTION '(' expr ')' | '(' expr ')'
//
// `^` takes a unary right operand, which makes it right-associative and lets
// `2^-1` through, while `-2^2` still groups as `-(2^2)`.
pub struct Parser<'a> {
    tokens: Vec<Token>,
    pos: usize,
    end: usize,
    registry: &'a Registry,
    depth: usize,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    /// `end` is the length of the source text, used to place end-of-input errors.
    pub fn new(tokens: Vec<Token>, end: usize, registry: &'a Registry) -> Self {
        Parser { tokens, pos: 0, end, registry, depth: 0, max_depth: DEFAULT_MAX_DEPTH }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    fn current(&self) -> Option<&TokenKind> { self.tokens.get(self.pos).map(|t| &t.kind) }

    fn current_pos(&self) -> usize { self.tokens.get(self.pos).map_or(self.end, |t| t.pos) }

    fn advance(&mut self) {
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
    }

    fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError { kind, position: self.current_pos() }
    }

    fn unexpected(&self) -> ParseError {
        match self.current() {
            Some(kind) => self.error(ParseErrorKind::UnexpectedToken(kind.to_string())),
            None => self.error(ParseErrorKind::UnexpectedEnd),
        }
    }

    fn current_operator(&self, accepted: &[BinaryOp]) -> Option<BinaryOp> {
        match self.current() {
            Some(TokenKind::Operator(c)) => {
                BinaryOp::from_char(*c).filter(|op| accepted.contains(op))
            }
            _ => None,
        }
    }

    pub fn parse(&mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_expr()?;
        match self.current() {
            None => Ok(expr),
            Some(kind) => Err(self.error(ParseErrorKind::TrailingInput(kind.to_string()))),
        }
    }

    fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_term()?;
        while let Some(op) = self.current_operator(&[BinaryOp::Add, BinaryOp::Sub]) {
            self.advance();
            let right = self.parse_term()?;
            left = Expr::binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_term(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_unary()?;
        while let Some(op) = self.current_operator(&[BinaryOp::Mul, BinaryOp::Div, BinaryOp::Mod]) {
            self.advance();
            let right = self.parse_unary()?;
            left = Expr::binary(op, left, right);
        }
        Ok(left)
    }

    // Every level of nesting passes through here, so this is where depth is bounded.
    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        if self.depth >= self.max_depth {
            return Err(self.error(ParseErrorKind::TooDeep(self.max_depth)));
        }
        self.depth += 1;
        let result = match self.current_operator(&[BinaryOp::Sub, BinaryOp::Add]) {
            Some(BinaryOp::Sub) => {
                self.advance();
                self.parse_unary().map(Expr::negate)
            }
            Some(_) => {
                self.advance();
                self.parse_unary()
            }
            None => self.parse_power(),
        };
        self.depth -= 1;
        result
    }

    fn parse_power(&mut self) -> Result<Expr, ParseError> {
        let base = self.parse_primary()?;
        if self.current_operator(&[BinaryOp::Pow]).is_some() {
            self.advance();
            let exponent = self.parse_unary()?;
            return Ok(Expr::binary(BinaryOp::Pow, base, exponent));
        }
        Ok(base)
    }

    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        match self.current().cloned() {
            Some(TokenKind::Number(n)) => {
                self.advance();
                Ok(Expr::Literal(n))
            }
            Some(TokenKind::Identifier(name)) => self.parse_identifier(name),
            Some(TokenKind::LParen) => self.parse_group(),
            _ => Err(self.unexpected()),
        }
    }

    fn parse_identifier(&mut self, name: String) -> Result<Expr, ParseError> {
        let start = self.current_pos();
        self.advance();

        if self.current() == Some(&TokenKind::LParen) {
            if !self.registry.is_function(&name) {
                return Err(ParseError {
                    kind: ParseErrorKind::UnknownFunction(name),
                    position: start,
                });
            }
            return self.parse_call(name);
        }

        match self.registry.constant(&name) {
            Some(value) => Ok(Expr::Literal(value)),
            None => Err(ParseError {
                kind: ParseErrorKind::UnknownIdentifier(name),
                position: start,
            }),
        }
    }

    fn parse_call(&mut self, name: String) -> Result<Expr, ParseError> {
        self.advance(); // consume '('
        if matches!(self.current(), None | Some(TokenKind::RParen)) {
            return Err(self.error(ParseErrorKind::MissingArgument(name)));
        }
        let arg = self.parse_expr()?;
        self.expect_close()?;
        Ok(Expr::Call(name, Box::new(arg)))
    }

    fn parse_group(&mut self) -> Result<Expr, ParseError> {
        self.advance(); // consume '('
        if self.current() == Some(&TokenKind::RParen) {
            return Err(self.error(ParseErrorKind::EmptyGroup));
        }
        let inner = self.parse_expr()?;
        self.expect_close()?;
        Ok(inner)
    }

    fn expect_close(&mut self) -> Result<(), ParseError> {
        if self.current() == Some(&TokenKind::RParen) {
            self.advance();
            Ok(())
        } else {
            Err(self.error(ParseErrorKind::MissingCloseParen))
        }
    }
}

// Convenience function for parsing
pub fn parse(input: &str, registry: &Registry) -> Result<Expr, ParseError> {
    parse_with_depth(input, registry, DEFAULT_MAX_DEPTH)
}

pub fn parse_with_depth(
    input: &str,
    registry: &Registry,
    max_depth: usize,
) -> Result<Expr, ParseError> {
    let tokens = tokenize(input)?;
    log::trace!("tokens: {:?}", tokens);
    Parser::new(tokens, input.chars().count(), registry)
        .with_max_depth(max_depth)
        .parse()
}
