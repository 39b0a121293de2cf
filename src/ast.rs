// src/ast.rs

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
}

impl BinaryOp {
    pub fn from_char(c: char) -> Option<BinaryOp> {
        match c {
            '+' => Some(BinaryOp::Add),
            '-' => Some(BinaryOp::Sub),
            '*' => Some(BinaryOp::Mul),
            '/' => Some(BinaryOp::Div),
            '%' => Some(BinaryOp::Mod),
            '^' => Some(BinaryOp::Pow),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Sub => '-',
            BinaryOp::Mul => '*',
            BinaryOp::Div => '/',
            BinaryOp::Mod => '%',
            BinaryOp::Pow => '^',
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// AST Definition
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(f64),
    Binary(BinaryOp, Box<Expr>, Box<Expr>),
    Negate(Box<Expr>),
    Call(String, Box<Expr>),
}

impl Expr {
    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Expr {
        Expr::Binary(op, Box::new(left), Box::new(right))
    }

    pub fn negate(inner: Expr) -> Expr {
        Expr::Negate(Box::new(inner))
    }

    pub fn call(name: &str, arg: Expr) -> Expr {
        Expr::Call(name.to_string(), Box::new(arg))
    }

    // Moves the children out, leaving leaves behind in their boxes.
    fn detach_children(&mut self, out: &mut Vec<Expr>) {
        fn take(slot: &mut Expr) -> Expr {
            std::mem::replace(slot, Expr::Literal(0.0))
        }
        match self {
            Expr::Literal(_) => {}
            Expr::Binary(_, left, right) => {
                out.push(take(left));
                out.push(take(right));
            }
            Expr::Negate(inner) | Expr::Call(_, inner) => out.push(take(inner)),
        }
    }
}

// A chain like `1+1+...+1` is as deep as it is long, so the tree is torn
// down from a heap stack rather than by recursive drops.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut node) = pending.pop() {
            node.detach_children(&mut pending);
        }
    }
}

enum Piece<'a> {
    Node(&'a Expr),
    Op(BinaryOp),
    Text(&'a str),
}

// Fully parenthesized, so the printed form shows how the input was grouped.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pieces = vec![Piece::Node(self)];
        while let Some(piece) = pieces.pop() {
            match piece {
                Piece::Node(Expr::Literal(n)) => write!(f, "{}", n)?,
                Piece::Node(Expr::Binary(op, left, right)) => {
                    pieces.extend([
                        Piece::Text(")"),
                        Piece::Node(right),
                        Piece::Op(*op),
                        Piece::Node(left),
                        Piece::Text("("),
                    ]);
                }
                Piece::Node(Expr::Negate(inner)) => {
                    pieces.extend([Piece::Text(")"), Piece::Node(inner), Piece::Text("(-")]);
                }
                Piece::Node(Expr::Call(name, arg)) => {
                    pieces.extend([
                        Piece::Text(")"),
                        Piece::Node(arg),
                        Piece::Text("("),
                        Piece::Text(name),
                    ]);
                }
                Piece::Op(op) => write!(f, " {} ", op)?,
                Piece::Text(text) => f.write_str(text)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(n: f64) -> Expr {
        Expr::Literal(n)
    }

    fn long_sum(terms: usize) -> Expr {
        (1..terms).fold(lit(1.0), |acc, _| Expr::binary(BinaryOp::Add, acc, lit(1.0)))
    }

    #[test]
    fn test_display() {
        let expr = Expr::negate(Expr::binary(
            BinaryOp::Pow,
            lit(2.0),
            Expr::call("sqrt", Expr::binary(BinaryOp::Sub, lit(9.0), lit(5.0))),
        ));
        assert_eq!(expr.to_string(), "(-(2 ^ sqrt((9 - 5))))");
        assert_eq!(lit(1.5).to_string(), "1.5");
    }

    #[test]
    fn test_long_chain_display_and_drop() {
        let expr = long_sum(200_000);
        let printed = expr.to_string();
        assert!(printed.starts_with("((((1 + 1) + 1)"));
        assert!(printed.ends_with(" + 1)"));
        drop(expr);
    }
}
