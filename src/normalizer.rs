// src/normalizer.rs

use crate::registry::Registry;

fn is_word_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'
}

/// Rewrites raw input into the canonical form the lexer expects. Never fails;
/// anything malformed is left for the parser to reject.
///
/// The passes run in a fixed order, each relying on the previous one:
/// lower-case and trim, substitute constants, unify the power operator,
/// then insert implicit multiplication.
pub fn normalize(input: &str, registry: &Registry) -> String {
    let lowered = input.trim().to_lowercase();
    let substituted = substitute_constants(&lowered, registry);
    let powered = substituted.replace("**", "^");
    insert_implicit_multiplication(&powered)
}

/// Replaces every whole word that names a constant with its decimal value.
/// A word is a maximal run of `[a-z0-9_]`, so `2pi` and `pi_r` are left alone.
pub fn substitute_constants(input: &str, registry: &Registry) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len());
    let mut pos = 0;

    while pos < chars.len() {
        if !is_word_char(chars[pos]) {
            out.push(chars[pos]);
            pos += 1;
            continue;
        }

        let start = pos;
        while pos < chars.len() && is_word_char(chars[pos]) {
            pos += 1;
        }
        let word: String = chars[start..pos].iter().collect();
        match registry.constant(&word) {
            Some(value) => out.push_str(&value.to_string()),
            None => out.push_str(&word),
        }
    }
    out
}

/// Inserts `*` for calculator shorthand: `2pi`, `)(`, `2(` and `)2`.
/// Digits that belong to an identifier (`log10(`) never trigger an insertion.
pub fn insert_implicit_multiplication(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 8);
    let mut prev: Option<char> = None;
    // Whether the word currently being scanned started with a letter.
    let mut in_identifier = false;

    for c in input.chars() {
        let number_digit = matches!(prev, Some(p) if p.is_ascii_digit()) && !in_identifier;
        let insert = match prev {
            Some(_) if number_digit && c.is_ascii_lowercase() => true,
            Some(_) if number_digit && c == '(' => true,
            Some(')') => c == '(' || c.is_ascii_digit(),
            _ => false,
        };
        if insert {
            out.push('*');
        }

        let continues_word = !insert && matches!(prev, Some(p) if is_word_char(p));
        if c.is_ascii_lowercase() || c == '_' {
            in_identifier = in_identifier || !continues_word;
        } else if c.is_ascii_digit() {
            in_identifier = in_identifier && continues_word;
        } else {
            in_identifier = false;
        }

        out.push(c);
        prev = Some(c);
    }
    out
}
