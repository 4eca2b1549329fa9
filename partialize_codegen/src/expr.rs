use std::fmt;
use std::str::FromStr;

use proc_macro2::{TokenStream, TokenTree};
use serde::{Deserialize, Serialize};

/// Source text of an expression or a body, carried verbatim into the output.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Expr(String);

impl Expr {
    pub fn new(source: impl Into<String>) -> Self {
        Self(source.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Simple names appearing in this expression, in order of first appearance.
    ///
    /// Names inside interpolation holes of `$"..."` strings count; names inside
    /// ordinary string and character literals don't.
    pub fn referenced_names(&self) -> Vec<String> {
        let mut names = Vec::new();
        match TokenStream::from_str(&self.0) {
            Ok(tokens) => collect_token_names(tokens, &mut names),
            Err(_) => scan_names(&self.0, &mut names),
        }
        names
    }
}

fn push_name(names: &mut Vec<String>, name: &str) {
    if !names.iter().any(|known| known == name) {
        names.push(name.to_owned());
    }
}

fn collect_token_names(tokens: TokenStream, names: &mut Vec<String>) {
    let mut interpolated = false;
    for tree in tokens {
        match tree {
            TokenTree::Ident(ident) => push_name(names, &ident.to_string()),
            TokenTree::Group(group) => collect_token_names(group.stream(), names),
            TokenTree::Literal(literal) => {
                if interpolated {
                    scan_interpolation_holes(&literal.to_string(), names);
                }
            },
            TokenTree::Punct(punct) => {
                // `$@"..."` keeps the interpolation going through the `@`
                interpolated = punct.as_char() == '$' || (interpolated && punct.as_char() == '@');
                continue
            },
        }
        interpolated = false;
    }
}

/// Feeds the `{...}` holes of an interpolated string literal back through the scanner.
fn scan_interpolation_holes(literal: &str, names: &mut Vec<String>) {
    let mut chars = literal.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '{' {
            continue
        }
        if chars.peek() == Some(&'{') {
            chars.next();
            continue
        }
        let mut depth = 1;
        let mut hole = String::new();
        for c in chars.by_ref() {
            match c {
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        break
                    }
                },
                _ => (),
            }
            hole.push(c);
        }
        for name in Expr::new(hole_expression(&hole)).referenced_names() {
            push_name(names, &name);
        }
    }
}

/// Strips the alignment and format specifier, e.g. `Price,10:C2` -> `Price`
fn hole_expression(hole: &str) -> &str {
    let mut depth = 0usize;
    let mut chars = hole.char_indices().peekable();
    while let Some((idx, c)) = chars.next() {
        match c {
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => depth = depth.saturating_sub(1),
            // `global::Foo` is a qualified name, not a format specifier
            ':' if chars.peek().is_some_and(|&(_, next)| next == ':') => {
                chars.next();
            },
            ',' | ':' if depth == 0 => return &hole[..idx],
            _ => (),
        }
    }
    hole
}

/// Character-level scan for text the tokenizer rejects, e.g. verbatim
/// strings with backslashes or escapes like `\f`.
fn scan_names(source: &str, names: &mut Vec<String>) {
    let chars: Vec<char> = source.chars().collect();
    let mut idx = 0;
    while idx < chars.len() {
        let c = chars[idx];
        // `$`, `@`, `$@` and `@$` prefixes of string literals
        let prefix = chars[idx..].iter().take_while(|c| matches!(c, '$' | '@')).count();
        let open = idx + prefix;
        match chars.get(open) {
            Some('"') | Some('\'') if prefix == 0 || chars[open] == '"' => {
                let verbatim = chars[idx..open].contains(&'@');
                let interpolated = chars[idx..open].contains(&'$');
                let end = literal_end(&chars, open, verbatim, interpolated);
                if interpolated {
                    let literal: String = chars[open..end].iter().collect();
                    scan_interpolation_holes(&literal, names);
                }
                idx = end;
                continue
            },
            _ => (),
        }
        if c.is_alphabetic() || c == '_' {
            let start = idx;
            while idx < chars.len() && (chars[idx].is_alphanumeric() || chars[idx] == '_') {
                idx += 1;
            }
            let name: String = chars[start..idx].iter().collect();
            push_name(names, &name);
        } else if c.is_ascii_digit() {
            // numeric literals and their suffixes, e.g. `10L`, `1.5m`
            while idx < chars.len() && (chars[idx].is_alphanumeric() || chars[idx] == '_') {
                idx += 1;
            }
        } else {
            idx += 1;
        }
    }
}

/// Index just past the literal opened by the quote at `open`. Quotes inside
/// interpolation holes don't close it.
fn literal_end(chars: &[char], open: usize, verbatim: bool, interpolated: bool) -> usize {
    let quote = chars[open];
    let mut depth = 0usize;
    let mut idx = open + 1;
    while idx < chars.len() {
        match chars[idx] {
            '\\' if !verbatim && depth == 0 => idx += 1,
            '{' if interpolated => {
                if depth == 0 && chars.get(idx + 1) == Some(&'{') {
                    idx += 1;
                } else {
                    depth += 1;
                }
            },
            '}' if interpolated && depth > 0 => depth -= 1,
            c if c == quote && depth == 0 => {
                if verbatim && chars.get(idx + 1) == Some(&quote) {
                    idx += 1;
                } else {
                    return idx + 1
                }
            },
            _ => (),
        }
        idx += 1;
    }
    chars.len()
}

impl From<&str> for Expr {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}

impl From<String> for Expr {
    fn from(source: String) -> Self {
        Self(source)
    }
}

impl From<TokenStream> for Expr {
    fn from(tokens: TokenStream) -> Self {
        Self(tokens.to_string())
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
