//! Lexer for the assembly source language.
//!
//! Tokenization is driven by an internal Logos enum that is converted to
//! the public [`Token`] type, with keyword lookup and string escape
//! processing applied during the conversion.
//!
//! Two quirks of the language shape the patterns below:
//!
//! - `#` starts a comment running to end of line, unless the next
//!   character is a decimal digit; `#N` is the register syntax and must
//!   lex as an identifier.
//! - A numeric run may contain hex digits and `x`/`X` anywhere, so that
//!   `0x…` literals lex as a single token. A run terminated by anything
//!   other than whitespace, a comma, or end of input is garbage and lexes
//!   as `ILLEGAL` together with the rest of the word.

use logos::Logos;

use crate::token::{Token, TokenKind};

/// Internal Logos token enum, converted to [`TokenKind`] after lexing.
///
/// Mnemonic keywords are not matched here; identifiers go through
/// [`TokenKind::lookup_ident`] instead, which keeps the automaton small
/// and matches keywords only when they form a complete word.
#[derive(Logos, Debug, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
#[logos(skip r"#([^0-9\n][^\n]*)?")]
enum RawToken {
    #[token(",")]
    Comma,

    /// Double-quoted string with backslash escapes.
    #[regex(r#""([^"\\]|\\.)*""#)]
    Str,

    /// `:` plus everything up to the next whitespace, commas included.
    #[regex(r":[^ \t\r\n]*")]
    Label,

    /// Numeric run ended by whitespace, a comma, or end of input.
    #[regex(r"[0-9][0-9a-fA-FxX]*")]
    Int,

    /// Numeric run ended by anything else: the run plus the rest of the
    /// word is one garbage token.
    #[regex(r"[0-9][0-9a-fA-FxX]*[^0-9a-fA-FxX \t\r\n,][^ \t\r\n]*")]
    Illegal,

    /// `#` followed by a digit reads as an identifier (register syntax),
    /// not a comment.
    #[regex(r"#[0-9][^ \t\r\n,]*")]
    Register,

    /// Everything else up to the next comma or whitespace.
    #[regex(r#"[^ \t\r\n,:#"0-9][^ \t\r\n,]*"#)]
    Ident,
}

/// Streaming lexer over a source string.
pub struct Lexer<'src> {
    raw: logos::Lexer<'src, RawToken>,
}

impl<'src> Lexer<'src> {
    pub fn new(input: &'src str) -> Lexer<'src> {
        Lexer {
            raw: RawToken::lexer(input),
        }
    }

    /// Produce the next token. Once the input is exhausted this returns
    /// `Eof` forever.
    pub fn next_token(&mut self) -> Token {
        match self.raw.next() {
            None => Token::eof(),
            Some(Ok(RawToken::Comma)) => Token::new(TokenKind::Comma, ","),
            Some(Ok(RawToken::Str)) => Token::new(TokenKind::Str, unescape(self.raw.slice())),
            Some(Ok(RawToken::Label)) => Token::new(TokenKind::Label, self.raw.slice()),
            Some(Ok(RawToken::Int)) => Token::new(TokenKind::Int, self.raw.slice()),
            Some(Ok(RawToken::Illegal)) => Token::new(TokenKind::Illegal, self.raw.slice()),
            Some(Ok(RawToken::Register)) => Token::new(TokenKind::Ident, self.raw.slice()),
            Some(Ok(RawToken::Ident)) => {
                let text = self.raw.slice();
                Token::new(TokenKind::lookup_ident(text), text)
            }
            Some(Err(())) => {
                // Nothing the grammar recognizes can start here. The only
                // way to reach this is an unterminated string literal, so
                // the rest of the input becomes one garbage token.
                let mut literal = self.raw.slice().to_string();
                literal.push_str(self.raw.remainder());
                self.raw.bump(self.raw.remainder().len());
                Token::new(TokenKind::Illegal, literal)
            }
        }
    }
}

/// Strip the surrounding quotes and decode escapes.
///
/// Recognized escapes are `\n`, `\t`, `\r`, `\"`, and `\\`; any other
/// escaped character is passed through literally.
fn unescape(quoted: &str) -> String {
    let inner = &quoted[1..quoted.len() - 1];
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some(other) => out.push(other),
            None => {}
        }
    }
    out
}
