//! Raw Token Definition
//!
//! The `RawToken` enum is the logos-derived tokenizer output before it is
//! paired with its source slice.

use logos::Logos;

/// Raw token from logos (before slicing).
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub(crate) enum RawToken {
    #[token("{")]
    OpenBrace,

    #[token("}")]
    CloseBrace,

    /// `(` ... `)` with no nested parentheses.
    #[regex(r"\([^()]*\)")]
    Text,

    /// `(` with no closing parenthesis before the next `(` or end of line.
    #[regex(r"\([^()]*")]
    UnterminatedText,

    #[regex(r"[^ \t\r\n\f{}()]+")]
    Word,
}
