//! Tokenizer for the psi interpreter.
//!
//! Input is lexed one line at a time. Braces are always split out as their
//! own tokens, a parenthesised string is one token even when it contains
//! whitespace, and every other run of non-whitespace is a word for the
//! dispatcher to classify.
//!
//! ```text
//! /sq {dup mul} def (a b) length
//! => Word("/sq") OpenBrace Word("dup") Word("mul") CloseBrace Word("def")
//!    Text("a b") Word("length")
//! ```

mod raw_token;
mod token;

use logos::Logos;

use raw_token::RawToken;

pub use token::{SourceToken, Token};

/// Iterator over the tokens of one input line.
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, RawToken>,
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        let raw = self.inner.next()?;
        let slice = self.inner.slice();
        Some(match raw {
            Ok(RawToken::OpenBrace) => Token::OpenBrace,
            Ok(RawToken::CloseBrace) => Token::CloseBrace,
            Ok(RawToken::Text) => Token::Text(&slice[1..slice.len() - 1]),
            Ok(RawToken::Word) => Token::Word(slice),
            Ok(RawToken::UnterminatedText) | Err(()) => Token::Invalid(slice),
        })
    }
}

/// Lex a single line of input.
pub fn lex(line: &str) -> Lexer<'_> {
    Lexer {
        inner: RawToken::lexer(line),
    }
}
