//! Borrowed and owned token forms.

use std::fmt;

/// A token borrowed from the line being lexed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token<'src> {
    /// `{`
    OpenBrace,
    /// `}`
    CloseBrace,
    /// String literal; holds the text between the parentheses.
    Text(&'src str),
    /// Any other whitespace-delimited run: numbers, names, operators.
    Word(&'src str),
    /// Input the lexer could not classify (stray `)`, unterminated `(`).
    Invalid(&'src str),
}

impl Token<'_> {
    /// Convert to the owned form stored inside procedure bodies.
    pub fn to_source(self) -> SourceToken {
        match self {
            Token::OpenBrace => SourceToken::OpenBrace,
            Token::CloseBrace => SourceToken::CloseBrace,
            Token::Text(s) => SourceToken::Text(s.into()),
            Token::Word(s) => SourceToken::Word(s.into()),
            Token::Invalid(s) => SourceToken::Invalid(s.into()),
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::OpenBrace => f.write_str("{"),
            Token::CloseBrace => f.write_str("}"),
            Token::Text(s) => write!(f, "({s})"),
            Token::Word(s) | Token::Invalid(s) => f.write_str(s),
        }
    }
}

/// Owned token, kept verbatim in a procedure body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceToken {
    OpenBrace,
    CloseBrace,
    Text(Box<str>),
    Word(Box<str>),
    Invalid(Box<str>),
}

impl SourceToken {
    /// Borrow as a [`Token`] so bodies and fresh input share one dispatch path.
    pub fn as_token(&self) -> Token<'_> {
        match self {
            SourceToken::OpenBrace => Token::OpenBrace,
            SourceToken::CloseBrace => Token::CloseBrace,
            SourceToken::Text(s) => Token::Text(s),
            SourceToken::Word(s) => Token::Word(s),
            SourceToken::Invalid(s) => Token::Invalid(s),
        }
    }
}

impl fmt::Display for SourceToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_token().fmt(f)
    }
}
