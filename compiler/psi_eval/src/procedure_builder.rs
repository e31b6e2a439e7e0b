//! Brace-delimited procedure capture.
//!
//! Sits in front of the dispatcher. Tokens between a `{` and its matching
//! `}` are collected instead of executed; once the braces balance, the
//! collected body becomes a procedure value. Capture survives line
//! boundaries, which is the only state carried from one input line to the
//! next.

use psi_lexer::{SourceToken, Token};
use psi_value::{malformed_procedure, EvalResult, ProcRef};
use tracing::debug;

#[derive(Debug, Default)]
enum State {
    #[default]
    Idle,
    Capturing {
        /// Unmatched `{` count, at least 1.
        depth: usize,
        /// Body so far, outer `{` excluded.
        tokens: Vec<SourceToken>,
    },
}

/// What to do with a token after the builder has seen it.
#[derive(Debug)]
pub enum Feed<'src> {
    /// Absorbed into the body under construction.
    Captured,
    /// The closing brace balanced the literal; push this (unexecuted).
    Complete(ProcRef),
    /// Not part of a literal; hand it to the dispatcher.
    Dispatch(Token<'src>),
}

/// Token-accumulation state machine.
#[derive(Debug, Default)]
pub struct ProcedureBuilder {
    state: State,
}

impl ProcedureBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feed<'src>(&mut self, token: Token<'src>) -> EvalResult<Feed<'src>> {
        match &mut self.state {
            State::Idle => match token {
                Token::OpenBrace => {
                    self.state = State::Capturing {
                        depth: 1,
                        tokens: Vec::new(),
                    };
                    Ok(Feed::Captured)
                }
                Token::CloseBrace => Err(malformed_procedure("unexpected `}`")),
                other => Ok(Feed::Dispatch(other)),
            },
            State::Capturing { depth, tokens } => {
                match token {
                    Token::OpenBrace => *depth += 1,
                    Token::CloseBrace => {
                        *depth -= 1;
                        if *depth == 0 {
                            let body = std::mem::take(tokens);
                            self.state = State::Idle;
                            debug!(tokens = body.len(), "procedure captured");
                            return Ok(Feed::Complete(ProcRef::new(body)));
                        }
                    }
                    _ => {}
                }
                tokens.push(token.to_source());
                Ok(Feed::Captured)
            }
        }
    }

    /// Drop any partial body and return to idle.
    pub fn reset(&mut self) {
        if self.is_capturing() {
            debug!("discarding partial procedure");
        }
        self.state = State::Idle;
    }

    #[inline]
    pub fn is_capturing(&self) -> bool {
        matches!(self.state, State::Capturing { .. })
    }

    /// Current brace nesting, 0 when idle.
    pub fn depth(&self) -> usize {
        match &self.state {
            State::Idle => 0,
            State::Capturing { depth, .. } => *depth,
        }
    }
}
