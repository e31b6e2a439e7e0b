//! Interactive session.
//!
//! Each line is handed to the interpreter as it is read. Errors are
//! reported and the session carries on; an open `{` switches the prompt
//! to `> ` until it is closed.

use std::io::Write;

use psi_eval::Interpreter;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::debug;

use crate::{format_error, prompt};

/// Whether the loop should keep reading after a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineOutcome {
    Continue,
    Quit,
}

/// A session plus the per-line recovery policy.
pub struct Repl {
    interpreter: Interpreter,
}

impl Repl {
    pub fn new(interpreter: Interpreter) -> Self {
        Repl { interpreter }
    }

    pub fn prompt(&self) -> String {
        prompt(&self.interpreter)
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    /// Run one line, writing any error to `errors`.
    pub fn handle_line(&mut self, line: &str, errors: &mut impl Write) -> LineOutcome {
        if line.trim().is_empty() {
            return LineOutcome::Continue;
        }
        if let Err(err) = self.interpreter.interpret_line(line) {
            // stderr going away is not worth ending the session over
            let _ = writeln!(errors, "{}", format_error(&err));
        }
        if self.interpreter.is_terminated() {
            LineOutcome::Quit
        } else {
            LineOutcome::Continue
        }
    }
}

/// Read-eval loop on the terminal until `quit`, end of input or Ctrl-C.
pub fn run_repl() {
    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("error: cannot initialise line editor: {e}");
            std::process::exit(1);
        }
    };
    let mut repl = Repl::new(Interpreter::new());
    let mut stderr = std::io::stderr();

    loop {
        match editor.readline(&repl.prompt()) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = editor.add_history_entry(line.as_str());
                }
                if repl.handle_line(&line, &mut stderr) == LineOutcome::Quit {
                    break;
                }
            }
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => break,
            Err(err) => {
                eprintln!("error: {err}");
                break;
            }
        }
    }
    debug!("session ended");
}
