//! Psi - front end for the psi stack-language interpreter.
//!
//! Provides the interactive read loop, the script and one-shot runners
//! behind the `psi` binary, and the process-wide tracing setup.
//!
//! ```text
//! psi               interactive session
//! psi run <file>    run a script
//! psi eval <src>    run source given on the command line
//! ```

pub mod commands;
mod tracing_setup;

pub use tracing_setup::init_tracing;

use psi_eval::Interpreter;
use psi_value::EvalError;

/// REPL prompt for the interpreter's current state.
///
/// `[PS:D > 3] ` shows the scope mode and stack depth; a bare `> ` means a
/// procedure literal is still open.
pub fn prompt(interpreter: &Interpreter) -> String {
    if interpreter.is_capturing() {
        return "> ".to_owned();
    }
    format!(
        "[PS:{} > {}] ",
        interpreter.scope_mode().symbol(),
        interpreter.stack().count()
    )
}

/// Render an error for stderr, followed by its procedure backtrace.
pub fn format_error(err: &EvalError) -> String {
    let mut out = format!("Error: {err}");
    if let Some(backtrace) = &err.backtrace {
        out.push('\n');
        out.push_str(backtrace.to_string().trim_end());
    }
    out
}
