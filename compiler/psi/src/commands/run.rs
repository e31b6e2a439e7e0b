//! The `run` command: execute a script file.

use psi_eval::Interpreter;
use psi_value::EvalResult;
use tracing::debug;

use super::read_file;
use crate::format_error;

/// Run `source` line by line, stopping at the first error or `quit`.
pub fn run_script(interpreter: &mut Interpreter, source: &str) -> EvalResult {
    debug!(bytes = source.len(), "running script");
    interpreter.interpret_source(source)
}

/// Run the script at `path`; exits non-zero on the first error.
pub fn run_file(path: &str) {
    let source = read_file(path);
    let mut interpreter = Interpreter::new();
    if let Err(err) = run_script(&mut interpreter, &source) {
        eprintln!("{}: {}", path, format_error(&err));
        std::process::exit(1);
    }
}
