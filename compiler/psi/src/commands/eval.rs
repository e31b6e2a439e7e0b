//! The `eval` command: run source given on the command line.

use psi_eval::Interpreter;

use super::run_script;
use crate::format_error;

pub fn eval_source(source: &str) {
    let mut interpreter = Interpreter::new();
    if let Err(err) = run_script(&mut interpreter, source) {
        eprintln!("{}", format_error(&err));
        std::process::exit(1);
    }
}
