//! Command handlers for the `psi` binary.

mod eval;
mod repl;
mod run;

pub use eval::eval_source;
pub use repl::{run_repl, LineOutcome, Repl};
pub use run::{run_file, run_script};

/// Read a script, exiting with a message when it cannot be read.
pub(crate) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("error: cannot read '{path}': {e}");
            std::process::exit(1);
        }
    }
}
