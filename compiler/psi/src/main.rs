//! psi CLI

use psi::commands::{eval_source, run_file, run_repl};

fn main() {
    psi::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        run_repl();
        return;
    }

    match args[1].as_str() {
        "run" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: psi run <file>");
                std::process::exit(1);
            };
            run_file(path);
        }
        "eval" => {
            if args.len() < 3 {
                eprintln!("Usage: psi eval <source>");
                std::process::exit(1);
            }
            eval_source(&args[2..].join(" "));
        }
        "repl" => run_repl(),
        "help" | "--help" | "-h" => print_usage(),
        "--version" | "-V" => println!("psi {}", env!("CARGO_PKG_VERSION")),
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("psi - a PostScript-subset interpreter");
    println!();
    println!("Usage: psi [command] [args]");
    println!();
    println!("Commands:");
    println!("  (none), repl     Start an interactive session");
    println!("  run <file>       Run a script file");
    println!("  eval <source>    Run source given as arguments");
    println!("  help             Show this message");
    println!("  --version        Show version");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=psi_eval=debug) to enable tracing.");
}
