//! # Ramen Console
//!
//! Main entry point for the line-driven editor console.

use cli_console::{bootstrap, parse_args, run_console, usage};
use std::env;
use std::io;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("ramen-console");

    let config = parse_args(args.get(1..).unwrap_or_default()).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        print_usage(program);
        process::exit(1);
    });
    if config.show_help {
        print_usage(program);
        process::exit(0);
    }

    let (mut session, level) = bootstrap(&config).unwrap_or_else(|e| {
        eprintln!("Failed to start console: {}", e);
        process::exit(1);
    });

    let stdin = io::stdin();
    let result = run_console(
        &mut session,
        level,
        stdin.lock(),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
    if let Err(e) = result {
        eprintln!("Console error: {}", e);
        process::exit(1);
    }
}

fn print_usage(program: &str) {
    for line in usage(program) {
        eprintln!("{}", line);
    }
}
