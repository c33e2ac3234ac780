//! # CLI Console
//!
//! Line-driven host for the structural editor and interpreter.
//! It is NOT a shell: the only console commands are `clear`, `help` and
//! `interpret`.
//!
//! ## Input
//!
//! Each stdin line is one of:
//! - `:command` for the console (`:interpret`, `:help`, `:clear`)
//! - editor keys in normal mode (`l`, `h`, `j`, `k`, `a`, `d`, `r`, `?`)
//! - insertion text while in insert mode
//!
//! Typing `a` followed by text on one line (e.g. `ax = 5`) enters insert
//! mode and commits the rest of the line.

pub mod commands;
pub mod config;
pub mod error;
pub mod render;
pub mod session;
pub mod transcript;

pub use config::{parse_args, usage, ConsoleConfig};
pub use error::ConsoleError;
pub use session::Session;

use render::{render_program, status_line};
use services_logger::LogLevel;
use services_settings::{create_default_registry, keys, persistence};
use std::io::{BufRead, Write};

/// Bootstrap function
///
/// Builds the effective settings (defaults plus the optional overrides file)
/// and returns a session together with the configured log level.
pub fn bootstrap(config: &ConsoleConfig) -> Result<(Session, LogLevel), ConsoleError> {
    let mut settings = create_default_registry();
    if let Some(path) = &config.settings_path {
        persistence::load_from_path(&mut settings, path)?;
    }

    let level = settings
        .string(keys::LOG_LEVEL)
        .unwrap_or("info")
        .parse::<LogLevel>()?;

    Ok((Session::new(settings, config.program_empty), level))
}

/// Drives a session from line input until EOF
///
/// After the opening transcript and after every line, `out` receives the new
/// transcript lines, the program render and the status line. Log entries at
/// or above `level` go to `log_out`.
pub fn run_console(
    session: &mut Session,
    level: LogLevel,
    input: impl BufRead,
    out: &mut impl Write,
    log_out: &mut impl Write,
) -> Result<(), ConsoleError> {
    for line in session.transcript().lines() {
        writeln!(out, "{}", line)?;
    }
    write_editor(out, session)?;
    flush_log(log_out, session, level)?;

    for line in input.lines() {
        let line = line?;
        let mark = session.transcript().appended();
        session.handle_line(&line);

        for new_line in session.transcript().since(mark) {
            writeln!(out, "{}", new_line)?;
        }
        write_editor(out, session)?;
        flush_log(log_out, session, level)?;
    }
    Ok(())
}

fn write_editor(out: &mut impl Write, session: &Session) -> Result<(), ConsoleError> {
    for line in render_program(session.editor()) {
        writeln!(out, "{}", line)?;
    }
    writeln!(out, "{}", status_line(session.editor()))?;
    out.flush()?;
    Ok(())
}

fn flush_log(
    log_out: &mut impl Write,
    session: &mut Session,
    level: LogLevel,
) -> Result<(), ConsoleError> {
    for entry in session.log_mut().drain() {
        if entry.level >= level {
            writeln!(log_out, "{}", entry)?;
        }
    }
    Ok(())
}
