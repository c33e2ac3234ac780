//! # Console Session
//!
//! One editing session: the structural editor, the console transcript, the
//! in-memory log and the effective settings. Hosts feed it keys, console
//! input or whole lines and read back the transcript and render output.

use crate::commands::{ConsoleCommand, HELP_LINE, KEY_HELP};
use crate::transcript::Transcript;
use editor_core::{CoreOutcome, EditorCore, EditorMode, Key};
use expr_eval::{run, RunReport};
use expr_types::{empty_program, sample_program};
use services_logger::{LogEntry, LogLevel, MemoryLog};
use services_settings::{keys, SettingsRegistry};

/// Echo line for runs started from the editor
pub const EXECUTE_ECHO: &str = "> Execute Program";

/// Console session state
pub struct Session {
    editor: EditorCore,
    transcript: Transcript,
    log: MemoryLog,
    settings: SettingsRegistry,
}

impl Session {
    /// Creates a session from effective settings
    ///
    /// `force_empty` overrides `editor.load_sample`.
    pub fn new(settings: SettingsRegistry, force_empty: bool) -> Self {
        let scrollback = settings
            .integer(keys::CONSOLE_SCROLLBACK_LINES)
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(1000);
        let transcript = if settings.boolean(keys::CONSOLE_SHOW_BANNER).unwrap_or(true) {
            Transcript::with_banner(scrollback)
        } else {
            Transcript::new(scrollback)
        };
        let load_sample = !force_empty && settings.boolean(keys::EDITOR_LOAD_SAMPLE).unwrap_or(true);
        let program = if load_sample {
            sample_program()
        } else {
            empty_program()
        };

        let mut log = MemoryLog::default();
        log.record(
            LogEntry::new(LogLevel::Info, "Session started")
                .with_field("sample", load_sample)
                .with_field("scrollback", scrollback),
        );

        Self {
            editor: EditorCore::new(program),
            transcript,
            log,
            settings,
        }
    }

    pub fn editor(&self) -> &EditorCore {
        &self.editor
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn log(&self) -> &MemoryLog {
        &self.log
    }

    pub fn log_mut(&mut self) -> &mut MemoryLog {
        &mut self.log
    }

    /// Applies a key to the editor and handles host requests
    pub fn handle_key(&mut self, key: Key) -> CoreOutcome {
        let outcome = self.editor.apply_key(key);
        match &outcome {
            CoreOutcome::Changed => {
                let selection = self
                    .editor
                    .selection()
                    .map(|id| id.to_string())
                    .unwrap_or_default();
                self.log.record(
                    LogEntry::new(LogLevel::Debug, "Editor state changed")
                        .with_field("key", format!("{:?}", key))
                        .with_field("mode", self.editor.mode().as_str())
                        .with_field("selection", selection),
                );
            }
            CoreOutcome::RequestRun => {
                self.run_program(EXECUTE_ECHO.to_string());
            }
            CoreOutcome::RequestHelp => {
                self.transcript
                    .extend(KEY_HELP.iter().map(|line| line.to_string()));
            }
            CoreOutcome::Continue => {}
        }
        outcome
    }

    /// Handles one line of console input
    pub fn submit_console(&mut self, input: &str) {
        let Some(command) = ConsoleCommand::parse(input) else {
            return;
        };
        let echo = format!("> {}", input);
        match command {
            ConsoleCommand::Clear => self.transcript.clear(),
            ConsoleCommand::Help => {
                self.transcript.push(echo);
                self.transcript.push(HELP_LINE);
            }
            ConsoleCommand::Interpret => {
                self.run_program(echo);
            }
            ConsoleCommand::Unknown(text) => {
                self.transcript.push(echo);
                self.transcript
                    .push(format!("Command not recognized: {}", text));
            }
        }
    }

    /// Line-driven input
    ///
    /// - `:` prefixes a console command
    /// - In insert mode the line is the insertion text and is committed
    /// - In normal mode each character is a key; if a key enters insert
    ///   mode, the rest of the line is committed as insertion text
    pub fn handle_line(&mut self, line: &str) {
        if let Some(command) = line.strip_prefix(':') {
            self.submit_console(command);
            return;
        }
        if self.editor.mode() == EditorMode::Insert {
            self.commit_line(line);
            return;
        }
        for (idx, byte) in line.bytes().enumerate() {
            if let Some(key) = Key::from_ascii(byte) {
                self.handle_key(key);
            }
            if self.editor.mode() == EditorMode::Insert {
                let rest = &line[idx + 1..];
                if !rest.trim().is_empty() {
                    self.commit_line(rest);
                }
                return;
            }
        }
    }

    fn commit_line(&mut self, text: &str) {
        self.editor.set_insertion_text(text);
        self.handle_key(Key::Enter);
    }

    /// Runs the current program and appends its transcript
    pub fn run_program(&mut self, echo: String) -> RunReport {
        self.log
            .record(LogEntry::new(LogLevel::Info, "Run started").with_field("trigger", &echo));

        let report = run(self.editor.program());

        let mut lines = vec![echo];
        lines.extend(report.output.iter().cloned());
        match (&report.error, &report.result) {
            (Some(err), _) => {
                lines.push(format!("Interpreter Error: {}", err));
                self.log.record(
                    LogEntry::new(LogLevel::Warn, "Run failed")
                        .with_source(report.run_id)
                        .with_field("output_lines", report.output.len())
                        .with_field("error", err),
                );
            }
            (None, result) => {
                if let Some(value) = result {
                    if self.settings.boolean(keys::CONSOLE_SHOW_RESULT).unwrap_or(true) {
                        lines.push(format!("Result: {}", value));
                    }
                }
                let shown = result
                    .as_ref()
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| "none".to_string());
                self.log.record(
                    LogEntry::new(LogLevel::Info, "Run finished")
                        .with_source(report.run_id)
                        .with_field("output_lines", report.output.len())
                        .with_field("result", shown),
                );
            }
        }
        self.transcript.extend(lines);
        report
    }
}
