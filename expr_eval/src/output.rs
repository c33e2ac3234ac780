//! Output side-channel for `print`

/// Receives lines emitted by a running program
pub trait OutputSink {
    fn emit(&mut self, line: String);
}

impl OutputSink for Vec<String> {
    fn emit(&mut self, line: String) {
        self.push(line);
    }
}
