//! Console transcript with bounded scrollback

use std::collections::VecDeque;

pub const BANNER: [&str; 2] = ["Welcome to Ramen Console", "Type commands here..."];

/// Ordered console lines; the oldest are dropped past the scrollback cap
#[derive(Debug, Clone)]
pub struct Transcript {
    lines: VecDeque<String>,
    scrollback: usize,
    /// Total lines ever appended, including dropped ones
    appended: usize,
}

impl Transcript {
    pub fn new(scrollback: usize) -> Self {
        Self {
            lines: VecDeque::new(),
            scrollback,
            appended: 0,
        }
    }

    pub fn with_banner(scrollback: usize) -> Self {
        let mut transcript = Self::new(scrollback);
        transcript.extend(BANNER.iter().map(|line| line.to_string()));
        transcript
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push_back(line.into());
        self.appended += 1;
        while self.lines.len() > self.scrollback {
            self.lines.pop_front();
        }
    }

    pub fn extend(&mut self, lines: impl IntoIterator<Item = String>) {
        for line in lines {
            self.push(line);
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Running count of appended lines, used by hosts to print only new ones
    pub fn appended(&self) -> usize {
        self.appended
    }

    /// Lines appended after `mark` (a previous [`appended`](Self::appended)
    /// value) that are still retained
    pub fn since(&self, mark: usize) -> impl Iterator<Item = &str> {
        let new = self.appended.saturating_sub(mark).min(self.lines.len());
        self.lines.iter().skip(self.lines.len() - new).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner() {
        let transcript = Transcript::with_banner(10);
        let lines: Vec<_> = transcript.lines().collect();
        assert_eq!(lines, BANNER.to_vec());
    }

    #[test]
    fn test_scrollback_drops_oldest() {
        let mut transcript = Transcript::new(3);
        transcript.extend((1..=5).map(|i| i.to_string()));
        let lines: Vec<_> = transcript.lines().collect();
        assert_eq!(lines, vec!["3", "4", "5"]);
        assert_eq!(transcript.appended(), 5);
    }

    #[test]
    fn test_since_mark() {
        let mut transcript = Transcript::new(100);
        transcript.push("old");
        let mark = transcript.appended();
        transcript.push("new1");
        transcript.push("new2");
        let lines: Vec<_> = transcript.since(mark).collect();
        assert_eq!(lines, vec!["new1", "new2"]);
    }

    #[test]
    fn test_clear_then_since() {
        let mut transcript = Transcript::new(100);
        transcript.push("a");
        let mark = transcript.appended();
        transcript.clear();
        assert_eq!(transcript.since(mark).count(), 0);
        assert!(transcript.is_empty());
    }
}
