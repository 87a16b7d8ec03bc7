//! Styled per-requirement report lines.
//!
//! `Glyph` provides a single canonical set of status icons and colors
//! for check output, with a bracketed fallback for non-TTY streams.

use crate::status::{CheckReport, CheckStatus};
use console::style;

/// Canonical status glyphs for check output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    /// Requirement fulfilled.
    Fulfilled,
    /// Requirement failed or missing, treated as fatal.
    Failed,
    /// Requirement failed or missing, warn-only.
    Warned,
}

impl Glyph {
    /// Unicode icon for TTY output.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Fulfilled => "✓",
            Self::Failed => "✗",
            Self::Warned => "⚠",
        }
    }

    /// Bracketed text for non-TTY output.
    pub fn bracketed(self) -> &'static str {
        match self {
            Self::Fulfilled => "[ok]",
            Self::Failed => "[FAIL]",
            Self::Warned => "[warn]",
        }
    }

    /// Styled icon string, colored when the stream supports it.
    pub fn styled(self) -> String {
        let icon = self.icon();
        match self {
            Self::Fulfilled => style(icon).green().to_string(),
            Self::Failed => style(icon).red().to_string(),
            Self::Warned => style(icon).yellow().to_string(),
        }
    }
}

/// Writes check report lines to stdout, respecting quiet mode.
#[derive(Debug)]
pub struct Reporter {
    quiet: bool,
    attended: bool,
}

impl Reporter {
    /// Create a reporter. `quiet` suppresses per-requirement lines.
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            attended: console::user_attended(),
        }
    }

    #[cfg(test)]
    fn plain(quiet: bool) -> Self {
        Self {
            quiet,
            attended: false,
        }
    }

    /// Render one line for a check report.
    pub fn format_line(&self, report: &CheckReport, lenient: bool) -> String {
        let glyph = match &report.status {
            CheckStatus::Fulfilled => Glyph::Fulfilled,
            _ if lenient => Glyph::Warned,
            _ => Glyph::Failed,
        };
        let detail = match &report.status {
            CheckStatus::Fulfilled => String::new(),
            CheckStatus::Missing => " (command not found)".to_string(),
            CheckStatus::Failed { exit_code, .. } => match exit_code {
                Some(code) => format!(" (exit code {})", code),
                None => " (killed by signal)".to_string(),
            },
        };

        if self.attended {
            format!("{} {}{}", glyph.styled(), report.name, detail)
        } else {
            format!("{} {}{}", glyph.bracketed(), report.name, detail)
        }
    }

    /// Print one line for a check report.
    pub fn line(&self, report: &CheckReport, lenient: bool) {
        if !self.quiet {
            println!("{}", self.format_line(report, lenient));
        }
    }

    /// Print the final summary line.
    pub fn summary(&self, fulfilled: usize, total: usize) {
        if self.quiet {
            return;
        }
        if fulfilled == total {
            println!("All {} requirements fulfilled", total);
        } else {
            println!("{}/{} requirements fulfilled", fulfilled, total);
        }
    }

    /// Print a plain message.
    pub fn message(&self, msg: &str) {
        if !self.quiet {
            println!("{}", msg);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(status: CheckStatus) -> CheckReport {
        CheckReport {
            name: "Git".to_string(),
            status,
        }
    }

    #[test]
    fn icons_and_brackets_are_distinct() {
        let glyphs = [Glyph::Fulfilled, Glyph::Failed, Glyph::Warned];
        let mut icons: Vec<_> = glyphs.iter().map(|g| g.icon()).collect();
        icons.sort();
        icons.dedup();
        assert_eq!(icons.len(), glyphs.len());
    }

    #[test]
    fn fulfilled_line_has_ok_marker() {
        let reporter = Reporter::plain(false);
        let line = reporter.format_line(&report(CheckStatus::Fulfilled), false);
        assert_eq!(line, "[ok] Git");
    }

    #[test]
    fn missing_line_mentions_not_found() {
        let reporter = Reporter::plain(false);
        let line = reporter.format_line(&report(CheckStatus::Missing), false);
        assert_eq!(line, "[FAIL] Git (command not found)");
    }

    #[test]
    fn failed_line_carries_exit_code() {
        let reporter = Reporter::plain(false);
        let status = CheckStatus::Failed {
            exit_code: Some(3),
            output: "oops".to_string(),
        };
        let line = reporter.format_line(&report(status), false);
        assert_eq!(line, "[FAIL] Git (exit code 3)");
    }

    #[test]
    fn lenient_failure_is_warned_not_failed() {
        let reporter = Reporter::plain(false);
        let line = reporter.format_line(&report(CheckStatus::Missing), true);
        assert!(line.starts_with("[warn]"));
    }

    #[test]
    fn signal_death_is_labeled() {
        let reporter = Reporter::plain(false);
        let status = CheckStatus::Failed {
            exit_code: None,
            output: String::new(),
        };
        let line = reporter.format_line(&report(status), false);
        assert!(line.contains("killed by signal"));
    }
}
