//! Console display module
//!
//! Styled status messages and scan statistics. Everything here writes to
//! stderr; stdout is reserved for the result words and the timing line.

use bytesize::ByteSize;
use colored::*;
use std::time::Duration;

/// Color theme for the tool
pub mod theme {
    use colored::Color;

    pub const PRIMARY: Color = Color::Green;
    pub const ACCENT: Color = Color::Cyan;
    pub const WARNING: Color = Color::Yellow;
    pub const ERROR: Color = Color::Red;
}

/// Print a section header
pub fn print_header(text: &str) {
    eprintln!("\n{} {}", "▶".color(theme::PRIMARY), text.color(theme::PRIMARY).bold());
}

/// Print an info message
pub fn print_info(text: &str) {
    eprintln!("  {} {}", "ℹ".color(theme::ACCENT), text);
}

/// Print a success message
pub fn print_success(text: &str) {
    eprintln!("  {} {}", "✔".color(theme::PRIMARY), text.color(theme::PRIMARY));
}

/// Print a warning message
pub fn print_warning(text: &str) {
    eprintln!("  {} {}", "⚠".color(theme::WARNING), text.color(theme::WARNING));
}

/// Print an error message
pub fn print_error(text: &str) {
    eprintln!("  {} {}", "✖".color(theme::ERROR), text.color(theme::ERROR));
}

/// Counters collected during one scan
#[derive(Debug, Clone, Default)]
pub struct ScanStats {
    /// Every line read from the word list
    pub total_lines: u64,
    /// Lines empty after trimming
    pub blank_lines: u64,
    /// Words without the center letter
    pub missing_center: u64,
    /// Words with a letter outside the allowed set
    pub disallowed: u64,
    /// Accepted words dropped as repeats (`--unique` only)
    pub duplicates: u64,
    /// Words in the result sequence
    pub matched: u64,
    pub file_bytes: u64,
    pub encoding: &'static str,
    pub elapsed: Duration,
}

impl ScanStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines_per_second(&self) -> f64 {
        let elapsed = self.elapsed.as_secs_f64();
        if elapsed > 0.0 {
            self.total_lines as f64 / elapsed
        } else {
            0.0
        }
    }

    /// Rejections of any kind, blanks excluded
    pub fn rejected(&self) -> u64 {
        self.missing_center + self.disallowed
    }

    /// Print final statistics
    pub fn print_summary(&self) {
        eprintln!();
        eprintln!("{}", "═".repeat(60).green());
        eprintln!("{}", "                      SCAN COMPLETE".green().bold());
        eprintln!("{}", "═".repeat(60).green());
        eprintln!();

        eprintln!("  {} {} ({})", "Word list:      ".green(),
            ByteSize(self.file_bytes), self.encoding);
        eprintln!("  {} {}", "Lines read:     ".green(),
            format_number(self.total_lines));
        eprintln!("  {} {}", "Blank lines:    ".green(),
            format_number(self.blank_lines));
        eprintln!("  {} {}", "No center:      ".yellow(),
            format_number(self.missing_center));
        eprintln!("  {} {}", "Bad letters:    ".yellow(),
            format_number(self.disallowed));
        if self.duplicates > 0 {
            eprintln!("  {} {}", "Duplicates:     ".yellow(),
                format_number(self.duplicates));
        }
        eprintln!("  {} {}", "Matches:        ".green().bold(),
            format_number(self.matched).green().bold());

        eprintln!();
        eprintln!("  {} {}", "Duration:       ".green(), format_duration(self.elapsed));
        eprintln!("  {} {:.2} lines/sec", "Throughput:     ".green(),
            self.lines_per_second());
        eprintln!();
        eprintln!("{}", "═".repeat(60).green());
    }
}

/// Format a number with thousand separators
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result
}

/// Format duration as human-readable string
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();

    if secs == 0 {
        format!("{:.3}ms", duration.as_secs_f64() * 1000.0)
    } else if secs < 60 {
        format!("{:.1}s", duration.as_secs_f64())
    } else {
        let mins = secs / 60;
        let secs = secs % 60;
        format!("{}m {}s", mins, secs)
    }
}
