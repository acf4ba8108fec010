//! Output formatting for the CLI.

use console::{style, Term};
use fithaven_commerce::{Notice, NoticeLevel};

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
    term: Term,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self {
            verbose,
            json,
            term: Term::stderr(),
        }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a storefront notice at its own severity.
    pub fn notice(&self, notice: &Notice) {
        match notice.level {
            NoticeLevel::Success => self.success(&notice.message),
            NoticeLevel::Info => self.info(&notice.message),
            NoticeLevel::Error => self.error(&notice.message),
        }
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print a line of chat, indented by speaker.
    pub fn chat_line(&self, text: &str, is_user: bool) {
        if self.json {
            return;
        }
        if is_user {
            println!("{:>8} {}", style("you").cyan().bold(), text);
        } else {
            println!("{:>8} {}", style("fithaven").magenta().bold(), text);
        }
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| format!("{:width$}", col, width = width))
            .collect();
        println!("  {}", formatted.join("  "));
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }

    /// Whether prompts can be shown.
    pub fn is_interactive(&self) -> bool {
        !self.json && self.term.is_term()
    }
}

/// Highlight a sale price against its crossed-out original.
pub fn price_tag(price: &str, original: Option<&str>) -> String {
    match original {
        Some(original) => format!(
            "{} {}",
            style(price).green().bold(),
            style(original).dim().strikethrough()
        ),
        None => price.to_string(),
    }
}

/// Render a percentage as a fixed-width bar.
pub fn percent_bar(percent: f64, width: usize) -> String {
    let filled = ((percent / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Truncate long cells so table columns stay aligned.
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(1)).collect();
    format!("{}…", kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_bar() {
        assert_eq!(percent_bar(0.0, 4), "░░░░");
        assert_eq!(percent_bar(50.0, 4), "██░░");
        assert_eq!(percent_bar(120.0, 4), "████");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Treadmill", 20), "Treadmill");
        assert_eq!(truncate("Professional Power Rack", 10), "Professio…");
    }
}
