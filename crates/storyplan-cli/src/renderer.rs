//! Terminal rendering module for rich markdown output
//!
//! Plans are rendered with termimad when color is enabled; otherwise the
//! markdown is written unchanged.

use std::io::Write;

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

const STEP_KEYWORDS: [&str; 4] = ["Given", "When", "Then", "And"];

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to the terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        let mut out = std::io::stdout().lock();
        if !self.rich_enabled {
            write!(out, "{markdown}")?;
            out.flush()?;
            return Ok(());
        }

        for line in markdown.lines() {
            if line.starts_with('#') {
                writeln!(out, "\x1b[34m{line}\x1b[0m")?;
            } else {
                writeln!(out, "{}", self.skin.inline(&emphasize_keyword(line)))?;
            }
        }
        out.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Bolds the Gherkin keyword opening a step line.
fn emphasize_keyword(line: &str) -> String {
    let trimmed = line.trim_start();
    let indent = &line[..line.len() - trimmed.len()];
    STEP_KEYWORDS
        .iter()
        .find_map(|keyword| {
            trimmed
                .strip_prefix(keyword)
                .filter(|rest| rest.starts_with(' '))
                .map(|rest| format!("{indent}**{keyword}**{rest}"))
        })
        .unwrap_or_else(|| line.to_string())
}
