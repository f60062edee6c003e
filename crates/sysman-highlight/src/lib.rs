//! Syntax highlighting and terminal colors for sysman.
//!
//! Example commands are highlighted as shell, effective configuration as TOML. The styling
//! helpers wrap text in ANSI escapes for headers, ids, and status messages.

#![warn(missing_docs)]

use syntect::{
    easy::HighlightLines,
    highlighting::Style,
    parsing::SyntaxSet,
    util::{LinesWithEndings, as_24_bit_terminal_escaped},
};
use two_face::{
    syntax::extra_newlines as extra_syntaxes,
    theme::{EmbeddedLazyThemeSet, EmbeddedThemeName, extra as extra_themes},
};

/// A syntax highlighter for terminal output.
pub struct Highlighter {
    /// Language definitions, including the two-face extras (TOML among them).
    syntax_set: SyntaxSet,
    /// Embedded colour themes.
    theme_set: EmbeddedLazyThemeSet,
    /// The theme in use.
    theme: EmbeddedThemeName,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter {
    /// Creates a highlighter with the Dracula theme.
    pub fn new() -> Self {
        Self {
            syntax_set: extra_syntaxes(),
            theme_set: extra_themes(),
            theme: EmbeddedThemeName::Dracula,
        }
    }

    /// Highlights a shell command line.
    pub fn highlight_shell(&self, command: &str) -> String {
        self.highlight(command, "sh")
    }

    /// Highlights TOML content.
    pub fn highlight_toml(&self, content: &str) -> String {
        self.highlight(content, "toml")
    }

    /// Highlights JSON content.
    pub fn highlight_json(&self, content: &str) -> String {
        self.highlight(content, "json")
    }

    /// Highlights content with the named syntax, looked up by extension then by name.
    ///
    /// Unknown syntaxes fall back to plain text.
    pub fn highlight(&self, content: &str, syntax_name: &str) -> String {
        let syntax = self
            .syntax_set
            .find_syntax_by_extension(syntax_name)
            .or_else(|| self.syntax_set.find_syntax_by_name(syntax_name))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let theme = self.theme_set.get(self.theme);
        let mut highlighter = HighlightLines::new(syntax, theme);

        let mut output = String::new();
        for line in LinesWithEndings::from(content) {
            let ranges: Vec<(Style, &str)> = highlighter
                .highlight_line(line, &self.syntax_set)
                .unwrap_or_else(|_| vec![(Style::default(), line)]);
            output.push_str(&as_24_bit_terminal_escaped(&ranges[..], false));
        }
        output.push_str(colors::RESET);
        output
    }
}

/// ANSI escape codes.
pub mod colors {
    /// Bold text.
    pub const BOLD: &str = "\x1b[1m";
    /// Cyan text, for headers.
    pub const CYAN: &str = "\x1b[36m";
    /// Magenta text, for identifiers.
    pub const MAGENTA: &str = "\x1b[35m";
    /// Green text, for success.
    pub const GREEN: &str = "\x1b[32m";
    /// Yellow text, for warnings.
    pub const YELLOW: &str = "\x1b[33m";
    /// Red text, for errors.
    pub const RED: &str = "\x1b[31m";
    /// Dim text, for secondary information.
    pub const DIM: &str = "\x1b[2m";
    /// Reset all formatting.
    pub const RESET: &str = "\x1b[0m";
}

/// Formats a header in bold cyan.
pub fn header(text: &str) -> String {
    format!("{}{}{}{}", colors::BOLD, colors::CYAN, text, colors::RESET)
}

/// Formats a subheader in bold.
pub fn subheader(text: &str) -> String {
    format!("{}{}{}", colors::BOLD, text, colors::RESET)
}

/// Formats an identifier in magenta.
pub fn ident(text: &str) -> String {
    format!("{}{}{}", colors::MAGENTA, text, colors::RESET)
}

/// Formats secondary text as dimmed.
pub fn dim(text: &str) -> String {
    format!("{}{}{}", colors::DIM, text, colors::RESET)
}

/// Formats a success message in green.
pub fn success(text: &str) -> String {
    format!("{}{}{}", colors::GREEN, text, colors::RESET)
}

/// Formats a warning in yellow.
pub fn warning(text: &str) -> String {
    format!("{}{}{}", colors::YELLOW, text, colors::RESET)
}

/// Formats an error in red.
pub fn error(text: &str) -> String {
    format!("{}{}{}", colors::RED, text, colors::RESET)
}

/// Returns a dimmed horizontal rule.
pub fn rule(width: usize) -> String {
    dim(&"─".repeat(width))
}
