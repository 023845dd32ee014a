//! Terminal output.
//!
//! Everything user-facing goes through [`OutputManager`] so quiet mode,
//! colour and JSON output are decided in one place. Logs never come here;
//! they go to stderr through `tracing`.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Status markers written in front of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    Success,
    Warning,
    Info,
}

impl Marker {
    fn glyph(self) -> &'static str {
        match self {
            Self::Success => "\u{2713}", // ✓
            Self::Warning => "\u{26a0}", // ⚠
            Self::Info => "\u{2139}",    // ℹ
        }
    }
}

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let requested = match args.output_format {
            OutputFormat::Auto => format_from_config(&config.output.format),
            explicit => explicit,
        };

        // Auto resolves to Human on a TTY and Plain when piped.
        let resolved_format = match requested {
            OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            other => other,
        };

        let term = Term::stdout();
        let disabled = args.no_color || config.output.no_color;

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: !colour_enabled(disabled, resolved_format, term.is_term()),
            term,
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.marked(Marker::Success, msg)
    }

    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.marked(Marker::Warning, msg)
    }

    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.marked(Marker::Info, msg)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Indented list entry.
    pub fn item(&self, text: &str) -> io::Result<()> {
        self.print(&format!("  {text}"))
    }

    /// Aligned `key  value` rows.
    pub fn table(&self, rows: &[(&str, String)]) -> io::Result<()> {
        for line in table_lines(rows) {
            self.print(&line)?;
        }
        Ok(())
    }

    /// One pretty-printed JSON document on stdout.
    ///
    /// Written in quiet mode too: asking for JSON is asking for the data.
    pub fn json<T: Serialize>(&self, value: &T) -> io::Result<()> {
        let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&text)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn is_json(&self) -> bool {
        self.resolved_format == OutputFormat::Json
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn marked(&self, marker: Marker, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(&self.decorate(marker, msg))
    }

    fn decorate(&self, marker: Marker, msg: &str) -> String {
        let glyph = marker.glyph();
        if self.no_color {
            return format!("{glyph} {msg}");
        }
        match marker {
            Marker::Success => format!("{} {}", glyph.green().bold(), msg.green()),
            Marker::Warning => format!("{} {}", glyph.yellow().bold(), msg.yellow()),
            Marker::Info => format!("{} {}", glyph.blue().bold(), msg.blue()),
        }
    }
}

/// Colour only for human output on a real terminal.
fn colour_enabled(disabled: bool, format: OutputFormat, is_term: bool) -> bool {
    !disabled && format == OutputFormat::Human && is_term
}

/// Unknown values fall back to `Auto`.
fn format_from_config(value: &str) -> OutputFormat {
    match value.to_ascii_lowercase().as_str() {
        "human" => OutputFormat::Human,
        "plain" => OutputFormat::Plain,
        "json" => OutputFormat::Json,
        _ => OutputFormat::Auto,
    }
}

fn table_lines(rows: &[(&str, String)]) -> Vec<String> {
    let width = rows.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
    rows.iter()
        .map(|(key, value)| format!("{key:<width$}  {value}"))
        .collect()
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn make_manager(quiet: bool, no_color: bool, format: OutputFormat) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
            output_format: format,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn quiet_suppresses_print() {
        let out = make_manager(true, true, OutputFormat::Plain);
        assert!(out.quiet);
        assert!(out.print("hello").is_ok());
    }

    #[test]
    fn plain_format_never_colours() {
        let out = make_manager(false, false, OutputFormat::Plain);
        assert!(out.no_color);
        assert_eq!(out.decorate(Marker::Success, "done"), "\u{2713} done");
    }

    #[test]
    fn colour_needs_human_format_and_a_terminal() {
        assert!(colour_enabled(false, OutputFormat::Human, true));
        assert!(!colour_enabled(false, OutputFormat::Human, false));
        assert!(!colour_enabled(true, OutputFormat::Human, true));
        assert!(!colour_enabled(false, OutputFormat::Plain, true));
        assert!(!colour_enabled(false, OutputFormat::Json, true));
    }

    #[test]
    fn coloured_decoration_keeps_the_message() {
        let mut out = make_manager(false, false, OutputFormat::Human);
        out.no_color = false;
        let line = out.decorate(Marker::Warning, "careful");
        assert!(line.contains("careful"));
        assert!(line.contains('\u{1b}'));
    }

    #[test]
    fn json_format_is_detected() {
        let out = make_manager(false, false, OutputFormat::Json);
        assert!(out.is_json());
        assert!(out.no_color);
    }

    #[test]
    fn default_config_follows_the_terminal() {
        let out = make_manager(false, false, OutputFormat::Auto);
        let expected = if io::stdout().is_terminal() {
            OutputFormat::Human
        } else {
            OutputFormat::Plain
        };
        assert_eq!(out.resolved_format, expected);
    }

    #[test]
    fn config_format_applies_when_flag_is_auto() {
        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: false,
            config: None,
            output_format: OutputFormat::Auto,
        };
        let mut config = AppConfig::default();
        config.output.format = "json".into();
        assert!(OutputManager::new(&args, &config).is_json());
    }

    #[test]
    fn config_format_parsing() {
        assert_eq!(format_from_config("Plain"), OutputFormat::Plain);
        assert_eq!(format_from_config("json"), OutputFormat::Json);
        assert_eq!(format_from_config("fancy"), OutputFormat::Auto);
    }

    #[test]
    fn table_rows_are_aligned() {
        let lines = table_lines(&[("module", "m".into()), ("model_name", "a.b".into())]);
        assert_eq!(lines, vec!["module      m", "model_name  a.b"]);
    }
}
