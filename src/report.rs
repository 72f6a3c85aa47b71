//! The aggregator and reporter.
//!
//! Runs the evaluator over the full registry, streams a colorized
//! per-key line for each outcome as it evaluates, then renders a summary
//! and the final pass/fail decision. Successful values are echoed masked so
//! full secrets never land in logs.
//!
//! Output goes through `&mut dyn Write`; tests capture it into a buffer.
//!
//! # Output format
//!
//! ```text
//! ============================================================
//! Checking environment configuration
//! ============================================================
//!
//! Required:
//! ✓ PROJECT_NAME = my-app
//!
//! Optional:
//! ℹ GITHUB_TOKEN (not set)
//!
//! ------------------------------------------------------------
//! ✓ environment configuration is valid
//! ```

use std::io::Write;

use crate::error::Violation;
use crate::rules::RuleSet;
use crate::snapshot::Snapshot;
use crate::validate::{evaluate, Verdict};

/// How many characters of a validated value are echoed before masking.
const MASK_VISIBLE_CHARS: usize = 10;

/// The outcome of one full validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Report {
    /// Diagnostic lines for required-key failures, in registry order.
    pub errors: Vec<String>,
    /// Diagnostic lines for optional-key failures, in registry order.
    pub warnings: Vec<String>,
    /// True when no errors and, in strict mode, no warnings.
    pub passed: bool,
}

/// Color output option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorOption {
    /// Auto-detect based on terminal capability.
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

/// ANSI color codes for terminal output.
struct Colors {
    success: &'static str,
    warning: &'static str,
    error: &'static str,
    info: &'static str,
    reset: &'static str,
}

impl Colors {
    fn enabled() -> Self {
        Self {
            success: "\x1b[32m",   // green
            warning: "\x1b[1;33m", // bold yellow
            error: "\x1b[1;31m",   // bold red
            info: "\x1b[1;36m",    // bold cyan
            reset: "\x1b[0m",
        }
    }

    fn disabled() -> Self {
        Self {
            success: "",
            warning: "",
            error: "",
            info: "",
            reset: "",
        }
    }
}

/// Truncate a validated value for safe display.
///
/// Values longer than ten characters echo as the first ten characters
/// followed by `...`; shorter values echo unmasked.
pub fn mask(value: &str) -> String {
    if value.chars().count() > MASK_VISIBLE_CHARS {
        let visible: String = value.chars().take(MASK_VISIBLE_CHARS).collect();
        format!("{}...", visible)
    } else {
        value.to_string()
    }
}

/// Detect if stdout is a TTY for color support.
fn should_use_color(option: ColorOption) -> bool {
    match option {
        ColorOption::Always => true,
        ColorOption::Never => false,
        ColorOption::Auto => {
            use std::io::IsTerminal;
            std::io::stdout().is_terminal()
        }
    }
}

/// Streams per-key status lines and the summary to a writer.
pub struct Reporter<'w> {
    colors: Colors,
    writer: &'w mut dyn Write,
}

impl<'w> Reporter<'w> {
    /// Create a reporter writing to the given sink.
    pub fn new(color: ColorOption, writer: &'w mut dyn Write) -> Self {
        let colors = if should_use_color(color) {
            Colors::enabled()
        } else {
            Colors::disabled()
        };
        Self { colors, writer }
    }

    /// Print a success line.
    pub fn success(&mut self, message: &str) {
        let c = &self.colors;
        writeln!(self.writer, "{}✓ {}{}", c.success, message, c.reset).ok();
    }

    /// Print a warning line.
    pub fn warning(&mut self, message: &str) {
        let c = &self.colors;
        writeln!(self.writer, "{}⚠ {}{}", c.warning, message, c.reset).ok();
    }

    /// Print an error line.
    pub fn error(&mut self, message: &str) {
        let c = &self.colors;
        writeln!(self.writer, "{}✗ {}{}", c.error, message, c.reset).ok();
    }

    /// Print an informational line.
    pub fn info(&mut self, message: &str) {
        let c = &self.colors;
        writeln!(self.writer, "{}ℹ {}{}", c.info, message, c.reset).ok();
    }

    /// Run every rule against the snapshot and render the report.
    ///
    /// Per-key lines are written as each rule is evaluated, not after the
    /// pass completes; interactive callers depend on this streaming
    /// behavior. The returned report is a pure function of the rule set,
    /// the snapshot, and `strict`.
    pub fn run(&mut self, rules: &RuleSet, snapshot: &Snapshot, strict: bool) -> Report {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        writeln!(self.writer).ok();
        writeln!(self.writer, "{}", "=".repeat(60)).ok();
        writeln!(self.writer, "Checking environment configuration").ok();
        writeln!(self.writer, "{}", "=".repeat(60)).ok();
        writeln!(self.writer).ok();

        writeln!(self.writer, "Required:").ok();
        for rule in rules.required_rules() {
            match evaluate(rule, snapshot) {
                Verdict::Valid => {
                    let echoed = mask(snapshot.get(rule.key()));
                    self.success(&format!("{} = {}", rule.key(), echoed));
                }
                Verdict::Unset { .. } => {
                    let line = Violation::Missing {
                        key: rule.key().to_string(),
                    }
                    .to_string();
                    self.error(&line);
                    errors.push(line);
                }
                Verdict::Invalid(violation) => {
                    let line = violation.to_string();
                    self.error(&line);
                    errors.push(line);
                }
            }
        }

        writeln!(self.writer).ok();
        writeln!(self.writer, "Optional:").ok();
        for rule in rules.optional_rules() {
            match evaluate(rule, snapshot) {
                Verdict::Unset { .. } => {
                    self.info(&format!("{} (not set)", rule.key()));
                }
                Verdict::Valid => {
                    let echoed = mask(snapshot.get(rule.key()));
                    self.success(&format!("{} = {}", rule.key(), echoed));
                }
                Verdict::Invalid(violation) => {
                    let line = violation.to_string();
                    self.warning(&line);
                    warnings.push(line);
                }
            }
        }

        writeln!(self.writer).ok();
        writeln!(self.writer, "{}", "-".repeat(60)).ok();

        if !errors.is_empty() {
            self.error(&format!("{} error(s):", errors.len()));
            for error in &errors {
                writeln!(self.writer, "  - {}", error).ok();
            }
            writeln!(
                self.writer,
                "fix the configuration above before starting the application"
            )
            .ok();
        }

        if !warnings.is_empty() {
            self.warning(&format!("{} warning(s):", warnings.len()));
            for warning in &warnings {
                writeln!(self.writer, "  - {}", warning).ok();
            }
            if strict {
                self.error("strict mode: warnings are treated as errors");
            }
        }

        let passed = errors.is_empty() && (!strict || warnings.is_empty());
        if passed {
            self.success("environment configuration is valid");
        }

        Report {
            errors,
            warnings,
            passed,
        }
    }
}
