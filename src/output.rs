//! Output rendering abstraction for koda.
//!
//! Defines the [`Renderer`] trait that decouples agent events from the
//! display layer. [`StdoutRenderer`] prints to the terminal; tests use a
//! recording renderer instead.

use colored::Colorize;

/// Trait for rendering agent events.
///
/// The loop emits whole blocks, not streamed tokens: assistant text,
/// tool invocation announcements, tool results, and errors.
pub trait Renderer {
    /// Render one assistant text block.
    fn text(&mut self, text: &str);

    /// Announce a tool invocation before it runs.
    fn tool_start(&mut self, name: &str, args: &serde_json::Value);

    /// Render the outcome of a tool invocation.
    fn tool_result(&mut self, name: &str, content: &str, is_error: bool);

    /// Render a loop-level error (provider failure).
    fn error(&mut self, err: &str);
}

/// Renders agent events directly to stdout.
pub struct StdoutRenderer;

impl StdoutRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for StdoutRenderer {
    fn text(&mut self, text: &str) {
        println!("{}: {}", "koda".yellow().bold(), text);
    }

    fn tool_start(&mut self, name: &str, args: &serde_json::Value) {
        println!("{}: {}({})", "tool".green().bold(), name, args);
    }

    fn tool_result(&mut self, name: &str, content: &str, is_error: bool) {
        if is_error {
            println!("{} {} failed: {}", "!".red().bold(), name, content);
        } else {
            // Successful results go back to the model, not the screen;
            // show a short confirmation so the operator can follow along.
            let summary = content.lines().next().unwrap_or("");
            println!("{}", format!("  -> {}", summary).dimmed());
        }
    }

    fn error(&mut self, err: &str) {
        eprintln!("{} {}", "error:".red().bold(), err);
    }
}
