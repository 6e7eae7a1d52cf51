//! The conversation loop.
//!
//! [`Agent`] owns the conversation history and mediates between the model
//! client and the tool registry: it sends the full history plus tool
//! definitions on every call, renders text blocks, dispatches tool-use
//! blocks, and feeds results back as a single user message. [`Agent::run`]
//! wraps this in a readline REPL; [`Agent::step`] performs exactly one
//! model round-trip, which keeps the state machine testable.

use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::config::Config;
use crate::error::{ProviderError, ToolError};
use crate::message::{ContentBlock, Message};
use crate::output::Renderer;
use crate::provider::ModelClient;
use crate::tools::ToolRegistry;

/// What the loop should do after a model round-trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// No tools ran; block for fresh user input.
    AwaitInput,
    /// Tool results were appended; re-invoke the model immediately.
    Continue,
}

/// A tool-augmented conversation with a model.
pub struct Agent {
    client: Box<dyn ModelClient>,
    tools: ToolRegistry,
    history: Vec<Message>,
}

impl Agent {
    pub fn new(client: Box<dyn ModelClient>, tools: ToolRegistry) -> Self {
        Self {
            client,
            tools,
            history: Vec::new(),
        }
    }

    /// The conversation so far. Append-only; nothing is ever rewritten.
    #[cfg(test)]
    pub fn history(&self) -> &[Message] {
        &self.history
    }

    /// Appends a fresh user message to the conversation.
    pub fn push_user(&mut self, text: &str) {
        self.history.push(Message::user(text));
    }

    /// Performs one model round-trip.
    ///
    /// Appends the assistant's response verbatim, then walks its blocks in
    /// order: text is rendered immediately, tool-use blocks are dispatched
    /// and their outcomes collected. A tool failure of any kind becomes an
    /// `is_error` result routed back to the model; it never aborts the turn.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] only for model-call failures. In that case
    /// nothing has been appended to history.
    pub async fn step(&mut self, renderer: &mut dyn Renderer) -> Result<Turn, ProviderError> {
        let definitions = self.tools.definitions();
        let response = self.client.complete(&self.history, &definitions).await?;

        self.history.push(Message::assistant(response.content.clone()));

        let mut results = Vec::new();
        for block in &response.content {
            match block {
                ContentBlock::Text { text } => renderer.text(text),
                ContentBlock::ToolUse { id, name, input } => {
                    renderer.tool_start(name, input);
                    let (content, is_error) = match self.dispatch(name, input.clone()).await {
                        Ok(output) => (output, false),
                        Err(err) => (err.to_string(), true),
                    };
                    renderer.tool_result(name, &content, is_error);
                    results.push(ContentBlock::tool_result(id.clone(), content, is_error));
                }
                // Tool results never appear in assistant responses.
                ContentBlock::ToolResult { .. } => {}
            }
        }

        if results.is_empty() {
            Ok(Turn::AwaitInput)
        } else {
            self.history.push(Message::tool_results(results));
            Ok(Turn::Continue)
        }
    }

    /// Resolves a tool by name and executes it.
    async fn dispatch(&self, name: &str, input: serde_json::Value) -> Result<String, ToolError> {
        match self.tools.get(name) {
            Some(tool) => tool.execute(input).await,
            None => Err(ToolError::NotRegistered(name.to_string())),
        }
    }

    /// Restores history after a failed model call.
    ///
    /// A fresh user message is popped so the operator can retype it. A
    /// tool-results message is kept: removing it would orphan the matching
    /// `tool_use` blocks in the preceding assistant message, and every
    /// later request would be rejected for the missing results.
    fn discard_failed_turn(&mut self) {
        let is_fresh_input = self.history.last().is_some_and(|m| {
            m.role == crate::message::Role::User
                && m.content
                    .iter()
                    .all(|b| matches!(b, ContentBlock::Text { .. }))
        });
        if is_fresh_input {
            self.history.pop();
        }
    }

    /// Runs the interactive REPL.
    ///
    /// Blocks for user input whenever the previous response contained no
    /// tool-use blocks; otherwise re-invokes the model on the tool results
    /// without prompting. Ctrl+D and Ctrl+C both exit cleanly with a
    /// farewell. Readline history is persisted under the cache directory.
    pub async fn run(&mut self, renderer: &mut dyn Renderer) -> Result<()> {
        let mut rl = DefaultEditor::new()?;
        let history_path = Config::cache_dir()?.join(crate::constants::HISTORY_FILENAME);
        if history_path.exists() {
            let _ = rl.load_history(&history_path);
        }

        let mut await_input = true;

        loop {
            if await_input {
                match rl.readline(&format!("{} ", ">".green().bold())) {
                    Ok(line) => {
                        let line = line.trim().to_string();
                        if line.is_empty() {
                            continue;
                        }
                        let _ = rl.add_history_entry(&line);
                        self.push_user(&line);
                        println!();
                    }
                    Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => {
                        println!("{}", "goodbye.".dimmed());
                        break;
                    }
                    Err(e) => {
                        renderer.error(&e.to_string());
                        break;
                    }
                }
            }

            // The model call is the other blocking point; honor an operator
            // interrupt there too. Tool handlers have no await points, so
            // cancellation lands at the call boundary, not mid-handler.
            let step = tokio::select! {
                result = self.step(renderer) => result,
                _ = tokio::signal::ctrl_c() => {
                    println!();
                    println!("{}", "goodbye.".dimmed());
                    break;
                }
            };

            match step {
                Ok(Turn::AwaitInput) => {
                    // Blank line between turns for readability.
                    println!();
                    await_input = true;
                }
                Ok(Turn::Continue) => {
                    await_input = false;
                }
                Err(e) => {
                    self.discard_failed_turn();
                    renderer.error(&e.to_string());
                    await_input = true;
                }
            }
        }

        if let Some(parent) = history_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let _ = rl.save_history(&history_path);

        Ok(())
    }
}
