//! The tool-call boundary.
//!
//! Each operation the agents expose is a `Tool`: a named callable with a
//! JSON-serializable input/output contract. This trait is the entire
//! integration surface with the surrounding voice-agent runtime; the demo
//! CLI drives the same surface directly.

use async_trait::async_trait;
use duet_core::error::{DuetError, Result};
use serde_json::{Value, json};
use std::sync::Arc;

/// A named operation invocable by the conversational layer.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Name used for invocation.
    fn name(&self) -> &str;

    /// Description shown to the LLM.
    fn description(&self) -> &str;

    /// JSON Schema for the arguments object.
    fn parameters(&self) -> Value;

    /// Executes the tool. Domain rejections are `{"ok": false, ...}`
    /// replies; only I/O faults surface as errors.
    async fn call(&self, args: Value) -> Result<Value>;
}

/// A named set of tools for one agent.
#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a tool, replacing any previous tool of the same name.
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        self.tools.retain(|t| t.name() != tool.name());
        self.tools.push(tool);
    }

    pub fn names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.iter().find(|t| t.name() == name)
    }

    /// Tool declarations for the LLM: name, description and parameter
    /// schema per tool, in registration order.
    pub fn specs(&self) -> Vec<Value> {
        self.tools
            .iter()
            .map(|t| {
                json!({
                    "name": t.name(),
                    "description": t.description(),
                    "parameters": t.parameters(),
                })
            })
            .collect()
    }

    /// Dispatches a tool call by name. An unknown name is a caller error.
    pub async fn dispatch(&self, name: &str, args: Value) -> Result<Value> {
        let tool = self
            .get(name)
            .ok_or_else(|| DuetError::not_found("tool", name))?;
        tracing::debug!(tool = name, "dispatching tool call");
        tool.call(args).await
    }
}
