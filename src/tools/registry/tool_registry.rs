use std::fmt;

use crate::{tools::Tool, utils::helper::normalize_tool_name};

/// The fixed set of tools an agent can invoke, keyed by lowercase name.
///
/// Iteration order is registration order. Registering a second tool under an
/// existing name replaces the first one in place.
#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<(String, Box<dyn Tool>)>,
}

impl ToolRegistry {
    pub fn new(tools: impl IntoIterator<Item = impl Into<Box<dyn Tool>>>) -> Self {
        let mut registry = Self::default();
        for tool in tools {
            registry.register(tool);
        }
        registry
    }

    pub fn with_tool(mut self, tool: impl Into<Box<dyn Tool>>) -> Self {
        self.register(tool);
        self
    }

    fn register(&mut self, tool: impl Into<Box<dyn Tool>>) {
        let tool = tool.into();
        let key = normalize_tool_name(&tool.name());

        match self.tools.iter_mut().find(|(name, _)| *name == key) {
            Some(slot) => {
                log::debug!("Tool '{key}' registered twice, keeping the latest");
                slot.1 = tool;
            }
            None => self.tools.push((key, tool)),
        }
    }

    /// Exact lookup against the normalized keys.
    pub fn get(&self, tool_name: &str) -> Option<&dyn Tool> {
        self.tools
            .iter()
            .find(|(name, _)| name == tool_name)
            .map(|(_, tool)| tool.as_ref())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tools.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Capability listing, one `- name: description` line per tool.
    pub fn describe(&self) -> String {
        self.tools
            .iter()
            .map(|(_, tool)| tool.to_plain_description())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Runs the named tool. An unknown name yields an error text rather than a failure.
    pub async fn execute(&self, tool_name: &str, input: &str) -> String {
        match self.get(tool_name) {
            Some(tool) => tool.call(input).await,
            None => {
                log::warn!("Agent tried to use nonexistent tool '{tool_name}'");
                format!("Error: Tool '{tool_name}' not found")
            }
        }
    }
}

impl fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.names().collect::<Vec<_>>())
            .finish()
    }
}
