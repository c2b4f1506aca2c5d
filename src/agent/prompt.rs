use std::collections::HashMap;

use indoc::indoc;

use crate::{
    agent::History,
    schemas::{Message, MessageType, Step},
    template::{MessageTemplate, TemplateError},
};

pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful ReAct agent that manages todos.";

pub const DEFAULT_REACT_PROMPT: &str = indoc! {"
    You are a ReAct agent that helps manage a todo list application.

    Available tools:
    {{tools}}

    To use a tool, format your response EXACTLY as:
    Thought: [your reasoning about what to do next]
    Action: tool_name[input]

    After receiving an observation, think again and either use another tool or provide the final answer.

    Question: {{question}}

    {{context}}

    What is your next thought and action? Remember to format as:
    Thought: [reasoning]
    Action: tool_name[input]
"};

/// Number of most recent steps shown to the model.
pub const CONTEXT_WINDOW: usize = 6;

pub const QUESTION_VARIABLE: &str = "question";
pub const TOOLS_VARIABLE: &str = "tools";
pub const CONTEXT_VARIABLE: &str = "context";

/// Renders the instruction prompt sent to the completion service on every step.
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    system_prompt: String,
    template: MessageTemplate,
}

impl PromptBuilder {
    pub fn new(system_prompt: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            system_prompt: system_prompt.into(),
            template: MessageTemplate::from_jinja2(MessageType::Human, template),
        }
    }

    pub fn template(&self) -> &MessageTemplate {
        &self.template
    }

    pub fn render(
        &self,
        question: &str,
        tool_listing: &str,
        context: &str,
    ) -> Result<String, TemplateError> {
        let input = HashMap::from([
            (QUESTION_VARIABLE, question.to_string()),
            (TOOLS_VARIABLE, tool_listing.to_string()),
            (CONTEXT_VARIABLE, context.to_string()),
        ]);

        Ok(self.template.format(&input)?.content)
    }

    /// The system message followed by the rendered prompt as the user message.
    pub fn messages(
        &self,
        question: &str,
        tool_listing: &str,
        context: &str,
    ) -> Result<Vec<Message>, TemplateError> {
        Ok(vec![
            Message::new_system_message(self.system_prompt.as_str()),
            Message::new_human_message(self.render(question, tool_listing, context)?),
        ])
    }

    /// `Previous steps:` followed by the last [`CONTEXT_WINDOW`] steps, one per
    /// line. Empty when there are no steps.
    pub fn render_context(history: &History) -> String {
        if history.is_empty() {
            return String::new();
        }

        let recent = history.recent(CONTEXT_WINDOW);
        std::iter::once("Previous steps:".to_string())
            .chain(recent.iter().map(Step::to_string))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_SYSTEM_PROMPT, DEFAULT_REACT_PROMPT)
    }
}
