use std::collections::HashMap;

use crate::{
    agent::{
        AgentError, AgentOptions, History, PromptBuilder, ReActAgent, CONTEXT_VARIABLE,
        DEFAULT_REACT_PROMPT, DEFAULT_SYSTEM_PROMPT, QUESTION_VARIABLE, TOOLS_VARIABLE,
    },
    llm::LLM,
    output_parser::{ActionGrammar, ActionParser},
    tools::{Tool, ToolRegistry},
};

pub struct ReActAgentBuilder<'a, 'b> {
    tools: Option<Vec<Box<dyn Tool>>>,
    options: Option<AgentOptions>,
    system_prompt: Option<&'a str>,
    prompt_template: Option<&'b str>,
    grammars: Option<Vec<ActionGrammar>>,
}

impl<'a, 'b> ReActAgentBuilder<'a, 'b> {
    pub fn new() -> Self {
        Self {
            tools: None,
            options: None,
            system_prompt: None,
            prompt_template: None,
            grammars: None,
        }
    }

    pub fn tools(mut self, tools: impl IntoIterator<Item = impl Into<Box<dyn Tool>>>) -> Self {
        self.tools = Some(tools.into_iter().map(Into::into).collect());
        self
    }

    pub fn options(mut self, options: AgentOptions) -> Self {
        self.options = Some(options);
        self
    }

    pub fn max_steps(mut self, max_steps: usize) -> Self {
        self.options = Some(self.options.unwrap_or_default().with_max_steps(max_steps));
        self
    }

    pub fn system_prompt(mut self, system_prompt: &'a str) -> Self {
        self.system_prompt = Some(system_prompt);
        self
    }

    /// Replaces the instruction prompt. It must contain `{{question}}` and may
    /// use `{{tools}}` and `{{context}}`.
    pub fn prompt_template(mut self, prompt_template: &'b str) -> Self {
        self.prompt_template = Some(prompt_template);
        self
    }

    /// Replaces the action grammars. Order is match priority.
    pub fn grammars(mut self, grammars: Vec<ActionGrammar>) -> Self {
        self.grammars = Some(grammars);
        self
    }

    pub fn build<L: Into<Box<dyn LLM>>>(self, llm: L) -> Result<ReActAgent, AgentError> {
        let prompt = PromptBuilder::new(
            self.system_prompt.unwrap_or(DEFAULT_SYSTEM_PROMPT),
            self.prompt_template.unwrap_or(DEFAULT_REACT_PROMPT),
        );

        if !prompt.template().variables().contains(QUESTION_VARIABLE) {
            return Err(AgentError::InvalidPrompt(format!(
                "template must contain {{{{{QUESTION_VARIABLE}}}}}"
            )));
        }
        prompt.template().validate_input(&HashMap::from([
            (QUESTION_VARIABLE, String::new()),
            (TOOLS_VARIABLE, String::new()),
            (CONTEXT_VARIABLE, String::new()),
        ]))?;

        let parser = self
            .grammars
            .map(ActionParser::new)
            .unwrap_or_default();

        Ok(ReActAgent {
            llm: llm.into(),
            tools: ToolRegistry::new(self.tools.unwrap_or_default()),
            parser,
            prompt,
            options: self.options.unwrap_or_default(),
            history: History::new(),
        })
    }
}

impl Default for ReActAgentBuilder<'_, '_> {
    fn default() -> Self {
        Self::new()
    }
}
