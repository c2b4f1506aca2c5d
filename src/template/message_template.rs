use std::collections::{HashMap, HashSet};

use regex::{Captures, Regex};

use crate::{
    schemas::{Message, MessageType},
    template::TemplateError,
};

pub type TextReplacements<'a> = HashMap<&'a str, String>;

/// A message whose content contains `{{variable}}` slots.
#[derive(Debug, Clone)]
pub struct MessageTemplate {
    message_type: MessageType,
    template: String,
    variables: HashSet<String>,
}

impl MessageTemplate {
    pub fn from_jinja2(message_type: MessageType, content: impl Into<String>) -> Self {
        let template = content.into();
        let variables = variable_regex()
            .captures_iter(&template)
            .map(|cap| cap[1].to_string())
            .collect();

        Self {
            message_type,
            template,
            variables,
        }
    }

    /// Substitutes every slot in a single pass, so replacement values are never
    /// re-scanned for slots themselves.
    pub fn format(&self, input: &TextReplacements) -> Result<Message, TemplateError> {
        self.validate_input(input)?;

        let content = variable_regex()
            .replace_all(&self.template, |cap: &Captures| {
                input.get(&cap[1]).cloned().unwrap_or_default()
            })
            .into_owned();

        Ok(Message::new(self.message_type, content))
    }

    /// Returns a list of required input variable names for the template.
    pub fn variables(&self) -> HashSet<&str> {
        self.variables.iter().map(String::as_str).collect()
    }

    pub fn validate_input(&self, input: &TextReplacements) -> Result<(), TemplateError> {
        let mut missing_variables = self
            .variables()
            .into_iter()
            .filter(|variable| !input.contains_key(variable))
            .collect::<Vec<_>>();

        if !missing_variables.is_empty() {
            missing_variables.sort_unstable();
            return Err(TemplateError::MissingVariable(missing_variables.join(", ")));
        }

        Ok(())
    }
}

fn variable_regex() -> Regex {
    Regex::new(r"\{\{(\w+)\}\}").expect("Static regex is valid")
}
