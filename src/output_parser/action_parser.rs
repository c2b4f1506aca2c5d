use std::fmt;

use regex::Regex;

use crate::utils::helper::normalize_tool_name;

/// A tool invocation extracted from model output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedAction {
    pub name: String,
    pub input: String,
}

impl ParsedAction {
    pub fn new(name: impl Into<String>, input: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            input: input.into(),
        }
    }
}

/// Serialized form stored in the history, `name[input]`.
impl fmt::Display for ParsedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.name, self.input)
    }
}

/// One way a model may phrase a tool call. Group 1 is the tool name, group 2 the input.
#[derive(Debug, Clone)]
pub struct ActionGrammar {
    name: &'static str,
    re: Regex,
}

impl ActionGrammar {
    pub fn new(name: &'static str, re: Regex) -> Self {
        Self { name, re }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn capture(&self, text: &str) -> Option<ParsedAction> {
        let cap = self.re.captures(text)?;
        let name = cap.get(1)?.as_str();
        let input = cap.get(2).map_or("", |m| m.as_str());

        Some(ParsedAction::new(normalize_tool_name(name), input.trim()))
    }
}

/// Extracts thoughts and actions from free-text model output.
///
/// Grammars are tried in order and the first one matching anywhere in the text
/// wins; later grammars are never consulted once an earlier one matched.
#[derive(Debug, Clone)]
pub struct ActionParser {
    grammars: Vec<ActionGrammar>,
    thought: Regex,
}

impl ActionParser {
    pub fn new(grammars: Vec<ActionGrammar>) -> Self {
        Self {
            grammars,
            thought: Regex::new(r"(?is)Thought:\s*(.*?)(?:Action:|$)")
                .expect("Static regex is valid"),
        }
    }

    /// The default grammars, highest priority first:
    /// 1. `Action: name[input]`
    /// 2. `Action: name(input)`
    /// 3. `I'll use name with input: input`
    /// 4. `Using name: input`
    pub fn default_grammars() -> Vec<ActionGrammar> {
        [
            ("bracket", r"(?i)Action:\s*(\w+)\[(.*?)\]"),
            ("parenthesis", r"(?i)Action:\s*(\w+)\((.*?)\)"),
            ("ill_use", r"(?i)I'll use (\w+) with input: (.*)"),
            ("using", r"(?i)Using (\w+): (.*)"),
        ]
        .into_iter()
        .map(|(name, pattern)| {
            ActionGrammar::new(name, Regex::new(pattern).expect("Static regex is valid"))
        })
        .collect()
    }

    pub fn grammars(&self) -> &[ActionGrammar] {
        &self.grammars
    }

    pub fn parse_action(&self, text: &str) -> Option<ParsedAction> {
        self.grammars.iter().find_map(|grammar| {
            let action = grammar.capture(text)?;
            log::trace!("Action matched by grammar '{}': {action}", grammar.name());
            Some(action)
        })
    }

    /// Text after the first `Thought:` up to the next `Action:` or the end of the text.
    pub fn parse_thought(&self, text: &str) -> Option<String> {
        self.thought
            .captures(text)
            .and_then(|cap| cap.get(1))
            .map(|m| m.as_str().trim().to_string())
    }
}

impl Default for ActionParser {
    fn default() -> Self {
        Self::new(Self::default_grammars())
    }
}
