use crate::{
    agent::{fallback_response, AgentOptions, History, PromptBuilder},
    llm::LLM,
    output_parser::ActionParser,
    schemas::{RunResult, Step},
    tools::ToolRegistry,
    utils::helper::contains_ignore_case,
};

/// Marker that ends a run as soon as an observation contains it.
pub const SUCCESS_MARKER: &str = "successfully";
pub const NO_RESULT_ANSWER: &str = "I couldn't complete the requested task.";
pub const MAX_STEPS_PREFIX: &str = "I've reached the maximum number of steps. ";

/// Alternates between asking the model for its next thought and action and
/// running the chosen tool, until the task looks done.
///
/// Every step is awaited in order: at most one completion request or tool call
/// is in flight at a time. History is kept across runs until [`ReActAgent::reset`].
pub struct ReActAgent {
    pub(super) llm: Box<dyn LLM>,
    pub(super) tools: ToolRegistry,
    pub(super) parser: ActionParser,
    pub(super) prompt: PromptBuilder,
    pub(super) options: AgentOptions,
    pub(super) history: History,
}

impl ReActAgent {
    pub fn new(llm: impl Into<Box<dyn LLM>>, tools: ToolRegistry) -> Self {
        Self {
            llm: llm.into(),
            tools,
            parser: ActionParser::default(),
            prompt: PromptBuilder::default(),
            options: AgentOptions::default(),
            history: History::new(),
        }
    }

    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    pub fn options(&self) -> &AgentOptions {
        &self.options
    }

    pub fn history(&self) -> &[Step] {
        self.history.steps()
    }

    pub fn reset(&mut self) {
        self.history.clear();
    }

    /// Runs the reason/act loop for `question`. Never fails: unavailable
    /// completions fall back to a scripted response and tool failures come
    /// back as observations.
    pub async fn run(&mut self, question: &str) -> RunResult {
        if !self.history.is_empty() {
            log::debug!(
                "Starting run with {} steps left from earlier runs",
                self.history.len()
            );
        }
        log::info!("Question: {question}");

        let max_steps = self.options.max_steps;
        for step in 0..max_steps {
            let response = self.next_response(question).await;

            if let Some(thought) = self.parser.parse_thought(&response) {
                log::info!("Thought {}: {thought}", step + 1);
                self.history.push_thought(thought);
            }

            let Some(action) = self.parser.parse_action(&response) else {
                let answer = self.final_answer();
                return self.finish(answer);
            };
            log::info!("Action {}: {action}", step + 1);

            let observation = self.tools.execute(&action.name, &action.input).await;
            log::info!("Observation {}: {observation}", step + 1);

            let stop = Self::should_stop(&observation, step, max_steps);
            self.history.push_action(&action, observation);

            if stop {
                let answer = self.final_answer();
                return self.finish(answer);
            }
        }

        let answer = format!("{MAX_STEPS_PREFIX}{}", self.final_answer());
        self.finish(answer)
    }

    /// Derives the answer from the most recent observation of the whole history.
    pub fn final_answer(&self) -> String {
        match self.history.last_observation() {
            None => NO_RESULT_ANSWER.to_string(),
            Some(observation) if contains_ignore_case(observation, SUCCESS_MARKER) => {
                observation.to_string()
            }
            Some(observation) => format!("Based on my actions: {observation}"),
        }
    }

    // Same as `step >= max_steps - 2` in signed arithmetic.
    fn should_stop(observation: &str, step: usize, max_steps: usize) -> bool {
        contains_ignore_case(observation, SUCCESS_MARKER) || step + 2 >= max_steps
    }

    async fn next_response(&self, question: &str) -> String {
        let context = PromptBuilder::render_context(&self.history);
        let messages = match self
            .prompt
            .messages(question, &self.tools.describe(), &context)
        {
            Ok(messages) => messages,
            Err(e) => {
                log::warn!("Failed to render prompt, using fallback: {e}");
                return fallback_response(question).to_string();
            }
        };

        for message in &messages {
            log::debug!("{message}");
        }

        let response = self.llm.complete(&messages).await;
        if response.is_empty() {
            log::warn!("Empty completion, using fallback");
            return fallback_response(question).to_string();
        }

        response
    }

    fn finish(&mut self, answer: String) -> RunResult {
        log::info!("Answer: {answer}");
        self.history.push_answer(answer.clone());
        RunResult::new(answer, self.history.steps())
    }
}

#[cfg(test)]
mod tests {
    use std::{
        collections::VecDeque,
        sync::{Arc, Mutex},
    };

    use async_trait::async_trait;

    use super::*;
    use crate::{
        agent::ReActAgentBuilder,
        llm::LLMError,
        schemas::{Message, StepKind},
        tools::Tool,
    };

    #[derive(Clone, Default)]
    struct ScriptedLLM {
        responses: Arc<Mutex<VecDeque<Result<String, LLMError>>>>,
        requests: Arc<Mutex<Vec<Vec<Message>>>>,
    }

    impl ScriptedLLM {
        fn new(responses: impl IntoIterator<Item = &'static str>) -> Self {
            let llm = Self::default();
            llm.responses
                .lock()
                .unwrap()
                .extend(responses.into_iter().map(|r| Ok(r.to_string())));
            llm
        }

        fn push_error(&self, message: &str) {
            self.responses
                .lock()
                .unwrap()
                .push_back(Err(LLMError::OtherError(message.into())));
        }

        fn requests(&self) -> Vec<Vec<Message>> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl LLM for ScriptedLLM {
        async fn generate(&self, messages: &[Message]) -> Result<String, LLMError> {
            self.requests.lock().unwrap().push(messages.to_vec());
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(String::new()))
        }
    }

    #[derive(Clone)]
    struct FakeTool {
        name: &'static str,
        output: &'static str,
        calls: Arc<Mutex<Vec<String>>>,
    }

    impl FakeTool {
        fn new(name: &'static str, output: &'static str) -> Self {
            Self {
                name,
                output,
                calls: Arc::default(),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Tool for FakeTool {
        fn name(&self) -> String {
            self.name.into()
        }

        fn description(&self) -> String {
            format!("Fake {}.", self.name)
        }

        async fn call(&self, input: &str) -> String {
            self.calls.lock().unwrap().push(input.into());
            self.output.into()
        }
    }

    const EMPTY_LIST: &str = "No todos found. The list is empty.";
    const ADDED: &str = "Successfully added todo: 'Buy milk' with ID 1";

    fn todo_tools() -> (FakeTool, FakeTool, FakeTool) {
        (
            FakeTool::new("add_todo", ADDED),
            FakeTool::new("delete_todo", "Todo with ID 1 not found"),
            FakeTool::new("list_todos", EMPTY_LIST),
        )
    }

    fn agent(llm: &ScriptedLLM, tools: Vec<Box<dyn Tool>>, max_steps: usize) -> ReActAgent {
        ReActAgentBuilder::new()
            .tools(tools)
            .max_steps(max_steps)
            .build(llm.clone())
            .unwrap()
    }

    #[tokio::test]
    async fn test_continues_after_unsuccessful_observation() {
        let llm = ScriptedLLM::new([
            "Thought: I need to list all todos.\nAction: list_todos[]",
            "Thought: The list is empty, nothing else to do.",
        ]);
        let (add, delete, list) = todo_tools();
        let mut agent = agent(&llm, crate::tools_vec![add, delete, list.clone()], 10);

        let result = agent.run("Show me all the todos").await;

        assert_eq!(result.answer, format!("Based on my actions: {EMPTY_LIST}"));
        assert_eq!(
            agent.history(),
            &[
                Step::Thought("I need to list all todos.".into()),
                Step::Action("list_todos[]".into()),
                Step::Observation(EMPTY_LIST.into()),
                Step::Thought("The list is empty, nothing else to do.".into()),
                Step::Answer(format!("Based on my actions: {EMPTY_LIST}")),
            ]
        );
        assert_eq!(list.calls(), vec![""]);
        assert_eq!(llm.requests().len(), 2);
    }

    #[tokio::test]
    async fn test_single_step_budget_stops_after_first_action() {
        let llm = ScriptedLLM::new([
            "Thought: I need to list all todos.\nAction: list_todos[]",
            "Thought: never requested\nAction: add_todo[nope]",
        ]);
        let (add, delete, list) = todo_tools();
        let mut agent = agent(&llm, crate::tools_vec![add.clone(), delete, list], 1);

        let result = agent.run("Show me all the todos").await;

        assert_eq!(result.answer, format!("Based on my actions: {EMPTY_LIST}"));
        assert_eq!(llm.requests().len(), 1);
        assert!(add.calls().is_empty());
        assert_eq!(result.history.last().unwrap().kind, StepKind::Answer);
    }

    #[tokio::test]
    async fn test_no_thought_no_action_on_fresh_agent() {
        let llm = ScriptedLLM::new(["I am not following any format."]);
        let (add, delete, list) = todo_tools();
        let mut agent = agent(&llm, crate::tools_vec![add, delete, list], 10);

        let result = agent.run("What is the weather?").await;

        assert_eq!(result.answer, NO_RESULT_ANSWER);
        assert_eq!(agent.history(), &[Step::Answer(NO_RESULT_ANSWER.into())]);
    }

    #[tokio::test]
    async fn test_empty_completions_use_fallback() {
        let llm = ScriptedLLM::default();
        let (add, delete, list) = todo_tools();
        let mut agent = agent(&llm, crate::tools_vec![add, delete, list.clone()], 10);

        let result = agent.run("Please show my list").await;

        assert_eq!(
            &agent.history()[..3],
            &[
                Step::Thought("I need to list all todos.".into()),
                Step::Action("list_todos[]".into()),
                Step::Observation(EMPTY_LIST.into()),
            ]
        );
        // Stops on the ninth action, when `step >= max_steps - 2`.
        assert_eq!(list.calls().len(), 9);
        assert_eq!(agent.history().len(), 9 * 3 + 1);
        assert_eq!(result.answer, format!("Based on my actions: {EMPTY_LIST}"));
    }

    #[tokio::test]
    async fn test_success_observation_is_returned_verbatim() {
        let llm = ScriptedLLM::new([
            "Thought: I need to add a todo.\nAction: add_todo[Buy milk]",
            "Thought: unreachable\nAction: list_todos[]",
        ]);
        let (add, delete, list) = todo_tools();
        let mut agent = agent(&llm, crate::tools_vec![add.clone(), delete, list.clone()], 10);

        let result = agent.run("Add a todo to buy milk").await;

        assert_eq!(result.answer, ADDED);
        assert_eq!(add.calls(), vec!["Buy milk"]);
        assert!(list.calls().is_empty());
        assert_eq!(llm.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_zero_steps_never_calls_llm() {
        let llm = ScriptedLLM::new(["Thought: x\nAction: list_todos[]"]);
        let (add, delete, list) = todo_tools();
        let mut agent = agent(&llm, crate::tools_vec![add, delete, list], 0);

        let result = agent.run("Show me all the todos").await;

        assert_eq!(
            result.answer,
            "I've reached the maximum number of steps. I couldn't complete the requested task."
        );
        assert!(llm.requests().is_empty());
        assert_eq!(agent.history().len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_tool_becomes_observation() {
        let llm = ScriptedLLM::new([
            "Thought: Let me try.\nAction: Fly_Away[home]",
            "Thought: That did not work.",
        ]);
        let (add, delete, list) = todo_tools();
        let mut agent = agent(&llm, crate::tools_vec![add, delete, list], 10);

        let result = agent.run("Fly me home").await;

        assert_eq!(agent.history()[1], Step::Action("fly_away[home]".into()));
        assert_eq!(
            agent.history()[2],
            Step::Observation("Error: Tool 'fly_away' not found".into())
        );
        assert_eq!(
            result.answer,
            "Based on my actions: Error: Tool 'fly_away' not found"
        );
    }

    #[tokio::test]
    async fn test_llm_error_uses_fallback() {
        let llm = ScriptedLLM::default();
        llm.push_error("connection refused");
        let (add, delete, list) = todo_tools();
        let mut agent = agent(&llm, crate::tools_vec![add.clone(), delete, list], 10);

        let result = agent.run("Add something").await;

        assert_eq!(add.calls(), vec!["New todo item"]);
        assert_eq!(result.answer, ADDED);
    }

    #[tokio::test]
    async fn test_prompt_carries_tools_and_context() {
        let llm = ScriptedLLM::new([
            "Thought: I need to list all todos.\nAction: list_todos[]",
            "Thought: Done.",
        ]);
        let (add, delete, list) = todo_tools();
        let mut agent = agent(&llm, crate::tools_vec![add, delete, list], 10);

        agent.run("Show me all the todos").await;

        let requests = llm.requests();
        assert_eq!(requests[0].len(), 2);
        assert_eq!(
            requests[0][0],
            Message::new_system_message("You are a helpful ReAct agent that manages todos.")
        );

        let first = &requests[0][1].content;
        assert!(first.contains("- add_todo: Fake add_todo.\n- delete_todo: Fake delete_todo.\n- list_todos: Fake list_todos."));
        assert!(first.contains("Question: Show me all the todos"));
        assert!(!first.contains("Previous steps:"));

        let second = &requests[1][1].content;
        assert!(second.contains(&format!(
            "Previous steps:\nThought: I need to list all todos.\nAction: list_todos[]\nObservation: {EMPTY_LIST}"
        )));
    }

    #[tokio::test]
    async fn test_history_carries_over_until_reset() {
        let llm = ScriptedLLM::new([
            "Thought: I need to list all todos.\nAction: list_todos[]",
            "Thought: Done.",
            "Thought: Nothing to do for this one.",
        ]);
        let (add, delete, list) = todo_tools();
        let mut agent = agent(&llm, crate::tools_vec![add, delete, list], 10);

        agent.run("Show me all the todos").await;
        let second = agent.run("Tell me a joke").await;

        // The previous run's observation still drives the answer.
        assert_eq!(second.answer, format!("Based on my actions: {EMPTY_LIST}"));
        assert_eq!(second.history.len(), 7);
        assert!(llm.requests()[2][1].content.contains("Previous steps:"));

        agent.reset();
        assert!(agent.history().is_empty());

        let third = agent.run("Tell me a joke").await;
        assert_eq!(third.answer, NO_RESULT_ANSWER);
        assert!(!llm.requests()[3][1].content.contains("Previous steps:"));
    }

    #[tokio::test]
    async fn test_runs_are_deterministic() {
        let script = [
            "Thought: I need to list all todos.\nAction: list_todos[]",
            "Using delete_todo: 1",
            "Thought: Done.",
        ];

        let mut results = Vec::new();
        for _ in 0..2 {
            let llm = ScriptedLLM::new(script);
            let (add, delete, list) = todo_tools();
            let mut agent = agent(&llm, crate::tools_vec![add, delete, list], 10);
            results.push(agent.run("Clean up my list").await);
        }

        assert_eq!(results[0], results[1]);
        assert_eq!(
            results[0].answer,
            "Based on my actions: Todo with ID 1 not found"
        );
    }

    #[test]
    fn test_should_stop() {
        assert!(ReActAgent::should_stop("Deleted SUCCESSFULLY", 0, 10));
        assert!(!ReActAgent::should_stop(EMPTY_LIST, 0, 10));
        assert!(!ReActAgent::should_stop(EMPTY_LIST, 7, 10));
        assert!(ReActAgent::should_stop(EMPTY_LIST, 8, 10));
        assert!(ReActAgent::should_stop(EMPTY_LIST, 0, 1));
        assert!(ReActAgent::should_stop(EMPTY_LIST, 0, 2));
    }
}
