use react_todo_agent::{agent::ReActAgentBuilder, settings::Settings, tools::default_todo_tools};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let settings = Settings::from_env();
    let client = settings.todo_client().unwrap();

    let mut agent = ReActAgentBuilder::new()
        .tools(default_todo_tools(&client))
        .max_steps(settings.max_steps)
        .build(settings.llm())
        .unwrap();

    for question in [
        "Show me all the todos",
        "Add a todo to buy groceries",
        "Delete todo with ID 1",
    ] {
        let result = agent.run(question).await;
        println!("Question: {question}");
        println!("Answer: {}", result.answer);
        println!("{}", "=".repeat(50));
        agent.reset();
    }
}
