use async_trait::async_trait;

use crate::tools::Tool;

use super::{Todo, TodoClient};

pub struct ListTodos {
    client: TodoClient,
}

impl ListTodos {
    pub fn new(client: TodoClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for ListTodos {
    fn name(&self) -> String {
        "list_todos".into()
    }

    fn description(&self) -> String {
        "List all todo items. No input required.".into()
    }

    async fn call(&self, _input: &str) -> String {
        match self.client.list().await {
            Ok(todos) => format_todos(&todos),
            Err(e) => format!("Error listing todos: {e}"),
        }
    }
}

fn format_todos(todos: &[Todo]) -> String {
    if todos.is_empty() {
        return "No todos found. The list is empty.".into();
    }

    let lines = todos.iter().map(Todo::to_line).collect::<Vec<_>>();
    format!("Current todos:\n{}", lines.join("\n"))
}
