use async_trait::async_trait;

use crate::tools::Tool;

use super::{TodoClient, TodoUpdate};

pub struct CompleteTodo {
    client: TodoClient,
}

impl CompleteTodo {
    pub fn new(client: TodoClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for CompleteTodo {
    fn name(&self) -> String {
        "complete_todo".into()
    }

    fn description(&self) -> String {
        "Mark a todo item as completed. Input should be the ID of the todo.".into()
    }

    async fn call(&self, input: &str) -> String {
        let update = TodoUpdate::default().with_completed(true);
        match self.client.update(input, &update).await {
            Ok(todo) => format!(
                "Successfully completed todo: '{}' with ID {}",
                todo.title, todo.id
            ),
            Err(e) if e.is_not_found() => format!("Todo with ID {input} not found"),
            Err(e) => format!("Error completing todo: {e}"),
        }
    }
}
