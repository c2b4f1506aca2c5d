use async_trait::async_trait;

use crate::tools::Tool;

use super::TodoClient;

pub struct GetTodo {
    client: TodoClient,
}

impl GetTodo {
    pub fn new(client: TodoClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for GetTodo {
    fn name(&self) -> String {
        "get_todo".into()
    }

    fn description(&self) -> String {
        "Show a single todo item. Input should be the ID of the todo.".into()
    }

    async fn call(&self, input: &str) -> String {
        match self.client.get(input).await {
            Ok(todo) => format!("Found todo: {}", todo.to_line()),
            Err(e) if e.is_not_found() => format!("Todo with ID {input} not found"),
            Err(e) => format!("Error getting todo: {e}"),
        }
    }
}
