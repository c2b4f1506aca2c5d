use async_trait::async_trait;

use crate::tools::Tool;

use super::{NewTodo, TodoClient};

pub struct AddTodo {
    client: TodoClient,
}

impl AddTodo {
    pub fn new(client: TodoClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for AddTodo {
    fn name(&self) -> String {
        "add_todo".into()
    }

    fn description(&self) -> String {
        "Add a new todo item. Input should be the title of the todo.".into()
    }

    async fn call(&self, input: &str) -> String {
        match self.client.create(&NewTodo::new(input)).await {
            Ok(todo) => format!(
                "Successfully added todo: '{}' with ID {}",
                todo.title, todo.id
            ),
            Err(e) => format!("Error adding todo: {e}"),
        }
    }
}
