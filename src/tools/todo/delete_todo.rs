use async_trait::async_trait;

use crate::tools::Tool;

use super::TodoClient;

pub struct DeleteTodo {
    client: TodoClient,
}

impl DeleteTodo {
    pub fn new(client: TodoClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for DeleteTodo {
    fn name(&self) -> String {
        "delete_todo".into()
    }

    fn description(&self) -> String {
        "Delete a todo item. Input should be the ID of the todo to delete.".into()
    }

    async fn call(&self, input: &str) -> String {
        match self.client.delete(input).await {
            Ok(()) => format!("Successfully deleted todo with ID {input}"),
            Err(e) if e.is_not_found() => format!("Todo with ID {input} not found"),
            Err(e) => format!("Error deleting todo: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn delete_with_status(status: usize) -> String {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("DELETE", "/todos/1")
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message": "Todo deleted"}"#)
            .create_async()
            .await;

        DeleteTodo::new(TodoClient::new(&server.url()).unwrap())
            .call("1")
            .await
    }

    #[tokio::test]
    async fn test_delete_todo() {
        assert_eq!(
            delete_with_status(200).await,
            "Successfully deleted todo with ID 1"
        );
    }

    #[tokio::test]
    async fn test_delete_todo_not_found() {
        assert_eq!(delete_with_status(404).await, "Todo with ID 1 not found");
    }

    #[tokio::test]
    async fn test_delete_todo_server_error() {
        assert_eq!(
            delete_with_status(500).await,
            "Error deleting todo: HTTP 500"
        );
    }

    #[tokio::test]
    async fn test_delete_todo_unreachable() {
        let tool = DeleteTodo::new(TodoClient::new("http://127.0.0.1:1").unwrap());

        assert!(tool.call("1").await.starts_with("Error deleting todo: "));
    }
}
