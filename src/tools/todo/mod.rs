mod model;
pub use model::*;

mod client;
pub use client::*;

mod add_todo;
pub use add_todo::*;

mod delete_todo;
pub use delete_todo::*;

mod list_todos;
pub use list_todos::*;

mod get_todo;
pub use get_todo::*;

mod complete_todo;
pub use complete_todo::*;

use crate::tools::Tool;

/// `add_todo`, `delete_todo` and `list_todos`, in that order, sharing one client.
pub fn default_todo_tools(client: &TodoClient) -> Vec<Box<dyn Tool>> {
    crate::tools_vec![
        AddTodo::new(client.clone()),
        DeleteTodo::new(client.clone()),
        ListTodos::new(client.clone()),
    ]
}
