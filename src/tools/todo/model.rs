use serde::{Deserialize, Serialize};

/// A todo item as returned by the todo API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Todo {
    pub fn status_marker(&self) -> char {
        if self.completed {
            '✓'
        } else {
            '○'
        }
    }

    /// `✓ [1] Buy milk`
    pub fn to_line(&self) -> String {
        format!("{} [{}] {}", self.status_marker(), self.id, self.title)
    }
}

/// Body of `POST /todos`.
#[derive(Debug, Clone, Serialize)]
pub struct NewTodo {
    pub title: String,
}

impl NewTodo {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// Body of `PUT /todos/{id}`. Unset fields are left untouched by the API.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TodoUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TodoUpdate {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_todo_deserialize_with_missing_optional_fields() {
        let todo: Todo = serde_json::from_value(json!({ "id": 3, "title": "Walk the dog" })).unwrap();

        assert!(!todo.completed);
        assert_eq!(todo.created_at, None);
        assert_eq!(todo.to_line(), "○ [3] Walk the dog");
    }

    #[test]
    fn test_todo_update_skips_unset_fields() {
        let update = TodoUpdate::default().with_completed(true);

        assert_eq!(
            serde_json::to_value(update).unwrap(),
            json!({ "completed": true })
        );
    }
}
