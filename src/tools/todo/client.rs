use reqwest::{Client, Response};
use url::Url;

use crate::tools::ToolError;

use super::{NewTodo, Todo, TodoUpdate};

pub const DEFAULT_TODO_API_URL: &str = "http://localhost:5001";

/// Thin HTTP client over the todo API, shared by the todo tools.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: Url,
    client: Client,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Result<Self, ToolError> {
        let base_url =
            Url::parse(base_url).map_err(|e| ToolError::InvalidUrl(format!("{base_url}: {e}")))?;

        Ok(Self {
            base_url,
            client: Client::new(),
        })
    }

    pub fn with_http_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub async fn list(&self) -> Result<Vec<Todo>, ToolError> {
        let response = self.client.get(self.endpoint(None)?).send().await?;
        Ok(check_status(response)?.json().await?)
    }

    pub async fn get(&self, id: &str) -> Result<Todo, ToolError> {
        let response = self.client.get(self.endpoint(Some(id))?).send().await?;
        Ok(check_status(response)?.json().await?)
    }

    pub async fn create(&self, todo: &NewTodo) -> Result<Todo, ToolError> {
        let response = self
            .client
            .post(self.endpoint(None)?)
            .json(todo)
            .send()
            .await?;
        Ok(check_status(response)?.json().await?)
    }

    pub async fn update(&self, id: &str, update: &TodoUpdate) -> Result<Todo, ToolError> {
        let response = self
            .client
            .put(self.endpoint(Some(id))?)
            .json(update)
            .send()
            .await?;
        Ok(check_status(response)?.json().await?)
    }

    pub async fn delete(&self, id: &str) -> Result<(), ToolError> {
        let response = self.client.delete(self.endpoint(Some(id))?).send().await?;
        check_status(response)?;
        Ok(())
    }

    /// `{base}/todos` or `{base}/todos/{id}`, with `id` percent-encoded as a path segment.
    fn endpoint(&self, id: Option<&str>) -> Result<Url, ToolError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| ToolError::InvalidUrl(self.base_url.to_string()))?;
            segments.pop_if_empty().push("todos");
            if let Some(id) = id {
                segments.push(id);
            }
        }
        Ok(url)
    }
}

impl Default for TodoClient {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_TODO_API_URL).expect("Static URL is valid"),
            client: Client::new(),
        }
    }
}

fn check_status(response: Response) -> Result<Response, ToolError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ToolError::StatusError(status.as_u16()))
    }
}
