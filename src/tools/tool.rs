use async_trait::async_trait;

/// A named capability that takes one string input and returns one string output.
///
/// Implementations never fail: any internal error (transport, HTTP status,
/// malformed payload) must be turned into descriptive text, which the agent
/// records as the observation of the action.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Returns the name of the tool.
    fn name(&self) -> String;

    /// Provides a description of what the tool does and what input it expects.
    fn description(&self) -> String;

    /// Executes the tool.
    async fn call(&self, input: &str) -> String;

    /// One line of the capability listing shown to the model.
    fn to_plain_description(&self) -> String {
        format!("- {}: {}", self.name(), self.description())
    }
}

impl<'a, T> From<T> for Box<dyn Tool + 'a>
where
    T: Tool + 'a,
{
    fn from(val: T) -> Self {
        Box::new(val)
    }
}
