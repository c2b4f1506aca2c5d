use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Missing input variable: {0}")]
    MissingVariable(String),
}
