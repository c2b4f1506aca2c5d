#[allow(clippy::module_inception)]
mod llm;
pub use llm::*;

mod error;
pub use error::*;

pub mod options;

pub mod openai;
pub use openai::*;
