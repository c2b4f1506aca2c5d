mod react_agent;
pub use react_agent::*;

mod builder;
pub use builder::*;

mod history;
pub use history::*;

mod prompt;
pub use prompt::*;

mod fallback;
pub use fallback::*;

mod options;
pub use options::*;

mod error;
pub use error::*;
