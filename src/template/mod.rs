mod message_template;
pub use message_template::*;

mod error;
pub use error::*;
