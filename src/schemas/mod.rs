mod message_type;
pub use message_type::*;

mod message;
pub use message::*;

mod agent_step;
pub use agent_step::*;

mod run_result;
pub use run_result::*;
