mod tool;
pub use tool::*;

mod registry;
pub use registry::*;

mod tools_vec;

mod todo;
pub use todo::*;

mod error;
pub use error::*;
