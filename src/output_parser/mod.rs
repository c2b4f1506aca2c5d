mod action_parser;
pub use action_parser::*;
