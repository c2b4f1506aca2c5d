pub mod agent;
pub mod llm;
pub mod output_parser;
pub mod schemas;
pub mod settings;
pub mod template;
pub mod tools;
pub extern crate url;

pub(crate) mod utils;
