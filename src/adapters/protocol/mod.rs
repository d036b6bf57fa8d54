pub mod constants;
pub mod frame;
pub mod messages;
pub mod parser;
