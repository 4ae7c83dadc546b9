pub mod ast;
pub mod ocarina_parser;
