// Infrastructure layer - Configuration, input parsing and validation
pub mod config;
pub mod file_source;
pub mod input_error;
pub mod input_parser;
pub mod validation;
