/// Formatter adapters for the license list output
mod json_formatter;

pub use json_formatter::JsonFormatter;
