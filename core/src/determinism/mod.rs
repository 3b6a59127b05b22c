pub mod digest;
pub mod json_pretty;
