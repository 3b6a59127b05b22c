pub mod checker;
pub mod config;
pub mod determinism;
pub mod fetch;
pub mod layout;
pub mod materialize;
pub mod pipeline;
pub mod theme;
pub mod upstream;

pub mod error;
