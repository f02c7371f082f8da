pub mod commands;
pub mod host;
pub mod path;
pub mod pipeline;
pub mod state;
