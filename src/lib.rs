pub mod console;
pub mod error;
pub mod flags;
pub mod shell;

pub mod core;
