use super::{Command, CommandError};
use crate::console::Console;
use crate::core::path::PathResolver;
use crate::core::pipeline::{Sink, StreamPipeline};
use crate::core::state::Session;

/// `hash <path>`: stream the file through a SHA-256 accumulator and print
/// the lowercase hex digest. Nothing is printed on failure.
#[derive(Clone, Default)]
pub struct HashCommand {
    resolver: PathResolver,
}

impl HashCommand {
    pub fn new() -> Self {
        Self {
            resolver: PathResolver::new(),
        }
    }
}

impl Command for HashCommand {
    fn min_args(&self) -> usize {
        1
    }

    fn execute(
        &self,
        session: &mut Session,
        args: &[String],
        console: &Console,
    ) -> Result<(), CommandError> {
        let path = self.resolver.resolve(session.current_dir(), &args[0]);
        let outcome = StreamPipeline::run(&path, None, Sink::Digest)?;
        if let Some(digest) = outcome.digest {
            console.info(&digest);
        }
        Ok(())
    }
}
