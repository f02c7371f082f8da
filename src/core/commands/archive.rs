use super::{Command, CommandError};
use crate::console::Console;
use crate::core::path::PathResolver;
use crate::core::pipeline::{Sink, StreamPipeline, Transform};
use crate::core::state::Session;

// Unlike cp/rn, the archive commands replace an existing destination. The
// pipeline sink makes that an explicit per-call choice.

/// `compress <path> <destPath>`: source -> gzip -> destination.
#[derive(Clone, Default)]
pub struct CompressCommand {
    resolver: PathResolver,
}

impl CompressCommand {
    pub fn new() -> Self {
        Self {
            resolver: PathResolver::new(),
        }
    }
}

impl Command for CompressCommand {
    fn min_args(&self) -> usize {
        2
    }

    fn execute(
        &self,
        session: &mut Session,
        args: &[String],
        console: &Console,
    ) -> Result<(), CommandError> {
        let source = self.resolver.resolve(session.current_dir(), &args[0]);
        let destination = self.resolver.resolve(session.current_dir(), &args[1]);
        StreamPipeline::run(
            &source,
            Some(Transform::Compress),
            Sink::File {
                path: &destination,
                overwrite: true,
            },
        )?;
        console.info(&format!(
            "File compressed and saved to {}",
            destination.display()
        ));
        Ok(())
    }
}

/// `decompress <path> <destPath>`: the inverse transform. Also fails, with
/// the codec tag, when the source is not valid gzip.
#[derive(Clone, Default)]
pub struct DecompressCommand {
    resolver: PathResolver,
}

impl DecompressCommand {
    pub fn new() -> Self {
        Self {
            resolver: PathResolver::new(),
        }
    }
}

impl Command for DecompressCommand {
    fn min_args(&self) -> usize {
        2
    }

    fn execute(
        &self,
        session: &mut Session,
        args: &[String],
        console: &Console,
    ) -> Result<(), CommandError> {
        let source = self.resolver.resolve(session.current_dir(), &args[0]);
        let destination = self.resolver.resolve(session.current_dir(), &args[1]);
        StreamPipeline::run(
            &source,
            Some(Transform::Decompress),
            Sink::File {
                path: &destination,
                overwrite: true,
            },
        )?;
        console.info(&format!(
            "File decompressed and saved to {}",
            destination.display()
        ));
        Ok(())
    }
}
