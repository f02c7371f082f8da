use super::{Command, CommandError};
use crate::console::Console;
use crate::core::host;
use crate::core::path::PathResolver;
use crate::core::pipeline::{Sink, StreamPipeline};
use crate::core::state::Session;
use std::fs::{self, OpenOptions};
use std::io::ErrorKind;

/// `add`: exclusive create of an empty file under the cursor. Never
/// overwrites.
#[derive(Clone, Default)]
pub struct AddCommand {
    resolver: PathResolver,
}

impl AddCommand {
    pub fn new() -> Self {
        Self {
            resolver: PathResolver::new(),
        }
    }
}

impl Command for AddCommand {
    fn min_args(&self) -> usize {
        1
    }

    fn execute(
        &self,
        session: &mut Session,
        args: &[String],
        _console: &Console,
    ) -> Result<(), CommandError> {
        let path = self.resolver.resolve(session.current_dir(), &args[0]);
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(_) => Ok(()),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => Err(CommandError::AlreadyExists),
            Err(e) => Err(CommandError::Io(e)),
        }
    }
}

/// `cat`: stream file bytes to stdout, then one platform line-ending
/// terminator. Partial output already written before a failure stands.
#[derive(Clone, Default)]
pub struct CatCommand {
    resolver: PathResolver,
}

impl CatCommand {
    pub fn new() -> Self {
        Self {
            resolver: PathResolver::new(),
        }
    }
}

impl Command for CatCommand {
    fn min_args(&self) -> usize {
        1
    }

    fn execute(
        &self,
        session: &mut Session,
        args: &[String],
        _console: &Console,
    ) -> Result<(), CommandError> {
        let path = self.resolver.resolve(session.current_dir(), &args[0]);
        StreamPipeline::run(&path, None, Sink::Stdout)?;
        print!("{}", host::EOL);
        Ok(())
    }
}

/// `rn`: rename to a sibling carrying the new base name. Destination is
/// checked before source; the rename itself is atomic.
#[derive(Clone, Default)]
pub struct RnCommand {
    resolver: PathResolver,
}

impl RnCommand {
    pub fn new() -> Self {
        Self {
            resolver: PathResolver::new(),
        }
    }
}

impl Command for RnCommand {
    fn min_args(&self) -> usize {
        2
    }

    fn execute(
        &self,
        session: &mut Session,
        args: &[String],
        _console: &Console,
    ) -> Result<(), CommandError> {
        let source = self.resolver.resolve(session.current_dir(), &args[0]);
        let destination = self.resolver.sibling(&source, &args[1]);

        if destination.exists() {
            return Err(CommandError::DestinationExists(destination));
        }
        if !source.exists() {
            return Err(CommandError::SourceNotFound);
        }
        fs::rename(&source, &destination)?;
        Ok(())
    }
}

/// `rm`: remove a file. Directories are not a supported target.
#[derive(Clone, Default)]
pub struct RmCommand {
    resolver: PathResolver,
}

impl RmCommand {
    pub fn new() -> Self {
        Self {
            resolver: PathResolver::new(),
        }
    }
}

impl Command for RmCommand {
    fn min_args(&self) -> usize {
        1
    }

    fn execute(
        &self,
        session: &mut Session,
        args: &[String],
        _console: &Console,
    ) -> Result<(), CommandError> {
        let path = self.resolver.resolve(session.current_dir(), &args[0]);
        fs::remove_file(&path).map_err(|_| CommandError::NotFound)
    }
}
