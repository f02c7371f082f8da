use super::{Command, CommandError};
use crate::console::Console;
use crate::core::path::PathResolver;
use crate::core::state::Session;
use std::fs;

/// `cd`: probe the resolved target with a directory read, then commit the
/// cursor to the resolved (not canonicalized) path.
#[derive(Clone, Default)]
pub struct CdCommand {
    resolver: PathResolver,
}

impl CdCommand {
    pub fn new() -> Self {
        Self {
            resolver: PathResolver::new(),
        }
    }
}

impl Command for CdCommand {
    fn min_args(&self) -> usize {
        1
    }

    fn execute(
        &self,
        session: &mut Session,
        args: &[String],
        _console: &Console,
    ) -> Result<(), CommandError> {
        let target = self.resolver.resolve(session.current_dir(), &args[0]);
        fs::read_dir(&target).map_err(|_| CommandError::DirectoryNotFound)?;
        session.set_current_dir(target);
        Ok(())
    }
}

/// `up`: drop the last cursor segment. No I/O, never fails, and does not
/// verify the parent exists; at the root it is the identity.
#[derive(Clone, Default)]
pub struct UpCommand {
    resolver: PathResolver,
}

impl UpCommand {
    pub fn new() -> Self {
        Self {
            resolver: PathResolver::new(),
        }
    }
}

impl Command for UpCommand {
    fn execute(
        &self,
        session: &mut Session,
        _args: &[String],
        _console: &Console,
    ) -> Result<(), CommandError> {
        let parent = self.resolver.parent_of(session.current_dir());
        session.set_current_dir(parent);
        Ok(())
    }
}
