use super::{Command, CommandError};
use crate::console::Console;
use crate::core::path::PathResolver;
use crate::core::pipeline::{Sink, StreamPipeline};
use crate::core::state::Session;
use std::fs;
use std::path::PathBuf;

/// Streams a file into a destination directory under its own base name.
/// Destination conflict is checked before the source, and nothing is ever
/// overwritten. Returns the source path for `mv` to remove.
fn copy_into(
    resolver: &PathResolver,
    session: &Session,
    source_arg: &str,
    dest_dir_arg: &str,
) -> Result<PathBuf, CommandError> {
    let source = resolver.resolve(session.current_dir(), source_arg);
    let dest_dir = resolver.resolve(session.current_dir(), dest_dir_arg);
    let base_name = source.file_name().ok_or(CommandError::SourceNotFound)?;
    let destination = dest_dir.join(base_name);

    if destination.exists() {
        return Err(CommandError::DestinationExists(destination));
    }
    if !source.exists() {
        return Err(CommandError::SourceNotFound);
    }
    StreamPipeline::run(
        &source,
        None,
        Sink::File {
            path: &destination,
            overwrite: false,
        },
    )?;
    Ok(source)
}

/// `cp <path> <destDir>`
#[derive(Clone, Default)]
pub struct CpCommand {
    resolver: PathResolver,
}

impl CpCommand {
    pub fn new() -> Self {
        Self {
            resolver: PathResolver::new(),
        }
    }
}

impl Command for CpCommand {
    fn min_args(&self) -> usize {
        2
    }

    fn execute(
        &self,
        session: &mut Session,
        args: &[String],
        _console: &Console,
    ) -> Result<(), CommandError> {
        copy_into(&self.resolver, session, &args[0], &args[1])?;
        Ok(())
    }
}

/// `mv <path> <destDir>`: copy to completion, then remove the source. The
/// removal never runs when the copy failed, so a failed copy loses nothing.
/// The two steps are not atomic together.
#[derive(Clone, Default)]
pub struct MvCommand {
    resolver: PathResolver,
}

impl MvCommand {
    pub fn new() -> Self {
        Self {
            resolver: PathResolver::new(),
        }
    }
}

impl Command for MvCommand {
    fn min_args(&self) -> usize {
        2
    }

    fn execute(
        &self,
        session: &mut Session,
        args: &[String],
        _console: &Console,
    ) -> Result<(), CommandError> {
        let source = copy_into(&self.resolver, session, &args[0], &args[1])?;
        fs::remove_file(&source).map_err(|_| CommandError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn session_in(dir: &std::path::Path) -> Session {
        Session::new(None, dir.to_str())
    }

    #[test]
    fn test_cp_copies_under_base_name() {
        let dir = tempdir().unwrap();
        let mut session = session_in(dir.path());
        fs::create_dir(dir.path().join("dest")).unwrap();
        fs::write(dir.path().join("a.txt"), b"copy me").unwrap();

        CpCommand::new()
            .execute(
                &mut session,
                &["a.txt".to_string(), "dest".to_string()],
                &Console::new(),
            )
            .unwrap();

        assert_eq!(
            fs::read(dir.path().join("dest").join("a.txt")).unwrap(),
            b"copy me"
        );
        // Source is still there.
        assert!(dir.path().join("a.txt").exists());
    }

    #[test]
    fn test_cp_never_overwrites() {
        let dir = tempdir().unwrap();
        let mut session = session_in(dir.path());
        fs::create_dir(dir.path().join("dest")).unwrap();
        fs::write(dir.path().join("a.txt"), b"new").unwrap();
        fs::write(dir.path().join("dest").join("a.txt"), b"old").unwrap();

        let result = CpCommand::new().execute(
            &mut session,
            &["a.txt".to_string(), "dest".to_string()],
            &Console::new(),
        );
        assert!(matches!(result, Err(CommandError::DestinationExists(_))));
        assert_eq!(
            fs::read(dir.path().join("dest").join("a.txt")).unwrap(),
            b"old"
        );
    }

    #[test]
    fn test_cp_missing_source() {
        let dir = tempdir().unwrap();
        let mut session = session_in(dir.path());
        fs::create_dir(dir.path().join("dest")).unwrap();

        let result = CpCommand::new().execute(
            &mut session,
            &["a.txt".to_string(), "dest".to_string()],
            &Console::new(),
        );
        assert!(matches!(result, Err(CommandError::SourceNotFound)));
    }

    #[test]
    fn test_mv_moves_file() {
        let dir = tempdir().unwrap();
        let mut session = session_in(dir.path());
        fs::create_dir(dir.path().join("dest")).unwrap();
        fs::write(dir.path().join("a.txt"), b"move me").unwrap();

        MvCommand::new()
            .execute(
                &mut session,
                &["a.txt".to_string(), "dest".to_string()],
                &Console::new(),
            )
            .unwrap();

        assert!(!dir.path().join("a.txt").exists());
        assert_eq!(
            fs::read(dir.path().join("dest").join("a.txt")).unwrap(),
            b"move me"
        );
    }

    #[test]
    fn test_mv_keeps_source_when_copy_fails() {
        let dir = tempdir().unwrap();
        let mut session = session_in(dir.path());
        fs::create_dir(dir.path().join("dest")).unwrap();
        fs::write(dir.path().join("a.txt"), b"precious").unwrap();
        fs::write(dir.path().join("dest").join("a.txt"), b"blocker").unwrap();

        let result = MvCommand::new().execute(
            &mut session,
            &["a.txt".to_string(), "dest".to_string()],
            &Console::new(),
        );
        assert!(matches!(result, Err(CommandError::DestinationExists(_))));
        // No data loss: the source survives a failed copy.
        assert_eq!(fs::read(dir.path().join("a.txt")).unwrap(), b"precious");
        assert_eq!(
            fs::read(dir.path().join("dest").join("a.txt")).unwrap(),
            b"blocker"
        );
    }
}
