use super::{Command, CommandError};
use crate::console::Console;
use crate::core::state::Session;
use std::fs;
use std::io;
use std::path::Path;

/// `ls`: directory entries of the cursor, directories first, each partition
/// sorted by name.
#[derive(Clone, Default)]
pub struct LsCommand;

impl LsCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for LsCommand {
    fn execute(
        &self,
        session: &mut Session,
        _args: &[String],
        _console: &Console,
    ) -> Result<(), CommandError> {
        let (dirs, files) =
            partition_entries(session.current_dir()).map_err(|_| CommandError::OperationFailed)?;

        let width = dirs
            .iter()
            .chain(files.iter())
            .map(|name| name.chars().count())
            .max()
            .unwrap_or(0)
            .max("Name".len());

        println!("{:<width$}  Type", "Name", width = width);
        for name in &dirs {
            println!("{:<width$}  directory", name, width = width);
        }
        for name in &files {
            println!("{:<width$}  file", name, width = width);
        }
        Ok(())
    }
}

/// Splits a directory into (directories, files), each sorted
/// case-insensitively by name.
pub fn partition_entries(dir: &Path) -> io::Result<(Vec<String>, Vec<String>)> {
    let mut dirs = Vec::new();
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if entry.file_type()?.is_dir() {
            dirs.push(name);
        } else {
            files.push(name);
        }
    }
    dirs.sort_by_key(|name| name.to_lowercase());
    files.sort_by_key(|name| name.to_lowercase());
    Ok((dirs, files))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_partitions_and_sorts() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("zeta")).unwrap();
        fs::create_dir(dir.path().join("Alpha")).unwrap();
        fs::write(dir.path().join("b.txt"), b"").unwrap();
        fs::write(dir.path().join("A.txt"), b"").unwrap();

        let (dirs, files) = partition_entries(dir.path()).unwrap();
        assert_eq!(dirs, vec!["Alpha".to_string(), "zeta".to_string()]);
        assert_eq!(files, vec!["A.txt".to_string(), "b.txt".to_string()]);
    }

    #[test]
    fn test_empty_directory_is_not_an_error() {
        let dir = tempdir().unwrap();
        let (dirs, files) = partition_entries(dir.path()).unwrap();
        assert!(dirs.is_empty());
        assert!(files.is_empty());

        let mut session = Session::new(None, dir.path().to_str());
        let result = LsCommand::new().execute(&mut session, &[], &Console::new());
        assert!(result.is_ok());
    }

    #[test]
    fn test_missing_directory_is_operation_failed() {
        let dir = tempdir().unwrap();
        let gone = dir.path().join("gone");
        let mut session = Session::new(None, gone.to_str());
        let result = LsCommand::new().execute(&mut session, &[], &Console::new());
        assert!(matches!(result, Err(CommandError::OperationFailed)));
        // The cursor stays where it was.
        assert_eq!(session.current_dir(), gone);
    }
}
