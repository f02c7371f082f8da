use std::env;
use std::path::{Path, PathBuf};

/// Per-session state: the current-directory cursor and the display name.
///
/// The cursor is only moved by successful `cd`/`up`; it always points at a
/// directory that existed when it was last set, and is never re-validated
/// between commands. The process working directory is left untouched.
#[derive(Debug, Clone)]
pub struct Session {
    current_dir: PathBuf,
    username: String,
}

impl Session {
    pub fn new(username: Option<&str>, start_dir: Option<&str>) -> Self {
        let username = username
            .filter(|name| !name.is_empty())
            .unwrap_or("anonymous")
            .to_string();

        let current_dir = match start_dir {
            Some(dir) => PathBuf::from(dir),
            None => dirs::home_dir()
                .or_else(|| env::current_dir().ok())
                .unwrap_or_else(|| PathBuf::from("/")),
        };

        Session {
            current_dir,
            username,
        }
    }

    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    pub fn set_current_dir(&mut self, dir: PathBuf) {
        self.current_dir = dir;
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_username() {
        let session = Session::new(None, Some("/tmp"));
        assert_eq!(session.username(), "anonymous");
    }

    #[test]
    fn test_empty_username_falls_back() {
        let session = Session::new(Some(""), Some("/tmp"));
        assert_eq!(session.username(), "anonymous");
    }

    #[test]
    fn test_explicit_username_and_dir() {
        let session = Session::new(Some("alice"), Some("/tmp"));
        assert_eq!(session.username(), "alice");
        assert_eq!(session.current_dir(), Path::new("/tmp"));
    }

    #[test]
    fn test_cursor_moves() {
        let mut session = Session::new(None, Some("/tmp"));
        session.set_current_dir(PathBuf::from("/var"));
        assert_eq!(session.current_dir(), Path::new("/var"));
    }
}
