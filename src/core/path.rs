use std::path::{Path, PathBuf};

/// Pure path algebra for the session cursor. Never touches the filesystem;
/// any failure surfaces later, when the resolved path is actually used.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathResolver;

impl PathResolver {
    pub fn new() -> Self {
        Self
    }

    /// Absolute input is returned unchanged; relative input is joined onto
    /// the cursor with the platform separator. No existence check.
    pub fn resolve(&self, current: &Path, input: &str) -> PathBuf {
        let candidate = Path::new(input);
        if candidate.is_absolute() {
            candidate.to_path_buf()
        } else {
            current.join(candidate)
        }
    }

    /// Parent of the cursor: drop the last segment. The root is its own
    /// parent, so this is total and idempotent at the top.
    pub fn parent_of(&self, current: &Path) -> PathBuf {
        match current.parent() {
            Some(parent) => parent.to_path_buf(),
            None => current.to_path_buf(),
        }
    }

    /// Sibling of `path` carrying `name`: same parent directory, new base
    /// name. Used by rename, where the new name never moves the file.
    pub fn sibling(&self, path: &Path, name: &str) -> PathBuf {
        match path.parent() {
            Some(parent) => parent.join(name),
            None => PathBuf::from(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_absolute_passthrough() {
        let resolver = PathResolver::new();
        assert_eq!(
            resolver.resolve(Path::new("/home/user"), "/etc/hosts"),
            PathBuf::from("/etc/hosts")
        );
    }

    #[test]
    fn test_resolve_relative_joins_cursor() {
        let resolver = PathResolver::new();
        assert_eq!(
            resolver.resolve(Path::new("/home/user"), "notes.txt"),
            PathBuf::from("/home/user/notes.txt")
        );
        assert_eq!(
            resolver.resolve(Path::new("/home/user"), "docs/notes.txt"),
            PathBuf::from("/home/user/docs/notes.txt")
        );
    }

    #[test]
    fn test_parent_drops_last_segment() {
        let resolver = PathResolver::new();
        assert_eq!(
            resolver.parent_of(Path::new("/home/user")),
            PathBuf::from("/home")
        );
        assert_eq!(resolver.parent_of(Path::new("/home")), PathBuf::from("/"));
    }

    #[test]
    fn test_parent_of_root_is_root() {
        let resolver = PathResolver::new();
        assert_eq!(resolver.parent_of(Path::new("/")), PathBuf::from("/"));
        // Idempotent: applying twice is the same as once.
        let once = resolver.parent_of(Path::new("/"));
        let twice = resolver.parent_of(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_sibling_keeps_parent() {
        let resolver = PathResolver::new();
        assert_eq!(
            resolver.sibling(Path::new("/home/user/a.txt"), "b.txt"),
            PathBuf::from("/home/user/b.txt")
        );
    }
}
