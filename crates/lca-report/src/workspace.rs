//! Per-run scratch directory for intermediate chart files
//!
//! Every report run gets its own directory, so concurrent runs never share
//! chart file names. The directory and its contents are removed when the
//! [`RunWorkspace`] is dropped, whether the run succeeded or not.

use std::path::Path;

use tempfile::TempDir;

const RUN_DIR_PREFIX: &str = "lca-run-";

#[derive(Debug)]
pub struct RunWorkspace {
    dir: TempDir,
}

impl RunWorkspace {
    /// Create a workspace under the system temp directory
    pub fn create() -> std::io::Result<Self> {
        let dir = tempfile::Builder::new().prefix(RUN_DIR_PREFIX).tempdir()?;
        tracing::debug!("Created run workspace {}", dir.path().display());
        Ok(Self { dir })
    }

    /// Create a workspace inside `parent`
    pub fn create_in(parent: &Path) -> std::io::Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix(RUN_DIR_PREFIX)
            .tempdir_in(parent)?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_removed_on_drop() {
        let parent = tempfile::tempdir().unwrap();
        let workspace = RunWorkspace::create_in(parent.path()).unwrap();
        let path = workspace.path().to_path_buf();
        std::fs::write(path.join("Water_Use_(L).png"), b"png").unwrap();

        assert!(path.exists());
        drop(workspace);
        assert!(!path.exists());
    }

    #[test]
    fn test_workspaces_are_distinct() {
        let a = RunWorkspace::create().unwrap();
        let b = RunWorkspace::create().unwrap();
        assert_ne!(a.path(), b.path());
        assert!(a
            .path()
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with(RUN_DIR_PREFIX));
    }
}
