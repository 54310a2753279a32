//! Repository opening, remote lookup, and revision resolution

use std::path::Path;

use git2::{Oid, Repository};

use crate::{Error, Result};

/// Information about a git remote
#[derive(Debug, Clone)]
pub struct RemoteInfo {
    /// Name of the remote (e.g., "origin")
    pub name: String,
    /// URL of the remote
    pub url: String,
}

/// A git repository wrapper providing shiplog-specific operations
pub struct GitRepo {
    /// The underlying git2 repository
    repo: Repository,
}

impl std::fmt::Debug for GitRepo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitRepo")
            .field("path", &self.repo.path())
            .finish_non_exhaustive()
    }
}

impl GitRepo {
    /// Open a git repository at the given path
    ///
    /// Searches upward from the given path to find the repository root.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let repo = Repository::discover(path)
            .map_err(|_| Error::Repository(path.display().to_string()))?;

        Ok(Self { repo })
    }

    /// Get the URL of the "origin" remote
    pub fn default_remote(&self) -> Result<RemoteInfo> {
        let remote = self.repo.find_remote("origin").map_err(|_| {
            Error::Remote("no 'origin' remote configured".to_string())
        })?;

        let url = remote.url().ok_or_else(|| {
            Error::Remote("remote 'origin' has no URL".to_string())
        })?;

        Ok(RemoteInfo {
            name: "origin".to_string(),
            url: url.to_string(),
        })
    }

    /// Resolve a revision spec (branch, tag, hash, ...) to a commit id
    ///
    /// Annotated tags are peeled so the id always names a commit.
    pub fn resolve(&self, spec: &str) -> Result<Oid> {
        let object = self
            .repo
            .revparse_single(spec)
            .and_then(|obj| obj.peel(git2::ObjectType::Commit))
            .map_err(|source| Error::Resolve {
                spec: spec.to_string(),
                source,
            })?;

        Ok(object.id())
    }

    /// Get access to the underlying git2 repository
    pub(crate) fn inner(&self) -> &Repository {
        &self.repo
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_non_git_dir() {
        let dir = tempfile::tempdir().unwrap();
        let result = GitRepo::open(dir.path());
        assert!(matches!(result, Err(Error::Repository(_))));
    }

    #[test]
    fn default_remote_missing() {
        let dir = tempfile::tempdir().unwrap();
        Repository::init(dir.path()).unwrap();
        let repo = GitRepo::open(dir.path()).unwrap();
        assert!(matches!(repo.default_remote(), Err(Error::Remote(_))));
    }

    #[test]
    fn default_remote_url() {
        let dir = tempfile::tempdir().unwrap();
        let raw = Repository::init(dir.path()).unwrap();
        raw.remote("origin", "git@github.com:owner/repo.git").unwrap();

        let repo = GitRepo::open(dir.path()).unwrap();
        let remote = repo.default_remote().unwrap();
        assert_eq!(remote.name, "origin");
        assert_eq!(remote.url, "git@github.com:owner/repo.git");
    }

    #[test]
    fn resolve_unknown_spec() {
        let dir = tempfile::tempdir().unwrap();
        Repository::init(dir.path()).unwrap();
        let repo = GitRepo::open(dir.path()).unwrap();
        assert!(matches!(
            repo.resolve("no-such-ref"),
            Err(Error::Resolve { .. })
        ));
    }
}
