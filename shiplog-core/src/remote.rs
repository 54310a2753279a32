//! Remote URL normalization and owner/repo derivation
//!
//! Remotes come in three shapes: full URLs (`https://...`, `ssh://...`),
//! SCP-like shorthand (`git@github.com:owner/repo.git`), and bare paths
//! (`owner/repo`, or even just `repo`). All of them are normalized to an
//! absolute URL before the owner and repository name are pulled out of the
//! path.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::{Error, Result};

static HAS_SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[^:]+://").expect("scheme pattern"));

static SCP_LIKE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^@]+@)?([^:]+):/?(.+)$").expect("scp pattern"));

/// Derive (owner, repo) from a remote URL string
///
/// A bare path with no slash is doubled (`x` becomes `x/x`), a best-effort
/// shorthand inference. A trailing `.git` is stripped from the repository
/// segment.
pub fn parse_remote_url(raw: &str) -> Result<(String, String)> {
    let url = normalize(raw)?;

    let segments: Vec<&str> = url
        .path()
        .trim_start_matches('/')
        .split('/')
        .collect();

    let [owner, repo] = segments.as_slice() else {
        return Err(Error::Remote(format!(
            "remote '{raw}' doesn't appear to be a GitHub repository"
        )));
    };

    if owner.is_empty() || repo.is_empty() {
        return Err(Error::Remote(format!(
            "remote '{raw}' doesn't appear to be a GitHub repository"
        )));
    }

    Ok((owner.to_string(), repo.trim_end_matches(".git").to_string()))
}

/// Normalize a remote reference to an absolute URL
///
/// SCP-like shorthand is rewritten to an `ssh://` URL; anything still
/// scheme-less after that is treated as a path on the default host.
fn normalize(raw: &str) -> Result<Url> {
    let text = if HAS_SCHEME.is_match(raw) {
        raw.to_string()
    } else if let Some(caps) = SCP_LIKE.captures(raw) {
        let user = caps.get(1).map_or("", |m| m.as_str());
        format!("ssh://{user}{}/{}", &caps[2], &caps[3])
    } else {
        let path = raw.trim_start_matches('/');
        if path.contains('/') {
            format!("https://github.com/{path}")
        } else {
            format!("https://github.com/{path}/{path}")
        }
    };

    Ok(Url::parse(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_scp_like_url() {
        let (owner, repo) = parse_remote_url("git@github.com:owner/repo.git").unwrap();
        assert_eq!(owner, "owner");
        assert_eq!(repo, "repo");
    }

    #[test]
    fn parses_scp_like_url_without_user() {
        let (owner, repo) = parse_remote_url("github.com:owner/repo").unwrap();
        assert_eq!(owner, "owner");
        assert_eq!(repo, "repo");
    }

    #[test]
    fn parses_https_url() {
        let (owner, repo) = parse_remote_url("https://github.com/owner/repo").unwrap();
        assert_eq!(owner, "owner");
        assert_eq!(repo, "repo");
    }

    #[test]
    fn parses_https_url_with_git_suffix() {
        let (owner, repo) = parse_remote_url("https://github.com/owner/repo.git").unwrap();
        assert_eq!(owner, "owner");
        assert_eq!(repo, "repo");
    }

    #[test]
    fn parses_ssh_url() {
        let (owner, repo) = parse_remote_url("ssh://git@github.com/owner/repo.git").unwrap();
        assert_eq!(owner, "owner");
        assert_eq!(repo, "repo");
    }

    #[test]
    fn parses_owner_repo_shorthand() {
        let (owner, repo) = parse_remote_url("owner/repo").unwrap();
        assert_eq!(owner, "owner");
        assert_eq!(repo, "repo");
    }

    #[test]
    fn doubles_bare_shorthand() {
        let (owner, repo) = parse_remote_url("myrepo").unwrap();
        assert_eq!(owner, "myrepo");
        assert_eq!(repo, "myrepo");
    }

    #[test]
    fn rejects_deep_path() {
        assert!(matches!(
            parse_remote_url("https://github.com/a/b/c"),
            Err(Error::Remote(_))
        ));
    }

    #[test]
    fn rejects_missing_repo_segment() {
        assert!(matches!(
            parse_remote_url("https://github.com/owner"),
            Err(Error::Remote(_))
        ));
    }
}
