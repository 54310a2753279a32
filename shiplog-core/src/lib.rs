//! Shiplog Core - git side of the shiplog changelog generator
//!
//! This crate opens a local repository, resolves the start/end revisions of a
//! release range, and extracts the GitHub issue numbers referenced by the
//! commit messages in that range. It also normalizes remote URLs so the
//! owner/repo pair can be inferred from `origin`.

pub mod error;
pub mod git;
pub mod remote;

pub use error::{Error, Result};
pub use git::{GitRepo, RemoteInfo};
pub use remote::parse_remote_url;
