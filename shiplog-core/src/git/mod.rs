//! Git repository access for shiplog

mod range;
mod repo;

pub use repo::{GitRepo, RemoteInfo};
