//! Shiplog GitHub - issue fetching and changelog rendering
//!
//! This crate wraps the GitHub API for the one thing shiplog needs: fetching
//! issues by number, one at a time, tolerating individual failures, and
//! rendering the survivors as a markdown list.

mod client;
mod error;
mod format;
mod issues;

pub use client::GitHubClient;
pub use error::{Error, Result};
pub use format::format_issues;
pub use issues::{fetch_issues, Assignee, Issue, IssueSource};
