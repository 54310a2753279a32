//! Issue model and the sequential fetch loop

use async_trait::async_trait;
use octocrab::models::issues::Issue as OctocrabIssue;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::{Error, GitHubClient, Result};

/// The assignee of an issue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignee {
    /// GitHub login
    pub login: String,
    /// Profile URL
    pub html_url: String,
}

/// A GitHub issue, reduced to what the changelog needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Issue number
    pub number: u64,
    /// Web URL of the issue
    pub html_url: String,
    /// Issue title
    pub title: String,
    /// Assignee, if any
    pub assignee: Option<Assignee>,
}

impl From<OctocrabIssue> for Issue {
    fn from(issue: OctocrabIssue) -> Self {
        Issue {
            number: issue.number,
            html_url: issue.html_url.to_string(),
            title: issue.title,
            assignee: issue.assignee.map(|author| Assignee {
                login: author.login,
                html_url: author.html_url.to_string(),
            }),
        }
    }
}

/// Anything that can produce an issue by number
///
/// The trait is the seam between the fetch loop and the network; it keeps
/// the partial-failure behavior testable and leaves room for a bounded
/// worker pool later without changing callers.
#[async_trait]
pub trait IssueSource {
    /// Fetch a single issue by number
    async fn issue(&self, number: u64) -> Result<Issue>;
}

#[async_trait]
impl IssueSource for GitHubClient {
    async fn issue(&self, number: u64) -> Result<Issue> {
        let issue = self
            .client()
            .issues(self.owner(), self.repo())
            .get(number)
            .await
            .map_err(|e| match &e {
                octocrab::Error::GitHub { source, .. }
                    if source.message.contains("Not Found") =>
                {
                    Error::IssueNotFound(number)
                }
                _ => Error::Api(e),
            })?;

        Ok(issue.into())
    }
}

/// Fetch issues one at a time, dropping the ones that fail
///
/// Failures are isolated per item: a fetch error is logged and the number is
/// skipped, so the result can be a strict subset of `numbers`. The order of
/// the result matches the order of the input. The top-level error return is
/// reserved for setup-level faults and is currently always `Ok`.
pub async fn fetch_issues<S>(source: &S, numbers: &[u64]) -> Result<Vec<Issue>>
where
    S: IssueSource + Sync,
{
    let mut issues = Vec::new();

    for &number in numbers {
        info!("#{number}");

        match source.issue(number).await {
            Ok(issue) => issues.push(issue),
            Err(err) => {
                error!(number, %err, "error fetching issue");
            }
        }
    }

    Ok(issues)
}
