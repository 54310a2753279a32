//! Commit-range walking and issue-reference extraction

use std::collections::HashSet;
use std::sync::LazyLock;

use git2::Oid;
use regex::Regex;
use tracing::warn;

use super::repo::GitRepo;
use crate::{Error, Result};

/// Matches a `#` followed by one or more digits, e.g. `#123`.
static ISSUE_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#\d+").expect("issue reference pattern"));

impl GitRepo {
    /// Collect the issue numbers referenced by commits in `start..end`
    ///
    /// Walks the commits reachable from `end` but not from `start`
    /// (exclusive start, inclusive end) and scans every commit message for
    /// `#123`-style references. The result is sorted ascending.
    ///
    /// References are deduplicated by their literal digit text, so `#007`
    /// and `#7` count as separate references and can both survive into the
    /// parsed output. A reference whose digits overflow `u64` is dropped
    /// with a warning rather than failing the walk.
    pub fn issue_numbers_in_range(&self, start: Oid, end: Oid) -> Result<Vec<u64>> {
        let mut walker = self.inner().revwalk().map_err(Error::Range)?;
        walker
            .push_range(&format!("{start}..{end}"))
            .map_err(Error::Range)?;

        let mut references: HashSet<String> = HashSet::new();
        for oid in walker {
            let oid = oid.map_err(Error::Range)?;
            let commit = self.inner().find_commit(oid).map_err(Error::Range)?;

            // Non-UTF-8 messages have no scannable references.
            let Some(message) = commit.message() else {
                continue;
            };

            for found in ISSUE_REF.find_iter(message) {
                references.insert(found.as_str()[1..].to_string());
            }
        }

        let mut numbers = Vec::with_capacity(references.len());
        for reference in references {
            match reference.parse::<u64>() {
                Ok(number) => numbers.push(number),
                Err(err) => {
                    warn!(reference = %reference, %err, "skipping unparseable issue reference");
                }
            }
        }

        numbers.sort_unstable();
        Ok(numbers)
    }
}
