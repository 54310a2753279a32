//! Markdown rendering of the fetched issue list

use crate::Issue;

/// Render issues as a markdown list, one line per issue
///
/// Each line has the form `- #[3](https://x/3) Fix bug`, with
/// ` ([login](url))` appended when the issue has an assignee. Lines are
/// joined with single newlines; no trailing newline.
pub fn format_issues(issues: &[Issue]) -> String {
    let lines: Vec<String> = issues
        .iter()
        .map(|issue| {
            let mut line = format!(
                "- #[{}]({}) {}",
                issue.number, issue.html_url, issue.title
            );

            if let Some(assignee) = &issue.assignee {
                line.push_str(&format!(" ([{}]({}))", assignee.login, assignee.html_url));
            }

            line
        })
        .collect();

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Assignee;

    fn issue(assignee: Option<Assignee>) -> Issue {
        Issue {
            number: 3,
            html_url: "https://x/3".to_string(),
            title: "Fix bug".to_string(),
            assignee,
        }
    }

    #[test]
    fn formats_issue_without_assignee() {
        let output = format_issues(&[issue(None)]);
        assert_eq!(output, "- #[3](https://x/3) Fix bug");
    }

    #[test]
    fn formats_issue_with_assignee() {
        let output = format_issues(&[issue(Some(Assignee {
            login: "ann".to_string(),
            html_url: "https://x/ann".to_string(),
        }))]);
        assert_eq!(output, "- #[3](https://x/3) Fix bug ([ann](https://x/ann))");
    }

    #[test]
    fn joins_lines_without_trailing_newline() {
        let second = Issue {
            number: 4,
            html_url: "https://x/4".to_string(),
            title: "Add feature".to_string(),
            assignee: None,
        };

        let output = format_issues(&[issue(None), second]);
        assert_eq!(
            output,
            "- #[3](https://x/3) Fix bug\n- #[4](https://x/4) Add feature"
        );
    }

    #[test]
    fn empty_list_renders_empty_string() {
        assert_eq!(format_issues(&[]), "");
    }
}
