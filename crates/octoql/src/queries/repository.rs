//! Repository issues query.

use serde_json::json;

use crate::request::Variables;

/// Issue states accepted by [`repository_issues`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueState {
    /// Issues that are still open.
    Open,
    /// Issues that have been closed.
    Closed,
}

impl IssueState {
    /// The GraphQL enum literal for this state.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::Closed => "CLOSED",
        }
    }
}

const REPOSITORY_ISSUES: &str = "\
query getRepositoryIssues($owner: String!, $name: String!, $last: Int!, $states: [IssueState!]) {
  repository(owner: $owner, name: $name) {
    issues(last: $last, states: $states) {
      edges {
        node {
          title
          url
        }
      }
    }
  }
}
";

/// Build a query for the most recent issues of one repository.
///
/// Selects the last `last` issues in the given states, with title and URL
/// for each. All inputs travel as GraphQL variables.
///
/// # Example
///
/// ```ignore
/// use octoql::queries::{IssueState, repository_issues};
///
/// let (query, variables) = repository_issues("pydantic", "FastUI", 2, &[IssueState::Closed]);
/// let data = client.execute(query, variables)?;
/// ```
pub fn repository_issues(
    owner: &str,
    name: &str,
    last: u32,
    states: &[IssueState],
) -> (String, Variables) {
    let states: Vec<&str> = states.iter().map(|state| state.as_str()).collect();

    let mut variables = Variables::new();
    variables.insert("owner".into(), json!(owner));
    variables.insert("name".into(), json!(name));
    variables.insert("last".into(), json!(last));
    variables.insert("states".into(), json!(states));

    (REPOSITORY_ISSUES.to_string(), variables)
}
