//! Seed props for the built-in compositions.
//!
//! Fixtures are embedded JSON documents parsed on demand, so every caller gets its own value and
//! the same schema path as user-supplied props.

use serde::de::DeserializeOwned;

use crate::data::model::{
    ActivitySummary, CodeChangeSet, ContributorActivityReport, ContributorBoard, IssueList,
    PullRequestList, StaticSummary, StatusSnapshot,
};
use crate::foundation::error::{ReelError, ReelResult};

const ACTIVITY: &str = include_str!("fixtures/activity.json");
const STATUS: &str = include_str!("fixtures/status.json");
const CODE_CHANGES: &str = include_str!("fixtures/code_changes.json");
const CONTRIBUTORS: &str = include_str!("fixtures/contributors.json");
const NEW_ISSUES: &str = include_str!("fixtures/new_issues.json");
const PULL_REQUESTS: &str = include_str!("fixtures/pull_requests.json");
const CONTRIBUTOR_ACTIVITY: &str = include_str!("fixtures/contributor_activity.json");
const STATIC_SUMMARY: &str = include_str!("fixtures/static_summary.json");

fn parse<T: DeserializeOwned>(name: &str, json: &str) -> ReelResult<T> {
    serde_json::from_str(json)
        .map_err(|e| ReelError::serde(format!("seed fixture '{name}': {e}")))
}

/// Three days of organization events; `show_timeline` picks the reel variant.
pub fn activity_summary(show_timeline: bool) -> ReelResult<ActivitySummary> {
    let mut summary: ActivitySummary = parse("activity", ACTIVITY)?;
    summary.show_timeline = show_timeline;
    Ok(summary)
}

/// Issue and pull request tallies.
pub fn status_snapshot() -> ReelResult<StatusSnapshot> {
    parse("status", STATUS)
}

/// Eight changed files.
pub fn code_changes() -> ReelResult<CodeChangeSet> {
    parse("code_changes", CODE_CHANGES)
}

/// Three ranked contributors.
pub fn contributor_board() -> ReelResult<ContributorBoard> {
    parse("contributors", CONTRIBUTORS)
}

/// Five new issues.
pub fn new_issues() -> ReelResult<IssueList> {
    parse("new_issues", NEW_ISSUES)
}

/// Five pull requests across all states.
pub fn pull_requests() -> ReelResult<PullRequestList> {
    parse("pull_requests", PULL_REQUESTS)
}

/// Three contributors with five days of activity each.
pub fn contributor_activity() -> ReelResult<ContributorActivityReport> {
    parse("contributor_activity", CONTRIBUTOR_ACTIVITY)
}

/// A generated daily repository summary.
pub fn static_summary() -> ReelResult<StaticSummary> {
    parse("static_summary", STATIC_SUMMARY)
}

#[cfg(test)]
#[path = "../../tests/unit/data/sample.rs"]
mod tests;
