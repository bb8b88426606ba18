//! Activity-record schemas.
//!
//! Every props type deserializes from the JSON a reel is fed with. Field names are camelCase
//! except [`StaticSummary`], which keeps the snake_case keys of its generated summary files.
//! Each type has a `validate` method checking the invariants scenes rely on; deserialization
//! alone does not run it.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};

use crate::foundation::error::{ReelError, ReelResult};

/// A single commit attached to a push event.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Commit {
    /// First line of the commit message.
    pub message: String,
    /// Link to the commit.
    pub url: String,
}

/// One occurrence of an event.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDetail {
    /// `owner/name` repository slug.
    pub repository: String,
    /// Login of the actor.
    pub author: String,
    /// When the event happened.
    pub created_at: DateTime<Utc>,
    /// Issue or pull request title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Event action (`opened`, `closed`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    /// Issue or pull request state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Pushed branch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    /// Pushed commits.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub commits: Vec<Commit>,
}

/// All events of one type (`PushEvent`, `IssuesEvent`, ...).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventGroup {
    /// Human-readable label for the type.
    pub display_name: String,
    /// Reported total, which may exceed `details.len()`.
    pub count: u64,
    /// Individual events.
    pub details: Vec<EventDetail>,
}

fn default_true() -> bool {
    true
}

/// Organization activity over a date window.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivitySummary {
    /// Event groups keyed by event type.
    pub events: BTreeMap<String, EventGroup>,
    /// Window start.
    pub start_date: DateTime<Utc>,
    /// Window end.
    pub end_date: DateTime<Utc>,
    /// Organization login.
    pub org_name: String,
    /// Timeline reel when `true`, detailed summary otherwise.
    #[serde(default = "default_true")]
    pub show_timeline: bool,
}

impl ActivitySummary {
    /// Check the window and organization name.
    pub fn validate(&self) -> ReelResult<()> {
        non_empty("orgName", &self.org_name)?;
        if self.end_date <= self.start_date {
            return Err(ReelError::validation(format!(
                "endDate ({}) must be after startDate ({})",
                self.end_date, self.start_date
            )));
        }
        for (ty, group) in &self.events {
            non_empty("event type", ty)?;
            for detail in &group.details {
                non_empty("event repository", &detail.repository)?;
                non_empty("event author", &detail.author)?;
            }
        }
        Ok(())
    }
}

/// Open/closed tally.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StatusCounts {
    /// Open items.
    pub open: u64,
    /// Closed items.
    pub closed: u64,
    /// Total items.
    pub total: u64,
}

impl StatusCounts {
    fn validate(&self, what: &str) -> ReelResult<()> {
        if self.open.saturating_add(self.closed) > self.total {
            return Err(ReelError::validation(format!(
                "{what}: open ({}) + closed ({}) exceeds total ({})",
                self.open, self.closed, self.total
            )));
        }
        Ok(())
    }
}

/// Issue and pull request status for an organization.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusSnapshot {
    /// Organization login.
    pub org_name: String,
    /// Issue counts.
    pub issues: StatusCounts,
    /// Pull request counts.
    pub pull_requests: StatusCounts,
}

impl StatusSnapshot {
    /// Check the tallies are consistent.
    pub fn validate(&self) -> ReelResult<()> {
        non_empty("orgName", &self.org_name)?;
        self.issues.validate("issues")?;
        self.pull_requests.validate("pullRequests")
    }
}

/// Line churn for one file.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FileChange {
    /// Repository-relative path.
    pub path: String,
    /// Added lines.
    pub additions: u64,
    /// Deleted lines.
    pub deletions: u64,
    /// Reported total churn.
    pub total: u64,
}

/// A set of file changes under a heading.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CodeChangeSet {
    /// Changed files.
    pub changes: Vec<FileChange>,
    /// Heading.
    pub title: String,
}

impl CodeChangeSet {
    /// Check every file has a path.
    pub fn validate(&self) -> ReelResult<()> {
        self.changes
            .iter()
            .try_for_each(|c| non_empty("change path", &c.path))
    }
}

/// A contribution tally of one kind.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Contribution {
    /// Label (`Commits`, `Reviews`, ...).
    #[serde(rename = "type")]
    pub kind: String,
    /// Tally.
    pub count: u64,
}

/// A contributor with a leaderboard score.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedContributor {
    /// Login.
    pub username: String,
    /// Avatar image URL.
    pub avatar_url: String,
    /// Per-kind tallies.
    pub contributions: Vec<Contribution>,
    /// Ranking score.
    pub total_score: f64,
}

/// Leaderboard props.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ContributorBoard {
    /// Contributors in any order.
    pub contributors: Vec<RankedContributor>,
    /// Heading.
    pub title: String,
}

impl ContributorBoard {
    /// Check usernames and scores.
    pub fn validate(&self) -> ReelResult<()> {
        for c in &self.contributors {
            non_empty("contributor username", &c.username)?;
            finite("totalScore", c.total_score)?;
        }
        Ok(())
    }
}

/// Issue triage priority.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Urgent.
    High,
    /// Normal.
    Medium,
    /// Backlog.
    Low,
}

/// A newly opened issue.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewIssue {
    /// Issue title.
    pub title: String,
    /// Opener login.
    pub author: String,
    /// `owner/name` slug.
    pub repository: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Label names.
    pub labels: Vec<String>,
    /// Triage priority.
    pub priority: Priority,
}

/// New issues props.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct IssueList {
    /// Issues in display order.
    pub issues: Vec<NewIssue>,
    /// Heading.
    pub title: String,
}

impl IssueList {
    /// Check titles are present.
    pub fn validate(&self) -> ReelResult<()> {
        self.issues
            .iter()
            .try_for_each(|i| non_empty("issue title", &i.title))
    }
}

/// Pull request lifecycle state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrState {
    /// Awaiting review or merge.
    Open,
    /// Closed without merging.
    Closed,
    /// Merged.
    Merged,
}

impl PrState {
    /// Lowercase label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::Merged => "merged",
        }
    }
}

/// A pull request.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PullRequest {
    /// Title.
    pub title: String,
    /// Author login.
    pub author: String,
    /// `owner/name` slug.
    pub repository: String,
    /// Lifecycle state.
    pub state: PrState,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

/// Pull request flow props.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PullRequestList {
    /// Pull requests in display order.
    pub pull_requests: Vec<PullRequest>,
    /// Heading.
    pub title: String,
}

impl PullRequestList {
    /// Check titles are present.
    pub fn validate(&self) -> ReelResult<()> {
        self.pull_requests
            .iter()
            .try_for_each(|pr| non_empty("pull request title", &pr.title))
    }
}

/// Optional impact attached to a day's contributions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionImpact {
    /// Lines touched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lines_changed: Option<u64>,
    /// Files touched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files_modified: Option<u64>,
    /// Review comments left.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_comments: Option<u64>,
}

/// Contributions made on one day.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RecentContribution {
    /// Kind (`commit`, `review`, ...).
    #[serde(rename = "type")]
    pub kind: String,
    /// Tally for the day.
    pub count: u64,
    /// Day bucket (`YYYY-MM-DD`).
    pub timestamp: NaiveDate,
    /// Optional impact.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact: Option<ContributionImpact>,
}

/// Totals by contribution kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionsByType {
    /// Commits.
    pub commits: u64,
    /// Reviews.
    pub reviews: u64,
    /// Issues.
    pub issues: u64,
    /// Pull requests.
    pub pull_requests: u64,
}

impl ContributionsByType {
    /// `(label, value)` pairs in chart order.
    pub fn entries(&self) -> [(&'static str, u64); 4] {
        [
            ("commits", self.commits),
            ("reviews", self.reviews),
            ("issues", self.issues),
            ("pullRequests", self.pull_requests),
        ]
    }

    /// Sum over every kind, saturating at `u64::MAX`.
    pub fn sum(&self) -> u64 {
        self.entries()
            .iter()
            .fold(0, |acc, (_, v)| acc.saturating_add(*v))
    }
}

/// Long-run impact figures.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactMetrics {
    /// Lines touched overall.
    pub total_lines_changed: u64,
    /// Files touched overall.
    pub files_modified: u64,
    /// Average review comments per pull request.
    pub avg_review_comments: f64,
    /// Merged fraction of opened pull requests, in `[0, 1]`.
    pub merge_rate: f64,
}

/// A contributor with recent activity.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveContributor {
    /// Login.
    pub username: String,
    /// Avatar image URL.
    pub avatar_url: String,
    /// Per-day contributions, newest first.
    pub recent_contributions: Vec<RecentContribution>,
    /// Lifetime total.
    pub total_contributions: u64,
    /// Consecutive active days.
    pub streak: u64,
    /// Totals by kind.
    pub contributions_by_type: ContributionsByType,
    /// Impact figures.
    pub impact_metrics: ImpactMetrics,
}

/// Contributor activity props.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ContributorActivityReport {
    /// Contributors in any order.
    pub contributors: Vec<ActiveContributor>,
    /// Heading.
    pub title: String,
}

impl ContributorActivityReport {
    /// Check usernames and rates.
    pub fn validate(&self) -> ReelResult<()> {
        for c in &self.contributors {
            non_empty("contributor username", &c.username)?;
            let m = &c.impact_metrics;
            finite("avgReviewComments", m.avg_review_comments)?;
            if !(0.0..=1.0).contains(&m.merge_rate) {
                return Err(ReelError::validation(format!(
                    "{}: mergeRate must be within [0, 1], got {}",
                    c.username, m.merge_rate
                )));
            }
        }
        Ok(())
    }
}

/// Headline numbers of a static summary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SummaryMetrics {
    /// Distinct contributors.
    pub contributors: u64,
    /// Merged pull requests.
    pub merged_prs: u64,
    /// Opened issues.
    pub new_issues: u64,
    /// Lines touched.
    pub lines_changed: u64,
}

/// Change log grouped by kind.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SummaryChanges {
    /// New features.
    #[serde(default)]
    pub features: Vec<String>,
    /// Bug fixes.
    #[serde(default)]
    pub fixes: Vec<String>,
    /// Maintenance.
    #[serde(default)]
    pub chores: Vec<String>,
}

/// Churn for a top-level area of the repository.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AreaChange {
    /// Area name (top-level directory or `root`).
    pub name: String,
    /// Files touched.
    pub files: u64,
    /// Added lines.
    pub additions: u64,
    /// Deleted lines.
    pub deletions: u64,
}

impl AreaChange {
    /// Additions plus deletions.
    pub fn churn(&self) -> u64 {
        self.additions.saturating_add(self.deletions)
    }
}

/// A contributor blurb in a static summary.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SummaryContributor {
    /// Login.
    pub name: String,
    /// One-paragraph summary.
    pub summary: String,
    /// Areas touched.
    #[serde(default)]
    pub areas: Vec<String>,
}

/// Pre-written daily summary of a repository.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StaticSummary {
    /// Heading.
    pub title: String,
    /// Release version, possibly empty.
    #[serde(default)]
    pub version: String,
    /// Prose overview.
    #[serde(default)]
    pub overview: String,
    /// Headline numbers.
    pub metrics: SummaryMetrics,
    /// Change log.
    #[serde(default)]
    pub changes: SummaryChanges,
    /// Churn by area.
    #[serde(default)]
    pub areas: Vec<AreaChange>,
    /// Prose issue summary.
    #[serde(default)]
    pub issues_summary: String,
    /// Open questions.
    #[serde(default)]
    pub questions: Vec<String>,
    /// Contributor blurbs.
    #[serde(default)]
    pub top_contributors: Vec<SummaryContributor>,
}

impl StaticSummary {
    /// Check the title and area names.
    pub fn validate(&self) -> ReelResult<()> {
        non_empty("title", &self.title)?;
        self.areas
            .iter()
            .try_for_each(|a| non_empty("area name", &a.name))
    }
}

fn non_empty(field: &str, value: &str) -> ReelResult<()> {
    if value.trim().is_empty() {
        return Err(ReelError::validation(format!("{field} must not be empty")));
    }
    Ok(())
}

fn finite(field: &str, value: f64) -> ReelResult<()> {
    if !value.is_finite() {
        return Err(ReelError::validation(format!("{field} must be finite")));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/data/model.rs"]
mod tests;
