//! Grouping, ordering and bucketing of activity records.
//!
//! All helpers borrow from their input and preserve first-seen order where records are grouped,
//! so scene layouts are deterministic for a given props value.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::data::model::{
    ActiveContributor, EventDetail, EventGroup, FileChange, PrState, PullRequest,
    RankedContributor, SummaryChanges,
};

/// An event detail tagged with its event type.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlatEvent<'a> {
    /// Event type key (`PushEvent`, ...).
    pub kind: &'a str,
    /// Display name of the event group.
    pub display_name: &'a str,
    /// The event itself.
    pub detail: &'a EventDetail,
}

impl FlatEvent<'_> {
    /// When the event happened.
    pub fn time(&self) -> DateTime<Utc> {
        self.detail.created_at
    }
}

/// Every event detail in group order, then detail order.
pub fn flatten_events(events: &BTreeMap<String, EventGroup>) -> Vec<FlatEvent<'_>> {
    events
        .iter()
        .flat_map(|(kind, group)| {
            group.details.iter().map(move |detail| FlatEvent {
                kind: kind.as_str(),
                display_name: group.display_name.as_str(),
                detail,
            })
        })
        .collect()
}

/// Every event detail sorted by time (stable for equal timestamps).
pub fn timeline_points(events: &BTreeMap<String, EventGroup>) -> Vec<FlatEvent<'_>> {
    let mut points = flatten_events(events);
    points.sort_by_key(|p| p.time());
    points
}

/// Position of `time` along an axis `span` units wide covering `[start, end]`.
///
/// Times outside the window extrapolate linearly. A degenerate window maps everything to 0.
pub fn timeline_position(
    time: DateTime<Utc>,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    span: f64,
) -> f64 {
    let range = (end - start).num_milliseconds();
    if range <= 0 {
        return 0.0;
    }
    let offset = (time - start).num_milliseconds();
    offset as f64 / range as f64 * span
}

/// `n` evenly spaced instants from `start` to `end` inclusive.
pub fn time_markers(start: DateTime<Utc>, end: DateTime<Utc>, n: usize) -> Vec<DateTime<Utc>> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let range = (end - start).num_milliseconds();
            let steps = (n - 1) as i64;
            (0..n as i64)
                .map(|i| start + chrono::Duration::milliseconds(range * i / steps))
                .collect()
        }
    }
}

fn unique_by<'a>(
    events: &'a BTreeMap<String, EventGroup>,
    key: impl Fn(&'a EventDetail) -> &'a str,
) -> Vec<&'a str> {
    let mut out: Vec<&str> = Vec::new();
    for group in events.values() {
        for detail in &group.details {
            let k = key(detail);
            if !out.contains(&k) {
                out.push(k);
            }
        }
    }
    out
}

/// Distinct authors in first-seen order.
pub fn unique_authors(events: &BTreeMap<String, EventGroup>) -> Vec<&str> {
    unique_by(events, |d| d.author.as_str())
}

/// Distinct repositories in first-seen order.
pub fn unique_repositories(events: &BTreeMap<String, EventGroup>) -> Vec<&str> {
    unique_by(events, |d| d.repository.as_str())
}

/// Events by one author, in group order.
pub fn events_by_author<'a>(
    events: &'a BTreeMap<String, EventGroup>,
    author: &str,
) -> Vec<FlatEvent<'a>> {
    flatten_events(events)
        .into_iter()
        .filter(|e| e.detail.author == author)
        .collect()
}

/// Events grouped by repository, repositories in first-seen order.
pub fn events_by_repository(
    events: &BTreeMap<String, EventGroup>,
) -> Vec<(&str, Vec<FlatEvent<'_>>)> {
    let mut out: Vec<(&str, Vec<FlatEvent<'_>>)> = Vec::new();
    for event in flatten_events(events) {
        let repo = event.detail.repository.as_str();
        match out.iter_mut().find(|(r, _)| *r == repo) {
            Some((_, list)) => list.push(event),
            None => out.push((repo, vec![event])),
        }
    }
    out
}

/// Short repository name: the second `/`-separated segment, or the whole slug without a `/`.
pub fn repo_short_name(slug: &str) -> &str {
    slug.split('/').nth(1).unwrap_or(slug)
}

/// The `n` highest-scoring contributors, best first; ties keep input order.
pub fn top_by_score(contributors: &[RankedContributor], n: usize) -> Vec<&RankedContributor> {
    let mut sorted: Vec<&RankedContributor> = contributors.iter().collect();
    sorted.sort_by(|a, b| b.total_score.total_cmp(&a.total_score));
    sorted.truncate(n);
    sorted
}

/// Contributors ordered by lifetime contributions, most first.
pub fn sort_by_total_contributions(contributors: &[ActiveContributor]) -> Vec<&ActiveContributor> {
    let mut sorted: Vec<&ActiveContributor> = contributors.iter().collect();
    sorted.sort_by(|a, b| b.total_contributions.cmp(&a.total_contributions));
    sorted
}

/// The `n` files with the largest reported churn, largest first.
pub fn top_file_changes(changes: &[FileChange], n: usize) -> Vec<&FileChange> {
    let mut sorted: Vec<&FileChange> = changes.iter().collect();
    sorted.sort_by(|a, b| b.total.cmp(&a.total));
    sorted.truncate(n);
    sorted
}

/// Pull requests grouped by state, states in first-seen order.
pub fn pull_requests_by_state(prs: &[PullRequest]) -> Vec<(PrState, Vec<&PullRequest>)> {
    let mut out: Vec<(PrState, Vec<&PullRequest>)> = Vec::new();
    for pr in prs {
        match out.iter_mut().find(|(s, _)| *s == pr.state) {
            Some((_, list)) => list.push(pr),
            None => out.push((pr.state, vec![pr])),
        }
    }
    out
}

/// Heat level (0..=4) for a day's contribution count.
pub fn contribution_level(count: u64) -> u8 {
    match count {
        0 => 0,
        1..=3 => 1,
        4..=6 => 2,
        7..=9 => 3,
        _ => 4,
    }
}

/// Podium slot (left to right) for a 0-based rank: the winner stands in the middle.
pub fn podium_slot(rank: usize) -> usize {
    match rank {
        0 => 1,
        1 => 0,
        r => r,
    }
}

/// Kind of a change-log entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum ChangeKind {
    /// New feature.
    Feature,
    /// Bug fix.
    Fix,
    /// Maintenance.
    Chore,
}

impl ChangeKind {
    /// Badge label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Feature => "Feature",
            Self::Fix => "Fix",
            Self::Chore => "Chore",
        }
    }
}

/// A change-log entry tagged with its kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChangeItem<'a> {
    /// Entry kind.
    pub kind: ChangeKind,
    /// Entry text.
    pub text: &'a str,
}

/// Features, then fixes, then chores.
pub fn change_items(changes: &SummaryChanges) -> Vec<ChangeItem<'_>> {
    tagged(ChangeKind::Feature, &changes.features)
        .chain(tagged(ChangeKind::Fix, &changes.fixes))
        .chain(tagged(ChangeKind::Chore, &changes.chores))
        .collect()
}

fn tagged(kind: ChangeKind, list: &[String]) -> impl Iterator<Item = ChangeItem<'_>> {
    list.iter().map(move |text| ChangeItem {
        kind,
        text: text.as_str(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/data/aggregate.rs"]
mod tests;
