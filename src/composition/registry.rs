//! Built-in compositions and their props.
//!
//! Every reel is registered under a stable id with seed props from [`crate::data::sample`].
//! Callers may replace the props with a JSON document of the same schema; the props are
//! validated before any layer is built.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::composition::dsl::CompositionBuilder;
use crate::composition::model::Composition;
use crate::data::model::{
    ActivitySummary, CodeChangeSet, ContributorActivityReport, ContributorBoard, IssueList,
    PullRequestList, StaticSummary, StatusSnapshot,
};
use crate::data::sample;
use crate::foundation::error::{ReelError, ReelResult};
use crate::scene::activity::{
    ActivityDetailScene, ActivityFlowScene, StatsOverlayScene, TimelineScene,
};
use crate::scene::code_changes::CodeChangesScene;
use crate::scene::contributors::{
    ContributionBreakdownScene, ContributorHeadingScene, ContributorOverviewScene,
    ImpactMetricsScene, PodiumScene,
};
use crate::scene::issues::{IssueListScene, PullRequestFlowScene, StatusBarsScene};
use crate::scene::layout::date_range;
use crate::scene::summary::{AreasScene, ChangesScene, MetricsScene};
use crate::scene::title::TitleScene;

/// Registry entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct CompositionEntry {
    /// Stable id.
    pub id: &'static str,
    /// Length in frames with the default props.
    pub duration: u64,
    /// One-line summary.
    pub description: &'static str,
}

/// Timeline variant of the activity reel.
pub const GITHUB_ACTIVITY: &str = "GitHubActivity";
/// Detailed variant of the activity reel.
pub const DETAILED_ACTIVITY: &str = "DetailedActivity";
/// Issue and pull request status bars.
pub const ISSUES_PRS_STATUS: &str = "IssuesPRsStatus";
/// Code churn bars.
pub const CODE_CHANGES: &str = "CodeChanges";
/// Contributor podium.
pub const TOP_CONTRIBUTORS: &str = "TopContributors";
/// New issue cards.
pub const NEW_ISSUES: &str = "NewIssues";
/// Pull request rings and cards.
pub const PULL_REQUEST_FLOW: &str = "PullRequestFlow";
/// Contributor activity sections.
pub const CONTRIBUTOR_ACTIVITY: &str = "ContributorActivity";
/// Static daily summary.
pub const GITHUB_STATIC_SUMMARY: &str = "GitHubStaticSummary";

/// Frames per contributor activity section.
pub const SECTION_FRAMES: u64 = 120;

const TIMELINE_FRAMES: u64 = 450;
const DETAILED_FRAMES: u64 = 300;

/// Every registered composition, in listing order.
pub const COMPOSITIONS: [CompositionEntry; 9] = [
    CompositionEntry {
        id: GITHUB_ACTIVITY,
        duration: TIMELINE_FRAMES,
        description: "Title, event timeline and author-to-repository flow",
    },
    CompositionEntry {
        id: DETAILED_ACTIVITY,
        duration: DETAILED_FRAMES,
        description: "Per-type counts and per-repository event lists",
    },
    CompositionEntry {
        id: ISSUES_PRS_STATUS,
        duration: 180,
        description: "Open/closed bars for issues and pull requests",
    },
    CompositionEntry {
        id: CODE_CHANGES,
        duration: 240,
        description: "Additions and deletions for the most-changed files",
    },
    CompositionEntry {
        id: TOP_CONTRIBUTORS,
        duration: 300,
        description: "Podium for the three highest scores",
    },
    CompositionEntry {
        id: NEW_ISSUES,
        duration: 360,
        description: "Cards for newly opened issues",
    },
    CompositionEntry {
        id: PULL_REQUEST_FLOW,
        duration: 300,
        description: "Pull request state rings and recent cards",
    },
    CompositionEntry {
        id: CONTRIBUTOR_ACTIVITY,
        duration: 3 * SECTION_FRAMES,
        description: "Contributor overview, breakdown and impact sections",
    },
    CompositionEntry {
        id: GITHUB_STATIC_SUMMARY,
        duration: 360,
        description: "Title, metrics, change log and area churn",
    },
];

/// Look up a registry entry.
pub fn lookup(id: &str) -> ReelResult<&'static CompositionEntry> {
    let entries: &'static [CompositionEntry] = &COMPOSITIONS;
    entries.iter().find(|s| s.id == id).ok_or_else(|| {
        let known: Vec<&str> = entries.iter().map(|s| s.id).collect();
        ReelError::validation(format!(
            "unknown composition '{id}' (known: {})",
            known.join(", ")
        ))
    })
}

/// Props for one of the registered compositions.
#[derive(Clone, Debug, PartialEq)]
pub enum CompositionProps {
    /// Both activity reels.
    Activity(ActivitySummary),
    /// Issue and pull request status.
    Status(StatusSnapshot),
    /// Code churn.
    CodeChanges(CodeChangeSet),
    /// Podium.
    Contributors(ContributorBoard),
    /// New issues.
    Issues(IssueList),
    /// Pull request flow.
    PullRequests(PullRequestList),
    /// Contributor activity.
    ContributorActivity(ContributorActivityReport),
    /// Static daily summary.
    StaticSummary(StaticSummary),
}

fn parse<T: DeserializeOwned>(id: &str, json: &str) -> ReelResult<T> {
    serde_json::from_str(json).map_err(|e| ReelError::serde(format!("props for '{id}': {e}")))
}

impl CompositionProps {
    /// Seed props for `id`.
    pub fn defaults(id: &str) -> ReelResult<Self> {
        Ok(match lookup(id)?.id {
            GITHUB_ACTIVITY => Self::Activity(sample::activity_summary(true)?),
            DETAILED_ACTIVITY => Self::Activity(sample::activity_summary(false)?),
            ISSUES_PRS_STATUS => Self::Status(sample::status_snapshot()?),
            CODE_CHANGES => Self::CodeChanges(sample::code_changes()?),
            TOP_CONTRIBUTORS => Self::Contributors(sample::contributor_board()?),
            NEW_ISSUES => Self::Issues(sample::new_issues()?),
            PULL_REQUEST_FLOW => Self::PullRequests(sample::pull_requests()?),
            CONTRIBUTOR_ACTIVITY => Self::ContributorActivity(sample::contributor_activity()?),
            _ => Self::StaticSummary(sample::static_summary()?),
        })
    }

    /// Parse props for `id` from JSON.
    ///
    /// For [`DETAILED_ACTIVITY`] a missing `showTimeline` defaults to `false`.
    pub fn from_json(id: &str, json: &str) -> ReelResult<Self> {
        Ok(match lookup(id)?.id {
            GITHUB_ACTIVITY => Self::Activity(parse(id, json)?),
            DETAILED_ACTIVITY => {
                let mut value: serde_json::Value = parse(id, json)?;
                if let Some(obj) = value.as_object_mut() {
                    obj.entry("showTimeline").or_insert(serde_json::Value::Bool(false));
                }
                Self::Activity(
                    serde_json::from_value(value)
                        .map_err(|e| ReelError::serde(format!("props for '{id}': {e}")))?,
                )
            }
            ISSUES_PRS_STATUS => Self::Status(parse(id, json)?),
            CODE_CHANGES => Self::CodeChanges(parse(id, json)?),
            TOP_CONTRIBUTORS => Self::Contributors(parse(id, json)?),
            NEW_ISSUES => Self::Issues(parse(id, json)?),
            PULL_REQUEST_FLOW => Self::PullRequests(parse(id, json)?),
            CONTRIBUTOR_ACTIVITY => Self::ContributorActivity(parse(id, json)?),
            _ => Self::StaticSummary(parse(id, json)?),
        })
    }

    /// Validate the wrapped props.
    pub fn validate(&self) -> ReelResult<()> {
        match self {
            Self::Activity(p) => p.validate(),
            Self::Status(p) => p.validate(),
            Self::CodeChanges(p) => p.validate(),
            Self::Contributors(p) => p.validate(),
            Self::Issues(p) => p.validate(),
            Self::PullRequests(p) => p.validate(),
            Self::ContributorActivity(p) => p.validate(),
            Self::StaticSummary(p) => p.validate(),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::Activity(_) => "activity",
            Self::Status(_) => "status",
            Self::CodeChanges(_) => "code changes",
            Self::Contributors(_) => "contributors",
            Self::Issues(_) => "issues",
            Self::PullRequests(_) => "pull requests",
            Self::ContributorActivity(_) => "contributor activity",
            Self::StaticSummary(_) => "static summary",
        }
    }
}

/// Build composition `id`, with props parsed from `props_json` when given.
#[tracing::instrument(skip(props_json), fields(custom_props = props_json.is_some()))]
pub fn build(id: &str, props_json: Option<&str>) -> ReelResult<Composition> {
    let props = match props_json {
        Some(json) => CompositionProps::from_json(id, json)?,
        None => CompositionProps::defaults(id)?,
    };
    build_with(id, props)
}

/// Build composition `id` from already parsed props.
///
/// The length always comes from the registry entry; props only change what is drawn.
pub fn build_with(id: &str, props: CompositionProps) -> ReelResult<Composition> {
    let CompositionEntry { id, duration, .. } = *lookup(id)?;
    props.validate()?;
    let mismatch = |props: &CompositionProps| {
        ReelError::validation(format!(
            "composition '{id}' does not take {} props",
            props.kind()
        ))
    };

    let comp = match (id, props) {
        (GITHUB_ACTIVITY | DETAILED_ACTIVITY, CompositionProps::Activity(p)) => {
            activity(id, duration, p)?
        }
        (ISSUES_PRS_STATUS, CompositionProps::Status(p)) => {
            CompositionBuilder::new(id, duration).layer(StatusBarsScene::new(Arc::new(p))).build()?
        }
        (CODE_CHANGES, CompositionProps::CodeChanges(p)) => {
            CompositionBuilder::new(id, duration).layer(CodeChangesScene::new(Arc::new(p))).build()?
        }
        (TOP_CONTRIBUTORS, CompositionProps::Contributors(p)) => {
            CompositionBuilder::new(id, duration).layer(PodiumScene::new(Arc::new(p))).build()?
        }
        (NEW_ISSUES, CompositionProps::Issues(p)) => {
            CompositionBuilder::new(id, duration).layer(IssueListScene::new(Arc::new(p))).build()?
        }
        (PULL_REQUEST_FLOW, CompositionProps::PullRequests(p)) => {
            CompositionBuilder::new(id, duration)
                .layer(PullRequestFlowScene::new(Arc::new(p)))
                .build()?
        }
        (CONTRIBUTOR_ACTIVITY, CompositionProps::ContributorActivity(p)) => {
            let report = Arc::new(p);
            CompositionBuilder::new(id, duration)
                .layer(ContributorHeadingScene::new(report.clone()))
                .sequence(0, SECTION_FRAMES, ContributorOverviewScene::new(report.clone()))
                .sequence(
                    SECTION_FRAMES,
                    SECTION_FRAMES,
                    ContributionBreakdownScene::new(report.clone()),
                )
                .sequence(2 * SECTION_FRAMES, SECTION_FRAMES, ImpactMetricsScene::new(report))
                .build()?
        }
        (GITHUB_STATIC_SUMMARY, CompositionProps::StaticSummary(p)) => {
            let subtitle = Some(p.version.clone());
            let title = TitleScene::new(p.title.clone(), subtitle);
            let summary = Arc::new(p);
            CompositionBuilder::new(id, duration)
                .sequence(0, 90, title)
                .sequence(90, 90, MetricsScene::new(summary.clone()))
                .sequence(180, 90, ChangesScene::new(summary.clone()))
                .sequence(270, 90, AreasScene::new(summary))
                .build()?
        }
        (_, props) => return Err(mismatch(&props)),
    };

    tracing::debug!(
        id = %comp.id,
        frames = comp.duration.0,
        layers = comp.layers.len(),
        "composition built"
    );
    Ok(comp)
}

/// Timeline or detailed activity reel, chosen by `show_timeline`, cut to `duration` frames.
fn activity(id: &str, duration: u64, summary: ActivitySummary) -> ReelResult<Composition> {
    let fit = |start: u64, len: u64| len.min(duration.saturating_sub(start));
    let summary = Arc::new(summary);
    if !summary.show_timeline {
        return CompositionBuilder::new(id, duration)
            .sequence(0, fit(0, DETAILED_FRAMES), ActivityDetailScene::new(summary))
            .build();
    }

    let title = TitleScene::new(
        format!("{} Activity", summary.org_name),
        Some(date_range(summary.start_date, summary.end_date)),
    );
    CompositionBuilder::new(id, duration)
        .sequence(0, fit(0, 90), title)
        .sequence(90, fit(90, 150), TimelineScene::new(summary.clone()))
        .sequence(240, fit(240, 150), ActivityFlowScene::new(summary.clone()))
        .layer(StatsOverlayScene::new(summary))
        .build()
}

#[cfg(test)]
#[path = "../../tests/unit/composition/registry.rs"]
mod tests;
