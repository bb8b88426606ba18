use super::*;

#[test]
fn activity_summary_parses_camel_case_and_defaults_show_timeline() {
    let json = r#"{
        "events": {
            "PushEvent": {
                "displayName": "Code Pushes",
                "count": 3,
                "details": [{
                    "repository": "elizaos/core",
                    "author": "wtfsayo",
                    "branch": "main",
                    "createdAt": "2024-03-29T10:00:00Z",
                    "commits": [
                        {"message": "Add monorepo command", "url": "https://example.com/c/1"}
                    ]
                }]
            }
        },
        "startDate": "2024-03-27T00:00:00Z",
        "endDate": "2024-03-30T00:00:00Z",
        "orgName": "elizaos"
    }"#;
    let summary: ActivitySummary = serde_json::from_str(json).unwrap();
    assert!(summary.show_timeline);
    let push = &summary.events["PushEvent"];
    assert_eq!(push.count, 3);
    assert_eq!(push.details[0].branch.as_deref(), Some("main"));
    assert_eq!(push.details[0].commits.len(), 1);
    assert!(push.details[0].title.is_none());
    summary.validate().unwrap();
}

#[test]
fn activity_summary_rejects_inverted_window() {
    let json = r#"{
        "events": {},
        "startDate": "2024-03-30T00:00:00Z",
        "endDate": "2024-03-27T00:00:00Z",
        "orgName": "elizaos"
    }"#;
    let summary: ActivitySummary = serde_json::from_str(json).unwrap();
    let err = summary.validate().unwrap_err();
    assert!(matches!(err, ReelError::Validation(_)));
}

#[test]
fn status_counts_must_fit_total() {
    let snapshot = StatusSnapshot {
        org_name: "elizaos".into(),
        issues: StatusCounts { open: 10, closed: 30, total: 35 },
        pull_requests: StatusCounts { open: 1, closed: 1, total: 2 },
    };
    assert!(snapshot.validate().is_err());
}

#[test]
fn enums_use_lowercase_names() {
    let p: Priority = serde_json::from_str("\"medium\"").unwrap();
    assert_eq!(p, Priority::Medium);
    let s: PrState = serde_json::from_str("\"merged\"").unwrap();
    assert_eq!(s, PrState::Merged);
    assert!(serde_json::from_str::<PrState>("\"draft\"").is_err());
}

#[test]
fn contribution_kind_maps_to_type_key() {
    let c: Contribution = serde_json::from_str(r#"{"type":"Commits","count":156}"#).unwrap();
    assert_eq!(c.kind, "Commits");
    let back = serde_json::to_value(&c).unwrap();
    assert_eq!(back["type"], "Commits");
}

#[test]
fn recent_contribution_uses_day_buckets() {
    let json = r#"{"type":"commit","count":8,"timestamp":"2024-03-29",
        "impact":{"linesChanged":156}}"#;
    let rc: RecentContribution = serde_json::from_str(json).unwrap();
    assert_eq!(rc.timestamp, NaiveDate::from_ymd_opt(2024, 3, 29).unwrap());
    assert_eq!(rc.impact.unwrap().lines_changed, Some(156));
    assert_eq!(rc.impact.unwrap().files_modified, None);
}

#[test]
fn merge_rate_out_of_range_is_rejected() {
    let report = ContributorActivityReport {
        title: "Contributor Activity".into(),
        contributors: vec![ActiveContributor {
            username: "wtfsayo".into(),
            avatar_url: String::new(),
            recent_contributions: vec![],
            total_contributions: 1,
            streak: 1,
            contributions_by_type: ContributionsByType {
                commits: 1,
                reviews: 0,
                issues: 0,
                pull_requests: 0,
            },
            impact_metrics: ImpactMetrics {
                total_lines_changed: 1,
                files_modified: 1,
                avg_review_comments: 0.0,
                merge_rate: 1.5,
            },
        }],
    };
    assert!(report.validate().is_err());
}

#[test]
fn static_summary_keeps_snake_case_keys() {
    let json = r#"{
        "title": "elizaos Eliza",
        "metrics": {"contributors": 5, "merged_prs": 4, "new_issues": 3, "lines_changed": 4171},
        "areas": [{"name": "packages", "files": 49, "additions": 2015, "deletions": 1629}]
    }"#;
    let s: StaticSummary = serde_json::from_str(json).unwrap();
    assert_eq!(s.metrics.merged_prs, 4);
    assert_eq!(s.areas[0].churn(), 3644);
    assert!(s.changes.features.is_empty());
    s.validate().unwrap();
}

#[test]
fn contributions_by_type_sum() {
    let c = ContributionsByType {
        commits: 156,
        reviews: 42,
        issues: 28,
        pull_requests: 50,
    };
    assert_eq!(c.sum(), 276);
    assert_eq!(c.entries()[3].0, "pullRequests");
}

#[test]
fn contributions_by_type_sum_saturates() {
    let c = ContributionsByType {
        commits: u64::MAX,
        reviews: 1,
        issues: u64::MAX,
        pull_requests: 0,
    };
    assert_eq!(c.sum(), u64::MAX);
}
