use super::*;
use crate::data::sample;

fn at(s: &str) -> DateTime<Utc> {
    s.parse().unwrap()
}

#[test]
fn timeline_points_sort_by_time() {
    let summary = sample::activity_summary(true).unwrap();
    let points = timeline_points(&summary.events);
    let kinds: Vec<&str> = points.iter().map(|p| p.kind).collect();
    assert_eq!(kinds, ["IssuesEvent", "PushEvent", "PullRequestEvent"]);
    assert!(points.windows(2).all(|w| w[0].time() <= w[1].time()));
}

#[test]
fn timeline_position_is_linear_over_window() {
    let start = at("2024-03-27T00:00:00Z");
    let end = at("2024-03-30T00:00:00Z");
    assert_eq!(timeline_position(start, start, end, 1720.0), 0.0);
    assert_eq!(timeline_position(end, start, end, 1720.0), 1720.0);
    let mid = at("2024-03-28T12:00:00Z");
    assert!((timeline_position(mid, start, end, 1720.0) - 860.0).abs() < 1e-9);
    assert_eq!(timeline_position(mid, end, start, 1720.0), 0.0);
}

#[test]
fn time_markers_cover_window_inclusive() {
    let start = at("2024-03-27T00:00:00Z");
    let end = at("2024-03-31T00:00:00Z");
    let markers = time_markers(start, end, 5);
    assert_eq!(markers.len(), 5);
    assert_eq!(markers[0], start);
    assert_eq!(markers[2], at("2024-03-29T00:00:00Z"));
    assert_eq!(markers[4], end);
    assert!(time_markers(start, end, 0).is_empty());
    assert_eq!(time_markers(start, end, 1), vec![start]);
}

#[test]
fn unique_lists_keep_first_seen_order() {
    let summary = sample::activity_summary(true).unwrap();
    // Groups iterate alphabetically: IssuesEvent, PullRequestEvent, PushEvent.
    assert_eq!(unique_authors(&summary.events), ["frahlg", "sw2347", "wtfsayo"]);
    assert_eq!(
        unique_repositories(&summary.events),
        ["elizaos/plugin-sql", "elizaos/docs", "elizaos/core"]
    );
}

#[test]
fn events_group_by_repository_and_author() {
    let summary = sample::activity_summary(true).unwrap();
    let by_repo = events_by_repository(&summary.events);
    assert_eq!(by_repo.len(), 3);
    assert_eq!(by_repo[0].0, "elizaos/plugin-sql");
    assert_eq!(by_repo[0].1[0].display_name, "Issues");

    let mine = events_by_author(&summary.events, "wtfsayo");
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].kind, "PushEvent");
}

#[test]
fn repo_short_name_strips_owner() {
    assert_eq!(repo_short_name("elizaos/plugin-sql"), "plugin-sql");
    assert_eq!(repo_short_name("standalone"), "standalone");
    assert_eq!(repo_short_name("elizaos/plugins/sql"), "plugins");
}

#[test]
fn rankings_sort_descending() {
    let mut board = sample::contributor_board().unwrap();
    board.contributors.reverse();
    let top = top_by_score(&board.contributors, 2);
    let names: Vec<&str> = top.iter().map(|c| c.username.as_str()).collect();
    assert_eq!(names, ["wtfsayo", "sw2347"]);

    let report = sample::contributor_activity().unwrap();
    let sorted = sort_by_total_contributions(&report.contributors);
    assert_eq!(sorted[0].total_contributions, 276);
    assert_eq!(sorted[2].total_contributions, 224);
}

#[test]
fn top_file_changes_truncates() {
    let set = sample::code_changes().unwrap();
    let top = top_file_changes(&set.changes, 3);
    let totals: Vec<u64> = top.iter().map(|c| c.total).collect();
    assert_eq!(totals, [368, 234, 190]);
}

#[test]
fn pull_requests_group_in_first_seen_state_order() {
    let prs = sample::pull_requests().unwrap();
    let groups = pull_requests_by_state(&prs.pull_requests);
    let states: Vec<PrState> = groups.iter().map(|(s, _)| *s).collect();
    assert_eq!(states, [PrState::Open, PrState::Merged, PrState::Closed]);
    assert_eq!(groups[0].1.len(), 2);
    assert_eq!(groups[2].1.len(), 1);
}

#[test]
fn contribution_levels_bucket_counts() {
    let levels: Vec<u8> = [0, 1, 3, 4, 6, 7, 9, 10, 50]
        .into_iter()
        .map(contribution_level)
        .collect();
    assert_eq!(levels, [0, 1, 1, 2, 2, 3, 3, 4, 4]);
}

#[test]
fn podium_puts_winner_in_the_middle() {
    assert_eq!(podium_slot(0), 1);
    assert_eq!(podium_slot(1), 0);
    assert_eq!(podium_slot(2), 2);
}

#[test]
fn change_items_order_features_fixes_chores() {
    let summary = sample::static_summary().unwrap();
    let items = change_items(&summary.changes);
    let kinds: Vec<ChangeKind> = items.iter().map(|i| i.kind).collect();
    assert_eq!(
        kinds,
        [ChangeKind::Feature, ChangeKind::Fix, ChangeKind::Fix, ChangeKind::Chore]
    );
    assert_eq!(items[0].text, "add monorepo command to cli");
    assert_eq!(ChangeKind::Chore.label(), "Chore");
}
