use super::*;

#[test]
fn every_fixture_parses_and_validates() {
    activity_summary(true).unwrap().validate().unwrap();
    status_snapshot().unwrap().validate().unwrap();
    code_changes().unwrap().validate().unwrap();
    contributor_board().unwrap().validate().unwrap();
    new_issues().unwrap().validate().unwrap();
    pull_requests().unwrap().validate().unwrap();
    contributor_activity().unwrap().validate().unwrap();
    static_summary().unwrap().validate().unwrap();
}

#[test]
fn activity_variant_follows_flag() {
    assert!(activity_summary(true).unwrap().show_timeline);
    assert!(!activity_summary(false).unwrap().show_timeline);
}

#[test]
fn fixture_sizes() {
    assert_eq!(activity_summary(true).unwrap().events.len(), 3);
    assert_eq!(code_changes().unwrap().changes.len(), 8);
    assert_eq!(new_issues().unwrap().issues.len(), 5);
    assert_eq!(pull_requests().unwrap().pull_requests.len(), 5);
    let report = contributor_activity().unwrap();
    assert_eq!(report.contributors.len(), 3);
    assert!(report.contributors.iter().all(|c| c.recent_contributions.len() == 5));
}
