use super::*;
use crate::delete::{DeleteFlow, DeleteTarget};

fn summary(id: &str) -> ContractSummary {
    ContractSummary { id: id.to_owned(), filename: format!("{id}.pdf"), ..ContractSummary::default() }
}

// =============================================================
// Count label
// =============================================================

#[test]
fn count_label_matches_list_length() {
    for n in [0_usize, 1, 2, 17] {
        let contracts: Vec<ContractSummary> = (0..n).map(|i| summary(&i.to_string())).collect();
        let label = count_label(contracts.len());
        assert!(label.starts_with(&n.to_string()));
        assert_eq!(label.contains("contracts"), n != 1);
    }
}

// =============================================================
// Card badges
// =============================================================

#[test]
fn critical_count_wins_over_high() {
    let contract = ContractSummary { critical_risks: Some(2), high_risks: Some(5), ..summary("a") };
    assert_eq!(contract.risk_badge().map(RiskBadge::label).as_deref(), Some("2 Critical"));
}

#[test]
fn high_count_shown_without_critical() {
    let contract = ContractSummary { critical_risks: Some(0), high_risks: Some(3), ..summary("a") };
    assert_eq!(contract.risk_badge().map(RiskBadge::label).as_deref(), Some("3 High"));
    let missing = ContractSummary { high_risks: Some(1), ..summary("b") };
    assert_eq!(missing.risk_badge().map(|b| b.severity), Some(Severity::High));
}

#[test]
fn no_badge_without_counts() {
    assert_eq!(summary("a").risk_badge(), None);
}

#[test]
fn questions_label_only_when_asked() {
    assert_eq!(summary("a").questions_label(), None);
    let one = ContractSummary { questions_asked: Some(1), ..summary("a") };
    assert_eq!(one.questions_label().as_deref(), Some("1 question asked"));
    let many = ContractSummary { questions_asked: Some(4), ..summary("a") };
    assert_eq!(many.questions_label().as_deref(), Some("4 questions asked"));
}

// =============================================================
// Delete then remove
// =============================================================

#[test]
fn confirmed_delete_removes_exactly_that_entry() {
    let mut contracts = vec![summary("a"), summary("b"), summary("c")];
    let mut flow = DeleteFlow::default();
    flow.request(DeleteTarget { id: "b".to_owned(), filename: "b.pdf".to_owned() });
    flow.set_input("DELETE".to_owned());
    flow.confirm().expect("confirm");
    let removed = flow.on_success().expect("success");
    assert!(remove_contract(&mut contracts, &removed));
    let ids: Vec<&str> = contracts.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "c"]);
    assert_eq!(count_label(contracts.len()), "2 contracts uploaded");
}

#[test]
fn wrong_confirmation_leaves_list_untouched() {
    let mut contracts = vec![summary("a"), summary("b")];
    let mut flow = DeleteFlow::default();
    flow.request(DeleteTarget { id: "a".to_owned(), filename: "a.pdf".to_owned() });
    flow.set_input("yes".to_owned());
    if let Some(id) = flow.confirm() {
        remove_contract(&mut contracts, &id);
    }
    assert_eq!(contracts.len(), 2);
    assert!(flow.is_open());
}

#[test]
fn removing_unknown_id_is_a_no_op() {
    let mut contracts = vec![summary("a")];
    assert!(!remove_contract(&mut contracts, "zzz"));
    assert_eq!(contracts.len(), 1);
}
