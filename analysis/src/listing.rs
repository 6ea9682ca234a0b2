//! Contract list presentation helpers.

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

use crate::types::{ContractSummary, Severity};

/// Header line above the contract list.
#[must_use]
pub fn count_label(count: usize) -> String {
    if count == 1 {
        "1 contract uploaded".to_owned()
    } else {
        format!("{count} contracts uploaded")
    }
}

/// Highlighted risk count on a contract card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RiskBadge {
    pub severity: Severity,
    pub count: u32,
}

impl RiskBadge {
    #[must_use]
    pub fn label(self) -> String {
        format!("{} {}", self.count, self.severity.title())
    }
}

impl ContractSummary {
    /// Critical count when non-zero, otherwise the high count when non-zero.
    #[must_use]
    pub fn risk_badge(&self) -> Option<RiskBadge> {
        match (self.critical_risks.unwrap_or(0), self.high_risks.unwrap_or(0)) {
            (0, 0) => None,
            (0, high) => Some(RiskBadge { severity: Severity::High, count: high }),
            (critical, _) => Some(RiskBadge { severity: Severity::Critical, count: critical }),
        }
    }

    /// `"N question(s) asked"`, only once at least one question was asked.
    #[must_use]
    pub fn questions_label(&self) -> Option<String> {
        match self.questions_asked.unwrap_or(0) {
            0 => None,
            1 => Some("1 question asked".to_owned()),
            n => Some(format!("{n} questions asked")),
        }
    }
}

/// Drop the entry with `id`; returns whether one was removed.
pub fn remove_contract(contracts: &mut Vec<ContractSummary>, id: &str) -> bool {
    let before = contracts.len();
    contracts.retain(|contract| contract.id != id);
    contracts.len() != before
}
