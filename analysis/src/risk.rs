//! Flattening of the backend risk analysis into table rows.

#[cfg(test)]
#[path = "risk_test.rs"]
mod risk_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::citation;
use crate::types::{Risk, RiskAnalysis, Severity};

static CLAUSE_REF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(Clause|Section|Article|Appendix|Schedule)\s+[\dIVXA-Z.]+").expect("static regex")
});

/// Placeholder shown when a risk has no clause reference in its evidence.
pub const NO_CLAUSE: &str = "N/A";

/// One row of the risk table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RiskRow {
    pub severity: Severity,
    pub risk_type: String,
    pub clause: String,
    pub evidence: String,
    pub pages: Vec<u32>,
    pub summary: String,
}

impl RiskAnalysis {
    /// All risks, most severe bucket first, preserving order within a bucket.
    #[must_use]
    pub fn rows(&self) -> Vec<RiskRow> {
        let Some(buckets) = self.risks_by_severity.as_ref() else {
            return Vec::new();
        };
        Severity::ALL
            .into_iter()
            .flat_map(|severity| buckets.bucket(severity).iter().map(move |risk| risk_row(severity, risk)))
            .collect()
    }

    /// Whether there is enough data to render the summary cards.
    #[must_use]
    pub fn has_summary(&self) -> bool {
        self.summary.is_some()
    }

    /// Neither counts nor risk records were returned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.summary.is_none() && self.risks_by_severity.is_none()
    }
}

fn risk_row(severity: Severity, risk: &Risk) -> RiskRow {
    let evidence = risk.evidence.clone().unwrap_or_default();
    RiskRow {
        severity,
        risk_type: risk.risk_type.clone().unwrap_or_else(|| "Unnamed risk".to_owned()),
        clause: clause_reference(&evidence).unwrap_or_else(|| NO_CLAUSE.to_owned()),
        pages: risk_pages(risk),
        summary: risk_summary(risk),
        evidence: if evidence.trim().is_empty() { "No evidence provided".to_owned() } else { evidence },
    }
}

/// First `Clause 3.2` / `Section IV` / `Schedule B` style reference in `text`.
#[must_use]
pub fn clause_reference(text: &str) -> Option<String> {
    CLAUSE_REF.find(text).map(|m| m.as_str().to_owned())
}

/// Pages for a risk: explicit references when present, otherwise pages
/// mentioned in the evidence text.
#[must_use]
pub fn risk_pages(risk: &Risk) -> Vec<u32> {
    if !risk.page_references.is_empty() {
        return risk.page_references.clone();
    }
    risk.evidence.as_deref().map(citation::mentioned_pages).unwrap_or_default()
}

/// `Impact: ...` and `Recommendation: ...` joined by a blank line.
#[must_use]
pub fn risk_summary(risk: &Risk) -> String {
    let parts: Vec<String> = [("Impact", &risk.impact), ("Recommendation", &risk.recommendation)]
        .into_iter()
        .filter_map(|(label, value)| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(|v| format!("{label}: {v}"))
        })
        .collect();
    if parts.is_empty() {
        return "No summary available".to_owned();
    }
    parts.join("\n\n")
}
