//! Long-form analysis sections of a contract detail.

#[cfg(test)]
#[path = "sections_test.rs"]
mod sections_test;

use crate::types::ContractDetail;

/// One precomputed markdown section produced by the backend analysis run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Compliance,
    Clauses,
    Scope,
    Completeness,
    Timeline,
    Financial,
    BidCriteria,
    Audit,
}

impl Section {
    pub const ALL: [Self; 8] = [
        Self::Compliance,
        Self::Clauses,
        Self::Scope,
        Self::Completeness,
        Self::Timeline,
        Self::Financial,
        Self::BidCriteria,
        Self::Audit,
    ];

    /// Stable identifier used in URLs and CLI arguments.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Compliance => "compliance",
            Self::Clauses => "clauses",
            Self::Scope => "scope",
            Self::Completeness => "completeness",
            Self::Timeline => "timeline",
            Self::Financial => "financial",
            Self::BidCriteria => "bid-criteria",
            Self::Audit => "audit",
        }
    }

    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.slug() == slug)
    }

    /// Short tab label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Compliance => "Compliance",
            Self::Clauses => "Clauses",
            Self::Scope => "Scope",
            Self::Completeness => "Completeness",
            Self::Timeline => "Timeline",
            Self::Financial => "Financial",
            Self::BidCriteria => "Bid Criteria",
            Self::Audit => "Audit Trail",
        }
    }

    /// Heading shown above the section body.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Compliance => "Compliance Checklist",
            Self::Clauses => "Clause Summaries",
            Self::Scope => "Scope Alignment",
            Self::Completeness => "Completeness Check",
            Self::Timeline => "Timeline & Milestones",
            Self::Financial => "Financial Analysis",
            Self::BidCriteria => "Bid Qualifying Criteria",
            Self::Audit => "Audit Trail",
        }
    }

    /// Raw section text, if the backend produced a non-blank one.
    #[must_use]
    pub fn text(self, detail: &ContractDetail) -> Option<&str> {
        let field = match self {
            Self::Compliance => &detail.compliance_checklist,
            Self::Clauses => &detail.clause_summaries,
            Self::Scope => &detail.scope_alignment,
            Self::Completeness => &detail.completeness_check,
            Self::Timeline => &detail.timeline_milestones,
            Self::Financial => &detail.financial_risks,
            Self::BidCriteria => &detail.bid_qualifying_criteria,
            Self::Audit => &detail.audit_trail,
        };
        field.as_deref().filter(|text| !text.trim().is_empty())
    }

    /// Text shown when the section is missing.
    #[must_use]
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Compliance => "No compliance data available.",
            Self::Clauses => "No clause data available.",
            Self::Scope => "No scope data available.",
            Self::Completeness => "No completeness data available.",
            Self::Timeline => "No timeline data available.",
            Self::Financial => "No financial data available.",
            Self::BidCriteria => "No bid criteria data available.",
            Self::Audit => "No audit trail data available.",
        }
    }

    /// Section text or its placeholder.
    #[must_use]
    pub fn body(self, detail: &ContractDetail) -> &str {
        self.text(detail).unwrap_or(self.placeholder())
    }
}
