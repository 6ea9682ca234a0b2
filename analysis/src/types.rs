//! Backend wire DTOs for the contract-analysis API.
//!
//! DESIGN
//! ======
//! The backend owns these shapes; every field it may omit is modelled as
//! `Option` or defaulted so missing data is handled by the type system instead
//! of ad hoc checks at render time.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Coarse risk level attached to a contract summary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Critical,
    High,
    Medium,
    Low,
    /// Anything the backend reports that is not one of the known levels.
    #[default]
    #[serde(other)]
    Unknown,
}

impl RiskLevel {
    /// Lowercase label as shown on list badges.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::Unknown => "unknown",
        }
    }

    #[must_use]
    pub fn is_known(self) -> bool {
        self != Self::Unknown
    }
}

/// Severity bucket of an individual risk record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    /// All severities from most to least severe.
    pub const ALL: [Self; 4] = [Self::Critical, Self::High, Self::Medium, Self::Low];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

/// One entry of `GET /contracts`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContractSummary {
    /// Opaque backend identifier.
    pub id: String,
    #[serde(default)]
    pub filename: String,
    /// Upload timestamp as produced by the backend (ISO-8601).
    #[serde(default)]
    pub uploaded_at: String,
    #[serde(default)]
    pub risk_level: Option<RiskLevel>,
    #[serde(default, deserialize_with = "deserialize_optional_count")]
    pub questions_asked: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_optional_count")]
    pub critical_risks: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_optional_count")]
    pub high_risks: Option<u32>,
}

/// Body of `GET /contracts`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContractList {
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub contracts: Vec<ContractSummary>,
}

/// Body of `GET /results/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContractDetail {
    pub id: String,
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub compliance_checklist: Option<String>,
    #[serde(default)]
    pub clause_summaries: Option<String>,
    #[serde(default)]
    pub scope_alignment: Option<String>,
    #[serde(default)]
    pub completeness_check: Option<String>,
    #[serde(default)]
    pub timeline_milestones: Option<String>,
    #[serde(default)]
    pub financial_risks: Option<String>,
    #[serde(default)]
    pub audit_trail: Option<String>,
    #[serde(default)]
    pub bid_qualifying_criteria: Option<String>,
    #[serde(default)]
    pub risk_analysis: Option<RiskAnalysis>,
    #[serde(default)]
    pub validation: Option<Validation>,
    #[serde(default)]
    pub contract_overview: Option<ContractOverview>,
}

/// Structured risk-analysis object attached to a contract detail.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskAnalysis {
    #[serde(default)]
    pub summary: Option<RiskSummary>,
    #[serde(default)]
    pub risks_by_severity: Option<RisksBySeverity>,
}

/// Aggregate counts reported by the backend risk pass.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskSummary {
    #[serde(default, deserialize_with = "deserialize_count")]
    pub total_risks_checked: u32,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub total_risks_found: u32,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub critical_count: u32,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub high_count: u32,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub medium_count: u32,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub low_count: u32,
    #[serde(default)]
    pub overall_risk_level: Option<String>,
}

impl RiskSummary {
    /// Count reported for one severity bucket.
    #[must_use]
    pub fn count(&self, severity: Severity) -> u32 {
        match severity {
            Severity::Critical => self.critical_count,
            Severity::High => self.high_count,
            Severity::Medium => self.medium_count,
            Severity::Low => self.low_count,
        }
    }
}

/// Risk records grouped by severity bucket.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RisksBySeverity {
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub critical: Vec<Risk>,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub high: Vec<Risk>,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub medium: Vec<Risk>,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub low: Vec<Risk>,
}

impl RisksBySeverity {
    #[must_use]
    pub fn bucket(&self, severity: Severity) -> &[Risk] {
        match severity {
            Severity::Critical => &self.critical,
            Severity::High => &self.high,
            Severity::Medium => &self.medium,
            Severity::Low => &self.low,
        }
    }
}

/// A single backend-identified risk.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Risk {
    #[serde(default)]
    pub risk_type: Option<String>,
    #[serde(default)]
    pub severity: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub detected: bool,
    #[serde(default)]
    pub evidence: Option<String>,
    #[serde(default, deserialize_with = "deserialize_pages")]
    pub page_references: Vec<u32>,
    #[serde(default)]
    pub impact: Option<String>,
    #[serde(default)]
    pub recommendation: Option<String>,
}

/// Section-completion status of the backend analysis run.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Validation {
    #[serde(default)]
    pub status: String,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub sections_completed: u32,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub total_sections: u32,
}

impl Validation {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.status == "COMPLETE"
    }

    /// Badge text such as `"7/7 Complete"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}/{} Complete", self.sections_completed, self.total_sections)
    }
}

/// Overview topics the backend may have precomputed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContractOverview {
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub topics: Vec<TopicSeed>,
}

/// A backend-supplied overview topic.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TopicSeed {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default, alias = "pageNumbers", deserialize_with = "deserialize_pages")]
    pub page_numbers: Vec<u32>,
}

/// Body of `POST /upload`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub is_duplicate: bool,
}

/// Body of `DELETE /contracts/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub success: bool,
}

/// Request body of `POST /qa/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaRequest {
    pub question: String,
}

/// Response body of `POST /qa/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaResponse {
    pub answer: String,
}

/// Request body of `POST /summarize`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizeRequest {
    pub text: String,
    pub max_words: u32,
}

/// Response body of `POST /summarize`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizeResponse {
    pub summary: String,
}

/// One question/answer pair of a page session. Never persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QaExchange {
    pub question: String,
    pub answer: String,
}

fn deserialize_null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(deserialize_optional_count(deserializer)?.unwrap_or(0))
}

fn deserialize_optional_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::Number(number) => number_to_u32(&number)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("value {number} is not a non-negative count"))),
        _ => Err(D::Error::custom("expected number")),
    }
}

/// Page lists arrive as integers, floats (`74.0`), or `null`.
fn deserialize_pages<'de, D>(deserializer: D) -> Result<Vec<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Vec<serde_json::Value>>::deserialize(deserializer)?;
    Ok(value
        .unwrap_or_default()
        .iter()
        .filter_map(|item| match item {
            serde_json::Value::Number(number) => number_to_u32(number),
            serde_json::Value::String(text) => text.trim().parse::<u32>().ok(),
            _ => None,
        })
        .filter(|page| *page > 0)
        .collect())
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn number_to_u32(number: &serde_json::Number) -> Option<u32> {
    if let Some(int) = number.as_u64() {
        return u32::try_from(int).ok();
    }
    if let Some(float) = number.as_f64()
        && float.is_finite()
        && float >= 0.0
        && float <= f64::from(u32::MAX)
    {
        return Some(float.floor() as u32);
    }
    None
}
