//! Contract overview topics: short question-driven summaries on the results page.
//!
//! DESIGN
//! ======
//! A topic is refreshed by two chained backend calls: the topic question goes
//! to `POST /qa/{id}`, then the citation-stripped answer goes to
//! `POST /summarize`. The board only tracks state; the caller performs the
//! calls and feeds the results back through `resolve` / `fail`.

#[cfg(test)]
#[path = "overview_test.rs"]
mod overview_test;

use thiserror::Error;

use crate::citation::{cited_pages, strip_citations};
use crate::types::{ContractOverview, SummarizeRequest, TopicSeed};

/// Word cap requested from `POST /summarize` for topic summaries.
pub const SUMMARY_MAX_WORDS: u32 = 300;

const DEFAULT_TOPICS: [(&str, &str, &str); 4] = [
    ("project-name", "Project Name", "What is the name of the project or contract?"),
    (
        "project-location",
        "Project Location",
        "Where is the project located? Include city, state, and any specific site details.",
    ),
    (
        "payment-terms",
        "Payment Terms",
        "What are the payment terms? Include payment schedule, retention, and any key financial conditions.",
    ),
    ("estimated-values", "Estimated Values", "What is the contract value or estimated project cost?"),
];

/// Rejected topic edits.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TopicError {
    #[error("topic title is required")]
    MissingTitle,
    #[error("topic question is required")]
    MissingQuestion,
    #[error("topic {0} already exists")]
    DuplicateId(String),
}

/// One row of the overview table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OverviewTopic {
    pub id: String,
    pub title: String,
    pub question: String,
    pub summary: String,
    pub page_numbers: Vec<u32>,
    pub loading: bool,
}

impl OverviewTopic {
    fn new(id: &str, title: &str, question: &str) -> Self {
        Self { id: id.to_owned(), title: title.to_owned(), question: question.to_owned(), ..Self::default() }
    }

    #[must_use]
    pub fn has_summary(&self) -> bool {
        !self.summary.trim().is_empty()
    }
}

impl From<TopicSeed> for OverviewTopic {
    fn from(seed: TopicSeed) -> Self {
        Self {
            id: seed.id,
            title: seed.title,
            question: seed.question,
            summary: seed.summary,
            page_numbers: seed.page_numbers,
            loading: false,
        }
    }
}

/// Ordered overview topics for a single contract.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OverviewBoard {
    topics: Vec<OverviewTopic>,
}

impl Default for OverviewBoard {
    fn default() -> Self {
        Self {
            topics: DEFAULT_TOPICS
                .iter()
                .map(|(id, title, question)| OverviewTopic::new(id, title, question))
                .collect(),
        }
    }
}

impl OverviewBoard {
    /// Backend topics when any are present, otherwise the defaults.
    #[must_use]
    pub fn from_overview(overview: Option<&ContractOverview>) -> Self {
        match overview {
            Some(overview) if !overview.topics.is_empty() => {
                Self { topics: overview.topics.iter().cloned().map(OverviewTopic::from).collect() }
            }
            _ => Self::default(),
        }
    }

    #[must_use]
    pub fn topics(&self) -> &[OverviewTopic] {
        &self.topics
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&OverviewTopic> {
        self.topics.iter().find(|topic| topic.id == id)
    }

    /// Append a custom topic and mark it loading so the caller refreshes it.
    ///
    /// # Errors
    ///
    /// Rejects blank titles or questions and ids already on the board.
    pub fn add(&mut self, id: &str, title: &str, question: &str) -> Result<&OverviewTopic, TopicError> {
        let title = title.trim();
        let question = question.trim();
        if title.is_empty() {
            return Err(TopicError::MissingTitle);
        }
        if question.is_empty() {
            return Err(TopicError::MissingQuestion);
        }
        if self.get(id).is_some() {
            return Err(TopicError::DuplicateId(id.to_owned()));
        }
        let mut topic = OverviewTopic::new(id, title, question);
        topic.loading = true;
        self.topics.push(topic);
        Ok(&self.topics[self.topics.len() - 1])
    }

    /// Mark a topic loading and return its question.
    ///
    /// Returns `None` for unknown ids and for topics already refreshing.
    pub fn begin_refresh(&mut self, id: &str) -> Option<String> {
        let topic = self.topics.iter_mut().find(|topic| topic.id == id)?;
        if topic.loading {
            return None;
        }
        topic.loading = true;
        Some(topic.question.clone())
    }

    /// Store a refreshed summary. Results for removed topics are dropped.
    pub fn resolve(&mut self, id: &str, summary: String, page_numbers: Vec<u32>) {
        if let Some(topic) = self.topics.iter_mut().find(|topic| topic.id == id) {
            topic.summary = summary;
            topic.page_numbers = page_numbers;
            topic.loading = false;
        }
    }

    /// Clear the loading flag after a failed refresh, keeping the previous summary.
    pub fn fail(&mut self, id: &str) {
        if let Some(topic) = self.topics.iter_mut().find(|topic| topic.id == id) {
            topic.loading = false;
        }
    }

    pub fn remove(&mut self, id: &str) {
        self.topics.retain(|topic| topic.id != id);
    }

    /// Topics that have never been summarized and are not loading.
    #[must_use]
    pub fn stale_ids(&self) -> Vec<String> {
        self.topics
            .iter()
            .filter(|topic| !topic.loading && !topic.has_summary())
            .map(|topic| topic.id.clone())
            .collect()
    }
}

/// Second-stage request for a topic refresh, built from the Q&A answer.
#[must_use]
pub fn summarize_request(answer: &str) -> SummarizeRequest {
    SummarizeRequest { text: strip_citations(answer), max_words: SUMMARY_MAX_WORDS }
}

/// Page numbers to show next to a topic summary.
#[must_use]
pub fn topic_pages(answer: &str) -> Vec<u32> {
    cited_pages(answer)
}
