//! Question-and-answer session for one results page.

#[cfg(test)]
#[path = "qa_test.rs"]
mod qa_test;

use crate::types::{ContractDetail, QaExchange};

/// Starter questions offered before anything has been asked.
pub const SUGGESTED_QUESTIONS: [&str; 5] = [
    "What are the penalties for delayed payments by the client?",
    "What are the payment terms and schedules?",
    "What are the key deadlines and milestones?",
    "What certifications and licenses are required?",
    "What are the termination clauses?",
];

/// Minimum length of a section before it earns tailored question suggestions.
const SUGGESTION_THRESHOLD: usize = 100;

/// In-memory Q&A history plus the single outstanding question, if any.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QaSession {
    pub draft: String,
    pending: Option<String>,
    history: Vec<QaExchange>,
}

impl QaSession {
    /// Validate the draft and mark it in flight.
    ///
    /// Returns the trimmed question to send, or `None` when the draft is
    /// blank or a question is already outstanding; in that case no request
    /// must be issued.
    pub fn submit(&mut self) -> Option<String> {
        if self.pending.is_some() {
            return None;
        }
        let question = self.draft.trim();
        if question.is_empty() {
            return None;
        }
        let question = question.to_owned();
        self.pending = Some(question.clone());
        Some(question)
    }

    /// Record the answer for the outstanding question and clear the draft.
    pub fn resolve(&mut self, answer: String) {
        let Some(question) = self.pending.take() else {
            return;
        };
        self.history.push(QaExchange { question, answer });
        self.draft.clear();
    }

    /// Drop the outstanding question; history and draft are kept.
    pub fn fail(&mut self) {
        self.pending = None;
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn pending_question(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    /// Exchanges in the order they were asked.
    #[must_use]
    pub fn history(&self) -> &[QaExchange] {
        &self.history
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.pending.is_none() && !self.draft.trim().is_empty()
    }
}

/// Question suggestions tailored to which analysis sections have content.
#[must_use]
pub fn suggested_questions(detail: &ContractDetail) -> Vec<&'static str> {
    let substantial = |field: &Option<String>| field.as_deref().is_some_and(|text| text.len() > SUGGESTION_THRESHOLD);

    let mut questions = Vec::new();
    if substantial(&detail.financial_risks) {
        questions.push("What are the payment terms and penalties?");
        questions.push("What are the financial risks?");
    }
    if substantial(&detail.timeline_milestones) {
        questions.push("What are the key deadlines?");
    }
    if substantial(&detail.compliance_checklist) {
        questions.push("What documents are required?");
    }
    questions.push("Summarize the main obligations");
    questions.push("What are penalties for delays?");
    questions
}
