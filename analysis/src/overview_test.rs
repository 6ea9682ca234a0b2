use super::*;

fn seed(id: &str, title: &str) -> TopicSeed {
    TopicSeed {
        id: id.to_owned(),
        title: title.to_owned(),
        question: format!("What about {title}?"),
        summary: "Already summarized".to_owned(),
        page_numbers: vec![4, 9],
    }
}

// =============================================================
// Seeding
// =============================================================

#[test]
fn defaults_are_the_four_standard_topics() {
    let board = OverviewBoard::default();
    let titles: Vec<&str> = board.topics().iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["Project Name", "Project Location", "Payment Terms", "Estimated Values"]);
    assert!(board.topics().iter().all(|t| !t.loading && !t.has_summary()));
    assert_eq!(board.stale_ids().len(), 4);
}

#[test]
fn backend_topics_replace_defaults() {
    let overview = ContractOverview { topics: vec![seed("t1", "Owner"), seed("t2", "Term")] };
    let board = OverviewBoard::from_overview(Some(&overview));
    assert_eq!(board.topics().len(), 2);
    assert_eq!(board.get("t1").map(|t| t.page_numbers.clone()), Some(vec![4, 9]));
    assert!(board.stale_ids().is_empty());
}

#[test]
fn empty_backend_topics_fall_back_to_defaults() {
    let overview = ContractOverview::default();
    assert_eq!(OverviewBoard::from_overview(Some(&overview)), OverviewBoard::default());
    assert_eq!(OverviewBoard::from_overview(None), OverviewBoard::default());
}

// =============================================================
// Editing
// =============================================================

#[test]
fn add_requires_title_and_question() {
    let mut board = OverviewBoard::default();
    assert_eq!(board.add("x", "  ", "q").map(|_| ()), Err(TopicError::MissingTitle));
    assert_eq!(board.add("x", "t", "").map(|_| ()), Err(TopicError::MissingQuestion));
    assert_eq!(board.topics().len(), 4);
}

#[test]
fn add_appends_loading_topic() {
    let mut board = OverviewBoard::default();
    let topic = board.add("custom", " Insurance ", " What insurance is required? ").expect("add");
    assert!(topic.loading);
    assert_eq!(topic.title, "Insurance");
    assert_eq!(board.topics().last().map(|t| t.id.as_str()), Some("custom"));
}

#[test]
fn add_rejects_duplicate_ids() {
    let mut board = OverviewBoard::default();
    assert_eq!(
        board.add("project-name", "Again", "q").map(|_| ()),
        Err(TopicError::DuplicateId("project-name".to_owned()))
    );
}

#[test]
fn remove_drops_only_that_topic() {
    let mut board = OverviewBoard::default();
    board.remove("payment-terms");
    assert!(board.get("payment-terms").is_none());
    assert_eq!(board.topics().len(), 3);
}

// =============================================================
// Refresh
// =============================================================

#[test]
fn begin_refresh_returns_question_once() {
    let mut board = OverviewBoard::default();
    assert_eq!(
        board.begin_refresh("project-name").as_deref(),
        Some("What is the name of the project or contract?")
    );
    assert_eq!(board.begin_refresh("project-name"), None);
    assert_eq!(board.begin_refresh("missing"), None);
}

#[test]
fn resolve_stores_summary_and_pages() {
    let mut board = OverviewBoard::default();
    board.begin_refresh("project-name");
    board.resolve("project-name", "Harbour Bridge upgrade".to_owned(), vec![1, 3]);
    let topic = board.get("project-name").expect("topic");
    assert!(!topic.loading);
    assert_eq!(topic.summary, "Harbour Bridge upgrade");
    assert_eq!(topic.page_numbers, vec![1, 3]);
}

#[test]
fn fail_keeps_previous_summary() {
    let overview = ContractOverview { topics: vec![seed("t1", "Owner")] };
    let mut board = OverviewBoard::from_overview(Some(&overview));
    board.begin_refresh("t1");
    board.fail("t1");
    let topic = board.get("t1").expect("topic");
    assert!(!topic.loading);
    assert_eq!(topic.summary, "Already summarized");
}

#[test]
fn resolve_after_remove_is_dropped() {
    let mut board = OverviewBoard::default();
    board.begin_refresh("project-name");
    board.remove("project-name");
    board.resolve("project-name", "late".to_owned(), vec![]);
    assert!(board.get("project-name").is_none());
}

#[test]
fn summarize_request_strips_citations_and_caps_words() {
    let answer = "The project is the Riverside Depot [Page 2] built in stages [Page 7] [Page 2].";
    let request = summarize_request(answer);
    assert!(!request.text.contains("[Page"));
    assert_eq!(request.max_words, 300);
    assert_eq!(topic_pages(answer), vec![2, 7]);
}
