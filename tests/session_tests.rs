use greenboard::session::SessionLog;

#[test]
fn starts_empty() {
    let log = SessionLog::new();
    assert!(log.is_empty());
    assert_eq!(log.len(), 0);
    assert_eq!(log.latest_first().count(), 0);
}

#[test]
fn length_matches_number_of_submissions() {
    let mut log = SessionLog::new();
    for i in 0..5 {
        log.append(format!("q{}", i), format!("a{}", i));
    }
    assert_eq!(log.len(), 5);
}

#[test]
fn display_order_is_most_recent_first() {
    let mut log = SessionLog::new();
    log.append("first", "one");
    log.append("second", "two");
    log.append("third", "three");

    let questions: Vec<&str> = log.latest_first().map(|r| r.question.as_str()).collect();
    assert_eq!(questions, vec!["third", "second", "first"]);
}

#[test]
fn records_keep_their_question_answer_pairing() {
    let mut log = SessionLog::new();
    log.append("berapa total sampah?", "7400 ton");

    let record = log.latest_first().next().unwrap();
    assert_eq!(record.question, "berapa total sampah?");
    assert_eq!(record.answer, "7400 ton");
}
