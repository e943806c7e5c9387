use std::time::Duration;

use greenboard::config::ModelChoice;
use greenboard::dispatch::{Dispatcher, FALLBACK_ANSWER};
use greenboard::llm::LlmClient;
use greenboard::session::SessionLog;

/// A dispatcher pointed at a port nothing listens on: every call fails fast.
fn unreachable_dispatcher() -> Dispatcher {
    let client = LlmClient::new("http://127.0.0.1:1", None, Duration::from_secs(2)).unwrap();
    Dispatcher::new(client, ModelChoice::Versatile, 0.7).unwrap()
}

#[tokio::test]
async fn remote_failure_yields_the_fixed_fallback() {
    let dispatcher = unreachable_dispatcher();
    let reply = dispatcher.ask("berapa total sampah tahun 2020?", None).await;

    assert_eq!(reply.text(), FALLBACK_ANSWER);
    let error = reply.error().expect("a failed dispatch surfaces its error");
    assert!(!error.is_empty());
}

#[tokio::test]
async fn failed_dispatch_still_appends_exactly_one_record() {
    let dispatcher = unreachable_dispatcher();
    let mut log = SessionLog::new();

    let reply = dispatcher.ask("halo", Some("Year,TotalWaste\n2020,6800\n")).await;
    log.append("halo", reply.text());

    assert_eq!(log.len(), 1);
    assert_eq!(log.latest_first().next().unwrap().answer, FALLBACK_ANSWER);
}

#[test]
fn temperature_outside_unit_interval_is_rejected() {
    for t in [-0.1_f32, 1.5, 2.0] {
        let client = LlmClient::new("http://127.0.0.1:1", None, Duration::from_secs(2)).unwrap();
        assert!(Dispatcher::new(client, ModelChoice::Instant, t).is_err(), "temperature {t}");
    }
    for t in [0.0_f32, 0.7, 1.0] {
        let client = LlmClient::new("http://127.0.0.1:1", None, Duration::from_secs(2)).unwrap();
        assert!(Dispatcher::new(client, ModelChoice::Instant, t).is_ok(), "temperature {t}");
    }
}
