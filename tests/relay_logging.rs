mod common;

use axum::http::StatusCode;
use common::MockBackend;
use finbot_relay::relay::{ BeamRelay, ChatRelay, FALLBACK_MESSAGE };
use log::{ Level, LevelFilter, Log, Metadata, Record };
use std::sync::Mutex;

struct CaptureLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.records.lock().unwrap().push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger { records: Mutex::new(Vec::new()) };

#[tokio::test]
async fn rejected_request_logs_one_error_with_status() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Debug);

    let backend = MockBackend::start(StatusCode::INTERNAL_SERVER_ERROR, "").await;
    let relay = BeamRelay::new(&backend.config()).unwrap();

    assert_eq!(relay.predict("q", &[], "profile").await, FALLBACK_MESSAGE);

    let errors: Vec<String> = LOGGER.records
        .lock()
        .unwrap()
        .iter()
        .filter(|(level, _)| *level == Level::Error)
        .map(|(_, msg)| msg.clone())
        .collect();
    assert_eq!(errors.len(), 1, "{:?}", errors);
    assert!(errors[0].contains("500"));
}
