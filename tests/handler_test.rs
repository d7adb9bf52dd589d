//! Log handler tests: level tables, debounce, attachments, error routing.

use std::collections::HashMap;
use std::io::Write;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use log::Level;
use ntfy_push::{DryRun, NtfyError, NtfyHandler, Priority, DRY_RUN_STATUS};

fn emit(handler: &NtfyHandler, target: &str, level: Level, message: &str) {
    handler.emit(
        &log::Record::builder()
            .args(format_args!("{}", message))
            .level(level)
            .target(target)
            .build(),
    );
}

#[test]
fn test_record_text_becomes_the_body_and_target_the_title() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("PUT", "/app_alerts")
        .match_header("title", "my_app")
        .match_header("priority", "4")
        .match_header("tags", "broken_heart")
        .match_body("iteration 4 failed")
        .with_status(200)
        .create();

    let handler = NtfyHandler::builder("app_alerts")
        .server(server.url())
        .build()
        .unwrap();
    emit(&handler, "my_app", Level::Error, "iteration 4 failed");

    mock.assert();
}

#[test]
fn test_level_tables_drive_priority_tags_and_email() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("PUT", "/app_alerts")
        .match_header("priority", "5")
        .match_header("tags", "fire,ant")
        .match_header("email", "oncall@example.com")
        .with_status(200)
        .create();

    let handler = NtfyHandler::builder("app_alerts")
        .server(server.url())
        .priorities(HashMap::from([
            (Level::Error, Priority::Max),
            (Level::Warn, Priority::High),
            (Level::Info, Priority::Default),
            (Level::Debug, Priority::Low),
            (Level::Trace, Priority::Min),
        ]))
        .tags(HashMap::from([(
            Level::Error,
            vec!["fire".to_string(), "ant".to_string()],
        )]))
        .emails(HashMap::from([(
            Level::Error,
            "oncall@example.com".to_string(),
        )]))
        .build()
        .unwrap();
    emit(&handler, "my_app", Level::Error, "boom");

    mock.assert();
}

#[test]
fn test_level_absent_from_tags_table_sends_no_tags_header() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("PUT", "/app_alerts")
        .match_header("tags", mockito::Matcher::Missing)
        .with_status(200)
        .create();

    let handler = NtfyHandler::builder("app_alerts")
        .server(server.url())
        .tags(HashMap::new())
        .build()
        .unwrap();
    emit(&handler, "my_app", Level::Info, "plain");

    mock.assert();
}

#[test]
fn test_attachment_mapped_level_pushes_file_bytes_not_record_text() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.log");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(b"the full log file").unwrap();
    drop(file);

    let mut server = mockito::Server::new();
    let mock = server
        .mock("PUT", "/app_alerts")
        .match_body("the full log file")
        .with_status(200)
        .create();

    let handler = NtfyHandler::builder("app_alerts")
        .server(server.url())
        .attachments(HashMap::from([(Level::Error, PathBuf::from(&path))]))
        .build()
        .unwrap();
    emit(&handler, "my_app", Level::Error, "this text must not be sent");

    mock.assert();
}

#[test]
fn test_debounce_pushes_identical_consecutive_records_once() {
    let mut server = mockito::Server::new();
    let mock = server.mock("PUT", "/app_alerts").with_status(200).expect(1).create();

    let handler = NtfyHandler::builder("app_alerts")
        .server(server.url())
        .debounce(true)
        .build()
        .unwrap();
    emit(&handler, "my_app", Level::Info, "same text");
    emit(&handler, "my_app", Level::Info, "same text");

    mock.assert();
}

#[test]
fn test_debounce_pushes_differing_records_twice() {
    let mut server = mockito::Server::new();
    let mock = server.mock("PUT", "/app_alerts").with_status(200).expect(2).create();

    let handler = NtfyHandler::builder("app_alerts")
        .server(server.url())
        .debounce(true)
        .build()
        .unwrap();
    emit(&handler, "my_app", Level::Info, "first text");
    emit(&handler, "my_app", Level::Info, "second text");

    mock.assert();
}

#[test]
fn test_debounce_treats_sources_independently() {
    let mut server = mockito::Server::new();
    let mock = server.mock("PUT", "/app_alerts").with_status(200).expect(2).create();

    let handler = NtfyHandler::builder("app_alerts")
        .server(server.url())
        .debounce(true)
        .build()
        .unwrap();
    emit(&handler, "app_one", Level::Info, "same text");
    emit(&handler, "app_two", Level::Info, "same text");

    mock.assert();
}

#[test]
fn test_disabled_debounce_pushes_every_record() {
    let mut server = mockito::Server::new();
    let mock = server.mock("PUT", "/app_alerts").with_status(200).expect(3).create();

    let handler = NtfyHandler::builder("app_alerts")
        .server(server.url())
        .build()
        .unwrap();
    for _ in 0..3 {
        emit(&handler, "my_app", Level::Info, "same text");
    }

    mock.assert();
}

#[test]
fn test_push_failure_reaches_the_callback_and_never_the_caller() {
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = calls.clone();

    let handler = NtfyHandler::builder("app_alerts")
        .dry_run(DryRun::Error)
        .error_callback(move |error| {
            assert!(matches!(
                error,
                NtfyError::Delivery {
                    status: DRY_RUN_STATUS,
                    ..
                }
            ));
            seen.fetch_add(1, Ordering::SeqCst);
        })
        .build()
        .unwrap();

    // must not panic or propagate
    emit(&handler, "my_app", Level::Error, "boom");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_dry_run_on_invokes_no_callback() {
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = calls.clone();

    let handler = NtfyHandler::builder("app_alerts")
        .dry_run(DryRun::On)
        .error_callback(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        })
        .build()
        .unwrap();

    emit(&handler, "my_app", Level::Info, "fine");
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_rejected_delivery_is_intercepted() {
    let mut server = mockito::Server::new();
    let _mock = server.mock("PUT", "/app_alerts").with_status(507).create();

    let calls = Arc::new(AtomicUsize::new(0));
    let seen = calls.clone();

    let handler = NtfyHandler::builder("app_alerts")
        .server(server.url())
        .error_callback(move |error| {
            assert!(matches!(error, NtfyError::Delivery { status: 507, .. }));
            seen.fetch_add(1, Ordering::SeqCst);
        })
        .build()
        .unwrap();

    emit(&handler, "my_app", Level::Warn, "almost full");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_partial_priority_table_fails_at_construction_not_emit() {
    let result = NtfyHandler::builder("app_alerts")
        .priorities(HashMap::from([(Level::Error, Priority::High)]))
        .build();
    assert!(matches!(result, Err(NtfyError::Config(_))));
}

#[test]
fn test_handler_installs_as_a_boxed_logger() {
    // type-level check: NtfyHandler must satisfy the log::Log bounds
    fn assert_log<L: log::Log + 'static>(_logger: L) {}
    let handler = NtfyHandler::builder("app_alerts")
        .dry_run(DryRun::On)
        .build()
        .unwrap();
    assert_log(handler);
}
