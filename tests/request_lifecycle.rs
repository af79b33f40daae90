//! Request lifecycle: trigger policy, sequencing and view state together.

mod common;

use common::{debounced, make_app, type_text};
use sentiscope::client::{ClassifyError, SentimentResult};
use sentiscope::trigger::TriggerMode;
use sentiscope::ui::sentiment::{LabelCategory, ViewModel, ViewState, EMPTY_PROMPT};
use std::time::{Duration, Instant};

fn ok(label: &str, score: f64, time_taken: u64) -> Result<SentimentResult, ClassifyError> {
    Ok(SentimentResult::new(label, score, time_taken).unwrap())
}

fn ms(base: Instant, ms: u64) -> Instant {
    base + Duration::from_millis(ms)
}

#[test]
fn starts_idle_with_empty_prompt() {
    let (app, dispatched) = make_app(TriggerMode::Immediate);
    assert_eq!(app.view(), &ViewState::Idle);
    assert_eq!(
        app.view_model(),
        ViewModel::EmptyPrompt { hint: EMPTY_PROMPT }
    );
    assert!(dispatched.lock().is_empty());
}

#[test]
fn blank_input_never_dispatches() {
    let now = Instant::now();
    for mode in [TriggerMode::Immediate, debounced(500)] {
        let (mut app, dispatched) = make_app(mode);
        type_text(&mut app, "  \n\t ", now);
        app.on_tick(ms(now, 10_000));
        app.reanalyze();

        assert!(dispatched.lock().is_empty());
        assert_eq!(app.view(), &ViewState::Idle);
    }
}

#[test]
fn immediate_mode_dispatches_every_edit() {
    let (mut app, dispatched) = make_app(TriggerMode::Immediate);
    type_text(&mut app, "abc", Instant::now());

    let texts: Vec<String> = dispatched.lock().iter().map(|(_, t)| t.clone()).collect();
    assert_eq!(texts, vec!["a", "ab", "abc"]);
    assert!(app.view().is_pending());
}

#[test]
fn end_to_end_result_is_rendered() {
    let (mut app, dispatched) = make_app(TriggerMode::Immediate);
    app.on_paste("I love this product", Instant::now());

    let (id, text) = dispatched.lock()[0].clone();
    assert_eq!(text, "I love this product");
    assert_eq!(app.view().pending_request(), Some(id));

    assert!(app.on_classified(id, ok("positive", 0.93, 42)));
    assert_eq!(
        app.view_model(),
        ViewModel::Result {
            label: "positive".to_string(),
            category: LabelCategory::Positive,
            ratio: 0.93,
            percent_text: "93.0%".to_string(),
            time_text: "42 ms".to_string(),
        }
    );
}

#[test]
fn stale_response_arriving_late_is_dropped() {
    let (mut app, dispatched) = make_app(TriggerMode::Immediate);
    type_text(&mut app, "go", Instant::now());

    let (first, _) = dispatched.lock()[0].clone();
    let (second, _) = dispatched.lock()[1].clone();

    assert!(app.on_classified(second, ok("negative", 0.6, 9)));
    let after_second = app.view().clone();

    assert!(!app.on_classified(first, ok("positive", 0.99, 1)));
    assert_eq!(app.view(), &after_second);
}

#[test]
fn stale_response_arriving_early_does_not_leave_pending() {
    let (mut app, dispatched) = make_app(TriggerMode::Immediate);
    type_text(&mut app, "go", Instant::now());

    let (first, _) = dispatched.lock()[0].clone();
    let (second, _) = dispatched.lock()[1].clone();

    assert!(!app.on_classified(first, ok("positive", 0.99, 1)));
    assert_eq!(app.view().pending_request(), Some(second));

    assert!(app.on_classified(second, ok("negative", 0.6, 9)));
    assert_eq!(app.view().result().map(|r| r.label()), Some("negative"));
}

#[test]
fn identical_text_twice_gets_two_ids_and_latest_wins() {
    let (mut app, dispatched) = make_app(TriggerMode::Immediate);
    app.on_paste("same", Instant::now());
    app.reanalyze();

    let calls = dispatched.lock().clone();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].1, calls[1].1);
    assert!(calls[0].0 < calls[1].0);

    assert!(!app.on_classified(calls[0].0, ok("neutral", 0.4, 3)));
    assert!(app.on_classified(calls[1].0, ok("positive", 0.7, 4)));
    assert_eq!(app.view().result().map(|r| r.score()), Some(0.7));
}

#[test]
fn clearing_text_makes_in_flight_response_stale() {
    let now = Instant::now();
    let (mut app, dispatched) = make_app(TriggerMode::Immediate);
    app.on_paste("hello", now);
    let (id, _) = dispatched.lock()[0].clone();

    app.clear_input(now);
    assert_eq!(app.view(), &ViewState::Idle);

    assert!(!app.on_classified(id, ok("positive", 0.9, 1)));
    assert_eq!(app.view(), &ViewState::Idle);
}

#[test]
fn debounce_window_collapses_burst() {
    let base = Instant::now();
    let (mut app, dispatched) = make_app(debounced(500));

    app.insert_char('a', base);
    app.insert_char('b', ms(base, 100));
    app.insert_char('c', ms(base, 700));
    assert!(dispatched.lock().is_empty());
    assert_eq!(app.view(), &ViewState::Idle);

    app.on_tick(ms(base, 1_199));
    assert!(dispatched.lock().is_empty());

    app.on_tick(ms(base, 1_200));
    app.on_tick(ms(base, 5_000));

    let calls = dispatched.lock().clone();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].1, "abc");
    assert!(app.view().is_pending());
}

#[test]
fn debounce_deadline_is_reported() {
    let base = Instant::now();
    let (mut app, _) = make_app(debounced(300));
    assert_eq!(app.time_until_deadline(base), None);

    app.insert_char('x', base);
    assert_eq!(
        app.time_until_deadline(ms(base, 100)),
        Some(Duration::from_millis(200))
    );
    assert_eq!(app.time_until_deadline(ms(base, 400)), Some(Duration::ZERO));
}

#[test]
fn text_blanked_inside_window_is_never_sent() {
    let base = Instant::now();
    let (mut app, dispatched) = make_app(debounced(500));

    app.insert_char('x', base);
    app.backspace(ms(base, 200));
    app.on_tick(ms(base, 2_000));

    assert!(dispatched.lock().is_empty());
    assert_eq!(app.view(), &ViewState::Idle);
}

#[test]
fn http_error_clears_previous_result_and_is_visible() {
    let (mut app, dispatched) = make_app(TriggerMode::Immediate);
    app.on_paste("good", Instant::now());
    let (first, _) = dispatched.lock()[0].clone();
    assert!(app.on_classified(first, ok("positive", 0.9, 5)));

    app.insert_char('!', Instant::now());
    let (second, _) = dispatched.lock()[1].clone();
    assert!(app.on_classified(
        second,
        Err(ClassifyError::Http {
            status: 500,
            body: "Internal Server Error".into(),
        })
    ));

    assert!(app.view().result().is_none());
    assert!(matches!(
        app.view(),
        ViewState::Failed {
            error: ClassifyError::Http { status: 500, .. }
        }
    ));
    match app.view_model() {
        ViewModel::Error { message, .. } => assert!(message.contains("500")),
        other => panic!("Expected error view, got {:?}", other),
    }
}

#[test]
fn failure_is_dismissible_and_retryable() {
    let (mut app, dispatched) = make_app(TriggerMode::Immediate);
    app.on_paste("text", Instant::now());
    let (id, _) = dispatched.lock()[0].clone();
    app.on_classified(id, Err(ClassifyError::Network("refused".into())));

    app.dismiss_error();
    assert_eq!(app.view(), &ViewState::Idle);

    app.reanalyze();
    let (retry, text) = dispatched.lock()[1].clone();
    assert_eq!(text, "text");
    assert!(app.on_classified(retry, ok("neutral", 0.55, 2)));
    assert_eq!(
        app.view().result().map(|r| r.label().to_string()),
        Some("neutral".to_string())
    );
}

#[test]
fn cursor_moves_do_not_dispatch() {
    let (mut app, dispatched) = make_app(TriggerMode::Immediate);
    app.on_paste("abc", Instant::now());
    app.move_left();
    app.move_home();
    app.move_end();
    app.move_right();
    assert_eq!(dispatched.lock().len(), 1);
}

#[test]
fn spinner_advances_only_while_pending() {
    let now = Instant::now();
    let (mut app, dispatched) = make_app(TriggerMode::Immediate);
    app.on_paste("spin", now);
    let (id, _) = dispatched.lock()[0].clone();

    let before = app.view_model();
    app.on_tick(now);
    assert_ne!(app.view_model(), before);

    app.on_classified(id, ok("positive", 0.5, 1));
    let done = app.view().clone();
    app.on_tick(now);
    assert_eq!(app.view(), &done);
}
