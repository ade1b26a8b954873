// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! End to end tests of the read loop, through a [`Console`] with a [`RendererMock`] and
//! a [`LineReaderMock`].

use std::{io,
          sync::{Arc, Mutex},
          thread,
          time::Duration};

use pretty_assertions::assert_eq;
use test_case::test_case;

use crate::{Color, ConsoleColor, Console, ConsoleOptions, CustomBehavior, InvalidInput,
            LineReader, LineReaderMock, Pos, ReadLineError, ReadRequest, RenderOp, Renderer,
            RendererMock, Size, StatusBarBehavior, ValidationRule, WriteToStdErrBehavior,
            pos};

fn interactive_console(lines: &[&str]) -> (Console, RendererMock, LineReaderMock) {
    console_with(RendererMock::default(), lines)
}

fn console_with(
    renderer: RendererMock,
    lines: &[&str],
) -> (Console, RendererMock, LineReaderMock) {
    let reader = LineReaderMock::new(lines.iter().copied());
    (
        Console::new(renderer.clone(), reader.clone()),
        renderer,
        reader,
    )
}

fn reposition_options() -> ConsoleOptions {
    ConsoleOptions::default().add_behavior(CustomBehavior::new(|_| {}, true))
}

#[test]
fn test_range_rule_rejects_then_accepts() {
    let (console, renderer, reader) = interactive_console(&["10", "25"]);

    let age: i32 = console
        .read_line(ReadRequest::plain("Age? ").rule(ValidationRule::min(18)))
        .unwrap();

    assert_eq!(age, 25);
    assert_eq!(reader.lines_read(), 2);
    assert_eq!(
        renderer.screen_lines(),
        vec!["Age? 10", "The value must be at least 18", "Age? 25"]
    );
}

#[test]
fn test_nine_digit_rule() {
    let (console, renderer, _) = interactive_console(&["abc", "123456789"]);

    let id: String = console
        .read_line(ReadRequest::plain("ID: ").rule(ValidationRule::predicate(
            "The ID must have 9 digits",
            |it: &String| it.len() == 9 && it.chars().all(|ch| ch.is_ascii_digit()),
        )))
        .unwrap();

    assert_eq!(id, "123456789");
    assert_eq!(renderer.screen_row(1), "The ID must have 9 digits");
}

#[test]
fn test_fail_fast_aborts_on_first_invalid_input() {
    let (console, renderer, reader) = interactive_console(&["false", "true"]);
    console.configure(ConsoleOptions::default().throw_on_invalid_input(true));

    let result = console.read_line(
        ReadRequest::<bool>::plain("Sure? ")
            .rule(ValidationRule::predicate("Must be true", |it: &bool| *it)),
    );

    let Err(ReadLineError::FailFast(invalid_input)) = result else {
        panic!("expected a fail fast error, got {result:?}");
    };
    assert_eq!(
        invalid_input,
        InvalidInput::Validation {
            message: "Must be true".into()
        }
    );
    // Notified, and never asked a second time.
    assert_eq!(reader.lines_read(), 1);
    assert_eq!(renderer.transcript(), "Sure? false\nMust be true\n");
}

#[test]
fn test_fail_fast_on_conversion_failure_does_not_reposition() {
    let (console, renderer, _) = interactive_console(&["abc"]);
    console.configure(reposition_options().throw_on_invalid_input(true));

    let result = console.read_line(ReadRequest::<i32>::plain("n: "));

    assert!(matches!(
        result,
        Err(ReadLineError::FailFast(InvalidInput::Conversion { .. }))
    ));
    assert_eq!(renderer.count_ops(|op| matches!(op, RenderOp::SetCursor(_))), 0);
}

#[test]
fn test_only_failing_messages_are_reported() {
    let messages = Arc::new(Mutex::new(vec![]));
    let messages_clone = messages.clone();
    let (console, renderer, _) = interactive_console(&["ab", "Abc"]);
    console.configure(ConsoleOptions::default().add_behavior(CustomBehavior::new(
        move |message| messages_clone.lock().unwrap().push(message.to_string()),
        false,
    )));

    let name: String = console
        .read_line(
            ReadRequest::plain("Name: ")
                .rule(ValidationRule::min_length(3))
                .rule(ValidationRule::max_length(10))
                .rule(ValidationRule::predicate(
                    "Must start with a capital letter",
                    |it: &String| it.starts_with(|ch: char| ch.is_uppercase()),
                )),
        )
        .unwrap();

    assert_eq!(name, "Abc");
    assert_eq!(
        *messages.lock().unwrap(),
        vec![
            "The value must be at least 3 characters long\nMust start with a capital letter"
                .to_string()
        ]
    );
    assert_eq!(
        renderer.screen_lines(),
        vec![
            "Name: ab",
            "The value must be at least 3 characters long",
            "Must start with a capital letter",
            "Name: Abc",
        ]
    );
}

#[test]
fn test_empty_line_is_converted_and_validated() {
    let (console, renderer, _) = interactive_console(&["", "", "7"]);

    let value: i32 = console.read_line(ReadRequest::plain("n: ")).unwrap();
    assert_eq!(value, 7);
    assert_eq!(
        renderer.screen_row(1),
        "'' is not a valid i32: cannot parse integer from empty string"
    );

    let (console, renderer, _) = interactive_console(&["", "x"]);
    let value: String = console
        .read_line(ReadRequest::plain("s: ").rule(ValidationRule::required()))
        .unwrap();
    assert_eq!(value, "x");
    assert_eq!(renderer.screen_row(1), "A value is required");
}

#[test]
fn test_replay_is_idempotent_across_retries() {
    let run = |lines: &[&str]| {
        let (console, renderer, _) = interactive_console(lines);
        console.configure(reposition_options());
        console.ask().write_line_plain("Pick a number").unwrap();
        let value: i32 = console.read_line(ReadRequest::plain("> ")).unwrap();
        assert_eq!(value, 5);
        renderer.screen_lines()
    };

    let once = run(&["x", "5"]);
    let many = run(&["x", "x", "x", "x", "5"]);

    assert_eq!(once, many);
    assert_eq!(
        many,
        vec![
            "Pick a number",
            "> 5",
            "'x' is not a valid i32: invalid digit found in string",
        ]
    );
}

#[test]
fn test_question_is_replayed_below_the_error_without_reposition() {
    let (console, renderer, _) = interactive_console(&["x", "5"]);
    console
        .ask()
        .write(&crate::fg_blue("Pick a number "))
        .unwrap();

    let value: i32 = console.read_line(ReadRequest::plain("> ")).unwrap();

    assert_eq!(value, 5);
    assert_eq!(
        renderer.screen_lines(),
        vec![
            "Pick a number > x",
            "'x' is not a valid i32: invalid digit found in string",
            "Pick a number > 5",
        ]
    );
    // The question is written once by the app and once by the replay, never recorded
    // twice.
    assert_eq!(
        renderer.count_ops(|op| matches!(
            op,
            RenderOp::Write { text, .. } if text == "Pick a number "
        )),
        2
    );
}

#[test]
fn test_input_closed() {
    let (console, _, _) = interactive_console(&["abc"]);
    let result = console.read_line(ReadRequest::<i32>::plain("n: "));
    assert!(matches!(result, Err(ReadLineError::InputClosed)));
}

#[test]
fn test_fixed_position_on_redirected_stream_fails_before_writing() {
    let (console, renderer, reader) =
        console_with(RendererMock::new_redirected(), &["42"]);

    let result = console.read_line_at(3, 4, ReadRequest::<i32>::plain("n: "));

    assert!(matches!(result, Err(ReadLineError::RedirectedStream)));
    assert!(renderer.ops().is_empty());
    assert_eq!(reader.lines_read(), 0);
}

#[test]
fn test_fixed_position_is_used_on_every_attempt() {
    let (console, renderer, _) = interactive_console(&["3", "30"]);
    console.configure(reposition_options());

    let age: i32 = console
        .read_line_at(10, 5, ReadRequest::plain("Age: ").rule(ValidationRule::min(18)))
        .unwrap();

    assert_eq!(age, 30);
    assert_eq!(renderer.screen_row(5), "          Age: 30");
    assert_eq!(renderer.screen_row(6), "The value must be at least 18");
    assert_eq!(
        renderer.count_ops(|op| *op == RenderOp::SetCursor(pos(10, 5))),
        // Before each of the 2 attempts, and twice while erasing the first one.
        4
    );
}

#[test]
fn test_redirected_stream_skips_erase() {
    let (console, renderer, _) = console_with(RendererMock::new_redirected(), &["3", "30"]);
    console.configure(reposition_options());

    let age: i32 = console
        .read_line(ReadRequest::plain("Age: ").rule(ValidationRule::min(18)))
        .unwrap();

    assert_eq!(age, 30);
    assert_eq!(renderer.count_ops(|op| matches!(op, RenderOp::SetCursor(_))), 0);
    assert_eq!(
        renderer.transcript(),
        "Age: The value must be at least 18\nAge: "
    );
}

#[test]
fn test_input_color_is_set_and_reset() {
    let (console, renderer, _) = interactive_console(&["ok"]);

    let _: String = console
        .read_line(ReadRequest::plain("> ").input_color(ConsoleColor::Cyan))
        .unwrap();

    assert_eq!(
        renderer.ops(),
        vec![
            RenderOp::Write {
                text: "> ".into(),
                color: Color::default()
            },
            RenderOp::SetInputColor(Some(Color::fg(ConsoleColor::Cyan))),
            RenderOp::SetInputColor(None),
            RenderOp::Echo("ok".into()),
        ]
    );
}

#[test]
fn test_stderr_and_status_bar() {
    let status_bar = Arc::new(StatusBarBehavior::new(Duration::from_millis(10)));
    let (console, renderer, _) = interactive_console(&["x", "7"]);
    console.configure(
        ConsoleOptions::default()
            .add_behavior(WriteToStdErrBehavior)
            .add_shared_behavior(status_bar.clone()),
    );

    let value: i32 = console.read_line(ReadRequest::plain("n: ")).unwrap();
    status_bar.wait_for_pending_restore();

    let message = "'x' is not a valid i32: invalid digit found in string";
    assert_eq!(value, 7);
    assert_eq!(renderer.stderr_lines(), vec![message.to_string()]);
    assert!(renderer.ops().contains(&RenderOp::SetCursor(pos(0, 23))));
    assert_eq!(renderer.screen_row(23), "");
    // The prompt was erased and drawn again in place.
    assert_eq!(renderer.screen_lines(), vec!["n: 7", message]);
}

#[test]
fn test_reconfigure_during_read_keeps_snapshot() {
    let (console, _, _) = interactive_console(&["bad", "1"]);
    let console_clone = console.clone();
    console.configure(ConsoleOptions::default().add_behavior(CustomBehavior::new(
        move |_| console_clone.configure(ConsoleOptions::default().throw_on_invalid_input(true)),
        false,
    )));

    // The options changed after the first failure, but this loop keeps going.
    let value: i32 = console.read_line(ReadRequest::plain("n: ")).unwrap();
    assert_eq!(value, 1);
    assert!(console.options().throw_on_invalid_input);
}

#[test]
fn test_concurrent_reads_are_serialized() {
    let (console, renderer, _) = interactive_console(&["1", "2"]);
    let handles: Vec<_> = (0..2)
        .map(|_| {
            let console = console.clone();
            std::thread::spawn(move || {
                console.read_line::<i32>(ReadRequest::plain("n: ")).unwrap()
            })
        })
        .collect();

    let mut values: Vec<i32> = handles.into_iter().map(|it| it.join().unwrap()).collect();
    values.sort_unstable();

    assert_eq!(values, vec![1, 2]);
    assert_eq!(renderer.screen_lines(), vec!["n: 1", "n: 2"]);
}

#[test_case("42", 42; "plain")]
#[test_case(" 42 ", 42; "surrounding whitespace")]
#[test_case("-7", -7; "negative")]
fn test_round_trip_with_always_true_rule(raw: &str, expected: i64) {
    let (console, renderer, _) = interactive_console(&[raw]);
    let value: i64 = console
        .read_line(ReadRequest::plain("n: ").rule(ValidationRule::check(|_: &i64| true)))
        .unwrap();
    assert_eq!(value, expected);
    assert_eq!(renderer.screen_lines().len(), 1);
}

/// Records the name of every thread that asks the terminal where the cursor is.
struct CursorQueryRecorder {
    inner: RendererMock,
    query_threads: Arc<Mutex<Vec<Option<String>>>>,
}

impl Renderer for CursorQueryRecorder {
    fn write(&mut self, text: &str, color: Color) -> io::Result<()> {
        self.inner.write(text, color)
    }

    fn write_line(&mut self, text: &str, color: Color) -> io::Result<()> {
        self.inner.write_line(text, color)
    }

    fn write_err_line(&mut self, text: &str, color: Color) -> io::Result<()> {
        self.inner.write_err_line(text, color)
    }

    fn beep(&mut self) -> io::Result<()> { self.inner.beep() }

    fn set_cursor(&mut self, pos: Pos) -> io::Result<()> { self.inner.set_cursor(pos) }

    fn get_cursor(&mut self) -> io::Result<Pos> {
        let name = thread::current().name().map(str::to_string);
        self.query_threads.lock().unwrap().push(name);
        self.inner.get_cursor()
    }

    fn save_cursor(&mut self) -> io::Result<()> { self.inner.save_cursor() }

    fn restore_cursor(&mut self) -> io::Result<()> { self.inner.restore_cursor() }

    fn size(&mut self) -> io::Result<Size> { self.inner.size() }

    fn set_input_color(&mut self, color: Option<Color>) -> io::Result<()> {
        self.inner.set_input_color(color)
    }

    fn on_line_read(&mut self, line: &str) -> io::Result<()> { self.inner.on_line_read(line) }

    fn is_interactive(&self) -> bool { self.inner.is_interactive() }
}

/// Takes a while to hand over each line, like a user typing.
struct SlowLineReader {
    inner: LineReaderMock,
    delay: Duration,
}

impl LineReader for SlowLineReader {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        thread::sleep(self.delay);
        self.inner.read_line()
    }

    fn read_key(&mut self) -> io::Result<Option<crossterm::event::KeyEvent>> {
        self.inner.read_key()
    }
}

#[test]
fn test_status_bar_restore_never_queries_cursor_during_read() {
    let mock = RendererMock::default();
    let query_threads = Arc::new(Mutex::new(vec![]));
    let renderer = CursorQueryRecorder {
        inner: mock.clone(),
        query_threads: query_threads.clone(),
    };
    let reader = SlowLineReader {
        inner: LineReaderMock::new(["x", "7"]),
        delay: Duration::from_millis(100),
    };
    let status_bar = Arc::new(StatusBarBehavior::new(Duration::from_millis(20)));
    let console = Console::new(renderer, reader).with_options(
        ConsoleOptions::default().add_shared_behavior(status_bar.clone()),
    );

    let value: i32 = console.read_line(ReadRequest::plain("n: ")).unwrap();
    status_bar.wait_for_pending_restore();

    assert_eq!(value, 7);
    // Drawn once, and blanked once by the restore thread.
    assert_eq!(mock.count_ops(|op| *op == RenderOp::SaveCursor), 2);
    assert_eq!(mock.screen_row(23), "");
    // Only the thread that reads input may ask for the cursor position.
    let foreground = thread::current().name().map(str::to_string);
    let query_threads = query_threads.lock().unwrap();
    assert!(!query_threads.is_empty());
    assert!(query_threads.iter().all(|name| *name == foreground));
}
