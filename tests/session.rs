//! End-to-end picker sessions on the in-memory screen.

use std::thread;
use std::time::Duration;

use urlpick::renderer::EventFeed;
use urlpick::{FocusLoop, Key, MemoryScreen, PickerConfig, SessionState};

const DEBOUNCE: Duration = Duration::from_millis(100);

fn options(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn numbered(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("https://host{i}.example.com")).collect()
}

fn picker(items: Vec<String>) -> (FocusLoop<MemoryScreen>, EventFeed) {
    let screen = MemoryScreen::new(60, 20);
    let feed = screen.feed();
    let config = PickerConfig::default().with_debounce(DEBOUNCE);
    (FocusLoop::new(screen, items, config).unwrap(), feed)
}

/// Send `script` from another thread, pausing where asked.
fn play(feed: EventFeed, script: Vec<Step>) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        for step in script {
            match step {
                Step::Key(key) => {
                    feed.key(key);
                }
                Step::Type(text) => {
                    feed.type_str(text);
                }
                Step::Wait(duration) => thread::sleep(duration),
            }
        }
    })
}

enum Step {
    Key(Key),
    Type(&'static str),
    Wait(Duration),
}

// ── navigation ──

#[test]
fn down_then_enter_confirms_second_option() {
    let (mut picker, feed) = picker(options(&["https://a.io", "https://b.io", "Exit"]));
    feed.key(Key::Down);
    feed.key(Key::Enter);

    let outcome = picker.run().unwrap();
    assert_eq!(outcome.state, SessionState::Confirmed);
    assert_eq!(outcome.index, Some(1));
    assert_eq!(outcome.value, "https://b.io");
    assert!(!picker.matcher_running());
}

#[test]
fn backtab_from_first_wraps_to_last() {
    let (mut picker, feed) = picker(options(&["a", "b", "Exit"]));
    feed.key(Key::BackTab);
    feed.key(Key::Enter);

    let outcome = picker.run().unwrap();
    assert_eq!(outcome.index, Some(2));
    assert_eq!(outcome.value, "Exit");
    assert_eq!(picker.selection().cancel_index(), Some(2));
}

#[test]
fn tab_and_up_move_the_highlight() {
    let (mut picker, feed) = picker(options(&["a", "b", "c"]));
    feed.key(Key::Tab);
    feed.key(Key::Tab);
    feed.key(Key::Up);
    feed.key(Key::Enter);

    assert_eq!(picker.run().unwrap().index, Some(1));
}

// ── termination ──

#[test]
fn escape_cancels_with_sentinel() {
    let (mut picker, feed) = picker(options(&["a", "b"]));
    feed.key(Key::Down);
    feed.key(Key::Escape);

    let outcome = picker.run().unwrap();
    assert_eq!(outcome.state, SessionState::Cancelled);
    assert_eq!(outcome.index, None);
    assert_eq!(outcome.value, "quit");
    assert!(!picker.matcher_running());
}

#[test]
fn quit_key_cancels() {
    let (mut picker, feed) = picker(options(&["a", "b"]));
    feed.key(Key::Char('q'));

    assert_eq!(picker.run().unwrap().state, SessionState::Cancelled);
}

#[test]
fn closed_input_cancels() {
    let (mut picker, feed) = picker(options(&["a", "b"]));
    feed.close();

    let outcome = picker.run().unwrap();
    assert_eq!(outcome.state, SessionState::Cancelled);
    assert!(!picker.matcher_running());
}

// ── typed indices ──

#[test]
fn typed_digit_jumps_immediately_when_unambiguous() {
    let (mut picker, feed) = picker(numbered(3));
    let script = play(
        feed,
        vec![
            Step::Type("2"),
            Step::Wait(DEBOUNCE / 2),
            Step::Key(Key::Enter),
        ],
    );

    let outcome = picker.run().unwrap();
    script.join().unwrap();
    assert_eq!(outcome.index, Some(2));
    assert_eq!(outcome.value, "https://host2.example.com");
}

#[test]
fn ambiguous_digit_commits_after_quiet_period() {
    let (mut picker, feed) = picker(numbered(12));
    let script = play(
        feed,
        vec![
            Step::Type("1"),
            Step::Wait(DEBOUNCE * 4),
            Step::Key(Key::Enter),
        ],
    );

    let outcome = picker.run().unwrap();
    script.join().unwrap();
    assert_eq!(outcome.index, Some(1));
}

#[test]
fn two_digits_reach_double_digit_index() {
    let (mut picker, feed) = picker(numbered(12));
    let script = play(
        feed,
        vec![
            Step::Type("11"),
            Step::Wait(DEBOUNCE / 2),
            Step::Key(Key::Enter),
        ],
    );

    let outcome = picker.run().unwrap();
    script.join().unwrap();
    assert_eq!(outcome.index, Some(11));
}

#[test]
fn invalid_digits_leave_selection_alone() {
    let (mut picker, feed) = picker(numbered(3));
    let script = play(
        feed,
        vec![
            Step::Key(Key::Down),
            Step::Type("7"),
            Step::Wait(DEBOUNCE * 3),
            Step::Key(Key::Enter),
        ],
    );

    let outcome = picker.run().unwrap();
    script.join().unwrap();
    assert_eq!(outcome.index, Some(1));
}

// ── screen ──

#[test]
fn resize_syncs_and_redraws() {
    let (mut picker, feed) = picker(options(&["a", "b"]));
    feed.resize(30, 4);
    feed.key(Key::Escape);

    picker.run().unwrap();
    let screen = picker.screen();
    assert_eq!(screen.sync_count(), 1);
    assert_eq!(urlpick::Screen::size(screen), (30, 4));
    assert_eq!(screen.show_count(), 2);
}

#[test]
fn last_frame_shows_highlighted_row() {
    let (mut picker, feed) = picker(options(&["first", "second"]));
    feed.key(Key::Down);
    feed.key(Key::Escape);

    picker.run().unwrap();
    let screen = picker.screen();
    assert_eq!(screen.row_text(0), "   [0] first");
    assert_eq!(screen.row_text(1), " > [1] second");
}

#[test]
fn long_option_wraps_on_narrow_screen() {
    let screen = MemoryScreen::new(16, 6);
    let feed = screen.feed();
    let items = options(&["https://example.com/a/long/path", "Exit"]);
    let mut picker = FocusLoop::new(screen, items, PickerConfig::default()).unwrap();
    feed.key(Key::Escape);

    picker.run().unwrap();
    let screen = picker.screen();
    assert!(screen.row_text(0).starts_with(" > [0]"));
    assert!(screen.row_text(1).len() > 1);
    assert!((1..6).any(|y| screen.row_text(y).contains("[1] Exit")));
}
