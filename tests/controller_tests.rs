//! Integration tests for the pinpad state machine driven through the
//! public crate API.

use std::cell::RefCell;
use std::rc::Rc;

use pinpad::models::{Key, KeyLayout};
use pinpad::pinpad::{DisplaySink, HostCallback, PinpadController};

/// Every sink call recorded in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
enum SinkEvent {
    DigitCount(usize),
    Append(char),
    Delete,
    Reset,
}

#[derive(Clone, Default)]
struct RecordingSink {
    events: Rc<RefCell<Vec<SinkEvent>>>,
}

impl RecordingSink {
    fn events(&self) -> Vec<SinkEvent> {
        self.events.borrow().clone()
    }
}

impl DisplaySink for RecordingSink {
    fn set_digit_count(&mut self, digits: usize) {
        self.events.borrow_mut().push(SinkEvent::DigitCount(digits));
    }
    fn on_append_char(&mut self, symbol: char) {
        self.events.borrow_mut().push(SinkEvent::Append(symbol));
    }
    fn on_delete_char(&mut self) {
        self.events.borrow_mut().push(SinkEvent::Delete);
    }
    fn on_reset(&mut self) {
        self.events.borrow_mut().push(SinkEvent::Reset);
    }
}

#[derive(Clone, Default)]
struct RecordingHost {
    completions: Rc<RefCell<Vec<String>>>,
    help_requests: Rc<RefCell<usize>>,
}

impl HostCallback for RecordingHost {
    fn on_passcode_complete(&mut self, passcode: &str) {
        self.completions.borrow_mut().push(passcode.to_string());
    }
    fn on_help_request(&mut self) {
        *self.help_requests.borrow_mut() += 1;
    }
}

fn wired(num_digits: usize) -> (PinpadController, RecordingSink, RecordingHost) {
    let sink = RecordingSink::default();
    let host = RecordingHost::default();
    let mut controller = PinpadController::new();
    controller.set_num_digits(num_digits);
    controller.set_display_sink(Box::new(sink.clone()));
    controller.set_host_callback(Box::new(host.clone()));
    (controller, sink, host)
}

fn tap_all(controller: &mut PinpadController, symbols: &str) {
    for symbol in symbols.chars() {
        controller.press_symbol(symbol);
    }
}

#[test]
fn test_literal_taps_append_in_order() {
    let (mut controller, sink, host) = wired(4);
    tap_all(&mut controller, "172");

    assert_eq!(
        sink.events(),
        vec![
            SinkEvent::DigitCount(4),
            SinkEvent::Append('1'),
            SinkEvent::Append('7'),
            SinkEvent::Append('2'),
        ]
    );
    assert_eq!(controller.entered_len(), 3);
    assert!(host.completions.borrow().is_empty());
}

#[test]
fn test_delete_on_empty_is_a_no_op() {
    let (mut controller, sink, _host) = wired(4);
    controller.handle_key_press(&Key::delete());
    controller.handle_key_press(&Key::delete());

    assert_eq!(sink.events(), vec![SinkEvent::DigitCount(4)]);
    assert_eq!(controller.entered_len(), 0);
}

#[test]
fn test_completion_fires_exactly_once() {
    let (mut controller, sink, host) = wired(4);
    tap_all(&mut controller, "1234");
    assert_eq!(*host.completions.borrow(), vec!["1234"]);

    // Further taps before reset produce no display or host events.
    let events_before = sink.events();
    tap_all(&mut controller, "56");
    assert_eq!(sink.events(), events_before);
    assert_eq!(*host.completions.borrow(), vec!["1234"]);
}

#[test]
fn test_scenario_with_delete_mid_entry() {
    // taps 1, 2, DELETE, 3, 4, 5 -> completes with "1345"
    let (mut controller, _sink, host) = wired(4);
    tap_all(&mut controller, "12");
    controller.handle_key_press(&Key::delete());
    tap_all(&mut controller, "345");

    assert_eq!(*host.completions.borrow(), vec!["1345"]);
}

#[test]
fn test_reset_clears_regardless_of_state() {
    let (mut controller, sink, _host) = wired(4);

    controller.reset();
    assert_eq!(controller.entered_len(), 0);

    tap_all(&mut controller, "1234");
    controller.reset();
    assert_eq!(controller.entered_len(), 0);
    assert_eq!(
        sink.events()
            .iter()
            .filter(|event| **event == SinkEvent::Reset)
            .count(),
        2
    );

    // Entry restarts cleanly after a reset.
    tap_all(&mut controller, "9");
    assert_eq!(controller.entered_len(), 1);
}

#[test]
fn test_completion_can_fire_again_after_reset() {
    let (mut controller, _sink, host) = wired(2);
    tap_all(&mut controller, "12");
    controller.reset();
    tap_all(&mut controller, "34");

    assert_eq!(*host.completions.borrow(), vec!["12", "34"]);
}

#[test]
fn test_fail_with_reset_matches_reset_then_feedback() {
    let (mut controller, sink, _host) = wired(4);
    tap_all(&mut controller, "12");
    controller.fail(true);

    assert_eq!(controller.entered_len(), 0);
    assert!(controller.is_shaking());
    assert!(controller.take_feedback_pulse());
    assert_eq!(
        sink.events(),
        vec![
            SinkEvent::DigitCount(4),
            SinkEvent::Append('1'),
            SinkEvent::Append('2'),
            SinkEvent::Reset,
        ]
    );
}

#[test]
fn test_fail_without_reset_preserves_buffer() {
    let (mut controller, sink, _host) = wired(4);
    tap_all(&mut controller, "12");
    controller.fail(false);

    assert_eq!(controller.entered_len(), 2);
    assert!(controller.is_shaking());
    // No reset event was emitted.
    assert!(!sink.events().contains(&SinkEvent::Reset));
}

#[test]
fn test_overlapping_fail_restarts_the_shake() {
    let (mut controller, _sink, _host) = wired(4);
    controller.fail(false);
    assert!(controller.take_feedback_pulse());
    controller.fail(false);
    assert!(controller.is_shaking());
    assert!(controller.take_feedback_pulse());
}

#[test]
fn test_help_fires_on_every_tap() {
    let (mut controller, _sink, host) = wired(4);
    controller.handle_key_press(&Key::help());
    tap_all(&mut controller, "1234");
    controller.handle_key_press(&Key::help());

    assert_eq!(*host.help_requests.borrow(), 2);
    // Help never touches the buffer.
    assert_eq!(controller.entered_len(), 4);
}

#[test]
fn test_digit_count_forwarded_to_new_sink() {
    let sink = RecordingSink::default();
    let mut controller = PinpadController::new();
    controller.set_num_digits(6);
    controller.set_display_sink(Box::new(sink.clone()));

    assert_eq!(sink.events(), vec![SinkEvent::DigitCount(6)]);
}

#[test]
fn test_custom_alphabet_layout() {
    let layout = KeyLayout::new(vec![
        Key::plain('a'),
        Key::plain('b'),
        Key::plain('c'),
        Key::plain('d'),
        Key::plain('e'),
        Key::plain('f'),
        Key::plain('g'),
        Key::plain('h'),
        Key::plain('i'),
        Key::help(),
        Key::plain('j'),
        Key::delete(),
    ]);
    let host = RecordingHost::default();
    let mut controller = PinpadController::with_layout(layout);
    controller.set_num_digits(3);
    controller.set_host_callback(Box::new(host.clone()));

    tap_all(&mut controller, "abc");
    assert_eq!(*host.completions.borrow(), vec!["abc"]);
}

#[test]
fn test_handle_key_at_resolves_layout_indices() {
    // Telephone layout: index 10 is '0', index 11 is delete.
    let (mut controller, sink, _host) = wired(4);
    assert!(controller.handle_key_at(10));
    assert!(controller.handle_key_at(11));
    assert!(!controller.handle_key_at(12));

    assert_eq!(
        sink.events(),
        vec![
            SinkEvent::DigitCount(4),
            SinkEvent::Append('0'),
            SinkEvent::Delete,
        ]
    );
}
