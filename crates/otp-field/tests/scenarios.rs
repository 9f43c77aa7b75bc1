//! End-to-end widget scenarios driven through the public API.

use std::cell::RefCell;
use std::rc::Rc;

use otp_field::{OtpConfig, OtpField, OtpLength, slots};

fn field_with_sink(config: OtpConfig) -> (OtpField, Rc<RefCell<Vec<String>>>) {
    let sink = Rc::new(RefCell::new(Vec::new()));
    let codes = Rc::clone(&sink);
    let field = OtpField::new(config).on_complete(move |code| {
        codes.borrow_mut().push(code.to_string());
    });
    (field, sink)
}

#[test]
fn incremental_raw_input_completes_once() {
    let (mut field, sink) = field_with_sink(OtpConfig::default());
    field.tap();

    for raw in ["1", "12", "123456"] {
        field.on_raw_input_change(raw.to_string());
    }

    assert_eq!(sink.borrow().as_slice(), ["123456"]);
    assert!(!field.is_input_active());
    assert_eq!(field.value(), "123456");
}

#[test]
fn overshooting_paste_truncates_and_completes() {
    let (mut field, sink) = field_with_sink(OtpConfig::new(OtpLength::Four));
    field.tap();
    field.handle_paste("98765");
    field.tick();

    assert_eq!(field.value(), "9876");
    assert_eq!(sink.borrow().as_slice(), ["9876"]);
}

#[test]
fn tap_selects_the_first_empty_slot() {
    let (mut field, _) = field_with_sink(OtpConfig::default());
    assert!(!field.is_input_active());

    field.tap();

    assert!(field.is_input_active());
    let derived = slots(field.config(), field.state());
    assert!(derived[0].selected);
    assert!(derived[1..].iter().all(|slot| !slot.selected));
}

#[test]
fn dismiss_mid_entry_changes_nothing_but_focus() {
    let (mut field, sink) = field_with_sink(OtpConfig::default());
    field.tap();
    field.on_raw_input_change("12".to_string());

    field.dismiss();

    assert!(!field.is_input_active());
    assert_eq!(field.value(), "12");
    assert!(sink.borrow().is_empty());
}

#[test]
fn buffer_length_is_clamped_for_any_input() {
    for raw in ["", "5", "55555", "5555555555"] {
        let (mut field, _) = field_with_sink(OtpConfig::new(OtpLength::Five));
        field.tap();
        field.on_raw_input_change(raw.to_string());
        field.tick();
        assert_eq!(
            field.value().chars().count(),
            raw.chars().count().min(5),
            "raw={raw}"
        );
    }
}

#[test]
fn refocusing_a_full_field_allows_further_editing() {
    let (mut field, sink) = field_with_sink(OtpConfig::new(OtpLength::Four));
    field.tap();
    field.on_raw_input_change("1234".to_string());
    assert_eq!(sink.borrow().len(), 1);

    field.tap();
    field.on_raw_input_change("123".to_string());
    field.on_raw_input_change("1239".to_string());

    assert_eq!(sink.borrow().as_slice(), ["1234", "1239"]);
}
