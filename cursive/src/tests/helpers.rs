use cursive::{
    view::Nameable,
    views::{EditView, LinearLayout, RadioButton, RadioGroup},
};
use passgen::{password_generator::CharacterPolicy, Error};

use crate::helpers::{
    get_value_from_input, is_radio_button_selected, parse_bounded_length, step_length,
};

#[test]
fn test_get_value_from_input() {
    let mut siv = cursive::default();

    let ev = EditView::new()
        .content("unit test content")
        .with_name("input");

    siv.add_layer(ev);

    assert_eq!(
        Some(String::from("unit test content")),
        get_value_from_input(&mut siv, "input")
    );
}

#[test]
fn test_get_value_from_missing_input() {
    let mut siv = cursive::default();

    assert_eq!(None, get_value_from_input(&mut siv, "input"));
}

#[test]
fn is_radio_button_selected_false() {
    let mut siv = cursive::default();

    let mut rg = RadioGroup::new();
    let button1 = rg
        .button(CharacterPolicy::Basic, "b1")
        .with_name("button1_name");
    let button2 = rg
        .button(CharacterPolicy::Strong, "b2")
        .with_name("button2_name");

    let mut ll = LinearLayout::horizontal();
    ll.add_child(button1);
    ll.add_child(button2);

    siv.add_layer(ll);

    assert!(!is_radio_button_selected(&mut siv, "button2_name"));
}

#[test]
fn is_radio_button_selected_true() {
    let mut siv = cursive::default();

    let mut rg = RadioGroup::new();
    let button1 = rg
        .button(CharacterPolicy::Basic, "b1")
        .with_name("button1_name");
    let button2 = rg
        .button(CharacterPolicy::Strong, "b2")
        .with_name("button2_name");

    let mut ll = LinearLayout::horizontal();
    ll.add_child(button1);
    ll.add_child(button2);

    siv.add_layer(ll);

    siv.call_on_name("button2_name", |e: &mut RadioButton<CharacterPolicy>| {
        e.select();
    });

    assert!(is_radio_button_selected(&mut siv, "button2_name"));
    assert!(!is_radio_button_selected(&mut siv, "button1_name"));
}

#[test]
fn is_radio_button_selected_missing() {
    let mut siv = cursive::default();

    assert!(!is_radio_button_selected(&mut siv, "nothing"));
}

#[test]
fn step_length_clamps() {
    assert_eq!(33, step_length("32", 1, 32, 4, 100));
    assert_eq!(100, step_length("100", 1, 32, 4, 100));
    assert_eq!(4, step_length("4", -1, 32, 4, 100));
    assert_eq!(4, step_length("-20", 1, 32, 4, 100));
    assert_eq!(100, step_length("5000", -1, 32, 4, 100));
}

#[test]
fn step_length_falls_back_on_garbage() {
    assert_eq!(32, step_length("abc", 1, 32, 4, 100));
    assert_eq!(100, step_length("", 1, 500, 4, 100));
}

#[test]
fn parse_bounded_length_accepts_the_range() {
    assert_eq!(4, parse_bounded_length("4", 4, 100).unwrap());
    assert_eq!(100, parse_bounded_length(" 100 ", 4, 100).unwrap());
    assert_eq!(32, parse_bounded_length("32", 4, 100).unwrap());
}

#[test]
fn parse_bounded_length_rejects_outside_the_range() {
    for input in ["3", "101", "5000", "9223372036854775807", "0", "-3", "abc"] {
        match parse_bounded_length(input, 4, 100) {
            Err(Error::InvalidLength(rejected)) => assert_eq!(input, rejected),
            other => panic!("expected InvalidLength for {input:?}, got {other:?}"),
        }
    }
}
