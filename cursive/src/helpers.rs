/*  Passgen - a simple password generator
    Copyright (C) 2019 Joakim Lundborg, Alexander Kjäll

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU General Public License as published by
    the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    This program is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU General Public License for more details.

    You should have received a copy of the GNU General Public License
    along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/

use cursive::{
    event::Key,
    views::{Dialog, EditView, OnEventView, RadioButton, TextView},
    Cursive,
};
use passgen::{
    password_generator::{parse_length, CharacterPolicy},
    Error, Result,
};

pub fn errorbox(ui: &mut Cursive, err: &Error) {
    let (title, text) = match err {
        Error::InvalidLength(_) => (
            super::CATALOG.gettext("Invalid Input"),
            super::CATALOG.gettext("Please enter a valid length.").to_string(),
        ),
        _ => (super::CATALOG.gettext("Error"), format!("{err}")),
    };

    let d = Dialog::around(TextView::new(text))
        .dismiss_button(super::CATALOG.gettext("Ok"))
        .title(title);

    let ev = OnEventView::new(d).on_event(Key::Esc, |s| {
        s.pop_layer();
    });

    ui.add_layer(ev);
}

pub fn infobox(ui: &mut Cursive, title: &str, text: &str) {
    let d = Dialog::around(TextView::new(text))
        .dismiss_button(super::CATALOG.gettext("Ok"))
        .title(title);

    let ev = OnEventView::new(d).on_event(Key::Esc, |s| {
        s.pop_layer();
    });

    ui.add_layer(ev);
}

pub fn get_value_from_input(s: &mut Cursive, input_name: &str) -> Option<String> {
    s.call_on_name(input_name, |e: &mut EditView| e.get_content().to_string())
}

pub fn is_radio_button_selected(s: &mut Cursive, button_name: &str) -> bool {
    s.call_on_name(button_name, |e: &mut RadioButton<CharacterPolicy>| {
        e.is_selected()
    })
    .unwrap_or(false)
}

/// Steps a length by `delta` and keeps it within `min..=max`, input that isn't a number starts
/// over from `fallback`.
pub fn step_length(current: &str, delta: i64, fallback: usize, min: usize, max: usize) -> usize {
    match current.trim().parse::<i64>() {
        Ok(n) => (n.saturating_add(delta)).clamp(min as i64, max as i64) as usize,
        Err(_) => fallback.clamp(min, max),
    }
}

/// Parses the content of a length field, a number outside `min..=max` is rejected the same way
/// as one that doesn't parse.
pub fn parse_bounded_length(input: &str, min: usize, max: usize) -> Result<usize> {
    let length = parse_length(input)?;
    if !(min..=max).contains(&length) {
        return Err(Error::InvalidLength(input.to_owned()));
    }
    Ok(length)
}

#[cfg(test)]
#[path = "tests/helpers.rs"]
mod helpers_tests;
