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

use std::{path::PathBuf, process};

use cursive::{
    direction::Orientation,
    event::{Event, Key},
    theme::{BaseColor, Color},
    traits::*,
    utils::{markup::StyledString, Counter},
    views::{
        Dialog, DummyView, EditView, LinearLayout, OnEventView, ProgressBar, RadioGroup, TextView,
    },
    Cursive,
};
use log::{debug, warn};
use passgen::{
    clipboard::{self, Clipboard, SystemClipboard},
    password_generator::{password_generator, CharacterPolicy, Password},
    settings::{self, Settings},
    strength::{self, Strength},
};
use unic_langid::LanguageIdentifier;

mod helpers;

#[macro_use]
extern crate lazy_static;

lazy_static! {
    static ref CATALOG: gettext::Catalog = get_translation_catalog();
}

/// Lengths the form accepts, typed or stepped
const MIN_LENGTH: usize = 4;
const MAX_LENGTH: usize = 100;

/// What the form needs to remember between callbacks, stored as the user data of the `Cursive`
/// instance.
pub struct FormState {
    settings: Settings,
    password: Option<Password>,
    strength: Counter,
    clipboard: Box<dyn Clipboard>,
}

fn selected_policy(ui: &mut Cursive) -> CharacterPolicy {
    if helpers::is_radio_button_selected(ui, "policy_strong") {
        CharacterPolicy::Strong
    } else {
        CharacterPolicy::Basic
    }
}

fn adjust_length(ui: &mut Cursive, delta: i64) {
    let fallback = ui
        .user_data::<FormState>()
        .map(|state| state.settings.length)
        .unwrap_or_default();

    ui.call_on_name("length_input", |e: &mut EditView| {
        let length = helpers::step_length(&e.get_content(), delta, fallback, MIN_LENGTH, MAX_LENGTH);
        e.set_content(length.to_string());
    });
}

fn strength_text(strength: Option<Strength>) -> StyledString {
    let prefix = CATALOG.gettext("Strength: ");
    match strength {
        None => StyledString::plain(format!("{}{}", prefix, CATALOG.gettext("N/A"))),
        Some(s) => {
            let color = match s {
                Strength::Strong => Color::Dark(BaseColor::Green),
                Strength::Moderate => Color::Dark(BaseColor::Yellow),
                Strength::Weak => Color::Dark(BaseColor::Red),
            };
            StyledString::styled(format!("{}{}", prefix, CATALOG.gettext(s.label())), color)
        }
    }
}

fn show_password(ui: &mut Cursive, password: Password) {
    let verdict = strength::evaluate(password.as_str());

    ui.call_on_name("password_output", |v: &mut TextView| {
        v.set_content(password.as_str());
    });
    ui.call_on_name("strength_label", |v: &mut TextView| {
        v.set_content(strength_text(Some(verdict.strength)));
    });
    ui.call_on_name("status_bar", |l: &mut TextView| {
        l.set_content("");
    });
    ui.with_user_data(|state: &mut FormState| {
        state.strength.set(verdict.weight as usize);
        state.password = Some(password);
    });
}

fn generate(ui: &mut Cursive) {
    let input = match helpers::get_value_from_input(ui, "length_input") {
        Some(input) => input,
        None => return,
    };
    let policy = selected_policy(ui);

    match helpers::parse_bounded_length(&input, MIN_LENGTH, MAX_LENGTH)
        .and_then(|length| password_generator(length, policy))
    {
        Err(err) => {
            debug!("not generating a password: {err}");
            helpers::errorbox(ui, &err);
        }
        Ok(password) => show_password(ui, password),
    }
}

fn copy(ui: &mut Cursive) {
    let res = ui.with_user_data(|state: &mut FormState| {
        clipboard::copy_password(state.clipboard.as_mut(), state.password.as_ref())
    });

    match res {
        Some(Ok(true)) => {
            helpers::infobox(
                ui,
                CATALOG.gettext("Copied"),
                CATALOG.gettext("Password copied to clipboard!"),
            );
            ui.call_on_name("status_bar", |l: &mut TextView| {
                l.set_content(CATALOG.gettext("Copied password to copy buffer"));
            });
        }
        Some(Err(err)) => helpers::errorbox(ui, &err),
        _ => (),
    }
}

fn build_form(ui: &mut Cursive, settings: Settings, clipboard: Box<dyn Clipboard>) {
    let strength = Counter::new(0);
    ui.set_user_data(FormState {
        settings,
        password: None,
        strength: strength.clone(),
        clipboard,
    });

    let length_input = OnEventView::new(
        EditView::new()
            .content(settings.length.clamp(MIN_LENGTH, MAX_LENGTH).to_string())
            .on_submit(|ui, _| generate(ui))
            .with_name("length_input")
            .fixed_width(10),
    )
    .on_event(Key::Up, |ui| adjust_length(ui, 1))
    .on_event(Key::Down, |ui| adjust_length(ui, -1));

    let mut policy_group: RadioGroup<CharacterPolicy> = RadioGroup::new();
    let mut basic = policy_group.button(
        CharacterPolicy::Basic,
        CATALOG.gettext("Basic (A-Z, a-z, 0-9)"),
    );
    let mut strong = policy_group.button(
        CharacterPolicy::Strong,
        CATALOG.gettext("Strong (+ symbols)"),
    );
    match settings.policy {
        CharacterPolicy::Basic => basic.select(),
        CharacterPolicy::Strong => strong.select(),
    };

    let strength_bar = ProgressBar::new()
        .range(0, 100)
        .with_value(strength)
        .fixed_width(40);

    let fields = LinearLayout::vertical()
        .child(TextView::new(CATALOG.gettext("Password Length:")))
        .child(
            LinearLayout::horizontal()
                .child(length_input)
                .child(TextView::new(CATALOG.gettext(" 4 - 100, up/down to adjust"))),
        )
        .child(DummyView)
        .child(TextView::new(CATALOG.gettext("Password Type:")))
        .child(basic.with_name("policy_basic"))
        .child(strong.with_name("policy_strong"))
        .child(DummyView)
        .child(TextView::new("").center().with_name("password_output"))
        .child(DummyView)
        .child(TextView::new(strength_text(None)).with_name("strength_label"))
        .child(strength_bar);

    ui.add_layer(
        LinearLayout::new(Orientation::Vertical)
            .child(
                Dialog::around(fields)
                    .title(CATALOG.gettext("Password Generator"))
                    .button(CATALOG.gettext("Generate Password"), generate)
                    .button(CATALOG.gettext("Copy to Clipboard"), copy)
                    .button(CATALOG.gettext("Quit"), |s| s.quit()),
            )
            .child(
                LinearLayout::new(Orientation::Horizontal)
                    .child(TextView::new(CATALOG.gettext(
                        "ctrl-g: Generate | ctrl-y: Copy | esc: Quit | ",
                    )))
                    .child(TextView::new("").with_name("status_bar")),
            ),
    );
}

fn help() {
    println!("{}", CATALOG.gettext("A password generator with a strength checker. The default length and character policy are read from $XDG_CONFIG_HOME/passgen/settings.toml, or $HOME/.config/passgen/settings.toml if XDG_CONFIG_HOME isn't set."));
}

/// Directories holding compiled `<language>.mo` catalogs, the build output first.
fn translation_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![];
    if let Some(path) = option_env!("TRANSLATION_INPUT_PATH") {
        dirs.push(PathBuf::from(path));
    }
    dirs.push(PathBuf::from("/usr/share/passgen/translations"));
    dirs
}

/// The first catalog that parses, trying each language in order of preference.
fn find_catalog(dirs: &[PathBuf], languages: &[String]) -> Option<gettext::Catalog> {
    languages.iter().find_map(|language| {
        dirs.iter().find_map(|dir| {
            let file = std::fs::File::open(dir.join(format!("{language}.mo"))).ok()?;
            gettext::Catalog::parse(file).ok()
        })
    })
}

fn get_translation_catalog() -> gettext::Catalog {
    let languages: Vec<String> = locale_config::Locale::current()
        .tags_for("messages")
        .filter_map(|tag| tag.to_string().parse::<LanguageIdentifier>().ok())
        .map(|langid| langid.language.to_string())
        .collect();

    find_catalog(&translation_dirs(), &languages).unwrap_or_else(gettext::Catalog::empty)
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    match args.len() {
        1 => (),
        2 => {
            if args[1] == "-h" || args[1] == "--help" {
                help();
                std::process::exit(0);
            } else {
                eprintln!(
                    "{}",
                    CATALOG.gettext("Unknown argument, usage: passgen-cursive [-h|--help]")
                );
                process::exit(1);
            }
        }
        _ => {
            eprintln!(
                "{}",
                CATALOG.gettext("Unknown argument, usage: passgen-cursive [-h|--help]")
            );
            process::exit(1);
        }
    }

    let home = std::env::var("HOME").ok().map(PathBuf::from);
    let xdg_config_home = std::env::var("XDG_CONFIG_HOME").ok().map(PathBuf::from);

    let settings = match settings::read_config(&home, &xdg_config_home) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("Error {err}");
            process::exit(1);
        }
    };

    let mut ui = cursive::default();

    if let Err(err) = ui.load_toml(include_str!("../res/style.toml")) {
        warn!("couldn't load the theme: {err:?}");
    }

    build_form(&mut ui, settings, Box::new(SystemClipboard::new()));

    ui.add_global_callback(Event::CtrlChar('g'), generate);
    ui.add_global_callback(Event::CtrlChar('y'), copy);
    ui.add_global_callback(Event::Key(Key::Esc), |s| s.quit());

    ui.run();
}

#[cfg(test)]
#[path = "tests/main.rs"]
mod main_tests;
