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

use std::process;

use passgen::password_generator::{password_generator, CharacterPolicy, DEFAULT_LENGTH};

fn help() {
    println!(
        "Prints a random password of {DEFAULT_LENGTH} letters and digits. For a password with symbols or a strength rating, use passgen-cursive."
    );
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    match args.len() {
        1 => (),
        2 if args[1] == "-h" || args[1] == "--help" => {
            help();
            process::exit(0);
        }
        _ => {
            eprintln!("Unknown argument, usage: passgen [-h|--help]");
            process::exit(1);
        }
    }

    match password_generator(DEFAULT_LENGTH, CharacterPolicy::Basic) {
        Ok(password) => println!("{}", password.as_str()),
        Err(err) => {
            eprintln!("Error {err}");
            process::exit(1);
        }
    }
}
