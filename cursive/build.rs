use man::prelude::*;

use std::{path::Path, process::Command};

fn generate_man_page() -> String {
    Manual::new("passgen-cursive")
        .about("A password generator with a strength checker, implemented in rust.")
        .author(Author::new("Joakim Lundborg").email("joakim.lundborg@gmail.com"))
        .author(Author::new("Alexander Kjäll").email("alexander.kjall@gmail.com"))
        .flag(
            Flag::new()
                .short("-h")
                .long("--help")
                .help("Print a help text"),
        )
        .description("passgen-cursive is an ncurses application that generates random passwords. \
Pick a length between 4 and 100 and either the basic alphabet (A-Z, a-z, 0-9) or the strong one \
that also includes punctuation. Every generated password gets a strength rating of Weak, Moderate \
or Strong and can be copied to the clipboard.")
        .custom(
            Section::new("Keyboard shortcuts")
                .paragraph("Up / Down in the length field : change the length by one")
                .paragraph("Enter in the length field : generate a password")
                .paragraph("Control + g : generate a password")
                .paragraph("Control + y : copy the current password to the clipboard")
                .paragraph("Escape : quit"),
        )
        .custom(
            Section::new("configuration").paragraph(
                "The default length and character policy are read from \
$XDG_CONFIG_HOME/passgen/settings.toml, or $HOME/.config/passgen/settings.toml, with the keys \
length (a positive integer) and policy (\"basic\" or \"strong\").",
            ),
        )
        .render()
}

/// Compiles every `res/*.po` catalog into `<dest>/<language>.mo` with `msgfmt`.
fn generate_translations(dest_path: &Path) {
    let res_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("res");
    let pattern = res_dir.join("*.po");

    let existing_iter = match glob::glob(&pattern.to_string_lossy()) {
        Ok(iter) => iter,
        Err(err) => {
            println!("error: {err:?}");
            return;
        }
    };

    for file in existing_iter.flatten() {
        let mo_file = dest_path.join(file.with_extension("mo").file_name().unwrap_or_default());

        print!("generating .mo file for {:?} to {} ", &file, mo_file.display());
        let res = Command::new("msgfmt")
            .arg(format!("--output-file={}", mo_file.display()))
            .arg(&file)
            .output();
        match res {
            Ok(output) if output.status.success() => println!("success"),
            Ok(output) => println!("error: {}", String::from_utf8_lossy(&output.stderr)),
            Err(err) => println!("error: {err:?}"),
        }
        println!("cargo:rerun-if-changed={}", file.display());
    }
}

fn main() {
    let mut dest_path = std::env::current_exe().unwrap();
    dest_path.pop();
    dest_path.pop();
    dest_path.pop();
    dest_path.pop();
    let mut translations_path = dest_path.clone();
    translations_path.push("translations");
    translations_path.push("cursive");
    print!("creating directory: {:?} ", &translations_path);
    let res = std::fs::create_dir_all(&translations_path);
    if res.is_ok() {
        println!("success");
        generate_translations(&translations_path);
        println!(
            "cargo:rustc-env=TRANSLATION_INPUT_PATH={}",
            translations_path.display()
        );
    } else {
        println!("error: {:?}", res.err().unwrap());
    }

    dest_path.push("man-page");
    print!("creating directory: {:?} ", &dest_path);
    let res = std::fs::create_dir_all(&dest_path);
    if res.is_ok() {
        println!("success");
    } else {
        println!("error: {:?}", res.err().unwrap());
    }
    dest_path.push("cursive");
    print!("creating directory: {:?} ", &dest_path);
    let res = std::fs::create_dir_all(&dest_path);
    if res.is_ok() {
        println!("success");
    } else {
        println!("error: {:?}", res.err().unwrap());
    }
    dest_path.push("passgen-cursive.1");

    print!("generating man page to {} ", dest_path.display());
    let res = std::fs::write(&dest_path, generate_man_page());
    if res.is_ok() {
        println!("success");
    } else {
        println!("error: {:?}", res.err().unwrap());
    }

    println!("cargo:rerun-if-changed=build.rs");
}
