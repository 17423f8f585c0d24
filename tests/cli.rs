use std::process::Command;

use passgen::password_generator::BASIC_ALPHABET;

#[test]
fn prints_one_basic_password() {
    let output = Command::new(env!("CARGO_BIN_EXE_passgen"))
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.ends_with('\n'));

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(1, lines.len());
    assert_eq!(32, lines[0].chars().count());
    assert!(lines[0].chars().all(|c| BASIC_ALPHABET.contains(c)));
}

#[test]
fn two_invocations_differ() {
    let first = Command::new(env!("CARGO_BIN_EXE_passgen")).output().unwrap();
    let second = Command::new(env!("CARGO_BIN_EXE_passgen")).output().unwrap();

    assert_ne!(first.stdout, second.stdout);
}

#[test]
fn logging_stays_off_stdout() {
    let output = Command::new(env!("CARGO_BIN_EXE_passgen"))
        .env("RUST_LOG", "debug")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(1, String::from_utf8(output.stdout).unwrap().lines().count());
}

#[test]
fn unknown_argument_fails() {
    let output = Command::new(env!("CARGO_BIN_EXE_passgen"))
        .arg("--length")
        .output()
        .unwrap();

    assert_eq!(Some(1), output.status.code());
    assert!(output.stdout.is_empty());
}
