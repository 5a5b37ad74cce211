#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

/// The binary, pointed at a json store inside `dir`.
pub fn phonebook(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.env("PHONEBOOK_STORAGE", "json")
        .env("PHONEBOOK_STORAGE_PATH", dir.join("storage.json"))
        .env_remove("RUST_LOG");
    cmd
}

pub fn listing_format(i: usize, name: &str, phone: &str) -> String {
    format!("{i:>3}. {name:<20} {phone}")
}

pub fn add(dir: &Path, name: &str, phone: &str) {
    phonebook(dir)
        .args(["add", "--name", name, "--phone", phone])
        .assert()
        .success();
}
