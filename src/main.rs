use std::process::exit;

fn main() {
    if let Err(e) = rusty_phonebook::prelude::run_app() {
        eprintln!("Error: {}", e);
        exit(1);
    }
}
