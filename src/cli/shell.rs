use std::io::{BufRead, Write};

use super::render::write_view;
use crate::prelude::{AppError, Command, ContactManager, Controller};

const HELP: &str = "\
Commands:
  add              add a contact (asks for name and phone)
  search <query>   show contacts whose name or phone contains <query>
  clear            drop the search filter
  delete <row>     delete the contact on row <row> of the list shown
  list             show the current list again
  help             show this help
  quit             leave the phone book";

#[derive(Debug, PartialEq, Eq)]
enum ShellCommand {
    Add,
    Search(String),
    Clear,
    Delete(usize),
    List,
    Help,
    Quit,
}

fn parse_line(line: &str) -> Result<ShellCommand, AppError> {
    let line = line.trim();
    let (word, rest) = line.split_once(' ').unwrap_or((line, ""));

    match word.to_lowercase().as_str() {
        "add" | "a" => Ok(ShellCommand::Add),
        "search" | "s" => Ok(ShellCommand::Search(rest.trim_start().to_string())),
        "clear" | "c" => Ok(ShellCommand::Clear),
        "delete" | "d" => {
            let row = rest.trim().parse::<usize>().map_err(|_| {
                AppError::Validation("Provide the row number to delete".to_string())
            })?;
            Ok(ShellCommand::Delete(row))
        }
        "list" | "l" | "" => Ok(ShellCommand::List),
        "help" | "h" | "?" => Ok(ShellCommand::Help),
        "quit" | "q" | "exit" => Ok(ShellCommand::Quit),
        _ => Err(AppError::ParseCommand(word.to_string())),
    }
}

fn prompt(out: &mut impl Write, label: &str) -> Result<(), AppError> {
    write!(out, "{}", label)?;
    out.flush()?;
    Ok(())
}

/// Reads one line, `None` at end of input.
fn read_line(input: &mut impl BufRead) -> Result<Option<String>, AppError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}

/// Runs the interactive phone book until `quit` or end of input.
///
/// Row numbers typed by the user refer to the list printed last, so a delete
/// always removes the contact the user was looking at, filtered or not.
pub fn run_shell(
    manager: &mut ContactManager,
    mut input: impl BufRead,
    mut out: impl Write,
) -> Result<(), AppError> {
    let mut controller = Controller::new();
    let mut view = controller.render(manager);

    writeln!(out, "\n--- PHONE BOOK ---\n")?;
    write_view(&mut out, &view)?;

    loop {
        prompt(&mut out, "> ")?;
        let Some(line) = read_line(&mut input)? else {
            break;
        };

        let command = match parse_line(&line) {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "{}", e)?;
                continue;
            }
        };
        tracing::debug!(?command, "shell command");

        view = match command {
            ShellCommand::Quit => break,
            ShellCommand::Help => {
                writeln!(out, "{}", HELP)?;
                continue;
            }
            ShellCommand::List => controller.render(manager),
            ShellCommand::Add => {
                prompt(&mut out, "Name: ")?;
                let Some(name) = read_line(&mut input)? else {
                    break;
                };
                controller.dispatch(manager, Command::EditName(name))?;

                prompt(&mut out, "Phone: ")?;
                let Some(phone) = read_line(&mut input)? else {
                    break;
                };
                controller.dispatch(manager, Command::EditPhone(phone))?;

                let view = controller.dispatch(manager, Command::Submit)?;
                if view.error.is_none() {
                    writeln!(out, "Contact added successfully")?;
                }
                view
            }
            ShellCommand::Search(query) => {
                controller.dispatch(manager, Command::EditQuery(query))?;
                controller.dispatch(manager, Command::Search)?
            }
            ShellCommand::Clear => {
                controller.dispatch(manager, Command::EditQuery(String::new()))?
            }
            ShellCommand::Delete(row) => match view.id_at(row) {
                Some(id) => {
                    let view = controller.dispatch(manager, Command::Delete(id))?;
                    if view.error.is_none() {
                        writeln!(out, "Contact deleted successfully")?;
                    }
                    view
                }
                None => {
                    writeln!(out, "{}", AppError::NotFound("Contact".to_string()))?;
                    continue;
                }
            },
        };

        write_view(&mut out, &view)?;
        if view.error.is_some() {
            controller.dispatch(manager, Command::DismissError)?;
        }
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{LocalStorage, MemKv};

    fn session(script: &str) -> Result<(String, ContactManager), AppError> {
        let mut manager =
            ContactManager::new(Box::new(LocalStorage::new("mem", MemKv::default())))?;
        let mut out = Vec::new();

        run_shell(&mut manager, script.as_bytes(), &mut out)?;

        Ok((String::from_utf8_lossy(&out).into_owned(), manager))
    }

    #[test]
    fn parses_shell_commands() -> Result<(), AppError> {
        assert_eq!(parse_line("add")?, ShellCommand::Add);
        assert_eq!(
            parse_line("search Alice Smith")?,
            ShellCommand::Search("Alice Smith".to_string())
        );
        assert_eq!(parse_line("search")?, ShellCommand::Search(String::new()));
        assert_eq!(
            parse_line("search   bob")?,
            ShellCommand::Search("bob".to_string())
        );
        assert_eq!(parse_line(" DELETE 3 ")?, ShellCommand::Delete(3));
        assert_eq!(parse_line("")?, ShellCommand::List);
        assert!(matches!(parse_line("delete x"), Err(AppError::Validation(_))));
        assert!(matches!(
            parse_line("frobnicate"),
            Err(AppError::ParseCommand(cmd)) if cmd == "frobnicate"
        ));
        Ok(())
    }

    #[test]
    fn empty_book_says_so() -> Result<(), AppError> {
        let (out, _) = session("quit\n")?;

        assert!(out.contains("No contacts yet"));
        Ok(())
    }

    #[test]
    fn add_strips_phone_and_rejects_duplicates() -> Result<(), AppError> {
        let (out, manager) = session("add\nAlice\n12a3b\nadd\nAlice\n123\n")?;

        assert_eq!(manager.len(), 1);
        assert!(manager.exists("Alice", "123"));
        assert_eq!(out.matches("Contact added successfully").count(), 1);
        assert!(out.contains("Error: Contact already exists."));
        Ok(())
    }

    #[test]
    fn delete_uses_rows_of_the_filtered_list() -> Result<(), AppError> {
        let script = "add\nAnn\n100\nadd\nBob\n200\nadd\nBobby\n300\nsearch bob\ndelete 1\nclear\n";
        let (out, manager) = session(script)?;

        assert!(out.contains("Contact deleted successfully"));
        let names: Vec<&str> = manager
            .contact_list()
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, ["Ann", "Bobby"]);
        Ok(())
    }

    #[test]
    fn unmatched_search_and_bad_rows_are_reported() -> Result<(), AppError> {
        let (out, manager) = session("add\nAlice\n123\nsearch bob\ndelete 1\nfly\n")?;

        assert!(out.contains("Contact not found."));
        assert!(out.contains("Contact Not found"));
        assert!(out.contains("Unrecognized command: 'fly'"));
        assert_eq!(manager.len(), 1);
        Ok(())
    }

    #[test]
    fn search_ignores_extra_spaces_after_the_command() -> Result<(), AppError> {
        let (out, manager) = session("add\nAnn\n100\nadd\nBob\n200\nsearch   bob\ndelete 1\n")?;

        assert!(!out.contains("Contact not found."));
        assert!(out.contains("Contact deleted successfully"));
        assert!(manager.exists("Ann", "100"));
        assert!(!manager.exists("Bob", "200"));
        Ok(())
    }

    #[test]
    fn end_of_input_mid_add_stops_cleanly() -> Result<(), AppError> {
        let (_, manager) = session("add\nAlice\n")?;

        assert!(manager.is_empty());
        Ok(())
    }
}
