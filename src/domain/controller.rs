//! Maps user actions onto the contact manager and derives what to show.
//!
//! Every action is a [`Command`]. [`update`] applies one command to a
//! [`ViewState`] and returns the next state; the only side effect is the
//! mutation (and write-back) performed by the [`ContactManager`]. [`render`]
//! turns a state plus the collection into a [`View`] any front end can draw.

use super::*;

use super::contact::sanitize_phone;
use super::manager::ContactManager;
use super::search::{ListSignal, filter, list_signal};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    Unfiltered,
    Filtered(String),
}

impl Filter {
    pub fn query(&self) -> &str {
        match self {
            Filter::Unfiltered => "",
            Filter::Filtered(query) => query,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub name_input: String,
    pub phone_input: String,
    pub query_input: String,
    pub filter: Filter,
    pub error: Option<String>,
}

impl ViewState {
    pub fn search_enabled(&self) -> bool {
        !self.query_input.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    EditName(String),
    /// Raw phone field text; anything but `0-9` is dropped on the way in.
    EditPhone(String),
    Submit,
    Delete(Uuid),
    EditQuery(String),
    Search,
    DismissError,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub rows: Vec<Row>,
    pub signal: ListSignal,
    pub error: Option<String>,
    pub search_enabled: bool,
}

impl View {
    /// Identity behind a 1-based row number as shown to the user.
    pub fn id_at(&self, row: usize) -> Option<Uuid> {
        row.checked_sub(1)
            .and_then(|i| self.rows.get(i))
            .map(|r| r.id)
    }
}

pub fn update(
    mut state: ViewState,
    command: Command,
    manager: &mut ContactManager,
) -> Result<ViewState, AppError> {
    match command {
        Command::EditName(name) => state.name_input = name,
        Command::EditPhone(phone) => state.phone_input = sanitize_phone(&phone),
        Command::Submit => {
            state.error = None;
            match manager.add_contact(&state.name_input, &state.phone_input) {
                Ok(_) => {
                    state.name_input.clear();
                    state.phone_input.clear();
                    state.filter = Filter::Unfiltered;
                }
                Err(err) => state.error = Some(recoverable(err)?),
            }
        }
        Command::Delete(id) => {
            if let Err(err) = manager.delete_contact(&id) {
                state.error = Some(recoverable(err)?);
            }
        }
        Command::EditQuery(query) => {
            state.query_input = query;
            if !state.search_enabled() {
                state.filter = Filter::Unfiltered;
            }
        }
        Command::Search => {
            if state.search_enabled() {
                state.filter = Filter::Filtered(state.query_input.clone());
            }
        }
        Command::DismissError => state.error = None,
    }

    Ok(state)
}

/// Errors the user can act on become a message; storage failures propagate.
fn recoverable(err: AppError) -> Result<String, AppError> {
    match err {
        AppError::DuplicateContact | AppError::Validation(_) | AppError::NotFound(_) => {
            Ok(err.to_string())
        }
        other => Err(other),
    }
}

pub fn render(state: &ViewState, manager: &ContactManager) -> View {
    let query = state.filter.query();
    let contacts = manager.contact_list();
    let found = filter(contacts, query);

    View {
        signal: list_signal(contacts.len(), found.len(), query),
        rows: found
            .into_iter()
            .map(|c| Row {
                id: c.id,
                name: c.name.clone(),
                phone: c.phone.clone(),
            })
            .collect(),
        error: state.error.clone(),
        search_enabled: state.search_enabled(),
    }
}

/// Holds the view state between events for front ends that keep one around.
#[derive(Debug, Default)]
pub struct Controller {
    state: ViewState,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn dispatch(
        &mut self,
        manager: &mut ContactManager,
        command: Command,
    ) -> Result<View, AppError> {
        self.state = update(self.state.clone(), command, manager)?;
        Ok(self.render(manager))
    }

    pub fn render(&self, manager: &ContactManager) -> View {
        render(&self.state, manager)
    }
}
