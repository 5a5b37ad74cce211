use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::store::{DEFAULT_STORAGE_PATH, StorageMediums};

#[derive(Parser, Debug)]
#[command(name = "rusty-phonebook", version, about = "Simple Phone Book")]
pub struct Cli {
    /// Storage medium (json, mem)
    #[arg(long, env = "PHONEBOOK_STORAGE", default_value = "json")]
    pub storage: StorageMediums,

    /// File backing the json storage medium
    #[arg(long, env = "PHONEBOOK_STORAGE_PATH", default_value = DEFAULT_STORAGE_PATH)]
    pub storage_path: PathBuf,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new contact
    Add {
        /// Contact name
        #[arg(long)]
        name: String,

        /// Contact phone number, anything but digits is dropped
        #[arg(long)]
        phone: String,
    },
    /// List contacts in the order they were added
    List,
    /// Show contacts whose name (any case) or phone contains the query
    Search {
        query: String,
    },
    /// Delete a contact by its row number
    /// as printed by `list`, or by `search` when --query is given
    Delete {
        /// Row number to delete
        #[arg(long)]
        row: usize,

        /// Query the row number refers to
        #[arg(long)]
        query: Option<String>,
    },
    /// Interactive session: add, search, delete and list in one go
    Shell,
}
