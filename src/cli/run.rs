use std::io::{self, Write};

use clap::Parser;
use dotenv::dotenv;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use super::{render::write_view, shell::run_shell};
use crate::prelude::{
    AppError, Command, ContactManager, Controller, parse_storage_type, sanitize_phone,
    command::{Cli, Commands},
};

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // stdout is the list output, keep logs off it
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .try_init();
}

/// Controller positioned on `query`, or unfiltered when there is none.
fn controller_for(
    manager: &mut ContactManager,
    query: Option<String>,
) -> Result<Controller, AppError> {
    let mut controller = Controller::new();
    if let Some(query) = query {
        if query.trim().is_empty() {
            return Err(AppError::Validation("No query provided".to_string()));
        }
        controller.dispatch(manager, Command::EditQuery(query))?;
        controller.dispatch(manager, Command::Search)?;
    }
    Ok(controller)
}

pub fn run_app() -> Result<(), AppError> {
    dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let storage = parse_storage_type(cli.storage, &cli.storage_path)?;
    let mut manager = ContactManager::new(storage)?;

    tracing::info!(
        medium = %cli.storage,
        path = %cli.storage_path.display(),
        "storage ready"
    );

    let mut stdout = io::stdout().lock();

    match cli.command {
        Commands::Add { name, phone } => {
            manager.add_contact(&name, &sanitize_phone(&phone))?;
            writeln!(stdout, "Contact added successfully")?;
            Ok(())
        }

        Commands::List => {
            let view = Controller::new().render(&manager);
            write_view(&mut stdout, &view)
        }

        Commands::Search { query } => {
            let controller = controller_for(&mut manager, Some(query))?;
            write_view(&mut stdout, &controller.render(&manager))
        }

        Commands::Delete { row, query } => {
            let controller = controller_for(&mut manager, query)?;
            let view = controller.render(&manager);

            let id = view
                .id_at(row)
                .ok_or_else(|| AppError::NotFound("Contact".to_string()))?;
            let removed = manager.delete_contact(&id)?;

            tracing::debug!(name = %removed.name, phone = %removed.phone, row, "deleted row");
            writeln!(stdout, "Contact deleted successfully")?;
            Ok(())
        }

        Commands::Shell => run_shell(&mut manager, io::stdin().lock(), stdout),
    }
}
