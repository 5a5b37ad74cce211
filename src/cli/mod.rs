pub mod command;
pub mod render;
mod run;
pub mod shell;

pub use run::run_app;
