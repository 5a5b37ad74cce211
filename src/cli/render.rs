use std::io::Write;

use crate::prelude::{AppError, View};

pub fn display_row(number: usize, name: &str, phone: &str) -> String {
    format!("{number:>3}. {name:<20} {phone:15}")
}

/// Writes the rows of `view`, followed by whichever list signal and error
/// message it carries.
pub fn write_view(out: &mut impl Write, view: &View) -> Result<(), AppError> {
    for (mut i, row) in view.rows.iter().enumerate() {
        i += 1;
        writeln!(out, "{}", display_row(i, &row.name, &row.phone).trim_end())?;
    }

    if let Some(message) = view.signal.message() {
        writeln!(out, "{}", message)?;
    }

    if let Some(error) = &view.error {
        writeln!(out, "Error: {}", error)?;
    }

    Ok(())
}
