use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Make sure the grid export may land at `path`.
///
/// A directory is never a valid target. An existing file is replaced with
/// `force`, otherwise the user is asked on `input`.
pub(crate) fn ensure_export_target(path: &Path, grid_label: &str, force: bool, input: impl BufRead) -> AppResult<()> {
    if path.is_dir() {
        return Err(AppError::Export(format!(
            "'{}' is a directory, expected a file for the {grid_label} grid",
            path.display()
        )));
    }
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!(
        "'{}' already holds an export.",
        path.display()
    ));
    if confirm(&format!("Replace it with the {grid_label} grid? [y/N]: "), input)? {
        info(format!("Replacing '{}'.", path.display()));
        Ok(())
    } else {
        Err(AppError::Export(format!(
            "{grid_label} grid not exported, '{}' left unchanged",
            path.display()
        )))
    }
}

fn confirm(prompt: &str, mut input: impl BufRead) -> AppResult<bool> {
    print!("{prompt}");
    io::stdout().flush().ok();

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}
