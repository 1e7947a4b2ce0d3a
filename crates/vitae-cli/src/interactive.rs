//! Interactive prompt for the resume folder.

use crate::error::{CliError, Result};
use crate::output::Formatter;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

/// Ask for a folder until an existing directory is entered.
///
/// Ctrl-C or Ctrl-D aborts with [`CliError::InvalidInput`].
pub fn prompt_for_folder(formatter: &Formatter) -> Result<PathBuf> {
    let mut editor = DefaultEditor::new()?;

    let history_path = get_history_path().ok();
    if let Some(path) = &history_path {
        let _ = editor.load_history(path);
    }

    let folder = loop {
        match editor.readline("Enter the path to the folder containing resumes: ") {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                editor.add_history_entry(line.trim()).ok();

                match resolve_folder(&line) {
                    Ok(folder) => break folder,
                    Err(e) => eprintln!("{}", formatter.error(&e.to_string())),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                return Err(CliError::InvalidInput("No folder given".to_string()));
            }
            Err(err) => return Err(err.into()),
        }
    };

    if let Some(path) = &history_path {
        editor.save_history(path).ok();
    }
    Ok(folder)
}

/// Turn a typed or pasted path into an existing directory.
///
/// Surrounding whitespace and one pair of matching quotes are removed.
pub fn resolve_folder(input: &str) -> Result<PathBuf> {
    let trimmed = input.trim();
    let unquoted = ['"', '\'']
        .iter()
        .find_map(|q| {
            trimmed
                .strip_prefix(*q)
                .and_then(|rest| rest.strip_suffix(*q))
        })
        .unwrap_or(trimmed);

    let folder = PathBuf::from(unquoted);
    if folder.is_dir() {
        Ok(folder)
    } else {
        Err(CliError::InvalidInput(format!(
            "Folder does not exist: {}",
            folder.display()
        )))
    }
}

fn get_history_path() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
    let vitae_dir = home.join(".vitae");
    std::fs::create_dir_all(&vitae_dir)?;
    Ok(vitae_dir.join("history.txt"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_existing_folder() {
        let dir = tempfile::tempdir().unwrap();
        let input = format!("  {}  \n", dir.path().display());
        assert_eq!(resolve_folder(&input).unwrap(), dir.path());
    }

    #[test]
    fn test_resolve_quoted_folder() {
        let dir = tempfile::tempdir().unwrap();
        let input = format!("\"{}\"", dir.path().display());
        assert_eq!(resolve_folder(&input).unwrap(), dir.path());
    }

    #[test]
    fn test_resolve_missing_folder() {
        let result = resolve_folder("/nonexistent/vitae/resumes");
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_resolve_file_is_not_a_folder() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let result = resolve_folder(&file.path().display().to_string());
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }
}
