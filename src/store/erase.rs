//! Erasure of a store's physical files

use colored::*;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use super::errors::StoreResult;
use super::fs_ops;

/// How erasure is confirmed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    /// Delete without asking
    Yes,
    /// Ask interactively first
    Prompt,
}

impl Confirmation {
    /// `"y"` (any case) confirms up front; anything else prompts
    pub fn from_flag(flag: &str) -> Self {
        if flag.trim().eq_ignore_ascii_case("y") {
            Confirmation::Yes
        } else {
            Confirmation::Prompt
        }
    }
}

/// What an erase call did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EraseOutcome {
    /// The backend has no path, or nothing exists there
    Missing,
    /// The path was deleted
    Erased(PathBuf),
    /// The prompt was answered with anything but `y`
    Aborted,
}

/// Erase `path` after confirmation, reporting progress on `output`.
///
/// A prompt reads one line from `input`; only `y`/`Y` deletes.
pub fn erase_path<R, W>(
    path: Option<&Path>,
    confirmation: Confirmation,
    input: &mut R,
    output: &mut W,
) -> StoreResult<EraseOutcome>
where
    R: BufRead,
    W: Write,
{
    let path = match path {
        Some(p) if p.exists() => p,
        _ => {
            writeln!(output, "Database does not exist.")?;
            return Ok(EraseOutcome::Missing);
        }
    };

    if confirmation == Confirmation::Prompt {
        write!(
            output,
            "{}\n{}: ",
            "Are you sure you want to erase the database [Y]/[n]?".yellow(),
            path.display()
        )?;
        output.flush()?;

        let mut answer = String::new();
        input.read_line(&mut answer)?;
        if !answer.trim().eq_ignore_ascii_case("y") {
            writeln!(output, "Aborted Erasure.")?;
            return Ok(EraseOutcome::Aborted);
        }
    }

    fs_ops::remove_path(path)?;
    tracing::info!(path = %path.display(), "erased store");
    writeln!(output, "Database erased: {}", path.display())?;
    Ok(EraseOutcome::Erased(path.to_path_buf()))
}

/// [`erase_path`] wired to stdin/stdout
pub fn erase_interactive(path: Option<&Path>, confirmation: Confirmation) -> StoreResult<EraseOutcome> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    erase_path(path, confirmation, &mut input, &mut output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn run(path: Option<&Path>, confirmation: Confirmation, answer: &str) -> (EraseOutcome, String) {
        let mut input = Cursor::new(answer.as_bytes().to_vec());
        let mut output = Vec::new();
        let outcome = erase_path(path, confirmation, &mut input, &mut output).unwrap();
        (outcome, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_confirmation_flag() {
        assert_eq!(Confirmation::from_flag("y"), Confirmation::Yes);
        assert_eq!(Confirmation::from_flag("Y"), Confirmation::Yes);
        assert_eq!(Confirmation::from_flag("n"), Confirmation::Prompt);
        assert_eq!(Confirmation::from_flag("yes"), Confirmation::Prompt);
    }

    #[test]
    fn test_erase_missing() {
        let temp_dir = TempDir::new().unwrap();
        let (outcome, text) = run(None, Confirmation::Yes, "");
        assert_eq!(outcome, EraseOutcome::Missing);
        assert!(text.contains("Database does not exist."));

        let missing = temp_dir.path().join("gone.json");
        let (outcome, _) = run(Some(&missing), Confirmation::Yes, "");
        assert_eq!(outcome, EraseOutcome::Missing);
    }

    #[test]
    fn test_erase_confirmed_up_front() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("app.json");
        fs::write(&file, "{}").unwrap();

        let (outcome, text) = run(Some(&file), Confirmation::Yes, "");
        assert_eq!(outcome, EraseOutcome::Erased(file.clone()));
        assert!(!file.exists());
        assert!(text.contains("Database erased:"));
        assert!(!text.contains("Are you sure"));
    }

    #[test]
    fn test_erase_prompt_answers() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("app.db");
        fs::write(&file, "").unwrap();

        let (outcome, text) = run(Some(&file), Confirmation::Prompt, "n\n");
        assert_eq!(outcome, EraseOutcome::Aborted);
        assert!(text.contains("Are you sure you want to erase the database"));
        assert!(text.contains("Aborted Erasure."));
        assert!(file.exists());

        let (outcome, _) = run(Some(&file), Confirmation::Prompt, "Y\n");
        assert_eq!(outcome, EraseOutcome::Erased(file.clone()));
        assert!(!file.exists());
    }

    #[test]
    fn test_erase_directory() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("myapp");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("color"), "blue").unwrap();

        let (outcome, _) = run(Some(&dir), Confirmation::Yes, "");
        assert_eq!(outcome, EraseOutcome::Erased(dir.clone()));
        assert!(!dir.exists());
    }
}
