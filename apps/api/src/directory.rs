//! Journalist Directory — the immutable roster the pitch workflow draws from.
//!
//! Loaded wholesale from a CSV file at startup, held as `Arc<JournalistDirectory>`
//! in app state, and never mutated afterwards. Sessions share it read-only.

use std::path::Path;

use serde::Serialize;
use thiserror::Error;
use tracing::info;

const REQUIRED_COLUMNS: [&str; 4] = [
    "name",
    "beat",
    "recent_article_title",
    "recent_article_excerpt",
];

/// One row of the roster. `name` is the unique lookup key.
#[derive(Debug, Clone, Serialize)]
pub struct JournalistProfile {
    pub name: String,
    pub beat: String,
    pub recent_article_title: String,
    pub recent_article_excerpt: String,
}

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("failed to read roster file: {0}")]
    Io(#[from] std::io::Error),

    #[error("roster file has no header row")]
    EmptyFile,

    #[error("roster header is missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("roster row {row}: expected {expected} fields, found {found}")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("roster file ends inside a quoted field")]
    UnterminatedQuote,
}

/// The loaded roster. Column order in the source file is free; columns are
/// located by header name and extra columns are ignored.
#[derive(Debug)]
pub struct JournalistDirectory {
    profiles: Vec<JournalistProfile>,
}

impl JournalistDirectory {
    /// Reads and parses the roster CSV. Called once at startup.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DirectoryError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let directory = Self::from_csv(&raw)?;
        info!(
            "Loaded {} journalist profiles from {}",
            directory.profiles.len(),
            path.as_ref().display()
        );
        Ok(directory)
    }

    pub fn from_csv(input: &str) -> Result<Self, DirectoryError> {
        let mut records = parse_records(input)?.into_iter();

        let header = records.next().ok_or(DirectoryError::EmptyFile)?;
        let mut columns = [0usize; REQUIRED_COLUMNS.len()];
        for (slot, required) in columns.iter_mut().zip(REQUIRED_COLUMNS) {
            *slot = header
                .iter()
                .position(|h| h.trim() == required)
                .ok_or(DirectoryError::MissingColumn(required))?;
        }

        let mut profiles = Vec::new();
        for (index, record) in records.enumerate() {
            if record.len() != header.len() {
                return Err(DirectoryError::RowWidth {
                    // +2: 1-based, plus the header row
                    row: index + 2,
                    expected: header.len(),
                    found: record.len(),
                });
            }
            profiles.push(JournalistProfile {
                name: record[columns[0]].clone(),
                beat: record[columns[1]].clone(),
                recent_article_title: record[columns[2]].clone(),
                recent_article_excerpt: record[columns[3]].clone(),
            });
        }

        Ok(Self { profiles })
    }

    pub fn profiles(&self) -> &[JournalistProfile] {
        &self.profiles
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Exact-name lookup. Callers map `None` to the application-level
    /// not-found error.
    pub fn lookup(&self, name: &str) -> Option<&JournalistProfile> {
        self.profiles.iter().find(|p| p.name == name)
    }
}

/// Splits CSV text into records of fields. Quoted fields may contain commas,
/// newlines, and doubled quotes. Blank lines between records are skipped.
fn parse_records(input: &str) -> Result<Vec<Vec<String>>, DirectoryError> {
    let mut records = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' => {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                }
                _ => field.push(c),
            }
            continue;
        }

        match c {
            '"' => in_quotes = true,
            ',' => record.push(std::mem::take(&mut field)),
            '\r' => {
                // handled at the following '\n'
            }
            '\n' => {
                record.push(std::mem::take(&mut field));
                if !(record.len() == 1 && record[0].is_empty()) {
                    records.push(std::mem::take(&mut record));
                }
                record.clear(); // discard skipped blank line
            }
            _ => field.push(c),
        }
    }

    if in_quotes {
        return Err(DirectoryError::UnterminatedQuote);
    }

    // final record without a trailing newline
    if !field.is_empty() || !record.is_empty() {
        record.push(field);
        records.push(record);
    }

    Ok(records)
}
