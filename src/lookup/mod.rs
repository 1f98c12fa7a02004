//! Providers of verse text. The core never fetches text itself; it asks a
//! Lookup for each verse as it walks a reference.

use csv::{Position, StringRecord};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

use crate::language::{LoadingError, LookupFailure};

/// Supplies the text of a verse given its canonical book name, chapter, and
/// verse. Implementations may block and may be asked for the same verse
/// more than once; any caching is theirs to do.
pub trait Lookup {
    fn get_text(&self, book: &str, chapter: u16, verse: u16) -> Result<String, LookupFailure>;
}

/// Returns a bracketed coordinate in place of text, for dry runs.
#[derive(Debug, Default)]
pub struct Placeholder;

impl Lookup for Placeholder {
    fn get_text(&self, book: &str, chapter: u16, verse: u16) -> Result<String, LookupFailure> {
        Ok(format!("[{} {}:{}]", book, chapter, verse))
    }
}

/// One line of a tab separated text table.
#[derive(Debug, Deserialize)]
struct Row {
    book: String,
    chapter: u16,
    verse: u16,
    text: String,
}

/// Describe a table reading error by the line it occurred on.
fn describe(error: &csv::Error) -> String {
    match (error.kind(), error.position()) {
        (csv::ErrorKind::Deserialize { err, .. }, Some(position)) => {
            format!("line {}: {}", position.line(), err)
        }
        (_, Some(position)) => format!("line {}: {}", position.line(), error),
        (_, None) => error.to_string(),
    }
}

/// Verse text held in memory.
#[derive(Debug, Default)]
pub struct Table {
    verses: HashMap<(String, u16, u16), String>,
}

impl Table {
    pub fn new() -> Table {
        Table::default()
    }

    pub fn insert(&mut self, book: &str, chapter: u16, verse: u16, text: &str) {
        self.verses
            .insert((book.to_string(), chapter, verse), text.to_string());
    }

    pub fn len(&self) -> usize {
        self.verses
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.verses
            .is_empty()
    }

    /// Read lines of the form `book<TAB>chapter<TAB>verse<TAB>text`. Blank
    /// lines and lines starting with '#' are skipped, and any tabs after the
    /// third belong to the text. On failure the message names the offending
    /// line.
    pub fn from_tsv(content: &str) -> Result<Table, String> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .comment(Some(b'#'))
            .quoting(false)
            .flexible(true)
            .from_reader(content.as_bytes());

        let mut table = Table::new();

        for result in reader.records() {
            let record = result.map_err(|error| describe(&error))?;
            if record.len() < 4 {
                return Err(format!(
                    "line {}: expected four tab separated fields",
                    record
                        .position()
                        .map(Position::line)
                        .unwrap_or(0)
                ));
            }

            let text = record
                .iter()
                .skip(3)
                .collect::<Vec<_>>()
                .join("\t");
            let mut fields = StringRecord::from(vec![
                record[0].trim(),
                record[1].trim(),
                record[2].trim(),
                text.as_str(),
            ]);
            fields.set_position(
                record
                    .position()
                    .cloned(),
            );

            let row: Row = fields
                .deserialize(None)
                .map_err(|error| describe(&error))?;
            table.insert(&row.book, row.chapter, row.verse, &row.text);
        }

        Ok(table)
    }

    /// Read a tab separated text file from disk.
    pub fn load(filename: &Path) -> Result<Table, LoadingError<'_>> {
        let content = match std::fs::read_to_string(filename) {
            Ok(content) => content,
            Err(error) => {
                debug!(?error);
                return match error.kind() {
                    std::io::ErrorKind::NotFound => Err(LoadingError {
                        problem: "File not found".to_string(),
                        details: String::new(),
                        filename,
                    }),
                    _ => Err(LoadingError {
                        problem: "Failed reading".to_string(),
                        details: error
                            .kind()
                            .to_string(),
                        filename,
                    }),
                };
            }
        };

        match Table::from_tsv(&content) {
            Ok(table) => {
                debug!("Loaded {} verses from {}", table.len(), filename.display());
                Ok(table)
            }
            Err(details) => Err(LoadingError {
                problem: "Malformed text table".to_string(),
                details,
                filename,
            }),
        }
    }
}

impl Lookup for Table {
    fn get_text(&self, book: &str, chapter: u16, verse: u16) -> Result<String, LookupFailure> {
        match self
            .verses
            .get(&(book.to_string(), chapter, verse))
        {
            Some(text) => Ok(text.clone()),
            None => Err(LookupFailure {
                book: book.to_string(),
                chapter,
                verse,
                problem: "verse not present in table".to_string(),
            }),
        }
    }
}

/// Lookup providers registered by name, so one can be chosen at run time.
#[derive(Default)]
pub struct Lookups {
    providers: Vec<(String, Box<dyn Lookup>)>,
}

impl Lookups {
    pub fn new() -> Lookups {
        Lookups::default()
    }

    /// Add a provider. A later registration under the same name replaces
    /// the earlier one.
    pub fn register(&mut self, name: &str, provider: Box<dyn Lookup>) {
        self.providers
            .retain(|(existing, _)| existing != name);
        self.providers
            .push((name.to_string(), provider));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Lookup> {
        self.providers
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, provider)| provider.as_ref())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.providers
            .iter()
            .map(|(name, _)| name.as_str())
    }
}
