use super::DataStore;
use crate::config::ShelfConfig;
use crate::error::Result;
use crate::model::Book;
use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CSV_HEADER: &str = "ID,Title,Author,Year";

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

pub struct FileStore {
    data_file: PathBuf,
    export_file: PathBuf,
}

impl FileStore {
    pub fn new(data_file: impl Into<PathBuf>, export_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
            export_file: export_file.into(),
        }
    }

    pub fn from_config(config: &ShelfConfig) -> Self {
        Self::new(&config.data_file, &config.export_file)
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    pub fn export_file(&self) -> &Path {
        &self.export_file
    }
}

impl DataStore for FileStore {
    fn load_books(&self) -> Result<Vec<Book>> {
        load_json(&self.data_file)
    }

    fn save_books(&mut self, books: &[Book]) -> Result<()> {
        save_json(books, &self.data_file)
    }

    fn export_books(&mut self, books: &[Book]) -> Result<PathBuf> {
        save_csv(books, &self.export_file)?;
        Ok(self.export_file.clone())
    }
}

/// Overwrites `path` with an indented JSON array of `books`.
pub fn save_json(books: &[Book], path: &Path) -> Result<()> {
    let content = render_json(books)?;
    fs::write(path, content)?;
    debug!(path = %path.display(), count = books.len(), "snapshot saved");
    Ok(())
}

pub fn render_json(books: &[Book]) -> Result<String> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, SnapshotFormatter::new());
    books.serialize(&mut ser)?;
    let content =
        String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(content)
}

/// Reads the snapshot at `path`.
///
/// A missing file, or one that does not hold a JSON array of books, means a
/// fresh catalog. Any other read failure is returned.
pub fn load_json(path: &Path) -> Result<Vec<Book>> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no snapshot yet");
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(&bytes);

    match serde_json::from_slice::<Vec<Book>>(bytes) {
        Ok(books) => {
            debug!(path = %path.display(), count = books.len(), "snapshot loaded");
            Ok(books)
        }
        Err(e) => {
            debug!(path = %path.display(), error = %e, "ignoring unreadable snapshot");
            Ok(Vec::new())
        }
    }
}

/// Writes the CSV export. Fields are joined with commas and never quoted, so
/// a title or author containing a comma shifts the columns of its row.
pub fn save_csv(books: &[Book], path: &Path) -> Result<()> {
    fs::write(path, render_csv(books))?;
    debug!(path = %path.display(), count = books.len(), "csv exported");
    Ok(())
}

pub fn render_csv(books: &[Book]) -> String {
    let mut out = String::with_capacity(CSV_HEADER.len() + 1 + books.len() * 32);
    out.push_str(CSV_HEADER);
    out.push('\n');
    for book in books {
        out.push_str(&format!(
            "{},{},{},{}\n",
            book.id, book.title, book.author, book.year
        ));
    }
    out
}

/// Pretty printer that keeps Basic Latin and Cyrillic literal and escapes the
/// rest, including the HTML-sensitive ASCII characters.
struct SnapshotFormatter {
    pretty: PrettyFormatter<'static>,
}

impl SnapshotFormatter {
    fn new() -> Self {
        Self {
            pretty: PrettyFormatter::new(),
        }
    }
}

fn is_literal(ch: char) -> bool {
    match ch {
        '<' | '>' | '&' | '\'' | '+' | '`' => false,
        '\u{0000}'..='\u{007F}' => true,
        '\u{0400}'..='\u{04FF}' => true,
        _ => false,
    }
}

impl Formatter for SnapshotFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        let mut start = 0;
        for (i, ch) in fragment.char_indices() {
            if is_literal(ch) {
                continue;
            }
            writer.write_all(fragment[start..i].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{:04X}", unit)?;
            }
            start = i + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }

    fn begin_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.pretty.begin_array(writer)
    }

    fn end_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.pretty.end_array(writer)
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.pretty.begin_array_value(writer, first)
    }

    fn end_array_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.pretty.end_array_value(writer)
    }

    fn begin_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.pretty.begin_object(writer)
    }

    fn end_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.pretty.end_object(writer)
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.pretty.begin_object_key(writer, first)
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.pretty.begin_object_value(writer)
    }

    fn end_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.pretty.end_object_value(writer)
    }
}
