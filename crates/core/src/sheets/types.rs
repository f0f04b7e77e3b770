use std::collections::HashMap;

/// A single worksheet row, keyed by header column name.
///
/// Absent columns read as the empty string, matching how a sparse
/// spreadsheet row behaves: a cell the author never touched and a cell
/// explicitly cleared are indistinguishable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    columns: HashMap<String, String>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mainly for tests and fixtures.
    pub fn with(mut self, column: &str, value: &str) -> Self {
        self.columns.insert(column.to_string(), value.to_string());
        self
    }

    pub fn insert(&mut self, column: String, value: String) {
        self.columns.insert(column, value);
    }

    /// Returns the cell value for `column`, or "" when absent.
    pub fn get(&self, column: &str) -> &str {
        self.columns.get(column).map(String::as_str).unwrap_or("")
    }
}

/// Properties of one worksheet inside a spreadsheet document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorksheetProps {
    /// Stable numeric id, independent of title and position.
    pub sheet_id: u64,
    pub title: String,
    pub index: u32,
}

/// Metadata loaded during the handshake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpreadsheetInfo {
    pub title: String,
    pub worksheets: Vec<WorksheetProps>,
}

impl SpreadsheetInfo {
    /// Resolves a numeric worksheet id to its title.
    pub fn title_of(&self, sheet_id: u64) -> Option<&str> {
        self.worksheets
            .iter()
            .find(|w| w.sheet_id == sheet_id)
            .map(|w| w.title.as_str())
    }
}

/// Converts a raw value grid into column-keyed records.
///
/// The first row is the header; every following row becomes one
/// [`Record`], in grid order. Rows shorter than the header (the API
/// trims trailing empty cells) leave the missing columns unset, and
/// cells beyond the header width are dropped.
pub fn records_from_grid(values: Vec<Vec<String>>) -> Vec<Record> {
    let mut rows = values.into_iter();
    let Some(header) = rows.next() else {
        return Vec::new();
    };

    rows.map(|row| {
        let mut record = Record::new();
        for (column, value) in header.iter().zip(row) {
            if !column.is_empty() {
                record.insert(column.clone(), value);
            }
        }
        record
    })
    .collect()
}
