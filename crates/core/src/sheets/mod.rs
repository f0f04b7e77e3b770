//! Read-only client for the Google Sheets v4 REST API.
//!
//! The exporter only ever reads: worksheet metadata once at startup
//! (the authentication handshake) and then whole-sheet value grids.

mod client;
mod error;
mod traits;
mod types;

pub use client::SheetsClient;
pub use error::SheetsError;
pub use traits::SheetReader;
pub use types::{records_from_grid, Record, SpreadsheetInfo, WorksheetProps};
