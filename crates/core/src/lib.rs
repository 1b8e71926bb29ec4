//! Domain logic for Giharad character sheets.
//!
//! Pure, I/O-free building blocks shared by the database and API crates:
//! the sheet schema with its defaults, the form reconciler that turns flat
//! form submissions into sheets, and the partial-patch writer.

pub mod coerce;
pub mod error;
pub mod form;
pub mod patch;
pub mod sheet;
pub mod types;
