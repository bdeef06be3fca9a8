//! Travel itinerary viewer: a terminal UI for browsing a trip day by day,
//! a reference panel, a session-only expense ledger, and a read-only CLI over
//! the same dataset.

pub mod cli;
pub mod io;
pub mod model;
pub mod ops;
pub mod tui;
pub mod util;
