pub mod check;
pub mod itinerary_ops;
pub mod ledger_ops;
pub mod search;
