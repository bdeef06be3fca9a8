pub mod config;
pub mod day;
pub mod expense;
pub mod item;
pub mod reference;
pub mod trip;

pub use config::*;
pub use day::*;
pub use expense::*;
pub use item::*;
pub use reference::*;
pub use trip::*;
