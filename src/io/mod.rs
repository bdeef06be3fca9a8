pub mod config_io;
pub mod opener;
pub mod trip_io;
