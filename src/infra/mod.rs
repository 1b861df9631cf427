pub mod config;
pub mod database;
pub mod error;
pub mod logger;
pub mod state;

pub use error::Error;
