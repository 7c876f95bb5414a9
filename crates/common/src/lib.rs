pub use term::{error, logger, spinner};

pub mod config;
pub mod ethereum;
pub mod files;
pub mod term;
pub mod wallets;
