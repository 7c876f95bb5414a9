pub mod addresses;
pub mod args;
pub mod balance;
pub mod deploy;
pub mod wallet;
