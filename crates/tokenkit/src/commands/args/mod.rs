pub use self::{
    addresses::AddressesArgs, balance::BalanceArgs, deploy::DeployArgs, wallet::CreateWalletArgs,
};

mod addresses;
mod balance;
mod deploy;
mod wallet;
