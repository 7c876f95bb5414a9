use clap::Parser;

use crate::messages::MSG_ACCOUNT_ADDRESS_HELP;

#[derive(Debug, Parser)]
pub struct BalanceArgs {
    #[clap(long, help = MSG_ACCOUNT_ADDRESS_HELP)]
    pub address: String,
}
