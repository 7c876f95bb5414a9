use std::path::PathBuf;

use clap::Parser;
use tokenkit_config::WALLET_FILE;

use crate::messages::{MSG_WALLET_FORCE_HELP, MSG_WALLET_PATH_HELP};

#[derive(Debug, Parser)]
pub struct CreateWalletArgs {
    #[clap(long, default_value = WALLET_FILE, help = MSG_WALLET_PATH_HELP)]
    pub path: PathBuf,
    #[clap(long, help = MSG_WALLET_FORCE_HELP)]
    pub force: bool,
}
