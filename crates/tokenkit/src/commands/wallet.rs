use anyhow::Context;
use clap::Subcommand;
use tokenkit_common::{files::save_json_file, logger, wallets::Wallet};
use xshell::Shell;

use super::args::CreateWalletArgs;
use crate::messages::{
    msg_wallet_created, msg_wallet_exists_err, MSG_WALLET_KEEP_SECRET, MSG_WALLET_SAVE_ERR,
};

#[derive(Subcommand, Debug)]
pub enum WalletCommands {
    /// Generate a random wallet and save its key to a file
    Create(CreateWalletArgs),
}

pub(crate) fn run(shell: &Shell, args: WalletCommands) -> anyhow::Result<()> {
    match args {
        WalletCommands::Create(args) => create(shell, args),
    }
}

fn create(shell: &Shell, args: CreateWalletArgs) -> anyhow::Result<()> {
    let path = shell.current_dir().join(&args.path);
    if shell.path_exists(&path) && !args.force {
        anyhow::bail!(msg_wallet_exists_err(&path));
    }

    let wallet = Wallet::random(&mut rand::thread_rng());
    save_json_file(&path, &wallet).context(MSG_WALLET_SAVE_ERR)?;

    logger::warn(MSG_WALLET_KEEP_SECRET);
    logger::success(msg_wallet_created(format!("{:?}", wallet.address), &path));
    Ok(())
}
