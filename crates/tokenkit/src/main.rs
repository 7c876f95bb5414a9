use anyhow::Context;
use clap::{command, Parser, Subcommand};
use tokenkit_common::{
    config::{init_global_config, GlobalConfig, DEFAULT_NETWORK},
    error::log_error,
    logger,
};
use tokenkit_config::load_dotenv;
use xshell::Shell;

use crate::{
    commands::{
        args::{AddressesArgs, BalanceArgs, DeployArgs},
        wallet::WalletCommands,
    },
    messages::{MSG_LOADING_DOTENV_ERR, MSG_NETWORK_HELP, MSG_VERBOSE_HELP},
};

mod abi;
mod balance;
mod clients;
mod commands;
mod deploy;
mod messages;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about)]
struct TokenKit {
    #[command(subcommand)]
    command: TokenKitSubcommands,
    #[clap(flatten)]
    global: TokenKitGlobalArgs,
}

#[derive(Subcommand, Debug)]
pub enum TokenKitSubcommands {
    /// Deploy the token contract and record its address
    Deploy(DeployArgs),
    /// Query an account balance on the recorded token contract
    Balance(BalanceArgs),
    /// List recorded contract addresses
    Addresses(AddressesArgs),
    /// Wallet related commands
    #[command(subcommand)]
    Wallet(WalletCommands),
}

#[derive(Parser, Debug)]
#[clap(next_help_heading = "Global options")]
struct TokenKitGlobalArgs {
    #[clap(short, long, global = true, help = MSG_VERBOSE_HELP)]
    verbose: bool,
    #[clap(long, global = true, default_value = DEFAULT_NETWORK, help = MSG_NETWORK_HELP)]
    network: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    human_panic::setup_panic!();

    logger::new_empty_line();
    logger::intro();

    let shell = Shell::new()?;
    let args = TokenKit::parse();

    init_global_config(GlobalConfig {
        verbose: args.global.verbose,
        network: args.global.network.clone(),
    });

    match run_subcommand(args, &shell).await {
        Ok(_) => {}
        Err(error) => {
            log_error(error);
            std::process::exit(1);
        }
    }
    Ok(())
}

async fn run_subcommand(args: TokenKit, shell: &Shell) -> anyhow::Result<()> {
    load_dotenv(&shell.current_dir()).context(MSG_LOADING_DOTENV_ERR)?;

    match args.command {
        TokenKitSubcommands::Deploy(args) => commands::deploy::run(shell, args).await?,
        TokenKitSubcommands::Balance(args) => commands::balance::run(shell, args).await?,
        TokenKitSubcommands::Addresses(args) => commands::addresses::run(shell, args)?,
        TokenKitSubcommands::Wallet(args) => commands::wallet::run(shell, args)?,
    }
    Ok(())
}
