use std::time::Duration;

use clap::Parser;
use tokenkit_types::ContractKind;

use crate::{
    deploy::{TokenConstructorArgs, DEFAULT_CONFIRMATION_TIMEOUT},
    messages::{
        MSG_CONFIRMATION_TIMEOUT_HELP, MSG_INITIAL_SUPPLY_HELP, MSG_TOKEN_NAME_HELP,
        MSG_TOKEN_SYMBOL_HELP,
    },
    utils::amounts::{parse_amount, AmountError},
};

#[derive(Debug, Parser)]
pub struct DeployArgs {
    #[clap(long, default_value = "Test Token", help = MSG_TOKEN_NAME_HELP)]
    pub name: String,
    #[clap(long, default_value = "TTest", help = MSG_TOKEN_SYMBOL_HELP)]
    pub symbol: String,
    #[clap(long, default_value = "100", help = MSG_INITIAL_SUPPLY_HELP)]
    pub initial_supply: String,
    #[clap(long = "timeout", default_value_t = DEFAULT_CONFIRMATION_TIMEOUT.as_secs(), help = MSG_CONFIRMATION_TIMEOUT_HELP)]
    pub timeout_secs: u64,
}

#[derive(Debug)]
pub struct DeployArgsFinal {
    pub constructor_args: TokenConstructorArgs,
    pub timeout: Duration,
}

impl DeployArgs {
    /// Scales the initial supply by the decimals of `kind`.
    pub fn into_final(self, kind: ContractKind) -> Result<DeployArgsFinal, AmountError> {
        let initial_supply = parse_amount(&self.initial_supply, kind.decimals())?;
        Ok(DeployArgsFinal {
            constructor_args: TokenConstructorArgs {
                name: self.name,
                symbol: self.symbol,
                initial_supply,
            },
            timeout: Duration::from_secs(self.timeout_secs),
        })
    }
}
