use anyhow::Context;
use tokenkit_common::{config::global_config, logger, spinner::Spinner};
use tokenkit_config::{AddressRegistry, NetworkConfig};
use tokenkit_types::ContractKind;
use xshell::Shell;

use super::args::BalanceArgs;
use crate::{
    balance::query_balance,
    clients::http::EthersTokenReader,
    messages::{
        msg_balance, msg_using_network, MSG_BALANCE_QUERY_FAILED_ERR,
        MSG_QUERYING_BALANCE_SPINNER, MSG_RESOLVING_NETWORK_ERR,
    },
};

pub async fn run(shell: &Shell, args: BalanceArgs) -> anyhow::Result<()> {
    let network = &global_config().network;
    let config = NetworkConfig::read_only(network).context(MSG_RESOLVING_NETWORK_ERR)?;
    logger::info(msg_using_network(network, &config.rpc_url));

    let reader = EthersTokenReader::new(&config);
    let registry = AddressRegistry::new(shell.current_dir());

    let spinner = Spinner::new(MSG_QUERYING_BALANCE_SPINNER);
    let balance =
        match query_balance(&reader, &registry, ContractKind::BasicToken, &args.address).await {
            Ok(balance) => {
                spinner.finish();
                balance
            }
            Err(err) => {
                spinner.fail();
                return Err(err).context(MSG_BALANCE_QUERY_FAILED_ERR);
            }
        };

    logger::outro(msg_balance(args.address.trim(), &balance));
    Ok(())
}
