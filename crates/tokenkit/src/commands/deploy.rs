use anyhow::Context;
use tokenkit_common::{config::global_config, logger, spinner::Spinner};
use tokenkit_config::{AddressRegistry, ContractArtifact, NetworkConfig};
use tokenkit_types::ContractKind;
use xshell::Shell;

use super::args::DeployArgs;
use crate::{
    clients::{http::EthersDeployClient, DeployClient},
    deploy::{deploy, DeployRequest},
    messages::{
        msg_confirmation_timeout, msg_deployed, msg_deployer, msg_explorer_link,
        msg_node_timeout, msg_using_network, MSG_CONNECTING_ERR, MSG_DEPLOYING_SPINNER,
        MSG_DEPLOYMENT_FAILED_ERR, MSG_DEPLOYMENT_SUMMARY, MSG_INVALID_INITIAL_SUPPLY_ERR,
        MSG_LOADING_ARTIFACT_ERR, MSG_RESOLVING_NETWORK_ERR,
    },
};

pub async fn run(shell: &Shell, args: DeployArgs) -> anyhow::Result<()> {
    let kind = ContractKind::BasicToken;
    let network = &global_config().network;

    let config = NetworkConfig::for_signing(network).context(MSG_RESOLVING_NETWORK_ERR)?;
    let args = args
        .into_final(kind)
        .context(MSG_INVALID_INITIAL_SUPPLY_ERR)?;
    let root = shell.current_dir();
    let artifact = ContractArtifact::load(&root, kind).context(MSG_LOADING_ARTIFACT_ERR)?;

    logger::info(msg_using_network(network, &config.rpc_url));
    let client = tokio::time::timeout(args.timeout, EthersDeployClient::connect(&config))
        .await
        .unwrap_or_else(|_| Err(anyhow::anyhow!(msg_node_timeout(args.timeout))))
        .context(MSG_CONNECTING_ERR)?;
    logger::debug(msg_deployer(format!("{:?}", client.deployer())));
    logger::debug(msg_confirmation_timeout(args.timeout));

    let registry = AddressRegistry::new(root);
    let request = DeployRequest {
        kind,
        artifact,
        constructor_args: args.constructor_args.into_tokens(),
    };

    let spinner = Spinner::new(MSG_DEPLOYING_SPINNER);
    let result = match deploy(&client, &registry, request, args.timeout).await {
        Ok(result) => {
            spinner.finish();
            result
        }
        Err(err) => {
            spinner.fail();
            return Err(err).context(MSG_DEPLOYMENT_FAILED_ERR);
        }
    };

    logger::note(MSG_DEPLOYMENT_SUMMARY, logger::object_to_string(&result));
    if let Some(url) = result.explorer_url() {
        logger::info(msg_explorer_link(&url));
    }
    logger::success(msg_deployed(kind, &result.address));
    Ok(())
}
