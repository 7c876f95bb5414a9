use std::{fmt::Display, path::Path, time::Duration};

/// Common messages
pub(super) const MSG_NETWORK_HELP: &str =
    "Network to use; its RPC endpoint is read from <NETWORK>_URL";
pub(super) const MSG_VERBOSE_HELP: &str = "Verbose mode";
pub(super) const MSG_CONTRACT_KIND_HELP: &str = "Contract kind";
pub(super) const MSG_LOADING_DOTENV_ERR: &str = "Failed to load the .env file";
pub(super) const MSG_RESOLVING_NETWORK_ERR: &str = "Failed to resolve network configuration";

/// Deploy related messages
pub(super) const MSG_TOKEN_NAME_HELP: &str = "Token name";
pub(super) const MSG_TOKEN_SYMBOL_HELP: &str = "Token symbol";
pub(super) const MSG_INITIAL_SUPPLY_HELP: &str =
    "Initial supply minted to the deployer, in whole tokens";
pub(super) const MSG_CONFIRMATION_TIMEOUT_HELP: &str =
    "Seconds to wait for the deployment to be included in a block";
pub(super) const MSG_LOADING_ARTIFACT_ERR: &str = "Failed to load the compiled contract";
pub(super) const MSG_INVALID_INITIAL_SUPPLY_ERR: &str = "Invalid initial supply";
pub(super) const MSG_CONNECTING_ERR: &str = "Failed to construct the network client";
pub(super) const MSG_DEPLOYING_SPINNER: &str = "Deploying contract...";
pub(super) const MSG_DEPLOYMENT_FAILED_ERR: &str = "Deployment failed";
pub(super) const MSG_DEPLOYMENT_SUMMARY: &str = "Deployment";

/// Balance related messages
pub(super) const MSG_ACCOUNT_ADDRESS_HELP: &str = "Account to query";
pub(super) const MSG_QUERYING_BALANCE_SPINNER: &str = "Querying balance...";
pub(super) const MSG_BALANCE_QUERY_FAILED_ERR: &str = "Balance query failed";

/// Addresses related messages
pub(super) const MSG_READING_REGISTRY_ERR: &str = "Failed to read the address registry";

/// Wallet related messages
pub(super) const MSG_WALLET_PATH_HELP: &str = "Where to write the wallet";
pub(super) const MSG_WALLET_FORCE_HELP: &str = "Overwrite an existing wallet file";
pub(super) const MSG_WALLET_SAVE_ERR: &str = "Failed to save the wallet";
pub(super) const MSG_WALLET_KEEP_SECRET: &str =
    "The wallet file holds a private key. Keep it out of version control.";

pub(super) fn msg_using_network(network: &str, rpc_url: impl Display) -> String {
    format!("Using network {network} at {rpc_url}")
}

pub(super) fn msg_deployer(address: impl Display) -> String {
    format!("Deployer: {address}")
}

pub(super) fn msg_confirmation_timeout(timeout: Duration) -> String {
    format!("Waiting up to {} secs for confirmation", timeout.as_secs())
}

pub(super) fn msg_node_timeout(timeout: Duration) -> String {
    format!("Node did not answer within {} secs", timeout.as_secs())
}

pub(super) fn msg_deployed(kind: impl Display, address: &str) -> String {
    format!("{kind} deployed to {address}")
}

pub(super) fn msg_explorer_link(url: &str) -> String {
    format!("Explorer: {url}")
}

pub(super) fn msg_balance(account: &str, balance: &str) -> String {
    format!("Balance of {account}: {balance}")
}

pub(super) fn msg_registry_empty(kind: impl Display, path: &Path) -> String {
    format!("No {kind} deployments recorded in {}", path.display())
}

pub(super) fn msg_registry_entries(kind: impl Display, count: usize) -> String {
    format!("{kind} deployments ({count})")
}

pub(super) fn msg_wallet_exists_err(path: &Path) -> String {
    format!(
        "{} already exists; pass --force to overwrite it",
        path.display()
    )
}

pub(super) fn msg_wallet_created(address: impl Display, path: &Path) -> String {
    format!("Created wallet {address} at {}", path.display())
}
