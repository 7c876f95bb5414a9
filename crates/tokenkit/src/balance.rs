use tokenkit_config::{AddressRegistry, RegistryError};
use tokenkit_types::ContractKind;

use crate::{
    clients::{parse_address, ClientError, TokenReader},
    utils::amounts::format_amount,
};

#[derive(Debug, thiserror::Error)]
pub enum BalanceError {
    #[error("Failed to read the {kind} registry")]
    Registry {
        kind: ContractKind,
        #[source]
        source: RegistryError,
    },
    #[error("No {kind} deployment found in {path}; run `deploy` first")]
    NoDeploymentFound { kind: ContractKind, path: String },
    #[error(transparent)]
    InvalidAddress(ClientError),
    #[error("Failed to query the balance of {account} on {token}")]
    Network {
        token: String,
        account: String,
        #[source]
        source: ClientError,
    },
}

/// Returns the balance of `account` on the registered `kind` contract as a
/// decimal string.
///
/// The contract is the first address ever recorded for `kind`. An empty
/// registry is reported before any network access.
pub async fn query_balance<R>(
    reader: &R,
    registry: &AddressRegistry,
    kind: ContractKind,
    account: &str,
) -> Result<String, BalanceError>
where
    R: TokenReader + ?Sized,
{
    let path = kind.registry_path();
    let addresses = registry
        .load(path)
        .map_err(|source| BalanceError::Registry { kind, source })?;
    let token = addresses
        .first()
        .ok_or_else(|| BalanceError::NoDeploymentFound {
            kind,
            path: path.to_owned(),
        })?;

    let token_address = parse_address(token).map_err(BalanceError::InvalidAddress)?;
    let account_address = parse_address(account).map_err(BalanceError::InvalidAddress)?;

    let raw = reader
        .balance_of(token_address, account_address)
        .await
        .map_err(|source| BalanceError::Network {
            token: token.clone(),
            account: account.trim().to_owned(),
            source,
        })?;
    Ok(format_amount(raw, kind.decimals()))
}
