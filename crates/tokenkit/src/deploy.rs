use std::time::Duration;

use ethers::{
    abi::Token,
    types::{H256, U256},
    utils::to_checksum,
};
use serde::Serialize;
use tokenkit_config::{explorer_tx_url, AddressRegistry, ContractArtifact, RegistryError};
use tokenkit_types::{ContractKind, WriteMode};

use crate::clients::{encode_deployment, ClientError, DeployClient};

/// Upper bound on each network step of a deployment.
pub const DEFAULT_CONFIRMATION_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, thiserror::Error)]
pub enum DeployError {
    #[error("Failed to submit {kind} deployment")]
    Submission {
        kind: ContractKind,
        #[source]
        source: ClientError,
    },
    #[error("Failed to confirm {kind} deployment transaction {tx_hash:?}")]
    Confirmation {
        kind: ContractKind,
        tx_hash: H256,
        #[source]
        source: ClientError,
    },
    #[error("{kind} deployment transaction {tx_hash:?} was not confirmed within {timeout:?}")]
    ConfirmationTimeout {
        kind: ContractKind,
        tx_hash: H256,
        timeout: Duration,
    },
    #[error("{kind} was deployed at {address}, but recording the address failed")]
    Registry {
        kind: ContractKind,
        address: String,
        #[source]
        source: RegistryError,
    },
}

/// Constructor arguments of the token contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenConstructorArgs {
    pub name: String,
    pub symbol: String,
    pub initial_supply: U256,
}

impl TokenConstructorArgs {
    pub fn into_tokens(self) -> Vec<Token> {
        vec![
            Token::String(self.name),
            Token::String(self.symbol),
            Token::Uint(self.initial_supply),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct DeployRequest {
    pub kind: ContractKind,
    pub artifact: ContractArtifact,
    pub constructor_args: Vec<Token>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeploymentResult {
    pub contract_kind: ContractKind,
    pub address: String,
    pub transaction_hash: String,
    pub block_number: Option<u64>,
    pub confirmed: bool,
}

impl DeploymentResult {
    pub fn explorer_url(&self) -> Option<String> {
        explorer_tx_url(&self.transaction_hash)
    }
}

/// Deploys a contract and records its address once the deployment is
/// confirmed.
///
/// Nothing is written to the registry unless the transaction was included in
/// a block and produced a contract. Submission and the wait for inclusion are
/// each bounded by `timeout`.
pub async fn deploy<C>(
    client: &C,
    registry: &AddressRegistry,
    request: DeployRequest,
    timeout: Duration,
) -> Result<DeploymentResult, DeployError>
where
    C: DeployClient + ?Sized,
{
    let kind = request.kind;
    let init_code = encode_deployment(&request.artifact, &request.constructor_args)
        .map_err(|source| DeployError::Submission { kind, source })?;
    let tx_hash = tokio::time::timeout(timeout, client.submit_deployment(init_code))
        .await
        .unwrap_or(Err(ClientError::Timeout(timeout)))
        .map_err(|source| DeployError::Submission { kind, source })?;

    let receipt = tokio::time::timeout(timeout, client.wait_for_deployment(tx_hash))
        .await
        .map_err(|_| DeployError::ConfirmationTimeout {
            kind,
            tx_hash,
            timeout,
        })?
        .map_err(|source| DeployError::Confirmation {
            kind,
            tx_hash,
            source,
        })?;

    let address = to_checksum(&receipt.contract_address, None);
    registry
        .save(
            std::slice::from_ref(&address),
            kind.registry_path(),
            WriteMode::Append,
        )
        .map_err(|source| DeployError::Registry {
            kind,
            address: address.clone(),
            source,
        })?;

    Ok(DeploymentResult {
        contract_kind: kind,
        address,
        transaction_hash: format!("{:?}", receipt.transaction_hash),
        block_number: receipt.block_number,
        confirmed: true,
    })
}
