//! Network capabilities consumed by the deploy and balance flows.
//!
//! The flows only see the [`DeployClient`] and [`TokenReader`] traits; the
//! ethers-backed implementations live in [`http`], in-process fakes in
//! [`mock`].

use std::{str::FromStr, time::Duration};

use async_trait::async_trait;
use ethers::{
    abi::Token,
    types::{Address, Bytes, TransactionReceipt, H256, U256},
};
use tokenkit_config::ContractArtifact;

pub mod http;
#[cfg(test)]
pub mod mock;

/// Errors reported by the network layer.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Problem on the node side (bad RPC call, network issues, rejected tx).
    #[error("JSON-RPC request failed: {0}")]
    Rpc(String),
    /// Execution reverted, e.g. a failing constructor.
    #[error("Execution reverted: {0}")]
    Reverted(String),
    /// The transaction disappeared from the mempool before inclusion.
    #[error("Transaction {0:?} was dropped before inclusion")]
    Dropped(H256),
    /// The receipt does not carry a contract address.
    #[error("Transaction {0:?} did not create a contract")]
    NotDeployed(H256),
    /// Constructor arguments do not match the contract ABI.
    #[error("Failed to encode constructor arguments: {0}")]
    Encoding(String),
    #[error("{value:?} is not a valid address")]
    InvalidAddress { value: String },
    #[error("Node did not answer within {0:?}")]
    Timeout(Duration),
}

/// Receipt data of a confirmed contract-creation transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct DeploymentReceipt {
    pub contract_address: Address,
    pub transaction_hash: H256,
    pub block_number: Option<u64>,
}

impl DeploymentReceipt {
    pub fn from_receipt(receipt: TransactionReceipt) -> Result<Self, ClientError> {
        let tx_hash = receipt.transaction_hash;
        if receipt.status == Some(0.into()) {
            return Err(ClientError::Reverted(format!(
                "contract creation {tx_hash:?} failed on-chain"
            )));
        }
        let contract_address = receipt
            .contract_address
            .ok_or(ClientError::NotDeployed(tx_hash))?;
        Ok(Self {
            contract_address,
            transaction_hash: tx_hash,
            block_number: receipt.block_number.map(|number| number.as_u64()),
        })
    }
}

/// Signing client able to create contracts.
#[async_trait]
pub trait DeployClient: Send + Sync {
    /// Account that signs and pays for the deployment.
    fn deployer(&self) -> Address;

    /// Signs and broadcasts a contract-creation transaction carrying
    /// `init_code`. Returns as soon as the node accepted it.
    async fn submit_deployment(&self, init_code: Bytes) -> Result<H256, ClientError>;

    /// Waits until `tx_hash` is included in a block. Polls without blocking
    /// the thread; callers are expected to bound the wait.
    async fn wait_for_deployment(&self, tx_hash: H256) -> Result<DeploymentReceipt, ClientError>;
}

/// Read-only access to a deployed token.
#[async_trait]
pub trait TokenReader: Send + Sync {
    async fn balance_of(&self, token: Address, account: Address) -> Result<U256, ClientError>;
}

/// Builds contract-creation calldata: bytecode followed by the ABI-encoded
/// constructor arguments.
pub fn encode_deployment(
    artifact: &ContractArtifact,
    constructor_args: &[Token],
) -> Result<Bytes, ClientError> {
    match artifact.abi.constructor() {
        Some(constructor) => constructor
            .encode_input(artifact.bytecode.to_vec(), constructor_args)
            .map(Bytes::from)
            .map_err(|err| ClientError::Encoding(err.to_string())),
        None if constructor_args.is_empty() => Ok(artifact.bytecode.clone()),
        None => Err(ClientError::Encoding(format!(
            "{} has no constructor but {} argument(s) were given",
            artifact.contract_name,
            constructor_args.len()
        ))),
    }
}

/// Parses a `0x`-prefixed 20-byte hex address.
pub fn parse_address(value: &str) -> Result<Address, ClientError> {
    let value = value.trim();
    let invalid = || ClientError::InvalidAddress {
        value: value.to_owned(),
    };
    if !value.starts_with("0x") || value.len() != 42 {
        return Err(invalid());
    }
    Address::from_str(value).map_err(|_| invalid())
}
