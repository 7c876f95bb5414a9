use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use ethers::{
    contract::ContractError,
    providers::{Http, Middleware, PendingTransaction, Provider},
    signers::Signer,
    types::{Address, Bytes, Eip1559TransactionRequest, H256, U256},
};
use tokenkit_common::ethereum::{
    create_ethers_client, create_provider, SigningClient, DEFAULT_POLL_INTERVAL,
};
use tokenkit_config::NetworkConfig;

use super::{ClientError, DeployClient, DeploymentReceipt, TokenReader};
use crate::abi::BasicTokenAbi;

/// Deploys contracts over JSON-RPC, signing with the configured credential.
pub struct EthersDeployClient {
    client: SigningClient,
}

impl EthersDeployClient {
    pub async fn connect(config: &NetworkConfig) -> anyhow::Result<Self> {
        let credential = config.require_credential()?;
        let client = create_ethers_client(credential.wallet()?, &config.rpc_url, config.chain_id)
            .await
            .with_context(|| format!("Failed to connect to network `{}`", config.network))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl DeployClient for EthersDeployClient {
    fn deployer(&self) -> Address {
        self.client.signer().address()
    }

    async fn submit_deployment(&self, init_code: Bytes) -> Result<H256, ClientError> {
        let tx = Eip1559TransactionRequest::new()
            .from(self.deployer())
            .data(init_code);
        let pending = self
            .client
            .send_transaction(tx, None)
            .await
            .map_err(|err| {
                let message = err.to_string();
                if message.contains("revert") {
                    ClientError::Reverted(message)
                } else {
                    ClientError::Rpc(message)
                }
            })?;
        Ok(*pending)
    }

    async fn wait_for_deployment(&self, tx_hash: H256) -> Result<DeploymentReceipt, ClientError> {
        let receipt = PendingTransaction::new(tx_hash, self.client.provider())
            .interval(DEFAULT_POLL_INTERVAL)
            .confirmations(1)
            .await
            .map_err(|err| ClientError::Rpc(err.to_string()))?
            .ok_or(ClientError::Dropped(tx_hash))?;
        DeploymentReceipt::from_receipt(receipt)
    }
}

/// Issues `eth_call`s against token contracts. Holds no signer.
pub struct EthersTokenReader {
    provider: Arc<Provider<Http>>,
}

impl EthersTokenReader {
    pub fn new(config: &NetworkConfig) -> Self {
        Self {
            provider: Arc::new(create_provider(&config.rpc_url)),
        }
    }
}

#[async_trait]
impl TokenReader for EthersTokenReader {
    async fn balance_of(&self, token: Address, account: Address) -> Result<U256, ClientError> {
        BasicTokenAbi::new(token, self.provider.clone())
            .balance_of(account)
            .call()
            .await
            .map_err(contract_error)
    }
}

fn contract_error<M: Middleware>(err: ContractError<M>) -> ClientError {
    if err.is_revert() {
        ClientError::Reverted(err.to_string())
    } else {
        ClientError::Rpc(err.to_string())
    }
}
