use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
};

use async_trait::async_trait;
use ethers::types::{Address, Bytes, H160, H256, U256};

use super::{ClientError, DeployClient, DeploymentReceipt, TokenReader};

/// What the mock network does with a deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployOutcome {
    /// Accepted and included in the next block.
    Confirm,
    /// Rejected at submission because the constructor reverts.
    RevertConstructor,
    /// Accepted, but the mined transaction failed.
    RevertOnChain,
    /// Accepted and never included.
    NeverConfirm,
    /// The node never answers the submission.
    NeverAccept,
}

/// Deploy client that records submitted init code instead of talking to a node.
#[derive(Debug)]
pub struct MockDeployClient {
    outcome: DeployOutcome,
    contract_address: Address,
    block_number: u64,
    submitted: Mutex<Vec<Bytes>>,
}

impl MockDeployClient {
    pub const DEPLOYER: Address = H160([0x11; 20]);
    pub const CONTRACT: Address = H160([0x22; 20]);

    pub fn new(outcome: DeployOutcome) -> Self {
        Self {
            outcome,
            contract_address: Self::CONTRACT,
            block_number: 1,
            submitted: Mutex::default(),
        }
    }

    pub fn with_contract_address(mut self, address: Address) -> Self {
        self.contract_address = address;
        self
    }

    /// Init code of every accepted submission, in order.
    pub fn submitted(&self) -> Vec<Bytes> {
        self.submitted.lock().unwrap().clone()
    }
}

#[async_trait]
impl DeployClient for MockDeployClient {
    fn deployer(&self) -> Address {
        Self::DEPLOYER
    }

    async fn submit_deployment(&self, init_code: Bytes) -> Result<H256, ClientError> {
        match self.outcome {
            DeployOutcome::RevertConstructor => {
                return Err(ClientError::Reverted(
                    "execution reverted: constructor failed".to_owned(),
                ))
            }
            DeployOutcome::NeverAccept => std::future::pending::<()>().await,
            _ => {}
        }
        let mut submitted = self.submitted.lock().unwrap();
        submitted.push(init_code);
        Ok(H256::from_low_u64_be(submitted.len() as u64))
    }

    async fn wait_for_deployment(&self, tx_hash: H256) -> Result<DeploymentReceipt, ClientError> {
        match self.outcome {
            DeployOutcome::Confirm => Ok(DeploymentReceipt {
                contract_address: self.contract_address,
                transaction_hash: tx_hash,
                block_number: Some(self.block_number),
            }),
            DeployOutcome::RevertOnChain => Err(ClientError::Reverted(format!(
                "contract creation {tx_hash:?} failed on-chain"
            ))),
            DeployOutcome::NeverConfirm => std::future::pending().await,
            DeployOutcome::RevertConstructor | DeployOutcome::NeverAccept => {
                unreachable!("rejected at submission")
            }
        }
    }
}

/// Token reader backed by a fixed balance table. Counts every call.
#[derive(Debug, Default)]
pub struct MockTokenReader {
    balances: HashMap<(Address, Address), U256>,
    unreachable: bool,
    calls: AtomicUsize,
}

impl MockTokenReader {
    pub fn with_balance(mut self, token: Address, account: Address, balance: U256) -> Self {
        self.balances.insert((token, account), balance);
        self
    }

    /// Every call fails as if the node could not be reached.
    pub fn unreachable() -> Self {
        Self {
            unreachable: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TokenReader for MockTokenReader {
    async fn balance_of(&self, token: Address, account: Address) -> Result<U256, ClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.unreachable {
            return Err(ClientError::Rpc("connection refused".to_owned()));
        }
        Ok(self
            .balances
            .get(&(token, account))
            .copied()
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn confirmed_deployment_reports_configured_address() {
        let client = MockDeployClient::new(DeployOutcome::Confirm);
        let tx_hash = client
            .submit_deployment(Bytes::from(vec![1, 2, 3]))
            .await
            .unwrap();
        let receipt = client.wait_for_deployment(tx_hash).await.unwrap();

        assert_eq!(receipt.contract_address, MockDeployClient::CONTRACT);
        assert_eq!(receipt.transaction_hash, tx_hash);
        assert_eq!(client.submitted(), vec![Bytes::from(vec![1, 2, 3])]);
    }

    #[tokio::test]
    async fn reverting_constructor_is_not_recorded() {
        let client = MockDeployClient::new(DeployOutcome::RevertConstructor);
        assert!(client.submit_deployment(Bytes::default()).await.is_err());
        assert!(client.submitted().is_empty());
    }

    #[tokio::test]
    async fn token_reader_counts_calls() {
        let token = Address::repeat_byte(1);
        let account = Address::repeat_byte(2);
        let reader = MockTokenReader::default().with_balance(token, account, U256::from(5));

        assert_eq!(reader.balance_of(token, account).await.unwrap(), U256::from(5));
        assert_eq!(
            reader.balance_of(token, Address::zero()).await.unwrap(),
            U256::zero()
        );
        assert_eq!(reader.calls(), 2);
    }
}
