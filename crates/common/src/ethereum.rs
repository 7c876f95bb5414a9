use std::time::Duration;

use anyhow::Context;
use ethers::{
    middleware::SignerMiddleware,
    providers::{Http, Middleware, Provider},
    signers::{LocalWallet, Signer},
};
use url::Url;

/// Poll interval for pending transactions. The ethers default of 7s is
/// tuned for mainnet and makes local deployments crawl.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

pub type SigningClient = SignerMiddleware<Provider<Http>, LocalWallet>;

/// Read-only JSON-RPC client, no signer attached.
pub fn create_provider(rpc_url: &Url) -> Provider<Http> {
    Provider::new(Http::new(rpc_url.clone())).interval(DEFAULT_POLL_INTERVAL)
}

/// Builds a client that signs every outgoing transaction with `wallet`.
///
/// When `chain_id` is unknown it is queried from the node, so the signed
/// transactions carry the correct EIP-155 replay protection.
pub async fn create_ethers_client(
    wallet: LocalWallet,
    rpc_url: &Url,
    chain_id: Option<u64>,
) -> anyhow::Result<SigningClient> {
    let provider = create_provider(rpc_url);
    let chain_id = match chain_id {
        Some(chain_id) => chain_id,
        None => provider
            .get_chainid()
            .await
            .with_context(|| format!("Failed to query chain id from {rpc_url}"))?
            .as_u64(),
    };
    Ok(SignerMiddleware::new(
        provider,
        wallet.with_chain_id(chain_id),
    ))
}
