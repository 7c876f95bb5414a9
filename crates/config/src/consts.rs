/// Environment variable holding the deployer's private key.
pub const WALLET_PK_ENV: &str = "WALLET_PK";
/// `<NETWORK>` + this suffix names the JSON-RPC endpoint variable.
pub const ENDPOINT_ENV_SUFFIX: &str = "_URL";
/// `<NETWORK>` + this suffix names the optional chain id override.
pub const CHAIN_ID_ENV_SUFFIX: &str = "_CHAIN_ID";

/// Base URL of the block explorer transaction page.
pub const EXPLORER_TX_BASE_URL: &str = "https://app.kiichain.io/kiichain/tx";

/// Default output of `wallet create`.
pub const WALLET_FILE: &str = "wallet.json";

/// Chain ids of the networks the toolkit knows out of the box.
pub const KNOWN_NETWORKS: &[(&str, u64)] = &[
    ("hardhat", 31_337),
    ("localhost", 31_337),
    ("kiichain", 123_454_321),
];

/// Builds the explorer link for a transaction. An empty hash yields no link.
pub fn explorer_tx_url(tx_hash: &str) -> Option<String> {
    if tx_hash.is_empty() {
        return None;
    }
    Some(format!("{EXPLORER_TX_BASE_URL}/{tx_hash}"))
}
