//! Per-run configuration taken from the process environment.
//!
//! Nothing here is cached: every command resolves its endpoint and
//! credential again. Secret values never appear in errors or logs.

use std::{env, fmt, path::Path};

use ethers::{
    signers::{LocalWallet, Signer, WalletError},
    types::Address,
    utils::hex,
};
use secrecy::{ExposeSecret, SecretString};

use crate::consts::{CHAIN_ID_ENV_SUFFIX, ENDPOINT_ENV_SUFFIX, KNOWN_NETWORKS, WALLET_PK_ENV};

const DOTENV_FILE: &str = ".env";
const HEX_PREFIX: &str = "0x";
const PRIVATE_KEY_LEN: usize = 32;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Signing credential is missing: `{0}` is not set or empty")]
    MissingCredential(&'static str),
    #[error("Signing credential in `{var}` is malformed: {reason}")]
    InvalidCredential { var: &'static str, reason: String },
    #[error("Network `{network}` is misconfigured: {reason}")]
    NetworkConfig { network: String, reason: String },
    #[error("`{var}` is not a valid chain id: {value:?}")]
    InvalidChainId { var: String, value: String },
    #[error("Failed to load .env file")]
    DotEnv(#[source] dotenvy::Error),
}

/// Private key used to sign state-changing transactions. The signer itself
/// is only materialized when a client needs it.
pub struct SigningCredential {
    key_hex: SecretString,
    address: Address,
}

impl SigningCredential {
    /// `0x`-prefixed hex encoding of the key.
    fn expose_hex(&self) -> &str {
        self.key_hex.expose_secret()
    }

    pub fn wallet(&self) -> Result<LocalWallet, ConfigError> {
        self.expose_hex()
            .parse()
            .map_err(|err: WalletError| ConfigError::InvalidCredential {
                var: WALLET_PK_ENV,
                reason: err.to_string(),
            })
    }

    pub fn address(&self) -> Address {
        self.address
    }
}

impl fmt::Debug for SigningCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningCredential")
            .field("address", &self.address())
            .finish_non_exhaustive()
    }
}

/// Loads `.env` from the project directory. A missing file is not an error.
pub fn load_dotenv(project_dir: &Path) -> Result<(), ConfigError> {
    match dotenvy::from_path(project_dir.join(DOTENV_FILE)) {
        Ok(_) => Ok(()),
        Err(err) if err.not_found() => Ok(()),
        Err(err) => Err(ConfigError::DotEnv(err)),
    }
}

/// Reads the signing key from `WALLET_PK`.
pub fn resolve_credential() -> Result<SigningCredential, ConfigError> {
    let raw = env::var(WALLET_PK_ENV).ok();
    parse_credential(raw.as_deref())
}

/// Normalizes and validates a raw private key value.
///
/// The value may come with or without the `0x` marker; the stored form
/// always has it.
pub fn parse_credential(raw: Option<&str>) -> Result<SigningCredential, ConfigError> {
    let raw = raw
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or(ConfigError::MissingCredential(WALLET_PK_ENV))?;

    let key_hex = if raw.starts_with(HEX_PREFIX) {
        raw.to_owned()
    } else {
        format!("{HEX_PREFIX}{raw}")
    };

    let invalid = |reason: String| ConfigError::InvalidCredential {
        var: WALLET_PK_ENV,
        reason,
    };
    let digits = &key_hex[HEX_PREFIX.len()..];
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid("value is not hexadecimal".to_owned()));
    }
    let bytes = hex::decode(digits).map_err(|err| invalid(err.to_string()))?;
    if bytes.len() != PRIVATE_KEY_LEN {
        return Err(invalid(format!(
            "expected {PRIVATE_KEY_LEN} bytes, got {}",
            bytes.len()
        )));
    }
    let wallet = LocalWallet::from_bytes(&bytes)
        .map_err(|_| invalid("value is not a valid secp256k1 private key".to_owned()))?;

    Ok(SigningCredential {
        key_hex: SecretString::new(key_hex),
        address: wallet.address(),
    })
}

fn network_env_prefix(network: &str) -> String {
    network.trim().to_uppercase().replace('-', "_")
}

/// Name of the variable that holds the RPC endpoint of `network`.
pub fn endpoint_var(network: &str) -> String {
    format!("{}{ENDPOINT_ENV_SUFFIX}", network_env_prefix(network))
}

/// Reads `<NETWORK>_URL`. Returns an empty string when unset; the failure is
/// reported once the endpoint is actually used.
pub fn resolve_endpoint(network: &str) -> String {
    env::var(endpoint_var(network)).unwrap_or_default()
}

/// Chain id from `<NETWORK>_CHAIN_ID`, else from the built-in network table.
/// `None` means the node has to be asked.
pub fn resolve_chain_id(network: &str) -> Result<Option<u64>, ConfigError> {
    let var = format!("{}{CHAIN_ID_ENV_SUFFIX}", network_env_prefix(network));
    match env::var(&var) {
        Ok(value) if !value.trim().is_empty() => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidChainId { var, value }),
        _ => Ok(KNOWN_NETWORKS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(network.trim()))
            .map(|(_, chain_id)| *chain_id)),
    }
}
