use url::Url;

use crate::env::{
    endpoint_var, resolve_chain_id, resolve_credential, resolve_endpoint, ConfigError,
    SigningCredential,
};

/// Endpoint and credential for one command run. Built from the environment
/// on every invocation and handed to the network clients explicitly.
#[derive(Debug)]
pub struct NetworkConfig {
    pub network: String,
    pub rpc_url: Url,
    pub chain_id: Option<u64>,
    credential: Option<SigningCredential>,
}

impl NetworkConfig {
    /// Config for commands that only read chain state. `WALLET_PK` is not
    /// consulted.
    pub fn read_only(network: &str) -> Result<Self, ConfigError> {
        let endpoint = resolve_endpoint(network);
        Self::from_parts(network, &endpoint, resolve_chain_id(network)?, None)
    }

    /// Config for commands that submit transactions. The credential is
    /// resolved first, so a missing key is reported before anything else.
    pub fn for_signing(network: &str) -> Result<Self, ConfigError> {
        let credential = resolve_credential()?;
        let endpoint = resolve_endpoint(network);
        Self::from_parts(
            network,
            &endpoint,
            resolve_chain_id(network)?,
            Some(credential),
        )
    }

    pub fn from_parts(
        network: &str,
        endpoint: &str,
        chain_id: Option<u64>,
        credential: Option<SigningCredential>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            network: network.to_owned(),
            rpc_url: parse_endpoint(network, endpoint)?,
            chain_id,
            credential,
        })
    }

    /// Returns the credential or the error a signing command must fail with.
    pub fn require_credential(&self) -> Result<&SigningCredential, ConfigError> {
        self.credential
            .as_ref()
            .ok_or(ConfigError::MissingCredential(crate::consts::WALLET_PK_ENV))
    }
}

fn parse_endpoint(network: &str, endpoint: &str) -> Result<Url, ConfigError> {
    let config_error = |reason: String| ConfigError::NetworkConfig {
        network: network.to_owned(),
        reason,
    };

    let endpoint = endpoint.trim();
    if endpoint.is_empty() {
        return Err(config_error(format!(
            "RPC endpoint is empty, set `{}`",
            endpoint_var(network)
        )));
    }
    let url = Url::parse(endpoint)
        .map_err(|err| config_error(format!("RPC endpoint {endpoint:?} is invalid: {err}")))?;
    let scheme = url.scheme();
    if (scheme == "http" || scheme == "https") && url.host().is_some() {
        return Ok(url);
    }
    Err(config_error(format!(
        "RPC endpoint must be an http(s) URL with a host, got {endpoint:?}"
    )))
}
