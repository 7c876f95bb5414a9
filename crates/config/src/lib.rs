pub use crate::{
    artifact::{ArtifactError, ContractArtifact},
    consts::*,
    env::{
        endpoint_var, load_dotenv, parse_credential, resolve_chain_id, resolve_credential,
        resolve_endpoint, ConfigError, SigningCredential,
    },
    network::NetworkConfig,
    registry::{AddressRegistry, ReadFailure, RegistryError},
};

mod artifact;
mod consts;
mod env;
mod network;
mod registry;
#[cfg(test)]
mod test_utils;
