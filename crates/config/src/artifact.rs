use std::{
    fs, io,
    path::{Path, PathBuf},
};

use ethers::{abi::Abi, types::Bytes};
use serde::Deserialize;
use tokenkit_types::ContractKind;

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("Failed to read contract artifact {}; compile the contracts first", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to parse contract artifact {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Contract artifact {} has no deployable bytecode", path.display())]
    EmptyBytecode { path: PathBuf },
    #[error("Contract artifact {} holds `{found}`, expected `{expected}`", path.display())]
    ContractMismatch {
        path: PathBuf,
        expected: &'static str,
        found: String,
    },
}

/// Compiled contract as emitted by Hardhat: ABI plus creation bytecode.
#[derive(Debug, Clone, Deserialize)]
pub struct ContractArtifact {
    #[serde(rename = "contractName", default)]
    pub contract_name: String,
    pub abi: Abi,
    pub bytecode: Bytes,
}

impl ContractArtifact {
    pub fn new(contract_name: impl Into<String>, abi: Abi, bytecode: Bytes) -> Self {
        Self {
            contract_name: contract_name.into(),
            abi,
            bytecode,
        }
    }

    /// Loads the artifact of `kind` from the project at `root`. An artifact
    /// naming a different contract is rejected.
    pub fn load(root: &Path, kind: ContractKind) -> Result<Self, ArtifactError> {
        let path = root.join(kind.artifact_path());
        let artifact = Self::read(&path)?;
        let expected = kind.contract_name();
        if !artifact.contract_name.is_empty() && artifact.contract_name != expected {
            return Err(ArtifactError::ContractMismatch {
                path,
                expected,
                found: artifact.contract_name,
            });
        }
        Ok(artifact)
    }

    pub fn read(path: &Path) -> Result<Self, ArtifactError> {
        let data = fs::read_to_string(path).map_err(|source| ArtifactError::Read {
            path: path.to_owned(),
            source,
        })?;
        let artifact: Self =
            serde_json::from_str(&data).map_err(|source| ArtifactError::Parse {
                path: path.to_owned(),
                source,
            })?;
        if artifact.bytecode.is_empty() {
            return Err(ArtifactError::EmptyBytecode {
                path: path.to_owned(),
            });
        }
        Ok(artifact)
    }
}
