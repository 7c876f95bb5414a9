use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// A deployable contract. Each kind owns exactly one registry file.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    ValueEnum,
    EnumIter,
    Display,
)]
pub enum ContractKind {
    #[default]
    BasicToken,
}

impl ContractKind {
    /// Name of the contract inside its compiled artifact.
    #[must_use]
    pub fn contract_name(&self) -> &'static str {
        match self {
            ContractKind::BasicToken => "BasicToken",
        }
    }

    /// Repository-relative path of the address registry.
    #[must_use]
    pub fn registry_path(&self) -> &'static str {
        match self {
            ContractKind::BasicToken => "addresses/basictoken.json",
        }
    }

    /// Repository-relative path of the compiled Hardhat artifact.
    #[must_use]
    pub fn artifact_path(&self) -> &'static str {
        match self {
            ContractKind::BasicToken => "artifacts/contracts/BasicToken.sol/BasicToken.json",
        }
    }

    /// Fractional-unit scale of the amounts reported by the contract.
    #[must_use]
    pub fn decimals(&self) -> u32 {
        match self {
            ContractKind::BasicToken => 18,
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn every_kind_has_its_own_registry() {
        let mut paths: Vec<_> = ContractKind::iter().map(|k| k.registry_path()).collect();
        let total = paths.len();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), total);
    }

    #[test]
    fn basic_token_paths() {
        let kind = ContractKind::BasicToken;
        assert_eq!(kind.registry_path(), "addresses/basictoken.json");
        assert!(kind.artifact_path().ends_with("BasicToken.json"));
        assert_eq!(kind.decimals(), 18);
        assert_eq!(kind.contract_name(), "BasicToken");
        assert_eq!(kind.to_string(), "BasicToken");
    }
}
