use ethers::{
    signers::{LocalWallet, Signer},
    types::{Address, H256},
};
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wallet {
    pub address: Address,
    pub private_key: H256,
}

impl Wallet {
    pub fn random<R>(rng: &mut R) -> Self
    where
        R: RngCore + CryptoRng,
    {
        let signer = LocalWallet::new(rng);
        Self {
            address: signer.address(),
            private_key: H256::from_slice(&signer.signer().to_bytes()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_wallet_key_matches_address() {
        let wallet = Wallet::random(&mut rand::thread_rng());
        let signer = LocalWallet::from_bytes(wallet.private_key.as_bytes()).unwrap();
        assert_eq!(signer.address(), wallet.address);
    }

    #[test]
    fn random_wallets_differ() {
        let mut rng = rand::thread_rng();
        assert_ne!(Wallet::random(&mut rng).address, Wallet::random(&mut rng).address);
    }

    #[test]
    fn wallet_is_saved_as_hex() {
        let wallet = Wallet::random(&mut rand::thread_rng());
        let json = serde_json::to_value(&wallet).unwrap();
        assert_eq!(json["address"], format!("{:?}", wallet.address));
        assert_eq!(json["private_key"], format!("{:?}", wallet.private_key));
    }
}
