//! Fixed-width primitives, the `BigUint` RLP adapter, and the secp256k1/Keccak-256
//! cryptographic envelope shared by the transaction core.
//!
//! This crate is the leaf dependency of the workspace: it has no notion of transactions,
//! variants, or gas, only the wire-level building blocks (§4.1, §4.1.1, §4.3, §4.4 of the
//! design) that the `tx` crate composes into the transaction model.

pub mod biguint;
pub mod bytes;
pub mod coin_symbol;
pub mod crypto;
pub mod hash;
pub mod pubkey;
pub mod signature;

pub use biguint::BigUint;
pub use bytes::Bytes;
pub use coin_symbol::CoinSymbol;
pub use crypto::{Crypto, CryptoError, DefaultCrypto};
pub use hash::{Address, CheckProof, Hash};
pub use pubkey::TaggedPublicKey;
pub use signature::Signature;

/// Returns the canonical base coin symbol for a chain id: `1` → `"BIP"`, `2` → `"MNT"`.
///
/// Chain ids outside this set produce an all-zero symbol (byte 4 forced to zero, per
/// [`CoinSymbol`]'s layout); the process-wide default used throughout this codebase is chain id
/// `2`.
#[must_use]
pub fn base_coin(chain_id: u32) -> CoinSymbol {
    match chain_id {
        1 => CoinSymbol::from_ascii(b"BIP"),
        2 => CoinSymbol::from_ascii(b"MNT"),
        _ => CoinSymbol::default(),
    }
}

/// The base coin for the process-wide default chain id (`2`, `"MNT"`).
#[must_use]
pub fn default_base_coin() -> CoinSymbol {
    base_coin(2)
}

#[cfg(test)]
mod tests {
    use super::base_coin;

    #[test]
    fn chain_one_is_bip() {
        assert_eq!(base_coin(1).to_string(), "BIP");
    }

    #[test]
    fn chain_two_is_mnt() {
        assert_eq!(base_coin(2).to_string(), "MNT");
    }

    #[test]
    fn unknown_chain_is_empty() {
        assert_eq!(base_coin(99).trimmed(), &[] as &[u8]);
    }
}
