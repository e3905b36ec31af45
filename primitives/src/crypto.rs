//! The cryptographic envelope: Keccak-256 hashing and secp256k1 ECDSA signature recovery.
//!
//! Mirrors the `Crypto` trait shape already used elsewhere in this codebase for pluggable
//! curve/hash backends, so call sites that need to swap in a mock or hardware-backed
//! implementation in tests can do so without touching the transaction model.

use crate::{hash::Address, signature::Signature};

/// Errors raised while hashing or recovering under the cryptographic envelope.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CryptoError {
    /// `v` does not encode a valid `{27, 28}` recovery id, or `(r, s)` fail the homestead range
    /// checks (including low-s).
    #[error("invalid transaction v, r, s values")]
    InvalidSignature,
    /// The underlying ECDSA recovery library rejected the signature or message.
    #[error("curve error: {0}")]
    Curve(#[from] libsecp256k1::Error),
    /// The recovered point was not the uncompressed `0x04`-prefixed encoding.
    #[error("invalid public key")]
    InvalidPublicKey,
}

/// Hash function and secp256k1 ECDSA signature recovery, factored out as a trait so the
/// transaction core can be exercised against a test double without linking a real curve
/// implementation.
pub trait Crypto {
    /// Computes the Keccak-256 digest of `data`.
    fn keccak256(data: impl AsRef<[u8]>) -> [u8; 32];

    /// Recovers the sender address from a signature over `message_hash`.
    ///
    /// # Errors
    /// Returns [`CryptoError::InvalidSignature`] if `signature` fails the homestead validity
    /// rule (§4.3), [`CryptoError::Curve`] if the curve library rejects the signature, and
    /// [`CryptoError::InvalidPublicKey`] if the recovered point is not the uncompressed
    /// `0x04`-prefixed encoding.
    fn recover_sender(
        signature: &Signature,
        message_hash: [u8; 32],
    ) -> Result<Address, CryptoError>;
}

/// The production [`Crypto`] implementation: [`sha3::Keccak256`] for hashing,
/// [`libsecp256k1`] for ECDSA recovery.
pub struct DefaultCrypto;

impl Crypto for DefaultCrypto {
    fn keccak256(data: impl AsRef<[u8]>) -> [u8; 32] {
        use sha3::Digest;
        sha3::Keccak256::digest(data).into()
    }

    fn recover_sender(
        signature: &Signature,
        message_hash: [u8; 32],
    ) -> Result<Address, CryptoError> {
        if !signature.is_valid_homestead() {
            return Err(CryptoError::InvalidSignature);
        }
        let raw = signature.to_raw_signature();
        let recovery_id = libsecp256k1::RecoveryId::parse(raw[64])?;
        let sig = libsecp256k1::Signature::parse_overflowing_slice(&raw[0..64])?;
        let msg = libsecp256k1::Message::parse(&message_hash);
        let pubkey = libsecp256k1::recover(&msg, &sig, &recovery_id)?;

        let uncompressed = pubkey.serialize();
        if uncompressed[0] != 0x04 {
            return Err(CryptoError::InvalidPublicKey);
        }
        let hash = Self::keccak256(&uncompressed[1..]);
        let mut addr = [0u8; 20];
        addr.copy_from_slice(&hash[12..]);
        Ok(Address(addr))
    }
}
