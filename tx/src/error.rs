//! The error taxonomy surfaced by decode, validation, and signature recovery.
//!
//! One enum per crate boundary, composed via `#[from]`, matching the convention used throughout
//! this codebase's primitive crates. Nothing in this crate calls `.unwrap()`/`.expect()`/
//! `panic!()` outside of test code; every decode and signing failure is returned to the caller.

use minter_tx_primitives::crypto::CryptoError;

/// Every way a raw envelope, a variant payload, or a signature can fail to authenticate.
///
/// The taxonomy exists for diagnostics, not for branching client logic: a caller that rejects a
/// transaction on any variant of this enum behaves correctly.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TxError {
    /// Malformed envelope or payload bytes: truncated stream, a length prefix that exceeds the
    /// remaining bytes, a schema mismatch, or a non-canonical (leading-zero) integer encoding.
    #[error("structural decode error: {0}")]
    Structural(#[from] rlp::DecoderError),

    /// The `type` discriminator byte is not one of the nine defined codes.
    #[error("unknown transaction type: {0:#04x}")]
    UnknownType(u8),

    /// A required field (`gas_price`, `data`, or the signature triple) is absent.
    #[error("missing field: {0}")]
    MissingField(&'static str),

    /// A variant-specific invariant failed, e.g. `CreateCoin` without both reserve and amount.
    #[error("{0}")]
    VariantInvariant(&'static str),

    /// `v` is out of range, `(r, s)` fail the curve-order or low-s checks, or the recovery id is
    /// invalid.
    #[error("invalid transaction v, r, s values")]
    InvalidSignature,

    /// The recovered public key is not the uncompressed `0x04`-prefixed encoding.
    #[error("invalid public key")]
    InvalidPublicKey,

    /// The underlying ECDSA library rejected the signature or message during recovery.
    #[error("curve error: {0}")]
    Curve(#[from] libsecp256k1::Error),
}

impl From<CryptoError> for TxError {
    fn from(err: CryptoError) -> Self {
        match err {
            CryptoError::InvalidSignature => Self::InvalidSignature,
            CryptoError::InvalidPublicKey => Self::InvalidPublicKey,
            CryptoError::Curve(err) => Self::Curve(err),
        }
    }
}
