//! The tagged Ed25519 public-key encoding used on-chain by `DeclareCandidacy` and `Delegate`.
//!
//! The host chain's validator keys are carried through an older key-type registry: a public key
//! is not just its 32 raw bytes but those bytes prefixed with a small header declaring the
//! algorithm and length. This module owns that header and the wrap/unwrap between the bare key
//! an inbound transaction may carry and the tagged form the rest of the system stores.

use crate::bytes::Bytes;

/// 4-byte algorithm prefix + 1-byte length octet for an Ed25519 key, as used by the host
/// chain's key-type registry.
pub const ED25519_TYPE_HEADER: [u8; 5] = [0x16, 0x24, 0xDE, 0x64, 0x20];

/// Total encoded length: 5-byte header + 32-byte key.
pub const TAGGED_LEN: usize = ED25519_TYPE_HEADER.len() + 32;

/// An Ed25519 public key in its tagged, on-chain representation (header ‖ 32 raw bytes).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaggedPublicKey([u8; TAGGED_LEN]);

impl TaggedPublicKey {
    /// Wraps a bare 32-byte Ed25519 key in the tagged header.
    #[must_use]
    pub fn wrap(raw_key: &[u8; 32]) -> Self {
        let mut out = [0u8; TAGGED_LEN];
        out[..5].copy_from_slice(&ED25519_TYPE_HEADER);
        out[5..].copy_from_slice(raw_key);
        Self(out)
    }

    /// Normalizes arbitrary inbound `pubkey` bytes into tagged form.
    ///
    /// If `bytes` is already 37 bytes long and already carries the expected header, it is
    /// returned unchanged (decode is idempotent on already-tagged input, per the round-trip
    /// invariant). Otherwise the first 32 bytes (zero-padded if shorter) are wrapped as a bare
    /// key. This mirrors the source's behavior of copying the inbound bytes into a fixed
    /// 32-byte array regardless of their actual length.
    #[must_use]
    pub fn normalize(bytes: &[u8]) -> Self {
        if bytes.len() == TAGGED_LEN && bytes[..5] == ED25519_TYPE_HEADER {
            let mut out = [0u8; TAGGED_LEN];
            out.copy_from_slice(bytes);
            return Self(out);
        }
        let mut raw = [0u8; 32];
        let take = bytes.len().min(32);
        raw[..take].copy_from_slice(&bytes[..take]);
        Self::wrap(&raw)
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8; TAGGED_LEN] {
        &self.0
    }

    #[must_use]
    pub fn raw_key(&self) -> &[u8; 32] {
        <&[u8; 32]>::try_from(&self.0[5..]).expect("tagged key carries exactly 32 key bytes")
    }
}

impl From<TaggedPublicKey> for Bytes {
    fn from(key: TaggedPublicKey) -> Self {
        Bytes::from(key.0)
    }
}

impl From<ed25519_dalek::VerifyingKey> for TaggedPublicKey {
    fn from(key: ed25519_dalek::VerifyingKey) -> Self {
        Self::wrap(key.as_bytes())
    }
}

impl std::fmt::Debug for TaggedPublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TaggedPublicKey(0x{})", const_hex::encode(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::TaggedPublicKey;

    #[test]
    fn wraps_bare_key_with_header() {
        let raw = [7u8; 32];
        let tagged = TaggedPublicKey::wrap(&raw);
        assert_eq!(&tagged.as_bytes()[..5], &super::ED25519_TYPE_HEADER);
        assert_eq!(tagged.raw_key(), &raw);
    }

    #[test]
    fn normalize_is_idempotent_on_tagged_input() {
        let raw = [3u8; 32];
        let tagged = TaggedPublicKey::wrap(&raw);
        let renormalized = TaggedPublicKey::normalize(tagged.as_bytes());
        assert_eq!(tagged, renormalized);
    }

    #[test]
    fn normalize_wraps_bare_32_byte_key() {
        let raw = [9u8; 32];
        let normalized = TaggedPublicKey::normalize(&raw);
        assert_eq!(normalized, TaggedPublicKey::wrap(&raw));
    }

    #[test]
    fn wraps_from_verifying_key() {
        let signing_key = ed25519_dalek::SigningKey::from_bytes(&[4u8; 32]);
        let verifying_key = signing_key.verifying_key();
        let tagged: TaggedPublicKey = verifying_key.into();
        assert_eq!(tagged.raw_key(), verifying_key.as_bytes());
    }
}
