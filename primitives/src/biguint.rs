use std::fmt::{Debug, Display, Formatter, Result as FmtResult};

use num_bigint::BigUint as Inner;
use num_traits::Zero;

/// An arbitrary-precision non-negative integer, encoded canonically on the wire: the minimal
/// big-endian byte representation, with zero encoded as the empty string.
///
/// Unlike the fixed-width `U256` used by other chains in this codebase, transaction values here
/// are unbounded, so this wraps [`num_bigint::BigUint`] rather than a fixed-width integer type.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BigUint(Inner);

impl BigUint {
    #[must_use]
    pub fn zero() -> Self {
        Self(Inner::zero())
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// The minimal big-endian byte representation; empty for zero.
    #[must_use]
    pub fn to_bytes_be(&self) -> Vec<u8> {
        if self.0.is_zero() {
            Vec::new()
        } else {
            self.0.to_bytes_be()
        }
    }

    /// Parses a minimal big-endian byte string.
    ///
    /// # Errors
    /// Returns [`rlp::DecoderError::RlpInvalidIndirection`] if `bytes` carries a non-canonical
    /// leading zero byte (the non-empty-but-still-zero-prefixed encoding this codec forbids).
    pub fn from_bytes_be_canonical(bytes: &[u8]) -> Result<Self, rlp::DecoderError> {
        if bytes.first() == Some(&0) {
            return Err(rlp::DecoderError::RlpInvalidIndirection);
        }
        Ok(Self(Inner::from_bytes_be(bytes)))
    }
}

impl From<u64> for BigUint {
    fn from(value: u64) -> Self {
        Self(Inner::from(value))
    }
}

impl From<u32> for BigUint {
    fn from(value: u32) -> Self {
        Self(Inner::from(value))
    }
}

impl Debug for BigUint {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

impl Display for BigUint {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

impl rlp::Encodable for BigUint {
    fn rlp_append(&self, s: &mut rlp::RlpStream) {
        s.append(&self.to_bytes_be());
    }
}

impl rlp::Decodable for BigUint {
    fn decode(rlp: &rlp::Rlp) -> Result<Self, rlp::DecoderError> {
        let data = rlp.data()?;
        Self::from_bytes_be_canonical(data)
    }
}

/// Decodes an RLP string field that is allowed to be logically "missing": the empty-string wire
/// encoding (shared, by design, with a real value of zero — see the design notes on BigInt
/// canonicalization) decodes to `None`.
///
/// # Errors
/// Propagates structural RLP errors and the non-canonical leading-zero-byte error from
/// [`BigUint::from_bytes_be_canonical`].
pub fn decode_optional(rlp: &rlp::Rlp) -> Result<Option<BigUint>, rlp::DecoderError> {
    let data = rlp.data()?;
    if data.is_empty() {
        return Ok(None);
    }
    BigUint::from_bytes_be_canonical(data).map(Some)
}

/// Appends an optional big integer; `None` and `Some(zero)` both encode as the empty string.
pub fn append_optional(s: &mut rlp::RlpStream, value: Option<&BigUint>) {
    match value {
        Some(value) => {
            s.append(&value.to_bytes_be());
        },
        None => {
            s.append_empty_data();
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{decode_optional, BigUint};

    #[test]
    fn zero_encodes_as_empty_string() {
        let zero = BigUint::zero();
        assert!(zero.to_bytes_be().is_empty());
        let encoded = rlp::encode(&zero);
        let decoded: BigUint = rlp::decode(&encoded).unwrap();
        assert_eq!(zero, decoded);
    }

    #[test]
    fn nonzero_round_trips() {
        let value = BigUint::from(0xdead_beefu64);
        let encoded = rlp::encode(&value);
        let decoded: BigUint = rlp::decode(&encoded).unwrap();
        assert_eq!(value, decoded);
        assert_eq!(value.to_string(), "3735928559");
    }

    #[test]
    fn rejects_leading_zero_byte() {
        let err = BigUint::from_bytes_be_canonical(&[0x00, 0x01]).unwrap_err();
        assert_eq!(err, rlp::DecoderError::RlpInvalidIndirection);
    }

    #[test]
    fn empty_string_decodes_as_missing() {
        let encoded = rlp::encode(&Vec::<u8>::new());
        let rlp = rlp::Rlp::new(&encoded);
        assert_eq!(decode_optional(&rlp).unwrap(), None);
    }
}
