use std::fmt::{Debug, Display, Formatter, LowerHex, Result as FmtResult};

macro_rules! impl_fixed_bytes {
    ($name:ident, $n_bytes:expr) => {
        /// Fixed-width, opaque byte identifier.
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        pub struct $name(pub [u8; $n_bytes]);

        impl $name {
            pub const LEN: usize = $n_bytes;

            #[must_use]
            pub const fn zero() -> Self {
                Self([0u8; $n_bytes])
            }

            #[must_use]
            pub const fn as_fixed_bytes(&self) -> &[u8; $n_bytes] {
                &self.0
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl From<[u8; $n_bytes]> for $name {
            fn from(bytes: [u8; $n_bytes]) -> Self {
                Self(bytes)
            }
        }

        impl TryFrom<&[u8]> for $name {
            type Error = core::array::TryFromSliceError;

            fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
                <[u8; $n_bytes]>::try_from(bytes).map(Self)
            }
        }

        impl Debug for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
                write!(f, "0x{}", const_hex::encode(self.0))
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
                write!(f, "0x{}", const_hex::encode(self.0))
            }
        }

        impl LowerHex for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
                write!(f, "0x{}", const_hex::encode(self.0))
            }
        }

        impl rlp::Encodable for $name {
            fn rlp_append(&self, s: &mut rlp::RlpStream) {
                s.append(&self.0.as_slice());
            }
        }

        impl rlp::Decodable for $name {
            fn decode(rlp: &rlp::Rlp) -> Result<Self, rlp::DecoderError> {
                let data = rlp.data()?;
                if data.len() != $n_bytes {
                    return Err(rlp::DecoderError::RlpInvalidLength);
                }
                let mut out = [0u8; $n_bytes];
                out.copy_from_slice(data);
                Ok(Self(out))
            }
        }
    };
}

impl_fixed_bytes!(Address, 20);
impl_fixed_bytes!(Hash, 32);
/// Raw check-redemption proof: a 65-byte `(r, s, v)` triple in the same shape as a transaction
/// signature, but produced over the off-chain check's own preimage rather than a transaction.
impl_fixed_bytes!(CheckProof, 65);

#[cfg(test)]
mod tests {
    use super::{Address, Hash};
    use rlp::Decodable as _;

    #[test]
    fn rlp_round_trips() {
        let addr = Address([7u8; 20]);
        let encoded = rlp::encode(&addr);
        let decoded: Address = rlp::decode(&encoded).unwrap();
        assert_eq!(addr, decoded);

        let hash = Hash([9u8; 32]);
        let encoded = rlp::encode(&hash);
        let decoded: Hash = rlp::decode(&encoded).unwrap();
        assert_eq!(hash, decoded);
    }

    #[test]
    fn rejects_wrong_length() {
        let encoded = rlp::encode(&vec![1u8, 2, 3]);
        let rlp = rlp::Rlp::new(&encoded);
        assert!(Address::decode(&rlp).is_err());
    }
}
