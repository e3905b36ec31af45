use crate::biguint::BigUint;

/// secp256k1 group order `n`.
const SECP256K1_N: [u8; 32] = hex_literal::hex!(
    "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141"
);
/// `n / 2`, the low-s threshold.
const SECP256K1_HALF_N: [u8; 32] = hex_literal::hex!(
    "7fffffffffffffffffffffffffffffff5d576e7357a4501ddfe92f46681b20a0"
);

/// An ECDSA `(r, s, v)` signature triple, in the wire's `v ∈ {27, 28}` convention.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Signature {
    pub v: u8,
    pub r: BigUint,
    pub s: BigUint,
}

impl Signature {
    /// The normalized recovery id, `v - 27`.
    ///
    /// # Errors
    /// Returns `None` if `v` is not `27` or `28`.
    #[must_use]
    pub fn recovery_id(&self) -> Option<u8> {
        self.v.checked_sub(27).filter(|id| *id <= 1)
    }

    /// Checks the "homestead" validity rule: `r, s` in `[1, n-1]`, `s <= n/2`, recovery id in
    /// `{0, 1}`.
    #[must_use]
    pub fn is_valid_homestead(&self) -> bool {
        let Some(recovery_id) = self.recovery_id() else {
            return false;
        };
        if recovery_id > 1 {
            return false;
        }
        let r = self.r.to_bytes_be();
        let s = self.s.to_bytes_be();
        if r.is_empty() || s.is_empty() {
            return false;
        }
        let r_in_range = be_bytes_lt(&r, &SECP256K1_N);
        let s_in_range = be_bytes_lt(&s, &SECP256K1_N);
        let s_is_low = !be_bytes_lt(&SECP256K1_HALF_N, &s);
        r_in_range && s_in_range && s_is_low
    }

    /// Packs the signature into the canonical 65-byte `r ‖ s ‖ recovery_id` layout used by ECDSA
    /// public-key recovery, zero-padding `r` and `s` to 32 bytes.
    ///
    /// # Panics
    /// Panics if `v` is not `27` or `28` (callers should check [`Self::is_valid_homestead`]
    /// first).
    #[must_use]
    pub fn to_raw_signature(&self) -> [u8; 65] {
        let mut out = [0u8; 65];
        let r = self.r.to_bytes_be();
        let s = self.s.to_bytes_be();
        out[32 - r.len()..32].copy_from_slice(&r);
        out[64 - s.len()..64].copy_from_slice(&s);
        out[64] = self.v.checked_sub(27).expect("v must be 27 or 28");
        out
    }

    /// Builds a signature from a 65-byte `r ‖ s ‖ recovery_id` signing-library output, applying
    /// the `+27` wire offset.
    #[must_use]
    pub fn from_raw_signature(raw: &[u8; 65]) -> Self {
        Self {
            v: raw[64] + 27,
            r: BigUint::from_bytes_be_canonical(strip_leading_zeros(&raw[0..32]))
                .unwrap_or_else(|_| unreachable!("stripped bytes never carry a leading zero")),
            s: BigUint::from_bytes_be_canonical(strip_leading_zeros(&raw[32..64]))
                .unwrap_or_else(|_| unreachable!("stripped bytes never carry a leading zero")),
        }
    }
}

fn strip_leading_zeros(bytes: &[u8]) -> &[u8] {
    let first_nonzero = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    &bytes[first_nonzero..]
}

/// Compares two minimal (no-leading-zero) big-endian byte strings: `a < b`.
fn be_bytes_lt(a: &[u8], b: &[u8]) -> bool {
    match a.len().cmp(&b.len()) {
        std::cmp::Ordering::Less => true,
        std::cmp::Ordering::Greater => false,
        std::cmp::Ordering::Equal => a < b,
    }
}
