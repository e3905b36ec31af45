use std::fmt::{Debug, Display, Formatter, Result as FmtResult};

/// A short ASCII coin ticker stored in a fixed 10-byte buffer, zero-padded.
///
/// Byte index 4 is always zero on the wire; this is a preserved quirk of the host chain's
/// original layout (it once separated a 4-byte prefix from a 5-byte suffix) rather than a
/// meaningful field boundary, and this type keeps writing it as zero for wire compatibility.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct CoinSymbol(pub [u8; Self::LEN]);

impl CoinSymbol {
    pub const LEN: usize = 10;

    /// Builds a symbol from ASCII bytes, zero-padding and forcing byte 4 to zero.
    ///
    /// # Panics
    /// Panics if `ticker` is longer than [`Self::LEN`].
    #[must_use]
    pub fn from_ascii(ticker: &[u8]) -> Self {
        assert!(ticker.len() <= Self::LEN, "coin symbol longer than {} bytes", Self::LEN);
        let mut buf = [0u8; Self::LEN];
        buf[..ticker.len()].copy_from_slice(ticker);
        buf[4] = 0;
        Self(buf)
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8; Self::LEN] {
        &self.0
    }

    /// The ticker with trailing zero padding trimmed off.
    #[must_use]
    pub fn trimmed(&self) -> &[u8] {
        let end = self.0.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
        &self.0[..end]
    }
}

impl From<[u8; Self::LEN]> for CoinSymbol {
    fn from(mut bytes: [u8; Self::LEN]) -> Self {
        bytes[4] = 0;
        Self(bytes)
    }
}

impl Debug for CoinSymbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "CoinSymbol({self})")
    }
}

impl Display for CoinSymbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match std::str::from_utf8(self.trimmed()) {
            Ok(ticker) => write!(f, "{ticker}"),
            Err(_) => write!(f, "0x{}", const_hex::encode(self.0)),
        }
    }
}

impl rlp::Encodable for CoinSymbol {
    fn rlp_append(&self, s: &mut rlp::RlpStream) {
        s.append(&self.0.as_slice());
    }
}

impl rlp::Decodable for CoinSymbol {
    fn decode(rlp: &rlp::Rlp) -> Result<Self, rlp::DecoderError> {
        let data = rlp.data()?;
        if data.len() != Self::LEN {
            return Err(rlp::DecoderError::RlpInvalidLength);
        }
        let mut out = [0u8; Self::LEN];
        out.copy_from_slice(data);
        Ok(Self::from(out))
    }
}
