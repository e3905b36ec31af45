//! The nine transaction variant payloads and the tagged union over them.
//!
//! Each variant struct is the schema the classifier decodes `Transaction::data` against once
//! the `type` discriminator byte has been read; see [`TxType`] for the discriminator itself.

use minter_tx_primitives::{
    biguint::{self, BigUint},
    bytes::Bytes,
    coin_symbol::CoinSymbol,
    hash::{Address, CheckProof},
};
use rlp::{Decodable, DecoderError, Encodable, Rlp, RlpStream};

/// The `type` discriminator byte, one of the nine defined codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TxType {
    Send = 0x01,
    Convert = 0x02,
    CreateCoin = 0x03,
    DeclareCandidacy = 0x04,
    Delegate = 0x05,
    Unbond = 0x06,
    RedeemCheck = 0x07,
    SetCandidateOnline = 0x08,
    SetCandidateOffline = 0x09,
}

impl TxType {
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for TxType {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x01 => Ok(Self::Send),
            0x02 => Ok(Self::Convert),
            0x03 => Ok(Self::CreateCoin),
            0x04 => Ok(Self::DeclareCandidacy),
            0x05 => Ok(Self::Delegate),
            0x06 => Ok(Self::Unbond),
            0x07 => Ok(Self::RedeemCheck),
            0x08 => Ok(Self::SetCandidateOnline),
            0x09 => Ok(Self::SetCandidateOffline),
            other => Err(other),
        }
    }
}

/// Moves `value` of `coin` to address `to`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SendData {
    pub coin: CoinSymbol,
    pub to: Address,
    pub value: BigUint,
}

impl Encodable for SendData {
    fn rlp_append(&self, s: &mut RlpStream) {
        s.begin_list(3).append(&self.coin).append(&self.to).append(&self.value);
    }
}

impl Decodable for SendData {
    fn decode(rlp: &Rlp) -> Result<Self, DecoderError> {
        Ok(Self { coin: rlp.val_at(0)?, to: rlp.val_at(1)?, value: rlp.val_at(2)? })
    }
}

/// Converts `value` of `from_coin` into `to_coin` through the coin's bonding curve.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConvertData {
    pub from_coin: CoinSymbol,
    pub to_coin: CoinSymbol,
    pub value: BigUint,
}

impl Encodable for ConvertData {
    fn rlp_append(&self, s: &mut RlpStream) {
        s.begin_list(3).append(&self.from_coin).append(&self.to_coin).append(&self.value);
    }
}

impl Decodable for ConvertData {
    fn decode(rlp: &Rlp) -> Result<Self, DecoderError> {
        Ok(Self {
            from_coin: rlp.val_at(0)?,
            to_coin: rlp.val_at(1)?,
            value: rlp.val_at(2)?,
        })
    }
}

/// Registers a new coin with a fixed constant-reserve-ratio bonding curve.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreateCoinData {
    pub name: String,
    pub symbol: CoinSymbol,
    pub initial_amount: Option<BigUint>,
    pub initial_reserve: Option<BigUint>,
    pub constant_reserve_ratio: u64,
}

impl Encodable for CreateCoinData {
    fn rlp_append(&self, s: &mut RlpStream) {
        s.begin_list(5);
        s.append(&self.name);
        s.append(&self.symbol);
        biguint::append_optional(s, self.initial_amount.as_ref());
        biguint::append_optional(s, self.initial_reserve.as_ref());
        s.append(&self.constant_reserve_ratio);
    }
}

impl Decodable for CreateCoinData {
    fn decode(rlp: &Rlp) -> Result<Self, DecoderError> {
        Ok(Self {
            name: rlp.val_at(0)?,
            symbol: rlp.val_at(1)?,
            initial_amount: biguint::decode_optional(&rlp.at(2)?)?,
            initial_reserve: biguint::decode_optional(&rlp.at(3)?)?,
            constant_reserve_ratio: rlp.val_at(4)?,
        })
    }
}

/// Registers `address` as a validator candidate, staking `stake` behind `pubkey`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeclareCandidacyData {
    pub address: Address,
    pub pubkey: Bytes,
    pub commission: u64,
    pub stake: BigUint,
}

impl Encodable for DeclareCandidacyData {
    fn rlp_append(&self, s: &mut RlpStream) {
        s.begin_list(4)
            .append(&self.address)
            .append(&self.pubkey)
            .append(&self.commission)
            .append(&self.stake);
    }
}

impl Decodable for DeclareCandidacyData {
    fn decode(rlp: &Rlp) -> Result<Self, DecoderError> {
        Ok(Self {
            address: rlp.val_at(0)?,
            pubkey: rlp.val_at(1)?,
            commission: rlp.val_at(2)?,
            stake: rlp.val_at(3)?,
        })
    }
}

/// Delegates `stake` to the validator identified by `pubkey`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DelegateData {
    pub pubkey: Bytes,
    pub stake: BigUint,
}

impl Encodable for DelegateData {
    fn rlp_append(&self, s: &mut RlpStream) {
        s.begin_list(2).append(&self.pubkey).append(&self.stake);
    }
}

impl Decodable for DelegateData {
    fn decode(rlp: &Rlp) -> Result<Self, DecoderError> {
        Ok(Self { pubkey: rlp.val_at(0)?, stake: rlp.val_at(1)? })
    }
}

/// Begins unbonding stake previously delegated by `address`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnbondData {
    pub address: Address,
}

impl Encodable for UnbondData {
    fn rlp_append(&self, s: &mut RlpStream) {
        s.begin_list(1).append(&self.address);
    }
}

impl Decodable for UnbondData {
    fn decode(rlp: &Rlp) -> Result<Self, DecoderError> {
        Ok(Self { address: rlp.val_at(0)? })
    }
}

/// Redeems an off-chain payment check, authenticated by its own `(r, s, v)` proof.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RedeemCheckData {
    pub raw_check: Bytes,
    pub proof: CheckProof,
}

impl Encodable for RedeemCheckData {
    fn rlp_append(&self, s: &mut RlpStream) {
        s.begin_list(2).append(&self.raw_check).append(&self.proof);
    }
}

impl Decodable for RedeemCheckData {
    fn decode(rlp: &Rlp) -> Result<Self, DecoderError> {
        Ok(Self { raw_check: rlp.val_at(0)?, proof: rlp.val_at(1)? })
    }
}

/// Marks the validator identified by `pubkey` as available to produce blocks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetCandidateOnlineData {
    pub pubkey: Bytes,
}

impl Encodable for SetCandidateOnlineData {
    fn rlp_append(&self, s: &mut RlpStream) {
        s.begin_list(1).append(&self.pubkey);
    }
}

impl Decodable for SetCandidateOnlineData {
    fn decode(rlp: &Rlp) -> Result<Self, DecoderError> {
        Ok(Self { pubkey: rlp.val_at(0)? })
    }
}

/// Marks the validator identified by `pubkey` as unavailable to produce blocks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetCandidateOfflineData {
    pub pubkey: Bytes,
}

impl Encodable for SetCandidateOfflineData {
    fn rlp_append(&self, s: &mut RlpStream) {
        s.begin_list(1).append(&self.pubkey);
    }
}

impl Decodable for SetCandidateOfflineData {
    fn decode(rlp: &Rlp) -> Result<Self, DecoderError> {
        Ok(Self { pubkey: rlp.val_at(0)? })
    }
}

/// The decoded, variant-tagged payload. This is a derived companion to the wire `data` bytes,
/// never itself serialized directly — the wire only ever sees the `type` byte and the raw
/// `data` string (§3, §9: "tagged union without inheritance").
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TxData {
    Send(SendData),
    Convert(ConvertData),
    CreateCoin(CreateCoinData),
    DeclareCandidacy(DeclareCandidacyData),
    Delegate(DelegateData),
    Unbond(UnbondData),
    RedeemCheck(RedeemCheckData),
    SetCandidateOnline(SetCandidateOnlineData),
    SetCandidateOffline(SetCandidateOfflineData),
}

impl TxData {
    #[must_use]
    pub const fn tx_type(&self) -> TxType {
        match self {
            Self::Send(_) => TxType::Send,
            Self::Convert(_) => TxType::Convert,
            Self::CreateCoin(_) => TxType::CreateCoin,
            Self::DeclareCandidacy(_) => TxType::DeclareCandidacy,
            Self::Delegate(_) => TxType::Delegate,
            Self::Unbond(_) => TxType::Unbond,
            Self::RedeemCheck(_) => TxType::RedeemCheck,
            Self::SetCandidateOnline(_) => TxType::SetCandidateOnline,
            Self::SetCandidateOffline(_) => TxType::SetCandidateOffline,
        }
    }

    /// Structurally encodes the variant payload, the bytes a caller stores in
    /// `Transaction::data`.
    #[must_use]
    pub fn encode_payload(&self) -> Vec<u8> {
        match self {
            Self::Send(data) => rlp::encode(data).to_vec(),
            Self::Convert(data) => rlp::encode(data).to_vec(),
            Self::CreateCoin(data) => rlp::encode(data).to_vec(),
            Self::DeclareCandidacy(data) => rlp::encode(data).to_vec(),
            Self::Delegate(data) => rlp::encode(data).to_vec(),
            Self::Unbond(data) => rlp::encode(data).to_vec(),
            Self::RedeemCheck(data) => rlp::encode(data).to_vec(),
            Self::SetCandidateOnline(data) => rlp::encode(data).to_vec(),
            Self::SetCandidateOffline(data) => rlp::encode(data).to_vec(),
        }
    }

    /// Decodes `data` against the schema for `tx_type`.
    ///
    /// # Errors
    /// Propagates structural RLP errors from the variant's own decode.
    pub fn decode_payload(tx_type: TxType, data: &[u8]) -> Result<Self, DecoderError> {
        Ok(match tx_type {
            TxType::Send => Self::Send(rlp::decode(data)?),
            TxType::Convert => Self::Convert(rlp::decode(data)?),
            TxType::CreateCoin => Self::CreateCoin(rlp::decode(data)?),
            TxType::DeclareCandidacy => Self::DeclareCandidacy(rlp::decode(data)?),
            TxType::Delegate => Self::Delegate(rlp::decode(data)?),
            TxType::Unbond => Self::Unbond(rlp::decode(data)?),
            TxType::RedeemCheck => Self::RedeemCheck(rlp::decode(data)?),
            TxType::SetCandidateOnline => Self::SetCandidateOnline(rlp::decode(data)?),
            TxType::SetCandidateOffline => Self::SetCandidateOffline(rlp::decode(data)?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{
        ConvertData, CreateCoinData, DeclareCandidacyData, DelegateData, RedeemCheckData,
        SendData, SetCandidateOfflineData, SetCandidateOnlineData, TxType, UnbondData,
    };
    use minter_tx_primitives::{
        bytes::Bytes,
        coin_symbol::CoinSymbol,
        hash::{Address, CheckProof},
        BigUint,
    };

    #[test]
    fn type_round_trips_through_u8() {
        for raw in 0x01u8..=0x09 {
            let ty = TxType::try_from(raw).unwrap();
            assert_eq!(ty.as_u8(), raw);
        }
    }

    #[test]
    fn unknown_type_rejected() {
        for raw in [0x00u8, 0x0a, 0xff] {
            assert_eq!(TxType::try_from(raw), Err(raw));
        }
    }

    #[test]
    fn send_payload_round_trips() {
        let data =
            SendData { coin: CoinSymbol::from_ascii(b"MNT"), to: Address::zero(), value: 10u64.into() };
        let encoded = rlp::encode(&data);
        let decoded: SendData = rlp::decode(&encoded).unwrap();
        assert_eq!(data, decoded);
    }

    #[test]
    fn convert_payload_round_trips() {
        let data = ConvertData {
            from_coin: CoinSymbol::from_ascii(b"MNT"),
            to_coin: CoinSymbol::from_ascii(b"BIP"),
            value: 42u64.into(),
        };
        let encoded = rlp::encode(&data);
        let decoded: ConvertData = rlp::decode(&encoded).unwrap();
        assert_eq!(data, decoded);
    }

    #[test]
    fn create_coin_payload_round_trips() {
        let data = CreateCoinData {
            name: "Test Coin".to_string(),
            symbol: CoinSymbol::from_ascii(b"TEST"),
            initial_amount: Some(BigUint::from(100u64)),
            initial_reserve: Some(BigUint::from(200u64)),
            constant_reserve_ratio: 50,
        };
        let encoded = rlp::encode(&data);
        let decoded: CreateCoinData = rlp::decode(&encoded).unwrap();
        assert_eq!(data, decoded);
    }

    #[test]
    fn declare_candidacy_payload_round_trips() {
        let data = DeclareCandidacyData {
            address: Address::zero(),
            pubkey: Bytes::from([7u8; 32]),
            commission: 10,
            stake: BigUint::from(1_000u64),
        };
        let encoded = rlp::encode(&data);
        let decoded: DeclareCandidacyData = rlp::decode(&encoded).unwrap();
        assert_eq!(data, decoded);
    }

    #[test]
    fn delegate_payload_round_trips() {
        let data = DelegateData { pubkey: Bytes::from([3u8; 32]), stake: BigUint::from(500u64) };
        let encoded = rlp::encode(&data);
        let decoded: DelegateData = rlp::decode(&encoded).unwrap();
        assert_eq!(data, decoded);
    }

    #[test]
    fn unbond_payload_round_trips() {
        let data = UnbondData { address: Address([9u8; 20]) };
        let encoded = rlp::encode(&data);
        let decoded: UnbondData = rlp::decode(&encoded).unwrap();
        assert_eq!(data, decoded);
    }

    #[test]
    fn redeem_check_payload_round_trips() {
        let data =
            RedeemCheckData { raw_check: Bytes::from_static(b"raw check bytes"), proof: CheckProof([1u8; 65]) };
        let encoded = rlp::encode(&data);
        let decoded: RedeemCheckData = rlp::decode(&encoded).unwrap();
        assert_eq!(data, decoded);
    }

    #[test]
    fn set_candidate_online_payload_round_trips() {
        let data = SetCandidateOnlineData { pubkey: Bytes::from([2u8; 32]) };
        let encoded = rlp::encode(&data);
        let decoded: SetCandidateOnlineData = rlp::decode(&encoded).unwrap();
        assert_eq!(data, decoded);
    }

    #[test]
    fn set_candidate_offline_payload_round_trips() {
        let data = SetCandidateOfflineData { pubkey: Bytes::from([4u8; 32]) };
        let encoded = rlp::encode(&data);
        let decoded: SetCandidateOfflineData = rlp::decode(&encoded).unwrap();
        assert_eq!(data, decoded);
    }
}
