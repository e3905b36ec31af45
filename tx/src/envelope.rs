//! The transaction envelope: the tagged union's wire record, its structural codec, the signing
//! hash, and signature production/recovery.

use std::fmt::{self, Display, Formatter};

use minter_tx_primitives::{
    biguint::{self, BigUint},
    bytes::Bytes,
    crypto::{Crypto, DefaultCrypto},
    hash::{Address, Hash},
    pubkey::TaggedPublicKey,
    signature::Signature,
};
use rlp::{Decodable, DecoderError, Encodable, Rlp, RlpStream};

use crate::{
    error::TxError,
    gas::{base_gas, PAYLOAD_BYTE},
    variants::{TxData, TxType},
};

/// A single transaction: the wire envelope plus the classifier's derived decoded payload.
///
/// `v` is carried as a [`BigUint`] on the wire, matching `r`/`s` (and the host chain's own
/// arbitrary-precision `V` field) rather than a fixed byte — recovery rejects any `v` whose
/// minimal encoding is wider than one byte before ever looking at its value (§4.3 step 1).
/// Any of `v`, `r`, `s` being zero is the sentinel for "not yet signed": no genuinely signed
/// transaction ever carries `v == 0` on the wire (valid `v` is always `27` or `28`), and a real
/// signature's `r`/`s` are never zero either, so the triple doubles as its own presence check
/// without a separate `Option`.
#[derive(Clone, Debug, PartialEq)]
pub struct Transaction {
    pub nonce: u64,
    pub gas_price: Option<BigUint>,
    pub tx_type: u8,
    pub data: Bytes,
    pub payload: Bytes,
    pub service_data: Bytes,
    pub v: BigUint,
    pub r: BigUint,
    pub s: BigUint,
    decoded: Option<TxData>,
}

impl Transaction {
    /// Builds an unsigned transaction carrying `variant`, ready for [`Self::sign`].
    #[must_use]
    pub fn new_unsigned(nonce: u64, gas_price: BigUint, variant: TxData, memo: Bytes) -> Self {
        let data = Bytes::from(variant.encode_payload());
        Self {
            nonce,
            gas_price: Some(gas_price),
            tx_type: variant.tx_type().as_u8(),
            data,
            payload: memo,
            service_data: Bytes::new(),
            v: BigUint::zero(),
            r: BigUint::zero(),
            s: BigUint::zero(),
            decoded: Some(variant),
        }
    }

    /// The decoded, variant-tagged payload, populated by [`decode`] or [`Self::new_unsigned`].
    #[must_use]
    pub fn decoded_data(&self) -> Option<&TxData> {
        self.decoded.as_ref()
    }

    #[must_use]
    pub fn is_signed(&self) -> bool {
        !self.v.is_zero() && !self.r.is_zero() && !self.s.is_zero()
    }

    /// The signing hash: the structural encoding of `(nonce, gas_price, type, data, payload,
    /// service_data)`, excluding the signature triple entirely (§4.3, §8 property 2).
    #[must_use]
    pub fn hash(&self) -> Hash {
        let mut s = RlpStream::new_list(6);
        s.append(&self.nonce);
        biguint::append_optional(&mut s, self.gas_price.as_ref());
        s.append(&self.tx_type);
        s.append(&self.data);
        s.append(&self.payload);
        s.append(&self.service_data);
        let bytes = s.out();
        Hash(DefaultCrypto::keccak256(bytes.as_ref()))
    }

    /// Signs the transaction with `private_key`, overwriting `(v, r, s)`.
    ///
    /// # Errors
    /// Returns [`libsecp256k1::Error`] if the curve library rejects the key or message.
    pub fn sign(
        &mut self,
        private_key: &libsecp256k1::SecretKey,
    ) -> Result<(), libsecp256k1::Error> {
        let hash = self.hash();
        let message = libsecp256k1::Message::parse(hash.as_fixed_bytes());
        let (signature, recovery_id) = libsecp256k1::sign(&message, private_key);
        let mut raw = [0u8; 65];
        raw[..64].copy_from_slice(&signature.serialize());
        raw[64] = recovery_id.serialize();
        let sig = Signature::from_raw_signature(&raw);
        self.v = BigUint::from(u32::from(sig.v));
        self.r = sig.r;
        self.s = sig.s;
        Ok(())
    }

    /// Recovers the sender address from the current signature.
    ///
    /// # Errors
    /// [`TxError::InvalidSignature`] if `v`'s minimal encoding is wider than one byte or
    /// `(v, r, s)` otherwise fail the homestead validity rule, [`TxError::Curve`] if the curve
    /// library rejects the signature, [`TxError::InvalidPublicKey`] if the recovered point is
    /// not the uncompressed `0x04`-prefixed encoding.
    pub fn sender(&self) -> Result<Address, TxError> {
        let v_bytes = self.v.to_bytes_be();
        if v_bytes.len() > 1 {
            return Err(TxError::InvalidSignature);
        }
        let v = v_bytes.first().copied().unwrap_or(0);
        let signature = Signature { v, r: self.r.clone(), s: self.s.clone() };
        let hash = self.hash();
        DefaultCrypto::recover_sender(&signature, *hash.as_fixed_bytes()).map_err(Into::into)
    }

    /// `base_gas(type) + len(payload) * PAYLOAD_BYTE` (§4.2, §8 property 5).
    ///
    /// # Panics
    /// Panics if `tx_type` is not one of the defined codes; callers only ever hold a
    /// `Transaction` with a validated `tx_type` after going through [`decode`].
    #[must_use]
    pub fn gas(&self) -> u64 {
        let tx_type = TxType::try_from(self.tx_type)
            .unwrap_or_else(|_| unreachable!("tx_type is validated at decode/construction time"));
        base_gas(tx_type) + self.payload.len() as u64 * PAYLOAD_BYTE
    }

    /// Structurally encodes the full envelope (the wire bytes).
    #[must_use]
    pub fn encode(&self) -> Vec<u8> {
        rlp::encode(self).to_vec()
    }
}

impl Encodable for Transaction {
    fn rlp_append(&self, s: &mut RlpStream) {
        s.begin_list(9);
        s.append(&self.nonce);
        biguint::append_optional(s, self.gas_price.as_ref());
        s.append(&self.tx_type);
        s.append(&self.data);
        s.append(&self.payload);
        s.append(&self.service_data);
        s.append(&self.v);
        s.append(&self.r);
        s.append(&self.s);
    }
}

impl Decodable for Transaction {
    fn decode(rlp: &Rlp) -> Result<Self, DecoderError> {
        if rlp.item_count()? != 9 {
            return Err(DecoderError::RlpIncorrectListLen);
        }
        Ok(Self {
            nonce: rlp.val_at(0)?,
            gas_price: biguint::decode_optional(&rlp.at(1)?)?,
            tx_type: rlp.val_at(2)?,
            data: rlp.val_at(3)?,
            payload: rlp.val_at(4)?,
            service_data: rlp.val_at(5)?,
            v: rlp.val_at(6)?,
            r: rlp.val_at(7)?,
            s: rlp.val_at(8)?,
            decoded: None,
        })
    }
}

/// Structurally decodes `bytes` into a validated, classified transaction (§4.2, §6).
///
/// # Errors
/// - [`TxError::Structural`] on malformed envelope or payload bytes.
/// - [`TxError::UnknownType`] if `type` is outside `{0x01..=0x09}`.
/// - [`TxError::MissingField`] if `gas_price`, `data`, or the signature triple is absent.
/// - [`TxError::VariantInvariant`] if `CreateCoin` is missing `initial_amount` or
///   `initial_reserve`.
pub fn decode(bytes: &[u8]) -> Result<Transaction, TxError> {
    let mut tx: Transaction = rlp::decode(bytes)?;

    let tx_type = TxType::try_from(tx.tx_type).map_err(TxError::UnknownType)?;

    if tx.gas_price.is_none() {
        return Err(TxError::MissingField("gas_price"));
    }
    if tx.data.is_empty() {
        return Err(TxError::MissingField("data"));
    }
    if tx.v.is_zero() || tx.r.is_zero() || tx.s.is_zero() {
        return Err(TxError::MissingField("signature"));
    }

    let mut decoded = TxData::decode_payload(tx_type, tx.data.as_ref())?;

    if let TxData::CreateCoin(ref data) = decoded {
        if data.initial_amount.is_none() || data.initial_reserve.is_none() {
            return Err(TxError::VariantInvariant("incorrect tx data"));
        }
    }

    match &mut decoded {
        TxData::DeclareCandidacy(data) => {
            data.pubkey = TaggedPublicKey::normalize(data.pubkey.as_ref()).into();
        },
        TxData::Delegate(data) => {
            data.pubkey = TaggedPublicKey::normalize(data.pubkey.as_ref()).into();
        },
        _ => {},
    }

    tx.decoded = Some(decoded);
    Ok(tx)
}

impl Display for Transaction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let sender = self.sender().map_or_else(|_| "unknown".to_string(), |addr| addr.to_string());

        match self.decoded.as_ref() {
            Some(TxData::Send(data)) => write!(
                f,
                "SEND TX nonce:{} from:{} to:{} coin:{} value:{} payload:{}",
                self.nonce, sender, data.to, data.coin, data.value, self.payload
            ),
            Some(TxData::Convert(data)) => write!(
                f,
                "CONVERT TX nonce:{} from:{} from_coin:{} to_coin:{} value:{} payload:{}",
                self.nonce, sender, data.from_coin, data.to_coin, data.value, self.payload
            ),
            Some(TxData::CreateCoin(data)) => write!(
                f,
                "CREATE COIN TX nonce:{} from:{} symbol:{} reserve:{} amount:{} crr:{} payload:{}",
                self.nonce,
                sender,
                data.symbol,
                data.initial_reserve.as_ref().map_or_else(|| "none".to_string(), ToString::to_string),
                data.initial_amount.as_ref().map_or_else(|| "none".to_string(), ToString::to_string),
                data.constant_reserve_ratio,
                self.payload
            ),
            Some(TxData::DeclareCandidacy(data)) => write!(
                f,
                "DECLARE CANDIDACY TX nonce:{} address:{} pubkey:{} commission:{} payload:{}",
                self.nonce, data.address, data.pubkey, data.commission, self.payload
            ),
            Some(TxData::Delegate(data)) => write!(
                f,
                "DELEGATE TX nonce:{} from:{} pubkey:{} stake:{} payload:{}",
                self.nonce, sender, data.pubkey, data.stake, self.payload
            ),
            Some(TxData::Unbond(data)) => write!(
                f,
                "UNBOND TX nonce:{} from:{} address:{} payload:{}",
                self.nonce, sender, data.address, self.payload
            ),
            Some(TxData::RedeemCheck(data)) => write!(
                f,
                "REDEEM CHECK TX nonce:{} proof:0x{}",
                self.nonce,
                const_hex::encode(data.proof)
            ),
            Some(TxData::SetCandidateOnline(data)) => write!(
                f,
                "SET CANDIDATE ONLINE TX nonce:{} from:{} pubkey:{} payload:{}",
                self.nonce, sender, data.pubkey, self.payload
            ),
            Some(TxData::SetCandidateOffline(data)) => write!(
                f,
                "SET CANDIDATE OFFLINE TX nonce:{} from:{} pubkey:{} payload:{}",
                self.nonce, sender, data.pubkey, self.payload
            ),
            None => write!(
                f,
                "TX nonce:{} from:{} type:{:#04x} (undecoded)",
                self.nonce, sender, self.tx_type
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{decode, Transaction};
    use crate::variants::{CreateCoinData, SendData, TxData};
    use minter_tx_primitives::{bytes::Bytes, coin_symbol::CoinSymbol, hash::Address, BigUint};

    fn send_tx(nonce: u64, value: u64) -> Transaction {
        let variant = TxData::Send(SendData {
            coin: CoinSymbol::from_ascii(b"MNT"),
            to: Address::zero(),
            value: value.into(),
        });
        Transaction::new_unsigned(nonce, BigUint::from(1u64), variant, Bytes::new())
    }

    fn private_key() -> libsecp256k1::SecretKey {
        libsecp256k1::SecretKey::parse(&[
            1u8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
            0, 0, 0, 0,
        ])
        .unwrap()
    }

    #[test]
    fn send_round_trips() {
        let mut tx = send_tx(1, 10);
        tx.sign(&private_key()).unwrap();
        let encoded = tx.encode();
        let decoded = decode(&encoded).unwrap();
        assert_eq!(tx.nonce, decoded.nonce);
        assert_eq!(tx.gas_price, decoded.gas_price);
        assert_eq!(tx.data, decoded.data);
        assert_eq!(tx.v, decoded.v);
        assert_eq!(tx.r, decoded.r);
        assert_eq!(tx.s, decoded.s);
        assert_eq!(tx.decoded, decoded.decoded);
    }

    #[test]
    fn hash_ignores_signature() {
        let mut tx = send_tx(1, 10);
        let unsigned_hash = tx.hash();
        tx.sign(&private_key()).unwrap();
        assert_eq!(unsigned_hash, tx.hash());
    }

    #[test]
    fn sign_then_recover_round_trips() {
        let mut tx = send_tx(7, 99);
        let key = private_key();
        tx.sign(&key).unwrap();

        let expected_pubkey = libsecp256k1::PublicKey::from_secret_key(&key);
        let uncompressed = expected_pubkey.serialize();
        let expected_hash =
            minter_tx_primitives::crypto::DefaultCrypto::keccak256(&uncompressed[1..]);
        let expected_addr = Address::try_from(&expected_hash[12..]).unwrap();

        assert_eq!(tx.sender().unwrap(), expected_addr);
    }

    #[test]
    fn tamper_after_signing_changes_or_breaks_sender() {
        let mut tx = send_tx(7, 99);
        tx.sign(&private_key()).unwrap();
        let original_sender = tx.sender().unwrap();

        let mut payload = tx.payload.to_vec();
        payload.push(0xff);
        tx.payload = Bytes::from(payload);

        if let Ok(addr) = tx.sender() {
            assert_ne!(addr, original_sender);
        }
    }

    #[test]
    fn create_coin_missing_reserve_is_rejected() {
        let variant = TxData::CreateCoin(CreateCoinData {
            name: "Test Coin".to_string(),
            symbol: CoinSymbol::from_ascii(b"TEST"),
            initial_amount: Some(BigUint::from(100u64)),
            initial_reserve: None,
            constant_reserve_ratio: 50,
        });
        let mut tx = Transaction::new_unsigned(1, BigUint::from(1u64), variant, Bytes::new());
        tx.sign(&private_key()).unwrap();
        let encoded = tx.encode();
        let err = decode(&encoded).unwrap_err();
        assert_eq!(err, super::TxError::VariantInvariant("incorrect tx data"));
    }

    #[test]
    fn unknown_type_is_rejected() {
        let mut tx = send_tx(1, 10);
        tx.sign(&private_key()).unwrap();
        tx.tx_type = 0x0a;
        let encoded = rlp::encode(&tx).to_vec();
        let err = decode(&encoded).unwrap_err();
        assert_eq!(err, super::TxError::UnknownType(0x0a));
    }

    #[test]
    fn missing_r_is_rejected() {
        let mut tx = send_tx(1, 10);
        tx.sign(&private_key()).unwrap();
        tx.r = BigUint::zero();
        let encoded = rlp::encode(&tx).to_vec();
        let err = decode(&encoded).unwrap_err();
        assert_eq!(err, super::TxError::MissingField("signature"));
    }

    #[test]
    fn missing_s_is_rejected() {
        let mut tx = send_tx(1, 10);
        tx.sign(&private_key()).unwrap();
        tx.s = BigUint::zero();
        let encoded = rlp::encode(&tx).to_vec();
        let err = decode(&encoded).unwrap_err();
        assert_eq!(err, super::TxError::MissingField("signature"));
    }

    #[test]
    fn gas_is_additive_in_payload() {
        let tx = send_tx(1, 10);
        let base = tx.gas();
        let mut with_payload = tx.clone();
        with_payload.payload = Bytes::from(vec![0u8; 7]);
        assert_eq!(with_payload.gas(), base + 7 * crate::gas::PAYLOAD_BYTE);
    }

    #[test]
    fn oversized_v_is_invalid_signature() {
        let mut tx = send_tx(1, 10);
        tx.sign(&private_key()).unwrap();
        tx.v = BigUint::from(70_000u64);
        assert_eq!(tx.sender().unwrap_err(), super::TxError::InvalidSignature);
    }

    #[test]
    fn declare_candidacy_pubkey_is_tagged_on_decode() {
        use crate::variants::DeclareCandidacyData;
        let bare_key = [5u8; 32];
        let variant = TxData::DeclareCandidacy(DeclareCandidacyData {
            address: Address::zero(),
            pubkey: Bytes::from(bare_key),
            commission: 10,
            stake: BigUint::from(1u64),
        });
        let mut tx = Transaction::new_unsigned(1, BigUint::from(1u64), variant, Bytes::new());
        tx.sign(&private_key()).unwrap();
        let decoded = decode(&tx.encode()).unwrap();
        match decoded.decoded_data() {
            Some(TxData::DeclareCandidacy(data)) => {
                assert_eq!(data.pubkey.len(), 37);
                assert_eq!(&data.pubkey[..5], &minter_tx_primitives::pubkey::ED25519_TYPE_HEADER);
                assert_eq!(&data.pubkey[5..], &bare_key);
            },
            other => panic!("expected DeclareCandidacy, got {other:?}"),
        }
    }
}
