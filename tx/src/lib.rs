//! Transaction codec, classifier, gas accounting, and signing for the proof-of-stake node's
//! tagged-union transactions.
//!
//! This crate is purely functional (§5 of the design): every operation is a transformation of
//! its inputs into its outputs, plus — for signing — a single call into the curve library with a
//! caller-held private key. There is no shared mutable state, no background work, and nothing
//! to configure.

pub mod envelope;
pub mod error;
pub mod gas;
pub mod variants;

pub use envelope::{decode, Transaction};
pub use error::TxError;
pub use gas::base_gas;
pub use minter_tx_primitives::{base_coin, default_base_coin};
pub use variants::{
    ConvertData, CreateCoinData, DeclareCandidacyData, DelegateData, RedeemCheckData, SendData,
    SetCandidateOfflineData, SetCandidateOnlineData, TxData, TxType, UnbondData,
};
