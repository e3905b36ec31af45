//! Gas accounting: a pure function of the envelope's `type` and payload length.
//!
//! Named `commissions` to match the host chain's own naming for this table (§4.2); these are
//! module-level constants, not configuration — there is nothing here to load from environment
//! or file.

use crate::variants::TxType;

pub const SEND_TX: u64 = 10;
pub const CONVERT_TX: u64 = 100;
pub const CREATE_TX: u64 = 1000;
pub const DECLARE_CANDIDACY_TX: u64 = 10_000;
pub const DELEGATE_TX: u64 = 200;
pub const UNBOND_TX: u64 = 200;
pub const REDEEM_CHECK_TX: u64 = 30;
pub const TOGGLE_CANDIDATE_STATUS: u64 = 100;
pub const PAYLOAD_BYTE: u64 = 2;

/// The base gas cost for a transaction of `tx_type`, before the payload-length surcharge.
#[must_use]
pub const fn base_gas(tx_type: TxType) -> u64 {
    match tx_type {
        TxType::Send => SEND_TX,
        TxType::Convert => CONVERT_TX,
        TxType::CreateCoin => CREATE_TX,
        TxType::DeclareCandidacy => DECLARE_CANDIDACY_TX,
        TxType::Delegate => DELEGATE_TX,
        TxType::Unbond => UNBOND_TX,
        TxType::RedeemCheck => REDEEM_CHECK_TX,
        TxType::SetCandidateOnline | TxType::SetCandidateOffline => TOGGLE_CANDIDATE_STATUS,
    }
}

#[cfg(test)]
mod tests {
    use super::{base_gas, PAYLOAD_BYTE, SEND_TX};
    use crate::variants::TxType;

    #[test]
    fn toggle_variants_share_a_constant() {
        assert_eq!(base_gas(TxType::SetCandidateOnline), base_gas(TxType::SetCandidateOffline));
    }

    #[test]
    fn send_base_gas_matches_table() {
        assert_eq!(base_gas(TxType::Send), SEND_TX);
        assert!(PAYLOAD_BYTE > 0);
    }
}
