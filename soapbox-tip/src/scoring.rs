//! Confidence scoring for extracted tip components.
//!
//! Additive heuristic capped at 100. Commands scoring below
//! [`CONFIDENCE_THRESHOLD`] are rejected.

use crate::currency::CurrencyAliases;
use crate::recipient::{is_basename, is_eth_address};
use crate::validate::is_valid_amount;

/// Minimum score for a parse to be accepted.
pub const CONFIDENCE_THRESHOLD: u8 = 30;

const ALL_COMPONENTS: u32 = 40;
const RECIPIENT_BASENAME: u32 = 25;
const RECIPIENT_ADDRESS: u32 = 20;
const RECIPIENT_DOMAIN_LIKE: u32 = 10;
const RECIPIENT_OTHER: u32 = 5;
const AMOUNT_VALID: u32 = 20;
const CURRENCY_KNOWN: u32 = 15;
const CURRENCY_PLAUSIBLE: u32 = 10;
const CURRENCY_OTHER: u32 = 5;

/// Components as extracted by a pattern, before normalization.
#[derive(Debug, Clone, Copy)]
pub struct ScoreInput<'a> {
    pub recipient: &'a str,
    pub amount: &'a str,
    /// Currency token as typed (or the pattern default).
    pub raw_currency: &'a str,
    /// Currency after alias normalization.
    pub currency: &'a str,
}

/// Score a set of extracted components.
pub fn confidence(input: &ScoreInput<'_>, aliases: &CurrencyAliases) -> u8 {
    let mut score: u32 = 0;

    if !input.recipient.is_empty() && !input.amount.is_empty() && !input.currency.is_empty() {
        score += ALL_COMPONENTS;
    }

    score += if is_basename(input.recipient) {
        RECIPIENT_BASENAME
    } else if is_eth_address(input.recipient) {
        RECIPIENT_ADDRESS
    } else if input.recipient.contains('.') {
        RECIPIENT_DOMAIN_LIKE
    } else {
        RECIPIENT_OTHER
    };

    if is_valid_amount(input.amount) {
        score += AMOUNT_VALID;
    }

    score += if aliases.is_known(input.raw_currency) {
        CURRENCY_KNOWN
    } else if (2..=10).contains(&input.currency.chars().count()) {
        CURRENCY_PLAUSIBLE
    } else {
        CURRENCY_OTHER
    };

    score.min(100) as u8
}
