//! Amount checks and structural validation of tip commands.

use regex::Regex;
use std::sync::LazyLock;

use crate::command::{TIP_ACTION, TipCommand};
use crate::patterns::AMOUNT;
use crate::recipient::{RecipientKind, is_basename};

/// Amounts must stay strictly below this value.
pub const MAX_AMOUNT: f64 = 1e18;

/// The whole string must be a plain decimal, the same shape the patterns capture.
static DECIMAL_AMOUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^{AMOUNT}$"))
        .expect("amount regex is a compile-time constant and must be valid")
});

/// Parse `amount` and return it when it is a plain decimal that is positive
/// and below [`MAX_AMOUNT`].
///
/// Signs, exponents, surrounding whitespace and a bare trailing `.` are rejected.
pub fn amount_value(amount: &str) -> Option<f64> {
    if !DECIMAL_AMOUNT.is_match(amount) {
        return None;
    }
    let value: f64 = amount.parse().ok()?;
    (value.is_finite() && value > 0.0 && value < MAX_AMOUNT).then_some(value)
}

/// True if `amount` is an acceptable tip amount.
pub fn is_valid_amount(amount: &str) -> bool {
    amount_value(amount).is_some()
}

/// Re-check the structural invariants of a command built or received elsewhere.
///
/// Every command returned by [`crate::parse_tip_command`] passes this check.
pub fn validate_tip_command(command: &TipCommand) -> bool {
    if command.action != TIP_ACTION {
        return false;
    }
    if command.recipient.is_empty() || command.amount.is_empty() || command.currency.is_empty() {
        return false;
    }
    if !is_valid_amount(&command.amount) {
        return false;
    }
    if command.is_basename != is_basename(&command.recipient) {
        return false;
    }
    let kind = RecipientKind::classify(&command.recipient);
    if !kind.accepts(&command.recipient) {
        return false;
    }
    command.confidence <= 100
}
