//! Parsed tip command and the reasons a message can fail to become one.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::recipient::RecipientKind;
use crate::validate::amount_value;

/// The only action a tip command carries.
pub const TIP_ACTION: &str = "tip";

/// A structured tip intent extracted from chat text.
///
/// Serializes with camelCase keys (`isBasename`) so commands can cross the
/// messaging transport and be re-checked with [`crate::validate_tip_command`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TipCommand {
    /// Always `"tip"` for commands produced by the parser.
    pub action: String,
    /// Basename, `0x` address, or handle.
    pub recipient: String,
    /// Decimal amount exactly as typed (e.g. `"2.50"`).
    pub amount: String,
    /// Normalized ticker symbol.
    pub currency: String,
    /// Heuristic parse reliability, 0 to 100.
    pub confidence: u8,
    pub is_basename: bool,
}

impl TipCommand {
    /// Numeric value of `amount`, if it is a valid tip amount.
    pub fn amount_value(&self) -> Option<f64> {
        amount_value(&self.amount)
    }

    /// Kind of payee named by `recipient`.
    pub fn recipient_kind(&self) -> RecipientKind {
        RecipientKind::classify(&self.recipient)
    }
}

impl fmt::Display for TipCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} to {}",
            self.action, self.amount, self.currency, self.recipient
        )
    }
}

/// Why a piece of text was not accepted as a tip command.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TipRejection {
    #[error("message is empty")]
    Empty,

    #[error("message does not look like a tip command")]
    NoPatternMatch,

    #[error("tip command is missing a recipient, amount, or currency")]
    MissingComponent,

    #[error("invalid tip amount '{0}'")]
    InvalidAmount(String),

    #[error("invalid tip recipient '{0}'")]
    InvalidRecipient(String),

    #[error("tip confidence {0} is below the acceptance threshold")]
    LowConfidence(u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TipCommand {
        TipCommand {
            action: TIP_ACTION.to_string(),
            recipient: "alice.base.eth".to_string(),
            amount: "2.50".to_string(),
            currency: "USDC".to_string(),
            confidence: 100,
            is_basename: true,
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(sample().to_string(), "tip 2.50 USDC to alice.base.eth");
    }

    #[test]
    fn test_amount_value() {
        assert_eq!(sample().amount_value(), Some(2.5));
        let mut zero = sample();
        zero.amount = "0".to_string();
        assert_eq!(zero.amount_value(), None);
    }

    #[test]
    fn test_recipient_kind() {
        assert_eq!(sample().recipient_kind(), RecipientKind::Basename);
        let mut handle = sample();
        handle.recipient = "bob".to_string();
        assert_eq!(handle.recipient_kind(), RecipientKind::Handle);
    }

    #[test]
    fn test_serialized_keys_are_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["isBasename"], true);
        assert_eq!(json["action"], "tip");
        assert_eq!(json["confidence"], 100);
        assert!(json.get("is_basename").is_none());
    }

    #[test]
    fn test_rejection_messages() {
        assert_eq!(
            TipRejection::InvalidAmount("0".to_string()).to_string(),
            "invalid tip amount '0'"
        );
        assert_eq!(
            TipRejection::LowConfidence(20).to_string(),
            "tip confidence 20 is below the acceptance threshold"
        );
    }
}
