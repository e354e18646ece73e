//! Tip command parser for SoapBox chat rooms.
//!
//! Turns a line of chat text such as `tip alice.base.eth $5` or
//! `send 10 degen to @bob` into a [`TipCommand`] the payment builder can act on.
//!
//! Features:
//! - Ordered surface patterns (`tip`, `send`, `$`, `@`, `⚡` forms)
//! - Currency alias table ("dollars" -> USDC, "ether" -> ETH, ...) with user extras
//! - Recipient classification (basename, `0x` address, handle)
//! - Additive confidence scoring with a fixed acceptance threshold
//!
//! [`parse_tip_command`] keeps the simple contract: any failure is `None`.
//! [`TipParser::evaluate`] runs the same pipeline and reports a [`TipRejection`].

pub mod command;
pub mod currency;
pub mod patterns;
pub mod recipient;
pub mod scoring;
pub mod validate;

pub use command::{TIP_ACTION, TipCommand, TipRejection};
pub use currency::{CurrencyAliases, DEFAULT_CURRENCY, normalize_currency};
pub use recipient::{RecipientKind, is_basename, is_eth_address};
pub use scoring::CONFIDENCE_THRESHOLD;
pub use validate::{is_valid_amount, validate_tip_command};

use std::sync::LazyLock;

use scoring::ScoreInput;

static DEFAULT_PARSER: LazyLock<TipParser> = LazyLock::new(TipParser::new);

/// Parse chat text into a tip command using the built-in alias table.
///
/// Returns `None` for anything that is not a well-formed tip.
pub fn parse_tip_command(input: &str) -> Option<TipCommand> {
    DEFAULT_PARSER.parse(input)
}

/// Tip parser bound to a currency alias table.
#[derive(Debug, Clone, Default)]
pub struct TipParser {
    aliases: CurrencyAliases,
}

impl TipParser {
    /// Parser using only the built-in aliases.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parser with user aliases layered over the built-in table.
    pub fn with_extra_aliases<I, K, V>(aliases: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let aliases = CurrencyAliases::with_extra(aliases);
        log::info!(
            "Tip parser initialized with {} extra currency aliases",
            aliases.extra_len()
        );
        Self { aliases }
    }

    /// The alias table this parser normalizes with.
    pub fn aliases(&self) -> &CurrencyAliases {
        &self.aliases
    }

    /// Parse `input`, discarding the rejection reason.
    pub fn parse(&self, input: &str) -> Option<TipCommand> {
        self.evaluate(input).ok()
    }

    /// Parse `input` and report why it was rejected.
    pub fn evaluate(&self, input: &str) -> Result<TipCommand, TipRejection> {
        let result = self.evaluate_inner(input.trim());
        match &result {
            Ok(command) => log::debug!(
                "Parsed tip command: {command} (confidence {})",
                command.confidence
            ),
            Err(TipRejection::Empty | TipRejection::NoPatternMatch) => {}
            Err(reason) => log::debug!("Rejected tip-like message {input:?}: {reason}"),
        }
        result
    }

    fn evaluate_inner(&self, input: &str) -> Result<TipCommand, TipRejection> {
        if input.is_empty() {
            return Err(TipRejection::Empty);
        }

        let extracted = patterns::match_patterns(input).ok_or(TipRejection::NoPatternMatch)?;
        let (Some(recipient), Some(amount), Some(raw_currency)) =
            (extracted.recipient, extracted.amount, extracted.currency)
        else {
            return Err(TipRejection::MissingComponent);
        };
        if recipient.is_empty() || amount.is_empty() || raw_currency.is_empty() {
            return Err(TipRejection::MissingComponent);
        }

        let currency = self.aliases.normalize(raw_currency);

        if !is_valid_amount(amount) {
            return Err(TipRejection::InvalidAmount(amount.to_string()));
        }

        let kind = RecipientKind::classify(recipient);
        if !kind.accepts(recipient) {
            return Err(TipRejection::InvalidRecipient(recipient.to_string()));
        }

        let confidence = scoring::confidence(
            &ScoreInput {
                recipient,
                amount,
                raw_currency,
                currency: &currency,
            },
            &self.aliases,
        );
        if confidence < CONFIDENCE_THRESHOLD {
            return Err(TipRejection::LowConfidence(confidence));
        }

        Ok(TipCommand {
            action: TIP_ACTION.to_string(),
            recipient: recipient.to_string(),
            amount: amount.to_string(),
            currency,
            confidence,
            is_basename: kind == RecipientKind::Basename,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_whitespace() {
        assert_eq!(parse_tip_command(""), None);
        assert_eq!(parse_tip_command("   "), None);
        assert_eq!(TipParser::new().evaluate("\t\n"), Err(TipRejection::Empty));
    }

    #[test]
    fn test_input_is_trimmed() {
        let cmd = parse_tip_command("   tip alice.base.eth $5  ").unwrap();
        assert_eq!(cmd.recipient, "alice.base.eth");
    }

    #[test]
    fn test_rejection_reasons() {
        let parser = TipParser::new();
        assert_eq!(
            parser.evaluate("hello there"),
            Err(TipRejection::NoPatternMatch)
        );
        assert_eq!(
            parser.evaluate("tip x 0"),
            Err(TipRejection::InvalidAmount("0".to_string()))
        );
        assert_eq!(
            parser.evaluate("tip x 5"),
            Err(TipRejection::InvalidRecipient("x".to_string()))
        );
        assert_eq!(
            parser.evaluate("tip 1000000000000000000 1000000000000000000 eth"),
            Err(TipRejection::InvalidAmount(
                "1000000000000000000".to_string()
            ))
        );
    }

    #[test]
    fn test_extra_aliases_recognized() {
        let parser = TipParser::with_extra_aliases([("brett", "BRETT")]);
        let cmd = parser.parse("tip bob 5 Brett").unwrap();
        assert_eq!(cmd.currency, "BRETT");
        // 40 + 5 + 20 + 15
        assert_eq!(cmd.confidence, 80);

        let plain = parse_tip_command("tip bob 5 Brett").unwrap();
        assert_eq!(plain.currency, "BRETT");
        assert_eq!(plain.confidence, 75);
    }

    #[test]
    fn test_basename_flag() {
        assert!(parse_tip_command("@vitalik.eth 1 eth").unwrap().is_basename);
        assert!(!parse_tip_command("@vitalik 1 eth").unwrap().is_basename);
    }
}
