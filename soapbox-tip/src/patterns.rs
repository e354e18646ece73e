//! Ordered surface patterns for tip commands.
//!
//! Patterns are tried in table order and the first match wins. Each pattern
//! captures `recipient` and `amount` groups, and either a `currency` group or a
//! default currency implied by the `$` prefix.

use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::currency::DEFAULT_CURRENCY;

/// Unsigned decimal with up to 8 fractional digits.
pub(crate) const AMOUNT: &str = r"[0-9]+(?:\.[0-9]{1,8})?";
/// Dollar amount: up to 2 fractional digits, preceded by a literal `$`.
const DOLLAR_AMOUNT: &str = r"\$(?P<amount>[0-9]+(?:\.[0-9]{1,2})?)";
const RECIPIENT: &str = r"(?P<recipient>\S+)";
const CURRENCY: &str = r"(?P<currency>[a-zA-Z]+)";

/// A single entry of the pattern table.
pub struct TipPattern {
    /// Stable identifier, used in logs and tests.
    pub id: &'static str,
    regex: Regex,
    /// Currency to use when the pattern has no `currency` group.
    default_currency: Option<&'static str>,
}

/// Components pulled out of the input by a matching pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted<'a> {
    pub pattern_id: &'static str,
    pub recipient: Option<&'a str>,
    pub amount: Option<&'a str>,
    /// Currency token as typed, or the pattern's default.
    pub currency: Option<&'a str>,
}

impl TipPattern {
    fn new(id: &'static str, pattern: &str, default_currency: Option<&'static str>) -> Self {
        let regex = Regex::new(pattern)
            .unwrap_or_else(|e| panic!("tip pattern '{id}' is a compile-time constant: {e}"));
        Self {
            id,
            regex,
            default_currency,
        }
    }

    /// Try this pattern against already-trimmed input.
    pub fn extract<'a>(&self, input: &'a str) -> Option<Extracted<'a>> {
        let caps = self.regex.captures(input)?;
        let group = |caps: &Captures<'a>, name: &str| caps.name(name).map(|m| m.as_str());
        Some(Extracted {
            pattern_id: self.id,
            recipient: group(&caps, "recipient"),
            amount: group(&caps, "amount"),
            currency: group(&caps, "currency").or(self.default_currency),
        })
    }
}

static PATTERNS: LazyLock<Vec<TipPattern>> = LazyLock::new(|| {
    let usdc = Some(DEFAULT_CURRENCY);
    vec![
        TipPattern::new(
            "tip_dollar",
            &format!(r"^(?i:tip)\s+{RECIPIENT}\s+{DOLLAR_AMOUNT}$"),
            usdc,
        ),
        TipPattern::new(
            "tip_amount_currency",
            &format!(r"^(?i:tip)\s+{RECIPIENT}\s+(?P<amount>{AMOUNT})\s+{CURRENCY}$"),
            None,
        ),
        TipPattern::new(
            "tip_amount",
            &format!(r"^(?i:tip)\s+{RECIPIENT}\s+(?P<amount>{AMOUNT})$"),
            usdc,
        ),
        TipPattern::new(
            "dollar_to",
            &format!(r"^{DOLLAR_AMOUNT}\s+(?i:to)\s+{RECIPIENT}$"),
            usdc,
        ),
        TipPattern::new(
            "send_amount_currency_to",
            &format!(r"^(?i:send)\s+(?P<amount>{AMOUNT})\s+{CURRENCY}\s+(?i:to)\s+{RECIPIENT}$"),
            None,
        ),
        TipPattern::new(
            "send_dollar_to",
            &format!(r"^(?i:send)\s+{DOLLAR_AMOUNT}\s+(?i:to)\s+{RECIPIENT}$"),
            usdc,
        ),
        TipPattern::new(
            "mention_amount_currency",
            &format!(r"^@{RECIPIENT}\s+(?P<amount>{AMOUNT})\s+{CURRENCY}$"),
            None,
        ),
        TipPattern::new(
            "mention_dollar",
            &format!(r"^@{RECIPIENT}\s+{DOLLAR_AMOUNT}$"),
            usdc,
        ),
        TipPattern::new(
            "zap_amount_currency",
            &format!(r"^⚡\x{{FE0F}}?\s*{RECIPIENT}\s+(?P<amount>{AMOUNT})\s+{CURRENCY}$"),
            None,
        ),
        TipPattern::new(
            "zap_dollar",
            &format!(r"^⚡\x{{FE0F}}?\s*{RECIPIENT}\s+{DOLLAR_AMOUNT}$"),
            usdc,
        ),
    ]
});

/// The pattern table, in priority order.
pub fn patterns() -> &'static [TipPattern] {
    &PATTERNS
}

/// Run the table against trimmed input and return the first match.
pub fn match_patterns(input: &str) -> Option<Extracted<'_>> {
    patterns().iter().find_map(|p| p.extract(input))
}
