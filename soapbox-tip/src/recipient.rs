//! Recipient classification: basenames, Ethereum addresses, and plain handles.

use regex::Regex;
use std::sync::LazyLock;

/// Shortest accepted handle, in characters.
pub const MIN_HANDLE_LEN: usize = 3;
/// Longest accepted handle, in characters.
pub const MAX_HANDLE_LEN: usize = 50;

/// Multi-character and single-character labels under `.base.eth` or `.eth`.
static BASENAME_PATTERNS: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    [
        r"^[a-zA-Z0-9][a-zA-Z0-9-]*[a-zA-Z0-9]\.base\.eth$",
        r"^[a-zA-Z0-9]\.base\.eth$",
        r"^[a-zA-Z0-9][a-zA-Z0-9-]*[a-zA-Z0-9]\.eth$",
        r"^[a-zA-Z0-9]\.eth$",
    ]
    .map(|p| Regex::new(p).expect("basename regex is a compile-time constant and must be valid"))
});

static ETH_ADDRESS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^0x[a-fA-F0-9]{40}$")
        .expect("address regex is a compile-time constant and must be valid")
});

/// True if `recipient` is a `.base.eth` or `.eth` name.
pub fn is_basename(recipient: &str) -> bool {
    BASENAME_PATTERNS.iter().any(|re| re.is_match(recipient))
}

/// True if `recipient` is `0x` followed by 40 hex digits (checksum is not verified).
pub fn is_eth_address(recipient: &str) -> bool {
    ETH_ADDRESS_PATTERN.is_match(recipient)
}

/// What kind of payee a recipient string names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecipientKind {
    Basename,
    Address,
    /// Anything else: a chat handle, username, or domain-like string.
    Handle,
}

impl RecipientKind {
    /// Classify a recipient string. Basenames win over addresses.
    pub fn classify(recipient: &str) -> Self {
        if is_basename(recipient) {
            RecipientKind::Basename
        } else if is_eth_address(recipient) {
            RecipientKind::Address
        } else {
            RecipientKind::Handle
        }
    }

    /// Whether `recipient`, already classified as `self`, is acceptable as a payee.
    ///
    /// Basenames and addresses always are; handles must be 3 to 50 characters.
    pub fn accepts(self, recipient: &str) -> bool {
        match self {
            RecipientKind::Basename | RecipientKind::Address => true,
            RecipientKind::Handle => {
                (MIN_HANDLE_LEN..=MAX_HANDLE_LEN).contains(&recipient.chars().count())
            }
        }
    }
}
