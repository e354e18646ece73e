//! Currency alias table.
//!
//! Maps the words people actually type in chat ("dollars", "eth", "gm") to the
//! ticker symbols the payment builder understands. Lookups are case-insensitive;
//! unknown tokens pass through uppercased.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Currency used when a pattern carries a `$` amount and no explicit token.
pub const DEFAULT_CURRENCY: &str = "USDC";

/// Built-in aliases as `(lowercase alias, canonical symbol)` pairs.
///
/// Every canonical symbol also appears lowercased as its own alias so that
/// normalizing an already-normalized symbol is a no-op.
pub const BUILT_IN_ALIASES: &[(&str, &str)] = &[
    // Dollar-pegged
    ("usdc", "USDC"),
    ("usd", "USDC"),
    ("dollar", "USDC"),
    ("dollars", "USDC"),
    ("buck", "USDC"),
    ("bucks", "USDC"),
    ("usdt", "USDT"),
    ("tether", "USDT"),
    ("dai", "DAI"),
    // Ether
    ("eth", "ETH"),
    ("ether", "ETH"),
    ("ethereum", "ETH"),
    ("weth", "WETH"),
    // Bitcoin
    ("btc", "BTC"),
    ("bitcoin", "BTC"),
    ("cbbtc", "CBBTC"),
    // Solana
    ("sol", "SOL"),
    ("solana", "SOL"),
    // Community tokens
    ("degen", "DEGEN"),
    ("gm", "GM"),
    ("higher", "HIGHER"),
    ("op", "OP"),
    ("optimism", "OP"),
];

static BUILT_IN_TABLE: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| BUILT_IN_ALIASES.iter().copied().collect());

/// The process-wide built-in alias table.
pub(crate) fn built_in_table() -> &'static HashMap<&'static str, &'static str> {
    &BUILT_IN_TABLE
}

/// Alias table owned by a parser: built-in entries plus optional user extras.
#[derive(Debug, Clone, Default)]
pub struct CurrencyAliases {
    /// User aliases keyed by lowercase alias. Never shadows a built-in key.
    extra: HashMap<String, String>,
}

impl CurrencyAliases {
    /// Table with only the built-in aliases.
    pub fn built_in() -> Self {
        Self::default()
    }

    /// Layer user aliases over the built-in table.
    ///
    /// Keys are lowercased and symbols uppercased. Entries whose key already
    /// exists in the built-in table are skipped with a warning so that
    /// canonical symbols cannot be redirected.
    pub fn with_extra<I, K, V>(aliases: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut extra = HashMap::new();
        for (alias, symbol) in aliases {
            let key = alias.as_ref().trim().to_lowercase();
            let symbol = symbol.as_ref().trim().to_uppercase();
            if key.is_empty() || symbol.is_empty() {
                continue;
            }
            if built_in_table().contains_key(key.as_str()) {
                log::warn!("Ignoring currency alias '{key}': built-in alias takes precedence");
                continue;
            }
            extra.insert(key, symbol);
        }
        Self { extra }
    }

    /// Look up a token (any case). Returns the canonical symbol if known.
    pub fn lookup(&self, token: &str) -> Option<&str> {
        let key = token.to_lowercase();
        if let Some(symbol) = built_in_table().get(key.as_str()) {
            return Some(*symbol);
        }
        self.extra.get(&key).map(String::as_str)
    }

    /// True when the token (any case) is a key of the table.
    pub fn is_known(&self, token: &str) -> bool {
        self.lookup(token).is_some()
    }

    /// Normalize a currency token to its ticker symbol.
    pub fn normalize(&self, token: &str) -> String {
        match self.lookup(token) {
            Some(symbol) => symbol.to_string(),
            None => token.to_uppercase(),
        }
    }

    /// All entries, sorted by alias.
    pub fn entries(&self) -> Vec<(String, String)> {
        let mut entries: Vec<(String, String)> = built_in_table()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .chain(self.extra.iter().map(|(k, v)| (k.clone(), v.clone())))
            .collect();
        entries.sort();
        entries
    }

    /// Number of user-supplied aliases in effect.
    pub fn extra_len(&self) -> usize {
        self.extra.len()
    }
}

/// Normalize a currency token using the built-in table only.
pub fn normalize_currency(token: &str) -> String {
    match built_in_table().get(token.to_lowercase().as_str()) {
        Some(symbol) => symbol.to_string(),
        None => token.to_uppercase(),
    }
}
