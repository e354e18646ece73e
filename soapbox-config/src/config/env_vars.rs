//! `${SOAPBOX_*}` references in currency alias symbols.
//!
//! An alias symbol written as `${SOAPBOX_TIP_TOKEN}` or
//! `${SOAPBOX_TIP_TOKEN:-DEGEN}` is resolved after the YAML is parsed, so a
//! deployment can choose the ticker a chat word maps to without editing the
//! file. Only symbol values are resolved and only `SOAPBOX_` variables are read.

use regex::Regex;
use std::sync::LazyLock;

use super::Config;
use crate::error::ConfigError;

/// Prefix every referenced variable must carry.
pub const ENV_PREFIX: &str = "SOAPBOX_";

/// A whole symbol value of the form `${NAME}` or `${NAME:-DEFAULT}`.
static SYMBOL_REF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\$\{(?P<name>[A-Za-z_][A-Za-z0-9_]*)(?::-(?P<default>[^}]*))?\}$")
        .expect("symbol reference regex is a compile-time constant and must be valid")
});

/// Resolve one alias symbol.
///
/// Plain symbols come back unchanged. A reference resolves to the variable's
/// trimmed value, falling back to the default when the variable is unset or
/// blank.
pub fn resolve_symbol(
    alias: &str,
    symbol: &str,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<String, ConfigError> {
    let Some(caps) = SYMBOL_REF.captures(symbol.trim()) else {
        return Ok(symbol.to_string());
    };
    let name = &caps["name"];
    if !name.starts_with(ENV_PREFIX) {
        return Err(ConfigError::Validation(format!(
            "tip.extra_currency_aliases: alias '{alias}' references ${{{name}}}; \
             only {ENV_PREFIX}* variables are allowed"
        )));
    }

    let from_env = lookup(name)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());
    match from_env.or_else(|| caps.name("default").map(|m| m.as_str().trim().to_string())) {
        Some(resolved) => {
            log::debug!("Alias '{alias}' symbol resolved from ${{{name}}} to {resolved}");
            Ok(resolved)
        }
        None => Err(ConfigError::Validation(format!(
            "tip.extra_currency_aliases: alias '{alias}' references unset ${{{name}}} \
             with no default"
        ))),
    }
}

impl Config {
    /// Replace `${SOAPBOX_*}` references in alias symbols with their values.
    ///
    /// Runs before [`Config::validate`], which then checks the resolved symbols.
    pub fn resolve_symbol_vars(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        for (alias, symbol) in self.tip.extra_currency_aliases.iter_mut() {
            *symbol = resolve_symbol(alias, symbol, &lookup)?;
        }
        Ok(())
    }
}
