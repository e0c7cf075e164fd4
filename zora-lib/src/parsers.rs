use std::fmt::Display;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::core::locale::Locale;

static WALLET_ADDRESS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^0x[0-9a-fA-F]{40}$").expect("wallet address pattern compiles"));

/// Why a raw input was rejected before any network call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    Empty,
    Malformed(String),
}

impl Display for AddressError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AddressError::Empty => write!(f, "Wallet address is empty"),
            AddressError::Malformed(raw) => write!(f, "Malformed wallet address: {}", raw),
        }
    }
}

impl std::error::Error for AddressError {}

/// A trimmed `0x` + 40 hex digit wallet address. Case is preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WalletAddress(String);

impl WalletAddress {
    pub fn parse(raw: &str) -> Result<Self, AddressError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AddressError::Empty);
        }
        if !WALLET_ADDRESS_RE.is_match(trimmed) {
            return Err(AddressError::Malformed(trimmed.to_string()));
        }
        Ok(WalletAddress(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for WalletAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/**
 * Pick the first supported locale out of an `Accept-Language` header
 *
 * # Arguments
 * @param header: &str - Raw header value, e.g. `en-US,en;q=0.9,tr;q=0.8`
 *
 * # Returns
 * @return Option<Locale> - The first listed language we have messages for
 */
pub fn parse_accept_language(header: &str) -> Option<Locale> {
    header
        .split(',')
        .filter_map(|entry| entry.split(';').next())
        .map(str::trim)
        .filter(|tag| !tag.is_empty() && *tag != "*")
        .find_map(|tag| tag.parse().ok())
}
