use std::{fmt::Display, str::FromStr};

/// Viewer locale for every user-facing string and for number formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Tr,
    En,
}

/// Static text of the lookup page and its messages for one locale.
#[derive(Debug)]
pub struct Messages {
    pub title: &'static str,
    pub description: &'static str,
    pub placeholder: &'static str,
    pub button_idle: &'static str,
    pub button_busy: &'static str,
    pub error_prefix: &'static str,
    pub result_heading: &'static str,
    pub empty_address: &'static str,
    pub invalid_address: &'static str,
    pub graphql_prefix: &'static str,
    pub unknown_graphql_error: &'static str,
    pub request_failed: &'static str,
    pub unexpected_error: &'static str,
}

const TR: Messages = Messages {
    title: "Zora Token Airdrop",
    description: "Cüzdan adresinizi giriniz",
    placeholder: "Cüzdan Adresinizi Girin (örn: 0x...)",
    button_idle: "Sorgula",
    button_busy: "Sorgulanıyor...",
    error_prefix: "Hata:",
    result_heading: "Toplam Kazanılan Token:",
    empty_address: "Lütfen bir cüzdan adresi girin.",
    invalid_address: "Lütfen geçerli bir Ethereum cüzdan adresi girin (örn: 0x...).",
    graphql_prefix: "GraphQL hatası:",
    unknown_graphql_error: "Bilinmeyen GraphQL hatası (proxy'den)",
    request_failed: "API isteği başarısız oldu:",
    unexpected_error: "Token bilgisi alınırken beklenmeyen bir hata oluştu.",
};

const EN: Messages = Messages {
    title: "Zora Token Airdrop",
    description: "Enter your wallet address",
    placeholder: "Enter your wallet address (e.g. 0x...)",
    button_idle: "Look up",
    button_busy: "Looking up...",
    error_prefix: "Error:",
    result_heading: "Total Tokens Earned:",
    empty_address: "Please enter a wallet address.",
    invalid_address: "Please enter a valid Ethereum wallet address (e.g. 0x...).",
    graphql_prefix: "GraphQL error:",
    unknown_graphql_error: "Unknown GraphQL error (from proxy)",
    request_failed: "API request failed:",
    unexpected_error: "An unexpected error occurred while fetching token information.",
};

impl Locale {
    pub fn messages(&self) -> &'static Messages {
        match self {
            Locale::Tr => &TR,
            Locale::En => &EN,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Locale::Tr => "tr",
            Locale::En => "en",
        }
    }

    /// Thousands separator and decimal mark.
    pub fn separators(&self) -> (char, char) {
        match self {
            Locale::Tr => ('.', ','),
            Locale::En => (',', '.'),
        }
    }
}

impl Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnsupportedLocale(pub String);

impl Display for UnsupportedLocale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unsupported locale: {}", self.0)
    }
}

impl std::error::Error for UnsupportedLocale {}

impl FromStr for Locale {
    type Err = UnsupportedLocale;

    /// Accepts a bare language (`tr`) or a full tag (`en-US`, `tr_TR`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let language = s
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match language.as_str() {
            "tr" => Ok(Locale::Tr),
            "en" => Ok(Locale::En),
            _ => Err(UnsupportedLocale(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_language_tags() {
        assert_eq!("tr".parse(), Ok(Locale::Tr));
        assert_eq!("tr-TR".parse(), Ok(Locale::Tr));
        assert_eq!("EN_us".parse(), Ok(Locale::En));
        assert!("de-DE".parse::<Locale>().is_err());
        assert!("".parse::<Locale>().is_err());
    }

    #[test]
    fn default_is_turkish() {
        assert_eq!(Locale::default(), Locale::Tr);
        assert_eq!(Locale::default().messages().button_idle, "Sorgula");
        assert_eq!(Locale::En.messages().button_busy, "Looking up...");
    }
}
