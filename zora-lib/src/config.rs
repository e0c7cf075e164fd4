use log::warn;

use crate::core::locale::Locale;

pub const DEFAULT_ZORA_API_URL: &str = "https://api.zora.co/universal/graphql";
pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";
pub const DEFAULT_HTTP_PORT: u16 = 8080;
pub const DEFAULT_PROXY_URL: &str = "http://localhost:8080/api/zora";

pub fn init() {
    dotenv::dotenv().ok();
}

/**
 * Get an environment variable or a default value
 *
 * # Arguments
 * @param key: &str - The environment variable key
 * @param default: &str - The default value
 *
 * # Returns
 * @return String - The value of the environment variable or the default value
 */
pub fn get_env_var_or_default(key: &str, default: &str) -> String {
    match std::env::var(key) {
        Ok(val) if !val.trim().is_empty() => val,
        _ => {
            warn!("{} not set, using default value: {}", key, default);
            default.to_string()
        }
    }
}

/// Upstream GraphQL endpoint the proxy forwards to.
pub fn zora_api_url() -> String {
    get_env_var_or_default("ZORA_API_URL", DEFAULT_ZORA_API_URL)
}

pub fn http_host() -> String {
    get_env_var_or_default("HTTP_HOST", DEFAULT_HTTP_HOST)
}

pub fn http_port() -> u16 {
    let raw = get_env_var_or_default("HTTP_PORT", &DEFAULT_HTTP_PORT.to_string());
    raw.trim().parse().unwrap_or_else(|_| {
        warn!(
            "HTTP_PORT value {} is not a valid port, using default value: {}",
            raw, DEFAULT_HTTP_PORT
        );
        DEFAULT_HTTP_PORT
    })
}

/// Proxy endpoint used by the cli when `--proxy-url` is not given.
pub fn proxy_url() -> String {
    get_env_var_or_default("ZORA_PROXY_URL", DEFAULT_PROXY_URL)
}

/// Locale used when the caller does not name a supported one.
pub fn default_locale() -> Locale {
    let raw = get_env_var_or_default("LOOKUP_LOCALE", Locale::default().tag());
    raw.parse().unwrap_or_else(|_| {
        warn!("LOOKUP_LOCALE value {} is not supported, using tr", raw);
        Locale::default()
    })
}
