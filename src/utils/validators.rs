//! Key and target URL validation.
//!
//! Both validators are pure, total functions: they never panic and never
//! perform I/O. Length is always checked before format, so an over-length
//! input is rejected on length alone.

use regex::Regex;
use std::sync::LazyLock;
use url::{Host, Url};

/// Default maximum key length in characters.
pub const DEFAULT_MAX_KEY_LENGTH: usize = 50;

/// Default maximum target URL length in characters.
pub const DEFAULT_MAX_URL_LENGTH: usize = 2048;

/// Schemes a target URL may use.
const ALLOWED_SCHEMES: &[&str] = &["http", "https", "ftp"];

/// The only dot-less host name accepted.
const LOCALHOST: &str = "localhost";

/// Compiled regex for key validation.
static KEY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("key regex is valid"));

/// Validates a short key.
///
/// # Rules
///
/// - Length: 1 to `max_length` characters
/// - Allowed characters: ASCII letters, digits, `_` and `-`
///
/// There is no structural rule beyond that: `"123"`, `"---"` and `"___"` are
/// all valid keys.
///
/// # Examples
///
/// ```
/// use shortener::utils::validators::validate_key;
///
/// assert!(validate_key("wkp", 50));
/// assert!(!validate_key("my.key", 50));
/// assert!(!validate_key(&"a".repeat(51), 50));
/// ```
pub fn validate_key(key: &str, max_length: usize) -> bool {
    if key.is_empty() || key.chars().count() > max_length {
        return false;
    }

    KEY_REGEX.is_match(key)
}

/// Validates a target URL.
///
/// # Rules
///
/// 1. **Length**: 1 to `max_length` characters
/// 2. **Characters**: ASCII only, no whitespace anywhere
/// 3. **Shape**: `scheme://authority[/path][?query][#fragment]`
/// 4. **Scheme**: `http`, `https` or `ftp`, lowercase
/// 5. **Host**: an IP literal, `localhost`, or a dotted domain whose labels are
///    made of letters, digits and hyphens, and start and end alphanumeric
///
/// # Examples
///
/// ```
/// use shortener::utils::validators::validate_url;
///
/// assert!(validate_url("https://example.com", 2048));
/// assert!(validate_url("ftp://files.example.com/a/b", 2048));
/// assert!(!validate_url("javascript:alert(1)", 2048));
/// assert!(!validate_url("https://", 2048));
/// assert!(!validate_url("https://example", 2048));
/// ```
pub fn validate_url(url: &str, max_length: usize) -> bool {
    if url.is_empty() || url.chars().count() > max_length {
        return false;
    }

    if !url.is_ascii() || url.chars().any(|c| c.is_ascii_whitespace() || c.is_control()) {
        return false;
    }

    let Some((raw_scheme, rest)) = url.split_once("://") else {
        return false;
    };

    if !ALLOWED_SCHEMES.contains(&raw_scheme) {
        return false;
    }

    let raw_authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    if raw_authority.is_empty() {
        return false;
    }

    let Some(raw_host) = authority_host(raw_authority) else {
        return false;
    };

    let Ok(parsed) = Url::parse(url) else {
        return false;
    };

    match parsed.host() {
        Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => true,
        Some(Host::Domain(_)) => is_valid_domain(raw_host),
        None => false,
    }
}

/// Extracts the host part of a raw authority (`user:pass@host:port`).
///
/// Returns `None` when the host is empty.
fn authority_host(authority: &str) -> Option<&str> {
    let host_port = authority
        .rsplit_once('@')
        .map_or(authority, |(_, host_port)| host_port);

    let host = if host_port.starts_with('[') {
        let end = host_port.find(']')?;
        &host_port[..=end]
    } else {
        host_port
            .split_once(':')
            .map_or(host_port, |(host, _)| host)
    };

    (!host.is_empty()).then_some(host)
}

/// Checks a domain host as written by the caller.
///
/// The `url` crate accepts hosts such as `a..b` or `.example.com`, so labels
/// are checked on the raw text.
fn is_valid_domain(host: &str) -> bool {
    if host.eq_ignore_ascii_case(LOCALHOST) {
        return true;
    }

    let labels: Vec<&str> = host.split('.').collect();
    if labels.len() < 2 {
        return false;
    }

    labels.iter().all(|label| is_valid_label(label))
}

/// A label is `[A-Za-z0-9]` at both ends with `[A-Za-z0-9-]` in between.
fn is_valid_label(label: &str) -> bool {
    let bytes = label.as_bytes();
    match (bytes.first(), bytes.last()) {
        (Some(first), Some(last)) => {
            first.is_ascii_alphanumeric()
                && last.is_ascii_alphanumeric()
                && bytes.iter().all(|b| b.is_ascii_alphanumeric() || *b == b'-')
        }
        _ => false,
    }
}
