//! Utility functions: tracing setup and lenient integer parsing.

use tracing_subscriber::{EnvFilter, fmt};

/// Filter used when `RUST_LOG` is unset; request spans come from tower-http at debug.
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

/// Install the global subscriber. `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
  let filter =
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
  fmt()
    .with_env_filter(filter)
    .with_target(true)
    .compact()
    .init();
}

/// Read a base-10 integer from the start of `s`, ignoring anything after it.
///
/// Leading whitespace and one sign are allowed. `"12abc"` gives `Some(12)`,
/// `"abc"` gives `None`.
pub fn parse_int_prefix(s: &str) -> Option<i64> {
  let s = s.trim_start();
  let (sign, rest) = match s.as_bytes().first() {
    Some(b'-') => (-1, &s[1..]),
    Some(b'+') => (1, &s[1..]),
    _ => (1, s),
  };
  let end = rest
    .find(|c: char| !c.is_ascii_digit())
    .unwrap_or(rest.len());
  if end == 0 {
    return None;
  }
  rest[..end].parse::<i64>().ok().map(|n| sign * n)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_filter_is_valid() {
    assert!(EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
  }

  #[test]
  fn parses_prefix() {
    assert_eq!(parse_int_prefix("42"), Some(42));
    assert_eq!(parse_int_prefix("  7"), Some(7));
    assert_eq!(parse_int_prefix("12abc"), Some(12));
    assert_eq!(parse_int_prefix("3.9"), Some(3));
    assert_eq!(parse_int_prefix("-4"), Some(-4));
    assert_eq!(parse_int_prefix("+5"), Some(5));
  }

  #[test]
  fn rejects_non_numeric() {
    assert_eq!(parse_int_prefix(""), None);
    assert_eq!(parse_int_prefix("abc"), None);
    assert_eq!(parse_int_prefix("-"), None);
    assert_eq!(parse_int_prefix("99999999999999999999"), None);
  }
}
