//! Raw, string-typed policy carriers as produced by a structured
//! configuration source.
//!
//! A loader hands the table builder an ordered sequence of
//! `(name, RawPolicy)` pairs, already section-scoped. Every field is
//! optional; present fields must parse, and a field that does not parse
//! fails loading with a [`ConfigError`] naming the property and section —
//! malformed configuration never silently defaults.

use serde::Deserialize;
use time::Duration;

use crate::error::{ConfigError, ConfigResult};
use crate::policy::{CachePolicy, ExpiryKind, ExpirySettings};

/// Raw expiration section: string-typed `kind` and `ttl`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RawExpiry {
    /// Expiration strategy: `none`, `absolute` or `sliding` (case-insensitive).
    pub kind: Option<String>,
    /// Time to live: `[days.]hh:mm:ss[.fraction]` or a bare second count.
    pub ttl: Option<String>,
}

/// One raw policy section as read from configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RawPolicy {
    /// Optional expiration sub-section.
    pub expiry: Option<RawExpiry>,
    /// `true` or `false` (case-insensitive).
    pub enabled: Option<String>,
    /// `true` or `false` (case-insensitive).
    pub encrypted: Option<String>,
}

impl RawPolicy {
    /// Converts this raw section into a typed [`CachePolicy`].
    ///
    /// Absent fields take the policy defaults. `section` is the cache name
    /// the section belongs to and appears in error messages.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidProperty`] for the first field that
    /// fails to parse.
    pub fn into_policy(self, section: &str) -> ConfigResult<CachePolicy> {
        let mut policy = CachePolicy::default();

        if let Some(expiry) = self.expiry {
            policy.expiry = expiry.into_settings(section)?;
        }
        if let Some(enabled) = self.enabled {
            policy.enabled = parse_flag(&enabled)
                .ok_or_else(|| ConfigError::invalid_property(section, "enabled"))?;
        }
        if let Some(encrypted) = self.encrypted {
            policy.encrypted = parse_flag(&encrypted)
                .ok_or_else(|| ConfigError::invalid_property(section, "encrypted"))?;
        }

        Ok(policy)
    }
}

impl RawExpiry {
    fn into_settings(self, section: &str) -> ConfigResult<ExpirySettings> {
        let mut settings = ExpirySettings::default();

        if let Some(kind) = self.kind {
            settings.kind =
                parse_kind(&kind).ok_or_else(|| ConfigError::invalid_property(section, "kind"))?;
        }
        if let Some(ttl) = self.ttl {
            settings.ttl =
                parse_ttl(&ttl).ok_or_else(|| ConfigError::invalid_property(section, "ttl"))?;
        }

        Ok(settings)
    }
}

fn parse_kind(value: &str) -> Option<ExpiryKind> {
    match value.trim().to_ascii_lowercase().as_str() {
        "none" => Some(ExpiryKind::None),
        "absolute" => Some(ExpiryKind::Absolute),
        "sliding" => Some(ExpiryKind::Sliding),
        _ => None,
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Parses a TTL string into a [`Duration`].
///
/// Accepted forms:
///
/// - a bare non-negative integer, read as whole seconds (`"300"`);
/// - `[days.]hours:minutes:seconds[.fraction]`, e.g. `"00:05:00"`,
///   `"1.12:00:00"` or `"00:00:00.250"`. Hours are 0-23, minutes and
///   seconds are 0-59, and the fraction is read to nanosecond precision.
///
/// Returns `None` for anything else.
#[must_use]
pub fn parse_ttl(value: &str) -> Option<Duration> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    // Bare integer second count.
    if value.bytes().all(|b| b.is_ascii_digit()) {
        return value.parse::<i64>().ok().map(Duration::seconds);
    }

    let mut parts = value.split(':');
    let head = parts.next()?;
    let minutes_part = parts.next()?;
    let seconds_part = parts.next()?;
    if parts.next().is_some() {
        return None;
    }

    // The leading component may carry a day count: "days.hours".
    let (days, hours_part) = match head.split_once('.') {
        Some((days, hours)) => (parse_component(days, u32::MAX)?, hours),
        None => (0, head),
    };

    let hours = parse_component(hours_part, 23)?;
    let minutes = parse_component(minutes_part, 59)?;

    // The seconds component may carry a fraction: "seconds.fraction".
    let (seconds, nanos) = match seconds_part.split_once('.') {
        Some((seconds, fraction)) => (parse_component(seconds, 59)?, parse_fraction(fraction)?),
        None => (parse_component(seconds_part, 59)?, 0),
    };

    let whole = Duration::days(i64::from(days))
        + Duration::hours(i64::from(hours))
        + Duration::minutes(i64::from(minutes))
        + Duration::seconds(i64::from(seconds));
    Some(whole + Duration::nanoseconds(i64::from(nanos)))
}

fn parse_component(value: &str, max: u32) -> Option<u32> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let parsed = value.parse::<u32>().ok()?;
    (parsed <= max).then_some(parsed)
}

fn parse_fraction(value: &str) -> Option<u32> {
    if value.is_empty() || value.len() > 9 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let parsed = value.parse::<u32>().ok()?;
    // Scale to nanoseconds: ".5" is half a second, ".000000001" one nano.
    Some(parsed * 10u32.pow(9 - value.len() as u32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ttl_bare_seconds() {
        assert_eq!(parse_ttl("300"), Some(Duration::seconds(300)));
        assert_eq!(parse_ttl("0"), Some(Duration::ZERO));
    }

    #[test]
    fn test_parse_ttl_clock_form() {
        assert_eq!(parse_ttl("00:05:00"), Some(Duration::minutes(5)));
        assert_eq!(parse_ttl("23:59:59"), Some(Duration::seconds(86_399)));
    }

    #[test]
    fn test_parse_ttl_with_days_and_fraction() {
        assert_eq!(
            parse_ttl("1.12:00:00"),
            Some(Duration::hours(36)),
        );
        assert_eq!(
            parse_ttl("00:00:00.250"),
            Some(Duration::milliseconds(250)),
        );
        assert_eq!(
            parse_ttl("00:00:01.5"),
            Some(Duration::milliseconds(1500)),
        );
    }

    #[test]
    fn test_parse_ttl_rejects_malformed_input() {
        for bad in [
            "", "abc", "5:00", "00:60:00", "00:00:60", "24:00:00", "-1", "1:2:3:4",
            "00:00:00.0000000001",
        ] {
            assert_eq!(parse_ttl(bad), None, "{bad:?} should not parse");
        }
    }

    #[test]
    fn test_into_policy_defaults_when_fields_absent() {
        let policy = RawPolicy::default().into_policy("users").unwrap();
        assert_eq!(policy, CachePolicy::default());
    }

    #[test]
    fn test_into_policy_parses_all_fields() {
        let raw = RawPolicy {
            expiry: Some(RawExpiry {
                kind: Some("Sliding".into()),
                ttl: Some("00:10:00".into()),
            }),
            enabled: Some("FALSE".into()),
            encrypted: Some("True".into()),
        };
        let policy = raw.into_policy("users").unwrap();
        assert_eq!(policy.expiry.kind, ExpiryKind::Sliding);
        assert_eq!(policy.expiry.ttl, Duration::minutes(10));
        assert!(!policy.enabled);
        assert!(policy.encrypted);
    }

    #[test]
    fn test_into_policy_reports_the_offending_property() {
        let raw = RawPolicy {
            enabled: Some("yes".into()),
            ..RawPolicy::default()
        };
        let err = raw.into_policy("sessions").unwrap_err();
        assert_eq!(err.property(), "enabled");
        assert_eq!(err.section(), "sessions");

        let raw = RawPolicy {
            expiry: Some(RawExpiry {
                kind: Some("eventually".into()),
                ttl: None,
            }),
            ..RawPolicy::default()
        };
        assert_eq!(raw.into_policy("sessions").unwrap_err().property(), "kind");

        let raw = RawPolicy {
            expiry: Some(RawExpiry {
                kind: None,
                ttl: Some("soon".into()),
            }),
            ..RawPolicy::default()
        };
        assert_eq!(raw.into_policy("sessions").unwrap_err().property(), "ttl");

        let raw = RawPolicy {
            encrypted: Some("1".into()),
            ..RawPolicy::default()
        };
        assert_eq!(
            raw.into_policy("sessions").unwrap_err().property(),
            "encrypted"
        );
    }

    #[test]
    fn test_raw_policy_deserializes_from_json() {
        let raw: RawPolicy = serde_json::from_str(
            r#"{"expiry": {"kind": "absolute", "ttl": "00:05:00"}, "encrypted": "true"}"#,
        )
        .unwrap();
        let policy = raw.into_policy("users").unwrap();
        assert_eq!(policy.expiry.kind, ExpiryKind::Absolute);
        assert_eq!(policy.expiry.ttl, Duration::minutes(5));
        assert!(policy.encrypted);
    }
}
