//! # Probe Target Model
//!
//! A [`Target`] is the host/port pair a reachability probe connects to.
//!
//! Edits arrive as a [`TargetCandidate`], which carries the port exactly as
//! entered so out-of-range values can be rejected instead of silently
//! truncated. Only [`TargetCandidate::validate`] produces a `Target` from user
//! input, so every `Target` in circulation has a port in `1..=65535`.
//!
//! The host is never inspected. Hostnames, IPv4 and IPv6 literals and even the
//! empty string are accepted; the connect attempt is the only judge.

use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

pub const DEFAULT_HOST: &str = "google.com";
pub const DEFAULT_PORT: u16 = 80;

const MIN_PORT: u16 = 1;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Target {
    pub host: String,
    pub port: u16,
}

impl Target {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

impl Default for Target {
    fn default() -> Self {
        Self::new(DEFAULT_HOST, DEFAULT_PORT)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.host.contains(':') {
            write!(f, "[{}]:{}", self.host, self.port)
        } else {
            write!(f, "{}:{}", self.host, self.port)
        }
    }
}

impl FromStr for Target {
    type Err = String;

    /// Parses `host:port`.
    ///
    /// Supported formats:
    /// * **Hostname**: "example.com:443".
    /// * **IPv4**: "127.0.0.1:8080".
    /// * **IPv6**: "[::1]:22" (brackets are required).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (host, port_str) = split_host_port(s)?;

        let port: i64 = port_str
            .parse()
            .map_err(|e| format!("invalid port '{port_str}': {e}"))?;

        TargetCandidate::new(host, port)
            .validate()
            .map_err(|e| e.to_string())
    }
}

/// Splits "host:port" or "[v6]:port" into its parts.
fn split_host_port(s: &str) -> Result<(&str, &str), String> {
    if let Some(rest) = s.strip_prefix('[') {
        let Some((host, port)) = rest.split_once("]:") else {
            return Err(format!("invalid bracketed target: {s}"));
        };
        return Ok((host, port));
    }

    let Some((host, port)) = s.rsplit_once(':') else {
        return Err(format!("missing port in target: {s}"));
    };

    if host.contains(':') {
        return Err(format!("IPv6 targets must be written as [addr]:port: {s}"));
    }

    Ok((host, port))
}

/// Checks that a raw port value is usable as a TCP destination port.
pub fn validate_port(port: i64) -> Result<u16, ValidationError> {
    match u16::try_from(port) {
        Ok(valid) if valid >= MIN_PORT => Ok(valid),
        _ => Err(ValidationError::PortOutOfRange(port)),
    }
}

/// An edited, not yet validated target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TargetCandidate {
    pub host: String,
    pub port: i64,
}

impl TargetCandidate {
    pub fn new(host: impl Into<String>, port: i64) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Builds a candidate from raw form text.
    ///
    /// A port field that is empty or not a number reads as `0`, which then
    /// fails validation like any other out-of-range value.
    pub fn from_fields(host: &str, port: &str) -> Self {
        let port: i64 = port.trim().parse().unwrap_or(0);
        Self::new(host, port)
    }

    pub fn validate(self) -> Result<Target, ValidationError> {
        let port: u16 = validate_port(self.port)?;
        Ok(Target {
            host: self.host,
            port,
        })
    }
}

impl From<&Target> for TargetCandidate {
    fn from(target: &Target) -> Self {
        Self::new(target.host.clone(), i64::from(target.port))
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_port_bounds() {
        assert_eq!(validate_port(1), Ok(1));
        assert_eq!(validate_port(80), Ok(80));
        assert_eq!(validate_port(65535), Ok(65535));

        // --- Error Cases ---

        assert_eq!(validate_port(0), Err(ValidationError::PortOutOfRange(0)));
        assert_eq!(validate_port(-1), Err(ValidationError::PortOutOfRange(-1)));
        assert_eq!(
            validate_port(65536),
            Err(ValidationError::PortOutOfRange(65536))
        );
        assert_eq!(
            validate_port(70000),
            Err(ValidationError::PortOutOfRange(70000))
        );
    }

    #[test]
    fn test_default_target() {
        let target = Target::default();
        assert_eq!(target.host, "google.com");
        assert_eq!(target.port, 80);
    }

    #[test]
    fn test_candidate_accepts_any_host() {
        let target = TargetCandidate::new("", 443).validate().unwrap();
        assert_eq!(target, Target::new("", 443));

        let target = TargetCandidate::new("not a hostname", 1).validate().unwrap();
        assert_eq!(target.host, "not a hostname");
    }

    #[test]
    fn test_candidate_from_fields() {
        assert_eq!(
            TargetCandidate::from_fields("example.com", " 8080 "),
            TargetCandidate::new("example.com", 8080)
        );

        // Non-numeric and empty ports collapse to zero
        assert_eq!(TargetCandidate::from_fields("a", "http").port, 0);
        assert_eq!(TargetCandidate::from_fields("a", "").port, 0);
        assert!(TargetCandidate::from_fields("a", "").validate().is_err());

        // Large values survive until validation rejects them
        assert_eq!(TargetCandidate::from_fields("a", "70000").port, 70000);
    }

    #[test]
    fn test_display() {
        assert_eq!(Target::new("google.com", 80).to_string(), "google.com:80");
        assert_eq!(Target::new("::1", 22).to_string(), "[::1]:22");
    }

    #[test]
    fn test_from_str_full_parsing() {
        assert_eq!(
            Target::from_str("example.com:443"),
            Ok(Target::new("example.com", 443))
        );
        assert_eq!(
            Target::from_str("127.0.0.1:8080"),
            Ok(Target::new("127.0.0.1", 8080))
        );
        assert_eq!(Target::from_str("[::1]:22"), Ok(Target::new("::1", 22)));
        assert_eq!(Target::from_str(":80"), Ok(Target::new("", 80)));

        // Test invalid
        assert!(Target::from_str("example.com").is_err());
        assert!(Target::from_str("example.com:0").is_err());
        assert!(Target::from_str("example.com:70000").is_err());
        assert!(Target::from_str("example.com:http").is_err());
        assert!(Target::from_str("::1:22").is_err());
        assert!(Target::from_str("[::1]22").is_err());
    }
}
