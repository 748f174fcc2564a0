//! # Identifier Newtypes
//!
//! Validated newtypes for the two identifier formats the control plane
//! uses everywhere: ARN-style resource identifiers and short resource
//! names. You cannot pass an [`Arn`] where a [`ResourceName`] is expected,
//! and neither can hold a malformed value.
//!
//! ## Validation
//!
//! Format is checked at construction time and again at deserialization —
//! wire payloads route through the same constructors, so an invalid
//! identifier is rejected at decode time, not silently accepted. These are
//! the only fields in the model layer whose documented constraints are
//! enforced in code; everything else treats constraints as advisory.

use serde::{Deserialize, Serialize};

use crate::error::IdentifierError;

/// Helper macro to implement `Deserialize` for string newtypes that must
/// validate their contents. Deserializes as a plain `String`, then routes
/// through the type's `new()` constructor so that invalid values are
/// rejected at deserialization time — not silently accepted.
macro_rules! impl_validating_deserialize {
    ($ty:ident) => {
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                Self::new(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

/// An ARN-style resource identifier.
///
/// Format: `arn:<partition>:<service>:<region>:<account>:<resource>`,
/// where partition, service, and resource are non-empty. Region and
/// account may be empty for global resources. Maximum length 2048.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Arn(String);

impl_validating_deserialize!(Arn);

impl Arn {
    /// Create an ARN from a string, validating format.
    ///
    /// # Errors
    ///
    /// Returns [`IdentifierError::InvalidArn`] if the string does not
    /// have the six-segment `arn:...` shape or exceeds 2048 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, IdentifierError> {
        let s = value.into();
        Self::validate(&s)?;
        Ok(Self(s))
    }

    fn validate(s: &str) -> Result<(), IdentifierError> {
        if s.len() > 2048 {
            return Err(IdentifierError::InvalidArn(s.to_string()));
        }
        let mut segments = s.splitn(6, ':');
        let scheme = segments.next();
        let partition = segments.next();
        let service = segments.next();
        let region = segments.next();
        let account = segments.next();
        let resource = segments.next();
        match (scheme, partition, service, region, account, resource) {
            (Some("arn"), Some(p), Some(svc), Some(_), Some(_), Some(r))
                if !p.is_empty() && !svc.is_empty() && !r.is_empty() =>
            {
                Ok(())
            }
            _ => Err(IdentifierError::InvalidArn(s.to_string())),
        }
    }

    /// Access the ARN as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the ARN, returning the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Arn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Arn {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Arn {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A short resource name, as used for notebook instances, training jobs,
/// and the other nameable control-plane resources.
///
/// Format: 1–63 characters, ASCII alphanumeric and hyphens, starting and
/// ending with an alphanumeric character (the control plane's
/// `^[a-zA-Z0-9](-*[a-zA-Z0-9])*` rule).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ResourceName(String);

impl_validating_deserialize!(ResourceName);

impl ResourceName {
    /// Create a resource name from a string, validating format.
    ///
    /// # Errors
    ///
    /// Returns [`IdentifierError::InvalidResourceName`] if the string is
    /// empty, longer than 63 characters, contains characters outside
    /// `[A-Za-z0-9-]`, or starts or ends with a hyphen.
    pub fn new(value: impl Into<String>) -> Result<Self, IdentifierError> {
        let s = value.into();
        Self::validate(&s)?;
        Ok(Self(s))
    }

    fn validate(s: &str) -> Result<(), IdentifierError> {
        let bytes = s.as_bytes();
        let valid = !bytes.is_empty()
            && bytes.len() <= 63
            && bytes[0].is_ascii_alphanumeric()
            && bytes[bytes.len() - 1].is_ascii_alphanumeric()
            && bytes
                .iter()
                .all(|b| b.is_ascii_alphanumeric() || *b == b'-');
        if valid {
            Ok(())
        } else {
            Err(IdentifierError::InvalidResourceName(s.to_string()))
        }
    }

    /// Access the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the name, returning the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for ResourceName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for ResourceName {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for ResourceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arn_accepts_well_formed() {
        let arn = Arn::new("arn:aws:kiln:us-east-1:123456789012:training-job/my-job").unwrap();
        assert_eq!(
            arn.as_str(),
            "arn:aws:kiln:us-east-1:123456789012:training-job/my-job"
        );
    }

    #[test]
    fn test_arn_accepts_empty_region_and_account() {
        assert!(Arn::new("arn:aws:iam::123456789012:role/KilnExecution").is_ok());
        assert!(Arn::new("arn:aws:s3:::my-bucket/prefix").is_ok());
    }

    #[test]
    fn test_arn_rejects_malformed() {
        assert!(Arn::new("").is_err());
        assert!(Arn::new("not-an-arn").is_err());
        assert!(Arn::new("arn:aws:kiln").is_err());
        assert!(Arn::new("arn::kiln:us-east-1:1:resource").is_err());
        assert!(Arn::new(format!("arn:aws:kiln:us-east-1:1:{}", "x".repeat(2048))).is_err());
    }

    #[test]
    fn test_arn_deserialize_validates() {
        let ok: Result<Arn, _> =
            serde_json::from_str("\"arn:aws:kiln:us-east-1:123456789012:notebook-instance/nb\"");
        assert!(ok.is_ok());
        let bad: Result<Arn, _> = serde_json::from_str("\"garbage\"");
        assert!(bad.is_err());
    }

    #[test]
    fn test_resource_name_accepts_well_formed() {
        assert!(ResourceName::new("my-training-job-01").is_ok());
        assert!(ResourceName::new("A").is_ok());
        assert!(ResourceName::new("x".repeat(63)).is_ok());
    }

    #[test]
    fn test_resource_name_rejects_malformed() {
        assert!(ResourceName::new("").is_err());
        assert!(ResourceName::new("-leading").is_err());
        assert!(ResourceName::new("trailing-").is_err());
        assert!(ResourceName::new("under_score").is_err());
        assert!(ResourceName::new("spa ce").is_err());
        assert!(ResourceName::new("x".repeat(64)).is_err());
    }

    #[test]
    fn test_resource_name_serde_round_trip() {
        let name = ResourceName::new("nightly-retrain").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"nightly-retrain\"");
        let back: ResourceName = serde_json::from_str(&json).unwrap();
        assert_eq!(back, name);
    }
}
